//! Names of the event types the platform sends (API version 2020-08-27).
//!
//! Compare against [`Event::event_type`](super::Event::event_type).

// account
pub const ACCOUNT_UPDATED: &str = "account.updated";
pub const ACCOUNT_APPLICATION_AUTHORIZED: &str = "account.application.authorized";
pub const ACCOUNT_APPLICATION_DEAUTHORIZED: &str = "account.application.deauthorized";
pub const ACCOUNT_EXTERNAL_ACCOUNT_CREATED: &str = "account.external_account.created";
pub const ACCOUNT_EXTERNAL_ACCOUNT_DELETED: &str = "account.external_account.deleted";
pub const ACCOUNT_EXTERNAL_ACCOUNT_UPDATED: &str = "account.external_account.updated";

// application_fee
pub const APPLICATION_FEE_CREATED: &str = "application_fee.created";
pub const APPLICATION_FEE_REFUNDED: &str = "application_fee.refunded";
pub const APPLICATION_FEE_REFUND_UPDATED: &str = "application_fee.refund.updated";

// balance
pub const BALANCE_AVAILABLE: &str = "balance.available";

// billing_portal
pub const BILLING_PORTAL_CONFIGURATION_CREATED: &str = "billing_portal.configuration.created";
pub const BILLING_PORTAL_CONFIGURATION_UPDATED: &str = "billing_portal.configuration.updated";

// capability
pub const CAPABILITY_UPDATED: &str = "capability.updated";

// charge
pub const CHARGE_CAPTURED: &str = "charge.captured";
pub const CHARGE_EXPIRED: &str = "charge.expired";
pub const CHARGE_FAILED: &str = "charge.failed";
pub const CHARGE_PENDING: &str = "charge.pending";
pub const CHARGE_REFUNDED: &str = "charge.refunded";
pub const CHARGE_SUCCEEDED: &str = "charge.succeeded";
pub const CHARGE_UPDATED: &str = "charge.updated";
pub const CHARGE_DISPUTE_CLOSED: &str = "charge.dispute.closed";
pub const CHARGE_DISPUTE_CREATED: &str = "charge.dispute.created";
pub const CHARGE_DISPUTE_FUNDS_REINSTATED: &str = "charge.dispute.funds_reinstated";
pub const CHARGE_DISPUTE_FUNDS_WITHDRAWN: &str = "charge.dispute.funds_withdrawn";
pub const CHARGE_DISPUTE_UPDATED: &str = "charge.dispute.updated";
pub const CHARGE_REFUND_UPDATED: &str = "charge.refund.updated";

// checkout
pub const CHECKOUT_SESSION_ASYNC_PAYMENT_FAILED: &str = "checkout.session.async_payment_failed";
pub const CHECKOUT_SESSION_ASYNC_PAYMENT_SUCCEEDED: &str = "checkout.session.async_payment_succeeded";
pub const CHECKOUT_SESSION_COMPLETED: &str = "checkout.session.completed";

// coupon
pub const COUPON_CREATED: &str = "coupon.created";
pub const COUPON_DELETED: &str = "coupon.deleted";
pub const COUPON_UPDATED: &str = "coupon.updated";

// credit_note
pub const CREDIT_NOTE_CREATED: &str = "credit_note.created";
pub const CREDIT_NOTE_UPDATED: &str = "credit_note.updated";
pub const CREDIT_NOTE_VOIDED: &str = "credit_note.voided";

// customer
pub const CUSTOMER_CREATED: &str = "customer.created";
pub const CUSTOMER_DELETED: &str = "customer.deleted";
pub const CUSTOMER_UPDATED: &str = "customer.updated";
pub const CUSTOMER_DISCOUNT_CREATED: &str = "customer.discount.created";
pub const CUSTOMER_DISCOUNT_DELETED: &str = "customer.discount.deleted";
pub const CUSTOMER_DISCOUNT_UPDATED: &str = "customer.discount.updated";
pub const CUSTOMER_SOURCE_CREATED: &str = "customer.source.created";
pub const CUSTOMER_SOURCE_DELETED: &str = "customer.source.deleted";
pub const CUSTOMER_SOURCE_EXPIRING: &str = "customer.source.expiring";
pub const CUSTOMER_SOURCE_UPDATED: &str = "customer.source.updated";
pub const CUSTOMER_SUBSCRIPTION_CREATED: &str = "customer.subscription.created";
pub const CUSTOMER_SUBSCRIPTION_DELETED: &str = "customer.subscription.deleted";
pub const CUSTOMER_SUBSCRIPTION_PENDING_UPDATE_APPLIED: &str = "customer.subscription.pending_update_applied";
pub const CUSTOMER_SUBSCRIPTION_PENDING_UPDATE_EXPIRED: &str = "customer.subscription.pending_update_expired";
pub const CUSTOMER_SUBSCRIPTION_TRIAL_WILL_END: &str = "customer.subscription.trial_will_end";
pub const CUSTOMER_SUBSCRIPTION_UPDATED: &str = "customer.subscription.updated";
pub const CUSTOMER_TAX_ID_CREATED: &str = "customer.tax_id.created";
pub const CUSTOMER_TAX_ID_DELETED: &str = "customer.tax_id.deleted";
pub const CUSTOMER_TAX_ID_UPDATED: &str = "customer.tax_id.updated";

// file
pub const FILE_CREATED: &str = "file.created";

// invoice
pub const INVOICE_CREATED: &str = "invoice.created";
pub const INVOICE_DELETED: &str = "invoice.deleted";
pub const INVOICE_FINALIZATION_FAILED: &str = "invoice.finalization_failed";
pub const INVOICE_FINALIZED: &str = "invoice.finalized";
pub const INVOICE_MARKED_UNCOLLECTIBLE: &str = "invoice.marked_uncollectible";
pub const INVOICE_PAID: &str = "invoice.paid";
pub const INVOICE_PAYMENT_ACTION_REQUIRED: &str = "invoice.payment_action_required";
pub const INVOICE_PAYMENT_FAILED: &str = "invoice.payment_failed";
pub const INVOICE_PAYMENT_SUCCEEDED: &str = "invoice.payment_succeeded";
pub const INVOICE_SENT: &str = "invoice.sent";
pub const INVOICE_UPCOMING: &str = "invoice.upcoming";
pub const INVOICE_UPDATED: &str = "invoice.updated";
pub const INVOICE_VOIDED: &str = "invoice.voided";

// invoiceitem
pub const INVOICEITEM_CREATED: &str = "invoiceitem.created";
pub const INVOICEITEM_DELETED: &str = "invoiceitem.deleted";
pub const INVOICEITEM_UPDATED: &str = "invoiceitem.updated";

// issuing_authorization
pub const ISSUING_AUTHORIZATION_CREATED: &str = "issuing_authorization.created";
pub const ISSUING_AUTHORIZATION_REQUEST: &str = "issuing_authorization.request";
pub const ISSUING_AUTHORIZATION_UPDATED: &str = "issuing_authorization.updated";

// issuing_card
pub const ISSUING_CARD_CREATED: &str = "issuing_card.created";
pub const ISSUING_CARD_UPDATED: &str = "issuing_card.updated";

// issuing_cardholder
pub const ISSUING_CARDHOLDER_CREATED: &str = "issuing_cardholder.created";
pub const ISSUING_CARDHOLDER_UPDATED: &str = "issuing_cardholder.updated";

// issuing_dispute
pub const ISSUING_DISPUTE_CLOSED: &str = "issuing_dispute.closed";
pub const ISSUING_DISPUTE_CREATED: &str = "issuing_dispute.created";
pub const ISSUING_DISPUTE_FUNDS_REINSTATED: &str = "issuing_dispute.funds_reinstated";
pub const ISSUING_DISPUTE_SUBMITTED: &str = "issuing_dispute.submitted";
pub const ISSUING_DISPUTE_UPDATED: &str = "issuing_dispute.updated";

// issuing_transaction
pub const ISSUING_TRANSACTION_CREATED: &str = "issuing_transaction.created";
pub const ISSUING_TRANSACTION_UPDATED: &str = "issuing_transaction.updated";

// mandate
pub const MANDATE_UPDATED: &str = "mandate.updated";

// order
pub const ORDER_CREATED: &str = "order.created";
pub const ORDER_PAYMENT_FAILED: &str = "order.payment_failed";
pub const ORDER_PAYMENT_SUCCEEDED: &str = "order.payment_succeeded";
pub const ORDER_UPDATED: &str = "order.updated";

// order_return
pub const ORDER_RETURN_CREATED: &str = "order_return.created";

// payment_intent
pub const PAYMENT_INTENT_AMOUNT_CAPTURABLE_UPDATED: &str = "payment_intent.amount_capturable_updated";
pub const PAYMENT_INTENT_CANCELED: &str = "payment_intent.canceled";
pub const PAYMENT_INTENT_CREATED: &str = "payment_intent.created";
pub const PAYMENT_INTENT_PAYMENT_FAILED: &str = "payment_intent.payment_failed";
pub const PAYMENT_INTENT_PROCESSING: &str = "payment_intent.processing";
pub const PAYMENT_INTENT_REQUIRES_ACTION: &str = "payment_intent.requires_action";
pub const PAYMENT_INTENT_SUCCEEDED: &str = "payment_intent.succeeded";

// payment_method
pub const PAYMENT_METHOD_ATTACHED: &str = "payment_method.attached";
pub const PAYMENT_METHOD_AUTOMATICALLY_UPDATED: &str = "payment_method.automatically_updated";
pub const PAYMENT_METHOD_DETACHED: &str = "payment_method.detached";
pub const PAYMENT_METHOD_UPDATED: &str = "payment_method.updated";

// payout
pub const PAYOUT_CANCELED: &str = "payout.canceled";
pub const PAYOUT_CREATED: &str = "payout.created";
pub const PAYOUT_FAILED: &str = "payout.failed";
pub const PAYOUT_PAID: &str = "payout.paid";
pub const PAYOUT_UPDATED: &str = "payout.updated";

// person
pub const PERSON_CREATED: &str = "person.created";
pub const PERSON_DELETED: &str = "person.deleted";
pub const PERSON_UPDATED: &str = "person.updated";

// plan
pub const PLAN_CREATED: &str = "plan.created";
pub const PLAN_DELETED: &str = "plan.deleted";
pub const PLAN_UPDATED: &str = "plan.updated";

// price
pub const PRICE_CREATED: &str = "price.created";
pub const PRICE_DELETED: &str = "price.deleted";
pub const PRICE_UPDATED: &str = "price.updated";

// product
pub const PRODUCT_CREATED: &str = "product.created";
pub const PRODUCT_DELETED: &str = "product.deleted";
pub const PRODUCT_UPDATED: &str = "product.updated";

// promotion_code
pub const PROMOTION_CODE_CREATED: &str = "promotion_code.created";
pub const PROMOTION_CODE_UPDATED: &str = "promotion_code.updated";

// radar
pub const RADAR_EARLY_FRAUD_WARNING_CREATED: &str = "radar.early_fraud_warning.created";
pub const RADAR_EARLY_FRAUD_WARNING_UPDATED: &str = "radar.early_fraud_warning.updated";

// recipient
pub const RECIPIENT_CREATED: &str = "recipient.created";
pub const RECIPIENT_DELETED: &str = "recipient.deleted";
pub const RECIPIENT_UPDATED: &str = "recipient.updated";

// reporting
pub const REPORTING_REPORT_RUN_FAILED: &str = "reporting.report_run.failed";
pub const REPORTING_REPORT_RUN_SUCCEEDED: &str = "reporting.report_run.succeeded";
pub const REPORTING_REPORT_TYPE_UPDATED: &str = "reporting.report_type.updated";

// review
pub const REVIEW_CLOSED: &str = "review.closed";
pub const REVIEW_OPENED: &str = "review.opened";

// setup_intent
pub const SETUP_INTENT_CANCELED: &str = "setup_intent.canceled";
pub const SETUP_INTENT_CREATED: &str = "setup_intent.created";
pub const SETUP_INTENT_REQUIRES_ACTION: &str = "setup_intent.requires_action";
pub const SETUP_INTENT_SETUP_FAILED: &str = "setup_intent.setup_failed";
pub const SETUP_INTENT_SUCCEEDED: &str = "setup_intent.succeeded";

// sigma
pub const SIGMA_SCHEDULED_QUERY_RUN_CREATED: &str = "sigma.scheduled_query_run.created";

// sku
pub const SKU_CREATED: &str = "sku.created";
pub const SKU_DELETED: &str = "sku.deleted";
pub const SKU_UPDATED: &str = "sku.updated";

// source
pub const SOURCE_CANCELED: &str = "source.canceled";
pub const SOURCE_CHARGEABLE: &str = "source.chargeable";
pub const SOURCE_FAILED: &str = "source.failed";
pub const SOURCE_MANDATE_NOTIFICATION: &str = "source.mandate_notification";
pub const SOURCE_REFUND_ATTRIBUTES_REQUIRED: &str = "source.refund_attributes_required";
pub const SOURCE_TRANSACTION_CREATED: &str = "source.transaction.created";
pub const SOURCE_TRANSACTION_UPDATED: &str = "source.transaction.updated";

// subscription_schedule
pub const SUBSCRIPTION_SCHEDULE_ABORTED: &str = "subscription_schedule.aborted";
pub const SUBSCRIPTION_SCHEDULE_CANCELED: &str = "subscription_schedule.canceled";
pub const SUBSCRIPTION_SCHEDULE_COMPLETED: &str = "subscription_schedule.completed";
pub const SUBSCRIPTION_SCHEDULE_CREATED: &str = "subscription_schedule.created";
pub const SUBSCRIPTION_SCHEDULE_EXPIRING: &str = "subscription_schedule.expiring";
pub const SUBSCRIPTION_SCHEDULE_RELEASED: &str = "subscription_schedule.released";
pub const SUBSCRIPTION_SCHEDULE_UPDATED: &str = "subscription_schedule.updated";

// tax_rate
pub const TAX_RATE_CREATED: &str = "tax_rate.created";
pub const TAX_RATE_UPDATED: &str = "tax_rate.updated";

// topup
pub const TOPUP_CANCELED: &str = "topup.canceled";
pub const TOPUP_CREATED: &str = "topup.created";
pub const TOPUP_FAILED: &str = "topup.failed";
pub const TOPUP_REVERSED: &str = "topup.reversed";
pub const TOPUP_SUCCEEDED: &str = "topup.succeeded";

// transfer
pub const TRANSFER_CREATED: &str = "transfer.created";
pub const TRANSFER_FAILED: &str = "transfer.failed";
pub const TRANSFER_PAID: &str = "transfer.paid";
pub const TRANSFER_REVERSED: &str = "transfer.reversed";
pub const TRANSFER_UPDATED: &str = "transfer.updated";

/// Every known event type name.
pub const ALL: &[&str] = &[
    ACCOUNT_UPDATED,
    ACCOUNT_APPLICATION_AUTHORIZED,
    ACCOUNT_APPLICATION_DEAUTHORIZED,
    ACCOUNT_EXTERNAL_ACCOUNT_CREATED,
    ACCOUNT_EXTERNAL_ACCOUNT_DELETED,
    ACCOUNT_EXTERNAL_ACCOUNT_UPDATED,
    APPLICATION_FEE_CREATED,
    APPLICATION_FEE_REFUNDED,
    APPLICATION_FEE_REFUND_UPDATED,
    BALANCE_AVAILABLE,
    BILLING_PORTAL_CONFIGURATION_CREATED,
    BILLING_PORTAL_CONFIGURATION_UPDATED,
    CAPABILITY_UPDATED,
    CHARGE_CAPTURED,
    CHARGE_EXPIRED,
    CHARGE_FAILED,
    CHARGE_PENDING,
    CHARGE_REFUNDED,
    CHARGE_SUCCEEDED,
    CHARGE_UPDATED,
    CHARGE_DISPUTE_CLOSED,
    CHARGE_DISPUTE_CREATED,
    CHARGE_DISPUTE_FUNDS_REINSTATED,
    CHARGE_DISPUTE_FUNDS_WITHDRAWN,
    CHARGE_DISPUTE_UPDATED,
    CHARGE_REFUND_UPDATED,
    CHECKOUT_SESSION_ASYNC_PAYMENT_FAILED,
    CHECKOUT_SESSION_ASYNC_PAYMENT_SUCCEEDED,
    CHECKOUT_SESSION_COMPLETED,
    COUPON_CREATED,
    COUPON_DELETED,
    COUPON_UPDATED,
    CREDIT_NOTE_CREATED,
    CREDIT_NOTE_UPDATED,
    CREDIT_NOTE_VOIDED,
    CUSTOMER_CREATED,
    CUSTOMER_DELETED,
    CUSTOMER_UPDATED,
    CUSTOMER_DISCOUNT_CREATED,
    CUSTOMER_DISCOUNT_DELETED,
    CUSTOMER_DISCOUNT_UPDATED,
    CUSTOMER_SOURCE_CREATED,
    CUSTOMER_SOURCE_DELETED,
    CUSTOMER_SOURCE_EXPIRING,
    CUSTOMER_SOURCE_UPDATED,
    CUSTOMER_SUBSCRIPTION_CREATED,
    CUSTOMER_SUBSCRIPTION_DELETED,
    CUSTOMER_SUBSCRIPTION_PENDING_UPDATE_APPLIED,
    CUSTOMER_SUBSCRIPTION_PENDING_UPDATE_EXPIRED,
    CUSTOMER_SUBSCRIPTION_TRIAL_WILL_END,
    CUSTOMER_SUBSCRIPTION_UPDATED,
    CUSTOMER_TAX_ID_CREATED,
    CUSTOMER_TAX_ID_DELETED,
    CUSTOMER_TAX_ID_UPDATED,
    FILE_CREATED,
    INVOICE_CREATED,
    INVOICE_DELETED,
    INVOICE_FINALIZATION_FAILED,
    INVOICE_FINALIZED,
    INVOICE_MARKED_UNCOLLECTIBLE,
    INVOICE_PAID,
    INVOICE_PAYMENT_ACTION_REQUIRED,
    INVOICE_PAYMENT_FAILED,
    INVOICE_PAYMENT_SUCCEEDED,
    INVOICE_SENT,
    INVOICE_UPCOMING,
    INVOICE_UPDATED,
    INVOICE_VOIDED,
    INVOICEITEM_CREATED,
    INVOICEITEM_DELETED,
    INVOICEITEM_UPDATED,
    ISSUING_AUTHORIZATION_CREATED,
    ISSUING_AUTHORIZATION_REQUEST,
    ISSUING_AUTHORIZATION_UPDATED,
    ISSUING_CARD_CREATED,
    ISSUING_CARD_UPDATED,
    ISSUING_CARDHOLDER_CREATED,
    ISSUING_CARDHOLDER_UPDATED,
    ISSUING_DISPUTE_CLOSED,
    ISSUING_DISPUTE_CREATED,
    ISSUING_DISPUTE_FUNDS_REINSTATED,
    ISSUING_DISPUTE_SUBMITTED,
    ISSUING_DISPUTE_UPDATED,
    ISSUING_TRANSACTION_CREATED,
    ISSUING_TRANSACTION_UPDATED,
    MANDATE_UPDATED,
    ORDER_CREATED,
    ORDER_PAYMENT_FAILED,
    ORDER_PAYMENT_SUCCEEDED,
    ORDER_UPDATED,
    ORDER_RETURN_CREATED,
    PAYMENT_INTENT_AMOUNT_CAPTURABLE_UPDATED,
    PAYMENT_INTENT_CANCELED,
    PAYMENT_INTENT_CREATED,
    PAYMENT_INTENT_PAYMENT_FAILED,
    PAYMENT_INTENT_PROCESSING,
    PAYMENT_INTENT_REQUIRES_ACTION,
    PAYMENT_INTENT_SUCCEEDED,
    PAYMENT_METHOD_ATTACHED,
    PAYMENT_METHOD_AUTOMATICALLY_UPDATED,
    PAYMENT_METHOD_DETACHED,
    PAYMENT_METHOD_UPDATED,
    PAYOUT_CANCELED,
    PAYOUT_CREATED,
    PAYOUT_FAILED,
    PAYOUT_PAID,
    PAYOUT_UPDATED,
    PERSON_CREATED,
    PERSON_DELETED,
    PERSON_UPDATED,
    PLAN_CREATED,
    PLAN_DELETED,
    PLAN_UPDATED,
    PRICE_CREATED,
    PRICE_DELETED,
    PRICE_UPDATED,
    PRODUCT_CREATED,
    PRODUCT_DELETED,
    PRODUCT_UPDATED,
    PROMOTION_CODE_CREATED,
    PROMOTION_CODE_UPDATED,
    RADAR_EARLY_FRAUD_WARNING_CREATED,
    RADAR_EARLY_FRAUD_WARNING_UPDATED,
    RECIPIENT_CREATED,
    RECIPIENT_DELETED,
    RECIPIENT_UPDATED,
    REPORTING_REPORT_RUN_FAILED,
    REPORTING_REPORT_RUN_SUCCEEDED,
    REPORTING_REPORT_TYPE_UPDATED,
    REVIEW_CLOSED,
    REVIEW_OPENED,
    SETUP_INTENT_CANCELED,
    SETUP_INTENT_CREATED,
    SETUP_INTENT_REQUIRES_ACTION,
    SETUP_INTENT_SETUP_FAILED,
    SETUP_INTENT_SUCCEEDED,
    SIGMA_SCHEDULED_QUERY_RUN_CREATED,
    SKU_CREATED,
    SKU_DELETED,
    SKU_UPDATED,
    SOURCE_CANCELED,
    SOURCE_CHARGEABLE,
    SOURCE_FAILED,
    SOURCE_MANDATE_NOTIFICATION,
    SOURCE_REFUND_ATTRIBUTES_REQUIRED,
    SOURCE_TRANSACTION_CREATED,
    SOURCE_TRANSACTION_UPDATED,
    SUBSCRIPTION_SCHEDULE_ABORTED,
    SUBSCRIPTION_SCHEDULE_CANCELED,
    SUBSCRIPTION_SCHEDULE_COMPLETED,
    SUBSCRIPTION_SCHEDULE_CREATED,
    SUBSCRIPTION_SCHEDULE_EXPIRING,
    SUBSCRIPTION_SCHEDULE_RELEASED,
    SUBSCRIPTION_SCHEDULE_UPDATED,
    TAX_RATE_CREATED,
    TAX_RATE_UPDATED,
    TOPUP_CANCELED,
    TOPUP_CREATED,
    TOPUP_FAILED,
    TOPUP_REVERSED,
    TOPUP_SUCCEEDED,
    TRANSFER_CREATED,
    TRANSFER_FAILED,
    TRANSFER_PAID,
    TRANSFER_REVERSED,
    TRANSFER_UPDATED,
];

/// Whether `name` is one of the known event types.
pub fn is_known(name: &str) -> bool {
    ALL.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_event_types() {
        assert!(is_known(CHARGE_SUCCEEDED));
        assert!(is_known("invoice.payment_failed"));
        assert!(!is_known("charge.exploded"));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = ALL.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
