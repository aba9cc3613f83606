//! EventRouter processor.
//!
//! The EventRouter is responsible for:
//! - Receiving `ReceivedEvent` from the queue
//! - Picking the handlers registered for the event type
//! - Running them in registration order and logging failures
//!
//! Handlers are registered either for an exact type (`charge.succeeded`)
//! or for a family (`invoice.*`). Events no handler claims go to the
//! fallback handlers, if any.

use std::collections::HashMap;
use std::sync::Arc;

use compact_str::CompactString;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::handler::EventHandler;
use crate::events::{ReceivedEvent, ReceivedEventReceiver};

/// Suffix marking a family pattern.
const WILDCARD_SUFFIX: &str = ".*";

/// EventRouter dispatches verified events to registered handlers.
pub struct EventRouter {
    event_rx: ReceivedEventReceiver,
    shutdown_rx: watch::Receiver<bool>,
    exact: HashMap<CompactString, Vec<Arc<dyn EventHandler>>>,
    /// `(prefix including the trailing dot, handler)`.
    families: Vec<(CompactString, Arc<dyn EventHandler>)>,
    fallback: Vec<Arc<dyn EventHandler>>,
}

impl EventRouter {
    /// Create a new EventRouter.
    ///
    /// # Arguments
    ///
    /// * `event_rx` - Receiver for ReceivedEvent events
    /// * `shutdown_rx` - Receiver for shutdown signal
    pub fn new(event_rx: ReceivedEventReceiver, shutdown_rx: watch::Receiver<bool>) -> Self {
        Self {
            event_rx,
            shutdown_rx,
            exact: HashMap::new(),
            families: Vec::new(),
            fallback: Vec::new(),
        }
    }

    /// Register `handler` for `pattern`: an exact event type, or a family
    /// such as `invoice.*`.
    pub fn on(mut self, pattern: &str, handler: Arc<dyn EventHandler>) -> Self {
        match pattern.strip_suffix(WILDCARD_SUFFIX) {
            Some(family) => {
                let mut prefix = CompactString::from(family);
                prefix.push('.');
                self.families.push((prefix, handler));
            }
            None => self
                .exact
                .entry(CompactString::from(pattern))
                .or_default()
                .push(handler),
        }
        self
    }

    /// Register a handler for events nothing else matched.
    pub fn fallback(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.fallback.push(handler);
        self
    }

    /// Handlers that would receive an event of type `event_type`.
    fn handlers_for(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        let mut handlers: Vec<Arc<dyn EventHandler>> = self
            .exact
            .get(event_type)
            .map(|list| list.to_vec())
            .unwrap_or_default();
        handlers.extend(
            self.families
                .iter()
                .filter(|(prefix, _)| event_type.starts_with(prefix.as_str()))
                .map(|(_, handler)| Arc::clone(handler)),
        );
        if handlers.is_empty() {
            handlers.extend(self.fallback.iter().cloned());
        }
        handlers
    }

    /// Run the EventRouter until shutdown or until every sender is gone.
    pub async fn run(mut self) {
        info!("EventRouter started");

        loop {
            tokio::select! {
                biased;

                // Check for shutdown
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        info!("EventRouter received shutdown signal");
                        break;
                    }
                }

                // Receive ReceivedEvent events
                Some(event) = self.event_rx.recv() => {
                    self.dispatch(&event).await;
                }

                else => {
                    info!("ReceivedEvent channel closed");
                    break;
                }
            }
        }

        // Drain what was already accepted so acknowledged deliveries are
        // still handled.
        self.event_rx.close();
        while let Ok(event) = self.event_rx.try_recv() {
            self.dispatch(&event).await;
        }

        info!("EventRouter stopped");
    }

    /// Deliver one event to its handlers. Returns how many handlers ran
    /// successfully.
    pub async fn dispatch(&self, event: &ReceivedEvent) -> usize {
        let handlers = self.handlers_for(event.event_type());
        if handlers.is_empty() {
            debug!(
                delivery_id = %event.delivery_id,
                event_type = %event.event_type(),
                "No handler registered for event"
            );
            return 0;
        }

        let mut succeeded = 0;
        for handler in handlers {
            match handler.handle(event).await {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    error!(
                        delivery_id = %event.delivery_id,
                        event_id = %event.event.id,
                        event_type = %event.event_type(),
                        error = %e,
                        "Event handler failed"
                    );
                }
            }
        }

        if succeeded == 0 {
            warn!(
                delivery_id = %event.delivery_id,
                event_type = %event.event_type(),
                "Event was not handled by any handler"
            );
        }
        succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::received_event_channel;
    use crate::processors::handler::HandlerError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use striped_sdk::objects::Event;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventHandler for Recorder {
        async fn handle(&self, event: &ReceivedEvent) -> Result<(), HandlerError> {
            self.seen
                .lock()
                .unwrap()
                .push(event.event_type().to_owned());
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl EventHandler for Failing {
        async fn handle(&self, _event: &ReceivedEvent) -> Result<(), HandlerError> {
            Err(HandlerError::Rejected("nope".into()))
        }
    }

    fn event(event_type: &str) -> ReceivedEvent {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": "evt_1",
            "type": event_type,
            "data": {"object": {}}
        }))
        .unwrap();
        ReceivedEvent::new(event, 1_700_000_000)
    }

    fn router() -> (EventRouter, crate::events::ReceivedEventSender, watch::Sender<bool>) {
        let (tx, rx) = received_event_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        (EventRouter::new(rx, shutdown_rx), tx, shutdown_tx)
    }

    #[tokio::test]
    async fn test_dispatch_exact_family_and_fallback() {
        let exact = Arc::new(Recorder::default());
        let family = Arc::new(Recorder::default());
        let fallback = Arc::new(Recorder::default());
        let (router, _tx, _shutdown) = router();
        let router = router
            .on("charge.succeeded", exact.clone())
            .on("invoice.*", family.clone())
            .fallback(fallback.clone());

        assert_eq!(router.dispatch(&event("charge.succeeded")).await, 1);
        assert_eq!(router.dispatch(&event("invoice.paid")).await, 1);
        assert_eq!(router.dispatch(&event("invoiceitem.created")).await, 1);
        assert_eq!(router.dispatch(&event("charge.failed")).await, 1);

        assert_eq!(exact.seen(), vec!["charge.succeeded"]);
        assert_eq!(family.seen(), vec!["invoice.paid"]);
        assert_eq!(fallback.seen(), vec!["invoiceitem.created", "charge.failed"]);
    }

    #[tokio::test]
    async fn test_failing_handler_does_not_block_others() {
        let recorder = Arc::new(Recorder::default());
        let (router, _tx, _shutdown) = router();
        let router = router
            .on("payout.paid", Arc::new(Failing))
            .on("payout.paid", recorder.clone());

        assert_eq!(router.dispatch(&event("payout.paid")).await, 1);
        assert_eq!(recorder.seen(), vec!["payout.paid"]);
    }

    #[tokio::test]
    async fn test_unrouted_event_is_dropped() {
        let (router, _tx, _shutdown) = router();
        assert_eq!(router.dispatch(&event("charge.succeeded")).await, 0);
    }

    #[tokio::test]
    async fn test_run_until_channel_closed() {
        let recorder = Arc::new(Recorder::default());
        let (router, tx, _shutdown) = router();
        let router = router.fallback(recorder.clone());

        tx.send(event("a.b")).await.unwrap();
        tx.send(event("c.d")).await.unwrap();
        drop(tx);

        router.run().await;
        assert_eq!(recorder.seen(), vec!["a.b", "c.d"]);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown_and_drains() {
        let recorder = Arc::new(Recorder::default());
        let (router, tx, shutdown) = router();
        let router = router.fallback(recorder.clone());

        tx.send(event("a.b")).await.unwrap();
        shutdown.send(true).unwrap();

        // The sender is still alive; only the shutdown signal ends the loop.
        router.run().await;
        assert_eq!(recorder.seen(), vec!["a.b"]);
        drop(tx);
    }
}
