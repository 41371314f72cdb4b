// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Observable - every emission is logged
// 3. Type-safe - events are strongly typed

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Lets the registry announce mutations without knowing who listens.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order
/// - A panicking handler does not stop the others
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// Handlers are executed in the order they are subscribed.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<LivestockCreated, _>(|event| {
    ///     println!("Registered: {}", event.name);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "Failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(type_id).or_default().push(wrapped);
    }

    /// Emit an event
    ///
    /// Logs the emission, then runs every handler for the event type.
    /// Returns once all handlers have run. Nothing is retained.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let event_handlers = handlers.get(&type_id);

        log::debug!(
            "[EVENT] {} (id: {}, at: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            event.occurred_at().to_rfc3339(),
            event_handlers.map(|h| h.len()).unwrap_or(0)
        );

        if let Some(handlers) = event_handlers {
            for (idx, handler) in handlers.iter().enumerate() {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if let Err(e) = result {
                    log::error!(
                        "Handler {} for {} panicked: {:?}",
                        idx,
                        event.event_type(),
                        e
                    );
                }
            }
        }
    }

    /// Get the number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let type_id = TypeId::of::<E>();
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers.get(&type_id).map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Clones share handlers
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Principal;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn created(name: &str) -> LivestockCreated {
        LivestockCreated::new("id-1".to_string(), name.to_string(), Principal::anonymous())
    }

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<LivestockCreated, _>(move |_event| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(created("Bessie"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<LivestockDeleted, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(LivestockDeleted::new("id-1".to_string()));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_handlers_only_see_their_event_type() {
        let bus = EventBus::new();
        let seen = Arc::new(RwLock::new(Vec::new()));

        let seen_created = Arc::clone(&seen);
        bus.subscribe::<LivestockCreated, _>(move |event| {
            seen_created.write().unwrap().push(format!("created:{}", event.name));
        });
        let seen_updated = Arc::clone(&seen);
        bus.subscribe::<LivestockUpdated, _>(move |event| {
            seen_updated.write().unwrap().push(format!("updated:{}", event.updated_at));
        });

        bus.emit(created("Bessie"));
        bus.emit(LivestockUpdated::new("id-1".to_string(), 5));
        bus.emit(LivestockDeleted::new("id-1".to_string()));

        assert_eq!(*seen.read().unwrap(), vec!["created:Bessie", "updated:5"]);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.clone().subscribe::<LivestockDeleted, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        for _ in 0..3 {
            bus.emit(LivestockDeleted::new("id-1".to_string()));
        }

        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(bus.subscriber_count::<LivestockDeleted>(), 1);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<LivestockCreated>(), 0);

        bus.subscribe::<LivestockCreated, _>(|_| {});
        bus.subscribe::<LivestockCreated, _>(|_| {});
        assert_eq!(bus.subscriber_count::<LivestockCreated>(), 2);

        assert_eq!(bus.subscriber_count::<LivestockDeleted>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<LivestockCreated, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<LivestockCreated, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(created("Test"));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
