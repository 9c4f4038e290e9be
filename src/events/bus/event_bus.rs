// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events → same result
// 3. Observable - every emission is logged
// 4. Type-safe - events are strongly typed

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Emissions kept in the in-memory log before the oldest are dropped
const EVENT_LOG_CAPACITY: usize = 256;

/// The Event Bus
///
/// Services emit events here; the UI projection and any other observer
/// subscribe without the services knowing about them.
///
/// Key characteristics:
/// - Synchronous execution on the emitting thread
/// - Handlers execute in subscription order
/// - Type-safe through generics
/// - Observable through logging
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Recent emissions (for debugging)
    event_log: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

// A panicking handler must not take the bus down with it, so poisoned locks
// are recovered rather than propagated.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// Handlers are executed in the order they are subscribed.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<PlayingVerseChanged, _>(|event| {
    ///     println!("Now playing position {}", event.position);
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

        write(&self.handlers)
            .entry(type_id)
            .or_default()
            .push(wrapped);
    }

    /// Emit an event
    ///
    /// This will:
    /// 1. Log the event
    /// 2. Execute all handlers for this event type (in subscription order)
    /// 3. Return immediately (synchronous)
    ///
    /// If a handler panics, the panic is caught and logged, but other handlers
    /// still execute.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        let handlers = read(&self.handlers);
        let event_handlers = handlers.get(&type_id);
        let handler_count = event_handlers.map(|h| h.len()).unwrap_or(0);

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count,
        };

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            log_entry.event_type,
            log_entry.event_id,
            log_entry.handler_count
        );

        {
            let mut log = write(&self.event_log);
            if log.len() == EVENT_LOG_CAPACITY {
                log.remove(0);
            }
            log.push(log_entry);
        }

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

    /// Get the event log (for debugging)
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        read(&self.event_log).clone()
    }

    /// Clear the event log
    pub fn clear_event_log(&self) {
        write(&self.event_log).clear();
    }

    /// Get the number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let type_id = TypeId::of::<E>();
        read(&self.handlers)
            .get(&type_id)
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Make EventBus cloneable (shared reference)
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlaybackMode;
    use crate::events::types::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<PlayingVerseChanged, _>(move |event| {
            counter_clone.fetch_add(event.position, Ordering::SeqCst);
        });

        bus.emit(PlayingVerseChanged::new(4));

        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<PlaybackStopped, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(PlaybackStopped::new());

        let result = sequence.read().unwrap();
        assert_eq!(*result, vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();

        bus.emit(PlaybackStarted::new(PlaybackMode::SingleVerse, 0, 1));
        bus.emit(PlaybackFinished::new(0));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "PlaybackStarted");
        assert_eq!(log[1].event_type, "PlaybackFinished");

        bus.clear_event_log();
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_event_log_is_bounded() {
        let bus = EventBus::new();
        for position in 0..EVENT_LOG_CAPACITY + 10 {
            bus.emit(PlayingVerseChanged::new(position));
        }
        assert_eq!(bus.get_event_log().len(), EVENT_LOG_CAPACITY);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();

        assert_eq!(bus.subscriber_count::<PlaybackPaused>(), 0);

        bus.subscribe::<PlaybackPaused, _>(|_| {});
        bus.subscribe::<PlaybackPaused, _>(|_| {});
        assert_eq!(bus.subscriber_count::<PlaybackPaused>(), 2);

        assert_eq!(bus.subscriber_count::<PlaybackResumed>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<PlaybackFailed, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<PlaybackFailed, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(PlaybackFailed::new(0, "decoder error".to_string()));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
