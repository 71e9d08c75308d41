//! Synchronous listener registry for change notification.
//!
//! Observable objects compose a [`ListenerRegistry`] rather than inheriting
//! notifier behavior. Delivery is synchronous on the caller's stack, in
//! registration order. There is no queuing and no retry; a panicking
//! listener unwinds into the caller of the mutating operation.

use std::fmt;
use std::sync::Arc;

/// A listener interested in events of type `E`.
///
/// Implemented for any `Fn(&E) + Send + Sync` closure, so ad-hoc listeners
/// can be registered without a named type.
pub trait EventListener<E>: Send + Sync {
    /// Called once per delivered event.
    fn on_event(&self, event: &E);
}

impl<E, F> EventListener<E> for F
where
    F: Fn(&E) + Send + Sync,
{
    fn on_event(&self, event: &E) {
        self(event);
    }
}

/// An ordered registry of named listeners.
///
/// Registrations are identified by a caller-chosen name; callers own name
/// uniqueness. Registering an already-used name keeps both entries, and
/// removal then drops the oldest one first.
pub struct ListenerRegistry<E> {
    listeners: Vec<(String, Arc<dyn EventListener<E>>)>,
}

impl<E> ListenerRegistry<E> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener under `name`, at the end of the delivery order.
    pub fn add_listener(&mut self, name: &str, listener: Arc<dyn EventListener<E>>) {
        self.listeners.push((name.to_string(), listener));
    }

    /// Remove the listener registered under `name`.
    ///
    /// Returns `true` if a registration was found and removed.
    pub fn remove_listener(&mut self, name: &str) -> bool {
        if let Some(pos) = self.listeners.iter().position(|(n, _)| n == name) {
            self.listeners.remove(pos);
            true
        } else {
            false
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to every listener, in registration order.
    pub fn notify(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener.on_event(event);
        }
    }
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ListenerRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field(
                "listeners",
                &self
                    .listeners
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Listener that appends a tag to a shared log on every event.
    struct TagListener {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl EventListener<u32> for TagListener {
        fn on_event(&self, event: &u32) {
            self.log.lock().unwrap().push(format!("{}:{event}", self.tag));
        }
    }

    #[test]
    fn test_notify_delivers_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();

        registry.add_listener(
            "first",
            Arc::new(TagListener {
                tag: "a",
                log: Arc::clone(&log),
            }),
        );
        registry.add_listener(
            "second",
            Arc::new(TagListener {
                tag: "b",
                log: Arc::clone(&log),
            }),
        );

        registry.notify(&7);

        assert_eq!(*log.lock().unwrap(), vec!["a:7", "b:7"]);
    }

    #[test]
    fn test_closure_listener() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();

        registry.add_listener(
            "closure",
            Arc::new(move |event: &u32| sink.lock().unwrap().push(*event)),
        );
        registry.notify(&42);

        assert_eq!(*log.lock().unwrap(), vec![42]);
    }

    #[test]
    fn test_remove_listener_stops_delivery() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();

        registry.add_listener(
            "observer",
            Arc::new(TagListener {
                tag: "a",
                log: Arc::clone(&log),
            }),
        );
        assert!(registry.remove_listener("observer"));
        registry.notify(&1);

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_remove_unknown_listener_returns_false() {
        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();
        assert!(!registry.remove_listener("never-registered"));
    }

    #[test]
    fn test_duplicate_name_removes_oldest_first() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();

        registry.add_listener(
            "dup",
            Arc::new(TagListener {
                tag: "old",
                log: Arc::clone(&log),
            }),
        );
        registry.add_listener(
            "dup",
            Arc::new(TagListener {
                tag: "new",
                log: Arc::clone(&log),
            }),
        );

        assert!(registry.remove_listener("dup"));
        registry.notify(&1);

        assert_eq!(*log.lock().unwrap(), vec!["new:1"]);
    }

    #[test]
    fn test_debug_lists_listener_names() {
        let mut registry: ListenerRegistry<u32> = ListenerRegistry::new();
        registry.add_listener("ui", Arc::new(|_: &u32| {}));

        let rendered = format!("{registry:?}");
        assert!(rendered.contains("ui"));
    }
}
