//! Event hub: named events with ordered handler lists.

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::EngineError;

/// Axis on which a boundary collision occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Lower-case axis name, as passed to event handlers in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data handed to event handlers when an event fires.
///
/// Handlers are registered on exactly one object's hub, so the subject of
/// the event is implicit.
#[derive(Clone, Debug, PartialEq)]
pub enum EventPayload {
    /// The owning object finished drawing itself.
    Drawn,
    /// The owning object was clamped against a scene edge on this axis.
    EdgeHit(Axis),
    /// No payload.
    Empty,
}

type Handler = Box<dyn FnMut(&EventPayload)>;

/// Registry of named events and their ordered handler lists.
///
/// Constructed with a fixed list of recognized names; more can be added with
/// [`register`](EventHub::register). Firing or subscribing to an unknown
/// name is an [`EngineError::Inexistent`] error. There is no handler removal
/// operation.
pub struct EventHub {
    handlers: FxHashMap<String, SmallVec<[Handler; 2]>>,
}

impl EventHub {
    /// Create a hub recognizing the given event names.
    pub fn new(names: &[&str]) -> Self {
        let mut handlers = FxHashMap::default();
        for name in names {
            handlers.insert((*name).to_string(), SmallVec::new());
        }
        Self { handlers }
    }

    /// Add a new recognized event with an empty handler list.
    ///
    /// Not idempotent by contract, but registering a name twice keeps any
    /// handlers already attached to it.
    pub fn register(&mut self, name: &str) {
        self.handlers.entry(name.to_string()).or_default();
    }

    /// Whether `name` is a recognized event.
    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Append a handler to the event's list.
    ///
    /// Multiple handlers per event are allowed and fire in the order they
    /// were added.
    pub fn on<F>(&mut self, name: &str, handler: F) -> Result<(), EngineError>
    where
        F: FnMut(&EventPayload) + 'static,
    {
        let list = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| EngineError::inexistent("event", "list of registered events"))?;
        list.push(Box::new(handler));
        Ok(())
    }

    /// Invoke every handler attached to `name`, synchronously and in
    /// registration order.
    pub fn fire(&mut self, name: &str, payload: &EventPayload) -> Result<(), EngineError> {
        let list = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| EngineError::inexistent("event", "list of registered events"))?;
        for handler in list.iter_mut() {
            handler(payload);
        }
        Ok(())
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, list) in &self.handlers {
            map.entry(name, &list.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fire_runs_handlers_in_registration_order() {
        let mut hub = EventHub::new(&["draw"]);
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = Rc::clone(&seen);
            hub.on("draw", move |_| seen.borrow_mut().push(tag)).unwrap();
        }

        hub.fire("draw", &EventPayload::Drawn).unwrap();
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_handler_added_after_fire_misses_past_fires() {
        let mut hub = EventHub::new(&["draw"]);
        let count = Rc::new(RefCell::new(0));

        hub.fire("draw", &EventPayload::Drawn).unwrap();

        {
            let count = Rc::clone(&count);
            hub.on("draw", move |_| *count.borrow_mut() += 1).unwrap();
        }
        hub.fire("draw", &EventPayload::Drawn).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_on_unregistered_event_fails() {
        let mut hub = EventHub::new(&["draw"]);
        let result = hub.on("explode", |_| {});
        assert!(matches!(result, Err(EngineError::Inexistent { .. })));
    }

    #[test]
    fn test_fire_unregistered_event_fails() {
        let mut hub = EventHub::new(&["draw"]);
        let result = hub.fire("explode", &EventPayload::Empty);
        assert!(matches!(result, Err(EngineError::Inexistent { .. })));
    }

    #[test]
    fn test_register_makes_event_usable() {
        let mut hub = EventHub::new(&[]);
        assert!(!hub.is_registered("tick"));

        hub.register("tick");
        assert!(hub.is_registered("tick"));
        hub.on("tick", |_| {}).unwrap();
        hub.fire("tick", &EventPayload::Empty).unwrap();
    }

    #[test]
    fn test_register_twice_keeps_handlers() {
        let mut hub = EventHub::new(&[]);
        let count = Rc::new(RefCell::new(0));

        hub.register("tick");
        {
            let count = Rc::clone(&count);
            hub.on("tick", move |_| *count.borrow_mut() += 1).unwrap();
        }
        hub.register("tick");
        hub.fire("tick", &EventPayload::Empty).unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_payload_reaches_handlers() {
        let mut hub = EventHub::new(&["hit_edge"]);
        let axis = Rc::new(RefCell::new(None));

        {
            let axis = Rc::clone(&axis);
            hub.on("hit_edge", move |payload| {
                if let EventPayload::EdgeHit(a) = payload {
                    *axis.borrow_mut() = Some(*a);
                }
            })
            .unwrap();
        }
        hub.fire("hit_edge", &EventPayload::EdgeHit(Axis::X)).unwrap();

        assert_eq!(*axis.borrow(), Some(Axis::X));
        assert_eq!(Axis::X.as_str(), "x");
    }
}
