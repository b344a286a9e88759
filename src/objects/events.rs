//! Named-event listeners attached to a body.
//!
//! Listeners receive a [`CollisionEvent`] by reference. The payload names the
//! other body by handle only, so a listener can never reach back into the
//! world while a step is iterating its bodies.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::math::vec2::Vec2;
use crate::world::BodyHandle;

/// Name of the event the world emits to both bodies of every resolved contact.
pub const COLLISION_EVENT: &str = "collision";

/// Payload of a [`COLLISION_EVENT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// The other body of the colliding pair.
    pub other: BodyHandle,
    /// Contact normal pointing from the receiving body towards `other`.
    pub normal: Vec2,
    /// Penetration depth before correction.
    pub depth: f64,
}

pub type Listener = Rc<dyn Fn(&CollisionEvent)>;

#[derive(Clone, Default)]
pub struct EventListeners {
    by_name: HashMap<String, Vec<Listener>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `event`. Callbacks for one name run in registration order.
    pub fn on<F>(&mut self, event: &str, callback: F)
    where
        F: Fn(&CollisionEvent) + 'static,
    {
        self.by_name.entry(event.to_owned()).or_default().push(Rc::new(callback));
    }

    /// Invokes every callback registered under `event`; does nothing when there are none.
    pub fn emit(&self, event: &str, payload: &CollisionEvent) {
        if let Some(listeners) = self.by_name.get(event) {
            for listener in listeners {
                listener(payload);
            }
        }
    }

    pub fn count(&self, event: &str) -> usize {
        self.by_name.get(event).map_or(0, Vec::len)
    }

    /// Drops every callback registered under `event`.
    pub fn clear(&mut self, event: &str) {
        self.by_name.remove(event);
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.by_name.iter().map(|(name, list)| (name, list.len())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn payload() -> CollisionEvent {
        CollisionEvent { other: BodyHandle::from_raw(7), normal: Vec2::new(1.0, 0.0), depth: 0.25 }
    }

    #[test]
    fn test_emit_runs_listeners_in_order_with_same_payload() {
        let log: Rc<RefCell<Vec<(u8, CollisionEvent)>>> = Rc::default();
        let mut listeners = EventListeners::new();

        let first = Rc::clone(&log);
        listeners.on(COLLISION_EVENT, move |e| first.borrow_mut().push((1, *e)));
        let second = Rc::clone(&log);
        listeners.on(COLLISION_EVENT, move |e| second.borrow_mut().push((2, *e)));

        listeners.emit(COLLISION_EVENT, &payload());

        let seen = log.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (1, payload()));
        assert_eq!(seen[1], (2, payload()));
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let listeners = EventListeners::new();
        listeners.emit("nothing-here", &payload());
        assert_eq!(listeners.count(COLLISION_EVENT), 0);
    }

    #[test]
    fn test_names_are_independent() {
        let hits = Rc::new(RefCell::new(0));
        let mut listeners = EventListeners::new();
        let h = Rc::clone(&hits);
        listeners.on("other", move |_| *h.borrow_mut() += 1);

        listeners.emit(COLLISION_EVENT, &payload());
        assert_eq!(*hits.borrow(), 0);
        listeners.emit("other", &payload());
        assert_eq!(*hits.borrow(), 1);

        listeners.clear("other");
        listeners.emit("other", &payload());
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_debug_lists_counts() {
        let mut listeners = EventListeners::new();
        listeners.on(COLLISION_EVENT, |_| {});
        assert_eq!(format!("{:?}", listeners), "{\"collision\": 1}");
    }
}
