//! Identity change listeners
//!
//! A subscription is tied to the lifetime of its `SessionSubscription`
//! guard: the callback is registered when the guard is created and removed
//! when the guard is dropped. The page keeps exactly one guard for as long
//! as it is mounted.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use supper_common::Identity;
use tracing::debug;

type Listener = Rc<dyn Fn(Option<Identity>)>;

#[derive(Default)]
struct Slots {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Registry of identity change callbacks
#[derive(Clone, Default)]
pub struct SessionListeners {
    slots: Rc<RefCell<Slots>>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every identity transition
    pub fn subscribe(&self, listener: impl Fn(Option<Identity>) + 'static) -> SessionSubscription {
        let mut slots = self.slots.borrow_mut();
        slots.next_id += 1;
        let id = slots.next_id;
        slots.entries.push((id, Rc::new(listener)));
        debug!("Session listener {} registered ({} active)", id, slots.entries.len());
        SessionSubscription {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Notify every live listener. Listeners may subscribe or drop their
    /// guard from inside the callback.
    pub fn notify(&self, identity: Option<&Identity>) {
        let listeners: Vec<Listener> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(identity.cloned());
        }
    }

    /// Number of active listeners
    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered until dropped
pub struct SessionSubscription {
    id: u64,
    slots: Weak<RefCell<Slots>>,
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            let mut slots = slots.borrow_mut();
            slots.entries.retain(|(id, _)| *id != self.id);
            debug!("Session listener {} removed ({} active)", self.id, slots.entries.len());
        }
    }
}
