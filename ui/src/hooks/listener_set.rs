//! An in-process stand-in for a DOM event target.
//!
//! Used as the document on platforms without a browser DOM (server
//! rendering, headless runs) so the menu's listener lifecycle behaves the
//! same everywhere.

use std::cell::RefCell;
use std::rc::Rc;
use std::rc::Weak;

type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Slots<E> {
    next_id: u64,
    callbacks: Vec<(u64, Callback<E>)>,
}

/// A set of callbacks that receive every dispatched event.
pub struct ListenerSet<E> {
    slots: Rc<RefCell<Slots<E>>>,
}

impl<E> Clone for ListenerSet<E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<E> Default for ListenerSet<E> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                callbacks: Vec::new(),
            })),
        }
    }
}

impl<E: 'static> ListenerSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback`. It stays registered until the returned
    /// `Listener` is dropped.
    #[must_use = "dropping the Listener immediately removes the callback"]
    pub fn listen(&self, callback: impl FnMut(&E) + 'static) -> Listener<E> {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        let callback: Callback<E> = Rc::new(RefCell::new(callback));
        slots.callbacks.push((id, callback));

        Listener {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Delivers `event` to every registered callback, in registration order.
    pub fn dispatch(&self, event: &E) {
        // snapshot so callbacks may add or remove listeners while running
        let callbacks: Vec<Callback<E>> = self
            .slots
            .borrow()
            .callbacks
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in callbacks {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration guard returned by [`ListenerSet::listen`].
pub struct Listener<E> {
    id: u64,
    slots: Weak<RefCell<Slots<E>>>,
}

impl<E> Drop for Listener<E> {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().callbacks.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_visibility::next_visibility;
    use crate::menu_visibility::DocumentEvent;
    use crate::menu_visibility::TargetHits;
    use std::cell::Cell;

    #[test]
    fn dropping_listener_removes_only_its_callback() {
        let set = ListenerSet::<u32>::new();
        let seen = Rc::new(Cell::new(0));

        let first = {
            let seen = seen.clone();
            set.listen(move |n| seen.set(seen.get() + n))
        };
        let second = {
            let seen = seen.clone();
            set.listen(move |n| seen.set(seen.get() + n * 10))
        };
        assert_eq!(set.len(), 2);

        set.dispatch(&1);
        assert_eq!(seen.get(), 11);

        drop(first);
        assert_eq!(set.len(), 1);
        set.dispatch(&1);
        assert_eq!(seen.get(), 21);

        drop(second);
        assert!(set.is_empty());
    }

    #[test]
    fn events_after_release_change_nothing() {
        let document = ListenerSet::<DocumentEvent>::new();
        let visible = Rc::new(Cell::new(false));

        let click = {
            let visible = visible.clone();
            document.listen(move |event| {
                if let DocumentEvent::Click(_) = event {
                    visible.set(next_visibility(visible.get(), *event));
                }
            })
        };
        let context_menu = {
            let visible = visible.clone();
            document.listen(move |event| {
                if let DocumentEvent::ContextMenu = event {
                    visible.set(next_visibility(visible.get(), *event));
                }
            })
        };

        document.dispatch(&DocumentEvent::Click(TargetHits::on_trigger()));
        assert!(visible.get());

        drop(click);
        drop(context_menu);
        assert!(document.is_empty());

        document.dispatch(&DocumentEvent::ContextMenu);
        document.dispatch(&DocumentEvent::Click(TargetHits::outside()));
        assert!(visible.get());
    }

    #[test]
    fn listener_outliving_its_set_drops_cleanly() {
        let set = ListenerSet::<()>::new();
        let listener = set.listen(|_| {});
        drop(set);
        drop(listener);
    }

    #[test]
    fn callback_may_release_another_listener_during_dispatch() {
        let set = ListenerSet::<()>::new();
        let held: Rc<RefCell<Option<Listener<()>>>> = Rc::new(RefCell::new(None));

        let _dropper = {
            let held = held.clone();
            set.listen(move |_| {
                held.borrow_mut().take();
            })
        };
        *held.borrow_mut() = Some(set.listen(|_| {}));
        assert_eq!(set.len(), 2);

        set.dispatch(&());
        assert_eq!(set.len(), 1);
    }
}
