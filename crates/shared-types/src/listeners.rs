use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

/// Change listeners for a single-threaded store.
///
/// Cloning yields another handle to the same listener list.
pub struct Listeners<T> {
    next_id: Rc<Cell<u64>>,
    callbacks: Rc<RefCell<Vec<(SubscriptionId, Callback<T>)>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            next_id: self.next_id.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: Rc::new(Cell::new(0)),
            callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.callbacks.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.callbacks.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    /// Call every listener with `value`.
    ///
    /// The list is copied first so a callback may subscribe or unsubscribe
    /// without a re-entrant borrow.
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_reaches_every_subscriber() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..2 {
            let seen = seen.clone();
            listeners.subscribe(move |v| seen.borrow_mut().push((tag, *v)));
        }
        listeners.notify(&7);
        assert_eq!(*seen.borrow(), vec![(0, 7), (1, 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let listeners = Listeners::<u32>::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = listeners.subscribe(move |_| counter.set(counter.get() + 1));
        listeners.notify(&1);
        listeners.unsubscribe(id);
        listeners.notify(&2);
        assert_eq!(hits.get(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let listeners = Listeners::<u32>::new();
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let inner = listeners.clone();
        let slot_in = slot.clone();
        let id = listeners.subscribe(move |_| {
            if let Some(id) = slot_in.get() {
                inner.unsubscribe(id);
            }
        });
        slot.set(Some(id));
        listeners.notify(&0);
        assert_eq!(listeners.len(), 0);
    }
}
