//! Typed lifecycle notifications emitted by the controller.
//!
//! Subscribers are plain closures; there is no generic dispatch machinery.

/// Controller lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// A gesture began.
    Start,
    /// A gesture ended.
    End,
    /// Controller state was reset.
    Change,
}

/// Handle returned by [`EventListeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(ControlEvent)>;

/// Subscriber list for [`ControlEvent`]s.
#[derive(Default)]
pub struct EventListeners {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl std::fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl EventListeners {
    /// Register a callback invoked for every emitted event.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ControlEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `event` to every subscriber in registration order.
    pub(crate) fn emit(&mut self, event: ControlEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}
