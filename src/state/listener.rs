use std::fmt;

/// A change applied to a [`DeckState`](super::DeckState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckChange {
    CurrentSlide(usize),
    ImageSet(u32),
    ImageRemoved(u32),
    /// Slide ids touched by one bulk assignment, in ascending order.
    BulkAssigned(Vec<u32>),
}

/// Observer for store mutations. Views register one to know when to re-render.
pub trait DeckListener {
    fn on_change(&mut self, change: &DeckChange);
}

impl<F> DeckListener for F
where
    F: FnMut(&DeckChange),
{
    fn on_change(&mut self, change: &DeckChange) {
        self(change)
    }
}

/// Handle returned by [`DeckState::subscribe`](super::DeckState::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) usize);

/// Registered listeners, notified in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: usize,
    entries: Vec<(ListenerId, Box<dyn DeckListener>)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Box<dyn DeckListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, change: &DeckChange) {
        for (_, listener) in &mut self.entries {
            listener.on_change(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("entries", &format!("<{} listeners>", self.entries.len()))
            .finish()
    }
}
