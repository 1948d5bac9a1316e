use crate::model::{NoteRecord, UserId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

struct Subscriber {
    id: u64,
    owner: UserId,
    sender: Sender<Vec<NoteRecord>>,
}

/// The store side of every live subscription.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<Subscriber>,
}

pub(crate) type SharedSubscribers = Rc<RefCell<Subscribers>>;

impl Subscribers {
    /// Register a new subscriber and queue `initial` for it.
    pub(crate) fn add(
        registry: &SharedSubscribers,
        owner: &UserId,
        initial: Vec<NoteRecord>,
    ) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        // The receiver is alive, so this cannot fail.
        let _ = sender.send(initial);

        let mut subs = registry.borrow_mut();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.entries.push(Subscriber {
            id,
            owner: owner.clone(),
            sender,
        });

        Subscription {
            id,
            receiver,
            registry: Rc::downgrade(registry),
        }
    }

    pub(crate) fn watches(&self, owner: &UserId) -> bool {
        self.entries.iter().any(|s| &s.owner == owner)
    }

    /// Queue `snapshot` for every subscriber of `owner`, dropping any whose
    /// handle has gone away.
    pub(crate) fn publish(&mut self, owner: &UserId, snapshot: &[NoteRecord]) {
        self.entries
            .retain(|s| &s.owner != owner || s.sender.send(snapshot.to_vec()).is_ok());
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|s| s.id != id);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A cancellable feed of note snapshots for one owner.
///
/// Each item is the owner's complete note list at the time of a write,
/// ordered most recently edited first. Dropping the handle cancels it.
pub struct Subscription {
    id: u64,
    receiver: Receiver<Vec<NoteRecord>>,
    registry: Weak<RefCell<Subscribers>>,
}

impl Subscription {
    /// The oldest undelivered snapshot, if any.
    pub fn try_next(&self) -> Option<Vec<NoteRecord>> {
        match self.receiver.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain the queue and keep only the newest snapshot.
    pub fn latest(&self) -> Option<Vec<NoteRecord>> {
        let mut latest = None;
        while let Some(snapshot) = self.try_next() {
            latest = Some(snapshot);
        }
        latest
    }

    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut subs) = registry.try_borrow_mut() {
                subs.remove(self.id);
            }
        }
    }
}
