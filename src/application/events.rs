//! Synchronous publish/subscribe.
//!
//! Subscribers are plain callbacks. `publish` invokes every live subscriber
//! on the caller's thread, in registration order, before returning.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use metrics::counter;
use tracing::debug;

use crate::domain::entities::PostRecord;
use crate::infra::lock::mutex_lock;

const SOURCE: &str = "application::events";

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub struct EventBus<T> {
    subscribers: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: AtomicU64,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let callback: Callback<T> = Arc::new(callback);
        mutex_lock(&self.subscribers, SOURCE, "subscribe").push((id, callback));
        id
    }

    /// Returns `false` when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = mutex_lock(&self.subscribers, SOURCE, "unsubscribe");
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn publish(&self, event: &T) {
        // Snapshot so callbacks may (un)subscribe without deadlocking.
        let snapshot: Vec<Callback<T>> = mutex_lock(&self.subscribers, SOURCE, "publish")
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        counter!("folio_events_published_total").increment(1);
        debug!(subscribers = snapshot.len(), "Publishing event");

        for callback in snapshot {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        mutex_lock(&self.subscribers, SOURCE, "subscriber_count").len()
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Change notifications emitted by the blog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    Created(PostRecord),
    Updated(PostRecord),
    Deleted { id: u64 },
}

impl PostEvent {
    pub fn post_id(&self) -> u64 {
        match self {
            PostEvent::Created(post) | PostEvent::Updated(post) => post.id,
            PostEvent::Deleted { id } => *id,
        }
    }
}
