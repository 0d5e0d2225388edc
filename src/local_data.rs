//! In-memory cache of fetched objects with explicit change subscriptions.
//!
//! Screens subscribe to the keys they display and unsubscribe on teardown.
//! Every `store` pushes the new value to the matching subscribers' channels.
//! Subscriptions flagged `auto_update` additionally ask the app to keep the
//! key fresh; see [`LocalStore::auto_update_keys`].

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug)]
struct Subscriber<K, V> {
    id: SubscriptionId,
    key: K,
    auto_update: bool,
    tx: Sender<V>,
}

/// Receiving half handed to a screen.
#[derive(Debug)]
pub struct Subscription<V> {
    id: SubscriptionId,
    rx: Receiver<V>,
}

impl<V> Subscription<V> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Latest value pushed since the last call, if any.
    pub fn latest(&self) -> Option<V> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(value) => latest = Some(value),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return latest,
            }
        }
    }
}

#[derive(Debug)]
pub struct LocalStore<K, V> {
    values: HashMap<K, V>,
    subscribers: Vec<Subscriber<K, V>>,
    next_id: u64,
}

impl<K, V> Default for LocalStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LocalStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Subscribes to `key`. A cached value is delivered right away.
    pub fn subscribe(&mut self, key: K, auto_update: bool) -> Subscription<V> {
        let (tx, rx) = mpsc::channel();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if let Some(value) = self.values.get(&key) {
            let _ = tx.send(value.clone());
        }
        self.subscribers.push(Subscriber {
            id,
            key,
            auto_update,
            tx,
        });
        Subscription { id, rx }
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|s| s.id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replaces the cached value and notifies subscribers of `key`.
    /// Subscribers whose receiver was dropped are pruned.
    pub fn store(&mut self, key: K, value: V) {
        self.subscribers
            .retain(|s| s.key != key || s.tx.send(value.clone()).is_ok());
        self.values.insert(key, value);
    }

    /// Keys with at least one live auto-updating subscription, in subscription order.
    pub fn auto_update_keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = Vec::new();
        for sub in self.subscribers.iter().filter(|s| s.auto_update) {
            if !keys.contains(&sub.key) {
                keys.push(sub.key.clone());
            }
        }
        keys
    }
}
