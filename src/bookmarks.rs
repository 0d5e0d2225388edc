use crate::assets::tier_name;
use crate::local_data::{LocalStore, Subscription};
use crate::model::{CareerSummary, PlayerIdentity, User, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkList {
    entries: Vec<UserId>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.entries.contains(user)
    }

    pub fn add(&mut self, user: UserId) {
        if !self.contains(&user) {
            self.entries.push(user);
        }
    }

    pub fn remove(&mut self, user: &UserId) {
        self.entries.retain(|u| u != user);
    }

    /// Returns whether `user` is bookmarked afterwards.
    pub fn toggle(&mut self, user: &UserId) -> bool {
        if self.contains(user) {
            self.remove(user);
            false
        } else {
            self.add(user.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The signed-in user first, then bookmarks in insertion order.
    pub fn listed(&self, viewer: Option<&UserId>) -> Vec<UserId> {
        let mut listed: Vec<UserId> = viewer.into_iter().cloned().collect();
        for user in &self.entries {
            if Some(user) != viewer {
                listed.push(user.clone());
            }
        }
        listed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCell {
    pub user_id: UserId,
    pub user: Option<User>,
    pub account_level: Option<u32>,
    pub rank_tier: Option<u32>,
}

impl UserCell {
    pub fn build(
        user_id: &UserId,
        users: &LocalStore<UserId, User>,
        identities: &LocalStore<UserId, PlayerIdentity>,
        summaries: &LocalStore<UserId, CareerSummary>,
    ) -> Self {
        Self {
            user_id: user_id.clone(),
            user: users.get(user_id).cloned(),
            account_level: identities.get(user_id).map(|i| i.account_level),
            rank_tier: summaries.get(user_id).map(|s| s.competitive_tier),
        }
    }

    pub fn title(&self) -> String {
        match &self.user {
            Some(user) => format!("{} #{}", user.game_name, user.tag_line),
            None => "Unknown Player".to_string(),
        }
    }

    pub fn level_label(&self) -> Option<String> {
        self.account_level.map(|level| format!("Level {level}"))
    }

    pub fn rank_label(&self) -> &'static str {
        self.rank_tier.map(tier_name).unwrap_or("—")
    }
}

/// Subscriptions held by the visible bookmark cells.
#[derive(Debug, Default)]
pub struct CellSubscriptions {
    user_ids: Vec<UserId>,
    users: Vec<Subscription<User>>,
    identities: Vec<Subscription<PlayerIdentity>>,
    summaries: Vec<Subscription<CareerSummary>>,
}

impl CellSubscriptions {
    pub fn user_ids(&self) -> &[UserId] {
        &self.user_ids
    }

    /// Resubscribes when the visible cells changed. Returns whether it did.
    pub fn sync(
        &mut self,
        wanted: &[UserId],
        users: &mut LocalStore<UserId, User>,
        identities: &mut LocalStore<UserId, PlayerIdentity>,
        summaries: &mut LocalStore<UserId, CareerSummary>,
    ) -> bool {
        if self.user_ids == wanted {
            return false;
        }
        self.teardown(users, identities, summaries);
        for id in wanted {
            self.users.push(users.subscribe(id.clone(), false));
            self.identities.push(identities.subscribe(id.clone(), false));
            self.summaries.push(summaries.subscribe(id.clone(), true));
        }
        self.user_ids = wanted.to_vec();
        true
    }

    pub fn teardown(
        &mut self,
        users: &mut LocalStore<UserId, User>,
        identities: &mut LocalStore<UserId, PlayerIdentity>,
        summaries: &mut LocalStore<UserId, CareerSummary>,
    ) {
        for sub in self.users.drain(..) {
            users.unsubscribe(sub.id());
        }
        for sub in self.identities.drain(..) {
            identities.unsubscribe(sub.id());
        }
        for sub in self.summaries.drain(..) {
            summaries.unsubscribe(sub.id());
        }
        self.user_ids.clear();
    }

    /// Drains pending notifications; true if any cell saw a new value.
    pub fn drain_changes(&self) -> bool {
        let mut changed = false;
        for sub in &self.users {
            changed |= sub.latest().is_some();
        }
        for sub in &self.identities {
            changed |= sub.latest().is_some();
        }
        for sub in &self.summaries {
            changed |= sub.latest().is_some();
        }
        changed
    }
}
