//! Toast notifications.
//!
//! A reducer over [`ToastState`] plus an explicit [`ToastBus`] that owns the
//! state and broadcasts every change to a bounded set of subscribers.

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ToastError;

/// Toasts shown at once; adding beyond this drops the oldest.
pub const TOAST_LIMIT: usize = 1;

/// Default cap on concurrent bus subscribers.
pub const MAX_SUBSCRIBERS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub variant: ToastVariant,
    pub title: Option<String>,
    pub description: Option<String>,
    pub open: bool,
}

/// Toast content before an id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewToast {
    pub variant: ToastVariant,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl NewToast {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    Add(Toast),
    /// Replace the toast with the same id. `Toast` carries every field, so
    /// replacing it is the same as merging the new fields over the old.
    Update(Toast),
    /// Close one toast, or all when `None`. Closed toasts stay listed.
    Dismiss(Option<ToastId>),
    /// Drop one toast, or all when `None`.
    Remove(Option<ToastId>),
}

/// Toasts, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn apply(&mut self, action: ToastAction, limit: usize) {
        match action {
            ToastAction::Add(toast) => {
                self.toasts.insert(0, toast);
                self.toasts.truncate(limit);
            }
            ToastAction::Update(toast) => {
                if let Some(slot) = self.toasts.iter_mut().find(|t| t.id == toast.id) {
                    *slot = toast;
                }
            }
            ToastAction::Dismiss(target) => {
                for t in self.toasts.iter_mut() {
                    if target.map_or(true, |id| id == t.id) {
                        t.open = false;
                    }
                }
            }
            ToastAction::Remove(None) => self.toasts.clear(),
            ToastAction::Remove(Some(id)) => self.toasts.retain(|t| t.id != id),
        }
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(&ToastState)>;

/// Owns the toast state and notifies subscribers after every action.
pub struct ToastBus {
    state: ToastState,
    limit: usize,
    max_subscribers: usize,
    next_sub: u32,
    subscribers: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for ToastBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastBus")
            .field("state", &self.state)
            .field("limit", &self.limit)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastBus {
    pub fn new() -> Self {
        Self::with_limits(TOAST_LIMIT, MAX_SUBSCRIBERS)
    }

    pub fn with_limits(limit: usize, max_subscribers: usize) -> Self {
        Self {
            state: ToastState::default(),
            limit,
            max_subscribers,
            next_sub: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ToastState) + 'static,
    ) -> Result<SubscriptionId, ToastError> {
        if self.subscribers.len() >= self.max_subscribers {
            return Err(ToastError::TooManySubscribers {
                limit: self.max_subscribers,
            });
        }
        let id = SubscriptionId(self.next_sub);
        self.next_sub = self.next_sub.wrapping_add(1);
        self.subscribers.push((id, Box::new(listener)));
        trace!("toast bus: subscriber {} added", id.0);
        Ok(id)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(s, _)| *s != id);
        before != self.subscribers.len()
    }

    pub fn dispatch(&mut self, action: ToastAction) {
        self.state.apply(action, self.limit);
        for (_, listener) in self.subscribers.iter_mut() {
            listener(&self.state);
        }
    }

    /// Show a toast and return its id.
    pub fn toast(&mut self, new: NewToast) -> ToastId {
        let id = ToastId::new();
        debug!("toast: {id} {:?}", new.title);
        self.dispatch(ToastAction::Add(Toast {
            id,
            variant: new.variant,
            title: new.title,
            description: new.description,
            open: true,
        }));
        id
    }

    pub fn update(&mut self, toast: Toast) {
        self.dispatch(ToastAction::Update(toast));
    }

    pub fn dismiss(&mut self, id: Option<ToastId>) {
        self.dispatch(ToastAction::Dismiss(id));
    }

    pub fn remove(&mut self, id: Option<ToastId>) {
        self.dispatch(ToastAction::Remove(id));
    }

    /// Open-state callback from the toast view; closing dismisses.
    pub fn set_open(&mut self, id: ToastId, open: bool) {
        if !open {
            self.dismiss(Some(id));
        }
    }

    pub fn state(&self) -> &ToastState {
        &self.state
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
