//! Explicit notification store with subscribers.
//!
//! Owned by whoever needs notifications and passed around by handle; there is
//! no process-wide queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, RwLock};

use super::reducer::{reduce, Toast, ToastAction, ToastId, ToastState, ToastUpdate, ToastVariant};

/// Channel capacity for state updates.
const CHANNEL_CAPACITY: usize = 32;

/// Default delay between dismissing a toast and removing it.
pub const TOAST_REMOVE_DELAY: Duration = Duration::from_secs(5);

/// What a caller supplies to show a toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

/// Cloneable handle to a shared toast state.
#[derive(Debug, Clone)]
pub struct ToastStore {
    state: Arc<RwLock<ToastState>>,
    sender: broadcast::Sender<ToastState>,
    next_id: Arc<AtomicU64>,
    remove_delay: Duration,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::with_remove_delay(TOAST_REMOVE_DELAY)
    }

    pub fn with_remove_delay(remove_delay: Duration) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(ToastState::default())),
            sender,
            next_id: Arc::new(AtomicU64::new(1)),
            remove_delay,
        }
    }

    /// Subscribes to every state produced after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ToastState> {
        self.sender.subscribe()
    }

    /// Returns a snapshot of the current state.
    pub async fn snapshot(&self) -> ToastState {
        self.state.read().await.clone()
    }

    /// Runs `action` through the reducer and notifies subscribers.
    pub async fn dispatch(&self, action: ToastAction) -> ToastState {
        let next = {
            let mut state = self.state.write().await;
            *state = reduce(&state, action);
            state.clone()
        };
        // No subscribers is fine.
        let _ = self.sender.send(next.clone());
        next
    }

    /// Shows a new toast and returns its id.
    pub async fn toast(&self, request: ToastRequest) -> ToastId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.dispatch(ToastAction::Add(Toast {
            id,
            title: request.title,
            description: request.description,
            variant: request.variant,
            open: true,
        }))
        .await;
        id
    }

    pub async fn update(&self, id: ToastId, update: ToastUpdate) {
        self.dispatch(ToastAction::Update(id, update)).await;
    }

    /// Closes a toast (or all) and schedules its removal.
    ///
    /// Only the toasts closed by this call are removed; toasts added during
    /// the delay stay.
    pub async fn dismiss(&self, id: Option<ToastId>) {
        let state = self.dispatch(ToastAction::Dismiss(id)).await;
        let closed: Vec<ToastId> = match id {
            Some(id) => vec![id],
            None => state.toasts.iter().map(|toast| toast.id).collect(),
        };

        let store = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(store.remove_delay).await;
            for id in closed {
                store.dispatch(ToastAction::Remove(Some(id))).await;
            }
        });
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}
