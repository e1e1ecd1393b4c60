use serde::{Deserialize, Serialize};

/// Most toasts visible at once; older ones are dropped.
pub const TOAST_LIMIT: usize = 1;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
    /// False once dismissed; removal follows after a delay.
    pub open: bool,
}

/// Fields to change on an existing toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<ToastVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    /// Newest first.
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastAction {
    Add(Toast),
    Update(ToastId, ToastUpdate),
    /// Close one toast, or all when `None`.
    Dismiss(Option<ToastId>),
    /// Drop one toast, or all when `None`.
    Remove(Option<ToastId>),
}

/// Computes the next state. Pure: timers are the store's concern.
pub fn reduce(state: &ToastState, action: ToastAction) -> ToastState {
    match action {
        ToastAction::Add(toast) => {
            let mut toasts = Vec::with_capacity(TOAST_LIMIT);
            toasts.push(toast);
            toasts.extend(state.toasts.iter().cloned());
            toasts.truncate(TOAST_LIMIT);
            ToastState { toasts }
        }
        ToastAction::Update(id, update) => ToastState {
            toasts: state
                .toasts
                .iter()
                .cloned()
                .map(|mut toast| {
                    if toast.id == id {
                        if let Some(title) = &update.title {
                            toast.title = Some(title.clone());
                        }
                        if let Some(description) = &update.description {
                            toast.description = Some(description.clone());
                        }
                        if let Some(variant) = update.variant {
                            toast.variant = variant;
                        }
                    }
                    toast
                })
                .collect(),
        },
        ToastAction::Dismiss(target) => ToastState {
            toasts: state
                .toasts
                .iter()
                .cloned()
                .map(|mut toast| {
                    if target.is_none_or(|id| id == toast.id) {
                        toast.open = false;
                    }
                    toast
                })
                .collect(),
        },
        ToastAction::Remove(None) => ToastState::default(),
        ToastAction::Remove(Some(id)) => ToastState {
            toasts: state
                .toasts
                .iter()
                .filter(|toast| toast.id != id)
                .cloned()
                .collect(),
        },
    }
}
