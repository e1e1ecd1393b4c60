//! Toast notifications as an explicit reducer-driven store.

mod reducer;
mod store;

pub use reducer::{
    reduce, Toast, ToastAction, ToastId, ToastState, ToastUpdate, ToastVariant, TOAST_LIMIT,
};
pub use store::{ToastRequest, ToastStore, TOAST_REMOVE_DELAY};
