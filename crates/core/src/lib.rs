//! gracesite_core - functional core for the gracesite project.
//!
//! Pure data types and transformations behind the sermon browser, the events
//! calendar and the contact form. Nothing in this crate performs I/O; fetching,
//! persistence and rendering live in `gracesite_client`.

pub mod browse;
pub mod category;
pub mod contact;
pub mod events;
pub mod format;
pub mod notify;
pub mod playback;
pub mod serde;
pub mod sermons;
pub mod site;
