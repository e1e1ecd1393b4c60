mod error;
mod validation;

pub use error::ContactError;
pub use validation::{validate_contact_form, ContactForm};
