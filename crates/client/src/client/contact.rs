//! Contact form submission to the third-party form service.

use gracesite_core::contact::{validate_contact_form, ContactForm};

use super::GraceClient;
use crate::error::Result;

impl GraceClient {
    /// Validate and submit a contact form.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<()> {
        let form = form.normalized();
        validate_contact_form(&form)?;

        let response = self
            .client
            .post(&self.config.contact_url)
            .header("Accept", "application/json")
            .json(&form)
            .send()
            .await?;
        self.handle_text_response(response).await?;

        tracing::info!(email = %form.email, "contact form submitted");
        Ok(())
    }
}
