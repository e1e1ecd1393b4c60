//! Sermon listing operations.

use gracesite_core::sermons::{sort_newest_first, Sermon, SermonPage};

use super::GraceClient;
use crate::error::{ClientError, Result};

/// Parses a sermon listing response into display sermons, newest first.
pub fn parse_sermon_page(body: &str) -> Result<Vec<Sermon>> {
    let page: SermonPage = serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("sermon listing: {e}")))?;
    let mut sermons = Sermon::from_records(&page.results);
    sort_newest_first(&mut sermons);
    Ok(sermons)
}

impl GraceClient {
    /// Fetch and normalize the sermon listing.
    pub async fn fetch_sermons(&self) -> Result<Vec<Sermon>> {
        let body = self.get_text(&self.config.sermons_url).await?;
        let sermons = parse_sermon_page(&body)?;
        tracing::debug!(count = sermons.len(), "loaded sermons");
        Ok(sermons)
    }

    /// Fetch sermons; any failure degrades to an empty list.
    pub async fn fetch_sermons_or_empty(&self) -> Vec<Sermon> {
        match self.fetch_sermons().await {
            Ok(sermons) => sermons,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load sermons");
                Vec::new()
            }
        }
    }
}
