use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::webinars::WebinarEntity;

#[automock]
#[async_trait]
pub trait WebinarRepository {
    /// `Ok(None)` when no webinar has this id.
    async fn find_by_id(&self, webinar_id: &str) -> Result<Option<WebinarEntity>>;
    /// Fails when the id is already taken.
    async fn create(&self, webinar: WebinarEntity) -> Result<()>;
    /// Rewrites the stored record with the same id. Fails when it no longer exists.
    async fn update(&self, webinar: WebinarEntity) -> Result<()>;
}
