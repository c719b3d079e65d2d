use std::collections::HashMap;

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{entities::webinars::WebinarEntity, repositories::webinars::WebinarRepository};

/// Process-local webinar store for tests and local runs.
#[derive(Debug, Default)]
pub struct WebinarInMemory {
    webinars: RwLock<HashMap<String, WebinarEntity>>,
}

impl WebinarInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_webinars(webinars: impl IntoIterator<Item = WebinarEntity>) -> Self {
        let webinars = webinars
            .into_iter()
            .map(|webinar| (webinar.id.clone(), webinar))
            .collect();

        Self {
            webinars: RwLock::new(webinars),
        }
    }
}

#[async_trait]
impl WebinarRepository for WebinarInMemory {
    async fn find_by_id(&self, webinar_id: &str) -> Result<Option<WebinarEntity>> {
        let webinars = self.webinars.read().await;
        Ok(webinars.get(webinar_id).cloned())
    }

    async fn create(&self, webinar: WebinarEntity) -> Result<()> {
        let mut webinars = self.webinars.write().await;
        if webinars.contains_key(&webinar.id) {
            bail!("webinar {} already exists", webinar.id);
        }

        webinars.insert(webinar.id.clone(), webinar);
        Ok(())
    }

    async fn update(&self, webinar: WebinarEntity) -> Result<()> {
        let mut webinars = self.webinars.write().await;
        match webinars.get_mut(&webinar.id) {
            Some(stored) => {
                *stored = webinar;
                Ok(())
            }
            None => bail!("webinar {} does not exist", webinar.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample_webinar(id: &str, seats: i32) -> WebinarEntity {
        let start_date = Utc::now();
        WebinarEntity::new(
            id,
            "organizer-id",
            "Fearless concurrency",
            start_date,
            start_date + Duration::minutes(45),
            seats,
        )
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let webinar_repository = WebinarInMemory::new();

        let found = webinar_repository.find_by_id("missing").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn create_then_find() {
        let webinar_repository = WebinarInMemory::new();
        let webinar = sample_webinar("webinar-id", 10);

        webinar_repository.create(webinar.clone()).await.unwrap();

        let found = webinar_repository.find_by_id("webinar-id").await.unwrap();
        assert_eq!(found, Some(webinar));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let webinar = sample_webinar("webinar-id", 10);
        let webinar_repository = WebinarInMemory::with_webinars(vec![webinar.clone()]);

        let mut duplicate = webinar.clone();
        duplicate.title = "Another title".to_string();

        assert!(webinar_repository.create(duplicate).await.is_err());

        let found = webinar_repository.find_by_id("webinar-id").await.unwrap();
        assert_eq!(found, Some(webinar));
    }

    #[tokio::test]
    async fn update_replaces_stored_record() {
        let webinar = sample_webinar("webinar-id", 10);
        let other = sample_webinar("other-id", 50);
        let webinar_repository =
            WebinarInMemory::with_webinars(vec![webinar.clone(), other.clone()]);

        let mut changed = webinar.clone();
        changed.title = "New title".to_string();
        changed.update_seats(20);
        webinar_repository.update(changed.clone()).await.unwrap();

        let found = webinar_repository.find_by_id("webinar-id").await.unwrap();
        assert_eq!(found, Some(changed));

        let untouched = webinar_repository.find_by_id("other-id").await.unwrap();
        assert_eq!(untouched, Some(other));
    }

    #[tokio::test]
    async fn update_fails_for_missing_record() {
        let webinar_repository = WebinarInMemory::new();

        let result = webinar_repository
            .update(sample_webinar("webinar-id", 10))
            .await;

        assert!(result.is_err());
    }
}
