use anyhow::{Result, bail};
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::{
    domain::{entities::webinars::WebinarEntity, repositories::webinars::WebinarRepository},
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::webinars},
};

pub struct WebinarPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WebinarPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WebinarRepository for WebinarPostgres {
    async fn find_by_id(&self, webinar_id: &str) -> Result<Option<WebinarEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = webinars::table
            .filter(webinars::id.eq(webinar_id))
            .select(WebinarEntity::as_select())
            .first::<WebinarEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn create(&self, webinar: WebinarEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(webinars::table)
            .values(&webinar)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn update(&self, webinar: WebinarEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(webinars::table)
            .filter(webinars::id.eq(&webinar.id))
            .set(&webinar.to_edit_entity())
            .execute(&mut conn)?;

        if affected == 0 {
            bail!("webinar {} does not exist", webinar.id);
        }

        Ok(())
    }
}
