use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::webinars;

#[derive(Debug, Clone, PartialEq, Selectable, Queryable, Insertable)]
#[diesel(table_name = webinars)]
pub struct WebinarEntity {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Columns rewritten by `WebinarRepository::update`. `id` and `organizer_id` never change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = webinars)]
pub struct EditWebinarEntity {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl WebinarEntity {
    pub fn new(
        id: impl Into<String>,
        organizer_id: impl Into<String>,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        seats: i32,
    ) -> Self {
        Self {
            id: id.into(),
            organizer_id: organizer_id.into(),
            title: title.into(),
            start_date,
            end_date,
            seats,
        }
    }

    /// Plain setter. Seat rules are checked by `ChangeSeatsUseCase`, not here.
    pub fn update_seats(&mut self, seats: i32) {
        self.seats = seats;
    }

    pub fn is_organizer(&self, user_id: &str) -> bool {
        self.organizer_id == user_id
    }

    pub fn to_edit_entity(&self) -> EditWebinarEntity {
        EditWebinarEntity {
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            seats: self.seats,
        }
    }
}
