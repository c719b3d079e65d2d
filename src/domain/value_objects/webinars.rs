use serde::Deserialize;

use crate::domain::value_objects::iam::AuthenticatedUser;

pub const MAX_WEBINAR_SEATS: i32 = 1000;

/// Input of `ChangeSeatsUseCase::execute`. `seats` is already numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSeatsCommand {
    pub user: AuthenticatedUser,
    pub webinar_id: String,
    pub seats: i32,
}

/// Seats as sent by a client: usually text, a JSON number is tolerated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SeatsInput {
    Number(i64),
    Text(String),
}

impl SeatsInput {
    pub fn to_seats(&self) -> Result<i32, String> {
        let value = match self {
            SeatsInput::Number(number) => *number,
            SeatsInput::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("seats must be an integer, got {:?}", text))?,
        };

        i32::try_from(value).map_err(|_| format!("seats is out of range: {}", value))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChangeSeatsModel {
    pub seats: SeatsInput,
}
