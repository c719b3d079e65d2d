use thiserror::Error;

use crate::domain::value_objects::webinars::MAX_WEBINAR_SEATS;

/// Failures of the webinar use cases. Storage errors pass through untouched.
#[derive(Debug, Error)]
pub enum WebinarError {
    #[error("Webinar not found")]
    NotFound,

    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    #[error("You cannot reduce the number of seats")]
    ReduceSeats,

    #[error("Webinar must have at most {max} seats", max = MAX_WEBINAR_SEATS)]
    TooManySeats,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
