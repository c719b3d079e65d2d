use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{
    errors::webinars::WebinarError,
    repositories::webinars::WebinarRepository,
    value_objects::webinars::{ChangeSeatsCommand, MAX_WEBINAR_SEATS},
};

/// Lets the organizer of a webinar raise its seat capacity.
///
/// Checks run in a fixed order: existence, ownership, lower bound, upper bound.
/// The first failing check ends the call and nothing is written.
pub struct ChangeSeatsUseCase<T>
where
    T: WebinarRepository + Send + Sync,
{
    webinar_repository: Arc<T>,
}

impl<T> ChangeSeatsUseCase<T>
where
    T: WebinarRepository + Send + Sync,
{
    pub fn new(webinar_repository: Arc<T>) -> Self {
        Self { webinar_repository }
    }

    pub async fn execute(&self, command: ChangeSeatsCommand) -> Result<(), WebinarError> {
        let ChangeSeatsCommand {
            user,
            webinar_id,
            seats,
        } = command;

        info!(
            user_id = %user.id,
            %webinar_id,
            seats,
            "change_seats: request received"
        );

        let mut webinar = self
            .webinar_repository
            .find_by_id(&webinar_id)
            .await
            .map_err(|err| {
                error!(
                    %webinar_id,
                    db_error = ?err,
                    "change_seats: failed to load webinar"
                );
                err
            })?
            .ok_or_else(|| {
                warn!(%webinar_id, "change_seats: webinar not found");
                WebinarError::NotFound
            })?;

        if !webinar.is_organizer(&user.id) {
            warn!(
                user_id = %user.id,
                %webinar_id,
                "change_seats: user is not the organizer"
            );
            return Err(WebinarError::NotOrganizer);
        }

        if seats <= webinar.seats {
            warn!(
                %webinar_id,
                seats,
                current_seats = webinar.seats,
                "change_seats: seats must increase"
            );
            return Err(WebinarError::ReduceSeats);
        }

        if seats > MAX_WEBINAR_SEATS {
            warn!(
                %webinar_id,
                seats,
                max_seats = MAX_WEBINAR_SEATS,
                "change_seats: too many seats"
            );
            return Err(WebinarError::TooManySeats);
        }

        let current_seats = webinar.seats;
        webinar.update_seats(seats);

        self.webinar_repository
            .update(webinar)
            .await
            .map_err(|err| {
                error!(
                    %webinar_id,
                    db_error = ?err,
                    "change_seats: failed to persist webinar"
                );
                err
            })?;

        info!(
            %webinar_id,
            current_seats,
            seats,
            "change_seats: seats updated"
        );

        Ok(())
    }
}
