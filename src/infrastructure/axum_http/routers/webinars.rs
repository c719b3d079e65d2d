use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};

use crate::{
    application::usecases::change_seats::ChangeSeatsUseCase,
    domain::{
        repositories::webinars::WebinarRepository,
        value_objects::webinars::{ChangeSeatsCommand, ChangeSeatsModel},
    },
    infrastructure::axum_http::{
        auth::AuthUser,
        error_responses::{AppError, MessageResponse},
    },
};

pub fn routes<T>(webinar_repository: Arc<T>) -> Router
where
    T: WebinarRepository + Send + Sync + 'static,
{
    let change_seats_usecase = ChangeSeatsUseCase::new(webinar_repository);

    Router::new()
        .route("/:webinar_id/seats", post(change_seats::<T>))
        .with_state(Arc::new(change_seats_usecase))
}

pub async fn change_seats<T>(
    State(change_seats_usecase): State<Arc<ChangeSeatsUseCase<T>>>,
    auth: AuthUser,
    Path(webinar_id): Path<String>,
    payload: Result<Json<ChangeSeatsModel>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    T: WebinarRepository + Send + Sync + 'static,
{
    let Json(change_seats_model) = payload.map_err(|rejection| {
        warn!(
            user_id = %auth.user_id,
            %webinar_id,
            reason = %rejection.body_text(),
            "webinars: invalid request body"
        );
        AppError::from(rejection)
    })?;

    let seats = change_seats_model.seats.to_seats().map_err(|msg| {
        warn!(
            user_id = %auth.user_id,
            %webinar_id,
            reason = %msg,
            "webinars: invalid seats value"
        );
        AppError::BadRequest(msg)
    })?;

    change_seats_usecase
        .execute(ChangeSeatsCommand {
            user: auth.into(),
            webinar_id,
            seats,
        })
        .await?;

    info!(seats, "webinars: change seats request succeeded");

    Ok((StatusCode::OK, Json(MessageResponse::new("Seats updated"))))
}
