//! Webinar endpoints.

use crate::error::AppError;
use crate::extractors::{CorrelationId, CurrentUser};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use webinar_core::{
    ChangeSeatsCommand, OrganizerPolicy, WebinarError, WebinarId, WebinarRepository,
};

/// Seat count as sent by clients: `"30"` or `30`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SeatsInput {
    /// JSON integer that fits in `u64`.
    Number(u64),
    /// Decimal string.
    Text(String),
    /// Any other JSON number: negative, fractional or beyond `u64`.
    Float(f64),
}

impl SeatsInput {
    /// Convert to a seat count.
    ///
    /// Whole non-negative values beyond `u32::MAX`, however large, saturate so
    /// the domain rejects them as too many seats instead of the transport
    /// rejecting them as malformed.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`AppError`] if the value is not a non-negative integer.
    pub fn to_seats(&self) -> Result<u32, AppError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_digits(s.trim())?,
            Self::Float(f) => whole_number(*f)?,
        };
        Ok(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

fn parse_digits(s: &str) -> Result<u64, AppError> {
    match s.parse::<u64>() {
        Ok(value) => Ok(value),
        Err(_) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => Ok(u64::MAX),
        Err(_) => Err(not_an_integer()),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // whole and non-negative; `as` saturates
fn whole_number(f: f64) -> Result<u64, AppError> {
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 {
        Ok(f as u64)
    } else {
        Err(not_an_integer())
    }
}

fn not_an_integer() -> AppError {
    AppError::bad_request("seats must be a non-negative integer")
}

/// `POST /webinars/:id/seats` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeSeatsRequest {
    /// Requested seat count.
    pub seats: SeatsInput,
}

/// Successful seat change response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeSeatsResponse {
    /// Confirmation message.
    pub message: String,
}

/// Change the seat count of a webinar.
///
/// # Endpoint
///
/// ```text
/// POST /webinars/:id/seats
/// X-User-Id: alice-id
///
/// {"seats": "200"}
/// ```
///
/// # Errors
///
/// - 400 for a malformed body or a seat rule violation
/// - 401 without a caller identity
/// - 403 when the caller is not the organizer
/// - 404 for an unknown webinar
#[tracing::instrument(
    skip_all,
    fields(correlation_id = %correlation_id.0, webinar_id = %id, user_id = %user.id())
)]
pub async fn change_seats<R, P>(
    State(state): State<AppState<R, P>>,
    Path(id): Path<String>,
    correlation_id: CorrelationId,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<ChangeSeatsRequest>, JsonRejection>,
) -> Result<Json<ChangeSeatsResponse>, AppError>
where
    R: WebinarRepository + 'static,
    P: OrganizerPolicy + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        record_outcome("invalid_request");
        AppError::bad_request(rejection.body_text())
    })?;
    let seats = request.seats.to_seats().inspect_err(|_| record_outcome("invalid_request"))?;

    let command = ChangeSeatsCommand {
        user,
        webinar_id: WebinarId::new(id),
        seats,
    };

    match state.change_seats.execute(command).await {
        Ok(()) => {
            record_outcome("updated");
            Ok(Json(ChangeSeatsResponse {
                message: "Seats updated".to_string(),
            }))
        },
        Err(err) => {
            record_outcome(outcome_label(&err));
            Err(err.into())
        },
    }
}

const fn outcome_label(err: &WebinarError) -> &'static str {
    match err {
        WebinarError::NotFound => "not_found",
        WebinarError::NotOrganizer => "not_organizer",
        WebinarError::TooManySeats => "too_many_seats",
        WebinarError::ReduceSeats => "reduce_seats",
        WebinarError::InvalidWebinar { .. } | WebinarError::Storage(_) => "error",
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!("webinar_seat_changes_total", "outcome" => outcome).increment(1);
}
