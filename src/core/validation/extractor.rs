//! Axum extractor for ship payloads
//!
//! Axum's own `Json` extractor answers malformed bodies with 415/422 and a
//! plain-text message. [`Payload`] reports every body problem as a
//! [`FleetError`] so the client always sees a 400 with the usual error shape.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::core::error::{FleetError, RequestError, ValidationError};

/// JSON body extractor with fleet error responses
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_ship(
///     State(state): State<ShipAppState>,
///     Payload(draft): Payload<ShipDraft>,
/// ) -> Result<Json<Ship>, FleetError> {
///     // draft is a well-formed ShipDraft; field rules are checked by the service
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = FleetError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> FleetError {
    match rejection {
        JsonRejection::JsonDataError(e) => ValidationError::InvalidJson {
            message: e.body_text(),
        }
        .into(),
        JsonRejection::JsonSyntaxError(e) => ValidationError::InvalidJson {
            message: e.body_text(),
        }
        .into(),
        other => RequestError::InvalidBody {
            message: other.body_text(),
        }
        .into(),
    }
}
