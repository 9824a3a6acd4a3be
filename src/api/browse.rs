use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::views::{BookingPage, Page};
use super::{ApiError, AppState, paths};
use crate::domain::{DoctorId, NationalId};
use crate::services::BookingError;

#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub iin: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
}

/// Doctor list plus the open slots of the requested doctor.
///
/// Missing or unknown citizens are sent back to the identify form.
pub async fn show(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Response, ApiError> {
    let Some(national_id) = paths::national_id(query.national_id.as_deref(), query.iin.as_deref())
        .and_then(NationalId::parse)
    else {
        return Ok(Redirect::to(paths::IDENTIFY).into_response());
    };

    let requested_doctor = paths::present(query.doctor_id.as_deref()).map(str::to_string);
    let doctor_id = requested_doctor.as_deref().and_then(DoctorId::parse);

    match state.booking.browse(&national_id, doctor_id).await {
        Ok(browse) => {
            let page = BookingPage::new(browse, requested_doctor);
            Ok(state.views.render(&Page::Booking(page))?.into_response())
        }
        Err(BookingError::CitizenNotFound) => Ok(Redirect::to(paths::IDENTIFY).into_response()),
        Err(err) => Err(err.into()),
    }
}
