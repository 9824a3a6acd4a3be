use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::views::Page;
use super::{ApiError, AppState, paths};
use crate::domain::{DoctorId, NationalId, SlotId};
use crate::services::{BookingError, BookingRequest};

#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub iin: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub slot_id: Option<String>,
}

/// Books the chosen slot.
///
/// A slot that was taken in the meantime sends the citizen back to the slot
/// list of the same doctor instead of failing.
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BookForm>,
) -> Result<Response, ApiError> {
    let (Some(national_id), Some(doctor_id), Some(slot_id)) = (
        paths::national_id(form.national_id.as_deref(), form.iin.as_deref())
            .and_then(NationalId::parse),
        paths::present(form.doctor_id.as_deref()),
        paths::present(form.slot_id.as_deref()),
    ) else {
        return Ok(Redirect::to(paths::IDENTIFY).into_response());
    };

    let request = BookingRequest {
        national_id: national_id.clone(),
        doctor_id: DoctorId::parse(doctor_id),
        slot_id: SlotId::parse(slot_id),
    };

    match state.booking.confirm(&request).await {
        Ok(confirmation) => Ok(state
            .views
            .render(&Page::Success(confirmation))?
            .into_response()),
        Err(BookingError::CitizenNotFound) => Ok(Redirect::to(paths::IDENTIFY).into_response()),
        Err(BookingError::SlotUnavailable) => Ok(Redirect::to(&paths::booking_url(
            national_id.as_str(),
            Some(doctor_id),
        ))
        .into_response()),
        Err(err) => Err(err.into()),
    }
}
