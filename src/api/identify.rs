use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::views::{IdentifyPage, Page};
use super::{ApiError, AppState, paths};
use crate::domain::NationalId;
use crate::services::BookingError;

#[derive(Debug, Default, Deserialize)]
pub struct IdentifyForm {
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub iin: Option<String>,
}

pub async fn show_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    state
        .views
        .render(&Page::Identify(IdentifyPage::default()))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IdentifyForm>,
) -> Result<Response, ApiError> {
    let Some(national_id) = paths::national_id(form.national_id.as_deref(), form.iin.as_deref())
        .and_then(NationalId::parse)
    else {
        let page = IdentifyPage::with_error(BookingError::MissingNationalId.to_string(), "");
        return Ok(state.views.render(&Page::Identify(page))?.into_response());
    };

    match state.booking.identify(&national_id).await {
        Ok(_) => Ok(Redirect::to(&paths::booking_url(national_id.as_str(), None)).into_response()),
        Err(err @ BookingError::CitizenNotFound) => {
            let page = IdentifyPage::with_error(err.to_string(), national_id.as_str());
            Ok(state.views.render(&Page::Identify(page))?.into_response())
        }
        Err(err) => Err(err.into()),
    }
}
