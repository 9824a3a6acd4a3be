//! Domain service for the three booking flows.
//!
//! Handlers never touch the database directly: they parse request values into
//! domain types, call this service, and map the outcome onto a view or a
//! redirect.

use serde::Serialize;
use thiserror::Error;

use crate::domain::{DoctorId, NationalId, SlotId};
use crate::models::{Appointment, Citizen, Doctor, TimeSlot};

/// Errors produced by the booking flows.
///
/// Only [`BookingError::Database`] is fatal; every other variant sends the
/// user back to a form they can act on.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Enter your national ID.")]
    MissingNationalId,

    #[error("Citizen with this national ID was not found.")]
    CitizenNotFound,

    #[error("The selected time slot is no longer available.")]
    SlotUnavailable,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for BookingError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Everything the slot-selection page shows.
#[derive(Debug, Clone, Serialize)]
pub struct Browse {
    pub citizen: Citizen,
    pub doctors: Vec<Doctor>,
    pub selected_doctor: Option<Doctor>,
    /// Open slots of `selected_doctor`, by date then time. Empty when no doctor is selected.
    pub slots: Vec<TimeSlot>,
}

/// A booking attempt as submitted by the confirmation form.
///
/// Identifiers that failed to parse are `None` and behave like unknown ids.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub national_id: NationalId,
    pub doctor_id: Option<DoctorId>,
    pub slot_id: Option<SlotId>,
}

/// Details of a committed booking, for the success page.
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub citizen: Citizen,
    pub doctor: Doctor,
    pub slot: TimeSlot,
    pub appointment: Appointment,
}

#[async_trait::async_trait]
pub trait BookingService: Send + Sync {
    /// Resolves the citizen owning `national_id`.
    ///
    /// # Errors
    ///
    /// - Returns [`BookingError::CitizenNotFound`] if no citizen matches
    /// - Returns [`BookingError::Database`] on storage failures
    async fn identify(&self, national_id: &NationalId) -> Result<Citizen, BookingError>;

    /// Loads the doctor list and, when `doctor_id` names a doctor, that doctor's open slots.
    ///
    /// # Errors
    ///
    /// - Returns [`BookingError::CitizenNotFound`] if no citizen matches
    /// - Returns [`BookingError::Database`] on storage failures
    async fn browse(
        &self,
        national_id: &NationalId,
        doctor_id: Option<DoctorId>,
    ) -> Result<Browse, BookingError>;

    /// Books the requested slot for the citizen.
    ///
    /// # Errors
    ///
    /// - Returns [`BookingError::CitizenNotFound`] if no citizen matches
    /// - Returns [`BookingError::SlotUnavailable`] if the slot is booked, unknown,
    ///   or not one of the doctor's slots; nothing is written in that case
    /// - Returns [`BookingError::Database`] on storage failures
    async fn confirm(&self, request: &BookingRequest) -> Result<Confirmation, BookingError>;
}
