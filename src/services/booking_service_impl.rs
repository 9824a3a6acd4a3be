//! `SeaORM` implementation of the `BookingService` trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::db::Store;
use crate::domain::{DoctorId, NationalId};
use crate::models::Citizen;
use crate::services::booking_service::{
    Browse, BookingError, BookingRequest, BookingService, Confirmation,
};

pub struct SeaOrmBookingService {
    store: Store,
}

impl SeaOrmBookingService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Local wall-clock time, second precision, no offset.
    fn timestamp() -> String {
        chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }
}

#[async_trait]
impl BookingService for SeaOrmBookingService {
    async fn identify(&self, national_id: &NationalId) -> Result<Citizen, BookingError> {
        self.store
            .get_citizen_by_national_id(national_id.as_str())
            .await?
            .ok_or(BookingError::CitizenNotFound)
    }

    async fn browse(
        &self,
        national_id: &NationalId,
        doctor_id: Option<DoctorId>,
    ) -> Result<Browse, BookingError> {
        let citizen = self.identify(national_id).await?;
        let doctors = self.store.list_doctors().await?;

        let selected_doctor = match doctor_id {
            Some(id) => self.store.get_doctor(id.value()).await?,
            None => None,
        };

        let slots = match &selected_doctor {
            Some(doctor) => self.store.list_open_slots(doctor.id).await?,
            None => Vec::new(),
        };

        debug!(
            citizen_id = citizen.id,
            doctor_id = selected_doctor.as_ref().map(|d| d.id),
            open_slots = slots.len(),
            "Loaded booking page"
        );

        Ok(Browse {
            citizen,
            doctors,
            selected_doctor,
            slots,
        })
    }

    async fn confirm(&self, request: &BookingRequest) -> Result<Confirmation, BookingError> {
        let citizen = self.identify(&request.national_id).await?;

        let (Some(doctor_id), Some(slot_id)) = (request.doctor_id, request.slot_id) else {
            return Err(BookingError::SlotUnavailable);
        };

        let booked = self
            .store
            .book_slot(
                citizen.id,
                doctor_id.value(),
                slot_id.value(),
                &Self::timestamp(),
            )
            .await?
            .ok_or_else(|| {
                info!(
                    citizen_id = citizen.id,
                    doctor_id = doctor_id.value(),
                    slot_id = slot_id.value(),
                    "Slot not available for booking"
                );
                BookingError::SlotUnavailable
            })?;

        let doctor = self
            .store
            .get_doctor(doctor_id.value())
            .await?
            .ok_or_else(|| {
                BookingError::Database(format!("Doctor {doctor_id} missing for booked slot"))
            })?;

        Ok(Confirmation {
            citizen,
            doctor,
            slot: booked.slot,
            appointment: booked.appointment,
        })
    }
}
