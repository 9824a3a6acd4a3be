//! Server-rendered pages.
//!
//! A handler picks a [`Page`] and fills its payload; [`Views`] turns it into
//! HTML. Templates are compiled into the binary and HTML auto-escaping is on
//! for every one of them.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use super::ApiError;
use crate::models::{Citizen, Doctor, TimeSlot};
use crate::services::{Browse, Confirmation};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("identify.html", include_str!("../../templates/identify.html")),
    ("booking.html", include_str!("../../templates/booking.html")),
    ("success.html", include_str!("../../templates/success.html")),
];

/// Payload of the national ID form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IdentifyPage {
    pub error: Option<String>,
    /// Value to pre-fill the input with.
    pub national_id: String,
}

impl IdentifyPage {
    pub fn with_error(error: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            national_id: national_id.into(),
        }
    }
}

/// Payload of the doctor and slot selection page.
#[derive(Debug, Clone, Serialize)]
pub struct BookingPage {
    pub citizen: Citizen,
    pub doctors: Vec<Doctor>,
    pub slots: Vec<TimeSlot>,
    pub selected_doctor: Option<Doctor>,
    /// The `doctor_id` exactly as requested, even when it matched nothing.
    pub doctor_id: Option<String>,
}

impl BookingPage {
    #[must_use]
    pub fn new(browse: Browse, doctor_id: Option<String>) -> Self {
        Self {
            citizen: browse.citizen,
            doctors: browse.doctors,
            slots: browse.slots,
            selected_doctor: browse.selected_doctor,
            doctor_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Page {
    Identify(IdentifyPage),
    Booking(BookingPage),
    Success(Confirmation),
}

impl Page {
    /// Stable view identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identify(_) => "identify",
            Self::Booking(_) => "booking",
            Self::Success(_) => "success",
        }
    }

    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Identify(_) => "identify.html",
            Self::Booking(_) => "booking.html",
            Self::Success(_) => "success.html",
        }
    }
}

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compiles the embedded templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render(&self, page: &Page) -> Result<Html<String>, ApiError> {
        let template = self.env.get_template(page.template())?;
        let html = template.render(page)?;
        tracing::debug!(view = page.name(), bytes = html.len(), "Rendered view");
        Ok(Html(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appointment;

    fn citizen() -> Citizen {
        Citizen {
            id: 1,
            national_id: "010101300000".to_string(),
            first_name: "Алишер".to_string(),
            last_name: "Касымов".to_string(),
            birth_date: "2001-01-01".to_string(),
        }
    }

    fn doctor() -> Doctor {
        Doctor {
            id: 1,
            full_name: "Иванов Иван Иванович".to_string(),
            specialty: "Терапевт".to_string(),
        }
    }

    fn slot(id: i32, time: &str) -> TimeSlot {
        TimeSlot {
            id,
            doctor_id: 1,
            date: "2025-03-14".to_string(),
            time: time.to_string(),
            is_booked: false,
        }
    }

    #[test]
    fn templates_compile() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn identify_page_shows_error_and_escapes_input() {
        let views = Views::new().unwrap();
        let page = Page::Identify(IdentifyPage::with_error(
            "Citizen with this national ID was not found.",
            "<script>",
        ));

        let Html(html) = views.render(&page).unwrap();
        assert!(html.contains("Citizen with this national ID was not found."));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn booking_page_lists_slots_of_selected_doctor() {
        let views = Views::new().unwrap();
        let page = Page::Booking(BookingPage {
            citizen: citizen(),
            doctors: vec![doctor()],
            slots: vec![slot(1, "09:00"), slot(2, "10:00")],
            selected_doctor: Some(doctor()),
            doctor_id: Some("1".to_string()),
        });

        let Html(html) = views.render(&page).unwrap();
        assert!(html.contains("2025-03-14 09:00"));
        assert!(html.contains("2025-03-14 10:00"));
        assert!(html.contains("name=\"slot_id\" value=\"2\""));
        assert!(html.contains(" selected"));
    }

    #[test]
    fn booking_page_without_selection_has_no_slot_forms() {
        let views = Views::new().unwrap();
        let page = Page::Booking(BookingPage {
            citizen: citizen(),
            doctors: vec![doctor()],
            slots: vec![],
            selected_doctor: None,
            doctor_id: None,
        });

        let Html(html) = views.render(&page).unwrap();
        assert!(html.contains("Иванов Иван Иванович"));
        assert!(!html.contains("slot_id"));
    }

    #[test]
    fn success_page_shows_booking_details() {
        let views = Views::new().unwrap();
        let page = Page::Success(Confirmation {
            citizen: citizen(),
            doctor: doctor(),
            slot: slot(3, "11:00"),
            appointment: Appointment {
                id: 1,
                citizen_id: 1,
                doctor_id: 1,
                slot_id: 3,
                created_at: "2025-03-14T08:15:00".to_string(),
            },
        });

        assert_eq!(page.name(), "success");
        let Html(html) = views.render(&page).unwrap();
        assert!(html.contains("Касымов Алишер"));
        assert!(html.contains("Терапевт"));
        assert!(html.contains("11:00"));
    }
}
