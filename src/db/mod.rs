use crate::config::ScheduleConfig;
use crate::models::{Appointment, AppointmentDetails, Citizen, Doctor, TimeSlot};
use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::appointment::BookedSlot;
pub use repositories::seed::SeedReport;

/// Handle to the clinic database.
///
/// Wraps a bounded connection pool. Cloning is cheap and every clone shares the
/// pool; each query borrows a connection only for its own duration.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

/// Row counts of the four clinic tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub citizens: u64,
    pub doctors: u64,
    pub time_slots: u64,
    pub booked_slots: u64,
    pub appointments: u64,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn citizen_repo(&self) -> repositories::citizen::CitizenRepository {
        repositories::citizen::CitizenRepository::new(self.conn.clone())
    }

    fn doctor_repo(&self) -> repositories::doctor::DoctorRepository {
        repositories::doctor::DoctorRepository::new(self.conn.clone())
    }

    fn slot_repo(&self) -> repositories::slot::SlotRepository {
        repositories::slot::SlotRepository::new(self.conn.clone())
    }

    fn appointment_repo(&self) -> repositories::appointment::AppointmentRepository {
        repositories::appointment::AppointmentRepository::new(self.conn.clone())
    }

    fn seed_repo(&self) -> repositories::seed::SeedRepository {
        repositories::seed::SeedRepository::new(self.conn.clone())
    }

    // ========== Initialization ==========

    /// Seeds empty tables, generating slots from the local calendar date.
    pub async fn initialize(&self, schedule: &ScheduleConfig) -> Result<SeedReport> {
        self.seed_repo()
            .seed(schedule, chrono::Local::now().date_naive())
            .await
    }

    /// Seeds empty tables with slots starting at `today`.
    pub async fn initialize_for_date(
        &self,
        schedule: &ScheduleConfig,
        today: NaiveDate,
    ) -> Result<SeedReport> {
        self.seed_repo().seed(schedule, today).await
    }

    pub async fn table_counts(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            citizens: self.citizen_repo().count().await?,
            doctors: self.doctor_repo().count().await?,
            time_slots: self.slot_repo().count().await?,
            booked_slots: self.slot_repo().count_booked().await?,
            appointments: self.appointment_repo().count().await?,
        })
    }

    // ========== Citizens ==========

    pub async fn get_citizen_by_national_id(&self, national_id: &str) -> Result<Option<Citizen>> {
        self.citizen_repo().get_by_national_id(national_id).await
    }

    // ========== Doctors ==========

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        self.doctor_repo().list_all().await
    }

    pub async fn get_doctor(&self, id: i32) -> Result<Option<Doctor>> {
        self.doctor_repo().get(id).await
    }

    // ========== Time Slots ==========

    pub async fn list_open_slots(&self, doctor_id: i32) -> Result<Vec<TimeSlot>> {
        self.slot_repo().list_open_for_doctor(doctor_id).await
    }

    pub async fn list_doctor_slots(&self, doctor_id: i32) -> Result<Vec<TimeSlot>> {
        self.slot_repo().list_for_doctor(doctor_id).await
    }

    pub async fn get_slot(&self, id: i32) -> Result<Option<TimeSlot>> {
        self.slot_repo().get(id).await
    }

    // ========== Appointments ==========

    pub async fn book_slot(
        &self,
        citizen_id: i32,
        doctor_id: i32,
        slot_id: i32,
        created_at: &str,
    ) -> Result<Option<BookedSlot>> {
        self.appointment_repo()
            .book(citizen_id, doctor_id, slot_id, created_at)
            .await
    }

    pub async fn get_appointments_for_slot(&self, slot_id: i32) -> Result<Vec<Appointment>> {
        self.appointment_repo().get_for_slot(slot_id).await
    }

    pub async fn list_appointments(&self) -> Result<Vec<AppointmentDetails>> {
        self.appointment_repo().list_detailed().await
    }
}
