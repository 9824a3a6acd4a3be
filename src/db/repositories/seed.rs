use anyhow::Result;
use chrono::{Duration, NaiveDate};
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use crate::config::ScheduleConfig;
use crate::entities::{citizens, doctors, prelude::*, time_slots};

/// (national_id, first_name, last_name, birth_date)
const SEED_CITIZENS: &[(&str, &str, &str, &str)] = &[
    ("010101300000", "Алишер", "Касымов", "2001-01-01"),
    ("020202400000", "Диана", "Серикова", "2002-02-02"),
];

/// (full_name, specialty)
const SEED_DOCTORS: &[(&str, &str)] = &[
    ("Иванов Иван Иванович", "Терапевт"),
    ("Петрова Айгуль Нурлановна", "Педиатр"),
];

/// Rows inserted by one seeding pass. All zero when the database was already seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub citizens: u64,
    pub doctors: u64,
    pub time_slots: u64,
}

impl SeedReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.citizens == 0 && self.doctors == 0 && self.time_slots == 0
    }
}

pub struct SeedRepository {
    conn: DatabaseConnection,
}

impl SeedRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fills each empty table with fixed seed data; populated tables are left alone.
    ///
    /// Slots are derived from the doctors present when `time_slots` is empty.
    /// Doctors added after that never receive slots.
    pub async fn seed(&self, schedule: &ScheduleConfig, today: NaiveDate) -> Result<SeedReport> {
        let txn = self.conn.begin().await?;

        let report = SeedReport {
            citizens: Self::seed_citizens(&txn).await?,
            doctors: Self::seed_doctors(&txn).await?,
            time_slots: Self::seed_time_slots(&txn, schedule, today).await?,
        };

        txn.commit().await?;

        if report.is_empty() {
            info!("Seed data already present");
        } else {
            info!(
                citizens = report.citizens,
                doctors = report.doctors,
                time_slots = report.time_slots,
                "Seeded database"
            );
        }

        Ok(report)
    }

    async fn seed_citizens(txn: &DatabaseTransaction) -> Result<u64> {
        if Citizens::find().count(txn).await? > 0 {
            return Ok(0);
        }

        let rows: Vec<citizens::ActiveModel> = SEED_CITIZENS
            .iter()
            .map(
                |(national_id, first_name, last_name, birth_date)| citizens::ActiveModel {
                    national_id: Set((*national_id).to_string()),
                    first_name: Set((*first_name).to_string()),
                    last_name: Set((*last_name).to_string()),
                    birth_date: Set((*birth_date).to_string()),
                    ..Default::default()
                },
            )
            .collect();

        let inserted = rows.len() as u64;
        Citizens::insert_many(rows).exec(txn).await?;
        Ok(inserted)
    }

    async fn seed_doctors(txn: &DatabaseTransaction) -> Result<u64> {
        if Doctors::find().count(txn).await? > 0 {
            return Ok(0);
        }

        let rows: Vec<doctors::ActiveModel> = SEED_DOCTORS
            .iter()
            .map(|(full_name, specialty)| doctors::ActiveModel {
                full_name: Set((*full_name).to_string()),
                specialty: Set((*specialty).to_string()),
                ..Default::default()
            })
            .collect();

        let inserted = rows.len() as u64;
        Doctors::insert_many(rows).exec(txn).await?;
        Ok(inserted)
    }

    async fn seed_time_slots(
        txn: &DatabaseTransaction,
        schedule: &ScheduleConfig,
        today: NaiveDate,
    ) -> Result<u64> {
        if TimeSlots::find().count(txn).await? > 0 {
            return Ok(0);
        }

        let doctor_ids: Vec<i32> = Doctors::find()
            .order_by_asc(doctors::Column::Id)
            .all(txn)
            .await?
            .into_iter()
            .map(|d| d.id)
            .collect();

        let rows: Vec<time_slots::ActiveModel> = slot_grid(&doctor_ids, schedule, today)
            .into_iter()
            .map(|(doctor_id, date, time)| time_slots::ActiveModel {
                doctor_id: Set(doctor_id),
                date: Set(date),
                time: Set(time),
                is_booked: Set(false),
                ..Default::default()
            })
            .collect();

        let inserted = rows.len() as u64;

        // Four bound parameters per row; 100 rows stays well under SQLite's limit
        for chunk in rows.chunks(100) {
            TimeSlots::insert_many(chunk.to_vec()).exec(txn).await?;
        }

        Ok(inserted)
    }
}

/// Every (doctor_id, date, time) triple for the configured work hours,
/// starting at `today` and covering `schedule.days_ahead` days.
#[must_use]
pub fn slot_grid(
    doctor_ids: &[i32],
    schedule: &ScheduleConfig,
    today: NaiveDate,
) -> Vec<(i32, String, String)> {
    let mut grid = Vec::with_capacity(
        doctor_ids.len() * schedule.days_ahead as usize * schedule.work_hours.len(),
    );

    for &doctor_id in doctor_ids {
        for offset in 0..schedule.days_ahead {
            let date = (today + Duration::days(i64::from(offset)))
                .format("%Y-%m-%d")
                .to_string();
            for hour in &schedule.work_hours {
                grid.push((doctor_id, date.clone(), format!("{hour:02}:00")));
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_every_doctor_day_and_hour() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let grid = slot_grid(&[1, 2], &ScheduleConfig::default(), today);

        assert_eq!(grid.len(), 2 * 2 * 5);
        assert_eq!(grid[0], (1, "2025-03-14".to_string(), "09:00".to_string()));
        assert_eq!(grid[4], (1, "2025-03-14".to_string(), "15:00".to_string()));
        assert_eq!(grid[5], (1, "2025-03-15".to_string(), "09:00".to_string()));
        assert_eq!(grid[10].0, 2);
    }

    #[test]
    fn grid_rolls_over_month_end() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let grid = slot_grid(&[7], &ScheduleConfig::default(), today);

        let dates: Vec<&str> = grid.iter().map(|(_, d, _)| d.as_str()).collect();
        assert!(dates.contains(&"2024-02-29"));
        assert!(dates.contains(&"2024-03-01"));
    }

    #[test]
    fn grid_is_empty_without_doctors() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(slot_grid(&[], &ScheduleConfig::default(), today).is_empty());
    }

    #[test]
    fn times_are_zero_padded() {
        let schedule = ScheduleConfig {
            work_hours: vec![8, 13],
            days_ahead: 1,
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let times: Vec<String> = slot_grid(&[1], &schedule, today)
            .into_iter()
            .map(|(_, _, t)| t)
            .collect();
        assert_eq!(times, vec!["08:00", "13:00"]);
    }
}
