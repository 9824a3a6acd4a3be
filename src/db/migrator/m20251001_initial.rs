use crate::entities::{prelude::*, time_slots};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Citizens)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Doctors)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(TimeSlots)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Appointments)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // One slot per doctor, day and hour
        manager
            .create_index(
                Index::create()
                    .name("idx_time_slots_doctor_date_time")
                    .table(TimeSlots)
                    .col(time_slots::Column::DoctorId)
                    .col(time_slots::Column::Date)
                    .col(time_slots::Column::Time)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimeSlots).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Doctors).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Citizens).to_owned())
            .await?;

        Ok(())
    }
}
