use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entities::{citizens, prelude::*};
use crate::models::Citizen;

pub struct CitizenRepository {
    conn: DatabaseConnection,
}

impl CitizenRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_national_id(&self, national_id: &str) -> Result<Option<Citizen>> {
        let citizen = Citizens::find()
            .filter(citizens::Column::NationalId.eq(national_id))
            .one(&self.conn)
            .await
            .context("Failed to query citizen by national ID")?;

        Ok(citizen.map(Citizen::from))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Citizens::find().count(&self.conn).await?)
    }
}
