use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub citizen_id: i32,
    pub doctor_id: i32,
    pub slot_id: i32,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::citizens::Entity",
        from = "Column::CitizenId",
        to = "super::citizens::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Citizens,
    #[sea_orm(
        belongs_to = "super::doctors::Entity",
        from = "Column::DoctorId",
        to = "super::doctors::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Doctors,
    #[sea_orm(
        belongs_to = "super::time_slots::Entity",
        from = "Column::SlotId",
        to = "super::time_slots::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TimeSlots,
}

impl Related<super::citizens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizens.def()
    }
}

impl Related<super::doctors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctors.def()
    }
}

impl Related<super::time_slots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
