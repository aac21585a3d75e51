use sea_orm::entity::prelude::*;

/// One stored flight plan document.
///
/// `id` is the store's native identity and never leaves the data layer. Lookups
/// go through `flight_plan_id`, which is also embedded in `document`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub flight_plan_id: String,
    pub document: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
