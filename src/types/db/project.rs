use sea_orm::entity::prelude::*;

/// Project row. `images` holds a JSON array of URL strings; `client_id` is a
/// soft reference to `clients.id` that survives client deletion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub current_stage: String,
    pub progress: i32,
    pub last_updated: i64,
    pub images: String,
    pub client_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
