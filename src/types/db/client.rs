use sea_orm::entity::prelude::*;

/// Client account row. `project_id` is a soft reference to `projects.id`;
/// the link is maintained independently on both sides and may dangle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub project_id: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Role values stored in `clients.role`.
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CLIENT: &str = "client";
