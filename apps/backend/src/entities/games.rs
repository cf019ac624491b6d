use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Opaque player identity minted by the client and kept in its local storage.
    #[sea_orm(column_name = "player_id")]
    pub player_id: String,
    /// Display name shown on the high-score table.
    pub investigator: String,
    /// Answer-generation model chosen for this game; opaque to the engine.
    pub model: String,
    pub score: i64,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::investigations::Entity")]
    Investigations,
}

impl Related<super::investigations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investigations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
