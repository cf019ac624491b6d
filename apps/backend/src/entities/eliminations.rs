use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Append-only record of a player ruling out one suspect during a round.
///
/// `investigation_id` is denormalized from the round so the unique index
/// `(investigation_id, suspect_id)` can reject duplicate eliminations at the
/// schema level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eliminations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "round_id")]
    pub round_id: Uuid,
    #[sea_orm(column_name = "investigation_id")]
    pub investigation_id: Uuid,
    #[sea_orm(column_name = "suspect_id")]
    pub suspect_id: Uuid,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rounds::Entity",
        from = "Column::RoundId",
        to = "super::rounds::Column::Id"
    )]
    Round,
    #[sea_orm(
        belongs_to = "super::investigations::Entity",
        from = "Column::InvestigationId",
        to = "super::investigations::Column::Id"
    )]
    Investigation,
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl Related<super::investigations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investigation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
