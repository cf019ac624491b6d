use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One pool slot. Replaces the original storage scheme where the pool was
/// spread over fixed positional columns on the investigation row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "investigation_suspects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "investigation_id")]
    pub investigation_id: Uuid,
    #[sea_orm(column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "suspect_id")]
    pub suspect_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::investigations::Entity",
        from = "Column::InvestigationId",
        to = "super::investigations::Column::Id"
    )]
    Investigation,
    #[sea_orm(
        belongs_to = "super::suspects::Entity",
        from = "Column::SuspectId",
        to = "super::suspects::Column::Id"
    )]
    Suspect,
}

impl Related<super::investigations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investigation.def()
    }
}

impl Related<super::suspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suspect.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
