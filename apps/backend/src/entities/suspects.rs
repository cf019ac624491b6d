use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suspects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::suspect_facts::Entity")]
    SuspectFacts,
    #[sea_orm(has_many = "super::investigation_suspects::Entity")]
    InvestigationSuspects,
}

impl Related<super::suspect_facts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SuspectFacts.def()
    }
}

impl Related<super::investigation_suspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvestigationSuspects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
