use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suspect_facts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "suspect_id")]
    pub suspect_id: Uuid,
    pub model: String,
    #[sea_orm(column_type = "Text")]
    pub fact: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::suspects::Entity",
        from = "Column::SuspectId",
        to = "super::suspects::Column::Id"
    )]
    Suspect,
}

impl Related<super::suspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suspect.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
