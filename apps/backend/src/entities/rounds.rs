use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "investigation_id")]
    pub investigation_id: Uuid,
    #[sea_orm(column_name = "question_id")]
    pub question_id: Uuid,
    /// Absent until the external answer flow records it; written exactly once.
    pub answer: Option<String>,
    #[sea_orm(column_name = "answered_at")]
    pub answered_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
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
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
    #[sea_orm(has_many = "super::eliminations::Entity")]
    Eliminations,
}

impl Related<super::investigations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investigation.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::eliminations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Eliminations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
