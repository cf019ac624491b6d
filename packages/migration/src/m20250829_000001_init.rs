use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----

#[derive(Iden)]
enum Suspects {
    Table,
    Id,
    Image,
    CreatedAt,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Text,
    Topic,
    Level,
    CreatedAt,
}

#[derive(Iden)]
enum SuspectFacts {
    Table,
    Id,
    SuspectId,
    Model,
    Fact,
    CreatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    PlayerId,
    Investigator,
    Model,
    Score,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Investigations {
    Table,
    Id,
    GameId,
    CriminalId,
    CreatedAt,
}

#[derive(Iden)]
enum InvestigationSuspects {
    Table,
    Id,
    InvestigationId,
    Position,
    SuspectId,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    InvestigationId,
    QuestionId,
    Answer,
    AnsweredAt,
    CreatedAt,
}

#[derive(Iden)]
enum Eliminations {
    Table,
    Id,
    RoundId,
    InvestigationId,
    SuspectId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // suspects
        manager
            .create_table(
                Table::create()
                    .table(Suspects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Suspects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Suspects::Image).string().not_null())
                    .col(
                        ColumnDef::new(Suspects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One catalogue row per portrait; catalogue writes are idempotent on image.
        manager
            .create_index(
                Index::create()
                    .name("ux_suspects_image")
                    .table(Suspects::Table)
                    .col(Suspects::Image)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // questions
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Text).string().not_null())
                    .col(ColumnDef::new(Questions::Topic).string().not_null())
                    .col(
                        ColumnDef::new(Questions::Level)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_questions_text")
                    .table(Questions::Table)
                    .col(Questions::Text)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // suspect_facts
        manager
            .create_table(
                Table::create()
                    .table(SuspectFacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SuspectFacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SuspectFacts::SuspectId).uuid().not_null())
                    .col(ColumnDef::new(SuspectFacts::Model).string().not_null())
                    .col(ColumnDef::new(SuspectFacts::Fact).text().not_null())
                    .col(
                        ColumnDef::new(SuspectFacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_suspect_facts_suspect_id")
                            .from(SuspectFacts::Table, SuspectFacts::SuspectId)
                            .to(Suspects::Table, Suspects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_suspect_facts_suspect_id")
                    .table(SuspectFacts::Table)
                    .col(SuspectFacts::SuspectId)
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::PlayerId).string().not_null())
                    .col(ColumnDef::new(Games::Investigator).string().not_null())
                    .col(ColumnDef::new(Games::Model).string().not_null())
                    .col(
                        ColumnDef::new(Games::Score)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // "current game for player" = newest row for player_id
        manager
            .create_index(
                Index::create()
                    .name("idx_games_player_id_created_at")
                    .table(Games::Table)
                    .col(Games::PlayerId)
                    .col(Games::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // investigations
        manager
            .create_table(
                Table::create()
                    .table(Investigations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Investigations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Investigations::GameId).uuid().not_null())
                    .col(ColumnDef::new(Investigations::CriminalId).uuid().not_null())
                    .col(
                        ColumnDef::new(Investigations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investigations_game_id")
                            .from(Investigations::Table, Investigations::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_investigations_game_id_created_at")
                    .table(Investigations::Table)
                    .col(Investigations::GameId)
                    .col(Investigations::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // investigation_suspects: the pool, one row per slot instead of the
        // original's fixed positional columns.
        manager
            .create_table(
                Table::create()
                    .table(InvestigationSuspects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvestigationSuspects::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(InvestigationSuspects::InvestigationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestigationSuspects::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestigationSuspects::SuspectId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investigation_suspects_investigation_id")
                            .from(
                                InvestigationSuspects::Table,
                                InvestigationSuspects::InvestigationId,
                            )
                            .to(Investigations::Table, Investigations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investigation_suspects_suspect_id")
                            .from(
                                InvestigationSuspects::Table,
                                InvestigationSuspects::SuspectId,
                            )
                            .to(Suspects::Table, Suspects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_investigation_suspects_position")
                    .table(InvestigationSuspects::Table)
                    .col(InvestigationSuspects::InvestigationId)
                    .col(InvestigationSuspects::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_investigation_suspects_suspect")
                    .table(InvestigationSuspects::Table)
                    .col(InvestigationSuspects::InvestigationId)
                    .col(InvestigationSuspects::SuspectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rounds::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rounds::InvestigationId).uuid().not_null())
                    .col(ColumnDef::new(Rounds::QuestionId).uuid().not_null())
                    .col(ColumnDef::new(Rounds::Answer).string().null())
                    .col(
                        ColumnDef::new(Rounds::AnsweredAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_investigation_id")
                            .from(Rounds::Table, Rounds::InvestigationId)
                            .to(Investigations::Table, Investigations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_question_id")
                            .from(Rounds::Table, Rounds::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rounds_investigation_id_created_at")
                    .table(Rounds::Table)
                    .col(Rounds::InvestigationId)
                    .col(Rounds::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // eliminations: investigation_id is denormalized so the
        // one-elimination-per-suspect-per-investigation rule is a constraint,
        // not just a service-level check.
        manager
            .create_table(
                Table::create()
                    .table(Eliminations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Eliminations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Eliminations::RoundId).uuid().not_null())
                    .col(
                        ColumnDef::new(Eliminations::InvestigationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Eliminations::SuspectId).uuid().not_null())
                    .col(
                        ColumnDef::new(Eliminations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eliminations_round_id")
                            .from(Eliminations::Table, Eliminations::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eliminations_investigation_id")
                            .from(Eliminations::Table, Eliminations::InvestigationId)
                            .to(Investigations::Table, Investigations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_eliminations_investigation_suspect")
                    .table(Eliminations::Table)
                    .col(Eliminations::InvestigationId)
                    .col(Eliminations::SuspectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_eliminations_round_id")
                    .table(Eliminations::Table)
                    .col(Eliminations::RoundId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Eliminations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(InvestigationSuspects::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Investigations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SuspectFacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suspects::Table).to_owned())
            .await?;
        Ok(())
    }
}
