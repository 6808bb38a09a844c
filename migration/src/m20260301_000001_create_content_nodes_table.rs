use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // content_nodes: one JSONB document per store root
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ContentNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentNodes::Root)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContentNodes::Value)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(ContentNodes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentNodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContentNodes {
    Table,
    Root,
    Value,
    UpdatedAt,
}
