use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create documents table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Collection)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::Id).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Documents::Data)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Documents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Documents::Collection)
                            .col(Documents::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Default listing order inside a collection
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_documents_collection_created_at
                ON documents (collection, created_at);
                "#,
            )
            .await?;

        // Blog listing is ordered by publish date
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_documents_blogs_published_at
                ON documents ((data->>'publishedAt') DESC)
                WHERE collection = 'blogs';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_documents_updated_at
                BEFORE UPDATE ON documents
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_documents_updated_at ON documents;
                DROP INDEX IF EXISTS idx_documents_collection_created_at;
                DROP INDEX IF EXISTS idx_documents_blogs_published_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Collection,
    Id,
    Data,
    CreatedAt,
    UpdatedAt,
}
