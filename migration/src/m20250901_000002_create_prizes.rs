use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Prizes {
    Table,
    Id,
    Name,
    PointsRequired,
}

/// Initial catalog, (name, points required).
const PRIZE_CATALOG: &[(&str, i32)] = &[
    ("Polo Deportivo", 500),
    ("Camiseta Oficial", 800),
    ("Cerveza", 200),
    ("Gaseosa", 100),
    ("Llavero", 150),
    ("Gorra", 400),
    ("Vaso Térmico", 300),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prizes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prizes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prizes::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Prizes::PointsRequired).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prizes_name_unique")
                    .table(Prizes::Table)
                    .col(Prizes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Seed only an empty catalog; manual changes to the table are kept
        let conn = manager.get_connection();
        let backend = manager.get_database_backend();

        let count_stmt = Query::select()
            .expr_as(Expr::col(Prizes::Id).count(), Alias::new("n"))
            .from(Prizes::Table)
            .to_owned();
        let existing: i64 = match conn.query_one(backend.build(&count_stmt)).await? {
            Some(row) => row.try_get("", "n")?,
            None => 0,
        };

        if existing == 0 {
            let mut insert = Query::insert()
                .into_table(Prizes::Table)
                .columns([Prizes::Name, Prizes::PointsRequired])
                .to_owned();
            for (name, points) in PRIZE_CATALOG {
                insert.values_panic([(*name).into(), (*points).into()]);
            }
            conn.execute(backend.build(&insert)).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Prizes::Table).to_owned())
            .await?;
        Ok(())
    }
}
