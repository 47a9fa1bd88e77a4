use sea_orm_migration::{prelude::*, schema::*};

static IDX_SHIP_PRODUCTION_DATE: &str = "idx-ship-production_date";
static IDX_SHIP_RATING: &str = "idx-ship-rating";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ship::Table)
                    .if_not_exists()
                    .col(pk_auto(Ship::Id))
                    .col(string_len(Ship::Name, 50))
                    .col(string_len(Ship::Planet, 50))
                    .col(string_len(Ship::Category, 16))
                    .col(date_time(Ship::ProductionDate))
                    .col(boolean(Ship::IsUsed))
                    .col(double(Ship::Speed))
                    .col(integer(Ship::CrewSize))
                    .col(double(Ship::Rating))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIP_PRODUCTION_DATE)
                    .table(Ship::Table)
                    .col(Ship::ProductionDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIP_RATING)
                    .table(Ship::Table)
                    .col(Ship::Rating)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIP_RATING)
                    .table(Ship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIP_PRODUCTION_DATE)
                    .table(Ship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ship {
    Table,
    Id,
    Name,
    Planet,
    Category,
    ProductionDate,
    IsUsed,
    Speed,
    CrewSize,
    Rating,
}
