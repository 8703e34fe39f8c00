use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(string(Cars::Name))
                    .col(string(Cars::Category))
                    .col(text_null(Cars::Image))
                    .col(text_null(Cars::Images))
                    .col(integer_null(Cars::Year))
                    .col(string_null(Cars::FuelType))
                    .col(integer_null(Cars::Seats))
                    .col(text_null(Cars::Features))
                    .col(double_null(Cars::PricePerDay))
                    .col(
                        timestamp_with_time_zone(Cars::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cars {
    Table,
    Id,
    Name,
    Category,
    Image,
    Images,
    Year,
    FuelType,
    Seats,
    Features,
    PricePerDay,
    CreatedAt,
}
