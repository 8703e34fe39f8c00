use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_cars_table::Cars;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(string(Bookings::PickupLocation))
                    .col(string(Bookings::DropoffLocation))
                    .col(timestamp(Bookings::PickupDate))
                    .col(timestamp_null(Bookings::DropoffDate))
                    .col(integer_null(Bookings::Passengers))
                    .col(integer_null(Bookings::CarId))
                    .col(string(Bookings::FullName))
                    .col(string(Bookings::Email))
                    .col(string(Bookings::Phone))
                    .col(text_null(Bookings::Notes))
                    .col(string(Bookings::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Bookings::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Bookings::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_car_id")
                            .from(Bookings::Table, Bookings::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_pickup_date")
                    .table(Bookings::Table)
                    .col(Bookings::PickupDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    PickupLocation,
    DropoffLocation,
    PickupDate,
    DropoffDate,
    Passengers,
    CarId,
    FullName,
    Email,
    Phone,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}
