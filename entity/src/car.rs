use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    /// JSON-encoded array of image URLs.
    #[sea_orm(column_type = "Text", nullable)]
    pub images: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    pub seats: Option<i32>,
    /// JSON-encoded array of feature labels.
    #[sea_orm(column_type = "Text", nullable)]
    pub features: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_per_day: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
