use crate::server::{data::car::CarRepository, model::car::CarParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

fn params(name: &str, category: &str) -> CarParams {
    CarParams {
        name: name.to_string(),
        category: category.to_string(),
        image: None,
        images: None,
        year: None,
        fuel_type: None,
        seats: None,
        features: None,
        price_per_day: None,
    }
}
