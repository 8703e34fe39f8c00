use crate::server::{
    data::booking::BookingRepository,
    model::booking::{
        BookingFilter, BookingStatus, CreateBookingParams, StatusChange, UpdateBookingParams,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::date_time},
};

mod create;
mod delete;
mod get_by_id;
mod get_filtered;
mod update;
