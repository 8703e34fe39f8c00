use crate::server::data::schema::SchemaRepository;
use sea_orm::{Database, DbErr};

mod migrate;
