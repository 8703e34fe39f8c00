mod booking;
mod car;
mod schema;
mod user;
