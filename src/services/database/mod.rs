// Database service
// SQLite connection handling, schema creation and migrations

mod connection;
pub mod migrations;
pub mod schema;

pub use connection::Database;
