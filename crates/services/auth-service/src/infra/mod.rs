//! Infrastructure layer - database connection and schema migrations.

mod db;
mod migrations;

pub use db::Database;
