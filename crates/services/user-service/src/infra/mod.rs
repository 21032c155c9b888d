//! Infrastructure layer - database and session plumbing.

mod db;
pub mod migrations;
mod session;

pub use db::Database;
pub use migrations::Migrator;
pub use session::SessionProvider;
