//! MySQL-backed user directory

pub mod connection;
pub mod user_repository;

pub use connection::DatabasePool;
pub use user_repository::MySqlUserRepository;
