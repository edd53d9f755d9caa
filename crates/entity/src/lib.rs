//! Entity definitions for Groundwork
//!
//! This crate contains Sea-ORM entity definitions for the database models.

pub mod roles;
pub use roles::Entity as Roles;
pub mod seeder_history;
pub use seeder_history::Entity as SeederHistory;
