//! # Built-in Seed Units
//!
//! The units every deployment registers by default. Third-party units
//! implement [`SeedUnit`](crate::SeedUnit) and are added to the registry
//! at startup.

mod roles;

pub use roles::RoleSeeder;
