//! Features - One Slice per Admin Page
//!
//! Each feature declares its columns, filters and page constructor. Backups
//! also carry the create/restore operations.

pub mod assets;
pub mod backups;
pub mod companies;
pub mod documents;
pub mod locations;
pub mod maintenance_types;
pub mod projects;
pub mod promotions;
pub mod transfers;
