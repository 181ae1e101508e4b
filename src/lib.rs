//! IPPIS Admin Library
//!
//! Headless core of the IPPIS admin portal: a generic data table, entity
//! dialogs, in-memory repositories and one page per admin screen, painted by
//! a console view.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
