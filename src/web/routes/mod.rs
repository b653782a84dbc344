//! Dashboard route handlers

pub mod health;
pub mod views;
