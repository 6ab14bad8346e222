//! Configuration and data model shared by all handlers

pub mod config;
pub mod models;
