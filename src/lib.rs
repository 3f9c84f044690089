//! # SQL ERD Library
//!
//! Schema extraction from SQL `CREATE TABLE` statements and Mermaid
//! entity-relationship diagram rendering.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod markdown;
pub mod output;
pub mod preprocessor;
pub mod render;
pub mod schema;
