//! Domain building blocks shared by every GO crate.
//!
//! Holds the id/timestamp aliases, the domain error type, the integer
//! enumerations stored in SMALLINT columns, the PER question catalog and
//! the parsing helpers used by external-feed ingestion.

pub mod enums;
pub mod error;
pub mod feed;
pub mod per_catalog;
mod per_questions;
pub mod roles;
pub mod storage;
pub mod types;
pub mod validation;
