//! Shared utilities and common types for the Back Office console client.
//!
//! This crate provides common functionality used across all other crates:
//! - Page-based pagination types and the page-number window
//! - Common field validation logic

pub mod pagination;
pub mod validation;
