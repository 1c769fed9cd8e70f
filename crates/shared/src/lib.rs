//! Shared utilities and common types for the Axisphere CRM backend.
//!
//! This crate provides common functionality used across all other crates:
//! - JWT access token verification (and issuing, for tooling and tests)
//! - Common validation logic
//! - Cursor pagination encoding

pub mod jwt;
pub mod pagination;
pub mod validation;
