//! # warden-core
//!
//! Core types and error types for Warden.
//!
//! This crate provides the foundational types shared across all Warden crates:
//! - Entity structs for the domain objects (users, compliance metrics, activities)
//! - Closed enums for roles, reporting periods, metric categories and activity status
//! - Cross-cutting error types
//! - Response types returned by the dashboard and password-reset operations

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
