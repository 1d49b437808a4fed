//! Homework Bot Core
//!
//! Core types and rules for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records, review statuses and the verdict table
//! - Response validation: shape checks for the status API payload
//! - Errors: shape and field errors raised while interpreting a payload
//!
//! Nothing here performs I/O; the client and poller crates do.

pub mod domain;
pub mod error;

pub use domain::homework::{HomeworkRecord, HomeworkStatus, format};
pub use domain::response::{StatusResponse, validate};
pub use error::{FieldError, ShapeError};
