//! Scheduler layer for the poller
//!
//! This layer drives the poll cycle: it owns the query cursor, decides
//! which failures reach the chat and paces cycles with the poll interval.

pub mod poller;

pub use poller::StatusPoller;
