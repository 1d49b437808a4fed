//! Repository layer
//!
//! Repositories abstract communication with the two remote services.
//! They expose single-attempt calls with typed errors and no business
//! logic; retry and de-duplication policy lives in the scheduler.
//!
//! All repositories are trait-based to enable testing and mocking.

mod notifications;
mod statuses;

// Re-export traits
pub use notifications::NotificationRepository;
pub use statuses::StatusRepository;
