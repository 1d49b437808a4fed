//! Status poller
//!
//! Polls the status API, announces homework status changes and reports
//! persistent failures to the chat. Cycles run strictly one after another:
//! fetch, validate, notify, then sleep for the poll interval.

use hwbot_client::FetchError;
use hwbot_core::{FieldError, ShapeError};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::repository::{NotificationRepository, StatusRepository};

/// Prefix of every failure message sent to the chat
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Failure of a single poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl CycleError {
    /// Text announced to the chat for this failure
    pub fn diagnostic(&self) -> String {
        format!("{}: {}", FAILURE_PREFIX, self)
    }
}

/// What a single cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The response was processed; `notified` status updates were delivered
    Completed { notified: usize },
    /// The cycle failed; `reported` is true if the failure reached the chat
    Failed { diagnostic: String, reported: bool },
}

/// Homework status poller
///
/// Owns the query cursor and the last reported failure. Both are only
/// touched from [`StatusPoller::run_cycle`], which takes `&mut self`, so at
/// most one cycle is ever in flight.
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn NotificationRepository>,
    poll_interval: Duration,
    cursor: i64,
    last_error: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `cursor` - Initial `from_date`, normally the current time
    pub fn new(
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn NotificationRepository>,
        poll_interval: Duration,
        cursor: i64,
    ) -> Self {
        Self {
            statuses,
            notifier,
            poll_interval,
            cursor,
            last_error: None,
        }
    }

    /// Lower bound of the next query window
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Most recent failure message sent (or attempted) to the chat
    #[allow(dead_code)]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts the polling loop
    ///
    /// Never returns. The sleep happens after every cycle, successful or not.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.poll_interval,
            self.cursor()
        );

        loop {
            match self.run_cycle().await {
                CycleOutcome::Completed { notified } if notified > 0 => {
                    info!("Delivered {} status update(s) this cycle", notified);
                }
                CycleOutcome::Completed { .. } => {}
                CycleOutcome::Failed {
                    diagnostic,
                    reported,
                } => {
                    debug!("Cycle failed (reported: {}): {}", reported, diagnostic);
                }
            }

            time::sleep(self.poll_interval).await;
        }
    }

    /// Performs a single poll cycle, including failure reporting
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(notified) => CycleOutcome::Completed { notified },
            Err(e) => self.report_failure(e).await,
        }
    }

    /// Fetches, validates and announces one batch of status changes
    async fn poll_once(&mut self) -> Result<usize, CycleError> {
        debug!("Fetching homework statuses from_date={}", self.cursor);

        let body = self.statuses.fetch_statuses(self.cursor).await?;
        let response = hwbot_core::validate(&body)?;

        debug!(
            "Response validated: {} homework(s), current_date={:?}",
            response.homeworks.len(),
            response.current_date
        );

        // The window is consumed once the response shape is known to be good.
        if let Some(current_date) = response.current_date {
            self.cursor = current_date;
        }

        if response.homeworks.is_empty() {
            debug!("No homework status changes");
            return Ok(0);
        }

        let mut notified = 0;
        for record in &response.homeworks {
            let message = hwbot_core::format(record)?;

            match self.notifier.notify(&message).await {
                Ok(()) => {
                    debug!("Status update delivered");
                    notified += 1;
                }
                Err(e) => {
                    error!("Failed to deliver status update: {}", e);
                }
            }
        }

        Ok(notified)
    }

    /// Logs a failed cycle and announces it unless it repeats the last one
    async fn report_failure(&mut self, err: CycleError) -> CycleOutcome {
        let diagnostic = err.diagnostic();
        error!("{}", diagnostic);

        if self.last_error.as_deref() == Some(diagnostic.as_str()) {
            warn!("Same failure as last reported, not notifying again");
            return CycleOutcome::Failed {
                diagnostic,
                reported: false,
            };
        }

        self.last_error = Some(diagnostic.clone());

        let reported = match self.notifier.notify(&diagnostic).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to deliver failure notification: {}", e);
                false
            }
        };

        CycleOutcome::Failed {
            diagnostic,
            reported,
        }
    }
}
