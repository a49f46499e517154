use crate::core::Submission;
use crate::domain::model::SubmitOutcome;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives one submission end to end, with optional system monitoring around
/// the network exchange.
pub struct PredictEngine<S: Submission> {
    handler: S,
    monitor: SystemMonitor,
}

impl<S: Submission> PredictEngine<S> {
    pub fn new(handler: S) -> Self {
        Self {
            handler,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(handler: S, enabled: bool) -> Self {
        Self {
            handler,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self) -> Result<SubmitOutcome> {
        println!("Submitting prediction request...");
        self.monitor.log_stats("Submit");

        let outcome = self.handler.submit().await?;

        tracing::info!("Submission resolved at {}", outcome.resolved_at.to_rfc3339());
        self.monitor.log_stats("Resolved");
        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        Ok(outcome)
    }
}
