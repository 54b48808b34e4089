use serde::Serialize;

use crate::errors::AppError;

/// Where a widget's single outstanding assistant call stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Per-widget request lifecycle. At most one call is in flight at a time;
/// a second `begin` while pending is rejected.
#[derive(Debug, Clone, Default)]
pub struct RequestLifecycle {
    state: RequestState,
}

impl RequestLifecycle {
    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == RequestState::Pending
    }

    pub fn begin(&mut self) -> Result<(), AppError> {
        if self.is_pending() {
            return Err(AppError::Conflict(
                "A request is already in progress".to_string(),
            ));
        }
        self.state = RequestState::Pending;
        Ok(())
    }

    pub fn finish(&mut self, succeeded: bool) {
        self.state = if succeeded {
            RequestState::Succeeded
        } else {
            RequestState::Failed
        };
    }
}
