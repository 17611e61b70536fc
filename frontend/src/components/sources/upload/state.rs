//! Submission state of the upload form.
//!
//! `UploadStatus` is the whole state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Idle (+ navigate to /sources)
//!  ▲                   │
//!  │                   └──err──▶ Error(message) ──submit──▶ Submitting
//! ```
//!
//! Every settle leaves `Submitting`, so the submit button is always enabled
//! again once the request has finished, whatever its outcome.

use common::routes::Route;

use crate::api::ApiError;

pub const SUBMIT_LABEL: &str = "Upload PDF";
pub const SUBMITTING_LABEL: &str = "Uploading…";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

impl UploadStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, UploadStatus::Submitting)
    }

    /// Message for the inline error region, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            UploadStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

/// State container for the `SourceUploadForm` component.
#[derive(Debug, Default)]
pub struct SourceUploadForm {
    pub status: UploadStatus,
}

impl SourceUploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to `Submitting`, clearing any previous error.
    ///
    /// Returns `false` and leaves the state untouched when an upload is
    /// already in flight; the caller must not send another request then.
    pub fn begin_submission(&mut self) -> bool {
        if self.status.is_submitting() {
            return false;
        }
        self.status = UploadStatus::Submitting;
        true
    }

    /// Records the outcome of the in-flight upload.
    ///
    /// On success returns the route to load next; on failure the status
    /// carries the message to display and `None` is returned.
    pub fn settle(&mut self, result: Result<(), ApiError>) -> Option<Route> {
        match result {
            Ok(()) => {
                self.status = UploadStatus::Idle;
                Some(Route::Sources)
            }
            Err(err) => {
                self.status = UploadStatus::Error(err.upload_message());
                None
            }
        }
    }
}
