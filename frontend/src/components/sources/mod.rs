//! Pages of the Sources feature: listing, detail and upload.
//!
//! The list and detail pages load their data while rendering: until the API
//! answers nothing but a loading line is shown, and a failed request is handed
//! to the application through `on_error` instead of being rendered in place.
//! The upload page loads nothing up front and only talks to the API when the
//! form is submitted.

use yew::prelude::*;

use crate::api::{ApiClient, ApiError};

pub mod detail;
pub mod list;
pub mod upload;

/// Progress of a render-time load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// The error has been reported through `on_error`.
    Failed,
}

impl<T> LoadState<T> {
    /// Records the outcome of the load. A failure is returned so the caller
    /// can hand it to `on_error`; nothing of it is kept for rendering.
    pub fn apply(&mut self, result: Result<T, ApiError>) -> Option<ApiError> {
        match result {
            Ok(value) => {
                *self = LoadState::Ready(value);
                None
            }
            Err(err) => {
                *self = LoadState::Failed;
                Some(err)
            }
        }
    }
}

/// Properties shared by pages that load data while rendering.
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub client: ApiClient,
    /// Receives the error when the page's load fails.
    #[prop_or_default]
    pub on_error: Callback<ApiError>,
}

pub(crate) fn loading_view() -> Html {
    html! { <div class="meta">{"Loading…"}</div> }
}
