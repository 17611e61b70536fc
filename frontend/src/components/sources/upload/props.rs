//! Properties for the `SourceUploadForm` component.

use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct SourceUploadProps {
    /// Client used to post the form. Nothing is fetched before submission.
    pub client: ApiClient,
}
