use serde::{Deserialize, Serialize};

use crate::format::format_size;
use crate::routes::Route;

/// Owner label shown when a source has no `owner_user_id`.
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// A PDF document uploaded to the Studium API, together with the metadata the
/// API recorded for the stored file.
///
/// Records are created by the API when the upload form is submitted and are
/// only ever read by the frontend. The list and detail pages fetch them again
/// on every navigation, so nothing here is treated as an authoritative copy.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Source {
    /// Identifier assigned by the API. Opaque to the frontend.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` means the source has not been assigned to a user.
    #[serde(default)]
    pub owner_user_id: Option<String>,
    pub original_file_name: String,
    pub content_type: String,
    /// Storage location reported by the API.
    pub file_path: String,
    /// Size of the stored file in bytes.
    pub file_size: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl Source {
    /// Description to render, if any. An empty description renders like a
    /// missing one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn owner_label(&self) -> &str {
        self.owner_user_id.as_deref().unwrap_or(UNASSIGNED_OWNER)
    }

    pub fn size_label(&self) -> String {
        format_size(self.file_size)
    }

    /// Route of the detail page for this source.
    pub fn detail_route(&self) -> Route {
        Route::SourceDetail(self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "0b9f8f1e-5a3c-4f5e-9a57-2f6a4b1c9d10",
            "title": "Cell Biology Notes",
            "description": "Chapter 3",
            "owner_user_id": null,
            "original_file_name": "cells.pdf",
            "content_type": "application/pdf",
            "file_path": "/app/storage/uploads/0b9f8f1e.pdf",
            "file_size": 1536,
            "created_at": "2025-02-11T09:30:00Z",
            "updated_at": "2025-02-11T09:30:00Z"
        }"#
    }

    #[test]
    fn deserializes_api_payload() {
        let source: Source = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(source.title, "Cell Biology Notes");
        assert_eq!(source.owner_user_id, None);
        assert_eq!(source.file_size, 1536);
        assert_eq!(source.size_label(), "1.5 KB");
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let source: Source = serde_json::from_str(
            r#"{
                "id": "a",
                "title": "t",
                "original_file_name": "f.pdf",
                "content_type": "application/pdf",
                "file_path": "/p",
                "file_size": 0,
                "created_at": "2025-02-11T09:30:00Z",
                "updated_at": "2025-02-11T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(source.description(), None);
        assert_eq!(source.owner_label(), "Unassigned");
    }

    #[test]
    fn owner_label_prefers_owner_id() {
        let mut source: Source = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(source.owner_label(), UNASSIGNED_OWNER);
        source.owner_user_id = Some("user-42".to_string());
        assert_eq!(source.owner_label(), "user-42");
    }

    #[test]
    fn empty_description_is_treated_as_missing() {
        let mut source: Source = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(source.description(), Some("Chapter 3"));
        source.description = Some(String::new());
        assert_eq!(source.description(), None);
    }

    #[test]
    fn detail_route_uses_id() {
        let source: Source = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            source.detail_route().path(),
            "/sources/0b9f8f1e-5a3c-4f5e-9a57-2f6a4b1c9d10"
        );
    }
}
