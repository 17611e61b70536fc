//! Endpoint paths of the Studium API and URL helpers for building requests
//! against a configured base URL.

/// Base URL used when none is configured (the API's default bind port).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Collection endpoint. `GET` lists sources, `POST` uploads a new one.
pub const SOURCES_PATH: &str = "/v1/sources";

/// Multipart field names expected by `POST /v1/sources`.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_FILE: &str = "file";

/// Mime type hint for the file picker. The API decides what it accepts.
pub const ACCEPTED_CONTENT_TYPE: &str = "application/pdf";

/// Path of a single source. The id is inserted as-is.
pub fn source_path(id: &str) -> String {
    format!("{}/{}", SOURCES_PATH, id)
}

/// Trims surrounding whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Joins a normalized base URL and an absolute or relative path with exactly
/// one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_trailing_slashes_and_whitespace() {
        assert_eq!(normalize_base_url("http://api:8000//"), "http://api:8000");
        assert_eq!(normalize_base_url("  http://api:8000/v0/ "), "http://api:8000/v0");
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn joins_with_single_slash() {
        assert_eq!(
            join_url("http://localhost:8000", SOURCES_PATH),
            "http://localhost:8000/v1/sources"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "v1/sources"),
            "http://localhost:8000/v1/sources"
        );
    }

    #[test]
    fn source_path_keeps_id_unescaped() {
        assert_eq!(source_path("abc"), "/v1/sources/abc");
        assert_eq!(source_path("a b"), "/v1/sources/a b");
    }
}
