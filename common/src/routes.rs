//! Client-visible page routes.
//!
//! The frontend resolves the current page from `window.location.pathname` with
//! [`Route::recognize`], and builds link targets with [`Route::path`].

const SOURCES: &str = "sources";
const NEW: &str = "new";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/sources` (also `/`).
    Sources,
    /// `/sources/new`, the upload form.
    NewSource,
    /// `/sources/{id}`. The id is kept exactly as it appears in the path.
    SourceDetail(String),
    NotFound,
}

impl Route {
    pub fn recognize(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | [SOURCES] => Route::Sources,
            [SOURCES, NEW] => Route::NewSource,
            [SOURCES, id] => Route::SourceDetail((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Sources => format!("/{}", SOURCES),
            Route::NewSource => format!("/{}/{}", SOURCES, NEW),
            Route::SourceDetail(id) => format!("/{}/{}", SOURCES, id),
            Route::NotFound => "/404".to_string(),
        }
    }
}
