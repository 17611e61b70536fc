//! Page chrome shared by every route, and the page-level error presentation.

use yew::prelude::*;

use common::routes::Route;

use crate::api::ApiError;

#[derive(Properties, PartialEq, Default)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <header class="app-header">
                <div class="brand">{"Studium"}</div>
                <nav>
                    <a href={Route::Sources.path()}>{"Sources"}</a>
                    <a href={Route::NewSource.path()}>{"Add Source"}</a>
                </nav>
            </header>
            <main class="container">{ props.children.clone() }</main>
        </>
    }
}

/// Replaces a page whose data could not be loaded.
pub fn error_page(error: &ApiError) -> Html {
    html! {
        <div class="card error-page">
            <h1>{"Something went wrong"}</h1>
            <p class="meta">{error.to_string()}</p>
        </div>
    }
}

pub fn not_found_page() -> Html {
    html! {
        <div class="card">
            <h1>{"Page not found"}</h1>
            <p class="meta">
                <a href={Route::Sources.path()}>{"Back to sources"}</a>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn layout_links_to_every_page() {
        let html = ServerRenderer::<Layout>::new().hydratable(false).render().await;
        assert!(html.contains("Studium"));
        assert!(html.contains(r#"href="/sources""#));
        assert!(html.contains(r#"href="/sources/new""#));
    }
}
