use common::config::ClientConfig;
use common::routes::Route;
use yew::{function_component, html, Callback, Component, Context, Html, Properties};

use crate::api::{ApiClient, ApiError};
use crate::components::layout::{error_page, not_found_page, Layout};
use crate::components::sources::detail::SourceDetailPage;
use crate::components::sources::list::SourceListPage;
use crate::components::sources::upload::SourceUploadForm;
use crate::navigation::current_route;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

pub enum Msg {
    /// A page could not load its data and must be replaced.
    PageFailed(ApiError),
}

pub struct App {
    route: Route,
    client: ApiClient,
    failure: Option<ApiError>,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            route: current_route(),
            client: ApiClient::new(&ctx.props().config),
            failure: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::PageFailed(err) = msg;
        self.failure = Some(err);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <Layout>
                <Page
                    route={self.route.clone()}
                    client={self.client.clone()}
                    failure={self.failure.clone()}
                    on_error={ctx.link().callback(Msg::PageFailed)}
                />
            </Layout>
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PageSwitchProps {
    pub route: Route,
    pub client: ApiClient,
    /// Set once the current page failed to load; replaces the page.
    #[prop_or_default]
    pub failure: Option<ApiError>,
    #[prop_or_default]
    pub on_error: Callback<ApiError>,
}

#[function_component(Page)]
pub fn page(props: &PageSwitchProps) -> Html {
    if let Some(err) = &props.failure {
        return error_page(err);
    }

    let client = props.client.clone();
    let on_error = props.on_error.clone();
    match &props.route {
        Route::Sources => html! { <SourceListPage {client} {on_error} /> },
        Route::NewSource => html! { <SourceUploadForm {client} /> },
        Route::SourceDetail(id) => html! {
            <SourceDetailPage {client} id={id.clone()} {on_error} />
        },
        Route::NotFound => not_found_page(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(route: Route, failure: Option<ApiError>) -> String {
        ServerRenderer::<Page>::with_props(move || PageSwitchProps {
            route,
            client: ApiClient::new(&ClientConfig::default()),
            failure,
            on_error: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn failure_replaces_the_routed_page() {
        let html = render(
            Route::SourceDetail("missing".to_string()),
            Some(ApiError::RequestFailure {
                status: 404,
                body: "Source not found".to_string(),
            }),
        )
        .await;
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("request failed with status 404: Source not found"));
        assert!(!html.contains("Loading…"));
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found() {
        let html = render(Route::NotFound, None).await;
        assert!(html.contains("Page not found"));
    }

    #[tokio::test]
    async fn upload_route_renders_form_without_loading() {
        let html = render(Route::NewSource, None).await;
        assert!(html.contains("Add a Source"));
        assert!(!html.contains("Loading…"));
    }
}
