//! Source detail page (`/sources/{id}`).

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::source::Source;

use super::{loading_view, LoadState};
use crate::api::{ApiClient, ApiError};

mod view;

pub use view::SourceDetailCard;

#[derive(Properties, PartialEq, Clone)]
pub struct SourceDetailProps {
    pub client: ApiClient,
    /// Id taken from the path, forwarded to the API without validation.
    pub id: String,
    #[prop_or_default]
    pub on_error: Callback<ApiError>,
}

pub enum Msg {
    Loaded(Result<Source, ApiError>),
}

pub struct SourceDetailPage {
    state: LoadState<Source>,
}

impl Component for SourceDetailPage {
    type Message = Msg;
    type Properties = SourceDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let client = props.client.clone();
        let id = props.id.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = client.get_source(&id).await;
            link.send_message(Msg::Loaded(result));
        });

        Self {
            state: LoadState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Loaded(result) = msg;
        if let Some(err) = self.state.apply(result) {
            error!(format!("Loading source {} failed: {}", ctx.props().id, err));
            ctx.props().on_error.emit(err);
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            LoadState::Loading => loading_view(),
            LoadState::Ready(source) => html! { <SourceDetailCard source={source.clone()} /> },
            LoadState::Failed => html! {},
        }
    }
}
