//! Source listing page (`/sources`).
//!
//! Fetches the whole collection when created and renders one card per source,
//! or an empty-state card when there are none.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::source::Source;

use super::{loading_view, LoadState, PageProps};
use crate::api::ApiError;

mod view;

pub use view::SourceEntries;

pub enum Msg {
    Loaded(Result<Vec<Source>, ApiError>),
}

pub struct SourceListPage {
    state: LoadState<Vec<Source>>,
}

impl Component for SourceListPage {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = client.list_sources().await;
            link.send_message(Msg::Loaded(result));
        });

        Self {
            state: LoadState::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Loaded(result) = msg;
        if let Some(err) = self.state.apply(result) {
            error!(format!("Loading sources failed: {}", err));
            ctx.props().on_error.emit(err);
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            LoadState::Loading => loading_view(),
            LoadState::Ready(sources) => html! {
                <div>
                    <h1>{"Sources"}</h1>
                    <SourceEntries sources={sources.clone()} />
                </div>
            },
            LoadState::Failed => html! {},
        }
    }
}
