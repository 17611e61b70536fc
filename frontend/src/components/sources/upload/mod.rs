//! Source upload page (`/sources/new`): root module wiring the Yew
//! `Component` implementation with submodules for state, update logic and
//! view rendering.
//!
//! Unlike the list and detail pages nothing is loaded when the page renders;
//! the API is only called when the form is submitted, and failures are shown
//! inside the form instead of replacing the page.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SourceUploadProps;
pub use state::SourceUploadForm;

impl Component for SourceUploadForm {
    type Message = Msg;
    type Properties = SourceUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SourceUploadForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
