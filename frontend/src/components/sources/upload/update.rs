//! Update function for the upload form.
//!
//! `Submit` starts the single upload request and `Settled` applies its
//! outcome. A successful upload loads `/sources` as a new document so the
//! listing is fetched again.

use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SourceUploadForm;
use crate::navigation::reload_to;

/// Mutates `component` for `msg` and returns whether the view must re-render.
pub fn update(component: &mut SourceUploadForm, ctx: &Context<SourceUploadForm>, msg: Msg) -> bool {
    match msg {
        Msg::Submit(form_data) => {
            if !component.begin_submission() {
                return false;
            }

            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.upload_source(form_data).await;
                link.send_message(Msg::Settled(result));
            });
            true
        }
        Msg::Settled(result) => {
            if let Err(err) = &result {
                warn!(format!("Upload failed: {}", err));
            }
            if let Some(route) = component.settle(result) {
                reload_to(&route);
            }
            true
        }
    }
}
