use crate::app::{App, AppProps};
use crate::config::load_client_config;

mod api;
mod app;
mod components;
mod config;
mod navigation;

fn main() {
    wasm_bindgen_futures::spawn_local(async {
        let config = load_client_config().await;
        yew::Renderer::<App>::with_props(AppProps { config }).render();
    });
}
