use anyhow::Context;
use stays_app::{config::PageConfig, App};
use wasm_bindgen::prelude::wasm_bindgen;

use leptos::prelude::*;

/// Id of the optional `<script type="application/json">` element carrying page config
/// overrides.
const CONFIG_ELEMENT_ID: &str = "stays-config";

fn page_config() -> anyhow::Result<PageConfig> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };
    let json = element.text_content().unwrap_or_default();
    PageConfig::from_json(&json).with_context(|| format!("parsing #{CONFIG_ELEMENT_ID}"))
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    if tracing_wasm::try_set_as_global_default().is_err() {
        log::warn!("tracing subscriber already installed");
    }

    let config = page_config().unwrap_or_else(|e| {
        log::error!("{e:#}, falling back to the default page");
        PageConfig::default()
    });

    log::info!("csr mode - mounting");
    leptos::mount::mount_to_body(move || view! { <App config /> });
}
