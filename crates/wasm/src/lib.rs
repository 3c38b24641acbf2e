mod dom;
mod mount;

use std::cell::RefCell;

use royale_core::content::PAGE;
use royale_core::html::{CONFIG_ATTR, ROOT_ID, render_document};
use royale_core::trackers::select_section;
use royale_core::{ConfigError, SiteConfig};
use royale_protocol::{PageView, SectionId, SectionObservation};
use wasm_bindgen::prelude::*;

use crate::mount::MountedPage;

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

/// Module entry point: installs the panic hook and mounts the page, using
/// the config stored on `#royale-root` when the document carries one.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        // Workers and other document-less hosts only use the pure exports.
        return Ok(());
    };
    let config_json = document
        .get_element_by_id(ROOT_ID)
        .and_then(|root| root.get_attribute(CONFIG_ATTR));
    mount(config_json).map_err(JsValue::from)
}

/// Render the page into `#royale-root` (or `<body>`) and start tracking.
/// Replaces any page mounted earlier.
#[wasm_bindgen]
#[allow(clippy::needless_pass_by_value)]
pub fn mount(config_json: Option<String>) -> Result<(), JsError> {
    let config = parse_config(config_json.as_deref()).map_err(|e| JsError::new(&e.to_string()))?;
    unmount();
    let page = MountedPage::mount(&config)
        .map_err(|e| JsError::new(&format!("mount failed: {}", dom::js_message(&e))))?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(page));
    Ok(())
}

/// Stop tracking, detach every listener and release the scroll lock.
/// The rendered markup is left in place.
#[wasm_bindgen]
pub fn unmount() {
    let page = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    drop(page);
}

/// Id of the section currently marked active, if any.
#[wasm_bindgen]
pub fn active_section() -> Option<String> {
    MOUNTED.with(|mounted| {
        mounted
            .borrow()
            .as_ref()
            .and_then(MountedPage::active_section)
            .map(|id| id.as_str().to_string())
    })
}

/// Render the idle page as a standalone HTML document, e.g. for
/// pre-rendering. `wasm_module` is the path of the JS glue to load; a
/// given config is validated and embedded for that host to mount with.
#[wasm_bindgen]
#[allow(clippy::needless_pass_by_value)]
pub fn render_static_html(
    wasm_module: Option<String>,
    config_json: Option<String>,
) -> Result<String, JsError> {
    static_html(wasm_module.as_deref(), config_json.as_deref())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Run the active-section selection over a JSON array of observations.
/// Returns the chosen section id, or nothing when no entry qualifies.
#[wasm_bindgen]
pub fn select_active_section(batch_json: &str, header_offset: f64) -> Result<Option<String>, JsError> {
    select_from_json(batch_json, header_offset)
        .map(|id| id.map(|id| id.as_str().to_string()))
        .map_err(|e| JsError::new(&e.to_string()))
}

fn parse_config(config_json: Option<&str>) -> Result<SiteConfig, ConfigError> {
    match config_json {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(json.as_bytes()),
        _ => Ok(SiteConfig::default()),
    }
}

fn static_html(wasm_module: Option<&str>, config_json: Option<&str>) -> Result<String, ConfigError> {
    let embedded = match config_json {
        Some(json) if !json.trim().is_empty() => {
            let config = SiteConfig::from_json(json.as_bytes())?;
            Some(serde_json::to_string(&config)?)
        }
        _ => None,
    };
    Ok(render_document(
        &PageView::new(false, false, None),
        &PAGE,
        wasm_module,
        embedded.as_deref(),
    ))
}

fn select_from_json(batch_json: &str, header_offset: f64) -> Result<Option<SectionId>, ConfigError> {
    let batch: Vec<SectionObservation> = serde_json::from_str(batch_json)?;
    let config = SiteConfig {
        header_offset,
        ..SiteConfig::default()
    };
    config.validate()?;
    Ok(select_section(&batch, config.section_cutoff()))
}
