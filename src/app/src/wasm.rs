//! WebAssembly FFI bindings for the Crux Core
//!
//! The web shell drives the change-password form through these three
//! functions: it forwards user events, resolves effects and reads the view.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::{wasm_bindgen, JsError};

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Install the console logger.
///
/// Runs when the module is loaded. A second initialisation (e.g. after a hot
/// reload) keeps the logger that is already installed.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already initialised");
    }
}

/// Raise or lower the log level at runtime (`"error"`, `"warn"`, `"info"`, `"debug"`)
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("unknown log level: {level}")))?;
    log::set_max_level(filter);
    Ok(())
}

/// Process a serialized `Event` and return the serialized effect requests
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(effects)
}

/// Serialized `ViewModel` of the current state
#[wasm_bindgen]
pub fn view() -> Result<Vec<u8>, JsError> {
    let mut view = Vec::new();
    CORE.view(&mut view)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(view)
}

/// Resolve the effect `id` with a serialized output (HTTP response, toast ack)
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(effects)
}
