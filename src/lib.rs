use js_sys::JsString;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

pub mod config;
pub mod errors;
pub mod game_api;
pub mod geometry;
pub mod intel;
mod logging;
mod utils;
pub mod visualization;

// `wasm_bindgen` to expose the function to JS.
#[wasm_bindgen]
pub fn setup() {
    logging::init_logging(config::LOG_LEVEL);
}

/// Draws a map with all the intel provided in the room `target_room`.
/// `rooms_info` is an object with info about rooms indexed by their names and `options` are optional render options.
#[wasm_bindgen(js_name = renderIntelMap)]
pub fn render_intel_map(target_room: String, rooms_info: JsValue, options: JsValue) {
    game_api::render_intel_map_from_js(&target_room, rooms_info, options);
}

#[wasm_bindgen(js_name = take_log)]
pub fn take_log() -> JsString {
    logging::take_log().join("\n").into()
}
