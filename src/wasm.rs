//! WASM bindings for browser-side rendering.
//!
//! Both entry points return the instruction tree serialized as JSON, so the
//! host framework can walk it without sharing Rust types.

use wasm_bindgen::prelude::*;

use crate::ir::Fragment;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render an HTML fragment and return the instruction tree as JSON.
#[wasm_bindgen]
pub fn render(html: &str) -> Result<String, JsValue> {
    to_json(&crate::render_html(html))
}

/// Convert markdown, render it, and return the instruction tree as JSON.
#[wasm_bindgen]
pub fn render_markdown(markdown: &str) -> Result<String, JsValue> {
    to_json(&crate::render_markdown(markdown))
}

fn to_json(fragments: &[Fragment]) -> Result<String, JsValue> {
    serde_json::to_string(fragments).map_err(|e| JsValue::from_str(&e.to_string()))
}
