//! WASM bindings for the widget compiler.
//!
//! Exposes the compile entry points to JavaScript via wasm-bindgen, so the
//! configurator UI can call the same generator it ships with.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::config::CompileOptions;

fn options(auto_update: bool) -> CompileOptions {
    CompileOptions {
        auto_update,
        ..CompileOptions::default()
    }
}

/// Compile a widget JSON record to embeddable HTML.
///
/// Returns the markup string on success, or throws a JS error on failure.
#[wasm_bindgen]
pub fn compile_to_html(json: &str, auto_update: bool) -> Result<String, JsError> {
    crate::compile_widget(json, &options(auto_update))
        .map(|out| out.html)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Compile a widget JSON record to an iframe snippet.
#[wasm_bindgen]
pub fn compile_to_iframe(json: &str, auto_update: bool) -> Result<String, JsError> {
    crate::compile_widget(json, &options(auto_update))
        .map(|out| out.iframe)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Compile a pros/cons JSON record to embeddable HTML.
#[wasm_bindgen]
pub fn compile_pros_cons_to_html(json: &str) -> Result<String, JsError> {
    crate::compile_pros_cons(json)
        .map(|out| out.html)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Compile a text-link JSON record to embeddable HTML.
#[wasm_bindgen]
pub fn compile_text_link_to_html(json: &str) -> Result<String, JsError> {
    crate::compile_text_link(json)
        .map(|out| out.html)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Validate a widget JSON record without keeping the output.
///
/// Returns an object with:
/// - `valid`: boolean
/// - `error`: string (only if invalid)
/// - `warnings`: string[] (only if valid)
/// - `height`: number (only if valid)
#[wasm_bindgen]
pub fn validate(json: &str) -> JsValue {
    match crate::compile_widget(json, &CompileOptions::default()) {
        Ok(output) => {
            let obj = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&obj, &"valid".into(), &JsValue::TRUE);
            let warnings = serde_wasm_bindgen::to_value(&output.warnings)
                .unwrap_or_else(|_| js_sys::Array::new().into());
            let _ = js_sys::Reflect::set(&obj, &"warnings".into(), &warnings);
            let _ = js_sys::Reflect::set(
                &obj,
                &"height".into(),
                &JsValue::from_f64(f64::from(output.height)),
            );
            obj.into()
        }
        Err(e) => {
            let obj = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&obj, &"valid".into(), &JsValue::FALSE);
            let _ = js_sys::Reflect::set(&obj, &"error".into(), &JsValue::from_str(&e.to_string()));
            obj.into()
        }
    }
}
