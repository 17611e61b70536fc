/// Formats an API timestamp in the browser's locale, e.g. `"2/11/2025, 9:30:00 AM"`.
///
/// Strings the browser cannot parse are shown unchanged. Outside the browser
/// (server-side rendering, tests) the raw value is returned.
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(raw: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(raw: &str) -> String {
    raw.to_string()
}
