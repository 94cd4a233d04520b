#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Date part of an ISO-8601 timestamp, for compact list labels.
pub fn date_only(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Locale-formatted current date and time, used to stamp composition
/// results. Empty outside the browser.
pub fn now_string() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
