//! Small shared helpers.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Local wall-clock time for feed entries and the header clock.
pub fn clock_time() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

/// ISO-8601 timestamp used by locally synthesized prediction records.
pub fn iso_timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}
