use wasm_bindgen::JsValue;
use web_sys::{UrlSearchParams, Window};

pub(crate) fn get_param(window: &Window, key: &str) -> Option<String> {
    let search = window.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

// Empty value removes the key. The rewrite goes through replaceState, so no
// navigation and no new history entry; unrelated parameters are untouched.
pub(crate) fn set_param(window: &Window, key: &str, value: &str) {
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return;
    };
    if value.is_empty() {
        params.delete(key);
    } else {
        params.set(key, value);
    }
    let path = location.pathname().unwrap_or_default();
    let query = String::from(params.to_string());
    let new_url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
    }
}
