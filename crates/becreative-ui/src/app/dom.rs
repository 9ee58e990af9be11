//! Browser glue: root theme class, print dialog, config script, clipboard and clock.

use async_trait::async_trait;
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::core::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::core::copy::{ClipboardError, ClipboardWriter};
use crate::core::theme::{DARK_CLASS, ThemeMode};
use crate::core::ui::format_pt_br_date;

/// Add or remove the dark class on `<html>`.
pub(crate) fn apply_theme(theme: ThemeMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(err) = result {
        console::error!("theme class update failed", err);
    }
}

/// Open the browser print dialog.
pub(crate) fn print_page() {
    if let Err(err) = window().print() {
        console::error!("print dialog failed", err);
    }
}

/// Read the optional JSON config script and fall back to defaults.
pub(crate) fn load_config() -> UiConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let (config, err) = UiConfig::load_or_default(raw.as_deref());
    if let Some(err) = err {
        console::warn!("ignoring page config, using defaults", err.to_string());
    }
    config
}

/// Today's date as `dd/mm/yyyy`.
pub(crate) fn today_pt_br() -> String {
    let now = js_sys::Date::new_0();
    format_pt_br_date(now.get_date(), now.get_month() + 1, now.get_full_year())
}

/// `navigator.clipboard` writer.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let navigator = window().navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| ClipboardError::Unavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(describe(&err)))
    }
}

fn describe(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_owned())
}
