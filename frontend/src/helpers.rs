//! Browser-side utility functions shared by the components.
//!
//! Everything here touches the DOM or the JS clock; the pure counterparts
//! (phone formatting, age arithmetic, id validation) live in `common` where
//! they run under native tests.

use base64::engine::general_purpose;
use base64::Engine as _;
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(message);
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "'Sarabun', sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Native blocking confirm dialog. `false` when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Current instant as an ISO timestamp, e.g. `2026-01-15T09:30:00.000Z`.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Today's local date as (year, month 1-12, day) for the age calculation.
pub fn today_ymd() -> (i32, u32, u32) {
    let now = js_sys::Date::new_0();
    (
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

/// The running Buddhist year, which numbers the admission round.
pub fn buddhist_year() -> u32 {
    js_sys::Date::new_0().get_full_year() + 543
}

/// Current date and time in the Thai locale for the print footer.
pub fn now_thai() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("th-TH", &JsValue::UNDEFINED))
}

/// Renders an ISO date in the Thai locale, e.g. `15/1/2569`.
/// Falls back to the raw string when the browser cannot parse it.
pub fn thai_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    String::from(date.to_locale_date_string("th-TH", &JsValue::UNDEFINED))
}

/// Reads a picked file into a `data:<mime>;base64,...` URL.
pub async fn read_file_as_data_url(file: web_sys::File) -> Option<String> {
    let mime = file.type_();
    let blob = Blob::from(file);
    let bytes = read_as_bytes(&blob).await.ok()?;
    Some(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(&bytes)
    ))
}

/// Opens the browser's print dialog.
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        window.print().ok();
    }
}
