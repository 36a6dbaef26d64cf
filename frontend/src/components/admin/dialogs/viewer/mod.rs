//! Full-screen document viewer opened from the review modal.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::admin::{AdminDashboard, Msg};

pub fn viewer_dialog(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let Some((url, title)) = &dash.viewer else {
        return html! {};
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div class="viewer-backdrop" onclick={link.callback(|_| Msg::CloseImage)}>
            <button class="viewer-close">{ "✕" }</button>
            <div class="viewer-body" onclick={swallow}>
                <div class="viewer-title">{ format!("ตรวจสอบเอกสาร: {title}") }</div>
                <img class="viewer-image" src={url.clone()} alt={title.clone()} />
                <button class="btn btn-light" onclick={link.callback(|_| Msg::CloseImage)}>
                    { "ปิดเอกสาร และกลับหน้าพิจารณา" }
                </button>
            </div>
        </div>
    }
}
