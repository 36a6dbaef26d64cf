//! Update logic for the staff dashboard.
//!
//! Key behaviors
//! - The login check digests the attempt and compares it against the
//!   stored credentials; nothing here ever sees a stored plaintext.
//! - Decisions are optimistic: the list, the cache and the dialog update
//!   immediately, then the stripped record goes to the sheet and the green
//!   confirmation holds for a moment before the dialog closes.
//! - Deletes ask for confirmation, then remove locally and from the sheet.
//! - Saving settings digests a newly typed password; a blank password
//!   field leaves the stored digest untouched.

use common::model::application::{ApplicationRecord, Level, TrackKind};
use common::model::status::ApplicationStatus;
use common::{auth, files, tracks};
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::{EditField, Msg, SettingsField};
use super::state::AdminDashboard;
use crate::helpers;
use crate::services::storage;

const SYNC_FAILED: &str =
    "เกิดข้อผิดพลาดในการเชื่อมต่อเซิร์ฟเวอร์ แต่ระบบได้บันทึกสถานะไว้ในเครื่องแล้ว";

/// Handles a message for the staff dashboard.
pub fn update(dash: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Login => {
            let user = input_value(&dash.user_ref);
            let pass = input_value(&dash.pass_ref);
            if auth::verify_admin(&dash.settings, &user, &pass) {
                dash.logged_in = true;
            } else {
                helpers::show_toast("รหัสผ่านไม่ถูกต้อง");
            }
            true
        }
        Msg::Logout => {
            dash.logged_in = false;
            true
        }
        Msg::SetTab(tab) => {
            dash.tab = tab;
            true
        }
        Msg::Refresh => {
            dash.loading = true;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                link.send_message(Msg::Loaded(storage::fetch_applications().await));
            });
            true
        }
        Msg::Loaded(records) => {
            dash.loading = false;
            dash.records = records;
            true
        }
        Msg::SetSearch(value) => {
            dash.filter.search = value;
            true
        }
        Msg::SetLevelFilter(raw) => {
            dash.filter.level = match raw.as_str() {
                "all" => None,
                other => Some(Level::from_wire(other)),
            };
            dash.filter.track = None;
            true
        }
        Msg::SetStatusFilter(raw) => {
            dash.filter.status = match raw.as_str() {
                "all" => None,
                other => Some(ApplicationStatus::from_wire(other)),
            };
            true
        }
        Msg::SetTrackFilter(raw) => {
            dash.filter.track = (raw != "all").then_some(raw);
            true
        }
        Msg::SetDateFilter(raw) => {
            dash.filter.date = (!raw.is_empty()).then_some(raw);
            true
        }
        Msg::Open(record) => {
            dash.note = record.admin_note.clone().unwrap_or_default();
            dash.edit = None;
            dash.selected = Some(*record);
            true
        }
        Msg::Close => {
            dash.selected = None;
            dash.edit = None;
            true
        }
        Msg::SetNote(value) => {
            dash.note = value;
            true
        }
        Msg::Decide(status) => {
            let Some(selected) = dash.selected.as_ref() else {
                return false;
            };
            let mut updated = selected.clone();
            updated.status = status;
            updated.admin_note = (!dash.note.trim().is_empty()).then(|| dash.note.clone());
            updated.updated_at = Some(helpers::now_iso());

            dash.loading = true;
            replace_record(&mut dash.records, &updated);
            dash.selected = Some(updated.clone());
            let mut store = storage::local_store();
            storage::note_cache_outcome("decision", store.save_application(&updated));

            let payload = files::strip_attachments(&updated);
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let queued = storage::sync_record(&payload).await;
                link.send_message(Msg::DecideSynced(queued));
            });
            true
        }
        Msg::DecideSynced(queued) => {
            dash.loading = false;
            if queued {
                dash.saved = true;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(1_500).await;
                    link.send_message(Msg::HideSaved);
                });
            } else {
                helpers::show_toast(SYNC_FAILED);
            }
            true
        }
        Msg::HideSaved => {
            dash.saved = false;
            dash.selected = None;
            dash.note.clear();
            true
        }
        Msg::Delete(id) => {
            if !helpers::confirm("ลบใบสมัครนี้? ข้อมูลจะถูกลบจาก Google Sheet ด้วย") {
                return false;
            }
            dash.loading = true;
            dash.records.retain(|r| r.id != id);
            dash.selected = None;
            dash.edit = None;
            let mut store = storage::local_store();
            storage::note_cache_outcome("delete", store.delete_application(&id));

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let queued = storage::sync_delete(&id).await;
                link.send_message(Msg::DeleteSynced(queued));
            });
            true
        }
        Msg::DeleteSynced(_) => {
            dash.loading = false;
            true
        }
        Msg::StartEdit => {
            dash.edit = dash.selected.clone();
            true
        }
        Msg::CancelEdit => {
            dash.edit = None;
            true
        }
        Msg::Edit(field, value) => {
            let Some(draft) = dash.edit.as_mut() else {
                return false;
            };
            set_edit_field(draft, field, value);
            true
        }
        Msg::SaveEdit => {
            let Some(mut updated) = dash.edit.clone() else {
                return false;
            };
            updated.updated_at = Some(helpers::now_iso());

            dash.loading = true;
            replace_record(&mut dash.records, &updated);
            dash.selected = Some(updated.clone());
            let mut store = storage::local_store();
            storage::note_cache_outcome("edit", store.save_application(&updated));

            let payload = files::strip_attachments(&updated);
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let queued = storage::sync_record(&payload).await;
                link.send_message(Msg::EditSynced(queued));
            });
            true
        }
        Msg::EditSynced(queued) => {
            dash.loading = false;
            dash.edit = None;
            if queued {
                helpers::show_toast("บันทึกการแก้ไขเรียบร้อย");
            } else {
                helpers::show_toast(SYNC_FAILED);
            }
            true
        }
        Msg::ShowImage { url, title } => {
            dash.viewer = Some((url, title));
            true
        }
        Msg::CloseImage => {
            dash.viewer = None;
            true
        }
        Msg::Print => {
            dash.printing = dash.selected.clone().map(Box::new);
            true
        }
        Msg::ClosePrint => {
            dash.printing = None;
            true
        }
        Msg::Setting(field, value) => {
            match field {
                SettingsField::SchoolName => dash.settings.school_name = value,
                SettingsField::AdminUser => dash.settings.admin_user = value,
                SettingsField::NewPassword => dash.new_password = value,
                SettingsField::ContactLine => dash.settings.contact_line = value,
                SettingsField::ContactPhone => dash.settings.contact_phone = value,
            }
            true
        }
        Msg::ToggleOpen => {
            dash.settings.is_open = !dash.settings.is_open;
            true
        }
        Msg::SetPhotoMode(mode) => {
            dash.settings.photo_mode = mode;
            true
        }
        Msg::SetPaymentMode(mode) => {
            dash.settings.payment_mode = mode;
            true
        }
        Msg::SaveSettings => {
            let password = dash.new_password.trim().to_string();
            if !password.is_empty() {
                dash.settings.admin_pass_hash = auth::password_digest(&password);
                dash.new_password.clear();
            }
            storage::save_settings(&dash.settings);
            helpers::show_toast("บันทึกการตั้งค่าสำเร็จ");
            true
        }
    }
}

fn input_value(node: &yew::NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

fn replace_record(records: &mut [ApplicationRecord], updated: &ApplicationRecord) {
    if let Some(row) = records.iter_mut().find(|r| r.same_application(updated)) {
        *row = updated.clone();
    }
}

/// Writes an edit-mode change into the draft. Switching the study plan
/// re-derives the extra-score subject and the plan kind so the stats and
/// the sub-GPA box stay consistent with the new plan.
fn set_edit_field(draft: &mut ApplicationRecord, field: EditField, value: String) {
    match field {
        EditField::Title => draft.title = value,
        EditField::FirstName => draft.first_name = value,
        EditField::LastName => draft.last_name = value,
        EditField::Track => {
            draft.education.sub_gpa_subject = tracks::find_track(draft.level, &value)
                .map(|track| track.sub_gpa_label.to_string())
                .unwrap_or_default();
            if let Some(kind) = [TrackKind::Special, TrackKind::Regular]
                .into_iter()
                .find(|kind| {
                    tracks::tracks_for(draft.level, *kind).iter().any(|t| t.name == value)
                })
            {
                draft.track_type = kind;
            }
            draft.track = value;
        }
        EditField::Gpa => draft.education.gpa = value,
        EditField::SubGpa => draft.education.sub_gpa = value,
    }
}
