//! Update logic for the admission form.
//!
//! Key behaviors
//! - Text edits write straight into the draft record; the citizen id is
//!   normalized to at most 13 digits and the phone number is grouped as
//!   it is typed.
//! - Picking a birth date recomputes the age; picking a study plan copies
//!   its extra-score subject into the draft.
//! - Attachments are read into data URLs off the main thread, with a 2MB
//!   cap per file enforced before the read starts.
//! - Submit re-checks the duplicate guard against the cache, saves the
//!   record locally, then pushes the full record (inline images included,
//!   that upload is how the documents reach the sheet) before showing the
//!   success overlay and handing the record back to the app shell.

use common::helpers::{calculate_age, format_phone, parse_iso_date};
use common::model::application::{ApplicationRecord, Level, StudentType};
use common::validation::{normalize_citizen_id, validate_submission, SubmissionError};
use common::{address, tracks};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use super::messages::{FormField, Msg};
use super::state::AdmissionForm;
use crate::helpers;
use crate::services::storage;

const MAX_UPLOAD_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

/// Handles a message for the admission form.
///
/// Contract
/// - Returns `true` when the form needs to re-render.
/// - `Finish` is only ever sent after a successful submit.
pub fn update(form: &mut AdmissionForm, ctx: &Context<AdmissionForm>, msg: Msg) -> bool {
    match msg {
        Msg::GuardRecords(records) => {
            form.guard.absorb(&records);
            false
        }
        Msg::Field(field, value) => {
            set_field(&mut form.draft, field, value);
            true
        }
        Msg::SetServiceArea(area) => {
            form.draft.service_area = area;
            true
        }
        Msg::SetStudentType(student_type) => {
            form.draft.education.student_type = student_type;
            if student_type == StudentType::Internal && form.draft.level == Level::M4 {
                form.draft.education.school_name = "โรงเรียนท่าบ่อ".to_string();
            }
            true
        }
        Msg::SetTrackKind(kind) => {
            form.draft.track_type = kind;
            form.draft.track.clear();
            form.draft.education.sub_gpa_subject.clear();
            true
        }
        Msg::SetTrack(name) => {
            form.draft.education.sub_gpa_subject = tracks::find_track(form.draft.level, &name)
                .map(|track| track.sub_gpa_label.to_string())
                .unwrap_or_default();
            form.draft.track = name;
            true
        }
        Msg::AddressQuery(query) => {
            form.address_hits = if query.chars().count() > 1 {
                address::search_subdistricts(&query)
            } else {
                Vec::new()
            };
            true
        }
        Msg::PickAddress(row) => {
            form.draft.address.sub_district = row.subdistrict.to_string();
            form.draft.address.district = row.district.to_string();
            form.draft.address.province = row.province.to_string();
            form.draft.address.zip_code = row.zip_code.to_string();
            form.address_hits.clear();
            true
        }
        Msg::FilePicked(slot, file) => {
            if file.size() > MAX_UPLOAD_BYTES {
                form.error = Some(SubmissionError::FileTooLarge.to_string());
                helpers::scroll_to_top();
                return true;
            }
            form.error = None;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match helpers::read_file_as_data_url(file).await {
                    Some(data_url) => link.send_message(Msg::FileLoaded(slot, data_url)),
                    None => link.send_message(Msg::FileRejected(
                        "ไม่สามารถอ่านไฟล์ได้ กรุณาลองใหม่อีกครั้ง".to_string(),
                    )),
                }
            });
            true
        }
        Msg::FileLoaded(slot, data_url) => {
            slot.set(&mut form.draft.files, data_url);
            true
        }
        Msg::FileRejected(message) => {
            form.error = Some(message);
            helpers::scroll_to_top();
            true
        }
        Msg::Submit => {
            if form.submitting || form.success {
                return false;
            }
            let mut store = storage::local_store();
            form.guard.absorb(&store.applications());
            if let Err(reason) = validate_submission(&form.draft, &form.guard, &ctx.props().settings) {
                form.error = Some(reason.to_string());
                helpers::scroll_to_top();
                return true;
            }
            form.error = None;
            form.submitting = true;
            storage::note_cache_outcome("submit", store.save_application(&form.draft));

            let record = form.draft.clone();
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let queued = storage::sync_record(&record).await;
                link.send_message(Msg::CloudDone(queued));
            });
            true
        }
        Msg::CloudDone(queued) => {
            form.submitting = false;
            if queued {
                form.success = true;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(2_000).await;
                    link.send_message(Msg::Finish);
                });
            } else {
                form.error = Some("ไม่สามารถบันทึกลง Google Sheet ได้ กรุณาลองใหม่อีกครั้ง".to_string());
                helpers::scroll_to_top();
            }
            true
        }
        Msg::Finish => {
            ctx.props().on_finish.emit(form.draft.clone());
            false
        }
    }
}

/// Writes a text edit into the draft, applying per-field normalization.
fn set_field(draft: &mut ApplicationRecord, field: FormField, value: String) {
    match field {
        FormField::Title => draft.title = value,
        FormField::FirstName => draft.first_name = value,
        FormField::LastName => draft.last_name = value,
        FormField::NationalId => {
            draft.national_id = normalize_citizen_id(&value).chars().take(13).collect();
        }
        FormField::BirthDate => {
            draft.birth_date = value;
            draft.age = parse_iso_date(&draft.birth_date)
                .map(|born| calculate_age(born, helpers::today_ymd()))
                .unwrap_or(0);
        }
        FormField::Phone => draft.phone = format_phone(&value),
        FormField::FatherName => draft.father_name = value,
        FormField::MotherName => draft.mother_name = value,
        FormField::GuardianName => draft.guardian_name = value,
        FormField::HouseNo => draft.address.house_no = value,
        FormField::Village => draft.address.village = value,
        FormField::Moo => draft.address.moo = value,
        FormField::SchoolName => draft.education.school_name = value,
        FormField::SchoolDistrict => draft.education.school_district = value,
        FormField::SchoolProvince => draft.education.school_province = value,
        FormField::Gpa => draft.education.gpa = value,
        FormField::SubGpa => draft.education.sub_gpa = value,
    }
}
