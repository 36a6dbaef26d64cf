//! Review modal for a single application.
//!
//! Shows the applicant profile, the attached documents and the decision
//! panel. Switches to inline edit mode when the staff member starts an
//! edit, replacing the decision panel with save/cancel actions.

use common::files::{self, FileSlot};
use common::model::application::{ApplicationRecord, ExtraFile, Level, TrackKind};
use common::model::status::ApplicationStatus;
use common::tracks;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::admin::{AdminDashboard, EditField, Msg};

pub fn detail_dialog(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let Some(record) = &dash.selected else {
        return html! {};
    };
    html! {
        <div class="modal-backdrop">
            <div class="review-modal">
                { build_head(dash, record, link) }
                <div class="review-grid">
                    <div class="review-side">
                        { build_photo(record, link) }
                        { build_documents(record, link) }
                    </div>
                    <div class="review-main">
                        { build_profile(dash, record, link) }
                        { build_plan(dash, record, link) }
                        {
                            if dash.edit.is_some() {
                                build_edit_actions(link)
                            } else {
                                build_decide_panel(dash, link)
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn build_head(dash: &AdminDashboard, record: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    let editing = dash.edit.is_some();
    let chip = match record.level {
        Level::M1 => "level-chip level-chip-m1",
        Level::M4 => "level-chip level-chip-m4",
    };
    let delete = {
        let id = record.id.clone();
        link.callback(move |_| Msg::Delete(id.clone()))
    };
    html! {
        <div class="review-head">
            <div class="review-head-info">
                <span class={chip}>{ record.level.wire_name() }</span>
                <div class="review-eyebrow">{ "APPLICATION REVIEW" }</div>
                <h2 class="review-title">
                    { if editing { "แก้ไขข้อมูลนักเรียน" } else { "รายละเอียดผู้สมัครเรียน" } }
                </h2>
                <div class="review-meta">
                    <span class="review-meta-id">{ format!("รหัสใบสมัคร: {}", record.id) }</span>
                    { format!(" | วันที่สมัคร: {}", common::helpers::thai_long_date(&record.submit_date)) }
                </div>
            </div>
            <div class="review-head-actions">
                if !editing {
                    <button class="icon-btn icon-btn-print" title="พิมพ์ใบสมัคร"
                        onclick={link.callback(|_| Msg::Print)}>{ "🖨" }</button>
                    <button class="icon-btn icon-btn-edit" title="แก้ไขข้อมูล"
                        onclick={link.callback(|_| Msg::StartEdit)}>{ "✏️" }</button>
                    <button class="icon-btn icon-btn-delete" title="ลบใบสมัคร"
                        onclick={delete}>{ "🗑" }</button>
                }
                <button class="icon-btn" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>
            </div>
        </div>
    }
}

fn build_photo(record: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    let stored = FileSlot::Photo.get(&record.files);
    match stored.and_then(files::display_image_url) {
        Some(url) => {
            let src = url.clone();
            let show = link.callback(move |_| Msg::ShowImage {
                url: url.clone(),
                title: FileSlot::Photo.thai_label().to_string(),
            });
            html! {
                <div class="review-photo-wrap">
                    <img class="review-photo" src={src} alt="student" onclick={show} />
                    <div class="photo-hint">{ "คลิกเพื่อขยาย" }</div>
                </div>
            }
        }
        None => {
            let label = if stored == Some(files::ATTACHMENT_SENTINEL) {
                "รูปถ่าย (Cloud)"
            } else {
                "ไม่มีข้อมูลรูปถ่าย"
            };
            html! { <div class="review-photo-empty">{ label }</div> }
        }
    }
}

fn build_documents(record: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="review-docs">
            <div class="review-docs-title">{ "เอกสารประกอบการสมัคร" }</div>
            { build_doc_row(record, link, FileSlot::Transcript) }
            { build_doc_row(record, link, FileSlot::TranscriptBack) }
            { build_doc_row(record, link, FileSlot::IdCard) }
            { build_doc_row(record, link, FileSlot::HouseReg) }
            if record.files.payment_slip.is_some() {
                { build_doc_row(record, link, FileSlot::PaymentSlip) }
            }
            { for record.files.additional.iter().map(build_extra_row) }
        </div>
    }
}

fn build_doc_row(record: &ApplicationRecord, link: &Scope<AdminDashboard>, slot: FileSlot) -> Html {
    let title = slot.thai_label();
    let value = match slot.get(&record.files) {
        Some(v) if !v.is_empty() && v != files::ATTACHMENT_SENTINEL => v.to_string(),
        _ => {
            return html! {
                <div class="doc-row doc-row-empty">{ format!("{title} (ว่าง)") }</div>
            }
        }
    };
    let action = match files::display_image_url(&value) {
        Some(url) => {
            let show = link.callback(move |_| Msg::ShowImage {
                url: url.clone(),
                title: title.to_string(),
            });
            html! { <button class="btn btn-dark btn-small" onclick={show}>{ "ดูรูป" }</button> }
        }
        None => html! {
            <a class="btn btn-blue btn-small" href={value} target="_blank" rel="noreferrer">
                { "เปิดไฟล์" }
            </a>
        },
    };
    html! {
        <div class="doc-row">
            <span class="doc-row-title">{ title }</span>
            { action }
        </div>
    }
}

/// Extra files only ever arrive from the sheet, so they are always links.
fn build_extra_row(extra: &ExtraFile) -> Html {
    html! {
        <div class="doc-row">
            <span class="doc-row-title">{ &extra.name }</span>
            <a class="btn btn-blue btn-small" href={extra.url.clone()} target="_blank" rel="noreferrer">
                { "เปิดไฟล์" }
            </a>
        </div>
    }
}

fn build_profile(dash: &AdminDashboard, record: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="review-box">
            <div class="review-field">
                <span class="review-label">{ "ชื่อ-นามสกุล" }</span>
                {
                    if let Some(draft) = &dash.edit {
                        html! {
                            <div class="edit-name-row">
                                <input class="text-input edit-title" value={draft.title.clone()}
                                    oninput={edit_cb(link, EditField::Title)} />
                                <input class="text-input" value={draft.first_name.clone()}
                                    oninput={edit_cb(link, EditField::FirstName)} />
                                <input class="text-input" value={draft.last_name.clone()}
                                    oninput={edit_cb(link, EditField::LastName)} />
                            </div>
                        }
                    } else {
                        html! { <span class="review-big">{ record.display_name() }</span> }
                    }
                }
            </div>
            <div class="review-field">
                <span class="review-label">{ "เลขประจำตัวประชาชน" }</span>
                <span class="review-text">{ &record.national_id }</span>
            </div>
            <div class="review-field">
                <span class="review-label">{ "โรงเรียนเดิม" }</span>
                <span class="review-text">{ &record.education.school_name }</span>
            </div>
            <div class="review-field">
                <span class="review-label">{ "เบอร์โทรศัพท์" }</span>
                <span class="review-text review-phone">{ &record.phone }</span>
            </div>
        </div>
    }
}

fn build_plan(dash: &AdminDashboard, record: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="review-box review-plan">
            <div class="plan-eyebrow">{ "ความประสงค์และแผนการเรียน" }</div>
            {
                if let Some(draft) = &dash.edit {
                    build_plan_editor(draft, link)
                } else {
                    build_plan_summary(record)
                }
            }
        </div>
    }
}

fn build_plan_summary(record: &ApplicationRecord) -> Html {
    html! {
        <>
            <div class="plan-track">{ &record.track }</div>
            <div class="plan-scores">
                <div class="plan-score">
                    <span class="plan-score-label">{ "GPAX (รวม)" }</span>
                    <span class="plan-score-value">{ &record.education.gpa }</span>
                </div>
                if !record.education.sub_gpa_subject.is_empty() {
                    <div class="plan-score plan-score-orange">
                        <span class="plan-score-label">{ &record.education.sub_gpa_subject }</span>
                        <span class="plan-score-value">{ &record.education.sub_gpa }</span>
                    </div>
                }
            </div>
        </>
    }
}

fn build_plan_editor(draft: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Edit(EditField::Track, select.value())
    });
    html! {
        <div class="plan-editor">
            <select class="select-input" {onchange}>
                { for all_tracks(draft.level).into_iter().map(|track| html! {
                    <option value={track.name} selected={draft.track == track.name}>
                        { track.name }
                    </option>
                }) }
            </select>
            <div class="field">
                <label class="field-label">{ "GPAX รวม" }</label>
                <input class="text-input" type="number" step="0.01" min="0" max="4"
                    value={draft.education.gpa.clone()} oninput={edit_cb(link, EditField::Gpa)} />
            </div>
            if !draft.education.sub_gpa_subject.is_empty() {
                <div class="field">
                    <label class="field-label">{ &draft.education.sub_gpa_subject }</label>
                    <input class="text-input" type="number" step="0.01" min="0" max="4"
                        value={draft.education.sub_gpa.clone()}
                        oninput={edit_cb(link, EditField::SubGpa)} />
                </div>
            }
        </div>
    }
}

/// Every plan for the level, special first, for the edit-mode select.
fn all_tracks(level: Level) -> Vec<&'static tracks::Track> {
    [TrackKind::Special, TrackKind::Regular]
        .into_iter()
        .flat_map(|kind| tracks::tracks_for(level, kind))
        .collect()
}

fn build_decide_panel(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let note = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetNote(area.value())
    });
    html! {
        <div class="decide-panel">
            <div class="decide-title">{ "พิจารณาและบันทึกผล" }</div>
            <label class="field-label">
                { "บันทึกเพิ่มเติมถึงนักเรียน (ระบุเหตุผลหากต้องการให้แก้ไข)" }
            </label>
            <textarea class="text-input note-input"
                placeholder="ระบุเหตุผลในการแจ้งแก้ไข หรือข้อความแนะนำเพิ่มเติม..."
                value={dash.note.clone()} oninput={note} />
            <div class="decide-actions">
                <button class="btn btn-approve" disabled={dash.loading}
                    onclick={link.callback(|_| Msg::Decide(ApplicationStatus::Approved))}>
                    { if dash.loading { "กำลังบันทึก..." } else { "อนุมัติการสมัคร" } }
                </button>
                <button class="btn btn-reject" disabled={dash.loading}
                    onclick={link.callback(|_| Msg::Decide(ApplicationStatus::Rejected))}>
                    { if dash.loading { "กำลังบันทึก..." } else { "แจ้งให้แก้ไขข้อมูล" } }
                </button>
            </div>
        </div>
    }
}

fn build_edit_actions(link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="edit-actions">
            <button class="btn btn-ghost" onclick={link.callback(|_| Msg::CancelEdit)}>
                { "ยกเลิกการแก้ไข" }
            </button>
            <button class="btn btn-blue" onclick={link.callback(|_| Msg::SaveEdit)}>
                { "บันทึกข้อมูลที่แก้ไข" }
            </button>
        </div>
    }
}

fn edit_cb(link: &Scope<AdminDashboard>, field: EditField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(field, input.value())
    })
}
