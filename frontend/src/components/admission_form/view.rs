//! View rendering for the admission form.
//!
//! The form mirrors the paper sheet handed out at the school: a colored
//! banner for the level, the in-area/out-of-area choice, then numbered
//! sections for personal data, address, education and study plan, and the
//! attached documents. Submission happens through a real `<form>` so the
//! browser enforces the plain required fields before any logic runs.

use common::files::FileSlot;
use common::model::application::{Level, ServiceArea, StudentType, TrackKind};
use common::model::settings::RequirementMode;
use common::tracks;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{FormField, Msg};
use super::state::AdmissionForm;
use crate::helpers;

/// Main view function for the admission form.
pub fn view(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let onsubmit = ctx.link().callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    html! {
        <div class="admission-form">
            { build_submitting_overlay(form) }
            { build_success_overlay(form) }
            <form {onsubmit}>
                { build_error_banner(form) }
                { build_banner(form.draft.level) }
                { build_service_area(form, ctx) }
                { build_personal_section(form, ctx) }
                { build_address_section(form, ctx) }
                { build_education_section(form, ctx) }
                { build_files_section(form, ctx) }
                { build_actions(form, ctx) }
            </form>
        </div>
    }
}

fn build_submitting_overlay(form: &AdmissionForm) -> Html {
    if !form.submitting {
        return html! {};
    }
    html! {
        <div class="overlay">
            <div class="overlay-card">
                <div class="spinner-big"></div>
                <h3 class="overlay-title">{ "กำลังส่งข้อมูลไปยัง Google Sheet..." }</h3>
                <p class="overlay-note">
                    { "ระบบกำลังอัปโหลดรูปภาพและบันทึกข้อมูล" }
                    <br />
                    { "กรุณารอสักครู่ (อาจใช้เวลา 10-20 วินาที)" }
                </p>
            </div>
        </div>
    }
}

fn build_success_overlay(form: &AdmissionForm) -> Html {
    if !form.success {
        return html! {};
    }
    html! {
        <div class="overlay overlay-success">
            <div class="overlay-card">
                <div class="overlay-check">{ "✓" }</div>
                <h3 class="overlay-title">{ "ส่งใบสมัครสำเร็จ!" }</h3>
                <p class="overlay-note">{ "ข้อมูลถูกบันทึกลงฐานข้อมูลโรงเรียนเรียบร้อยแล้ว" }</p>
                <p class="overlay-wait">{ "กำลังพาคุณไปดูใบสมัครฉบับเต็ม..." }</p>
            </div>
        </div>
    }
}

fn build_error_banner(form: &AdmissionForm) -> Html {
    match &form.error {
        Some(message) => html! { <div class="error-banner">{ message.clone() }</div> },
        None => html! {},
    }
}

fn build_banner(level: Level) -> Html {
    let accent = match level {
        Level::M1 => "form-banner-m1",
        Level::M4 => "form-banner-m4",
    };
    html! {
        <div class={classes!("form-banner", accent)}>
            <h2>{ format!("ใบสมัครเข้าเรียน ชั้น{}", level.thai_name()) }</h2>
            <p>{ format!("โรงเรียนท่าบ่อ จังหวัดหนองคาย ปีการศึกษา {}", helpers::buddhist_year()) }</p>
        </div>
    }
}

fn build_service_area(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    html! {
        <div class="radio-row">
            { build_area_option(form, link, ServiceArea::Inside) }
            { build_area_option(form, link, ServiceArea::Outside) }
        </div>
    }
}

fn build_area_option(form: &AdmissionForm, link: &Scope<AdmissionForm>, area: ServiceArea) -> Html {
    let active = form.draft.service_area == area;
    html! {
        <button
            type="button"
            class={classes!("radio-card", active.then_some("active"))}
            onclick={link.callback(move |_| Msg::SetServiceArea(area))}
        >
            { format!("นักเรียน{}", area.thai_name()) }
        </button>
    }
}

fn build_personal_section(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    let titles: [&'static str; 2] = match form.draft.level {
        Level::M1 => ["เด็กชาย", "เด็กหญิง"],
        Level::M4 => ["นาย", "นางสาว"],
    };
    html! {
        <div class="card card-pad form-section">
            { build_section_title("1", "ข้อมูลส่วนตัวของผู้สมัคร") }
            <div class="personal-grid">
                { build_photo_box(form, link) }
                <div class="personal-fields">
                    <div class="grid-2">
                        <div class="field">
                            <label class="field-label">{ "เลขประจำตัวประชาชน (13 หลัก)" }</label>
                            <input class="text-input digit-input" required=true maxlength="13"
                                placeholder="ใส่เฉพาะตัวเลข"
                                value={form.draft.national_id.clone()}
                                oninput={input_cb(link, FormField::NationalId)} />
                        </div>
                        <div class="field">
                            <label class="field-label">{ "วัน/เดือน/ปีเกิด" }</label>
                            <input class="text-input" required=true type="date"
                                value={form.draft.birth_date.clone()}
                                oninput={input_cb(link, FormField::BirthDate)} />
                        </div>
                    </div>
                    <div class="name-grid">
                        <div class="field">
                            <label class="field-label">{ "คำนำหน้า" }</label>
                            <select class="select-input" onchange={select_cb(link, FormField::Title)}>
                                { for titles.iter().map(|title| html! {
                                    <option value={*title} selected={form.draft.title == *title}>
                                        { *title }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label class="field-label">{ "ชื่อ" }</label>
                            <input class="text-input" required=true
                                value={form.draft.first_name.clone()}
                                oninput={input_cb(link, FormField::FirstName)} />
                        </div>
                        <div class="field">
                            <label class="field-label">{ "นามสกุล" }</label>
                            <input class="text-input" required=true
                                value={form.draft.last_name.clone()}
                                oninput={input_cb(link, FormField::LastName)} />
                        </div>
                    </div>
                </div>
            </div>
            <div class="grid-2">
                <div class="field">
                    <label class="field-label">{ "ชื่อ-นามสกุล บิดา" }</label>
                    <input class="text-input" required=true
                        value={form.draft.father_name.clone()}
                        oninput={input_cb(link, FormField::FatherName)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "ชื่อ-นามสกุล มารดา" }</label>
                    <input class="text-input" required=true
                        value={form.draft.mother_name.clone()}
                        oninput={input_cb(link, FormField::MotherName)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "ชื่อ-นามสกุล ผู้ปกครอง (ที่ติดต่อได้)" }</label>
                    <input class="text-input" required=true
                        value={form.draft.guardian_name.clone()}
                        oninput={input_cb(link, FormField::GuardianName)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "เบอร์โทรศัพท์ (มือถือ)" }</label>
                    <input class="text-input" required=true placeholder="0XX-XXX-XXXX"
                        value={form.draft.phone.clone()}
                        oninput={input_cb(link, FormField::Phone)} />
                </div>
            </div>
        </div>
    }
}

fn build_photo_box(form: &AdmissionForm, link: &Scope<AdmissionForm>) -> Html {
    let photo = form.draft.files.photo.clone();
    html! {
        <div class={classes!("photo-box", photo.is_some().then_some("photo-box-filled"))}>
            {
                match photo {
                    Some(src) => html! { <img class="photo-preview" src={src} alt="รูปถ่ายผู้สมัคร" /> },
                    None => html! { <span class="photo-hint">{ "ติดรูปถ่าย 1.5 นิ้ว" }</span> },
                }
            }
            <input type="file" accept="image/*" onchange={file_cb(link, FileSlot::Photo)} />
        </div>
    }
}

fn build_address_section(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    let address = &form.draft.address;
    let resolved = if address.sub_district.is_empty() {
        String::new()
    } else {
        format!(
            "ต.{} อ.{} จ.{} {}",
            address.sub_district, address.district, address.province, address.zip_code
        )
    };
    let on_query = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::AddressQuery(input.value())
    });
    html! {
        <div class="card card-pad form-section">
            { build_section_title("2", "ข้อมูลที่อยู่ปัจจุบัน") }
            <div class="address-grid">
                <div class="field">
                    <label class="field-label">{ "บ้านเลขที่" }</label>
                    <input class="text-input" required=true
                        value={address.house_no.clone()}
                        oninput={input_cb(link, FormField::HouseNo)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "หมู่บ้าน" }</label>
                    <input class="text-input"
                        value={address.village.clone()}
                        oninput={input_cb(link, FormField::Village)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "หมู่ที่" }</label>
                    <input class="text-input"
                        value={address.moo.clone()}
                        oninput={input_cb(link, FormField::Moo)} />
                </div>
                <div class="field field-suggest">
                    <label class="field-label">{ "ตำบล/อำเภอ (พิมพ์เพื่อค้นหา)" }</label>
                    <input class="text-input" placeholder="ค้นหา ตำบล/อำเภอ" oninput={on_query} />
                    { build_suggestions(form, link) }
                </div>
            </div>
            <input class="text-input address-resolved" readonly=true value={resolved}
                placeholder="ระบบจะกรอกตำบล/อำเภอ/จังหวัดให้อัตโนมัติ" />
        </div>
    }
}

fn build_suggestions(form: &AdmissionForm, link: &Scope<AdmissionForm>) -> Html {
    if form.address_hits.is_empty() {
        return html! {};
    }
    html! {
        <div class="suggest-list">
            { for form.address_hits.iter().map(|row| {
                let pick = *row;
                html! {
                    <div class="suggest-item" onclick={link.callback(move |_| Msg::PickAddress(pick))}>
                        { format!("ต.{} อ.{} จ.{}", row.subdistrict, row.district, row.province) }
                    </div>
                }
            }) }
        </div>
    }
}

fn build_education_section(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    let settings = &ctx.props().settings;
    let level = form.draft.level;
    html! {
        <div class="card card-pad form-section">
            { build_section_title("3", "การศึกษาและความประสงค์เข้าเรียน") }
            { build_student_type(form, ctx) }
            <div class="grid-2">
                <div class="field">
                    <label class="field-label">{ "โรงเรียนเดิม" }</label>
                    <input class="text-input" required=true list="schools-list"
                        placeholder="ชื่อโรงเรียนเดิม"
                        value={form.draft.education.school_name.clone()}
                        oninput={input_cb(link, FormField::SchoolName)} />
                    <datalist id="schools-list">
                        { for settings.schools_list.iter().map(|name| html! {
                            <option value={name.clone()} />
                        }) }
                    </datalist>
                </div>
                <div class="grid-2">
                    <div class="field">
                        <label class="field-label">{ "อำเภอ (โรงเรียนเดิม)" }</label>
                        <input class="text-input"
                            value={form.draft.education.school_district.clone()}
                            oninput={input_cb(link, FormField::SchoolDistrict)} />
                    </div>
                    <div class="field">
                        <label class="field-label">{ "จังหวัด (โรงเรียนเดิม)" }</label>
                        <input class="text-input"
                            value={form.draft.education.school_province.clone()}
                            oninput={input_cb(link, FormField::SchoolProvince)} />
                    </div>
                </div>
            </div>
            <div class="gpa-box">
                <label class="field-label">{ tracks::gpa_label(level) }</label>
                <input class="text-input gpa-input" required=true type="number" step="0.01"
                    placeholder="0.00"
                    value={form.draft.education.gpa.clone()}
                    oninput={input_cb(link, FormField::Gpa)} />
            </div>
            { build_track_picker(form, ctx) }
        </div>
    }
}

fn build_student_type(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    let (internal_label, external_label) = match form.draft.level {
        Level::M1 => ("กำลังเรียน ชั้น ป.6", "จบชั้น ป.6 แล้ว"),
        Level::M4 => ("นักเรียน รร.เดิม (ท่าบ่อ)", "นักเรียนจาก รร.อื่น"),
    };
    html! {
        <div class="radio-row radio-row-tight">
            { build_type_option(form, link, StudentType::Internal, internal_label) }
            { build_type_option(form, link, StudentType::External, external_label) }
        </div>
    }
}

fn build_type_option(
    form: &AdmissionForm,
    link: &Scope<AdmissionForm>,
    student_type: StudentType,
    label: &str,
) -> Html {
    let active = form.draft.education.student_type == student_type;
    html! {
        <button
            type="button"
            class={classes!("radio-card", active.then_some("active"))}
            onclick={link.callback(move |_| Msg::SetStudentType(student_type))}
        >
            { label }
        </button>
    }
}

fn build_track_picker(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    let level = form.draft.level;
    let kind = form.draft.track_type;
    let list_label = match kind {
        TrackKind::Special => "รายชื่อห้องเรียนพิเศษ",
        TrackKind::Regular => "รายชื่อห้องเรียนปกติ",
    };
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetTrack(select.value())
    });
    html! {
        <div class="track-picker">
            { build_section_title("3.1", "เลือกแผนการเรียน (Study Plan)") }
            <div class="grid-2">
                { build_kind_button(form, link, TrackKind::Special, "💎", "Special Program") }
                { build_kind_button(form, link, TrackKind::Regular, "🎓", "Regular Program") }
            </div>
            <div class="field">
                <label class="field-label">{ list_label }</label>
                <select class="select-input" {onchange}>
                    <option value="" selected={form.draft.track.is_empty()}>
                        { "-- กรุณาเลือกแผนการเรียน --" }
                    </option>
                    { for tracks::tracks_for(level, kind).iter().map(|track| html! {
                        <option value={track.name} selected={form.draft.track == track.name}>
                            { track.name }
                        </option>
                    }) }
                </select>
            </div>
            { build_sub_gpa(form, link) }
        </div>
    }
}

fn build_kind_button(
    form: &AdmissionForm,
    link: &Scope<AdmissionForm>,
    kind: TrackKind,
    icon: &str,
    subtitle: &str,
) -> Html {
    let active = form.draft.track_type == kind;
    html! {
        <button
            type="button"
            class={classes!("kind-btn", active.then_some("active"))}
            onclick={link.callback(move |_| Msg::SetTrackKind(kind))}
        >
            <span class="kind-btn-icon">{ icon }</span>
            <span class="kind-btn-name">{ kind.thai_name() }</span>
            <span class="kind-btn-sub">{ subtitle }</span>
        </button>
    }
}

fn build_sub_gpa(form: &AdmissionForm, link: &Scope<AdmissionForm>) -> Html {
    let subject = &form.draft.education.sub_gpa_subject;
    if subject.is_empty() {
        return html! {};
    }
    html! {
        <div class="sub-gpa-box">
            <span class="sub-gpa-head">{ "เกณฑ์คะแนนสะสมที่ใช้พิจารณา" }</span>
            <label class="field-label">{ subject.clone() }</label>
            <input class="text-input gpa-input" required=true type="number" step="0.01"
                placeholder="0.00"
                value={form.draft.education.sub_gpa.clone()}
                oninput={input_cb(link, FormField::SubGpa)} />
        </div>
    }
}

fn build_files_section(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let link = ctx.link();
    let mut slots: Vec<(FileSlot, &'static str)> = vec![
        (FileSlot::Photo, "รูปถ่ายชุดนักเรียน"),
        (FileSlot::HouseReg, "สำเนาทะเบียนบ้าน"),
        (FileSlot::IdCard, "สำเนาบัตรประชาชน"),
        (FileSlot::Transcript, "ใบ ปพ.1 (ด้านหน้า)"),
        (FileSlot::TranscriptBack, "ใบ ปพ.1 (ด้านหลัง)"),
    ];
    if ctx.props().settings.payment_mode != RequirementMode::Disabled {
        slots.push((FileSlot::PaymentSlip, "หลักฐานการชำระเงิน"));
    }
    html! {
        <div class="card card-pad form-section">
            { build_section_title("4", "หลักฐานที่แนบมาพร้อมใบสมัคร") }
            <div class="upload-grid">
                { for slots.into_iter().map(|(slot, label)| build_file_slot(form, link, slot, label)) }
            </div>
        </div>
    }
}

fn build_file_slot(
    form: &AdmissionForm,
    link: &Scope<AdmissionForm>,
    slot: FileSlot,
    label: &str,
) -> Html {
    let filled = slot.get(&form.draft.files).is_some();
    html! {
        <div class={classes!("upload-box", filled.then_some("upload-box-done"))}>
            <span class="upload-label">{ label }</span>
            <input type="file" accept="image/*" onchange={file_cb(link, slot)} />
            <span class="upload-state">
                { if filled { "✓ เรียบร้อย" } else { "+ เลือกไฟล์" } }
            </span>
        </div>
    }
}

fn build_actions(form: &AdmissionForm, ctx: &Context<AdmissionForm>) -> Html {
    let accent = match form.draft.level {
        Level::M1 => "btn-blue",
        Level::M4 => "btn-orange",
    };
    let label = if form.submitting {
        "กำลังส่งข้อมูล..."
    } else {
        "ยืนยันการส่งใบสมัคร"
    };
    html! {
        <div class="form-actions">
            <button type="button" class="btn btn-ghost" onclick={ctx.props().on_cancel.clone()}>
                { "ย้อนกลับ" }
            </button>
            <button type="submit" class={classes!("btn", "btn-big", accent)}
                disabled={form.submitting || form.success}>
                { label }
            </button>
        </div>
    }
}

fn build_section_title(number: &str, text: &str) -> Html {
    html! {
        <h3 class="form-section-title">
            <span class="form-section-badge">{ number }</span>
            { text }
        </h3>
    }
}

fn input_cb(link: &Scope<AdmissionForm>, field: FormField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Field(field, input.value())
    })
}

fn select_cb(link: &Scope<AdmissionForm>, field: FormField) -> Callback<Event> {
    link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Field(field, select.value())
    })
}

fn file_cb(link: &Scope<AdmissionForm>, slot: FileSlot) -> Callback<Event> {
    link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| Msg::FilePicked(slot, file))
    })
}
