//! View rendering for the staff dashboard.
//!
//! Renders one of three surfaces: the login card, the dashboard itself
//! (list and settings tabs plus the review and viewer dialogs), or the
//! print sheet when a record is being printed.

use common::model::application::{ApplicationRecord, Level, TrackKind};
use common::model::settings::RequirementMode;
use common::model::status::ApplicationStatus;
use common::{stats, tracks};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::admin::dialogs::detail::detail_dialog;
use crate::components::admin::dialogs::viewer::viewer_dialog;
use crate::components::print_sheet::PrintSheet;
use crate::helpers;

use super::messages::{Msg, SettingsField};
use super::state::{AdminDashboard, Tab};

const MODES: [(&str, &str, RequirementMode); 3] = [
    ("required", "บังคับแนบ", RequirementMode::Required),
    ("optional", "ไม่บังคับ", RequirementMode::Optional),
    ("disabled", "ปิดรับเอกสารนี้", RequirementMode::Disabled),
];

const STATUSES: [ApplicationStatus; 3] = [
    ApplicationStatus::Pending,
    ApplicationStatus::Approved,
    ApplicationStatus::Rejected,
];

/// Main view function for the staff dashboard.
pub fn view(dash: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    if let Some(record) = &dash.printing {
        return html! {
            <PrintSheet
                record={(**record).clone()}
                on_back={ctx.link().callback(|_| Msg::ClosePrint)}
            />
        };
    }
    if !dash.logged_in {
        return build_login(dash, ctx);
    }
    let link = ctx.link();
    html! {
        <div class="admin-dash">
            { build_saved_overlay(dash) }
            { build_loading_overlay(dash) }
            { viewer_dialog(dash, link) }
            { build_tab_bar(dash, link) }
            {
                match dash.tab {
                    Tab::Applications => build_list_tab(dash, link),
                    Tab::Settings => build_settings_tab(dash, link),
                }
            }
            { detail_dialog(dash, link) }
        </div>
    }
}

fn build_login(dash: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let onsubmit = ctx.link().callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Login
    });
    html! {
        <div class="card login-card">
            <div class="login-badge">{ "🔐" }</div>
            <h2 class="login-title">{ "Staff Control Center" }</h2>
            <form {onsubmit}>
                <input class="text-input" placeholder="Username" ref={dash.user_ref.clone()} />
                <input class="text-input" type="password" placeholder="Password"
                    ref={dash.pass_ref.clone()} />
                <button type="submit" class="btn btn-blue btn-big">{ "Authenticate" }</button>
                <button type="button" class="btn btn-ghost" onclick={ctx.props().on_back.clone()}>
                    { "กลับหน้าหลัก" }
                </button>
            </form>
        </div>
    }
}

fn build_saved_overlay(dash: &AdminDashboard) -> Html {
    if !dash.saved {
        return html! {};
    }
    html! {
        <div class="overlay overlay-saved">
            <div class="overlay-check">{ "✓" }</div>
            <h2 class="overlay-title">{ "บันทึกข้อมูลเรียบร้อยแล้ว" }</h2>
            <div class="overlay-wait">{ "กำลังกลับสู่หน้ารายการ..." }</div>
        </div>
    }
}

fn build_loading_overlay(dash: &AdminDashboard) -> Html {
    if !dash.loading || dash.saved {
        return html! {};
    }
    html! {
        <div class="overlay overlay-light">
            <div class="overlay-card">
                <div class="spinner-big"></div>
                <p class="overlay-note">{ "กำลังบันทึกสถานะไปที่ Google Sheet..." }</p>
            </div>
        </div>
    }
}

fn build_tab_bar(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="admin-bar">
            <div class="tab-group">
                { build_tab_button(dash, link, Tab::Applications, "ใบสมัครล่าสุด") }
                { build_tab_button(dash, link, Tab::Settings, "ตั้งค่าระบบ") }
            </div>
            <button class="btn btn-danger-soft" onclick={link.callback(|_| Msg::Logout)}>
                { "ออกจากระบบ" }
            </button>
        </div>
    }
}

fn build_tab_button(
    dash: &AdminDashboard,
    link: &Scope<AdminDashboard>,
    tab: Tab,
    label: &str,
) -> Html {
    html! {
        <button
            class={classes!("tab-btn", (dash.tab == tab).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetTab(tab))}
        >
            { label }
        </button>
    }
}

fn build_list_tab(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    html! {
        <div class="card admin-list">
            { build_summary_cards(dash) }
            { build_toolbar(dash, link) }
            <div class="table-wrap">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "ข้อมูลผู้สมัคร" }</th>
                            <th>{ "แผนการเรียน" }</th>
                            <th>{ "GPAX" }</th>
                            <th>{ "สถานะ" }</th>
                            <th class="cell-right">{ "การจัดการ" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { build_rows(dash, link) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Unfiltered totals over the whole snapshot; the filters below only
/// narrow the table.
fn build_summary_cards(dash: &AdminDashboard) -> Html {
    let counts = stats::status_counts(&dash.records);
    let cards = [
        ("summary-card", "ใบสมัครทั้งหมด", counts.total),
        ("summary-card summary-card-pending", "รอตรวจสอบ", counts.pending),
        ("summary-card summary-card-approved", "อนุมัติแล้ว", counts.approved),
        ("summary-card summary-card-rejected", "แจ้งให้แก้ไข", counts.rejected),
    ];
    html! {
        <div class="summary-row">
            { for cards.into_iter().map(|(class, label, count)| html! {
                <div class={class}>
                    <div class="summary-count">{ count }</div>
                    <div class="summary-label">{ label }</div>
                </div>
            }) }
        </div>
    }
}

fn build_toolbar(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });
    let level = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetLevelFilter(select.value())
    });
    let status = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetStatusFilter(select.value())
    });
    let track = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetTrackFilter(select.value())
    });
    let date = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetDateFilter(input.value())
    });
    html! {
        <div class="admin-toolbar">
            <div class="field toolbar-search">
                <label class="field-label">{ "ค้นหาข้อมูล" }</label>
                <input class="text-input" placeholder="ชื่อ / เลขบัตรประชาชน / รหัส ID..."
                    value={dash.filter.search.clone()} oninput={search} />
            </div>
            <div class="field">
                <label class="field-label">{ "ระดับชั้น" }</label>
                <select class="select-input" onchange={level}>
                    <option value="all" selected={dash.filter.level.is_none()}>
                        { "ทุกระดับชั้น" }
                    </option>
                    { for [Level::M1, Level::M4].into_iter().map(|lv| html! {
                        <option value={lv.wire_name()} selected={dash.filter.level == Some(lv)}>
                            { lv.thai_name() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label class="field-label">{ "สถานะ" }</label>
                <select class="select-input" onchange={status}>
                    <option value="all" selected={dash.filter.status.is_none()}>
                        { "ทุกสถานะ" }
                    </option>
                    { for STATUSES.into_iter().map(|st| html! {
                        <option value={st.wire_name()} selected={dash.filter.status == Some(st)}>
                            { st.wire_name() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label class="field-label">{ "วันที่สมัคร" }</label>
                <input class="text-input" type="date"
                    value={dash.filter.date.clone().unwrap_or_default()} oninput={date} />
            </div>
            <div class="field toolbar-track">
                <label class="field-label">{ "แผนการเรียน" }</label>
                <select class="select-input" onchange={track}>
                    <option value="all" selected={dash.filter.track.is_none()}>
                        { "ทุกแผนการเรียน" }
                    </option>
                    { for filter_track_names(dash).into_iter().map(|name| html! {
                        <option value={name} selected={dash.filter.track.as_deref() == Some(name)}>
                            { name }
                        </option>
                    }) }
                </select>
            </div>
            <button class="btn btn-dark" onclick={link.callback(|_| Msg::Refresh)}
                disabled={dash.loading}>
                { if dash.loading { "กำลังโหลด..." } else { "Refresh Data" } }
            </button>
        </div>
    }
}

/// Plan names offered by the track filter, scoped to the level filter.
fn filter_track_names(dash: &AdminDashboard) -> Vec<&'static str> {
    let levels: &[Level] = match dash.filter.level {
        Some(Level::M1) => &[Level::M1],
        Some(Level::M4) => &[Level::M4],
        None => &[Level::M1, Level::M4],
    };
    let mut names = Vec::new();
    for level in levels {
        for kind in [TrackKind::Special, TrackKind::Regular] {
            for track in tracks::tracks_for(*level, kind) {
                names.push(track.name);
            }
        }
    }
    names
}

fn build_rows(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let mut rows = dash.filter.apply(&dash.records);
    rows.sort_by(|a, b| b.id.cmp(&a.id));
    if rows.is_empty() {
        return html! {
            <tr>
                <td colspan="6" class="table-empty">{ "ไม่พบข้อมูลใบสมัคร" }</td>
            </tr>
        };
    }
    html! { for rows.into_iter().map(|record| build_row(record, link)) }
}

fn build_row(record: &ApplicationRecord, link: &Scope<AdminDashboard>) -> Html {
    let open = {
        let boxed = Box::new(record.clone());
        link.callback(move |_| Msg::Open(boxed.clone()))
    };
    html! {
        <tr>
            <td class="cell-id">{ &record.id }</td>
            <td>
                <div class="cell-name">{ record.display_name() }</div>
                <div class="cell-sub">{ &record.national_id }</div>
                <div class="cell-faint">{ helpers::thai_date(&record.submit_date) }</div>
            </td>
            <td><div class="cell-track">{ &record.track }</div></td>
            <td>
                <div class="cell-gpa">{ &record.education.gpa }</div>
                if !record.education.sub_gpa.is_empty() {
                    <div class="cell-subgpa">{ format!("SubGPA: {}", record.education.sub_gpa) }</div>
                }
            </td>
            <td>{ build_status_chip(record.status) }</td>
            <td class="cell-right">
                <button class="btn btn-dark btn-small" onclick={open}>{ "ตรวจสอบ" }</button>
            </td>
        </tr>
    }
}

fn build_status_chip(status: ApplicationStatus) -> Html {
    let class = match status {
        ApplicationStatus::Pending => "chip chip-pending",
        ApplicationStatus::Approved => "chip chip-approved",
        ApplicationStatus::Rejected => "chip chip-rejected",
    };
    html! { <span class={class}>{ status.wire_name() }</span> }
}

fn build_settings_tab(dash: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let settings = &dash.settings;
    html! {
        <div class="card card-pad admin-settings">
            <h3 class="settings-title">{ "ตั้งค่าสถานศึกษาและระบบ" }</h3>
            <div class="grid-2">
                <div class="field">
                    <label class="field-label">{ "ชื่อโรงเรียน (ภาษาไทย)" }</label>
                    <input class="text-input" placeholder="ชื่อโรงเรียน"
                        value={settings.school_name.clone()}
                        oninput={setting_cb(link, SettingsField::SchoolName)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "สถานะระบบรับสมัคร" }</label>
                    <button
                        class={classes!(
                            "btn",
                            "toggle-open",
                            if settings.is_open { "toggle-on" } else { "toggle-off" },
                        )}
                        onclick={link.callback(|_| Msg::ToggleOpen)}
                    >
                        {
                            if settings.is_open {
                                "● เปิดรับสมัครออนไลน์"
                            } else {
                                "○ ปิดรับสมัครชั่วคราว"
                            }
                        }
                    </button>
                </div>
                <div class="field">
                    <label class="field-label">{ "การแนบรูปถ่ายนักเรียน" }</label>
                    { build_mode_select(link, settings.photo_mode, Msg::SetPhotoMode) }
                </div>
                <div class="field">
                    <label class="field-label">{ "การแนบหลักฐานการชำระเงิน" }</label>
                    { build_mode_select(link, settings.payment_mode, Msg::SetPaymentMode) }
                </div>
                <div class="field">
                    <label class="field-label">{ "ชื่อผู้ใช้เจ้าหน้าที่ (Username)" }</label>
                    <input class="text-input"
                        value={settings.admin_user.clone()}
                        oninput={setting_cb(link, SettingsField::AdminUser)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "ตั้งรหัสผ่านใหม่ (เว้นว่างหากไม่เปลี่ยน)" }</label>
                    <input class="text-input" type="password"
                        value={dash.new_password.clone()}
                        oninput={setting_cb(link, SettingsField::NewPassword)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "LINE ติดต่อฝ่ายรับสมัคร" }</label>
                    <input class="text-input"
                        value={settings.contact_line.clone()}
                        oninput={setting_cb(link, SettingsField::ContactLine)} />
                </div>
                <div class="field">
                    <label class="field-label">{ "เบอร์โทรฝ่ายรับสมัคร" }</label>
                    <input class="text-input"
                        value={settings.contact_phone.clone()}
                        oninput={setting_cb(link, SettingsField::ContactPhone)} />
                </div>
            </div>
            <div class="settings-actions">
                <button class="btn btn-blue btn-big" onclick={link.callback(|_| Msg::SaveSettings)}>
                    { "บันทึกข้อมูลตั้งค่า" }
                </button>
            </div>
        </div>
    }
}

fn build_mode_select(
    link: &Scope<AdminDashboard>,
    current: RequirementMode,
    make: fn(RequirementMode) -> Msg,
) -> Html {
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        make(mode_from_value(&select.value()))
    });
    html! {
        <select class="select-input" {onchange}>
            { for MODES.iter().map(|(value, label, mode)| html! {
                <option value={*value} selected={current == *mode}>{ *label }</option>
            }) }
        </select>
    }
}

fn mode_from_value(raw: &str) -> RequirementMode {
    match raw {
        "required" => RequirementMode::Required,
        "disabled" => RequirementMode::Disabled,
        _ => RequirementMode::Optional,
    }
}

fn setting_cb(link: &Scope<AdminDashboard>, field: SettingsField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Setting(field, input.value())
    })
}
