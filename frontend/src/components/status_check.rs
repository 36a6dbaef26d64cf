//! Public status lookup keyed by the applicant's citizen id.
//!
//! The search always asks the sheet first so a decision made on another
//! machine shows up immediately; the local cache only answers when the
//! sheet cannot.

use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use common::files::{self, FileSlot};
use common::model::application::{ApplicationRecord, FileSlots};
use common::model::status::ApplicationStatus;
use common::validation::normalize_citizen_id;

use crate::services::storage;

/// Shown in the staff-note box when a rejected record carries no note.
const DEFAULT_REJECT_NOTE: &str =
    "เอกสารไม่ถูกต้อง หรือข้อมูลไม่ครบถ้วน กรุณาติดต่อฝ่ายรับสมัครโรงเรียนท่าบ่อเพื่อแก้ไขข้อมูล";

const DOC_CHECKS: [(FileSlot, &str); 5] = [
    (FileSlot::Photo, "รูปถ่าย"),
    (FileSlot::HouseReg, "ทะเบียนบ้าน"),
    (FileSlot::IdCard, "บัตรประชาชน"),
    (FileSlot::Transcript, "ปพ.1 (หน้า)"),
    (FileSlot::TranscriptBack, "ปพ.1 (หลัง)"),
];

#[derive(Properties, PartialEq)]
pub struct StatusCheckProps {
    pub on_back: Callback<MouseEvent>,
}

pub enum Msg {
    SetQuery(String),
    Search,
    Found {
        record: Box<ApplicationRecord>,
        backup: bool,
    },
    NotFound(String),
}

pub struct StatusCheck {
    query: String,
    result: Option<ApplicationRecord>,
    error: Option<String>,
    searching: bool,
}

impl Component for StatusCheck {
    type Message = Msg;
    type Properties = StatusCheckProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            query: String::new(),
            result: None,
            error: None,
            searching: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetQuery(raw) => {
                self.query = raw.chars().filter(char::is_ascii_digit).take(13).collect();
                true
            }
            Msg::Search => {
                if self.query.len() < 13 {
                    self.error = Some("กรุณากรอกเลขบัตรประชาชนให้ครบ 13 หลัก".to_string());
                    return true;
                }
                self.error = None;
                self.result = None;
                self.searching = true;

                let link = ctx.link().clone();
                let needle = self.query.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let message = match storage::fetch_remote_records().await {
                        Some(records) => match find_record(&records, &needle) {
                            Some(found) => Msg::Found {
                                record: Box::new(found),
                                backup: true,
                            },
                            None => match find_record(
                                &storage::local_store().applications(),
                                &needle,
                            ) {
                                Some(found) => Msg::Found {
                                    record: Box::new(found),
                                    backup: false,
                                },
                                None => Msg::NotFound(
                                    "ไม่พบข้อมูลการสมัครในระบบ โปรดตรวจสอบเลขบัตรประชาชนอีกครั้ง"
                                        .to_string(),
                                ),
                            },
                        },
                        None => match find_record(&storage::local_store().applications(), &needle) {
                            Some(found) => Msg::Found {
                                record: Box::new(found),
                                backup: false,
                            },
                            None => Msg::NotFound(
                                "ไม่สามารถเชื่อมต่อระบบออนไลน์ได้ในขณะนี้ และไม่พบข้อมูลในเครื่องนี้"
                                    .to_string(),
                            ),
                        },
                    };
                    link.send_message(message);
                });
                true
            }
            Msg::Found { record, backup } => {
                if backup {
                    // keep a copy reachable next time the network is down
                    let mut store = storage::local_store();
                    storage::note_cache_outcome("status backup", store.save_application(&record));
                }
                self.searching = false;
                self.result = Some(*record);
                true
            }
            Msg::NotFound(message) => {
                self.searching = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="status-check">
                <div class="card">
                    <div class="status-check-head">
                        <h2>{ "ตรวจสอบสถานะการสมัคร" }</h2>
                        <p>{ "ระบุเลขประจำตัวประชาชน 13 หลักของผู้สมัคร" }</p>
                    </div>
                    <div class="card-pad">
                        { self.build_search_row(ctx) }
                        { self.build_error() }
                        { self.build_result() }
                    </div>
                    <div class="status-check-foot">
                        <button class="btn btn-ghost" onclick={ctx.props().on_back.clone()}>
                            { "กลับสู่หน้าหลัก" }
                        </button>
                    </div>
                </div>
                <p class="status-hint muted">
                    { "* หากข้อมูลไม่ถูกต้องหรือมีข้อสงสัย โปรดติดต่อฝ่ายรับสมัคร โรงเรียนท่าบ่อ ในวันและเวลาราชการ" }
                </p>
            </div>
        }
    }
}

impl StatusCheck {
    fn build_search_row(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetQuery(input.value())
        });
        let onkeypress = link
            .batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Search));
        html! {
            <div class="status-search-row">
                <input
                    class="text-input digit-input"
                    type="text"
                    maxlength="13"
                    placeholder="เลขบัตรประชาชน 13 หลัก"
                    value={self.query.clone()}
                    {oninput}
                    {onkeypress}
                />
                <button
                    class="btn btn-blue"
                    disabled={self.searching}
                    onclick={link.callback(|_| Msg::Search)}
                >
                    if self.searching {
                        <span class="spinner"></span>
                        { "กำลังค้นหา..." }
                    } else {
                        { "ค้นหาข้อมูล" }
                    }
                </button>
            </div>
        }
    }

    fn build_error(&self) -> Html {
        match &self.error {
            Some(message) => html! { <div class="error-banner">{ message }</div> },
            None => html! {},
        }
    }

    fn build_result(&self) -> Html {
        let Some(record) = &self.result else {
            return html! {};
        };
        let chip = match record.status {
            ApplicationStatus::Pending => "chip-pending",
            ApplicationStatus::Approved => "chip-approved",
            ApplicationStatus::Rejected => "chip-rejected",
        };
        html! {
            <div class="status-result">
                <div class="status-result-head">
                    <div>
                        <p class="field-label">{ "สถานะปัจจุบันของคุณ" }</p>
                        <span class={classes!("chip", chip)}>{ record.status.wire_name() }</span>
                    </div>
                    <div class="status-result-ref">
                        <p class="field-label">{ "รหัสอ้างอิงใบสมัคร" }</p>
                        <p class="status-ref-number">{ &record.id }</p>
                    </div>
                </div>
                <div class="status-result-body">
                    <p class="field-label">{ "ข้อมูลผู้สมัคร" }</p>
                    <p class="status-name">{ record.display_name() }</p>
                    <span class="level-tag">
                        { format!("ระดับชั้น: {}", record.level.thai_name()) }
                    </span>
                    if !record.track.is_empty() {
                        <p class="status-track muted">
                            { format!("แผนการเรียน: {}", record.track) }
                        </p>
                    }
                    <p class="field-label">{ "การตรวจสอบเอกสารเบื้องต้น" }</p>
                    <div class="doc-grid">
                        { for DOC_CHECKS.iter().map(|(slot, label)| {
                            build_doc_check(*slot, label, &record.files)
                        }) }
                    </div>
                </div>
                { build_status_banner(record) }
            </div>
        }
    }
}

fn build_doc_check(slot: FileSlot, label: &str, slots: &FileSlots) -> Html {
    let attached = files::has_attachment(slot.get(slots));
    html! {
        <div class="doc-check">
            <span class={classes!("doc-check-mark", attached.then_some("doc-check-ok"))}>
                { if attached { "✓" } else { "!" } }
            </span>
            <span class="doc-check-label">{ label }</span>
        </div>
    }
}

fn build_status_banner(record: &ApplicationRecord) -> Html {
    match record.status {
        ApplicationStatus::Rejected => {
            let note = record
                .admin_note
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_REJECT_NOTE);
            html! {
                <div class="reject-note">
                    <h4>{ "ข้อความจากเจ้าหน้าที่:" }</h4>
                    <p>{ format!("\"{note}\"") }</p>
                </div>
            }
        }
        ApplicationStatus::Approved => html! {
            <div class="approve-banner">
                { "ยินดีด้วย! ใบสมัครของคุณได้รับการอนุมัติแล้ว" }
            </div>
        },
        ApplicationStatus::Pending => html! {},
    }
}

fn find_record(records: &[ApplicationRecord], needle: &str) -> Option<ApplicationRecord> {
    records
        .iter()
        .find(|record| normalize_citizen_id(&record.national_id) == needle)
        .cloned()
}
