//! Printable application form, laid out for a single A4 page.
//!
//! Rendered without the app chrome so the browser's print dialog captures
//! only the sheet. The toolbar at the top carries `no-print` and vanishes
//! on paper.

use yew::prelude::*;

use common::files::{self, ATTACHMENT_SENTINEL};
use common::helpers::thai_long_date;
use common::model::application::{Address, ApplicationRecord, ServiceArea};

use crate::helpers;

const LOGO_URL: &str =
    "https://drive.google.com/thumbnail?id=1IjjdJpQYPGN2DlNa7QGHznqRjCu-oE1D&sz=w1000";

#[derive(Properties, PartialEq)]
pub struct PrintSheetProps {
    pub record: ApplicationRecord,
    pub on_back: Callback<MouseEvent>,
}

pub enum Msg {
    LogoFailed,
}

pub struct PrintSheet {
    logo_broken: bool,
}

impl Component for PrintSheet {
    type Message = Msg;
    type Properties = PrintSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { logo_broken: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LogoFailed => {
                self.logo_broken = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let record = &ctx.props().record;
        html! {
            <div class="print-page">
                <div class="print-toolbar no-print">
                    <button
                        class="btn btn-blue"
                        onclick={Callback::from(|_: MouseEvent| helpers::print_page())}
                    >
                        { "พิมพ์ใบสมัคร" }
                    </button>
                    <button class="btn btn-outline" onclick={ctx.props().on_back.clone()}>
                        { "กลับ" }
                    </button>
                </div>
                <div class="print-sheet">
                    { build_top_row(record) }
                    { self.build_title_box(ctx, record) }
                    <div class="print-columns">
                        { build_details(record) }
                        { build_photo_column(record) }
                    </div>
                    { build_doc_list(record) }
                    { build_signatures(record) }
                    { build_staff_section() }
                    <div class="print-footer">
                        { format!(
                            "พิมพ์เมื่อ: {} | พัฒนาโดย ระบบรับสมัครนักเรียนโรงเรียนท่าบ่อ",
                            helpers::now_thai()
                        ) }
                    </div>
                </div>
            </div>
        }
    }
}

impl PrintSheet {
    fn build_title_box(&self, ctx: &Context<Self>, record: &ApplicationRecord) -> Html {
        let logo = if self.logo_broken {
            html! { <div class="print-logo-fallback">{ "TB" }</div> }
        } else {
            html! {
                <img
                    class="print-logo"
                    src={LOGO_URL}
                    alt="โลโก้โรงเรียน"
                    onerror={ctx.link().callback(|_| Msg::LogoFailed)}
                />
            }
        };
        html! {
            <div class="print-title-box">
                { logo }
                <div class="print-title-text">
                    <h1>{ format!("ใบสมัครเข้าเรียน ชั้น{}", record.level.thai_name()) }</h1>
                    <p>{ format!(
                        "โรงเรียนท่าบ่อ จังหวัดหนองคาย ปีการศึกษา {}",
                        helpers::buddhist_year()
                    ) }</p>
                </div>
            </div>
        }
    }
}

fn build_top_row(record: &ApplicationRecord) -> Html {
    html! {
        <div class="print-top-row">
            <div>
                { build_checkline(
                    record.service_area == ServiceArea::Inside,
                    "นักเรียนในเขตพื้นที่บริการ",
                ) }
                { build_checkline(
                    record.service_area == ServiceArea::Outside,
                    "นักเรียนนอกเขตพื้นที่บริการ",
                ) }
            </div>
            <div class="print-ref-box">
                <span class="print-ref-label">{ "รหัสอ้างอิงใบสมัคร" }</span>
                <span class="print-ref-number">{ &record.id }</span>
            </div>
        </div>
    }
}

fn build_checkline(checked: bool, label: &str) -> Html {
    html! {
        <div class="print-checkline">
            <span class="print-checkbox">{ if checked { "✓" } else { "" } }</span>
            <span>{ label }</span>
        </div>
    }
}

fn build_details(record: &ApplicationRecord) -> Html {
    let education = &record.education;
    html! {
        <div class="print-main">
            <h2 class="print-section">{ "1. ข้อมูลส่วนตัว" }</h2>
            <div>{ "ชื่อ-นามสกุล: " }<b class="print-big">{ record.display_name() }</b></div>
            <div>
                { "เลขประจำตัวประชาชน: " }
                <b class="print-big print-spaced">{ &record.national_id }</b>
            </div>
            <div>
                { "วัน/เดือน/ปีเกิด: " }
                <b>{ thai_long_date(&record.birth_date) }</b>
                { format!(" อายุ {} ปี", record.age) }
            </div>
            <div>{ "เบอร์โทรศัพท์: " }<b>{ &record.phone }</b></div>
            <div>{ "ที่อยู่ปัจจุบัน: " }<b>{ address_line(&record.address) }</b></div>
            <div>{ "ชื่อผู้ปกครอง: " }<b>{ &record.guardian_name }</b></div>

            <h2 class="print-section">{ "2. ข้อมูลการศึกษาและความประสงค์" }</h2>
            <div>{ "โรงเรียนเดิม: " }<b>{ &education.school_name }</b></div>
            <div>
                { "อำเภอ/จังหวัด: " }
                <b>{ format!("{} / {}", education.school_district, education.school_province) }</b>
            </div>
            <div>
                { "ผลการเรียนเฉลี่ยสะสม (GPAX): " }
                <b class="print-big">{ &education.gpa }</b>
            </div>
            <div class="print-track-box">
                <div class="print-track-label">{ "แผนการเรียนที่สมัคร:" }</div>
                <div class="print-track-name">{ &record.track }</div>
                if !education.sub_gpa_subject.is_empty() {
                    <div class="print-track-sub">
                        { format!("{}: ", education.sub_gpa_subject) }
                        <b>{ &education.sub_gpa }</b>
                    </div>
                }
            </div>
        </div>
    }
}

fn address_line(address: &Address) -> String {
    let village_part = if address.village.is_empty() {
        String::new()
    } else {
        format!("ม.{} {} ", address.moo, address.village)
    };
    format!(
        "{} {}ต.{} อ.{} จ.{} {}",
        address.house_no,
        village_part,
        address.sub_district,
        address.district,
        address.province,
        address.zip_code
    )
}

fn build_photo_column(record: &ApplicationRecord) -> Html {
    let photo = record.files.photo.as_deref();
    let body = match photo.and_then(files::display_image_url) {
        Some(src) => html! { <img class="print-photo" src={src} alt="รูปถ่ายผู้สมัคร" /> },
        // stripped copy: the payload lives on the sheet, not in this cache
        None if photo == Some(ATTACHMENT_SENTINEL) => html! {
            <div class="print-photo-note">{ "กำลังประมวลผลรูปถ่าย" }</div>
        },
        None => html! {
            <div class="print-photo-note">{ "ติดรูปถ่าย" }<br />{ "ขนาด 1.5 นิ้ว" }</div>
        },
    };
    html! {
        <div class="print-photo-col">
            <div class="print-photo-box">{ body }</div>
            <div class="print-status-box">
                { format!("สถานะ: {}", record.status.wire_name()) }
            </div>
        </div>
    }
}

fn build_doc_list(record: &ApplicationRecord) -> Html {
    let slots = &record.files;
    let rows = [
        ("รูปถ่ายหน้าตรงชุดนักเรียน", slots.photo.as_deref()),
        ("สำเนาทะเบียนบ้าน", slots.house_reg.as_deref()),
        ("สำเนาบัตรประชาชน", slots.id_card.as_deref()),
        ("ใบ ปพ.1 (ด้านหน้า)", slots.transcript.as_deref()),
        ("ใบ ปพ.1 (ด้านหลัง)", slots.transcript_back.as_deref()),
    ];
    html! {
        <div class="print-doc-list">
            <h3>{ "รายการหลักฐานที่แนบ (ตรวจสอบเบื้องต้น)" }</h3>
            <div class="print-doc-grid">
                { for rows.iter().map(|(label, value)| {
                    build_checkline(files::has_attachment(*value), label)
                }) }
            </div>
        </div>
    }
}

fn build_signatures(record: &ApplicationRecord) -> Html {
    html! {
        <div class="print-signatures">
            <div class="print-signature">
                <p>{ "ลงชื่อ......................................................" }</p>
                <p>{ format!("( {} {} )", record.first_name, record.last_name) }</p>
                <p>{ "ผู้สมัคร" }</p>
            </div>
            <div class="print-signature">
                <p>{ "ลงชื่อ......................................................" }</p>
                <p>{ format!("( {} )", record.guardian_name) }</p>
                <p>{ "ผู้ปกครอง" }</p>
            </div>
        </div>
    }
}

fn build_staff_section() -> Html {
    html! {
        <div class="print-staff-row">
            <div class="print-seal-box">
                <span class="print-seal-en">{ "School Seal" }</span>
                <span>{ "ประทับตราโรงเรียน" }</span>
            </div>
            <div class="print-staff-box">
                <h3>{ "สำหรับเจ้าหน้าที่รับสมัคร" }</h3>
                <p>{ "ผลการตรวจสอบเอกสาร: [ ] ครบถ้วน [ ] ไม่ครบ (ระบุ).................................." }</p>
                <p>{ "ลงชื่อ............................................................เจ้าหน้าที่รับสมัคร" }</p>
            </div>
        </div>
    }
}
