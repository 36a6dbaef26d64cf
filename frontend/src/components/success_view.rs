use yew::prelude::*;

use common::model::application::ApplicationRecord;

#[derive(Properties, PartialEq, Clone)]
pub struct SuccessViewProps {
    pub record: ApplicationRecord,
    pub on_close: Callback<MouseEvent>,
    pub on_print: Callback<MouseEvent>,
}

/// Confirmation page after a submission, showing the reference numbers the
/// applicant needs for the status check.
pub struct SuccessView;

impl Component for SuccessView {
    type Message = ();
    type Properties = SuccessViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SuccessView
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="success-view">
                <div class="card success-card">
                    <div class="success-check">{"✓"}</div>
                    <h2 class="success-title">{"บันทึกสำเร็จ!"}</h2>
                    <p class="muted">
                        {"ข้อมูลการสมัครเรียนของท่านเข้าระบบเรียบร้อยแล้ว"}
                    </p>

                    <div class="success-ref">
                        <p class="success-ref-label">{"เลขประจำตัวประชาชนผู้สมัคร"}</p>
                        <p class="success-ref-number">{ &props.record.national_id }</p>
                        <div class="success-ref-id">
                            { format!("รหัสอ้างอิง: {}", props.record.id) }
                        </div>
                    </div>

                    <div class="success-actions">
                        <button class="btn btn-blue" onclick={props.on_close.clone()}>
                            {"กลับสู่หน้าหลัก"}
                        </button>
                        <button class="btn btn-outline" onclick={props.on_print.clone()}>
                            {"พิมพ์ใบสมัคร"}
                        </button>
                    </div>
                    <p class="muted success-note">
                        {"กรุณาจดรหัสอ้างอิงเพื่อใช้ตรวจสอบสถานะในภายหลัง"}
                    </p>
                </div>
            </div>
        }
    }
}
