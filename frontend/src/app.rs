use yew::prelude::*;

use common::model::application::ApplicationRecord;
use common::model::level::Level;
use common::model::settings::SystemSettings;

use crate::components::admin::AdminDashboard;
use crate::components::admission_form::AdmissionForm;
use crate::components::header::Header;
use crate::components::print_sheet::PrintSheet;
use crate::components::public_stats::PublicStats;
use crate::components::status_check::StatusCheck;
use crate::components::success_view::SuccessView;
use crate::helpers::{buddhist_year, scroll_to_top, show_toast};
use crate::services::storage;

const LOGO_URL: &str =
    "https://drive.google.com/thumbnail?id=1IjjdJpQYPGN2DlNa7QGHznqRjCu-oE1D&sz=w1000";

pub enum View {
    Landing,
    Form(Level),
    Success(Box<ApplicationRecord>),
    Check,
    Admin,
    Print(Box<ApplicationRecord>),
}

pub enum Msg {
    GoHome,
    Start(Level),
    Finished(Box<ApplicationRecord>),
    GoCheck,
    GoAdmin,
    Print(Box<ApplicationRecord>),
    ClosePrint,
    LogoFailed,
}

/// Root component: keeps the current view and the cached site settings.
pub struct App {
    view: View,
    settings: SystemSettings,
    logo_broken: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            view: View::Landing,
            settings: storage::load_settings(),
            logo_broken: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::GoHome => {
                // settings may have been edited from the dashboard
                self.settings = storage::load_settings();
                self.view = View::Landing;
                scroll_to_top();
                true
            }
            Msg::Start(level) => {
                if !self.settings.is_open {
                    show_toast("ขออภัย ระบบรับสมัครออนไลน์ปิดให้บริการในขณะนี้");
                    return false;
                }
                self.view = View::Form(level);
                scroll_to_top();
                true
            }
            Msg::Finished(record) => {
                self.view = View::Success(record);
                scroll_to_top();
                true
            }
            Msg::GoCheck => {
                self.view = View::Check;
                scroll_to_top();
                true
            }
            Msg::GoAdmin => {
                self.view = View::Admin;
                scroll_to_top();
                true
            }
            Msg::Print(record) => {
                self.view = View::Print(record);
                scroll_to_top();
                true
            }
            Msg::ClosePrint => {
                if let View::Print(record) = std::mem::replace(&mut self.view, View::Landing) {
                    self.view = View::Success(record);
                }
                true
            }
            Msg::LogoFailed => {
                self.logo_broken = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        // the print sheet is its own page, no chrome around it
        if let View::Print(record) = &self.view {
            return html! {
                <PrintSheet
                    record={(**record).clone()}
                    on_back={link.callback(|_| Msg::ClosePrint)}
                />
            };
        }

        let content = match &self.view {
            View::Landing => self.build_landing(ctx),
            View::Form(level) => html! {
                <AdmissionForm
                    level={*level}
                    settings={self.settings.clone()}
                    on_cancel={link.callback(|_| Msg::GoHome)}
                    on_finish={link.callback(|record| Msg::Finished(Box::new(record)))}
                />
            },
            View::Success(record) => {
                let for_print = (**record).clone();
                html! {
                    <SuccessView
                        record={(**record).clone()}
                        on_close={link.callback(|_| Msg::GoHome)}
                        on_print={link.callback(move |_| Msg::Print(Box::new(for_print.clone())))}
                    />
                }
            }
            View::Check => html! { <StatusCheck on_back={link.callback(|_| Msg::GoHome)} /> },
            View::Admin => html! { <AdminDashboard on_back={link.callback(|_| Msg::GoHome)} /> },
            View::Print(_) => html! {},
        };

        html! {
            <div class="app-shell">
                <Header
                    school_name={self.settings.school_name.clone()}
                    on_home={link.callback(|_| Msg::GoHome)}
                    on_admin={link.callback(|_| Msg::GoAdmin)}
                />
                <main class="app-main">{ content }</main>
                { self.build_footer() }
            </div>
        }
    }
}

impl App {
    fn build_landing(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="landing">
                <div class="landing-hero">
                    <div class="landing-logo">
                        {
                            if !self.logo_broken {
                                html! {
                                    <img
                                        src={LOGO_URL}
                                        alt={self.settings.school_name.clone()}
                                        onerror={link.callback(|_| Msg::LogoFailed)}
                                    />
                                }
                            } else {
                                html! { <div class="landing-logo-fallback">{"TB"}</div> }
                            }
                        }
                    </div>
                    <div class="landing-badge">
                        { format!("Admission System {}", buddhist_year()) }
                    </div>
                    <h1 class="landing-title">{ &self.settings.school_name }</h1>
                    <p class="landing-subtitle">{"ระบบรับสมัครนักเรียนผ่านสื่ออิเล็กทรอนิกส์"}</p>
                </div>

                <div class="grid-2">
                    { self.build_level_card(ctx, Level::M1) }
                    { self.build_level_card(ctx, Level::M4) }
                </div>

                <PublicStats />

                <div class="landing-check">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::GoCheck)}>
                        {"ตรวจสอบสถานะการสมัคร"}
                    </button>
                </div>
            </div>
        }
    }

    fn build_level_card(&self, ctx: &Context<Self>, level: Level) -> Html {
        let link = ctx.link();
        let (accent, blurb, action) = match level {
            Level::M1 => (
                "level-card-m1",
                html! { <>{"สำหรับผู้จบการศึกษาชั้นประถมศึกษาปีที่ 6"}<br/>{"ทั่วไป และในเขตพื้นที่บริการ"}</> },
                "สมัครเรียน ม.1",
            ),
            Level::M4 => (
                "level-card-m4",
                html! { <>{"สำหรับผู้จบการศึกษาชั้นมัธยมศึกษาปีที่ 3"}<br/>{"โควตาโรงเรียนเดิม และนักเรียนทั่วไป"}</> },
                "สมัครเรียน ม.4",
            ),
        };
        html! {
            <div
                class={classes!("card", "level-card", accent)}
                onclick={link.callback(move |_| Msg::Start(level))}
            >
                <div class="level-card-icon">{ level.wire_name() }</div>
                <h2>{ format!("ชั้น{}", level.thai_name()) }</h2>
                <p class="muted">{ blurb }</p>
                <button class="btn btn-blue btn-block">{ action }</button>
            </div>
        }
    }

    fn build_footer(&self) -> Html {
        html! {
            <footer class="app-footer no-print">
                <p class="muted">
                    { format!("© {} {}", buddhist_year(), self.settings.school_name) }
                    <br/>
                    { &self.settings.contact_line }
                    { format!(" โทร. {}", self.settings.contact_phone) }
                </p>
            </footer>
        }
    }
}
