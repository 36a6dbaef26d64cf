use num_format::{Locale, ToFormattedString};
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::application::{ApplicationRecord, TrackKind};
use common::model::level::Level;
use common::stats::{overview, track_names, GenderTally, StatsFilter};

use crate::services::storage;

pub enum Msg {
    Loaded(Vec<ApplicationRecord>),
    SetLevel(String),
    SetKind(String),
    SetTrack(String),
}

/// Live applicant counts on the landing page, with a per-track drill-down.
/// Shows aggregate numbers only.
pub struct PublicStats {
    records: Vec<ApplicationRecord>,
    filter: StatsFilter,
    loading: bool,
    loaded: bool,
}

impl Component for PublicStats {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PublicStats {
            records: Vec::new(),
            filter: StatsFilter::default(),
            loading: true,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(records) => {
                self.records = records;
                self.loading = false;
                true
            }
            Msg::SetLevel(raw) => {
                self.filter.level = parse_all(&raw).map(|v| Level::from_wire(v));
                self.filter.track = None;
                true
            }
            Msg::SetKind(raw) => {
                self.filter.kind = parse_all(&raw).map(|v| TrackKind::from_wire(v));
                self.filter.track = None;
                true
            }
            Msg::SetTrack(raw) => {
                self.filter.track = parse_all(&raw).map(str::to_string);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="public-stats">
                <h2 class="section-title">{"สถิติการรับสมัครล่าสุด"}</h2>
                {
                    if self.loading {
                        html! {
                            <div class="loading-note">
                                <div class="spinner"></div>
                                <p class="muted">{"กำลังโหลดข้อมูลล่าสุด..."}</p>
                            </div>
                        }
                    } else {
                        let stats = overview(&self.records);
                        html! {
                            <>
                                <div class="grid-2">
                                    { build_stat_card("ระดับชั้น ม.1", &stats.m1, "stat-card-m1") }
                                    { build_stat_card("ระดับชั้น ม.4", &stats.m4, "stat-card-m4") }
                                </div>
                                { self.build_drilldown(ctx) }
                            </>
                        }
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let records = storage::fetch_applications().await;
                link.send_message(Msg::Loaded(records));
            });
        }
    }
}

impl PublicStats {
    fn build_drilldown(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tracks = track_names(&self.records, &self.filter);
        let chosen = self.filter.tally(&self.records);
        let scope_label = match self.filter.level {
            Some(level) => level.wire_name(),
            None => "ทุกระดับชั้น",
        };

        html! {
            <div class="card card-pad">
                <h3 class="section-title">{"เจาะลึกสถิติรายแผนการเรียน"}</h3>
                <div class="toolbar">
                    <div class="field">
                        <label class="field-label">{"ระดับชั้น"}</label>
                        <select
                            class="select-input"
                            onchange={link.callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::SetLevel(select.value())
                            })}
                        >
                            <option value="all" selected={self.filter.level.is_none()}>{"ทั้งหมด"}</option>
                            <option value="ม.1" selected={self.filter.level == Some(Level::M1)}>{"ม.1"}</option>
                            <option value="ม.4" selected={self.filter.level == Some(Level::M4)}>{"ม.4"}</option>
                        </select>
                    </div>
                    <div class="field">
                        <label class="field-label">{"ประเภทห้องเรียน"}</label>
                        <select
                            class="select-input"
                            onchange={link.callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::SetKind(select.value())
                            })}
                        >
                            <option value="all" selected={self.filter.kind.is_none()}>{"ทั้งหมด"}</option>
                            <option value="special" selected={self.filter.kind == Some(TrackKind::Special)}>{"ห้องเรียนพิเศษ"}</option>
                            <option value="regular" selected={self.filter.kind == Some(TrackKind::Regular)}>{"ห้องเรียนปกติ"}</option>
                        </select>
                    </div>
                    <div class="field field-grow">
                        <label class="field-label">{"แผนการเรียน"}</label>
                        <select
                            class="select-input"
                            onchange={link.callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                Msg::SetTrack(select.value())
                            })}
                        >
                            <option value="all" selected={self.filter.track.is_none()}>{"ทุกแผนการเรียน"}</option>
                            {
                                tracks.iter().map(|track| {
                                    let picked = self.filter.track.as_deref() == Some(track.as_str());
                                    html! {
                                        <option value={track.clone()} selected={picked}>{ track }</option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>

                <div class="stats-band">
                    <div>
                        <p class="stats-band-label">{"ยอดผู้สมัครตามเงื่อนไข"}</p>
                        <p class="stats-band-scope">{ scope_label }</p>
                    </div>
                    <div class="stats-band-numbers">
                        <div>
                            <p class="stats-band-label">{"ชาย"}</p>
                            <p class="stats-band-count">{ chosen.male.to_formatted_string(&Locale::en) }</p>
                        </div>
                        <div>
                            <p class="stats-band-label">{"หญิง"}</p>
                            <p class="stats-band-count">{ chosen.female.to_formatted_string(&Locale::en) }</p>
                        </div>
                        <div class="stats-band-total">
                            <p class="stats-band-label">{"รวม"}</p>
                            <p class="stats-band-count">{ chosen.total.to_formatted_string(&Locale::en) }</p>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}

fn parse_all(raw: &str) -> Option<&str> {
    if raw == "all" { None } else { Some(raw) }
}

fn build_stat_card(title: &str, tally: &GenderTally, accent: &'static str) -> Html {
    html! {
        <div class={classes!("card", "stat-card", accent)}>
            <div class="stat-card-head">
                <div>
                    <h3>{ title }</h3>
                    <p class="field-label">{"ยอดผู้สมัครทั้งหมด"}</p>
                </div>
                <span class="stat-card-total">{ tally.total.to_formatted_string(&Locale::en) }</span>
            </div>
            <div class="stat-card-split">
                <div class="stat-card-cell">
                    <p class="field-label">{"ชาย"}</p>
                    <p class="stat-card-count">{ tally.male.to_formatted_string(&Locale::en) }</p>
                </div>
                <div class="stat-card-cell">
                    <p class="field-label">{"หญิง"}</p>
                    <p class="stat-card-count">{ tally.female.to_formatted_string(&Locale::en) }</p>
                </div>
            </div>
        </div>
    }
}
