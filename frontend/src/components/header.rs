use yew::prelude::*;

const LOGO_URL: &str =
    "https://drive.google.com/thumbnail?id=1IjjdJpQYPGN2DlNa7QGHznqRjCu-oE1D&sz=w200";

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub school_name: String,
    pub on_home: Callback<MouseEvent>,
    pub on_admin: Callback<MouseEvent>,
}

pub enum Msg {
    LogoFailed,
}

/// Sticky top bar with the school identity and the staff entrance.
pub struct Header {
    logo_broken: bool,
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header { logo_broken: false }
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
        let link = ctx.link();
        let props = ctx.props();
        html! {
            <header class="header no-print">
                <div class="header-brand" onclick={props.on_home.clone()}>
                    <div class="header-logo">
                        {
                            if !self.logo_broken {
                                html! {
                                    <img
                                        src={LOGO_URL}
                                        alt={format!("โลโก้{}", props.school_name)}
                                        onerror={link.callback(|_| Msg::LogoFailed)}
                                    />
                                }
                            } else {
                                html! { <div class="header-logo-fallback">{"TB"}</div> }
                            }
                        }
                    </div>
                    <div>
                        <h1 class="header-title">{ &props.school_name }</h1>
                        <p class="header-tagline">{"THABO SCHOOL • NONG KHAI"}</p>
                    </div>
                </div>
                <button class="btn btn-ghost" onclick={props.on_admin.clone()}>
                    {"เจ้าหน้าที่"}
                </button>
            </header>
        }
    }
}
