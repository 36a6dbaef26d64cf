//! Staff dashboard behind the admin login.
//!
//! Responsibilities
//! - Gate everything behind the staff credentials from the settings.
//! - List every application with search and filter controls, newest
//!   first, refreshed from the sheet on demand.
//! - Review a single application: approve or reject with a note, edit
//!   the core fields, print the sheet, or delete the record.
//! - Maintain the system settings (school name, open flag, document
//!   requirements, staff credentials, contact channels).

use yew::prelude::*;

mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{EditField, Msg};
pub use props::AdminDashboardProps;
pub use state::AdminDashboard;

use crate::services::storage;

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = AdminDashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let records = storage::fetch_applications().await;
                link.send_message(Msg::Loaded(records));
            });
        }
    }
}
