//! Public admission form for a single academic level.
//!
//! Responsibilities
//! - Collect the applicant's personal, address, education and study-plan
//!   data plus the document images, all kept in a draft record.
//! - Refuse citizen ids that already hold an application on this device
//!   or in the sheet snapshot.
//! - On submit, store the record locally and push it to the sheet, then
//!   hand the record back to the app shell for the success screen.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AdmissionFormProps;
pub use state::AdmissionForm;

use crate::services::storage;

impl Component for AdmissionForm {
    type Message = Msg;
    type Properties = AdmissionFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        AdmissionForm::new(ctx.props().level)
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
            // ids already on this device block duplicates immediately; the
            // sheet snapshot widens the guard across devices once it lands
            self.guard.absorb(&storage::local_store().applications());

            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(records) = storage::fetch_remote_records().await {
                    link.send_message(Msg::GuardRecords(records));
                }
            });
        }
    }
}
