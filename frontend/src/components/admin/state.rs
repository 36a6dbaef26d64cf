//! State carried by the staff dashboard.

use common::model::application::ApplicationRecord;
use common::model::settings::SystemSettings;
use common::stats::RecordFilter;
use yew::NodeRef;

use crate::services::storage;

/// Top-level dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Applications,
    Settings,
}

/// Yew component backing the staff dashboard.
pub struct AdminDashboard {
    /// Whether the staff login has been verified this session.
    pub logged_in: bool,
    pub tab: Tab,
    /// Working copy of the system settings, edited on the settings tab and
    /// consulted for the login check.
    pub settings: SystemSettings,
    /// Applications backing the list; the sheet snapshot when reachable,
    /// the cache otherwise.
    pub records: Vec<ApplicationRecord>,
    /// Record open in the review dialog.
    pub selected: Option<ApplicationRecord>,
    /// Staff note typed in the review dialog, stored with a decision.
    pub note: String,
    /// Full-screen document viewer target as `(url, title)`.
    pub viewer: Option<(String, String)>,
    /// Edit buffer; `Some` while the review dialog is in edit mode.
    pub edit: Option<ApplicationRecord>,
    pub filter: RecordFilter,
    /// True while a fetch or a sheet write is in flight.
    pub loading: bool,
    /// True during the short green confirmation after a decision lands.
    pub saved: bool,
    /// Record being printed; replaces the dashboard until closed so the
    /// login survives the round trip.
    pub printing: Option<Box<ApplicationRecord>>,
    /// New staff password; digested into the settings only on save, and
    /// only when non-empty.
    pub new_password: String,
    pub user_ref: NodeRef,
    pub pass_ref: NodeRef,
    /// Guard so the first-render fetch only runs once.
    pub loaded: bool,
}

impl AdminDashboard {
    pub fn new() -> Self {
        Self {
            logged_in: false,
            tab: Tab::Applications,
            settings: storage::load_settings(),
            records: Vec::new(),
            selected: None,
            note: String::new(),
            viewer: None,
            edit: None,
            filter: RecordFilter::default(),
            loading: false,
            saved: false,
            printing: None,
            new_password: String::new(),
            user_ref: NodeRef::default(),
            pass_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
