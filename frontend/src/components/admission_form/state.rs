//! State carried by the admission form while the applicant fills it in.

use common::address::Subdistrict;
use common::model::application::{ApplicationRecord, Level};
use common::validation::DuplicateGuard;
use uuid::Uuid;

use crate::helpers;
use crate::services::storage;

/// Yew component backing the public admission form.
pub struct AdmissionForm {
    /// Record under construction. The reference id and uid are minted up
    /// front so the printed sheet and the stored row agree.
    pub draft: ApplicationRecord,
    /// Citizen ids that already hold an application, used to refuse
    /// duplicate submissions.
    pub guard: DuplicateGuard,
    /// Validation or upload failure shown in the banner above the form.
    pub error: Option<String>,
    /// True while the record is being pushed to the sheet.
    pub submitting: bool,
    /// True once the submission has been stored; triggers the success
    /// overlay and the handoff back to the app shell.
    pub success: bool,
    /// Subdistrict rows matching the current address search.
    pub address_hits: Vec<&'static Subdistrict>,
    /// Guard so the first-render seeding only runs once.
    pub loaded: bool,
}

impl AdmissionForm {
    pub fn new(level: Level) -> Self {
        let draft = ApplicationRecord {
            id: storage::local_store().next_display_id(level, helpers::buddhist_year()),
            uid: Some(Uuid::new_v4().to_string()),
            level,
            title: default_title(level).to_string(),
            submit_date: helpers::now_iso(),
            ..ApplicationRecord::default()
        };
        Self {
            draft,
            guard: DuplicateGuard::new(),
            error: None,
            submitting: false,
            success: false,
            address_hits: Vec::new(),
            loaded: false,
        }
    }
}

fn default_title(level: Level) -> &'static str {
    match level {
        Level::M1 => "เด็กชาย",
        Level::M4 => "นาย",
    }
}
