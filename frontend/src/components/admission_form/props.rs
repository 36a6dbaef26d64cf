//! Properties accepted by the admission form component.

use common::model::application::{ApplicationRecord, Level};
use common::model::settings::SystemSettings;
use yew::prelude::*;

/// Inputs handed down from the app shell when a level banner is chosen.
#[derive(Properties, PartialEq, Clone)]
pub struct AdmissionFormProps {
    /// Academic level this form submits for.
    pub level: Level,
    /// Current system settings; drive the required-document gates and the
    /// prior-school suggestion list.
    pub settings: SystemSettings,
    /// Fired when the applicant backs out without submitting.
    pub on_cancel: Callback<MouseEvent>,
    /// Fired with the stored record once the submission has been saved and
    /// the success screen has run its course.
    pub on_finish: Callback<ApplicationRecord>,
}
