use common::model::application::ApplicationRecord;
use common::model::settings::RequirementMode;
use common::model::status::ApplicationStatus;

use super::state::Tab;

/// Record fields editable inside the review dialog.
#[derive(Clone, Copy)]
pub enum EditField {
    Title,
    FirstName,
    LastName,
    Track,
    Gpa,
    SubGpa,
}

/// Text fields on the settings tab.
#[derive(Clone, Copy)]
pub enum SettingsField {
    SchoolName,
    AdminUser,
    NewPassword,
    ContactLine,
    ContactPhone,
}

#[derive(Clone)]
pub enum Msg {
    Login,
    Logout,
    SetTab(Tab),
    Refresh,
    Loaded(Vec<ApplicationRecord>),
    SetSearch(String),
    SetLevelFilter(String),
    SetStatusFilter(String),
    SetTrackFilter(String),
    SetDateFilter(String),
    Open(Box<ApplicationRecord>),
    Close,
    SetNote(String),
    Decide(ApplicationStatus),
    DecideSynced(bool),
    HideSaved,
    Delete(String),
    DeleteSynced(bool),
    StartEdit,
    CancelEdit,
    Edit(EditField, String),
    SaveEdit,
    EditSynced(bool),
    ShowImage { url: String, title: String },
    CloseImage,
    Print,
    ClosePrint,
    Setting(SettingsField, String),
    ToggleOpen,
    SetPhotoMode(RequirementMode),
    SetPaymentMode(RequirementMode),
    SaveSettings,
}
