//! Properties accepted by the staff dashboard component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminDashboardProps {
    /// Fired from the login screen's back button.
    pub on_back: Callback<MouseEvent>,
}
