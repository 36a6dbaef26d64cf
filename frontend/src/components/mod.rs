pub mod admin;
pub mod admission_form;
pub mod header;
pub mod print_sheet;
pub mod public_stats;
pub mod status_check;
pub mod success_view;
