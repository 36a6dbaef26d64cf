pub mod application;
pub mod level;
pub mod settings;
pub mod status;
