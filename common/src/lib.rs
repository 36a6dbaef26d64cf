pub mod address;
pub mod auth;
pub mod files;
pub mod helpers;
pub mod model;
pub mod stats;
pub mod store;
pub mod tracks;
pub mod validation;
