pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod render;
