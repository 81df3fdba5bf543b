pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod storage;
pub mod suggest;
pub mod theme;

pub use app::start;
