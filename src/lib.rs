pub mod api;
pub mod config;
pub mod dispatcher;
pub mod render;
pub mod store;
pub mod suggestions;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
