//! # UI crate: screens and view-state of the InsurePortal client
//!
//! Each screen is split in two. The headless half ([`login`], [`admin`],
//! [`forms`], [`notification`], [`format`]) is plain Rust: state structs and
//! the steps that change them, tested without a renderer. The Dioxus half
//! ([`views`]) keeps that state in signals and renders it.
//!
//! Async work in the headless half is generic over the [`api::AuthService`] /
//! [`api::AdminService`] traits; views pass the [`api::HttpBackend`] from the
//! [`AppContext`], tests pass an in-memory fake.

pub mod admin;
pub mod format;
pub mod forms;
pub mod login;
pub mod notification;
pub mod views;

mod banner;
pub use banner::{show_banner, NotificationBanner};

mod platform;
pub use platform::{load_config, make_token_store, sleep, PlatformStore};

mod session;
pub use session::{use_app, AppContext, AppProvider, LogoutButton};

pub use views::{AdminDashboard, LoginView};

#[cfg(test)]
mod testing;
