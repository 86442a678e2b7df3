//! Test your menu bar navigation in headless mode.
//!
//! This crate provides recording stand-ins for the services a host hands to
//! the navigation engine, and a [`Harness`] that drives a
//! [`Navigator`](menunav_runtime::Navigator) with them.
//!
//! ```
//! use menunav_test::{Harness, fixtures};
//!
//! let mut harness = Harness::new(fixtures::file_edit_help());
//!
//! let _ = harness.alt_tap();
//! assert_eq!(harness.highlighted(), Some("file"));
//!
//! let _ = harness.alt('e');
//! assert_eq!(harness.open_requests(), ["edit"]);
//! assert_eq!(harness.dispatched(), ["nav-first-control"]);
//! ```
pub mod fixtures;
pub mod focus;
pub mod layout;


pub use focus::Recorder;
pub use harness::{Actions, Harness, bare_alt};
pub use layout::Layout;

pub use menunav_runtime as runtime;
pub use menunav_runtime::core;
