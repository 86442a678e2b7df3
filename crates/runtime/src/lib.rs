//! The keyboard navigation engine of menunav.
//!
//! The [`Navigator`] sits in front of the normal event delivery of a host
//! application. It sees every keyboard and pointer event, decides whether it
//! is menu navigation, and if so turns it into changes of the highlighted and
//! opened menu plus requests to the host's focus subsystem and action bus.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use menunav_core as core;

pub mod navigation;

pub use navigation::{Navigator, Notification};
