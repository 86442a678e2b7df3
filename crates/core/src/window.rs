//! Identify the windows of an application.
mod id;

pub use id::Id;
