//! Mode logic for an off-time switching flashlight driver.
//!
//! The light has no button of its own. Modes change by switching the
//! power off and on again quickly, which is detected through a record
//! kept in ram that survives a short power loss (see [`session`]).
//!
//! Everything here is written against the [`port::LightPort`] and
//! [`port::ModeStore`] traits, the firmware crate supplies the
//! hardware implementations.

#![cfg_attr(not(test), no_std)]

pub mod battery;
pub mod config;
pub mod dispatch;
pub mod drivers;
pub mod modes;
pub mod port;
pub mod session;
pub mod tables;

#[cfg(test)]
mod scenarios;

pub use dispatch::boot;
pub use drivers::Behavior;
pub use modes::{Mode, ModeIndexError, RegularMode, Selection, StrobeMode};
pub use port::{LightPort, ModeStore, NoStore, SavedMode};
pub use session::{Retained, SessionRecord};
