//! # Event Calendar Backend
//!
//! Computes week and month calendar grids and places events, holidays and
//! notification emphasis into their cells. The output types live in the
//! `shared` crate so any presentation layer can consume them.
//!
//! ```text
//! date_utils (grids, keys, headings)
//!     ↓
//! calendar (event matching, holiday annotation, cell assembly)
//!     ↓
//! event_badge (repeat marker, notified emphasis)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod logging;
pub mod preview;

pub use domain::*;
pub use error::{CalendarError, CalendarResult};
