//! # Domain Module
//!
//! Calendar grid computation and view assembly.
//!
//! - **date_utils**: week/month grid arithmetic, date keys and headings
//! - **calendar**: event-to-day matching, holiday annotation and cell assembly
//! - **event_badge**: per-event repeat marker and notification emphasis
//!
//! Every function here is pure. The presentation layer owns the reference
//! date and view mode and recomputes a view whenever either changes.

pub mod calendar;
pub mod date_utils;
pub mod event_badge;

pub use calendar::*;
pub use date_utils::*;
pub use event_badge::*;
