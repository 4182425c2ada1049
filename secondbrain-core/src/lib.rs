//! Calendar core for the SecondBrain dashboard.
//!
//! - `event` and `label`: the stored event record and its display categories
//! - `recurrence` and `month`: projecting events onto concrete dates
//! - `ics`: exporting a month as an iCalendar document
//! - `store` and `repository`: persistence through a key-value store

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod label;
pub mod month;
pub mod recurrence;
pub mod repository;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use event::{Event, EventDraft, EventId, Recurrence, TimeOfDay};
pub use month::{MonthGrid, Occurrence, YearMonth};
pub use repository::EventRepository;
