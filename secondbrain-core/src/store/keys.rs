//! Store keys, one namespace per dashboard page.
//!
//! Only the calendar lives in this crate. Other pages use their own prefix
//! (`habits:`, `health:`, `training:`, `finance:`) so keys never collide.

/// JSON array of calendar events.
pub const CALENDAR_EVENTS: &str = "cal:events";
