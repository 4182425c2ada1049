//! Fixed identifiers shared across the crate.

/// PRODID written at the top of every exported calendar.
pub const PRODUCT_ID: &str = "-//SecondBrain//Calendar//FR";

/// Domain appended to event ids to form ICS UIDs.
pub const UID_DOMAIN: &str = "secondbrain";

/// SUMMARY used when an exported event has an empty title.
pub const DEFAULT_SUMMARY: &str = "Événement";

/// Display placeholder for events with an empty title.
pub const UNTITLED: &str = "Sans titre";

/// MIME type of exported calendars.
pub const ICS_MIME_TYPE: &str = "text/calendar";

/// Maximum number of label dots previewed in a month grid cell.
pub const MAX_PREVIEW_DOTS: usize = 3;
