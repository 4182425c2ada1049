//! Calendar event types.
//!
//! Events are stored as a flat JSON list. Older stored data wrote every
//! optional form field as an empty string and sometimes omitted `recur`,
//! so deserialization here is lenient: blank strings become `None`, an
//! unknown or missing recurrence becomes `Recurrence::None`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::UNTITLED;
use crate::error::{CoreError, CoreResult};

/// Opaque event identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn random() -> Self {
        EventId(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId(s)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local time of day without time zone, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(TimeOfDay)
            .map_err(|_| CoreError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Recurrence rule of an event, relative to its anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
        }
    }

    /// Short display label, `None` for non-recurring events.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Recurrence::None => None,
            Recurrence::Weekly => Some("Hebdo"),
            Recurrence::Monthly => Some("Mensuelle"),
            Recurrence::Yearly => Some("Annuelle"),
        }
    }
}

impl FromStr for Recurrence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Recurrence::None),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(CoreError::Serialization(format!(
                "Unknown recurrence '{}'. Expected none, weekly, monthly or yearly",
                other
            ))),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar event.
///
/// `date` is the recurrence anchor and never changes after creation.
/// A blank `label` or `note` is stored as absent: [`Event::new`] and
/// [`Event::apply`] turn it into `None`, and loading reads `""` back as
/// `None`. Setting `Some("")` through the public fields directly does
/// not survive a save and reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "time_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<TimeOfDay>,
    #[serde(
        default,
        deserialize_with = "time_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<TimeOfDay>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "recurrence_or_none")]
    pub recur: Recurrence,
}

impl Event {
    /// Create a new event anchored on `date` with a fresh id.
    pub fn new(date: NaiveDate, draft: EventDraft) -> Self {
        let draft = draft.normalized();
        Event {
            id: EventId::random(),
            date,
            title: draft.title,
            start: draft.start,
            end: draft.end,
            label: draft.label,
            note: draft.note,
            recur: draft.recur,
        }
    }

    /// Replace every editable field. `id` and `date` are kept.
    pub fn apply(&mut self, draft: EventDraft) {
        let draft = draft.normalized();
        self.title = draft.title;
        self.start = draft.start;
        self.end = draft.end;
        self.label = draft.label;
        self.note = draft.note;
        self.recur = draft.recur;
    }

    pub fn is_all_day(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Title for display, with a placeholder when empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Time range for display (e.g. "09:00 – 10:00"), `None` for all-day events.
    pub fn time_range(&self) -> Option<String> {
        if self.is_all_day() {
            return None;
        }
        let start = self.start.map(|t| t.to_string()).unwrap_or_default();
        Some(match self.end {
            Some(end) => format!("{} – {}", start, end),
            None => start,
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_title())
    }
}

/// Contents of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub label: Option<String>,
    pub note: Option<String>,
    pub recur: Recurrence,
}

impl EventDraft {
    pub fn new(title: impl Into<String>) -> Self {
        EventDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Build a draft from raw form strings. Blank strings mean absent.
    pub fn from_form(
        title: &str,
        start: &str,
        end: &str,
        label: &str,
        note: &str,
        recur: &str,
    ) -> CoreResult<Self> {
        Ok(EventDraft {
            title: title.to_string(),
            start: parse_optional_time(start)?,
            end: parse_optional_time(end)?,
            label: non_blank(label),
            note: non_blank(note),
            recur: recur.parse()?,
        })
    }

    /// Prefill a draft from an existing event, for editing.
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            label: event.label.clone(),
            note: event.note.clone(),
            recur: event.recur,
        }
    }

    /// Blank label and note become `None`.
    fn normalized(self) -> Self {
        EventDraft {
            label: self.label.and_then(|s| non_blank(&s)),
            note: self.note.and_then(|s| non_blank(&s)),
            ..self
        }
    }

    /// Submissions without a title are ignored.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn parse_optional_time(s: &str) -> CoreResult<Option<TimeOfDay>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| non_blank(&s)))
}

fn time_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<TimeOfDay>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(s) if !s.trim().is_empty() => match s.parse() {
            Ok(time) => Some(time),
            Err(_) => {
                log::warn!("Ignoring stored time '{}': expected HH:MM", s);
                None
            }
        },
        _ => None,
    })
}

fn recurrence_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Recurrence, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.parse().ok())
        .unwrap_or(Recurrence::None))
}
