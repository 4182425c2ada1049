//! Calendar event repository.
//!
//! The in-memory list is the source of truth. Every mutation is written
//! through to the store immediately, under [`keys::CALENDAR_EVENTS`].

use chrono::NaiveDate;

use crate::error::CoreResult;
use crate::event::{Event, EventDraft, EventId};
use crate::month::{expand, Occurrence, YearMonth};
use crate::recurrence;
use crate::store::{keys, load_json, save_json, Store};

/// Load the event list. Missing, empty or malformed data is an empty list.
///
/// Records that do not decode as an [`Event`] are skipped individually.
pub fn load<S: Store + ?Sized>(store: &S) -> Vec<Event> {
    let records: Vec<serde_json::Value> = load_json(store, keys::CALENDAR_EVENTS);
    let events: Vec<Event> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("Skipping stored event: {}", e);
                None
            }
        })
        .collect();
    log::debug!("Loaded {} events", events.len());
    events
}

/// Replace the stored event list.
pub fn save<S: Store + ?Sized>(store: &mut S, events: &[Event]) -> CoreResult<()> {
    save_json(store, keys::CALENDAR_EVENTS, events)
}

pub struct EventRepository<S: Store> {
    store: S,
    events: Vec<Event>,
}

impl<S: Store> EventRepository<S> {
    pub fn open(store: S) -> Self {
        let events = load(&store);
        EventRepository { store, events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Add an event anchored on `date`.
    ///
    /// Returns `None` without saving when the draft has no title.
    pub fn add(&mut self, date: NaiveDate, draft: EventDraft) -> CoreResult<Option<Event>> {
        if !draft.has_title() {
            log::debug!("Ignoring new event without title");
            return Ok(None);
        }

        let event = Event::new(date, draft);
        log::debug!("Adding event {} on {}", event.id, event.date);
        self.events.push(event.clone());
        self.persist()?;
        Ok(Some(event))
    }

    /// Replace the editable fields of event `id`. The anchor date is kept.
    ///
    /// Returns `false` when the draft has no title or the id is unknown.
    pub fn update(&mut self, id: &EventId, draft: EventDraft) -> CoreResult<bool> {
        if !draft.has_title() {
            log::debug!("Ignoring edit of {} without title", id);
            return Ok(false);
        }

        let Some(event) = self.events.iter_mut().find(|e| &e.id == id) else {
            return Ok(false);
        };

        event.apply(draft);
        log::debug!("Updated event {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Remove event `id`. Returns whether an event was removed.
    pub fn delete(&mut self, id: &EventId) -> CoreResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| &e.id != id);
        if self.events.len() == before {
            return Ok(false);
        }

        log::debug!("Deleted event {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Events occurring on `date`, in list order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        recurrence::events_on(&self.events, date)
    }

    pub fn expand_month(&self, month: YearMonth) -> Vec<Occurrence> {
        expand(&self.events, month)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> CoreResult<()> {
        save(&mut self.store, &self.events)
    }
}
