pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod edit;
pub mod export;
pub mod labels;
pub mod month;

use anyhow::{Context as _, Result};
use secondbrain_core::config::SecondBrainConfig;
use secondbrain_core::store::FileStore;
use secondbrain_core::{Event, EventId, EventRepository};

/// Common context for calendar commands, loaded once per invocation.
pub struct Context {
    pub config: SecondBrainConfig,
    pub repo: EventRepository<FileStore>,
}

impl Context {
    pub fn open(config: SecondBrainConfig) -> Result<Self> {
        let store_path = config.store_path();
        let store = FileStore::open(&store_path)
            .with_context(|| format!("Could not open store at {}", store_path.display()))?;

        Ok(Context {
            config,
            repo: EventRepository::open(store),
        })
    }

    /// Find an event by full id or unique id prefix.
    pub fn resolve_event(&self, id: &str) -> Result<Event> {
        if id.trim().is_empty() {
            anyhow::bail!("An event id is required");
        }

        if let Some(event) = self.repo.get(&EventId::from(id)) {
            return Ok(event.clone());
        }

        let matches: Vec<&Event> = self
            .repo
            .events()
            .iter()
            .filter(|e| e.id.as_str().starts_with(id))
            .collect();

        match matches.as_slice() {
            [event] => Ok((*event).clone()),
            [] => anyhow::bail!("Event '{}' not found", id),
            _ => anyhow::bail!(
                "Event id '{}' is ambiguous ({} matches). Use more characters",
                id,
                matches.len()
            ),
        }
    }
}
