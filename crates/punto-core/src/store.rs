//! Immutable, pre-loaded event store.
//!
//! The store is built once at startup from a JSON document and never mutated.
//! Cloning is cheap: every clone shares the same event slice.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::model::Event;

/// Dataset load failures, reported before any view is shown.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dataset")]
    Parse(#[from] serde_json::Error),

    #[error("event #{position} has no id")]
    MissingId { position: usize },

    #[error("event '{id}' (#{position}) has no title")]
    MissingTitle { position: usize, id: String },

    #[error("event '{id}' (#{position}) reuses the id of event #{first}")]
    DuplicateId {
        position: usize,
        first: usize,
        id: String,
    },
}

/// Ordered, read-only sequence of events.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Arc<[Event]>,
}

impl EventStore {
    /// Builds a store from already-decoded events, validating required fields.
    ///
    /// # Errors
    /// Returns the first entry with a blank id or title, or a repeated id.
    pub fn from_events(events: Vec<Event>) -> Result<Self, DatasetError> {
        validate(&events)?;
        Ok(Self {
            events: events.into(),
        })
    }

    /// Parses a JSON array of events.
    ///
    /// # Errors
    /// Returns an error if the document is not a valid event array.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::from_events(events)
    }

    /// Loads the dataset at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid dataset.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let json = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), events = store.len(), "loaded dataset");
        Ok(store)
    }

    /// Loads the dataset bundled into the binary.
    ///
    /// # Errors
    /// Returns an error only if the bundled asset is malformed.
    pub fn bundled() -> Result<Self, DatasetError> {
        let store = Self::from_json(punto_assets::EVENTS_JSON)?;
        tracing::info!(events = store.len(), "loaded bundled dataset");
        Ok(store)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Position of the event with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.position(id).and_then(|index| self.get(index))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn validate(events: &[Event]) -> Result<(), DatasetError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(events.len());
    for (position, event) in events.iter().enumerate() {
        if event.id.trim().is_empty() {
            return Err(DatasetError::MissingId { position });
        }
        if event.title.trim().is_empty() {
            return Err(DatasetError::MissingTitle {
                position,
                id: event.id.clone(),
            });
        }
        if let Some(&first) = seen.get(event.id.as_str()) {
            return Err(DatasetError::DuplicateId {
                position,
                first,
                id: event.id.clone(),
            });
        }
        seen.insert(event.id.as_str(), position);
    }
    Ok(())
}
