//! JSON-file event storage.
//!
//! The store only persists and scopes events by owner. Reshaping for display
//! is left to `bucket_events`, `search` and `build_grid`.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{DayGridError, DayGridResult};
use crate::event::{Event, NewEvent};
use crate::view::DateRange;

#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Load events from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> DayGridResult<Self> {
        let events = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| {
                DayGridError::Serialization(format!("{}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };

        Ok(EventStore {
            path: path.to_path_buf(),
            events,
        })
    }

    pub fn save(&self) -> DayGridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.events)
            .map_err(|e| DayGridError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }

    /// Run `change` against a copy of the store and save it. The store is
    /// only replaced once the save succeeds, so a failed write leaves both
    /// memory and disk as they were.
    pub fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut EventStore) -> DayGridResult<T>,
    ) -> DayGridResult<T> {
        let mut next = self.clone();
        let result = change(&mut next)?;
        next.save()?;

        *self = next;
        Ok(result)
    }

    pub fn create(&mut self, user_id: &str, new: NewEvent) -> DayGridResult<Event> {
        new.validate()?;

        let event = Event::from_new(Uuid::new_v4().to_string(), user_id, new);
        self.events.push(event.clone());

        Ok(event)
    }

    pub fn update(&mut self, user_id: &str, id: &str, changes: NewEvent) -> DayGridResult<Event> {
        changes.validate()?;

        let event = self.find_mut(user_id, id)?;
        event.apply(changes);

        Ok(event.clone())
    }

    pub fn set_completed(&mut self, user_id: &str, id: &str, completed: bool) -> DayGridResult<Event> {
        let event = self.find_mut(user_id, id)?;
        event.completed = completed;

        Ok(event.clone())
    }

    pub fn delete(&mut self, user_id: &str, id: &str) -> DayGridResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id && e.user_id == user_id)
            .ok_or_else(|| DayGridError::EventNotFound(id.to_string()))?;

        Ok(self.events.remove(index))
    }

    pub fn get(&self, user_id: &str, id: &str) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id && e.user_id == user_id)
    }

    /// All events owned by `user_id`, in insertion order.
    pub fn for_user(&self, user_id: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Events owned by `user_id` whose date falls within `range`.
    pub fn in_range(&self, user_id: &str, range: &DateRange) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.user_id == user_id && range.contains(e.date))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn find_mut(&mut self, user_id: &str, id: &str) -> DayGridResult<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.id == id && e.user_id == user_id)
            .ok_or_else(|| DayGridError::EventNotFound(id.to_string()))
    }
}
