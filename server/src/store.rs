//! In-memory todo store and its item operations.
//!
//! # Design
//! The store is an explicitly owned value handed to the HTTP layer, not a
//! process-wide global. Handlers receive it through axum state, so tests can
//! build and seed their own instance and a future persistent backend only has
//! to replace this type.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `title` is optional: creation payloads are accepted without one, and an
/// absent title is omitted from the JSON entirely rather than serialized as
/// `null`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Process-lifetime collection of todos plus the id counter.
///
/// Ids start at 1, grow monotonically, and are never reused, not even after
/// a delete. The `Vec` keeps insertion order, which is what list responses
/// expose; lookups are linear scans.
#[derive(Debug)]
pub struct Store {
    items: Vec<Todo>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All current items in creation order.
    pub fn list(&self) -> Vec<Todo> {
        self.items.clone()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Assign the next id, append, and return the stored item.
    pub fn create(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: input.title,
            completed: input.completed,
        };
        self.next_id += 1;
        self.items.push(todo.clone());
        todo
    }

    /// Merge the fields present in `input` into the matching item and return
    /// the result. `None` when no item matches.
    pub fn update(&mut self, id: u64, input: UpdateTodo) -> Option<Todo> {
        let todo = self.items.iter_mut().find(|t| t.id == id)?;
        if let Some(title) = input.title {
            todo.title = Some(title);
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    /// Remove the matching item. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
