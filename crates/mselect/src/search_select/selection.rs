//! The set of chosen characters, kept in the order they were picked.

use serde::Serialize;

/// A chosen character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selected {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<Selected>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise append it.
    pub fn toggle(&mut self, id: &str, name: &str) {
        if self.is_selected(id) {
            self.remove(id);
        } else {
            self.entries.push(Selected {
                id: id.to_string(),
                name: name.to_string(),
            });
        }
    }

    /// Remove `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selected> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<Selected> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
