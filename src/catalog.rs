use crate::errors::{JournalError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GESTURES: [(&str, &str); 6] = [
    ("compliment", "Compliment"),
    ("coffee", "Made coffee or a drink"),
    ("talk", "Pleasant talk"),
    ("help", "Helped around the house"),
    ("note", "Warm note or message"),
    ("gift", "Special gesture"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureDefinition {
    pub id: String,
    pub label: String,
}

/// Ordered list of trackable gestures. Ids never change once assigned.
#[derive(Debug, Clone)]
pub struct GestureCatalog {
    entries: Vec<GestureDefinition>,
}

impl Default for GestureCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_GESTURES
                .iter()
                .map(|(id, label)| GestureDefinition {
                    id: (*id).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
        }
    }
}

impl GestureCatalog {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a gesture, keeping `label` verbatim. A taken slug gets the
    /// first free `_N` suffix.
    pub fn add(&mut self, label: &str) -> Result<&GestureDefinition> {
        let base = slugify(label);
        if base.is_empty() {
            return Err(JournalError::EmptyLabel);
        }

        let mut id = base.clone();
        let mut suffix = 2;
        while self.contains(&id) {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }

        self.entries.push(GestureDefinition {
            id,
            label: label.to_string(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn rename(&mut self, id: &str, label: &str) -> Result<&GestureDefinition> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| JournalError::UnknownGesture(id.to_string()))?;
        entry.label = label.to_string();
        Ok(&*entry)
    }

    pub fn get(&self, id: &str) -> Option<&GestureDefinition> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display label, or the raw id for gestures no longer in the catalog.
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |entry| entry.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GestureDefinition> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<GestureDefinition> {
        self.entries.clone()
    }
}

pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}
