//! Section store: the single owner of the resume document.
//!
//! Every mutation updates the in-memory sequence first, then writes the whole
//! sequence to storage synchronously. Storage failures never reach the caller:
//! a failed read falls back to the default document, a failed write is logged.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::editor::suggestions::suggestion;
use crate::models::section::{AboutContent, DEFAULT_ABOUT_TITLE};
use crate::models::{ContentPatch, Section, SectionContent, SectionKind, Theme};
use crate::storage::KeyValueStore;

pub const DEFAULT_SECTION_ID: &str = "1";
pub const DEFAULT_ABOUT_DESCRIPTION: &str = "Краткое описание вашей профессиональной деятельности";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Section {id} is a {expected} section, got {actual} content")]
    KindMismatch {
        id: String,
        expected: SectionKind,
        actual: SectionKind,
    },
}

/// Read-only view handed to renderers and HTTP clients.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSnapshot {
    pub version: u64,
    pub sections: Vec<Section>,
    pub theme: Theme,
}

/// The document a fresh editor starts with: one seeded `about` section.
pub fn default_sections() -> Vec<Section> {
    vec![Section {
        id: DEFAULT_SECTION_ID.to_string(),
        content: SectionContent::About(AboutContent {
            title: DEFAULT_ABOUT_TITLE.to_string(),
            description: DEFAULT_ABOUT_DESCRIPTION.to_string(),
        }),
    }]
}

/// Reads the document stored under `key`.
///
/// Absent or unreadable data, or a payload that is not a JSON array, yields the default
/// document. Inside an array, entries that fail to parse (unknown type, missing fields)
/// and entries repeating an earlier id are skipped; the rest load in order.
pub fn load(storage: &mut dyn KeyValueStore, key: &str) -> Vec<Section> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored resume under '{key}', starting from default");
            return default_sections();
        }
        Err(e) => {
            warn!("Failed to read stored resume '{key}': {e}");
            return default_sections();
        }
    };

    let entries: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Stored resume '{key}' is malformed, using default: {e}");
            return default_sections();
        }
    };
    if entries.is_empty() {
        return Vec::new();
    }

    let total = entries.len();
    let mut seen = HashSet::new();
    let mut sections = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Section>(entry) {
            Ok(section) if seen.insert(section.id.clone()) => sections.push(section),
            Ok(section) => warn!(
                "Stored resume '{key}' repeats section id {} at index {index}, skipping",
                section.id
            ),
            Err(e) => warn!("Skipping unreadable section at index {index} of '{key}': {e}"),
        }
    }

    if sections.is_empty() {
        warn!("No readable section among {total} stored in '{key}', using default");
        return default_sections();
    }
    sections
}

pub struct ResumeEditor {
    sections: Vec<Section>,
    theme: Theme,
    version: u64,
    storage: Box<dyn KeyValueStore>,
    key: String,
}

impl ResumeEditor {
    /// Loads the document from `storage` and takes ownership of it.
    pub fn open(mut storage: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let sections = load(storage.as_mut(), &key);
        info!(
            "Resume loaded from {} storage: {} section(s)",
            storage.backend(),
            sections.len()
        );
        Self {
            sections,
            theme: Theme::default(),
            version: 0,
            storage,
            key,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot {
            version: self.version,
            sections: self.sections.clone(),
            theme: self.theme,
        }
    }

    /// Appends a section of `kind` with default content and returns its id.
    pub fn add(&mut self, kind: SectionKind) -> String {
        let section = Section::new(kind);
        let id = section.id.clone();
        self.sections.push(section);
        debug!("Added {kind} section {id}");
        self.commit();
        id
    }

    /// Replaces the content of section `id`. A missing id is a no-op.
    pub fn update(&mut self, id: &str, content: SectionContent) -> Result<(), StoreError> {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            debug!("Update for missing section {id} ignored");
            return Ok(());
        };
        if section.kind() != content.kind() {
            return Err(StoreError::KindMismatch {
                id: id.to_string(),
                expected: section.kind(),
                actual: content.kind(),
            });
        }
        section.content = content;
        self.commit();
        Ok(())
    }

    /// Merges `fields` into section `id`'s content. Writes only when a value changed;
    /// a missing id is a no-op.
    pub fn patch(&mut self, id: &str, fields: &ContentPatch) {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            debug!("Patch for missing section {id} ignored");
            return;
        };
        let ignored: Vec<&str> = fields
            .keys()
            .map(String::as_str)
            .filter(|name| section.content.field(name).is_none())
            .collect();
        if !ignored.is_empty() {
            debug!(
                "Ignoring fields {ignored:?} on {} section {id}",
                section.kind()
            );
        }
        if section.content.merge(fields) {
            self.commit();
        }
    }

    /// Merges the canned suggestion for the section's kind into its content.
    pub fn apply_suggestion(&mut self, id: &str) {
        let Some(kind) = self.get(id).map(Section::kind) else {
            debug!("Suggestion for missing section {id} ignored");
            return;
        };
        self.patch(id, &suggestion(kind));
    }

    /// Removes section `id`. A missing id is a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        if self.sections.len() == before {
            debug!("Delete for missing section {id} ignored");
            return;
        }
        self.commit();
    }

    /// Moves the section at `from` to `to`, shifting the ones in between.
    ///
    /// `to == None` is a cancelled drag and leaves the document untouched, as does
    /// an out-of-range `from`. A `to` past the end is clamped to the last index.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) {
        let Some(to) = to else {
            return;
        };
        if from >= self.sections.len() {
            debug!(
                "Reorder from {from} ignored: only {} section(s)",
                self.sections.len()
            );
            return;
        }
        let to = to.min(self.sections.len() - 1);
        let moved = self.sections.remove(from);
        self.sections.insert(to, moved);
        self.commit();
    }

    fn commit(&mut self) {
        self.version += 1;
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.sections) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize resume v{}: {e}", self.version);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!(
                "Failed to persist resume v{} to {} storage: {e}",
                self.version,
                self.storage.backend()
            );
        }
    }
}
