//! Template catalog keyed by event type.

use std::collections::HashMap;

use kokuchi_domain::EventType;

/// Announcement templates, one per event type.
///
/// Templates are plain text with `{{variable}}` placeholders. Inserting a
/// template for an event type that already has one replaces it, so later
/// sources (configuration overrides, user edits) win over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: HashMap<EventType, String>,
}

impl TemplateCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for an event type, replacing any existing one.
    pub fn insert(&mut self, event_type: EventType, template: impl Into<String>) {
        self.templates.insert(event_type, template.into());
    }

    /// Look up the template for an event type.
    #[must_use]
    pub fn get(&self, event_type: EventType) -> Option<&str> {
        self.templates.get(&event_type).map(String::as_str)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Extend<(EventType, String)> for TemplateCatalog {
    fn extend<I: IntoIterator<Item = (EventType, String)>>(&mut self, entries: I) {
        for (event_type, template) in entries {
            self.insert(event_type, template);
        }
    }
}

impl FromIterator<(EventType, String)> for TemplateCatalog {
    fn from_iter<I: IntoIterator<Item = (EventType, String)>>(entries: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(entries);
        catalog
    }
}
