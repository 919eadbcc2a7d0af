use crate::{ANIMATED_STYLE, DEFAULT_STYLE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

/// One meme background with its style variants and catalog flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    /// Sample caption lines rendered in example URLs.
    #[serde(default)]
    pub example: Vec<String>,
    #[serde(default = "default_valid")]
    pub valid: bool,
    #[serde(default)]
    pub custom: bool,
}

fn default_valid() -> bool {
    true
}

impl Template {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
            styles: vec![DEFAULT_STYLE.to_string()],
            example: Vec::new(),
            valid: true,
            custom: false,
        }
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_example(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.example = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_animated(&self) -> bool {
        self.styles.iter().any(|style| style == ANIMATED_STYLE)
    }

    /// Every template carries at least the default style.
    fn normalized(mut self) -> Self {
        if self.styles.is_empty() {
            self.styles.push(DEFAULT_STYLE.to_string());
        }
        self
    }

    pub(crate) fn sort_key(&self) -> (&str, &str) {
        (&self.name, &self.id)
    }
}

/// Read-only collection of templates with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Builds a catalog from loader output. Duplicate ids keep the first
    /// occurrence.
    pub fn new(templates: Vec<Template>) -> Self {
        let mut seen = HashSet::with_capacity(templates.len());
        let mut kept = Vec::with_capacity(templates.len());
        for template in templates {
            let template = template.normalized();
            if !seen.insert(template.id.clone()) {
                tracing::warn!("Dropping template with duplicate id `{}`", template.id);
                continue;
            }
            kept.push(template);
        }
        Self { templates: kept }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Process-wide handle to the currently loaded catalog.
///
/// Readers take an `Arc` snapshot and keep using it without holding any
/// lock; a refresh replaces the whole snapshot, so concurrent readers see
/// either the old or the new catalog in full, never a partial mix.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in a freshly loaded catalog and returns the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, next)
    }
}
