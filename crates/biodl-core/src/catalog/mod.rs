//! Catalog of named downloadable resources.
//!
//! A [`Resource`] pairs a destination filename with a source URL; a
//! [`Catalog`] is a read-only, name-keyed set of them. Construction is
//! eager and loud: a malformed URL fails the constructor instead of
//! producing an unusable entry discovered later at download time.

mod builtin;
mod error;

pub use error::CatalogError;

use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Immutable (name, source URL) pair. The name doubles as the local
/// filename the resource is saved under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    name: String,
    url: Url,
}

impl Resource {
    /// Builds a resource, validating that `name` is non-empty and that
    /// `url_str` is a non-empty, well-formed URL.
    pub fn new(name: impl Into<String>, url_str: &str) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if url_str.trim().is_empty() {
            return Err(CatalogError::EmptyUrl { name });
        }
        let url = Url::parse(url_str).map_err(|source| CatalogError::InvalidUrl {
            input: url_str.to_string(),
            source,
        })?;
        tracing::debug!("created resource {} from {}", name, url);
        Ok(Self { name, url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

/// Read-only set of resources keyed by name. Iteration order is the
/// lexicographic name order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<String, Resource>,
}

impl Catalog {
    /// Validates every (name, url) pair. All failures are collected into a
    /// single [`CatalogError::InvalidEntries`] so the caller can report the
    /// full list and abort startup.
    pub fn from_entries(entries: &[(&str, &str)]) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        let mut failures: Vec<(String, Box<CatalogError>)> = Vec::new();

        for (name, url_str) in entries {
            match Resource::new(*name, url_str) {
                Ok(resource) => {
                    if map.contains_key(resource.name()) {
                        failures.push((
                            name.to_string(),
                            Box::new(CatalogError::DuplicateName {
                                name: name.to_string(),
                            }),
                        ));
                    } else {
                        map.insert(resource.name().to_string(), resource);
                    }
                }
                Err(err) => failures.push((name.to_string(), Box::new(err))),
            }
        }

        if !failures.is_empty() {
            return Err(CatalogError::InvalidEntries { failures });
        }
        Ok(Self { entries: map })
    }

    /// The builtin set of ontology/annotation files biodl ships with.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(builtin::BUILTIN_ENTRIES)
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
