//! Catalog construction errors.

use thiserror::Error;

/// Failure constructing a [`Resource`](super::Resource) or a whole catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Resource name was empty or whitespace.
    #[error("resource name must not be empty")]
    EmptyName,

    /// Resource URL string was empty.
    #[error("resource {name:?} has an empty URL")]
    EmptyUrl { name: String },

    /// Resource URL string did not parse.
    #[error("malformed URL {input:?}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Two catalog entries share the same name.
    #[error("duplicate resource name {name:?}")]
    DuplicateName { name: String },

    /// One or more catalog entries failed validation. Carries every failure
    /// so startup can report them all at once instead of dying on the first.
    #[error("invalid catalog entries: {}", describe_failures(.failures))]
    InvalidEntries {
        failures: Vec<(String, Box<CatalogError>)>,
    },
}

fn describe_failures(failures: &[(String, Box<CatalogError>)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("{name}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}
