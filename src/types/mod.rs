//! Public data model for decomposed URIs.

pub mod uri;

pub use uri::{ParsedUri, UriPath, UriQuery};
