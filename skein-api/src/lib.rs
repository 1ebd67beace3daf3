//! Remote API descriptor types for the Skein script generator.
//!
//! This crate provides the declarative description of a remote HTTP API that
//! the rest of the Skein ecosystem consumes. The same description serves two
//! masters:
//!
//! - a server-side router, through [`UrlTemplate::route`], which renders the
//!   `:name` pattern the routing layer expects;
//! - the browser-script generator in `skein-codegen`, through
//!   [`UrlTemplate::expand`], which interpolates caller-supplied expression
//!   fragments onto the API base URL.
//!
//! The types are deliberately self-contained and serde-derived so an outer
//! manifest layer can load an API description from configuration.

mod error;
mod operation;
mod url;
mod verb;

pub use error::Error;
pub use operation::{Api, Operation};
pub use url::UrlTemplate;
pub use verb::Verb;
