//! Remote operation descriptors.

use serde::{Deserialize, Serialize};

use crate::{Error, UrlTemplate, Verb};

/// One remote operation: name, HTTP verb, URL template and whether dispatch
/// carries a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name, used to look the descriptor up at a call site.
    pub name: String,
    /// HTTP method.
    pub verb: Verb,
    /// URL path template.
    pub template: UrlTemplate,
    /// Whether the operation reads a request body. Descriptor metadata for
    /// the serving layer; the generator does not cross-check it against the
    /// call site.
    #[serde(default)]
    pub has_body: bool,
}

impl Operation {
    /// Create a bodyless operation from a route pattern.
    pub fn new(name: impl Into<String>, verb: Verb, pattern: &str) -> Self {
        Self {
            name: name.into(),
            verb,
            template: UrlTemplate::parse(pattern),
            has_body: false,
        }
    }

    /// Mark the operation as carrying a request body.
    pub fn with_body(mut self) -> Self {
        self.has_body = true;
        self
    }

    /// Expand the operation's URL against a base URL with one expression
    /// fragment per template parameter.
    pub fn url(&self, base: &str, args: &[&str]) -> Result<String, Error> {
        self.template.expand(base, args)
    }
}

/// A remote API: base URL plus an ordered collection of operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    base_url: String,
    operations: Vec<Operation>,
}

impl Api {
    /// Create an empty API rooted at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            operations: Vec::new(),
        }
    }

    /// Append an operation, preserving declaration order.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Base URL the templates expand against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Iterate operations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }
}
