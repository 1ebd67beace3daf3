//! URL templates shared between routing and script generation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// A URL path template parsed from a `:name` route pattern.
///
/// Each path segment is either literal text or a named parameter. The same
/// template renders back to the `:name` form for a server-side router, or
/// expands against a base URL with one caller-supplied expression fragment
/// per parameter for script generation.
///
/// # Example
///
/// ```
/// use skein_api::UrlTemplate;
///
/// let template = UrlTemplate::parse("/item/:id/comment");
/// assert_eq!(template.route(), "/item/:id/comment");
/// assert_eq!(
///     template.expand("https://gallery.example", &["${id}"]).unwrap(),
///     "https://gallery.example/item/${id}/comment",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl UrlTemplate {
    /// Parse a route pattern. Segments starting with `:` become parameters.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Literal(segment.to_owned()),
            })
            .collect();
        Self { segments }
    }

    /// Render the `:name` pattern consumed by a server-side router.
    pub fn route(&self) -> String {
        let mut pattern = String::new();
        for segment in &self.segments {
            pattern.push('/');
            match segment {
                Segment::Literal(text) => pattern.push_str(text),
                Segment::Param(name) => {
                    pattern.push(':');
                    pattern.push_str(name);
                }
            }
        }
        pattern
    }

    /// Ordered parameter names.
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute one expression fragment per parameter, in order, appended
    /// to `base`. Fragments are inserted verbatim; they are target-language
    /// expressions, not data.
    pub fn expand(&self, base: &str, args: &[&str]) -> Result<String, Error> {
        let expected = self.params().len();
        if args.len() != expected {
            return Err(Error::ArityMismatch {
                expected,
                got: args.len(),
            });
        }
        let mut url = base.to_owned();
        let mut args = args.iter();
        for segment in &self.segments {
            url.push('/');
            match segment {
                Segment::Literal(text) => url.push_str(text),
                // args and params are in lockstep, checked above
                Segment::Param(_) => url.push_str(args.next().copied().unwrap_or_default()),
            }
        }
        Ok(url)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

impl Serialize for UrlTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.route())
    }
}

impl<'de> Deserialize<'de> for UrlTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        Ok(Self::parse(&pattern))
    }
}
