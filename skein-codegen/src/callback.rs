//! Remote call sites: headers, request body, and the continuation to run
//! when the operation completes.

use indexmap::IndexMap;

use crate::{Emitter, Error};

pub(crate) type Continue<'a> = Box<dyn FnOnce(&mut Emitter) -> Result<(), Error> + 'a>;
pub(crate) type ContinueWithResponse<'a> =
    Box<dyn FnOnce(&mut Emitter, &str) -> Result<(), Error> + 'a>;

pub(crate) enum OnReady<'a> {
    Ignoring(Continue<'a>),
    WithResponse(ContinueWithResponse<'a>),
}

/// One remote call site: an optional request-body expression, request
/// headers in declaration order, and exactly one continuation.
///
/// The continuation either ignores the response
/// ([`Callback::ignoring_response`]) or receives the textual expression for
/// the request handle's response payload ([`Callback::with_response`]), so
/// every reference to its bound parameter is the substituted expression.
pub struct Callback<'a> {
    body: String,
    headers: IndexMap<String, String>,
    on_ready: OnReady<'a>,
}

impl<'a> Callback<'a> {
    /// Call site whose continuation runs without looking at the response.
    /// An empty `body` expression renders as an absent send argument.
    pub fn ignoring_response(
        body: impl Into<String>,
        run: impl FnOnce(&mut Emitter) -> Result<(), Error> + 'a,
    ) -> Self {
        Self {
            body: body.into(),
            headers: IndexMap::new(),
            on_ready: OnReady::Ignoring(Box::new(run)),
        }
    }

    /// Call site whose continuation receives the response-payload
    /// expression as its second argument.
    pub fn with_response(
        body: impl Into<String>,
        run: impl FnOnce(&mut Emitter, &str) -> Result<(), Error> + 'a,
    ) -> Self {
        Self {
            body: body.into(),
            headers: IndexMap::new(),
            on_ready: OnReady::WithResponse(Box::new(run)),
        }
    }

    /// Add a request header. `name` is escaped as a literal at emission
    /// time; `value` is an expression fragment emitted verbatim. Headers
    /// keep declaration order.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub(crate) fn into_parts(self) -> (String, IndexMap<String, String>, OnReady<'a>) {
        (self.body, self.headers, self.on_ready)
    }
}

impl OnReady<'_> {
    pub(crate) fn run(self, out: &mut Emitter, handle: &str) -> Result<(), Error> {
        match self {
            OnReady::Ignoring(run) => run(out),
            OnReady::WithResponse(run) => run(out, &format!("{handle}.responseText")),
        }
    }
}
