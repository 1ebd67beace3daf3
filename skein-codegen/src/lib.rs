//! Hygienic browser-script generator for remote API calls.
//!
//! This crate turns a declarative description of a remote API (see
//! `skein-api`) plus an ordered sequence of builder calls into a text blob
//! of browser script that performs those calls asynchronously. The build
//! pass itself is synchronous and single-threaded; only the *output*
//! encodes asynchronous behavior.
//!
//! # Module Organization
//!
//! - [`Scopes`] - lexical scope chain with hygienic fresh-name allocation
//! - [`Sink`] - indentation-aware line buffer with nested splice composition
//! - [`Emitter`] - the generation context: functions, parameters, remote calls
//! - [`Callback`] - one remote call site's headers, body and continuation
//! - [`Program`] - memoizing driver over a [`ScriptSource`]
//! - [`js_string`] / [`json_object`] - literal escaping and JSON body fragments
//!
//! # Example
//!
//! ```
//! use skein_api::{Api, Operation, Verb};
//! use skein_codegen::{Callback, Emitter, Error, Program, ScriptSource};
//!
//! struct Ping;
//!
//! impl ScriptSource for Ping {
//!     fn build(&self, out: &mut Emitter) -> Result<(), Error> {
//!         out.function("ping", |out| {
//!             let callback = out.param("callback")?;
//!             out.call_operation(
//!                 "ping",
//!                 &[],
//!                 Callback::ignoring_response("", move |out| {
//!                     out.line(&format!("{callback}();"));
//!                     Ok(())
//!                 }),
//!             )
//!         })?;
//!         Ok(())
//!     }
//! }
//!
//! let api = Api::new("").operation(Operation::new("ping", Verb::Get, "/ping"));
//! let mut program = Program::new(api, Ping);
//! let text = program.text().unwrap();
//! assert!(text.starts_with("function ping(callback) {"));
//! ```

mod callback;
mod emit;
mod error;
mod escape;
mod program;
mod scope;
mod sink;

pub use callback::Callback;
pub use emit::Emitter;
pub use error::Error;
pub use escape::{js_string, json_object};
pub use program::{Program, ScriptSource};
pub use scope::{ScopeId, Scopes};
pub use sink::{Indent, Sink};
