//! Gallery browser scripts generated with the Skein codegen core.
//!
//! Each module defines one script artifact as a
//! [`ScriptSource`](skein_codegen::ScriptSource): the asynchronous glue a
//! gallery page needs to talk to the remote API without blocking. A serving
//! layer wraps a source in a [`Program`](skein_codegen::Program) together
//! with [`gallery_api`] and exposes the resulting text under the declared
//! extension.

mod api;
mod comments;
mod editor;
mod tokens;

pub mod csrf;

pub use api::gallery_api;
pub use comments::CommentSubmission;
pub use editor::EditorSubmission;
pub use tokens::TokenValidation;
