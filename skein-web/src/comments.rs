//! Comment-submission script.

use skein_codegen::{Callback, Emitter, Error, ScriptSource, json_object};

use crate::csrf;

/// Posts a comment on an item and hands the server's timestamp back to the
/// page.
///
/// Emits one `postComment(id, author, text, callback)` function; the
/// request carries a JSON body and the CSRF header, and the continuation
/// forwards the response payload to `callback`.
pub struct CommentSubmission;

impl ScriptSource for CommentSubmission {
    fn build(&self, out: &mut Emitter) -> Result<(), Error> {
        out.function("postComment", |out| {
            let id = out.param("id")?;
            let author = out.param("author")?;
            let text = out.param("text")?;
            let callback = out.param("callback")?;
            out.call_operation(
                "postComment",
                &[&format!("${{{id}}}")],
                Callback::with_response(
                    json_object([("author", author.as_str()), ("text", text.as_str())]),
                    move |out, response| {
                        out.line(&format!("{callback}({response})"));
                        Ok(())
                    },
                )
                .with_header(csrf::HEADER, csrf::cookie_token()),
            )
        })?;
        Ok(())
    }
}
