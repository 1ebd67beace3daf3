//! Access-token administration script.

use skein_codegen::{Callback, Emitter, Error, ScriptSource};

/// Validates or deletes an access token from the token-list page.
///
/// Both operations are fire-and-forget from the page's point of view: the
/// continuation only signals completion.
pub struct TokenValidation;

impl ScriptSource for TokenValidation {
    fn build(&self, out: &mut Emitter) -> Result<(), Error> {
        out.function("validateToken", |out| {
            let name = out.param("name")?;
            let id = out.param("id")?;
            let callback = out.param("callback")?;
            out.call_operation(
                "validateToken",
                &[&format!("${{{name}}}"), &format!("${{{id}}}")],
                Callback::ignoring_response("", move |out| {
                    out.line(&format!("{callback}();"));
                    Ok(())
                }),
            )
        })?;
        out.function("deleteToken", |out| {
            let name = out.param("name")?;
            let id = out.param("id")?;
            let callback = out.param("callback")?;
            out.call_operation(
                "deleteToken",
                &[&format!("${{{name}}}"), &format!("${{{id}}}")],
                Callback::ignoring_response("", move |out| {
                    out.line(&format!("{callback}();"));
                    Ok(())
                }),
            )
        })?;
        Ok(())
    }
}
