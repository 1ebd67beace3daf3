//! Item-editor submission script.

use skein_codegen::{Callback, Emitter, Error, ScriptSource, json_object};

/// Saves a single item's description, or applies a tag specification to a
/// whole selection at once.
pub struct EditorSubmission;

impl ScriptSource for EditorSubmission {
    fn build(&self, out: &mut Emitter) -> Result<(), Error> {
        out.function("saveDescription", |out| {
            let id = out.param("id")?;
            let description = out.param("description")?;
            let callback = out.param("callback")?;
            out.call_operation(
                "setItemDescription",
                &[&format!("${{{id}}}")],
                Callback::ignoring_response(description, move |out| {
                    out.line(&format!("{callback}();"));
                    Ok(())
                }),
            )
        })?;
        out.function("submitMassTagging", |out| {
            let ids = out.param("ids")?;
            let tag_spec = out.param("tagSpec")?;
            let callback = out.param("callback")?;
            out.call_operation(
                "massTags",
                &[],
                Callback::ignoring_response(
                    json_object([("ids", ids.as_str()), ("tags", tag_spec.as_str())]),
                    move |out| {
                        out.line(&format!("{callback}();"));
                        Ok(())
                    },
                ),
            )
        })?;
        Ok(())
    }
}
