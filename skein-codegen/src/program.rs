//! Build-pass driver and the script-source contract.

use skein_api::Api;

use crate::{Emitter, Error};

/// A construction routine producing one script artifact.
///
/// Implementations drive the [`Emitter`], opening functions, declaring
/// parameters and issuing remote calls, and declare the file extension an
/// external static-resource server should attach when serving the artifact.
pub trait ScriptSource {
    /// Run one build pass against `out`.
    fn build(&self, out: &mut Emitter) -> Result<(), Error>;

    /// File extension tag for the generated artifact.
    fn extension(&self) -> &'static str {
        "js"
    }
}

/// Drives one build pass over a [`ScriptSource`] and memoizes the result.
///
/// The pass moves through three states: not started, in progress and done.
/// The first call to [`Program::text`] runs the source's build routine
/// against a fresh [`Emitter`]; its normal return caches the final text,
/// and every later call returns the identical cached text with no further
/// computation. If the accessor is reached again while the pass is still in
/// progress it returns the current partial content of the active sink; this
/// is a deliberate introspection affordance, not an error. A failed pass
/// discards all partial state and returns the program to its not-started
/// state.
pub struct Program<S> {
    api: Api,
    source: S,
    emitter: Option<Emitter>,
    text: Option<String>,
}

impl<S: ScriptSource> Program<S> {
    /// New program over `api`; nothing is generated until the first call to
    /// [`Program::text`].
    pub fn new(api: Api, source: S) -> Self {
        Self {
            api,
            source,
            emitter: None,
            text: None,
        }
    }

    /// The generated artifact, newline-terminated.
    pub fn text(&mut self) -> Result<String, Error> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(emitter) = &self.emitter {
            // Build pass in progress: report what the active sink holds so
            // far instead of re-entering the build routine.
            return Ok(emitter.preview().to_owned());
        }
        let emitter = self.emitter.insert(Emitter::new(self.api.clone()));
        let built = self.source.build(emitter);
        let emitter = self.emitter.take();
        match built {
            Ok(()) => {
                let text = emitter.map(Emitter::into_text).unwrap_or_default();
                self.text = Some(text.clone());
                Ok(text)
            }
            Err(err) => Err(err),
        }
    }

    /// File extension tag declared by the source.
    pub fn extension(&self) -> &'static str {
        self.source.extension()
    }
}
