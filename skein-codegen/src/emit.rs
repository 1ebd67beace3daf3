//! The generation context threaded through every nested builder call.

use skein_api::{Api, Verb};

use crate::{
    Callback, Error,
    escape::js_string,
    scope::{ScopeId, Scopes},
    sink::{Indent, Sink},
};

/// State of one function currently being built.
#[derive(Debug)]
struct Frame {
    scope: ScopeId,
    params: Vec<String>,
}

/// The generation context: scope arena, active scope, sink stack and open
/// functions.
///
/// One `Emitter` exists per build pass, created by
/// [`Program`](crate::Program) and threaded `&mut` through every nested
/// call. Only one scope and one sink are active at any instant; nesting is
/// realised by save/restore around each nested construct.
#[derive(Debug)]
pub struct Emitter {
    api: Api,
    scopes: Scopes,
    current_scope: ScopeId,
    /// Active sink last; the root sink stays at the bottom for the whole pass.
    sinks: Vec<Sink>,
    /// Open functions, innermost last.
    functions: Vec<Frame>,
}

impl Emitter {
    /// Fresh context over `api`, with a root scope and an empty root sink.
    pub fn new(api: Api) -> Self {
        let mut scopes = Scopes::new();
        let root = scopes.open(None);
        Self {
            api,
            scopes,
            current_scope: root,
            sinks: vec![Sink::new(Indent::SCRIPT)],
            functions: Vec::new(),
        }
    }

    /// The API description the script is generated against.
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Append one line to the active sink at the current depth.
    pub fn line(&mut self, text: &str) {
        if let Some(sink) = self.sinks.last_mut() {
            sink.line(text);
        }
    }

    /// Run `f` one indent level deeper in the active sink; the depth is
    /// restored on both success and error return paths.
    pub fn indented<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if let Some(sink) = self.sinks.last_mut() {
            sink.push_indent();
        }
        let result = f(self);
        if let Some(sink) = self.sinks.last_mut() {
            sink.pop_indent();
        }
        result
    }

    /// Run `producer` against a fresh sink and return everything it wrote
    /// as one block, for the caller to splice wherever needed.
    ///
    /// The fresh sink inherits the current depth, becomes the active sink
    /// for the duration of `producer`, and the previous sink is restored on
    /// both success and error return paths. This is the mechanism that lets
    /// a function's parameter list, discovered only by running its body, be
    /// placed before content whose production came first.
    pub fn with_nested_sink(
        &mut self,
        producer: impl FnOnce(&mut Self) -> Result<(), Error>,
    ) -> Result<String, Error> {
        let (unit, depth) = match self.sinks.last() {
            Some(sink) => (sink.unit(), sink.depth()),
            None => (Indent::SCRIPT, 0),
        };
        self.sinks.push(Sink::at_depth(unit, depth));
        let produced = producer(self);
        let nested = self.sinks.pop();
        produced?;
        Ok(nested.map(Sink::into_text).unwrap_or_default())
    }

    /// Current partial content of the active sink.
    ///
    /// Deliberate introspection affordance: a build routine may look at
    /// what it has emitted so far, and the owning program's text accessor
    /// reports this while a pass is in progress.
    pub fn preview(&self) -> &str {
        self.sinks.last().map(Sink::as_str).unwrap_or_default()
    }

    /// Consume the context, returning the root sink's content.
    pub(crate) fn into_text(mut self) -> String {
        match self.sinks.drain(..).next() {
            Some(root) => root.into_text(),
            None => String::new(),
        }
    }

    /// Declare a local binding: reserves a fresh name derived from `base`
    /// in the active scope, emits `let <name>=<value>;` and returns the
    /// name. `value` is an expression fragment emitted verbatim.
    pub fn let_binding(&mut self, base: &str, value: &str) -> String {
        let name = self.scopes.fresh_name(self.current_scope, base);
        self.line(&format!("let {name}={value};"));
        name
    }

    /// Emit a named function whose body is produced by `body`.
    ///
    /// The function's name is reserved in the scope active before opening;
    /// its body runs against a child scope and a nested sink, one indent
    /// level deeper. Parameters declared by [`Emitter::param`] during the
    /// body surface in the signature line, which is only written once the
    /// body has fully run. Returns the hygienic function name. Nesting is
    /// unbounded.
    pub fn function(
        &mut self,
        base: &str,
        body: impl FnOnce(&mut Self) -> Result<(), Error>,
    ) -> Result<String, Error> {
        let name = self.scopes.fresh_name(self.current_scope, base);
        let scope = self.scopes.open(Some(self.current_scope));
        let outer_scope = std::mem::replace(&mut self.current_scope, scope);
        self.functions.push(Frame {
            scope,
            params: Vec::new(),
        });

        let body_block = self.with_nested_sink(|out| out.indented(body));

        self.current_scope = outer_scope;
        let params = match self.functions.pop() {
            Some(frame) => frame.params,
            None => Vec::new(),
        };
        let body_block = body_block?;

        self.line(&format!("function {name}({}) {{", params.join(", ")));
        if let Some(sink) = self.sinks.last_mut() {
            sink.splice(&body_block);
        }
        self.line("}");
        Ok(name)
    }

    /// Declare a parameter of the innermost open function: reserves a fresh
    /// name in the function's own scope and appends it to the parameter
    /// list, in call order.
    ///
    /// Calling this with no function open is a usage-contract violation and
    /// aborts the pass.
    pub fn param(&mut self, base: &str) -> Result<String, Error> {
        let frame = self
            .functions
            .last_mut()
            .ok_or_else(|| Error::ParamOutsideFunction {
                base: base.to_owned(),
            })?;
        let name = self.scopes.fresh_name(frame.scope, base);
        frame.params.push(name.clone());
        Ok(name)
    }

    /// Emit one asynchronous remote call.
    ///
    /// In order: the request-handle construction, a ready-state guard block
    /// running the continuation one indent level deeper, the request-open
    /// statement, one header-set statement per declared header, and the
    /// dispatch statement. The URL may embed live expression fragments and
    /// is emitted verbatim inside a template literal.
    pub fn remote_call(
        &mut self,
        verb: Verb,
        url: &str,
        callback: Callback<'_>,
    ) -> Result<(), Error> {
        let (body, headers, on_ready) = callback.into_parts();
        let req = self.let_binding("req", "new XMLHttpRequest()");
        self.line(&format!("{req}.onreadystatechange = () => {{"));
        self.indented(|out| {
            out.line(&format!("if ({req}.readyState != 4) return;"));
            on_ready.run(out, &req)
        })?;
        self.line("};");
        self.line(&format!("{req}.open({}, `{url}`);", js_string(verb.as_str())));
        for (name, value) in &headers {
            self.line(&format!("{req}.setRequestHeader({},{value});", js_string(name)));
        }
        self.line(&format!("{req}.send({body});"));
        Ok(())
    }

    /// Emit a remote call to a named API operation, expanding its URL
    /// template against the API base URL with one expression fragment per
    /// parameter.
    pub fn call_operation(
        &mut self,
        name: &str,
        args: &[&str],
        callback: Callback<'_>,
    ) -> Result<(), Error> {
        let operation = self
            .api
            .get(name)
            .ok_or_else(|| Error::UnknownOperation {
                name: name.to_owned(),
            })?
            .clone();
        let url = operation.url(self.api.base_url(), args)?;
        self.remote_call(operation.verb, &url, callback)
    }
}
