//! Indentation-aware output buffer.

/// Indentation unit for generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the browser-script default.
    pub const SCRIPT: Self = Self::Spaces(2);

    /// One indent level as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SCRIPT
    }
}

/// An ordered sequence of text lines, each written at the indentation depth
/// current when it was appended.
///
/// Raw depth changes are private: a nested block runs under [`Sink::indented`],
/// which restores the depth on both success and error return paths. Fully
/// rendered nested blocks re-enter a parent sink through [`Sink::splice`].
#[derive(Debug)]
pub struct Sink {
    unit: Indent,
    depth: usize,
    buffer: String,
}

impl Sink {
    /// Empty sink at depth zero.
    pub fn new(unit: Indent) -> Self {
        Self::at_depth(unit, 0)
    }

    /// Empty sink starting at `depth`, for nested composition.
    pub fn at_depth(unit: Indent, depth: usize) -> Self {
        Self {
            unit,
            depth,
            buffer: String::new(),
        }
    }

    /// Append one line at the current depth.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.unit.as_str());
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append an already-rendered block verbatim, as one unit.
    pub fn splice(&mut self, block: &str) {
        self.buffer.push_str(block);
    }

    /// Run `f` one indent level deeper; the previous depth is restored even
    /// if `f` returns an error.
    pub fn indented<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn push_indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn pop_indent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Indentation unit.
    pub fn unit(&self) -> Indent {
        self.unit
    }

    /// Everything written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the sink, returning its content.
    pub fn into_text(self) -> String {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_prefixes_depth() {
        let mut sink = Sink::new(Indent::SCRIPT);
        sink.line("a;");
        sink.indented::<_, ()>(|sink| {
            sink.line("b;");
            Ok(())
        })
        .unwrap();
        sink.line("c;");
        assert_eq!(sink.as_str(), "a;\n  b;\nc;\n");
    }

    #[test]
    fn test_depth_restored_on_error() {
        let mut sink = Sink::new(Indent::SCRIPT);
        let result: Result<(), &str> = sink.indented(|sink| {
            sink.line("inner;");
            Err("boom")
        });
        assert!(result.is_err());
        assert_eq!(sink.depth(), 0);
    }

    #[test]
    fn test_nested_sink_inherits_depth() {
        let mut outer = Sink::new(Indent::SCRIPT);
        outer.push_indent();
        let mut nested = Sink::at_depth(outer.unit(), outer.depth());
        nested.line("x;");
        outer.splice(nested.as_str());
        outer.pop_indent();
        assert_eq!(outer.as_str(), "  x;\n");
    }

    #[test]
    fn test_splice_is_verbatim() {
        let mut sink = Sink::new(Indent::SCRIPT);
        sink.push_indent();
        sink.splice("already rendered\n");
        sink.pop_indent();
        assert_eq!(sink.as_str(), "already rendered\n");
    }

    #[test]
    fn test_tab_unit() {
        let mut sink = Sink::new(Indent::Tab);
        sink.push_indent();
        sink.line("x;");
        sink.pop_indent();
        assert_eq!(sink.as_str(), "\tx;\n");
    }
}
