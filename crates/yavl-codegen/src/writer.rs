//! Auto-indenting line writer for generated source.

use std::io::{self, Write};

/// Writes lines of code, indenting after a line that ends with an opening
/// bracket and dedenting before a line that starts with a closing one.
pub struct CodeWriter<W: Write = Vec<u8>> {
    out: W,
    level: usize,
    width: usize,
}

impl CodeWriter<Vec<u8>> {
    /// A writer that renders into memory.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }
}

impl<W: Write> CodeWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            level: 0,
            width: 4,
        }
    }

    /// Write one line. Leading and trailing whitespace of `text` is ignored.
    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return self.blank();
        }
        if text.starts_with(['}', ')', ']']) {
            self.dedent();
        }
        writeln!(self.out, "{:indent$}{}", "", text, indent = self.level * self.width)?;
        if text.ends_with(['{', '(', '[']) {
            self.indent();
        }
        Ok(())
    }

    /// Write every line of a multi-line block.
    pub fn lines(&mut self, block: &str) -> io::Result<()> {
        block.lines().try_for_each(|line| self.line(line))
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut CodeWriter) -> io::Result<()>) -> String {
        let mut w = CodeWriter::buffer();
        f(&mut w).unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn test_bracket_indentation() {
        let text = render(|w| {
            w.line("fn f() {")?;
            w.line("match x {")?;
            w.line("1 => a(),")?;
            w.line("}")?;
            w.line("}")
        });
        assert_eq!(text, "fn f() {\n    match x {\n        1 => a(),\n    }\n}\n");
    }

    #[test]
    fn test_close_then_open_on_one_line() {
        let text = render(|w| w.lines("if a {\nb\n} else {\nc\n}"));
        assert_eq!(text, "if a {\n    b\n} else {\n    c\n}\n");
    }

    #[test]
    fn test_blank_lines_have_no_indent() {
        let text = render(|w| {
            w.line("{")?;
            w.line("")?;
            w.line("}")
        });
        assert_eq!(text, "{\n\n}\n");
    }

    #[test]
    fn test_unbalanced_close_saturates() {
        let mut w = CodeWriter::buffer();
        w.line("}").unwrap();
        assert_eq!(w.level(), 0);
    }
}
