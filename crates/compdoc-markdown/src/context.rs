//! Per-render emission context.

use crate::sink::RenderSink;

/// Current heading level plus the sink output goes to.
///
/// Every token is written as its own chunk followed by a space; line breaks
/// are separate `"\n"` chunks.
pub(crate) struct RenderContext<'s> {
    level: u8,
    sink: &'s mut dyn RenderSink,
}

impl<'s> RenderContext<'s> {
    pub(crate) fn new(level: u8, sink: &'s mut dyn RenderSink) -> Self {
        Self { level, sink }
    }

    pub(crate) fn level(&self) -> u8 {
        self.level
    }

    /// Nest subsequent headings one level deeper.
    pub(crate) fn descend(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    pub(crate) fn print(&mut self, tokens: &[&str]) {
        for token in tokens {
            self.sink.write(format!("{token} "));
        }
    }

    pub(crate) fn println(&mut self, tokens: &[&str]) {
        self.print(tokens);
        self.sink.write("\n".to_owned());
    }

    pub(crate) fn blank_line(&mut self) {
        self.println(&[]);
    }

    pub(crate) fn end(&mut self) {
        self.sink.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_appends_space_per_token() {
        let mut chunks: Vec<String> = Vec::new();
        let mut ctx = RenderContext::new(1, &mut chunks);

        ctx.print(&["a", "b"]);

        assert_eq!(chunks, vec!["a ".to_owned(), "b ".to_owned()]);
    }

    #[test]
    fn test_println_terminates_line() {
        let mut out = String::new();
        let mut ctx = RenderContext::new(1, &mut out);

        ctx.println(&["# Btn"]);
        ctx.blank_line();

        assert_eq!(out, "# Btn \n\n");
    }

    #[test]
    fn test_descend() {
        let mut out = String::new();
        let mut ctx = RenderContext::new(2, &mut out);

        ctx.descend();
        assert_eq!(ctx.level(), 3);
    }

    #[test]
    fn test_descend_saturates() {
        let mut out = String::new();
        let mut ctx = RenderContext::new(u8::MAX, &mut out);

        ctx.descend();
        assert_eq!(ctx.level(), u8::MAX);
    }
}
