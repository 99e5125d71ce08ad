//! Inline frame repaint.
//!
//! The app renders inline in the scrollback rather than on an alternate
//! screen: each repaint moves the cursor back to the top of the previously
//! painted block, rewrites it, and erases any leftover tail. Repaints are
//! wrapped in a synchronized-update guard so terminals that support it
//! present each frame atomically.

use std::io::{self, Write};

pub struct InlineRenderer {
    painted_rows: usize,
}

impl InlineRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self { painted_rows: 0 }
    }

    /// Paint `lines` over the previous frame.
    pub fn render(&mut self, lines: &[String], out: &mut impl Write) -> io::Result<()> {
        let mut buffer = String::new();
        buffer.push_str("\x1b[?2026h");
        if self.painted_rows > 0 {
            buffer.push_str(&format!("\x1b[{}A", self.painted_rows));
        }
        buffer.push('\r');
        for line in lines {
            // Clear each row before writing so shorter lines don't keep stale
            // tails from the previous frame.
            buffer.push_str("\x1b[2K");
            buffer.push_str(line);
            buffer.push_str("\r\n");
        }
        buffer.push_str("\x1b[0J");
        buffer.push_str("\x1b[?2026l");

        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        self.painted_rows = lines.len();
        Ok(())
    }

    /// Forget the painted block, leaving it in the scrollback. The next
    /// render starts a fresh block below.
    pub fn release(&mut self) {
        self.painted_rows = 0;
    }

    #[must_use]
    pub fn painted_rows(&self) -> usize {
        self.painted_rows
    }
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::InlineRenderer;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn first_render_does_not_move_the_cursor_up() {
        let mut renderer = InlineRenderer::new();
        let mut out = Vec::new();
        renderer.render(&lines(&["a", "b"]), &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(!written.contains("\x1b[2A"));
        assert!(written.contains("a\r\n"));
        assert_eq!(renderer.painted_rows(), 2);
    }

    #[test]
    fn second_render_rewinds_over_the_previous_frame() {
        let mut renderer = InlineRenderer::new();
        let mut out = Vec::new();
        renderer.render(&lines(&["a", "b", "c"]), &mut out).unwrap();

        out.clear();
        renderer.render(&lines(&["d"]), &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[3A"));
        // The shrunken frame erases the rows it no longer covers.
        assert!(written.contains("\x1b[0J"));
        assert_eq!(renderer.painted_rows(), 1);
    }

    #[test]
    fn release_starts_a_fresh_block() {
        let mut renderer = InlineRenderer::new();
        let mut out = Vec::new();
        renderer.render(&lines(&["a"]), &mut out).unwrap();
        renderer.release();

        out.clear();
        renderer.render(&lines(&["b"]), &mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(!written.contains("\x1b[1A"));
    }
}
