//! Terminal rendering for agenda output
//!
//! Core views are produced as light markdown (`##` headers, numbered lists).
//! This module prints them through termimad, or verbatim when color is off.

use termimad::{
    crossterm::style::{Color, StyledContent, Stylize},
    MadSkin,
};

use agenda_core::OperationStatus;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Grey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Render a success or failure line, colored green or red.
    pub fn render_status(&self, status: &OperationStatus) {
        let text = status.to_string();
        if !self.rich_enabled {
            print!("{text}");
            return;
        }
        for line in text.lines() {
            println!("{}", Self::status_line(line, status));
        }
    }

    fn status_line<'a>(line: &'a str, status: &OperationStatus) -> StyledContent<&'a str> {
        line.with(if status.success { Color::Green } else { Color::Red })
    }

    #[cfg(test)]
    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.is_rich());
    }

    #[test]
    fn test_status_line_colors() {
        let ok = OperationStatus::success("saved".to_string());
        let failed = OperationStatus::failure("Nothing to undo".to_string());

        let line = TerminalRenderer::status_line("Success: saved", &ok);
        assert_eq!(line.style().foreground_color, Some(Color::Green));
        assert_eq!(*line.content(), "Success: saved");
        assert_eq!(
            TerminalRenderer::status_line("Error: Nothing to undo", &failed)
                .style()
                .foreground_color,
            Some(Color::Red)
        );
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().is_rich());
    }
}
