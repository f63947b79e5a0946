//! Markdown output for the terminal.
//!
//! Rich mode styles headers, bold names and the full-week warning with
//! termimad; plain mode prints the markdown untouched so it stays greppable.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    warning_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::White);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut warning_skin = MadSkin::default();
        warning_skin.paragraph.set_fg(Color::Yellow);
        warning_skin.bold.set_fg(Color::Yellow);

        Self {
            rich_enabled,
            skin,
            warning_skin,
        }
    }

    /// Prints `markdown`, line by line in rich mode.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if let Some(header) = line.strip_prefix("# ") {
                println!("\x1b[1;36m{header}\x1b[0m");
            } else if let Some(warning) = line.strip_prefix("> ") {
                self.warning_skin.print_inline(warning);
                println!();
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
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
    fn test_no_color_disables_rich_output() {
        assert!(!TerminalRenderer::new(false).rich_enabled);
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_plain_render_succeeds() {
        TerminalRenderer::new(false).render("# Title\n").unwrap();
    }
}
