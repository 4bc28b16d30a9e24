use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use unicode_width::UnicodeWidthChar;

use crate::document::NodeId;
use crate::layout::Row;

/// Raw-mode terminal on the alternate screen with mouse capture.
///
/// The previous terminal state is restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Clear the screen and print `rows`, drawing `highlighted` in reverse video.
    pub fn draw(&mut self, rows: &[Row], highlighted: Option<NodeId>) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        for row in rows.iter().filter(|r| r.y < height && r.x < width) {
            let text = clip_to_width(&row.text, width - row.x);

            queue!(self.stdout, cursor::MoveTo(row.x, row.y))?;
            if highlighted == Some(row.node) {
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.stdout, Print(text))?;
            }
        }

        self.stdout.flush()
    }
}

/// Longest prefix of `text` that fits in `columns` display columns.
pub fn clip_to_width(text: &str, columns: u16) -> &str {
    let mut used = 0;
    for (i, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > usize::from(columns) {
            return &text[..i];
        }
    }
    text
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_counts_columns_not_chars() {
        assert_eq!(clip_to_width("Menu", 10), "Menu");
        assert_eq!(clip_to_width("Menu", 2), "Me");
        // Each CJK glyph is two columns wide
        assert_eq!(clip_to_width("メニュー", 5), "メニ");
        assert_eq!(clip_to_width("メニュー", 1), "");
        assert_eq!(clip_to_width("", 0), "");
    }
}
