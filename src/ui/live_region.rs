use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// A single terminal line redrawn in place
#[derive(Debug, Default)]
pub struct StatusLine {
    drawn: bool,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.write_all(content.as_bytes())?;
        out.flush()?;
        self.drawn = true;
        Ok(())
    }

    /// Erase the line so regular output can follow
    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.drawn {
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            out.flush()?;
            self.drawn = false;
        }
        Ok(())
    }
}
