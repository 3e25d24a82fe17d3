//! Drawing the widget

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::{platform::terminal::WINDOW_TITLE, state::IntervalPreset, tasks::flash::TitleColor};

/// Everything shown by the widget at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title_color: TitleColor,
    pub clock: String,
    pub counter: String,
    pub interval: String,
    pub paused: bool,
    pub menu_open: bool,
}

impl Frame {
    /// Plain-text rendering without colours
    pub fn text(&self) -> String {
        let mut line = format!(
            "[{}] {}  {}  {}",
            WINDOW_TITLE, self.clock, self.counter, self.interval
        );
        if self.paused {
            line.push_str("  (paused)");
        }
        if self.menu_open {
            line.push_str("  ");
            line.push_str(&menu_text());
        }
        line
    }
}

fn menu_text() -> String {
    let entries: Vec<String> = IntervalPreset::ALL
        .iter()
        .enumerate()
        .map(|(i, preset)| format!("{}) {}", i, preset.label()))
        .collect();
    format!("Interval: {}", entries.join(" | "))
}

/// Output surface of the shell
pub trait Render {
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Leave the surface in a clean state once the widget closes
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Redraws a single status line in place
pub struct TerminalRenderer<W: Write> {
    out: W,
    last: Option<Frame>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }

        let (r, g, b) = frame.title_color.rgb();
        let (fr, fg, fb) = frame.title_color.foreground();
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetBackgroundColor(Color::Rgb { r, g, b }),
            SetForegroundColor(Color::Rgb { r: fr, g: fg, b: fb }),
            Print(format!(" {} ", WINDOW_TITLE)),
            ResetColor,
            Print(format!(" {}  {}  {}", frame.clock, frame.counter, frame.interval)),
        )?;
        if frame.paused {
            queue!(self.out, Print("  (paused)"))?;
        }
        if frame.menu_open {
            queue!(self.out, Print(format!("  {}", menu_text())))?;
        }
        self.out.flush()?;

        self.last = Some(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        execute!(self.out, ResetColor, Print("\r\n"))
    }
}

/// Raw mode and hidden cursor for as long as the value lives
pub struct TerminalSession;

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
