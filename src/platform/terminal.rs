//! Title tint for terminal emulators
//!
//! Terminals cannot colour their title bar, so the current colour is shown as
//! a marker in front of the window title instead.

use std::io::{self, Write};

use crossterm::{execute, terminal::SetTitle};

use super::{PlatformError, TitleBarTint};
use crate::tasks::flash::{TitleColor, DEFAULT_TITLE_COLOR};

pub const WINDOW_TITLE: &str = "Productivity timer";

pub struct TerminalTitleTint<W: Write> {
    out: W,
}

impl TerminalTitleTint<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalTitleTint<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TitleBarTint for TerminalTitleTint<W> {
    fn name(&self) -> &'static str {
        "terminal-title"
    }

    fn enable(&mut self) -> Result<(), PlatformError> {
        self.tint(DEFAULT_TITLE_COLOR)
    }

    fn tint(&mut self, color: TitleColor) -> Result<(), PlatformError> {
        execute!(self.out, SetTitle(format!("{} {}", color.marker(), WINDOW_TITLE)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_marker_into_title() {
        let mut tint = TerminalTitleTint::new(Vec::new());
        tint.tint(TitleColor::Red).unwrap();
        let written = String::from_utf8(tint.into_inner()).unwrap();
        assert!(written.contains("🔴 Productivity timer"));
    }

    #[test]
    fn write_errors_surface_as_platform_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut tint = TerminalTitleTint::new(Broken);
        assert!(matches!(tint.enable(), Err(PlatformError::Io(_))));
    }
}
