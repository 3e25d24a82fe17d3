//! Platform title-bar tinting
//!
//! Tinting the native title bar is purely cosmetic. Every backend sits behind
//! [`TitleBarTint`] and is wrapped in [`BestEffortTint`], which logs failures
//! and switches the backend off instead of propagating them.

pub mod terminal;

#[cfg(target_os = "windows")]
pub mod windows;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::tasks::flash::TitleColor;

pub use terminal::TerminalTitleTint;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{api} failed with code {code:#x}")]
    Call { api: &'static str, code: i32 },
    #[error("no window to tint")]
    NoWindow,
}

/// Capability to colour the native window title bar
pub trait TitleBarTint {
    /// Backend name used in log messages
    fn name(&self) -> &'static str;

    /// One-time setup that allows later colour changes
    fn enable(&mut self) -> Result<(), PlatformError>;

    fn tint(&mut self, color: TitleColor) -> Result<(), PlatformError>;
}

/// Backend that does nothing, used when tinting is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTint;

impl TitleBarTint for NoopTint {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn enable(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn tint(&mut self, _color: TitleColor) -> Result<(), PlatformError> {
        Ok(())
    }
}

/// Wraps a backend so that its failures never reach the caller.
///
/// After the first failure the backend is dropped and the wrapper behaves
/// like [`NoopTint`].
pub struct BestEffortTint {
    backend: Option<Box<dyn TitleBarTint>>,
}

impl BestEffortTint {
    pub fn new(backend: Box<dyn TitleBarTint>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn disabled() -> Self {
        Self { backend: None }
    }

    /// Whether a backend is still in use
    pub fn is_active(&self) -> bool {
        self.backend.is_some()
    }

    pub fn enable(&mut self) {
        self.run(|backend| backend.enable());
        if let Some(backend) = &self.backend {
            info!("Title bar tinting enabled via {}", backend.name());
        }
    }

    pub fn tint(&mut self, color: TitleColor) {
        self.run(|backend| backend.tint(color));
    }

    fn run<F>(&mut self, op: F)
    where
        F: FnOnce(&mut dyn TitleBarTint) -> Result<(), PlatformError>,
    {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = op(&mut **backend) {
            warn!("Title bar tint via {} failed, disabling it: {}", backend.name(), e);
            self.backend = None;
        }
    }
}

impl std::fmt::Debug for BestEffortTint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestEffortTint")
            .field("backend", &self.backend.as_ref().map(|b| b.name()))
            .finish()
    }
}

/// Pick the tint backend for the current platform
pub fn detect(enabled: bool) -> BestEffortTint {
    if !enabled {
        debug!("Title bar tinting disabled by configuration");
        return BestEffortTint::disabled();
    }

    #[cfg(target_os = "windows")]
    {
        BestEffortTint::new(Box::new(windows::DwmTitleBar::for_console()))
    }

    #[cfg(not(target_os = "windows"))]
    {
        BestEffortTint::new(Box::new(TerminalTitleTint::stdout()))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    struct FlakyTint {
        calls: Rc<RefCell<Vec<TitleColor>>>,
        fail_on: TitleColor,
    }

    impl TitleBarTint for FlakyTint {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn enable(&mut self) -> Result<(), PlatformError> {
            Ok(())
        }

        fn tint(&mut self, color: TitleColor) -> Result<(), PlatformError> {
            self.calls.borrow_mut().push(color);
            if color == self.fail_on {
                return Err(PlatformError::Call {
                    api: "FakeTint",
                    code: -1,
                });
            }
            Ok(())
        }
    }

    #[test]
    fn failure_disables_backend_without_propagating() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut tint = BestEffortTint::new(Box::new(FlakyTint {
            calls: Rc::clone(&calls),
            fail_on: TitleColor::Green,
        }));
        tint.enable();

        tint.tint(TitleColor::Red);
        assert!(tint.is_active());
        tint.tint(TitleColor::Green);
        assert!(!tint.is_active());
        tint.tint(TitleColor::Blue);

        assert_eq!(*calls.borrow(), vec![TitleColor::Red, TitleColor::Green]);
    }

    #[test]
    fn disabled_wrapper_is_inert() {
        let mut tint = detect(false);
        assert!(!tint.is_active());
        tint.enable();
        tint.tint(TitleColor::Orange);
        assert!(!tint.is_active());
    }

    #[test]
    fn noop_never_fails() {
        let mut tint = BestEffortTint::new(Box::new(NoopTint));
        tint.enable();
        tint.tint(TitleColor::Red);
        assert!(tint.is_active());
    }
}
