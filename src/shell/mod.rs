//! Presentation shell
//!
//! The shell owns the timer engine and drives it from scheduled tasks and
//! user commands. Each recurring behaviour (clock tick, interval check, flash
//! step) is a one-shot task that schedules its successor, and the shell keeps
//! one handle per task kind so that a reset can cancel a stale task.

pub mod command;
pub mod render;

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::{
    platform::BestEffortTint,
    state::{FlashInterval, IntervalPreset, TimerEngine},
    tasks::{
        flash::{FlashSequence, TitleColor, DEFAULT_TITLE_COLOR},
        scheduler::{Scheduler, TaskHandle},
    },
    utils::{format_count, format_elapsed},
};

pub use command::Command;
pub use render::{Frame, Render, TerminalRenderer, TerminalSession};

/// Kinds of scheduled work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellTask {
    Tick,
    IntervalCheck,
    FlashStep,
}

/// Cadences used by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    /// How often the clock is redrawn
    pub tick: Duration,
    /// How long each flash colour stays up
    pub flash_step: Duration,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            flash_step: Duration::from_millis(500),
        }
    }
}

pub struct Shell<R: Render> {
    engine: TimerEngine,
    scheduler: Scheduler<ShellTask>,
    tick_handle: Option<TaskHandle>,
    interval_handle: Option<TaskHandle>,
    flash_handle: Option<TaskHandle>,
    flash: Option<FlashSequence>,
    title_color: TitleColor,
    menu_open: bool,
    closed: bool,
    render_failed: bool,
    tint: BestEffortTint,
    renderer: R,
    options: ShellOptions,
    rng: StdRng,
}

impl<R: Render> Shell<R> {
    pub fn new(
        engine: TimerEngine,
        renderer: R,
        tint: BestEffortTint,
        options: ShellOptions,
    ) -> Self {
        Self::with_rng(engine, renderer, tint, options, StdRng::from_entropy())
    }

    /// Like [`Shell::new`] with a caller-provided source for palette shuffling
    pub fn with_rng(
        engine: TimerEngine,
        renderer: R,
        tint: BestEffortTint,
        options: ShellOptions,
        rng: StdRng,
    ) -> Self {
        Self {
            engine,
            scheduler: Scheduler::new(),
            tick_handle: None,
            interval_handle: None,
            flash_handle: None,
            flash: None,
            title_color: DEFAULT_TITLE_COLOR,
            menu_open: false,
            closed: false,
            render_failed: false,
            tint,
            renderer,
            options,
            rng,
        }
    }

    /// Start ticking and arm the first interval check
    pub fn start(&mut self, now: Instant) {
        info!(
            "Shell started: tick={:?}, flash step={:?}, interval={}",
            self.options.tick,
            self.options.flash_step,
            self.engine.flash_interval()
        );
        self.tint.enable();
        self.tint.tint(self.title_color);
        self.tick_handle = Some(self.scheduler.schedule(now, ShellTask::Tick));
        self.reschedule_interval_check(now);
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn title_color(&self) -> TitleColor {
        self.title_color
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Handle of the pending interval check, if one is armed
    pub fn interval_check(&self) -> Option<TaskHandle> {
        self.interval_handle
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Apply a user command
    pub fn handle(&mut self, command: Command, now: Instant) {
        if self.closed {
            return;
        }
        debug!("Handling command {:?}", command);

        match command {
            Command::Restart => {
                self.engine.restart(now);
                self.reschedule_interval_check(now);
            }
            Command::PauseResume => {
                self.engine.pause_resume(now);
                self.reschedule_interval_check(now);
            }
            Command::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            Command::SelectPreset(index) => {
                if !self.menu_open {
                    debug!("Ignoring preset {} while the menu is closed", index);
                    return;
                }
                self.menu_open = false;
                match IntervalPreset::from_index(index) {
                    Ok(preset) => {
                        info!("Interval preset selected: {}", preset.label());
                        self.set_flash_interval(preset.interval(), now);
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            Command::SetInterval(interval) => self.set_flash_interval(interval, now),
            Command::Cancel => {
                if self.menu_open {
                    self.menu_open = false;
                } else {
                    self.close(now);
                    return;
                }
            }
            Command::Status => match self.engine.snapshot(now).to_json() {
                Ok(json) => info!("Status: {}", json),
                Err(e) => error!("Failed to serialize status: {}", e),
            },
            Command::Close => {
                self.close(now);
                return;
            }
        }

        self.draw(now);
    }

    /// Run every task that is due at `now`
    pub fn run_due(&mut self, now: Instant) {
        for (handle, task) in self.scheduler.drain_due(now) {
            if self.closed {
                break;
            }
            self.dispatch(handle, task, now);
        }
    }

    fn dispatch(&mut self, handle: TaskHandle, task: ShellTask, now: Instant) {
        match task {
            ShellTask::Tick => {
                self.draw(now);
                if self.tick_handle == Some(handle) {
                    self.tick_handle =
                        Some(self.scheduler.schedule(now + self.options.tick, ShellTask::Tick));
                }
            }
            ShellTask::IntervalCheck => {
                if self.interval_handle != Some(handle) {
                    debug!("Ignoring stale interval check");
                    return;
                }
                self.interval_handle = None;
                if self.engine.poll_interval_elapsed(now) {
                    self.start_flash(now);
                    self.engine.advance_interval();
                    info!("Interval {} completed", self.engine.interval_count());
                    self.draw(now);
                }
                self.reschedule_interval_check(now);
            }
            ShellTask::FlashStep => {
                if self.flash_handle != Some(handle) {
                    return;
                }
                self.flash_handle = None;
                self.flash_step(now);
            }
        }
    }

    fn set_flash_interval(&mut self, interval: FlashInterval, now: Instant) {
        self.engine.set_flash_interval(interval, now);
        self.reschedule_interval_check(now);
    }

    /// Cancel the pending interval check and arm one for the current deadline.
    /// Nothing is armed while paused; resuming arms it again.
    fn reschedule_interval_check(&mut self, now: Instant) {
        if let Some(handle) = self.interval_handle.take() {
            self.scheduler.cancel(handle);
        }
        if self.engine.is_paused() {
            return;
        }
        let at = now + self.engine.time_until_deadline(now);
        self.interval_handle = Some(self.scheduler.schedule(at, ShellTask::IntervalCheck));
    }

    fn start_flash(&mut self, now: Instant) {
        if let Some(handle) = self.flash_handle.take() {
            self.scheduler.cancel(handle);
        }
        let sequence = FlashSequence::shuffled_with(&mut self.rng);
        debug!("Starting flash with {} colours", sequence.remaining());
        self.flash = Some(sequence);
        self.flash_step(now);
    }

    fn flash_step(&mut self, now: Instant) {
        let next = self.flash.as_mut().and_then(|sequence| sequence.next());
        match next {
            Some(color) => {
                self.set_title_color(color);
                self.flash_handle = Some(
                    self.scheduler
                        .schedule(now + self.options.flash_step, ShellTask::FlashStep),
                );
            }
            None => {
                self.flash = None;
                self.set_title_color(DEFAULT_TITLE_COLOR);
            }
        }
        self.draw(now);
    }

    fn set_title_color(&mut self, color: TitleColor) {
        self.title_color = color;
        self.tint.tint(color);
    }

    /// What the widget shows at `now`
    pub fn frame(&self, now: Instant) -> Frame {
        Frame {
            title_color: self.title_color,
            clock: format_elapsed(self.engine.elapsed(now)),
            counter: format_count(self.engine.interval_count()),
            interval: self.engine.flash_interval().label(),
            paused: self.engine.is_paused(),
            menu_open: self.menu_open,
        }
    }

    fn draw(&mut self, now: Instant) {
        let frame = self.frame(now);
        match self.renderer.draw(&frame) {
            Ok(()) => self.render_failed = false,
            Err(e) if !self.render_failed => {
                warn!("Failed to draw widget: {}", e);
                self.render_failed = true;
            }
            Err(e) => debug!("Failed to draw widget: {}", e),
        }
    }

    fn close(&mut self, now: Instant) {
        info!(
            "Closing after {} with {} completed intervals",
            format_elapsed(self.engine.elapsed(now)),
            self.engine.interval_count()
        );
        self.closed = true;
        self.scheduler.clear();
        self.tick_handle = None;
        self.interval_handle = None;
        self.flash_handle = None;
        if let Err(e) = self.renderer.finish() {
            debug!("Failed to reset terminal output: {}", e);
        }
    }
}
