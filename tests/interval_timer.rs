use std::time::Duration;

use futures::channel::mpsc;
use productivity_timer::{
    platform::BestEffortTint,
    shell::{Frame, Render},
    Command, FlashInterval, IntervalPreset, PauseMode, Shell, ShellOptions, TimerEngine,
};
use tokio::time::{sleep, Instant};

#[derive(Default)]
struct Counters(Vec<String>);

impl Render for Counters {
    fn draw(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.0.push(frame.counter.clone());
        Ok(())
    }
}

#[test]
fn restart_sequence_keeps_counter_at_zero() {
    let t0 = Instant::now();
    let mut engine = TimerEngine::new(FlashInterval::DEFAULT, PauseMode::Freeze, t0);
    for step in 1..=5u64 {
        for _ in 0..step {
            engine.advance_interval();
        }
        engine.restart(t0 + Duration::from_secs(step));
        assert_eq!(engine.interval_count(), 0);
    }
}

#[test]
fn arbitrary_intervals_are_accepted() {
    let t0 = Instant::now();
    let mut engine = TimerEngine::new(FlashInterval::DEFAULT, PauseMode::Freeze, t0);
    for secs in [1, 7, 59, 61, 3_599, 86_400] {
        let interval = FlashInterval::from_secs(secs).unwrap();
        engine.advance_interval();
        engine.set_flash_interval(interval, t0);
        assert_eq!(engine.flash_interval(), interval);
        assert_eq!(engine.interval_count(), 0);

        let deadline = t0 + Duration::from_secs(secs);
        assert!(!engine.poll_interval_elapsed(deadline - Duration::from_millis(1)));
        assert!(engine.poll_interval_elapsed(deadline));
    }
}

#[test]
fn pause_freezes_reported_time() {
    let t0 = Instant::now();
    let mut engine = TimerEngine::new(FlashInterval::DEFAULT, PauseMode::Freeze, t0);
    engine.pause_resume(t0 + Duration::from_millis(1_500));
    let frozen: Vec<_> = (0..10)
        .map(|i| engine.elapsed(t0 + Duration::from_secs(i * 60)))
        .collect();
    assert!(frozen.iter().all(|d| *d == Duration::from_millis(1_500)));
}

#[tokio::test(start_paused = true)]
async fn widget_counts_intervals_until_restart() {
    let engine = TimerEngine::new(
        IntervalPreset::TestTenSeconds.interval(),
        PauseMode::Freeze,
        Instant::now(),
    );
    let mut shell = Shell::new(
        engine,
        Counters::default(),
        BestEffortTint::disabled(),
        ShellOptions::default(),
    );
    let (tx, rx) = mpsc::unbounded();

    let driver = async {
        sleep(Duration::from_secs(35)).await;
        tx.unbounded_send(Command::Status).unwrap();
        tx.unbounded_send(Command::Restart).unwrap();
        sleep(Duration::from_secs(5)).await;
    };
    productivity_timer::run_shell(&mut shell, rx, driver).await;

    assert!(shell.is_closed());
    assert!(shell.renderer().0.iter().any(|c| c == "Intervals: 3"));
    assert!(!shell.renderer().0.iter().any(|c| c == "Intervals: 4"));
    assert_eq!(shell.renderer().0.last().map(String::as_str), Some("Intervals: 0"));
    assert_eq!(shell.engine().interval_count(), 0);
    assert_eq!(shell.engine().elapsed(Instant::now()), Duration::from_secs(5));
}
