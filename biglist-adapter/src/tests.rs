use crate::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;

use biglist::{BigList, BigListOptions, Geometry, IndexRange, Rendered, Surface, SurfaceLayout};
use core::ops::ControlFlow;

#[derive(Debug, Default)]
struct Log {
    mounted: Vec<usize>,
    disposed: Vec<usize>,
    cleared: bool,
}

struct RecordingSurface {
    log: Rc<RefCell<Log>>,
}

impl Surface for RecordingSurface {
    type Output = usize;

    fn reset(&mut self, _layout: SurfaceLayout) {}

    fn mount(&mut self, batch: &mut [Rendered<usize>]) {
        let mut log = self.log.borrow_mut();
        log.mounted.extend(batch.iter().map(|item| *item.output()));
    }

    fn show(&mut self, _item: &mut Rendered<usize>) {}

    fn hide(&mut self, _item: &mut Rendered<usize>) {}

    fn dispose(&mut self, item: Rendered<usize>) {
        self.log.borrow_mut().disposed.push(item.into_output());
    }

    fn clear(&mut self) {
        self.log.borrow_mut().cleared = true;
    }
}

fn engine(clock: &impl Clock) -> (BigList<RecordingSurface>, Rc<RefCell<Log>>) {
    let log = Rc::new(RefCell::new(Log::default()));
    let surface = RecordingSurface {
        log: Rc::clone(&log),
    };
    let opts = BigListOptions::new("#list", 10_000, |i| i)
        .with_geometry(Geometry::new(100, 10))
        .with_reclaim_interval_ms(50)
        .with_idle_ms(20);
    let list = BigList::with_surface(surface, opts, clock.now_ms()).unwrap();
    (list, log)
}

#[test]
fn commands_are_applied_in_order() {
    let clock = ManualClock::new(0);
    let (list, _log) = engine(&clock);
    let (mut driver, handle) = Driver::new(list, clock.clone());

    handle.scroll(1_000).unwrap();
    handle.scroll(2_000).unwrap();
    assert!(driver.run_until_idle().is_continue());

    assert_eq!(
        driver.engine().window(),
        IndexRange {
            start: 190,
            end: 220,
        }
    );
    assert_eq!(driver.engine().stats().repaints, 2);
}

#[test]
fn timer_reclaims_only_after_interaction_settles() {
    let clock = ManualClock::new(0);
    let (list, log) = engine(&clock);
    let (mut driver, handle) = Driver::new(list, clock.clone());

    clock.set(40);
    handle.scroll(5_000).unwrap();
    driver.run_until_idle();
    assert_eq!(driver.engine().garbage_len(), 20);

    clock.set(50);
    let report = driver.on_timer().unwrap();
    assert!(report.skipped);
    assert_eq!(driver.engine().garbage_len(), 20);

    clock.advance(50);
    driver.run_until_idle();
    assert_eq!(driver.engine().garbage_len(), 0);
    assert_eq!(log.borrow().disposed.len(), 20);
}

#[test]
fn scroll_events_are_consumed_until_destroy() {
    let clock = ManualClock::new(0);
    let (list, _log) = engine(&clock);
    let (mut driver, handle) = Driver::new(list, clock);

    assert_eq!(driver.on_scroll(300), EventDisposition::Consumed);

    handle.destroy().unwrap();
    handle.scroll(0).unwrap();
    assert!(driver.run_until_idle().is_break());
    assert!(driver.engine().is_destroyed());
    assert_eq!(driver.on_scroll(300), EventDisposition::Ignored);
}

#[test]
fn redraw_command_rerenders_the_window() {
    let clock = ManualClock::new(0);
    let (list, log) = engine(&clock);
    let (mut driver, handle) = Driver::new(list, clock);

    handle.redraw().unwrap();
    assert_eq!(driver.handle_command(Command::Redraw), ControlFlow::Continue(()));
    driver.run_until_idle();

    // 20 initial renders, then two full redraws of the same window.
    assert_eq!(log.borrow().mounted.len(), 60);
    assert_eq!(driver.engine().live_len(), 20);
    assert_eq!(driver.engine().garbage_len(), 0);
}

#[test]
fn dropping_every_handle_stops_the_loop() {
    let clock = ManualClock::new(0);
    let (list, log) = engine(&clock);
    let (mut driver, handle) = Driver::new(list, clock);
    drop(handle);

    assert!(driver.run_until_idle().is_break());
    assert!(driver.engine().is_destroyed());
    assert!(log.borrow().cleared);
    assert_eq!(log.borrow().disposed.len(), 20);
}

#[test]
fn run_processes_commands_from_another_thread() {
    let clock = MonotonicClock::new();
    let (list, log) = engine(&clock);
    let (driver, handle) = Driver::new(list, clock);

    let sender = thread::spawn(move || {
        for offset in (0..20u64).map(|i| i * 500) {
            handle.scroll(offset).unwrap();
        }
        handle.redraw().unwrap();
        handle.destroy().unwrap();
    });

    let list = driver.run();
    sender.join().unwrap();

    assert!(list.is_destroyed());
    assert_eq!(list.live_len(), 0);
    assert_eq!(list.garbage_len(), 0);
    let stats = list.stats();
    assert_eq!(stats.renders, stats.disposals);
    assert!(log.borrow().cleared);
}

#[test]
fn sending_to_a_stopped_loop_fails() {
    let clock = ManualClock::new(0);
    let (list, _log) = engine(&clock);
    let (driver, handle) = Driver::new(list, clock);
    drop(driver);
    assert_eq!(handle.scroll(10), Err(DriverError::Disconnected));
}

#[test]
fn manual_clock_clones_share_time() {
    let a = ManualClock::new(5);
    let b = a.clone();
    a.advance(10);
    assert_eq!(b.now_ms(), 15);
    b.set(1);
    assert_eq!(a.now_ms(), 1);
}

#[test]
fn queued_and_direct_scrolls_move_the_window_the_same_way() {
    let clock = ManualClock::new(0);
    let (list, _log) = engine(&clock);
    let (mut queued, handle) = Driver::new(list, clock.clone());
    let (list, _log) = engine(&clock);
    let (mut direct, _direct_handle) = Driver::new(list, clock);

    handle.scroll(2_000).unwrap();
    assert_eq!(
        queued.handle_command(Command::Scroll { offset: 2_000 }),
        ControlFlow::Continue(())
    );
    queued.run_until_idle();
    assert_eq!(direct.on_scroll(2_000), EventDisposition::Consumed);

    assert_eq!(queued.engine().window(), direct.engine().window());
    assert_eq!(queued.engine().stats().repaints, 1);
}
