// Example: scroll events from another thread, reclamation on the loop's own timer.
use std::thread;
use std::time::Duration;

use biglist::{BigList, BigListOptions, Rendered, Surface, SurfaceLayout};
use biglist_adapter::{Driver, MonotonicClock};

#[derive(Default)]
struct CountingSurface {
    mounted: usize,
    disposed: usize,
}

impl Surface for CountingSurface {
    type Output = String;

    fn reset(&mut self, _layout: SurfaceLayout) {}

    fn mount(&mut self, batch: &mut [Rendered<String>]) {
        self.mounted += batch.len();
    }

    fn show(&mut self, _item: &mut Rendered<String>) {}

    fn hide(&mut self, _item: &mut Rendered<String>) {}

    fn dispose(&mut self, _item: Rendered<String>) {
        self.disposed += 1;
    }

    fn clear(&mut self) {}
}

fn main() {
    let clock = MonotonicClock::new();
    let opts = BigListOptions::new("#rows", 100_000, |i| format!("row #{i}"));
    let list = BigList::with_surface(CountingSurface::default(), opts, 0).expect("valid options");
    let (driver, handle) = Driver::new(list, clock);

    let input = thread::spawn(move || {
        // A fast fling, a pause long enough for reclamation, then teardown.
        for step in 0..40u64 {
            let _ = handle.scroll(step * 700);
            thread::sleep(Duration::from_millis(5));
        }
        thread::sleep(Duration::from_millis(700));
        let _ = handle.destroy();
    });

    let list = driver.run();
    let _ = input.join();

    println!("stats: {:?}", list.stats());
    println!(
        "surface: mounted={} disposed={}",
        list.surface().mounted,
        list.surface().disposed
    );
}
