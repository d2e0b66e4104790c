// Example: a text "surface" that keeps rows in a map and prints what the engine does.
use std::collections::BTreeMap;

use biglist::{BigList, BigListOptions, Geometry, Rendered, Surface, SurfaceHost, SurfaceLayout};

#[derive(Default)]
struct TextSurface {
    rows: BTreeMap<usize, (u64, bool)>,
}

impl Surface for TextSurface {
    type Output = String;

    fn reset(&mut self, layout: SurfaceLayout) {
        self.rows.clear();
        println!(
            "reset: viewport={} item={} content={}",
            layout.viewport_height, layout.item_height, layout.content_height
        );
    }

    fn mount(&mut self, batch: &mut [Rendered<String>]) {
        for item in batch.iter() {
            self.rows.insert(item.index(), (item.top(), true));
        }
        println!("mount: {} rows", batch.len());
    }

    fn show(&mut self, item: &mut Rendered<String>) {
        self.rows.insert(item.index(), (item.top(), true));
    }

    fn hide(&mut self, item: &mut Rendered<String>) {
        self.rows.insert(item.index(), (item.top(), false));
    }

    fn dispose(&mut self, item: Rendered<String>) {
        self.rows.remove(&item.index());
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}

struct Screen;

impl SurfaceHost for Screen {
    type Surface = TextSurface;

    fn query(&mut self, locator: &str) -> Vec<TextSurface> {
        if locator == "#rows" {
            vec![TextSurface::default()]
        } else {
            Vec::new()
        }
    }
}

fn main() {
    let opts = BigListOptions::new("#rows", 1_000_000, |i| format!("row #{i}"))
        .with_geometry(Geometry::new(500, 25));
    let mut list = BigList::init(&mut Screen, opts, 0).expect("container exists");
    println!("window={:?}", list.window());

    list.on_scroll(1_000, 10);
    println!("window={:?} garbage={}", list.window(), list.garbage_len());

    list.on_scroll(0, 20);
    println!("stats after scrolling back: {:?}", list.stats());

    for now in [300, 600] {
        if let Some(report) = list.tick(now) {
            println!("tick @{now}: {report:?}");
        }
    }

    if let Some(row) = list.get(3) {
        println!("row 3 at top={}: {}", row.top(), row.output());
    }

    list.destroy();
    println!("surface rows after destroy: {}", list.surface().rows.len());

    match BigList::init(&mut Screen, BigListOptions::new("#missing", 10, |i| i.to_string()), 0) {
        Ok(_) => unreachable!(),
        Err(err) => println!("init error: {err}"),
    }
}
