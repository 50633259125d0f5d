// Example: core geometry and snap-target math, no host involved.
use spindle::{Rect, Wheel, WheelOptions};

fn main() {
    let wheel = Wheel::new(
        WheelOptions::uniform(7, 48)
            .with_selector(Rect {
                main: 48,
                cross: 240,
            })
            .with_initial_rect(Some(Rect {
                main: 240,
                cross: 240,
            }))
            .with_initial_index(3),
    );

    println!("padding={}", wheel.padding());
    println!("content_size={}", wheel.content_size());
    println!("offset={} (item 3 centered)", wheel.scroll_offset());

    // A release slightly past item 3, drifting backward.
    let release_offset = wheel.scroll_offset() + 70;
    let target = wheel.snap_target(release_offset, -30.0).unwrap();
    println!(
        "snap from {release_offset}: slot={} index={} offset={}",
        target.slot, target.index, target.offset
    );
}
