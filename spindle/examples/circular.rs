// Example: circular wraparound and shortest-path re-centering.
use spindle::{Rect, Wheel, WheelOptions, ring};

fn main() {
    let wheel = Wheel::new(
        WheelOptions::uniform(12, 40)
            .with_circular(true)
            .with_selector(Rect {
                main: 40,
                cross: 200,
            })
            .with_initial_rect(Some(Rect {
                main: 200,
                cross: 200,
            })),
    );

    // Slots are unbounded; logical indexes wrap.
    for slot in [-13i64, -1, 0, 11, 12, 25] {
        println!(
            "slot {slot:>3} -> logical {:?} centered at {:?}",
            ring::logical_of(slot, 12),
            wheel.centered_offset(slot)
        );
    }

    // From a reference showing logical 1, the nearest slot for logical 10
    // is three steps backward, not nine forward.
    println!(
        "nearest slot for logical 10 from slot 13: {:?}",
        ring::nearest_slot(10, 13, 12)
    );
}
