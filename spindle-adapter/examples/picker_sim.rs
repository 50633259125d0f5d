use std::sync::Arc;

use spindle::{Rect, WheelOptions};
use spindle_adapter::{Picker, UniformSource};

fn main() {
    // Example: a host frame loop driving a circular picker.
    //
    // A host would:
    // - apply `padding()` to its virtualized list before layout
    // - forward touch events and the release velocity
    // - call tick(now_ms) each frame and apply the returned offset to the
    //   real scroll container
    let source = Arc::new(UniformSource {
        count: 24,
        extent: 40,
    });
    let mut picker = Picker::with_source(
        source,
        WheelOptions::uniform(0, 40)
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
    picker.on_value_selected(|index| println!("selected -> {index}"));
    picker.on_phase_changed(|phase| println!("phase -> {phase:?}"));

    println!("padding={}", picker.padding());

    picker.drag_started();
    picker.drag_moved(-65, 0);
    picker.drag_released(-900.0, 0);

    let mut now_ms = 0u64;
    while picker.is_settling() {
        now_ms += 16;
        if let Some(offset) = picker.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} offset={offset}");
            }
        }
    }

    println!(
        "done: offset={} selected={:?}",
        picker.scroll_offset(),
        picker.selected()
    );
}
