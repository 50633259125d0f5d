use std::sync::Arc;

use spindle::{Rect, WheelOptions};
use spindle_adapter::{Easing, Picker, UniformSource};

fn main() {
    // Example: programmatic selection (no gesture) still settles smoothly
    // and reports exactly one selection per committed change.
    let source = Arc::new(UniformSource {
        count: 60,
        extent: 32,
    });
    let mut picker = Picker::with_source(
        source,
        WheelOptions::uniform(0, 32)
            .with_selector(Rect {
                main: 32,
                cross: 160,
            })
            .with_initial_rect(Some(Rect {
                main: 160,
                cross: 160,
            })),
    );
    picker.set_easing(Easing::SmoothStep);
    picker.on_value_selected(|index| println!("selected -> {index}"));

    let mut now_ms = 0u64;
    for index in [45usize, 45, 7] {
        picker.select(index, now_ms);
        while picker.is_settling() {
            now_ms += 16;
            picker.tick(now_ms);
        }
        println!("at offset {}", picker.scroll_offset());
    }
}
