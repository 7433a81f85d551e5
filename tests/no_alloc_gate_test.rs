use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_raycaster::core::{PlayerPose, RenderMode, TileGrid};
use tui_raycaster::engine::FrameLoop;
use tui_raycaster::input::KeyState;
use tui_raycaster::term::{FrameBuffer, FrameView, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn serial_frame_hot_path_is_allocation_free() {
    let mut frame_loop = FrameLoop::new(TileGrid::default_map(), PlayerPose::default(), 120, 40)
        .unwrap()
        .with_mode(RenderMode::Serial);

    let mut keys = KeyState::new();
    let _ = keys.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE), 0);
    let _ = keys.handle_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE), 0);

    let view = FrameView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up.
    let frame = frame_loop.tick(1.0 / 60.0, &keys);
    view.render_into(frame.glyphs(), frame.width(), frame.height(), viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..300u64 {
            keys.expire(i);
            let frame = frame_loop.tick(1.0 / 60.0, &keys);
            view.render_into(frame.glyphs(), frame.width(), frame.height(), viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
