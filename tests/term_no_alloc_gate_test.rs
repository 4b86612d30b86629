use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{Game, GameConfig};
use blockfall::term::{encode_diff_into, FrameBuffer, GameView, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
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

// One test per binary: the counter is global and tests run on parallel threads.
#[test]
fn term_frame_path_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let game = Game::new(GameConfig::default().with_seed(1)).unwrap();
    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Two frames that differ in the side panel and the board.
    let mut over = snap.clone();
    over.game_over = true;
    over.score = 4321;
    let mut fb_over = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(&over, viewport, &mut fb_over);

    // Warm-up sizes every buffer.
    let mut out = Vec::with_capacity(64 * 1024);
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);
    encode_diff_into(&fb, &fb_over, &mut out).unwrap();
    assert!(!out.is_empty());

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            out.clear();
            let _ = encode_diff_into(&fb, &fb_over, &mut out);
        }
    });

    assert_eq!(allocs, 0);
}
