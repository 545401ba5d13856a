//! Timer-driven debounce: tickets are fired by tasks sleeping on the tokio
//! clock, as the desktop app does.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use cardshop_core::nav::{NavController, NavMarkup, RecordingSurface, Viewport};
use cardshop_core::NavConfig;

type Shared = Arc<Mutex<NavController<RecordingSurface>>>;

fn shared_navbar(width: u32) -> Shared {
    let nav = NavController::mount(
        NavConfig::default(),
        NavMarkup::standard(["singles", "sealed"]),
        width,
        RecordingSurface::new(),
    )
    .unwrap();
    Arc::new(Mutex::new(nav))
}

/// Forward one raw resize the way the host does: schedule, sleep, fire
fn on_resize(nav: &Shared, width: u32) -> tokio::task::JoinHandle<Option<Viewport>> {
    let ticket = nav.lock().unwrap().resize_event(width);
    let nav = Arc::clone(nav);
    tokio::spawn(async move {
        tokio::time::sleep(ticket.delay).await;
        let applied = nav.lock().unwrap().fire_resize(&ticket);
        applied
    })
}

#[tokio::test(start_paused = true)]
async fn test_burst_collapses_into_trailing_resize() {
    let nav = shared_navbar(400);
    nav.lock().unwrap().toggle_menu();

    let mut handles = Vec::new();
    for width in [600, 800, 1000, 1200] {
        handles.push(on_resize(&nav, width));
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    // Still inside the debounce window of the last event
    assert!(nav.lock().unwrap().is_menu_open());

    let mut applied = Vec::new();
    for handle in handles {
        if let Some(viewport) = handle.await.unwrap() {
            applied.push(viewport);
        }
    }

    assert_eq!(applied, vec![Viewport::Desktop]);
    let nav = nav.lock().unwrap();
    assert!(!nav.is_menu_open());
    assert_eq!(nav.viewport(), Viewport::Desktop);
}

#[tokio::test(start_paused = true)]
async fn test_spaced_events_each_apply() {
    let nav = shared_navbar(400);

    let first = on_resize(&nav, 1200);
    tokio::time::sleep(Duration::from_millis(300)).await;
    let second = on_resize(&nav, 500);

    assert_eq!(first.await.unwrap(), Some(Viewport::Desktop));
    assert_eq!(second.await.unwrap(), Some(Viewport::Mobile));
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_resize() {
    let nav = shared_navbar(400);
    let pending = on_resize(&nav, 1200);

    nav.lock().unwrap().teardown();

    assert_eq!(pending.await.unwrap(), None);
    assert_eq!(nav.lock().unwrap().viewport(), Viewport::Mobile);
}
