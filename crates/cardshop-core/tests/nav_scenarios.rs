//! End-to-end scenarios for the navigation controller, driven the way the
//! storefront page drives it.

use cardshop_core::nav::{
    ClickTarget, DropdownId, LinkKind, NavController, NavMarkup, RecordingSurface, SurfaceEvent,
    Viewport,
};
use cardshop_core::NavConfig;

fn navbar(width: u32) -> NavController<RecordingSurface> {
    NavController::mount(
        NavConfig::default(),
        NavMarkup::standard(["singles", "sealed", "accessories"]),
        width,
        RecordingSurface::new(),
    )
    .expect("standard markup mounts")
}

#[test]
fn toggle_twice_round_trips() {
    let mut nav = navbar(375);
    let before = nav.menu();
    nav.toggle_menu();
    nav.toggle_menu();
    assert_eq!(nav.menu(), before);
    assert!(!nav.surface().scroll_locked());
}

#[test]
fn opening_b_after_a_leaves_only_b() {
    let mut nav = navbar(375);
    nav.toggle_menu();

    let a = DropdownId::from("singles");
    let b = DropdownId::from("accessories");
    nav.toggle_dropdown(&a).unwrap();
    nav.toggle_dropdown(&b).unwrap();

    let open: Vec<_> = nav
        .dropdowns()
        .filter(|(_, state)| state.is_open)
        .map(|(id, _)| id.clone())
        .collect();
    assert_eq!(open, vec![b]);
}

#[test]
fn resize_to_desktop_while_open_closes_menu() {
    let mut nav = navbar(800);
    nav.toggle_menu();
    assert!(nav.is_menu_open());

    let ticket = nav.resize_event(1024);
    assert_eq!(nav.fire_resize(&ticket), Some(Viewport::Desktop));
    assert!(!nav.is_menu_open());
    assert!(!nav.surface().scroll_locked());
}

#[test]
fn outside_click_closes_only_when_open() {
    let mut nav = navbar(375);
    nav.surface_mut().take();

    assert!(!nav.handle_outside_click(ClickTarget::Outside));
    assert!(nav.surface().events.is_empty());

    nav.toggle_menu();
    assert!(nav.handle_outside_click(ClickTarget::Outside));
    assert!(!nav.is_menu_open());
}

#[test]
fn plain_link_closes_on_mobile_only() {
    let mut nav = navbar(375);
    nav.toggle_menu();
    assert!(nav.handle_nav_link_click(LinkKind::Plain));
    assert!(!nav.is_menu_open());

    // Desktop: the toggle is hidden but the state machine still accepts it
    let mut nav = navbar(1440);
    nav.toggle_menu();
    assert!(!nav.handle_nav_link_click(LinkKind::Plain));
    assert!(nav.is_menu_open());
}

#[test]
fn drag_resize_across_breakpoint_applies_last_width() {
    let mut nav = navbar(375);
    nav.toggle_menu();
    nav.surface_mut().take();

    let tickets: Vec<_> = [500, 900, 1100, 1300, 960]
        .into_iter()
        .map(|w| nav.resize_event(w))
        .collect();

    let applied: Vec<_> = tickets.iter().filter_map(|t| nav.fire_resize(t)).collect();
    assert_eq!(applied, vec![Viewport::Mobile]);
    assert!(nav.is_menu_open());
    assert!(nav.surface().events.is_empty());
}

#[test]
fn desktop_round_trip_restores_native_disclosure() {
    let mut nav = navbar(375);
    nav.surface_mut().take();

    nav.handle_resize(1200);
    nav.handle_resize(1300);
    nav.handle_resize(600);

    assert_eq!(
        nav.surface_mut().take(),
        vec![
            SurfaceEvent::NativeDisclosure(true),
            SurfaceEvent::NativeDisclosure(false),
        ]
    );
}

#[test]
fn missing_markup_disables_controller() {
    let result = NavController::mount(
        NavConfig::default(),
        NavMarkup::default(),
        375,
        RecordingSurface::new(),
    );
    assert!(result.is_err());
}

#[test]
fn custom_breakpoint() {
    let config = NavConfig {
        breakpoint_px: 768,
        ..NavConfig::default()
    };
    let nav = NavController::mount(config, NavMarkup::standard(["singles"]), 800, RecordingSurface::new()).unwrap();
    assert_eq!(nav.viewport(), Viewport::Desktop);
}
