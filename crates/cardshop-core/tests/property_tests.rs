//! Property-based tests for the navigation controller and effect helpers.

use proptest::prelude::*;

use cardshop_core::effects::CounterAnimation;
use cardshop_core::nav::{ClickTarget, DropdownId, LinkKind, NavController, NavMarkup, RecordingSurface};
use cardshop_core::NavConfig;

// ============================================================================
// Strategy Generators
// ============================================================================

const DROPDOWNS: [&str; 4] = ["singles", "sealed", "accessories", "events"];

/// Events the page can deliver to the controller
#[derive(Debug, Clone)]
enum NavOp {
    ToggleMenu,
    ToggleDropdown(usize),
    CloseDropdown(usize),
    Click(ClickTarget),
    Link(LinkKind),
    Resize(u32),
    ResizeEvent(u32),
    FireLatest,
}

fn click_strategy() -> impl Strategy<Value = ClickTarget> {
    prop_oneof![
        Just(ClickTarget::Toggle),
        Just(ClickTarget::Panel),
        Just(ClickTarget::Outside),
    ]
}

fn link_strategy() -> impl Strategy<Value = LinkKind> {
    prop_oneof![Just(LinkKind::Plain), Just(LinkKind::DropdownToggle)]
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::ToggleMenu),
            3 => (0..DROPDOWNS.len()).prop_map(NavOp::ToggleDropdown),
            1 => (0..DROPDOWNS.len()).prop_map(NavOp::CloseDropdown),
            2 => click_strategy().prop_map(NavOp::Click),
            2 => link_strategy().prop_map(NavOp::Link),
            1 => (200u32..2000).prop_map(NavOp::Resize),
            1 => (200u32..2000).prop_map(NavOp::ResizeEvent),
            1 => Just(NavOp::FireLatest),
        ],
        0..max_ops,
    )
}

fn navbar(width: u32) -> NavController<RecordingSurface> {
    NavController::mount(
        NavConfig::default(),
        NavMarkup::standard(DROPDOWNS),
        width,
        RecordingSurface::new(),
    )
    .unwrap()
}

fn apply(nav: &mut NavController<RecordingSurface>, op: &NavOp, latest: &mut Option<cardshop_core::nav::ResizeTicket>) {
    match op {
        NavOp::ToggleMenu => {
            nav.toggle_menu();
        }
        NavOp::ToggleDropdown(i) => {
            nav.toggle_dropdown(&DropdownId::from(DROPDOWNS[*i])).unwrap();
        }
        NavOp::CloseDropdown(i) => {
            nav.close_dropdown(&DropdownId::from(DROPDOWNS[*i])).unwrap();
        }
        NavOp::Click(target) => {
            nav.handle_outside_click(*target);
        }
        NavOp::Link(kind) => {
            nav.handle_nav_link_click(*kind);
        }
        NavOp::Resize(width) => {
            nav.handle_resize(*width);
        }
        NavOp::ResizeEvent(width) => {
            *latest = Some(nav.resize_event(*width));
        }
        NavOp::FireLatest => {
            if let Some(ticket) = latest.take() {
                nav.fire_resize(&ticket);
            }
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No sequence of events ever leaves two submenus open
    #[test]
    fn at_most_one_dropdown_open(width in 200u32..2000, ops in nav_ops_strategy(60)) {
        let mut nav = navbar(width);
        let mut latest = None;
        for op in &ops {
            apply(&mut nav, op, &mut latest);
            let open = nav.dropdowns().filter(|(_, s)| s.is_open).count();
            prop_assert!(open <= 1);
        }
    }

    /// The reported scroll lock always matches the menu state
    #[test]
    fn scroll_lock_tracks_menu(width in 200u32..2000, ops in nav_ops_strategy(60)) {
        let mut nav = navbar(width);
        let mut latest = None;
        for op in &ops {
            apply(&mut nav, op, &mut latest);
            prop_assert_eq!(nav.surface().scroll_locked(), nav.is_menu_open());
        }
    }

    /// Toggling twice from any reachable state restores the menu state
    #[test]
    fn toggle_round_trip(width in 200u32..2000, ops in nav_ops_strategy(30)) {
        let mut nav = navbar(width);
        let mut latest = None;
        for op in &ops {
            apply(&mut nav, op, &mut latest);
        }
        let before = nav.menu();
        nav.toggle_menu();
        nav.toggle_menu();
        prop_assert_eq!(nav.menu(), before);
    }

    /// Closing twice changes nothing the second time
    #[test]
    fn close_is_idempotent(width in 200u32..2000, ops in nav_ops_strategy(30)) {
        let mut nav = navbar(width);
        let mut latest = None;
        for op in &ops {
            apply(&mut nav, op, &mut latest);
        }
        nav.close_menu();
        nav.surface_mut().take();
        prop_assert!(!nav.close_menu());
        prop_assert_eq!(nav.close_all_dropdowns(), 0);
        prop_assert!(nav.surface().events.is_empty());
    }

    /// Of a burst of resize tickets, only the last one applies
    #[test]
    fn only_latest_ticket_fires(widths in prop::collection::vec(200u32..2000, 1..20)) {
        let mut nav = navbar(400);
        let tickets: Vec<_> = widths.iter().map(|w| nav.resize_event(*w)).collect();
        let fired = tickets.iter().filter(|t| nav.fire_resize(t).is_some()).count();
        prop_assert_eq!(fired, 1);
        let expected = cardshop_core::Viewport::classify(*widths.last().unwrap(), 992);
        prop_assert_eq!(nav.viewport(), expected);
    }

    /// After a debounced resize lands on desktop, the menu is closed
    #[test]
    fn desktop_resize_closes(start in 200u32..992, end in 992u32..4000) {
        let mut nav = navbar(start);
        nav.toggle_menu();
        let ticket = nav.resize_event(end);
        nav.fire_resize(&ticket);
        prop_assert!(!nav.is_menu_open());
    }

    /// Counter frames never go backwards and end exactly on the target
    #[test]
    fn counter_monotonic(target in 0u64..10_000_000, steps in 1u32..200) {
        let frames: Vec<_> = CounterAnimation::new(target, steps).collect();
        prop_assert!(frames.windows(2).all(|w| w[0].value <= w[1].value));
        let last = frames.last().unwrap();
        prop_assert!(last.done);
        prop_assert_eq!(last.value, target);
        prop_assert!(frames.iter().all(|f| f.value <= target));
    }
}
