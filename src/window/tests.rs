//! Unit tests for the window registry
//!
//! Covers the initial layout, lifecycle operations, z-order stacking and
//! the derived active app.

use super::*;

fn registry() -> WindowRegistry {
    WindowRegistry::new(&LayoutConfig::default())
}

fn id(app: AppId) -> WindowId {
    WindowId::for_app(app)
}

fn z(registry: &WindowRegistry, app: AppId) -> u64 {
    registry.get_by_app(app).unwrap().z_index
}

#[test]
fn test_initial_layout() {
    let registry = registry();
    assert_eq!(registry.records().len(), AppId::ALL.len());
    assert_eq!(registry.highest_z_index(), 106);
    assert_eq!(registry.active_app(), None);

    for (i, record) in registry.records().iter().enumerate() {
        let offset = 30.0 * i as f64;
        assert_eq!(record.app, AppId::ALL[i]);
        assert_eq!(record.id.as_str(), format!("window-{}", record.app));
        assert_eq!(record.z_index, 100 + i as u64);
        assert_eq!(record.position, Point::new(100.0 + offset, 100.0 + offset));
        assert_eq!(record.size, record.app.initial_size());
        assert!(!record.is_open);
        assert!(!record.is_minimized);
    }
}

#[test]
fn test_app_metadata() {
    assert_eq!(AppId::About.title(), "About Me");
    assert_eq!(AppId::Ailab.title(), "AI Lab");
    assert_eq!(AppId::Blog.initial_size(), Size::new(900.0, 650.0));
    assert_eq!("contact".parse::<AppId>(), Ok(AppId::Contact));
    assert!("settings".parse::<AppId>().is_err());
}

#[test]
fn test_open_app_brings_window_to_front() {
    let mut registry = registry();
    assert!(registry.open_app(AppId::Terminal));

    let terminal = registry.get(&id(AppId::Terminal)).unwrap();
    assert!(terminal.is_open);
    assert_eq!(terminal.z_index, 107);
    assert_eq!(registry.highest_z_index(), 107);
    assert_eq!(registry.active_app(), Some(AppId::Terminal));
}

#[test]
fn test_reopening_keeps_a_single_instance() {
    let mut registry = registry();
    registry.open_app(AppId::Projects);
    registry.open_app(AppId::Projects);

    let open: Vec<_> = registry.records().iter().filter(|r| r.is_open).collect();
    assert_eq!(open.len(), 1);
    // Opening an already-open app still raises it
    assert_eq!(z(&registry, AppId::Projects), 108);
}

#[test]
fn test_open_restores_minimized_window() {
    let mut registry = registry();
    registry.open_app(AppId::Contact);
    registry.minimize_window(&id(AppId::Contact));
    assert_eq!(registry.active_app(), None);

    registry.open_app(AppId::Contact);
    let contact = registry.get(&id(AppId::Contact)).unwrap();
    assert!(contact.is_visible());
    assert_eq!(registry.active_app(), Some(AppId::Contact));
}

#[test]
fn test_z_indices_strictly_increase_without_ties() {
    let mut registry = registry();
    for app in AppId::ALL {
        registry.open_app(app);
    }
    registry.focus_window(&id(AppId::Terminal));
    registry.focus_window(&id(AppId::Blog));

    let mut seen: Vec<u64> = registry.records().iter().map(|r| r.z_index).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), AppId::ALL.len());
    assert_eq!(z(&registry, AppId::Blog), registry.highest_z_index());
}

#[test]
fn test_refocusing_topmost_still_advances_counter() {
    let mut registry = registry();
    registry.open_app(AppId::Terminal);
    let before = registry.highest_z_index();

    registry.focus_window(&id(AppId::Terminal));
    assert_eq!(registry.highest_z_index(), before + 1);
    assert_eq!(z(&registry, AppId::Terminal), before + 1);
}

#[test]
fn test_close_hands_focus_to_next_highest() {
    let mut registry = registry();
    registry.open_app(AppId::Terminal);
    registry.open_app(AppId::Blog);
    registry.open_app(AppId::About);

    registry.close_window(&id(AppId::About));
    assert_eq!(registry.active_app(), Some(AppId::Blog));

    registry.minimize_window(&id(AppId::Blog));
    assert_eq!(registry.active_app(), Some(AppId::Terminal));

    registry.close_window(&id(AppId::Terminal));
    assert_eq!(registry.active_app(), None);
}

#[test]
fn test_close_keeps_geometry_and_z() {
    let mut registry = registry();
    registry.open_app(AppId::Ailab);
    registry.update_position(&id(AppId::Ailab), Point::new(5.0, 6.0));
    let z_before = z(&registry, AppId::Ailab);

    registry.close_window(&id(AppId::Ailab));
    let ailab = registry.get(&id(AppId::Ailab)).unwrap();
    assert!(!ailab.is_open);
    assert_eq!(ailab.position, Point::new(5.0, 6.0));
    assert_eq!(ailab.z_index, z_before);
}

#[test]
fn test_focus_on_hidden_window_does_not_make_it_active() {
    let mut registry = registry();
    registry.open_app(AppId::Terminal);

    assert!(registry.focus_window(&id(AppId::Blog)));
    assert_eq!(z(&registry, AppId::Blog), registry.highest_z_index());
    assert_eq!(registry.active_app(), Some(AppId::Terminal));
}

#[test]
fn test_unknown_window_operations_are_noops() {
    let mut registry = registry();
    registry.open_app(AppId::Terminal);
    let before = registry.clone();
    let ghost = WindowId::from("window-ghost");

    assert!(!registry.close_window(&ghost));
    assert!(!registry.minimize_window(&ghost));
    assert!(!registry.focus_window(&ghost));
    assert!(!registry.update_position(&ghost, Point::new(1.0, 1.0)));
    assert!(!registry.update_size(&ghost, Size::new(400.0, 300.0)));

    assert_eq!(registry.records(), before.records());
    assert_eq!(registry.highest_z_index(), before.highest_z_index());
}

#[test]
fn test_visible_windows_in_paint_order() {
    let mut registry = registry();
    registry.open_app(AppId::Blog);
    registry.open_app(AppId::Terminal);
    registry.open_app(AppId::Contact);
    registry.focus_window(&id(AppId::Blog));
    registry.minimize_window(&id(AppId::Contact));

    let order: Vec<AppId> = registry.visible_windows().iter().map(|r| r.app).collect();
    assert_eq!(order, vec![AppId::Terminal, AppId::Blog]);
}

#[test]
fn test_topmost_at_picks_highest_visible_window() {
    let mut registry = registry();
    registry.open_app(AppId::Terminal);
    registry.open_app(AppId::Projects);

    // (200, 200) is covered by both
    assert_eq!(
        registry.topmost_at(Point::new(200.0, 200.0)).map(|r| r.app),
        Some(AppId::Projects)
    );
    registry.minimize_window(&id(AppId::Projects));
    assert_eq!(
        registry.topmost_at(Point::new(200.0, 200.0)).map(|r| r.app),
        Some(AppId::Terminal)
    );
    assert!(registry.topmost_at(Point::new(1900.0, 1000.0)).is_none());
}

#[test]
fn test_focus_scenario() {
    let mut registry = registry();
    registry.open_app(AppId::Projects);
    registry.open_app(AppId::About);
    assert_eq!(registry.active_app(), Some(AppId::About));

    registry.focus_window(&id(AppId::Projects));
    assert_eq!(registry.active_app(), Some(AppId::Projects));
    assert!(z(&registry, AppId::Projects) > z(&registry, AppId::About));

    registry.close_window(&id(AppId::About));
    assert_eq!(registry.active_app(), Some(AppId::Projects));
}
