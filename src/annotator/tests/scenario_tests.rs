//! End-to-end drawing and erasing scenarios.

use super::*;
use crate::model::{FeatureKind, FeatureRef};

#[test]
fn test_line_from_two_clicks_and_double_click() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddLine);

    click(&mut a, c(0.0, 0.0));
    click(&mut a, c(1.0, 1.0));
    let outcome = double_click(&mut a, c(2.0, 0.0));

    let committed = outcome.committed.expect("line committed");
    assert_eq!(committed.kind, FeatureKind::Line);
    assert_eq!(committed.id.as_str(), "line_1");
    assert_eq!(outcome.mode_change, Some(ActiveAction::Idle));

    let lines = a.store().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].points, vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 0.0)]);
    assert_eq!(a.action(), ActiveAction::Idle);
    assert!(a.session().is_none());
}

#[test]
fn test_three_vertex_line_keeps_click_order() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddLine);
    click(&mut a, c(10.0, 20.0));
    hover(&mut a, c(20.0, 30.0));
    click(&mut a, c(30.0, 40.0));
    double_click(&mut a, c(50.0, 60.0));

    let lines = a.store().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0].points,
        vec![c(10.0, 20.0), c(30.0, 40.0), c(50.0, 60.0)]
    );
    assert_eq!(a.action(), ActiveAction::Idle);
}

#[test]
fn test_point_click_returns_to_idle() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddPoint);
    hover(&mut a, c(0.5, 0.5));
    assert_eq!(a.tool().ghost(), Some(c(0.5, 0.5)));

    let outcome = click(&mut a, c(1.0, 1.0));

    assert_eq!(
        outcome.committed,
        Some(FeatureRef::new(FeatureKind::Point, "point_1"))
    );
    assert_eq!(a.store().points().len(), 1);
    assert_eq!(a.store().points()[0].position, c(1.0, 1.0));
    assert_eq!(a.action(), ActiveAction::Idle);
    assert!(a.tool().ghost().is_none());
}

#[test]
fn test_immediate_double_click_discards_line() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddLine);

    let outcome = double_click(&mut a, c(3.0, 3.0));

    assert!(outcome.committed.is_none());
    assert!(a.store().lines().is_empty());
    assert_eq!(a.action(), ActiveAction::Idle);
    assert!(a.session().is_none());
}

#[test]
fn test_single_click_then_double_click_makes_two_vertex_line() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddLine);
    click(&mut a, c(0.0, 0.0));
    double_click(&mut a, c(0.0, 1.0));

    assert_eq!(a.store().lines()[0].points.len(), 2);
}

#[test]
fn test_switching_tools_mid_line_discards_it() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddLine);
    click(&mut a, c(0.0, 0.0));
    click(&mut a, c(1.0, 1.0));

    let outcome = select(&mut a, ActiveAction::AddPoint);
    assert_eq!(outcome.mode_change, Some(ActiveAction::AddPoint));
    assert!(a.store().lines().is_empty());
    assert!(a.session().is_some_and(|s| !s.is_drawing()));
}

#[test]
fn test_cancel_drops_session() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddLine);
    click(&mut a, c(0.0, 0.0));

    let outcome = a.update(Message::Cancel);
    assert_eq!(outcome.mode_change, Some(ActiveAction::Idle));
    assert!(a.session().is_none());

    // Cancelling while idle changes nothing
    assert_eq!(a.update(Message::Cancel), Outcome::default());
}

#[test]
fn test_pointer_ignored_outside_drawing_tools() {
    for action in [
        ActiveAction::Idle,
        ActiveAction::AddPolygon,
        ActiveAction::AddGeoJson,
        ActiveAction::AddWkt,
        ActiveAction::Erase,
    ] {
        let mut a = Annotator::new();
        select(&mut a, action);
        click(&mut a, c(1.0, 1.0));
        double_click(&mut a, c(1.0, 1.0));
        assert!(a.store().is_empty(), "{} stored a feature", action.name());
        assert_eq!(a.action(), action);
    }
}

#[test]
fn test_erase_mode_shows_controls() {
    let mut a = Annotator::new();
    assert!(!a.erase_controls_visible());
    select(&mut a, ActiveAction::Erase);
    assert!(a.erase_controls_visible());
    assert!(a.hint().is_some());
}

#[test]
fn test_delete_and_clear() {
    let mut a = Annotator::new();
    for i in 0..3 {
        select(&mut a, ActiveAction::AddPoint);
        click(&mut a, c(f64::from(i), 0.0));
    }
    select(&mut a, ActiveAction::AddLine);
    click(&mut a, c(0.0, 0.0));
    double_click(&mut a, c(1.0, 1.0));

    select(&mut a, ActiveAction::Erase);
    let outcome = a.update(Message::Delete {
        target: FeatureRef::new(FeatureKind::Point, "point_2"),
    });
    assert_eq!(outcome.removed, 1);
    let ids: Vec<&str> = a.store().points().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["point_1", "point_3"]);

    // Unknown id is a no-op
    let outcome = a.update(Message::Delete {
        target: FeatureRef::new(FeatureKind::Point, "point_2"),
    });
    assert_eq!(outcome.removed, 0);

    let outcome = a.update(Message::ClearAll {
        kind: FeatureKind::Point,
    });
    assert_eq!(outcome.removed, 2);
    assert_eq!(a.store().lines().len(), 1);

    let outcome = a.update(Message::ClearEverything);
    assert_eq!(outcome.removed, 1);
    assert!(a.store().is_empty());
}

#[test]
fn test_selection_cleared_when_feature_erased() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddPoint);
    click(&mut a, c(1.0, 1.0));

    let target = FeatureRef::new(FeatureKind::Point, "point_1");
    a.update(Message::Select {
        target: Some(target.clone()),
    });
    a.update(Message::Hover {
        target: Some(target.clone()),
    });
    assert_eq!(a.store().selected(), Some(&target));

    a.update(Message::Delete { target });
    assert!(a.store().selected().is_none());
    assert!(a.store().hovered().is_none());
}

#[test]
fn test_ids_are_not_reused_after_erase() {
    let mut a = Annotator::new();
    select(&mut a, ActiveAction::AddPoint);
    click(&mut a, c(1.0, 1.0));
    a.update(Message::ClearEverything);

    select(&mut a, ActiveAction::AddPoint);
    let outcome = click(&mut a, c(1.0, 1.0));
    assert_eq!(outcome.committed.expect("point").id.as_str(), "point_2");
}

#[test]
fn test_dirty_tracking() {
    let mut a = Annotator::new();
    assert!(a.is_dirty());
    a.clear_dirty();

    a.update(Message::ViewportChanged {
        latitude: 1.0,
        longitude: 2.0,
        zoom: 3.0,
    });
    assert!(!a.is_dirty());

    select(&mut a, ActiveAction::AddPoint);
    assert!(a.is_dirty());
    a.clear_dirty();

    click(&mut a, c(1.0, 1.0));
    assert!(a.is_dirty());
}
