//! Integration tests: StrokeHistory commit/undo/redo laws.
//!
//! Exercises the history purely structurally; no rendering involved.

use pretty_assertions::assert_eq;
use serenart_core::{Color, PaintStyle, Point, Stroke, StrokeBuilder, StrokeHistory, StrokeId};

fn stroke(seed: f64) -> Stroke {
    let mut b = StrokeBuilder::begin(
        Point::new(seed, seed),
        PaintStyle::brush(Color::from_argb(0xFF4ECDC4), 10.0),
    );
    b.line_to(Point::new(seed + 20.0, seed));
    b.line_to(Point::new(seed + 20.0, seed + 20.0));
    b.finish()
}

fn ids(strokes: &[Stroke]) -> Vec<StrokeId> {
    strokes.iter().map(Stroke::id).collect()
}

fn split(h: &StrokeHistory) -> (Vec<StrokeId>, Vec<StrokeId>) {
    (ids(h.committed()), ids(h.redo_buffer()))
}

// ─── Round-trip law ─────────────────────────────────────────────────────

#[test]
fn undo_then_redo_n_times_restores_split() {
    for total in 0..6 {
        for n in 0..=total {
            let mut h = StrokeHistory::new();
            for i in 0..total {
                h.commit(stroke(i as f64 * 10.0));
            }
            let before = split(&h);

            for _ in 0..n {
                assert!(h.undo().is_some());
            }
            for _ in 0..n {
                assert!(h.redo().is_some());
            }

            assert_eq!(split(&h), before, "total={total} n={n}");
        }
    }
}

#[test]
fn round_trip_law_holds_from_partially_undone_state() {
    let mut h = StrokeHistory::new();
    for i in 0..5 {
        h.commit(stroke(i as f64));
    }
    h.undo();
    h.undo();
    let before = split(&h);

    for _ in 0..3 {
        h.undo();
    }
    for _ in 0..3 {
        h.redo();
    }
    assert_eq!(split(&h), before);
}

// ─── Divergence ─────────────────────────────────────────────────────────

#[test]
fn commit_after_undos_clears_redo_buffer() {
    for undos in 1..=4 {
        let mut h = StrokeHistory::new();
        for i in 0..4 {
            h.commit(stroke(i as f64));
        }
        for _ in 0..undos {
            h.undo();
        }
        assert_eq!(h.redo_buffer().len(), undos);

        h.commit(stroke(99.0));
        assert!(h.redo_buffer().is_empty());
        assert!(!h.can_redo());
        assert!(h.redo().is_none());
    }
}

#[test]
fn no_stroke_is_in_both_sequences() {
    let mut h = StrokeHistory::new();
    for i in 0..6 {
        h.commit(stroke(i as f64));
    }
    for step in 0..10 {
        if step % 3 == 0 {
            h.redo();
        } else {
            h.undo();
        }
        let (committed, redo) = split(&h);
        assert!(committed.iter().all(|id| !redo.contains(id)));
        assert_eq!(committed.len() + redo.len(), 6);
    }
}

#[test]
fn can_undo_and_can_redo_track_emptiness() {
    let mut h = StrokeHistory::new();
    assert_eq!((h.can_undo(), h.can_redo()), (false, false));
    h.commit(stroke(0.0));
    assert_eq!((h.can_undo(), h.can_redo()), (true, false));
    h.undo();
    assert_eq!((h.can_undo(), h.can_redo()), (false, true));
    h.redo();
    assert_eq!((h.can_undo(), h.can_redo()), (true, false));
}

// ─── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn new_commit_discards_undone_stroke_permanently() {
    let (a, b, c, d) = (stroke(1.0), stroke(2.0), stroke(3.0), stroke(4.0));
    let (ia, ib, ic, id) = (a.id(), b.id(), c.id(), d.id());

    let mut h = StrokeHistory::new();
    h.commit(a);
    h.commit(b);
    h.commit(c);
    assert!(h.can_undo());
    assert_eq!(ids(h.committed()), vec![ia, ib, ic]);

    assert_eq!(h.undo().map(Stroke::id), Some(ic));
    assert_eq!(split(&h), (vec![ia, ib], vec![ic]));

    h.commit(d);
    assert_eq!(split(&h), (vec![ia, ib, id], vec![]));
}
