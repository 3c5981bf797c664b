//! Undo/redo history of committed strokes.
//!
//! Two explicit sequences: `committed` in render order, and `redo` holding
//! undone strokes with the most recently undone last. `commit`, `undo`,
//! `redo` and `clear` are the only mutators. A stroke lives in exactly one
//! of the two sequences, and a new commit always discards the redo branch.

use crate::model::Stroke;

#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    committed: Vec<Stroke>,
    redo: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished stroke and invalidate the redo branch.
    pub fn commit(&mut self, stroke: Stroke) {
        log::debug!(
            "commit {} ({} points, dropping {} redo)",
            stroke.id(),
            stroke.path().len(),
            self.redo.len()
        );
        self.committed.push(stroke);
        self.redo.clear();
    }

    /// Move the newest committed stroke onto the redo buffer.
    /// Returns `None` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Stroke> {
        let stroke = self.committed.pop()?;
        log::debug!("undo {}", stroke.id());
        self.redo.push(stroke);
        self.redo.last()
    }

    /// Move the most recently undone stroke back onto the committed list.
    pub fn redo(&mut self) -> Option<&Stroke> {
        let stroke = self.redo.pop()?;
        log::debug!("redo {}", stroke.id());
        self.committed.push(stroke);
        self.committed.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Drop every stroke, committed and undone.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }

    /// Committed strokes in render order.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Undone strokes, most recently undone last.
    pub fn redo_buffer(&self) -> &[Stroke] {
        &self.redo
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
