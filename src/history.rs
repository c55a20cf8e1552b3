use egui::{Color32, Pos2};

use crate::drawable::{Drawable, Mark, factory};
use crate::id_generator::DrawableId;

/// Linear undo/redo history of drawables.
///
/// `committed` is the visible draw list in z-order. A drawable is appended
/// as soon as its gesture begins so it paints while it grows; the gesture's
/// handle stays in `in_progress` until [`History::end_gesture`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    committed: Vec<Drawable>,
    redo_stack: Vec<Drawable>,
    in_progress: Option<DrawableId>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke seeded with `origin`
    pub fn begin_stroke(&mut self, origin: Pos2, width: f32, color: Color32) -> DrawableId {
        self.begin(factory::create_stroke(origin, width, color))
    }

    /// Start a sticker anchored at `origin`
    pub fn begin_sticker(
        &mut self,
        origin: Pos2,
        glyph: &str,
        size: f32,
        color: Color32,
    ) -> DrawableId {
        self.begin(factory::create_sticker(origin, glyph, size, color))
    }

    fn begin(&mut self, drawable: Drawable) -> DrawableId {
        let id = drawable.id();
        log::debug!("Begin {} {id}", drawable.kind());
        self.committed.push(drawable);
        // Any fresh drawing invalidates the redo history
        self.redo_stack.clear();
        self.in_progress = Some(id);
        id
    }

    /// Feed a drag update to the in-progress drawable.
    /// Returns false (and changes nothing) if `handle` is not in progress.
    pub fn extend(&mut self, handle: DrawableId, point: Pos2) -> bool {
        if self.in_progress != Some(handle) {
            return false;
        }
        match self.committed.iter_mut().rev().find(|d| d.id() == handle) {
            Some(drawable) => {
                drawable.drag_to(point);
                true
            }
            None => {
                self.in_progress = None;
                false
            }
        }
    }

    /// Freeze the in-progress drawable. Nothing is removed from the draw list.
    pub fn end_gesture(&mut self) -> Option<DrawableId> {
        let ended = self.in_progress.take();
        if let Some(id) = ended {
            log::debug!("End gesture {id}");
        }
        ended
    }

    /// Move the newest committed drawable onto the redo stack
    pub fn undo(&mut self) -> bool {
        self.in_progress = None;
        match self.committed.pop() {
            Some(drawable) => {
                log::info!("Undo {} {}", drawable.kind(), drawable.id());
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back onto the draw list
    pub fn redo(&mut self) -> bool {
        self.in_progress = None;
        match self.redo_stack.pop() {
            Some(drawable) => {
                log::info!("Redo {} {}", drawable.kind(), drawable.id());
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks
    pub fn clear(&mut self) -> bool {
        let changed = !self.committed.is_empty()
            || !self.redo_stack.is_empty()
            || self.in_progress.is_some();
        self.committed.clear();
        self.redo_stack.clear();
        self.in_progress = None;
        if changed {
            log::info!("Cleared drawing");
        }
        changed
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn in_progress(&self) -> Option<DrawableId> {
        self.in_progress
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
