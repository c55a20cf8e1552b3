use egui::{Context, Pos2, Rect};

/// Pointer events in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (button held or not)
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
    /// Pointer entered the canvas
    PointerEnter { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// Raw pointer state for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub hover_pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// Another layer (popup, window) sits between the pointer and the canvas
    pub covered: bool,
}

/// Converts egui pointer state into canvas [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputAdapter {
    canvas_rect: Rect,
    /// Last canvas-space position while the pointer was over the canvas
    last_inside: Option<Pos2>,
    button_down: bool,
}

impl InputAdapter {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_inside: None,
            button_down: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Sample the egui pointer and translate it. `over_canvas` is whether the
    /// canvas widget itself contains the pointer, i.e. nothing is on top of it.
    pub fn process_input(&mut self, ctx: &Context, over_canvas: bool) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            hover_pos: input.pointer.hover_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            covered: !over_canvas,
        });
        self.translate(sample)
    }

    /// Translate one frame of pointer state. Order within a frame is
    /// enter, down, move, up, leave.
    pub fn translate(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = sample
            .hover_pos
            .filter(|pos| !sample.covered && self.canvas_rect.contains(*pos))
            .map(|pos| (pos - self.canvas_rect.min).to_pos2());

        match inside {
            Some(position) => {
                let entered = self.last_inside.is_none();
                if entered {
                    events.push(InputEvent::PointerEnter { position });
                }
                if sample.pressed {
                    self.button_down = true;
                    events.push(InputEvent::PointerDown { position });
                }
                if !entered && self.last_inside != Some(position) {
                    events.push(InputEvent::PointerMove { position });
                }
                if sample.released && self.button_down {
                    self.button_down = false;
                    events.push(InputEvent::PointerUp { position });
                }
                self.last_inside = Some(position);
            }
            None => {
                if self.last_inside.take().is_some() {
                    // Leaving the canvas also ends any gesture
                    self.button_down = false;
                    events.push(InputEvent::PointerLeave);
                }
            }
        }

        events
    }
}
