use crate::SketchApp;
use crate::app::APP_NAME;
use crate::render::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(APP_NAME);

        let canvas_size = app.sketchpad().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input; every event repaints the sketchpad frame before the next
        app.input_mut().set_canvas_rect(canvas_rect);
        // Popups such as the color picker may cover part of the canvas
        let over_canvas = response.contains_pointer();
        let events = app.input_mut().process_input(ctx, over_canvas);
        for event in events {
            app.sketchpad_mut().handle(event);
        }

        if app.sketchpad().cursor_hidden() && response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        // Render the canvas
        let painter = painter.with_clip_rect(canvas_rect);
        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.sketchpad().frame().paint(&mut surface);
    });
}
