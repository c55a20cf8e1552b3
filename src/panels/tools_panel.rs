use crate::SketchApp;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            let config = app.config().clone();
            let settings = app.sketchpad().settings().clone();
            let marker_active = settings.kind == ToolKind::Marker;

            // Marker section
            ui.label("Marker");
            ui.horizontal(|ui| {
                let presets = [
                    ("Thin", config.thin_marker_width),
                    ("Thick", config.thick_marker_width),
                ];
                for (label, width) in presets {
                    let selected = marker_active && settings.stroke_width == width;
                    if ui.selectable_label(selected, label).clicked() {
                        app.sketchpad_mut().set_tool_stroke(width);
                    }
                }
            });
            let mut width = settings.stroke_width;
            let width_range = config.min_marker_width..=config.max_marker_width;
            if ui.add(egui::Slider::new(&mut width, width_range).text("Width")).changed() {
                app.sketchpad_mut().set_tool_stroke(width);
            }

            ui.separator();

            // Sticker section
            ui.label("Stickers");
            let stickers = app.sketchpad().stickers().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in &stickers {
                    let selected = !marker_active && settings.sticker_glyph == *glyph;
                    let label = egui::RichText::new(glyph).size(20.0);
                    if ui.selectable_label(selected, label).clicked() {
                        app.sketchpad_mut().set_tool_sticker(glyph);
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut app.custom_sticker)
                        .hint_text("Custom sticker")
                        .desired_width(110.0),
                );
                if ui.button("Add").clicked() {
                    let text = std::mem::take(&mut app.custom_sticker);
                    app.sketchpad_mut().add_custom_sticker(&text);
                }
            });
            let mut size = settings.sticker_size;
            let size_range = config.min_sticker_size..=config.max_sticker_size;
            if ui.add(egui::Slider::new(&mut size, size_range).text("Size")).changed() {
                app.sketchpad_mut().set_sticker_size(size);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = settings.color;
                let alpha = egui::color_picker::Alpha::Opaque;
                if egui::color_picker::color_edit_button_srgba(ui, &mut color, alpha).changed() {
                    app.sketchpad_mut().set_color(color);
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.sketchpad().history().can_undo();
                let can_redo = app.sketchpad().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.sketchpad_mut().clear();
                }
            });

            let history = app.sketchpad().history();
            ui.label(format!(
                "Drawn: {}  Undone: {}",
                history.committed().len(),
                history.redo_stack().len()
            ));

            ui.separator();

            if ui.button(format!("Export PNG ({}x)", config.export_scale)).clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.small(status);
            }
        });
}
