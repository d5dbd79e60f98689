use std::sync::Arc;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use rfd::FileDialog;

use crate::canvas::Channel;
use crate::export;
use crate::frames::FrameStrip;
use crate::input::{cell_at, PointerButton, PointerEvent, PointerState, StrokeAction, CELL_SIZE};
use crate::localization::{get_text, Language};
use crate::palette::{Palette, PenSelection};
use crate::render::{
    checkerboard, BufferView, CHECKERBOARD_SIZE, MATRIX_ZOOM, PREVIEW_ZOOM, THUMBNAIL_ZOOM,
};

const SWATCH_SIZE: f32 = 22.0;
const COLOR_TIP_SIZE: f32 = 48.0;

pub enum EditorEvent {
    ReturnToMenu,
    ExportFailed(String),
}

/// One open document: the frame strip, the palette, the pointer state and a
/// texture cache per display surface.
pub struct Editor {
    frames: FrameStrip,
    palette: Palette,
    pointer: PointerState,
    matrix_view: BufferView,
    preview_view: BufferView,
    thumbnail_views: Vec<BufferView>,
    export_scale: usize,
}

impl Editor {
    pub fn new(width: usize, height: usize, export_scale: usize) -> Self {
        Self {
            frames: FrameStrip::new(width, height),
            palette: Palette::default(),
            pointer: PointerState::default(),
            matrix_view: BufferView::new("matrix"),
            preview_view: BufferView::new("preview"),
            thumbnail_views: vec![BufferView::new("thumbnail")],
            export_scale,
        }
    }

    pub fn export_scale(&self) -> usize {
        self.export_scale
    }

    pub fn show(&mut self, ctx: &egui::Context, language: Language) -> Option<EditorEvent> {
        let mut event = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(get_text("return_to_menu", language)).clicked() {
                    event = Some(EditorEvent::ReturnToMenu);
                }
                ui.separator();
                ui.label(get_text("export_scale", language));
                ui.add(egui::DragValue::new(&mut self.export_scale).speed(0.1).clamp_range(1..=32));
                if ui.button(get_text("export_image", language)).clicked() {
                    if let Err(message) = self.export_active_frame(language) {
                        event = Some(EditorEvent::ExportFailed(message));
                    }
                }
                ui.separator();
                ui.label(get_text("pointer_help", language));
            });
        });

        egui::SidePanel::left("frames_panel").show(ctx, |ui| {
            ui.heading(get_text("preview", language));
            self.show_preview(ui);
            ui.separator();
            ui.heading(get_text("frames", language));
            self.show_frame_strip(ui, language);
        });

        egui::SidePanel::right("palette_panel").show(ctx, |ui| {
            self.show_color_picker(ui, language);
            ui.separator();
            ui.heading(get_text("palette", language));
            self.show_swatches(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.show_matrix(ui);
            });
        });

        event
    }

    fn export_active_frame(&self, language: Language) -> Result<(), String> {
        let Some(path) = FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("BMP Image", &["bmp"])
            .add_filter("GIF Image", &["gif"])
            .save_file()
        else {
            return Ok(());
        };
        export::export_image(self.frames.active_buffer(), self.export_scale, &path)
            .map_err(|e| format!("{}: {}", get_text("export_failed", language), e))
    }

    // The editing grid. One pointer event per frame is normalized out of
    // the egui response and run through the stroke machine; the resulting
    // paint or sample lands on the cell under the pointer.
    fn show_matrix(&mut self, ui: &mut egui::Ui) {
        let buffer = Arc::clone(self.frames.active_buffer());
        let (width, height) = (buffer.width(), buffer.height());
        let size = Vec2::new(width as f32 * CELL_SIZE, height as f32 * CELL_SIZE);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());

        checkerboard(&painter, response.rect, (CHECKERBOARD_SIZE * MATRIX_ZOOM) as f32);
        let texture = self.matrix_view.texture_id(ui.ctx(), &buffer, MATRIX_ZOOM);
        painter.image(
            texture,
            response.rect,
            Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        let action = self
            .pointer_event(&response)
            .and_then(|ev| self.pointer.on_event(ev));
        if let (Some(action), Some(pos)) = (action, response.interact_pointer_pos()) {
            if let Some((x, y)) = cell_at(response.rect.min, pos, width, height) {
                match action {
                    StrokeAction::Paint => {
                        self.frames.paint_active(x, y, self.palette.pen_color());
                    }
                    StrokeAction::Sample => {
                        self.palette.sample(self.frames.active_buffer().get(x, y));
                    }
                }
            }
        }
    }

    fn pointer_event(&self, response: &egui::Response) -> Option<PointerEvent> {
        let primary = response.clicked_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Primary);
        let secondary = response.clicked_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Secondary);

        if secondary {
            Some(PointerEvent::Down(PointerButton::Secondary))
        } else if primary {
            if self.pointer.is_drawing() {
                Some(PointerEvent::Move)
            } else {
                Some(PointerEvent::Down(PointerButton::Primary))
            }
        } else if self.pointer.is_drawing() {
            // Button released or the pointer left the grid.
            Some(PointerEvent::Up)
        } else {
            None
        }
    }

    fn show_preview(&mut self, ui: &mut egui::Ui) {
        let buffer = Arc::clone(self.frames.active_buffer());
        let size = Vec2::new(
            (buffer.width() * PREVIEW_ZOOM) as f32,
            (buffer.height() * PREVIEW_ZOOM) as f32,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        checkerboard(&painter, response.rect, (CHECKERBOARD_SIZE * PREVIEW_ZOOM) as f32);
        let texture = self.preview_view.texture_id(ui.ctx(), &buffer, PREVIEW_ZOOM);
        painter.image(
            texture,
            response.rect,
            Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn show_frame_strip(&mut self, ui: &mut egui::Ui, language: Language) {
        debug_assert_eq!(self.thumbnail_views.len(), self.frames.len());

        let mut selected = None;
        ui.horizontal_wrapped(|ui| {
            for index in 0..self.frames.len() {
                let buffer = Arc::clone(self.frames.frame(index));
                let size = Vec2::new(
                    (buffer.width() * THUMBNAIL_ZOOM) as f32,
                    (buffer.height() * THUMBNAIL_ZOOM) as f32,
                );
                let (response, painter) = ui.allocate_painter(size, Sense::click());
                checkerboard(&painter, response.rect, (CHECKERBOARD_SIZE * THUMBNAIL_ZOOM) as f32);
                let texture = self.thumbnail_views[index].texture_id(ui.ctx(), &buffer, THUMBNAIL_ZOOM);
                painter.image(
                    texture,
                    response.rect,
                    Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
                if index == self.frames.active_index() {
                    painter.rect_stroke(response.rect, 0.0, Stroke::new(2.0, Color32::LIGHT_GRAY));
                }
                if response.clicked() {
                    selected = Some(index);
                }
            }
        });
        if let Some(index) = selected {
            self.frames.select(index);
        }

        if ui.button(get_text("add_frame", language)).clicked() {
            self.frames.add_frame();
            self.thumbnail_views.push(BufferView::new("thumbnail"));
        }
    }

    fn show_color_picker(&mut self, ui: &mut egui::Ui, language: Language) {
        let label = match self.palette.pen() {
            PenSelection::Sampled(_) => format!(
                "{} ({})",
                get_text("pen_color", language),
                get_text("sampled", language)
            ),
            PenSelection::Slot(_) => get_text("pen_color", language),
        };
        ui.label(label);

        let (rect, _) = ui.allocate_exact_size(Vec2::splat(COLOR_TIP_SIZE), Sense::hover());
        checkerboard(ui.painter(), rect, COLOR_TIP_SIZE / 4.0);
        ui.painter()
            .rect_filled(rect, 2.0, self.palette.pen_color().to_color32());

        ui.add_space(10.0);
        for (label, channel) in [
            ("R", Channel::Red),
            ("G", Channel::Green),
            ("B", Channel::Blue),
            ("A", Channel::Alpha),
        ] {
            let mut value = self.palette.pen_color().channel(channel) as i32;
            ui.horizontal(|ui| {
                ui.label(label);
                if ui.add(egui::Slider::new(&mut value, 0..=255)).changed() {
                    self.palette.set_channel(channel, value);
                }
            });
        }
    }

    fn show_swatches(&mut self, ui: &mut egui::Ui) {
        let mut selected = None;
        let mut add = false;

        ui.horizontal_wrapped(|ui| {
            for (index, color) in self.palette.colors().iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());
                checkerboard(ui.painter(), rect, SWATCH_SIZE / 2.0);
                ui.painter().rect_filled(rect, 2.0, color.to_color32());
                if self.palette.pen() == PenSelection::Slot(index) {
                    ui.painter().rect_stroke(rect, 2.0, Stroke::new(2.0, Color32::LIGHT_GRAY));
                }
                if response.clicked() {
                    selected = Some(index);
                }
            }
            if ui.button("+").clicked() {
                add = true;
            }
        });

        if let Some(index) = selected {
            self.palette.select_slot(index);
        }
        if add {
            self.palette.insert_derived();
        }
    }
}
