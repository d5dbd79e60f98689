use eframe::egui;
use egui::{Color32, RichText, Stroke, Vec2};

use crate::localization::{get_text, Language};

// Result from main menu
pub enum MenuResult {
    CreateSprite(u32, u32),
    LanguageChanged(Language),
}

pub struct MainMenu {
    width: u32,
    height: u32,
    language: Language,
}

impl MainMenu {
    pub fn new(width: u32, height: u32, language: Language) -> Self {
        Self { width, height, language }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<MenuResult> {
        let mut result = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.override_text_color = Some(Color32::WHITE);
            ui.style_mut().visuals.widgets.inactive.bg_fill = Color32::from_rgb(60, 60, 60);
            ui.style_mut().visuals.widgets.hovered.bg_fill = Color32::from_rgb(80, 80, 80);
            ui.style_mut().visuals.widgets.active.bg_fill = Color32::from_rgb(100, 100, 100);

            let rect = ui.max_rect();
            ui.painter().rect_filled(rect, 0.0, Color32::from_rgb(35, 35, 60));

            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading(RichText::new("PIXELIQUE").size(48.0).color(Color32::WHITE).strong());
                ui.add_space(40.0);

                // Language selection
                ui.horizontal(|ui| {
                    ui.label(RichText::new(get_text("language", self.language)).size(16.0));
                    if ui.button(RichText::new("Français").size(16.0)).clicked() {
                        self.language = Language::French;
                        result = Some(MenuResult::LanguageChanged(Language::French));
                    }
                    if ui.button(RichText::new("English").size(16.0)).clicked() {
                        self.language = Language::English;
                        result = Some(MenuResult::LanguageChanged(Language::English));
                    }
                });

                ui.add_space(20.0);

                egui::Frame::group(ui.style())
                    .inner_margin(20.0)
                    .rounding(10.0)
                    .stroke(Stroke::new(1.0, Color32::from_rgb(100, 100, 180)))
                    .show(ui, |ui| {
                        ui.set_width(350.0);
                        ui.vertical_centered(|ui| {
                            ui.heading(
                                RichText::new(get_text("sprite_dimensions", self.language)).size(20.0),
                            );
                            ui.add_space(15.0);

                            ui.horizontal(|ui| {
                                ui.label(RichText::new(get_text("width", self.language)).size(16.0));
                                ui.add(egui::DragValue::new(&mut self.width).speed(1).clamp_range(4..=128));
                            });

                            ui.horizontal(|ui| {
                                ui.label(RichText::new(get_text("height", self.language)).size(16.0));
                                ui.add(egui::DragValue::new(&mut self.height).speed(1).clamp_range(4..=128));
                            });

                            ui.add_space(25.0);

                            let button_text = RichText::new(get_text("create_sprite", self.language))
                                .size(18.0)
                                .color(Color32::WHITE);

                            if ui
                                .add(egui::Button::new(button_text).min_size(Vec2::new(200.0, 36.0)))
                                .clicked()
                            {
                                result = Some(MenuResult::CreateSprite(self.width, self.height));
                            }
                        });
                    });
            });
        });

        result
    }
}
