mod canvas;
mod config;
mod editor;
mod export;
mod frames;
mod input;
mod localization;
mod main_menu;
mod palette;
mod render;

use eframe::egui;

use config::AppConfig;
use editor::{Editor, EditorEvent};
use localization::get_text;
use main_menu::{MainMenu, MenuResult};

// Constants
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 760.0;

// Enum to represent the current state of the application
enum AppState {
    MainMenu(MainMenu),
    Editor(Editor),
}

// Main application struct
struct MyApp {
    state: AppState,
    config: AppConfig,
    error_message: Option<String>,
    show_error: bool,
}

impl MyApp {
    fn new(config: AppConfig) -> Self {
        let menu = MainMenu::new(config.grid_width, config.grid_height, config.language);
        Self {
            state: AppState::MainMenu(menu),
            config,
            error_message: None,
            show_error: false,
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Show error message dialog if needed
        if self.show_error {
            egui::Window::new(get_text("error", self.config.language))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    if let Some(message) = &self.error_message {
                        ui.label(message);
                    }
                    if ui.button(get_text("ok", self.config.language)).clicked() {
                        self.show_error = false;
                        self.error_message = None;
                    }
                });
        }

        match &mut self.state {
            AppState::MainMenu(menu) => match menu.show(ctx) {
                Some(MenuResult::LanguageChanged(language)) => {
                    self.config.language = language;
                    self.config.save();
                }
                Some(MenuResult::CreateSprite(width, height)) => {
                    self.config.grid_width = width;
                    self.config.grid_height = height;
                    self.config.save();
                    log::info!("creating {}x{} sprite", width, height);
                    self.state = AppState::Editor(Editor::new(
                        width as usize,
                        height as usize,
                        self.config.export_scale,
                    ));
                }
                None => {}
            },
            AppState::Editor(editor) => match editor.show(ctx, self.config.language) {
                Some(EditorEvent::ReturnToMenu) => {
                    self.config.export_scale = editor.export_scale();
                    self.config.save();
                    self.state = AppState::MainMenu(MainMenu::new(
                        self.config.grid_width,
                        self.config.grid_height,
                        self.config.language,
                    ));
                }
                Some(EditorEvent::ExportFailed(message)) => {
                    log::error!("{}", message);
                    self.error_message = Some(message);
                    self.show_error = true;
                }
                None => {}
            },
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load();
    log::info!("starting pixelique");

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ..Default::default()
    };
    eframe::run_native(
        "Pixelique",
        native_options,
        Box::new(|_cc| Box::new(MyApp::new(config))),
    )
}
