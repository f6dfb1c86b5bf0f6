use std::path::PathBuf;

use jam_config::Config;

use crate::panel::LauncherPanel;
use crate::panels::session::SessionPanel;
use crate::panels::video_link::VideoLinkPanel;
use crate::tab::Tab;

pub struct LauncherApp {
    pub config: Config,
    config_path: PathBuf,
    active_tab: Tab,
    panels: Vec<Box<dyn LauncherPanel>>,
}

impl LauncherApp {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let mut panels: Vec<Box<dyn LauncherPanel>> = vec![
            Box::new(SessionPanel::default()),
            Box::new(VideoLinkPanel::default()),
        ];

        for panel in &mut panels {
            panel.load(&config);
        }

        Self {
            config,
            config_path,
            active_tab: Tab::Session,
            panels,
        }
    }

    /// Apply all panel changes to the config and save to file.
    ///
    /// Panels are reloaded afterwards so the link panel picks up session
    /// edits made on another tab.
    pub fn apply_and_save(&mut self) {
        for panel in &self.panels {
            panel.apply(&mut self.config);
        }
        self.config.validate();

        if let Err(e) = self.config.write(&self.config_path) {
            tracing::error!("Failed to save config: {e}");
        } else {
            tracing::info!("Configuration saved");
        }

        for panel in &mut self.panels {
            panel.load(&self.config);
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel: session identity
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("JamLink");
                ui.separator();
                ui.label(format!("User: {}", self.config.username));
            });
        });

        // Bottom panel: action buttons
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    self.apply_and_save();
                }
                if ui.button("Close").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                // Show unsaved indicator
                let has_changes = self.panels.iter().any(|p| p.has_changes());
                if has_changes {
                    ui.label("(unsaved changes)");
                }
            });
        });

        // Left panel: tab bar
        egui::SidePanel::left("tab_panel")
            .resizable(false)
            .default_width(110.0)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    for &tab in Tab::ALL {
                        let selected = self.active_tab == tab;
                        if ui.selectable_label(selected, tab.label()).clicked() {
                            self.active_tab = tab;
                        }
                    }
                });
            });

        // Central panel: active panel content
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(panel) = self.panels.iter_mut().find(|p| p.tab() == self.active_tab) {
                    panel.ui(ui);
                }
            });
        });
    }
}
