use jam_config::Config;

use crate::tab::Tab;

/// A launcher settings panel.
pub trait LauncherPanel {
    fn tab(&self) -> Tab;
    fn load(&mut self, config: &Config);
    fn ui(&mut self, ui: &mut egui::Ui);
    fn apply(&self, config: &mut Config);
    fn has_changes(&self) -> bool;
}
