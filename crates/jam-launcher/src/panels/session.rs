use jam_config::Config;

use crate::panel::LauncherPanel;
use crate::tab::Tab;
use crate::widgets::peer_list::PeerListWidget;

pub struct SessionPanel {
    username: String,
    group: String,
    peers: Vec<String>,
    dirty: bool,
}

impl Default for SessionPanel {
    fn default() -> Self {
        let config = Config::default();
        Self {
            username: config.username,
            group: config.group,
            peers: config.peers,
            dirty: false,
        }
    }
}

impl LauncherPanel for SessionPanel {
    fn tab(&self) -> Tab {
        Tab::Session
    }

    fn load(&mut self, config: &Config) {
        self.username = config.username.clone();
        self.group = config.group.clone();
        self.peers = config.peers.clone();
        self.dirty = false;
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Session");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Username");
            if ui.text_edit_singleline(&mut self.username).changed() {
                self.dirty = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Group");
            if ui.text_edit_singleline(&mut self.group).changed() {
                self.dirty = true;
            }
        });

        ui.separator();

        let prev = self.peers.clone();
        PeerListWidget::new("Remote Peers", &mut self.peers).show(ui);
        if self.peers != prev {
            self.dirty = true;
        }
    }

    fn apply(&self, config: &mut Config) {
        config.username = self.username.clone();
        config.group = self.group.clone();
        config.peers = self.peers.clone();
    }

    fn has_changes(&self) -> bool {
        self.dirty
    }
}
