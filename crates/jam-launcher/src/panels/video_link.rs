use jam_config::{Config, VideoLinkConfig};
use jam_external::vdo_ninja;

use crate::panel::LauncherPanel;
use crate::tab::Tab;

pub struct VideoLinkPanel {
    link: VideoLinkConfig,
    username: String,
    group: String,
    peers: Vec<String>,
    url: String,
    dirty: bool,
}

impl Default for VideoLinkPanel {
    fn default() -> Self {
        let config = Config::default();
        let mut panel = Self {
            link: config.video_link,
            username: config.username,
            group: config.group,
            peers: config.peers,
            url: String::new(),
            dirty: false,
        };
        panel.refresh_url();
        panel
    }
}

impl VideoLinkPanel {
    fn refresh_url(&mut self) {
        self.url =
            vdo_ninja::build_share_link(&self.link, &self.username, &self.group, &self.peers)
                .to_string();
    }

    fn copy_url(&self) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(self.url.as_str()) {
                    tracing::error!("Failed to copy link to clipboard: {e}");
                }
            }
            Err(e) => tracing::error!("Clipboard unavailable: {e}"),
        }
    }

    fn open_in_browser(url: &str) {
        if let Err(e) = open::that(url) {
            tracing::error!("Failed to open {url}: {e}");
        }
    }
}

impl LauncherPanel for VideoLinkPanel {
    fn tab(&self) -> Tab {
        Tab::VideoLink
    }

    fn load(&mut self, config: &Config) {
        self.link = config.video_link.clone();
        self.username = config.username.clone();
        self.group = config.group.clone();
        self.peers = config.peers.clone();
        self.dirty = false;
        self.refresh_url();
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("VDO.Ninja Link Generator");
        ui.separator();
        ui.label(
            "VDO.Ninja is a high-quality web-based video streaming system. \
             Using with Chrome is highly recommended.",
        );
        ui.separator();

        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Mode");
            changed |= ui
                .radio_value(&mut self.link.room_mode, true, "Room")
                .on_hover_text(
                    "Room mode is simpler and better for large groups or groups with \
                     people entering and leaving often, but video quality may be reduced",
                )
                .changed();
            changed |= ui
                .radio_value(&mut self.link.room_mode, false, "Push/View")
                .on_hover_text(
                    "Push/View is the highest quality and most flexible option, but \
                     requires regenerating the link when more people join",
                )
                .changed();
        });

        if self.link.room_mode {
            changed |= ui
                .checkbox(&mut self.link.be_director, "Be Director")
                .on_hover_text(
                    "The room director can get direct feeds and control various \
                     options, can be used for setting up streaming",
                )
                .changed();
        }

        ui.horizontal(|ui| {
            ui.label("Source");
            changed |= ui
                .radio_value(&mut self.link.screen_share_mode, false, "Webcam")
                .on_hover_text("Link will take you directly to webcam configuration")
                .changed();
            changed |= ui
                .radio_value(&mut self.link.screen_share_mode, true, "Screenshare")
                .on_hover_text(
                    "Link will do screensharing only, usable separately from the \
                     webcam link in another browser window",
                )
                .changed();
        });

        if self.link.screen_share_mode {
            changed |= ui
                .checkbox(&mut self.link.large_share, "Large View")
                .on_hover_text("Make your screen share show up larger for other users")
                .changed();
        }

        changed |= ui
            .checkbox(&mut self.link.share_only, "Push Only")
            .on_hover_text("Avoid seeing others, using the link only to push your content")
            .changed();
        changed |= ui
            .checkbox(&mut self.link.show_names, "Show Names")
            .changed();

        ui.horizontal(|ui| {
            ui.label("Extra Parameters");
            changed |= ui
                .text_edit_singleline(&mut self.link.extra_params)
                .on_hover_text(
                    "Extra URL parameters (separated with &), see Advanced Options \
                     in the VDO.Ninja documentation",
                )
                .changed();
        });

        if changed {
            self.dirty = true;
            self.refresh_url();
        }

        ui.separator();

        // Read-only, still selectable for manual copying.
        ui.add(
            egui::TextEdit::multiline(&mut self.url.as_str()).desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            if ui
                .button("Copy")
                .on_hover_text("Copies the link to the clipboard")
                .clicked()
            {
                self.copy_url();
            }
            if ui
                .button("Open")
                .on_hover_text("Open the link in your browser")
                .clicked()
            {
                Self::open_in_browser(&self.url);
            }
            if ui
                .button("More Info...")
                .on_hover_text("Open the VDO.Ninja documentation in your browser")
                .clicked()
            {
                Self::open_in_browser(vdo_ninja::DOCS_URL);
            }
        });
    }

    fn apply(&self, config: &mut Config) {
        config.video_link = self.link.clone();
    }

    fn has_changes(&self) -> bool {
        self.dirty
    }
}
