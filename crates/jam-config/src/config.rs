use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::video_link_config::VideoLinkConfig;

/// Username used when the configured name is empty.
pub const DEFAULT_USERNAME: &str = "NO NAME";

/// Application configuration (jamlink.json).
///
/// Holds the session identity (username, joined group, remote peer
/// roster) alongside the video link options. Peer order matters: the
/// link builder emits per-peer ids in roster order. Duplicate names are
/// allowed, peers may share a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Config {
    pub username: String,
    pub group: String,
    pub peers: Vec<String>,
    pub video_link: VideoLinkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            group: String::new(),
            peers: Vec::new(),
            video_link: VideoLinkConfig::default(),
        }
    }
}

impl Config {
    /// Normalize fields after deserialization or panel edits.
    pub fn validate(&mut self) {
        self.username = self.username.trim().to_string();
        if self.username.is_empty() {
            self.username = DEFAULT_USERNAME.to_string();
        }
        self.group = self.group.trim().to_string();
        for peer in &mut self.peers {
            *peer = peer.trim().to_string();
        }
        self.peers.retain(|p| !p.is_empty());
    }

    /// Read config from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.validate();
        Ok(config)
    }

    /// Write config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
