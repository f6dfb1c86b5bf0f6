// Configuration structs (session identity, video link options)

pub mod config;
pub mod video_link_config;

pub use config::{Config, DEFAULT_USERNAME};
pub use video_link_config::VideoLinkConfig;
