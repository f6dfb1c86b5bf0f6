use serde::{Deserialize, Serialize};

/// Options for a generated VDO.Ninja link.
///
/// `room_mode` and `screen_share_mode` are each presented as a two-way
/// radio choice in the GUI, but they are independent flags here; nothing
/// in the data model enforces exclusivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct VideoLinkConfig {
    /// true = shared room link, false = per-peer push/view link.
    pub room_mode: bool,
    /// Room mode only: generate a director (control) link instead of a
    /// participant link.
    pub be_director: bool,
    /// Link targets the screen-share source instead of the webcam.
    pub screen_share_mode: bool,
    /// Screenshare renders large for viewers.
    pub large_share: bool,
    /// Link only pushes content, the viewer cannot see others.
    pub share_only: bool,
    /// Overlay participant name labels.
    pub show_names: bool,
    /// Raw `&`-delimited `key=value` pairs appended verbatim.
    pub extra_params: String,
}
