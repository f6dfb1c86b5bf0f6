//! VDO.Ninja link generation.
//!
//! Builds a fully parameterized <https://vdo.ninja/> URL from the video
//! link options and the session identity (local username, joined group,
//! remote peer roster). Audio is always suppressed in the generated link
//! since the host session carries the audio itself.

mod link;
mod params;

pub use link::{BASE_URL, DOCS_URL, build_share_link, derive_id, parse_extra_params};
pub use params::ParamSet;
