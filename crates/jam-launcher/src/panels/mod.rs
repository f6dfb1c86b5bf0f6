pub mod session;
pub mod video_link;
