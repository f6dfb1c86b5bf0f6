#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Session,
    VideoLink,
}

impl Tab {
    pub const ALL: &[Tab] = &[Tab::Session, Tab::VideoLink];

    pub fn label(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::VideoLink => "Video Link",
        }
    }
}
