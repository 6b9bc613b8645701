/// Values the public pages need besides stored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Appended to every page title and shown in the footer.
    pub title: String,
}

impl SiteSettings {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::new("Portfolio")
    }
}
