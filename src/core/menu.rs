#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuLink {
    /// Same-page link: clicking toggles the item instead of navigating.
    Anchor,
    /// Another page or an external site: the browser navigates normally.
    Page,
}

impl MenuLink {
    pub fn classify(href: Option<&str>) -> Self {
        match href {
            Some(h) if !h.is_empty() && !h.contains(".html") && !h.starts_with("http") => {
                Self::Anchor
            }
            _ => Self::Page,
        }
    }
}
