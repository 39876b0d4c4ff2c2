//! Section background palette
//!
//! Colors are referenced by name from section descriptors. Names that are
//! not in the palette resolve to [`Color::White`].

use derive_more::Display;

/// Named background colors available to page sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum Color {
    #[default]
    #[display("#fff")]
    White,
    #[display("#f7f9f7")]
    Gray,
    #[display("#36a9ad")]
    Blue,
    #[display("#1b4f63")]
    DarkBlue,
    #[display("#e2b238")]
    Mustard,
    #[display("#1d1d1b")]
    Black,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Gray,
        Color::Blue,
        Color::DarkBlue,
        Color::Mustard,
        Color::Black,
    ];

    /// Descriptor name of this color
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Gray => "gray",
            Color::Blue => "blue",
            Color::DarkBlue => "darkBlue",
            Color::Mustard => "mustard",
            Color::Black => "black",
        }
    }

    /// Look up a palette color by descriptor name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// Resolve a descriptor name, falling back to white for unknown names
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Whether text on this background should be light
    pub fn is_dark(&self) -> bool {
        matches!(self, Color::Blue | Color::DarkBlue | Color::Black)
    }

    /// Foreground color for headings rendered on this background
    pub fn foreground(&self) -> &'static str {
        if self.is_dark() { "#fff" } else { "#1d1d1b" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(Color::from_name("blue"), Some(Color::Blue));
        assert_eq!(Color::from_name("darkBlue"), Some(Color::DarkBlue));
        assert_eq!(Color::from_name("mustard"), Some(Color::Mustard));
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Color::from_name("darkblue"), None);
        assert_eq!(Color::from_name("Blue"), None);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_white() {
        assert_eq!(Color::resolve("chartreuse"), Color::White);
        assert_eq!(Color::resolve(""), Color::White);
    }

    #[test]
    fn test_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_display_is_css_hex() {
        assert_eq!(Color::Blue.to_string(), "#36a9ad");
        assert_eq!(Color::White.to_string(), "#fff");
    }

    #[test]
    fn test_foreground_contrast() {
        assert_eq!(Color::Black.foreground(), "#fff");
        assert_eq!(Color::Gray.foreground(), "#1d1d1b");
        assert!(!Color::Mustard.is_dark());
    }
}
