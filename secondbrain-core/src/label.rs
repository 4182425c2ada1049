//! Event labels (display categories).

/// A display category with its dot color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub id: &'static str,
    pub name: &'static str,
    /// Hex color, `#rrggbb`
    pub dot: &'static str,
}

/// Dot color for events without a known label.
pub const DEFAULT_DOT: &str = "#a1a1aa";

pub const LABELS: [Label; 4] = [
    Label { id: "work", name: "Travail", dot: "#60a5fa" },
    Label { id: "perso", name: "Perso", dot: "#f472b6" },
    Label { id: "sante", name: "Santé", dot: "#34d399" },
    Label { id: "sport", name: "Sport", dot: "#f59e0b" },
];

impl Label {
    pub fn find(id: &str) -> Option<&'static Label> {
        LABELS.iter().find(|l| l.id == id)
    }

    /// Dot color for an optional label id.
    pub fn dot_for(id: Option<&str>) -> &'static str {
        id.and_then(Label::find).map(|l| l.dot).unwrap_or(DEFAULT_DOT)
    }

    /// The color as an RGB triple.
    pub fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_and_dot() {
        assert_eq!(Label::find("sport").map(|l| l.name), Some("Sport"));
        assert_eq!(Label::find("nope"), None);
        assert_eq!(Label::dot_for(Some("work")), "#60a5fa");
        assert_eq!(Label::dot_for(Some("nope")), DEFAULT_DOT);
        assert_eq!(Label::dot_for(None), DEFAULT_DOT);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Label::rgb("#60a5fa"), Some((0x60, 0xa5, 0xfa)));
        assert_eq!(Label::rgb("60a5fa"), None);
        assert_eq!(Label::rgb("#zzzzzz"), None);
    }
}
