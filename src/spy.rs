/// Distance below the top of the viewport used to decide which section is
/// being read.
pub const SCROLL_OFFSET: f64 = 100.0;

/// Vertical extent of one page section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// Pick the section under `scroll_y + SCROLL_OFFSET`. Sections are checked in
/// the given order and the first match wins. Returns `None` when the point
/// falls outside every section, in which case the caller keeps whatever was
/// active before.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], scroll_y: f64) -> Option<&'a str> {
    let position = scroll_y + SCROLL_OFFSET;
    sections
        .iter()
        .find(|s| position >= s.top && position < s.top + s.height)
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds<'static>> {
        vec![
            SectionBounds { id: "hero", top: 0.0, height: 800.0 },
            SectionBounds { id: "about", top: 800.0, height: 600.0 },
            SectionBounds { id: "skills", top: 1400.0, height: 500.0 },
        ]
    }

    #[test]
    fn test_active_section() {
        let sections = layout();
        assert_eq!(active_section(&sections, 0.0), Some("hero"));
        assert_eq!(active_section(&sections, 699.0), Some("hero"));
        assert_eq!(active_section(&sections, 700.0), Some("about"));
        assert_eq!(active_section(&sections, 1300.0), Some("skills"));
        assert_eq!(active_section(&sections, 1800.0), None);
    }

    #[test]
    fn test_first_match_wins() {
        let sections = vec![
            SectionBounds { id: "outer", top: 0.0, height: 1000.0 },
            SectionBounds { id: "inner", top: 100.0, height: 100.0 },
        ];
        assert_eq!(active_section(&sections, 50.0), Some("outer"));
        assert_eq!(active_section(&[], 50.0), None);
    }
}
