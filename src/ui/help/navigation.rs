#[derive(Debug, Clone)]
pub struct HelpModalState {
    pub current_section: HelpSection,
    pub scroll_offset: u16,
    pub max_scroll: u16,
    pub app_version: String,
    pub data_path: Option<String>,
    pub record_count: usize,
    pub cluster_count: usize,
    pub item_type_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSection {
    About,
    Filters,
    Charts,
    KeyboardShortcuts,
}

impl HelpSection {
    pub fn next(self) -> Self {
        match self {
            Self::About => Self::Filters,
            Self::Filters => Self::Charts,
            Self::Charts => Self::KeyboardShortcuts,
            Self::KeyboardShortcuts => Self::About,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::About => Self::KeyboardShortcuts,
            Self::Filters => Self::About,
            Self::Charts => Self::Filters,
            Self::KeyboardShortcuts => Self::Charts,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::About => "About",
            Self::Filters => "Filters & Lookup",
            Self::Charts => "Charts",
            Self::KeyboardShortcuts => "Keyboard Shortcuts",
        }
    }

    pub fn all_sections() -> Vec<Self> {
        vec![
            Self::About,
            Self::Filters,
            Self::Charts,
            Self::KeyboardShortcuts,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_cycle() {
        for section in HelpSection::all_sections() {
            assert_eq!(section.next().previous(), section);
        }
        assert_eq!(HelpSection::KeyboardShortcuts.next(), HelpSection::About);
    }
}
