/// Addressable regions of the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionAnchor {
    Vision,
    Features,
    Audience,
    HowItWorks,
    Team,
}

impl SectionAnchor {
    /// Entries shown in the header menu, in display order.
    pub const MENU: [SectionAnchor; 4] = [
        SectionAnchor::Features,
        SectionAnchor::Audience,
        SectionAnchor::HowItWorks,
        SectionAnchor::Team,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Vision => "vision",
            SectionAnchor::Features => "features",
            SectionAnchor::Audience => "audience",
            SectionAnchor::HowItWorks => "how-it-works",
            SectionAnchor::Team => "team",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionAnchor::Vision => "Our Vision",
            SectionAnchor::Features => "Features",
            SectionAnchor::Audience => "Who Uses It",
            SectionAnchor::HowItWorks => "How It Works",
            SectionAnchor::Team => "Team",
        }
    }

    /// Fragment link for plain `<a href>` navigation.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_ids_match_page_sections() {
        let ids: Vec<&str> = SectionAnchor::MENU.iter().map(|anchor| anchor.id()).collect();
        assert_eq!(ids, ["features", "audience", "how-it-works", "team"]);
    }

    #[test]
    fn href_is_fragment() {
        assert_eq!(SectionAnchor::HowItWorks.href(), "#how-it-works");
    }
}
