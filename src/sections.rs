use std::fmt;
use std::str::FromStr;

use crate::content::ContentError;

/// Page sections in the order they are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!("#projects".parse::<Section>(), Ok(Section::Projects));
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            "blog".parse::<Section>(),
            Err(ContentError::UnknownSection("blog".to_string()))
        );
        // ids are lowercase only
        assert!("Home".parse::<Section>().is_err());
    }

    #[test]
    fn test_page_order_and_default() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Section::ALL.first(), Some(&Section::Home));
        assert_eq!(Section::ALL.last(), Some(&Section::Contact));
        assert_eq!(Section::Skills.label(), "Skills");
        assert_eq!(Section::About.to_string(), "about");
    }
}
