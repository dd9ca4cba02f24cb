use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

static PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(load_embedded);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
    #[error("Proficiency {0}% is outside 0-100")]
    ProficiencyOutOfRange(u8),
    #[error("Portfolio lists no {0}")]
    Empty(&'static str),
    #[error("Duplicate project title: {0}")]
    DuplicateProject(String),
    #[error("Invalid link for {owner}: {url}")]
    InvalidLink { owner: String, url: String },
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Skill level as a whole percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Inline style for the filled part of a skill bar.
    pub fn width_style(self) -> String {
        format!("width: {}%", self.0)
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = ContentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ContentError::ProficiencyOutOfRange(value));
        }
        Ok(Self(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gradient {
    BlueCyan,
    CyanBlue,
    TealCyan,
    EmeraldTeal,
    SkyBlue,
    IndigoPurple,
    VioletIndigo,
}

impl Gradient {
    /// Tailwind `from-*`/`to-*` pair for a `bg-gradient-to-r` element.
    pub fn classes(self) -> &'static str {
        match self {
            Self::BlueCyan => "from-blue-400 to-cyan-500",
            Self::CyanBlue => "from-cyan-400 to-blue-500",
            Self::TealCyan => "from-teal-400 to-cyan-500",
            Self::EmeraldTeal => "from-emerald-400 to-teal-500",
            Self::SkyBlue => "from-sky-400 to-blue-500",
            Self::IndigoPurple => "from-indigo-400 to-purple-500",
            Self::VioletIndigo => "from-violet-400 to-indigo-500",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AboutCard {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub years: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: Proficiency,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub gradient: Gradient,
}

impl Project {
    pub fn tech_tags(&self) -> impl Iterator<Item = &str> {
        self.technologies
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

impl SocialKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::GitHub => "devicon-github-original",
            Self::LinkedIn => "devicon-linkedin-plain",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub pitch: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Footer {
    pub holder: String,
    pub built_with: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: Vec<AboutCard>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub footer: Footer,
}

impl Portfolio {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_str::<Portfolio>(raw)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::Empty("projects"));
        }
        if self.skills.is_empty() {
            return Err(ContentError::Empty("skills"));
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
            check_https(&project.title, &project.github_url)?;
            check_https(&project.title, &project.live_url)?;
        }
        for social in &self.contact.socials {
            check_https(&social.label, &social.url)?;
        }
        if !self.contact.email.contains('@') {
            return Err(ContentError::InvalidLink {
                owner: "email".to_string(),
                url: self.contact.mailto(),
            });
        }
        Ok(())
    }
}

fn check_https(owner: &str, url: &str) -> Result<(), ContentError> {
    match url.strip_prefix("https://") {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err(ContentError::InvalidLink {
            owner: owner.to_string(),
            url: url.to_string(),
        }),
    }
}

pub fn load_embedded() -> Portfolio {
    let loaded = ContentAssets::get(PORTFOLIO_FILE)
        .ok_or(ContentError::NotFound)
        .and_then(|file| {
            let raw = std::str::from_utf8(&file.data)
                .map_err(|e| ContentError::ParseError(e.to_string()))?;
            Portfolio::parse(raw)
        });
    match loaded {
        Ok(portfolio) => portfolio,
        Err(e) => {
            log::error!("{e}; rendering an empty portfolio");
            Portfolio::default()
        }
    }
}

pub fn portfolio() -> &'static Portfolio {
    &GLOBAL_PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_raw() -> String {
        let file = ContentAssets::get(PORTFOLIO_FILE).expect("portfolio.json should be embedded");
        String::from_utf8(file.data.into()).expect("portfolio.json should be utf-8")
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let portfolio = Portfolio::parse(&embedded_raw()).expect("embedded content should parse");

        assert_eq!(portfolio.profile.name, "Lin Thit Thwe");
        assert_eq!(portfolio.projects.len(), 7);
        assert_eq!(portfolio.skills.len(), 6);
        assert_eq!(portfolio.contact.socials.len(), 2);
        assert!(portfolio.skills.iter().all(|s| s.level.get() <= 100));
    }

    #[test]
    fn test_global_portfolio_matches_embedded() {
        let global = portfolio();
        assert_eq!(global.projects[0].title, "Social Media Republic");
        assert_eq!(global.projects[0].gradient, Gradient::BlueCyan);
        assert_eq!(global.contact.mailto(), "mailto:thitlin906@gmail.com");
    }

    #[test]
    fn test_proficiency_bounds() {
        assert_eq!(Proficiency::try_from(0).map(Proficiency::get), Ok(0));
        assert_eq!(Proficiency::try_from(100).map(Proficiency::get), Ok(100));
        assert_eq!(
            Proficiency::try_from(101),
            Err(ContentError::ProficiencyOutOfRange(101))
        );
        assert_eq!(
            Proficiency::try_from(90).unwrap().width_style(),
            "width: 90%"
        );
    }

    #[test]
    fn test_tech_tags_are_trimmed() {
        let project = portfolio()
            .projects
            .iter()
            .find(|p| p.title == "Bakery Portfolio")
            .expect("Bakery Portfolio should be listed");

        // raw data keeps the trailing space
        assert!(project.technologies.contains(&"Tailwind ".to_string()));
        let tags = project.tech_tags().collect::<Vec<_>>();
        assert_eq!(tags, vec!["React", "Tailwind"]);
    }

    #[test]
    fn test_project_order_is_preserved() {
        let titles = portfolio()
            .projects
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles.first(), Some(&"Social Media Republic"));
        assert_eq!(titles.last(), Some(&"Valentine Project"));
    }

    fn minimal(projects: &str, skills: &str) -> String {
        format!(
            r#"{{
                "profile": {{ "name": "A", "headline": "B", "tagline": "C", "location": "D" }},
                "about": [],
                "education": [],
                "certifications": [],
                "skills": {skills},
                "projects": {projects},
                "contact": {{
                    "heading": "", "pitch": "", "email": "a@b.c", "phone": "", "location": "",
                    "socials": []
                }},
                "footer": {{ "holder": "", "built_with": "", "tagline": "" }}
            }}"#
        )
    }

    const ONE_SKILL: &str = r#"[{ "name": "Rust", "level": 50 }]"#;

    fn project(title: &str, url: &str) -> String {
        format!(
            r#"{{ "title": "{title}", "description": "", "technologies": [],
                 "github_url": "{url}", "live_url": "{url}", "gradient": "sky-blue" }}"#
        )
    }

    #[test]
    fn test_rejects_out_of_range_skill() {
        let raw = minimal(
            &format!("[{}]", project("P", "https://example.com")),
            r#"[{ "name": "Rust", "level": 150 }]"#,
        );
        match Portfolio::parse(&raw) {
            Err(ContentError::ParseError(msg)) => assert!(msg.contains("outside 0-100")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_lists() {
        let raw = minimal("[]", ONE_SKILL);
        assert_eq!(
            Portfolio::parse(&raw).unwrap_err(),
            ContentError::Empty("projects")
        );

        let raw = minimal(&format!("[{}]", project("P", "https://example.com")), "[]");
        assert_eq!(
            Portfolio::parse(&raw).unwrap_err(),
            ContentError::Empty("skills")
        );
    }

    #[test]
    fn test_rejects_duplicate_titles() {
        let p = project("Same", "https://example.com");
        let raw = minimal(&format!("[{p}, {p}]"), ONE_SKILL);
        assert_eq!(
            Portfolio::parse(&raw).unwrap_err(),
            ContentError::DuplicateProject("Same".to_string())
        );
    }

    #[test]
    fn test_rejects_insecure_links() {
        let raw = minimal(
            &format!("[{}]", project("Plain", "http://example.com")),
            ONE_SKILL,
        );
        assert_eq!(
            Portfolio::parse(&raw).unwrap_err(),
            ContentError::InvalidLink {
                owner: "Plain".to_string(),
                url: "http://example.com".to_string()
            }
        );

        let raw = minimal(&format!("[{}]", project("Bare", "https://")), ONE_SKILL);
        assert!(matches!(
            Portfolio::parse(&raw),
            Err(ContentError::InvalidLink { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_gradient() {
        let raw = minimal(
            &format!("[{}]", project("P", "https://example.com")).replace("sky-blue", "red-green"),
            ONE_SKILL,
        );
        assert!(matches!(
            Portfolio::parse(&raw),
            Err(ContentError::ParseError(_))
        ));
    }

    #[test]
    fn test_rejects_bad_email() {
        let raw = embedded_raw().replace("\"thitlin906@gmail.com\"", "\"thitlin906\"");
        assert_eq!(
            Portfolio::parse(&raw).unwrap_err(),
            ContentError::InvalidLink {
                owner: "email".to_string(),
                url: "mailto:thitlin906".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_insecure_social() {
        let raw = embedded_raw().replace(
            "https://linkedin.com/in/lin-thit-thwe",
            "http://linkedin.com/in/lin-thit-thwe",
        );
        match Portfolio::parse(&raw) {
            Err(ContentError::InvalidLink { owner, url }) => {
                assert_eq!(owner, "LinkedIn");
                assert_eq!(url, "http://linkedin.com/in/lin-thit-thwe");
            }
            other => panic!("expected invalid link, got {other:?}"),
        }
    }

    #[test]
    fn test_gradient_classes() {
        assert_eq!(Gradient::BlueCyan.classes(), "from-blue-400 to-cyan-500");
        assert_eq!(Gradient::VioletIndigo.classes(), "from-violet-400 to-indigo-500");
    }
}
