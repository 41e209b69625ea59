use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::Properties;

use crate::error::SiteError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Pillar {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub emoji: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AudienceGroup {
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Requirement {
    pub name: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub vision: Vec<Pillar>,
    pub features: Vec<Feature>,
    pub demo_steps: Vec<String>,
    pub audiences: Vec<AudienceGroup>,
    pub stats: Vec<Stat>,
    pub requirements: Vec<Requirement>,
    pub steps: Vec<Step>,
    pub team: Vec<TeamMember>,
    pub mission: Vec<Pillar>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, SiteError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.features.is_empty() {
            return Err(SiteError::EmptyContent("features"));
        }
        if self.audiences.is_empty() {
            return Err(SiteError::EmptyContent("audiences"));
        }
        if self.steps.is_empty() {
            return Err(SiteError::EmptyContent("steps"));
        }
        if self.team.is_empty() {
            return Err(SiteError::EmptyContent("team members"));
        }
        Ok(())
    }
}

/// Content bundled into the binary at build time.
pub fn load() -> Result<Rc<SiteContent>, SiteError> {
    SiteContent::parse(SITE_JSON).map(Rc::new)
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<SiteContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = load().unwrap();
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.audiences.len(), 4);
        assert_eq!(content.steps.len(), 4);
        assert_eq!(content.team.len(), 2);
        assert!(content.team.iter().all(|member| member.github.starts_with("https://")));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = SiteContent::parse("{ \"features\": [").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }

    #[test]
    fn empty_team_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value["team"] = serde_json::json!([]);
        let err = SiteContent::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, SiteError::EmptyContent("team members")));
    }
}
