use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

static PROJECTS_FILE: &str = "projects.json";
static ACHIEVEMENTS_FILE: &str = "achievements.json";
static SKILLS_FILE: &str = "skills.json";

pub static GLOBAL_PROJECTS: LazyLock<Vec<ProjectRecord>> = LazyLock::new(|| {
    load(PROJECTS_FILE, parse_projects).unwrap_or_else(|e| {
        log::error!("project catalog unavailable: {e}");
        Vec::new()
    })
});
pub static GLOBAL_ACHIEVEMENTS: LazyLock<Vec<Achievement>> = LazyLock::new(|| {
    load(ACHIEVEMENTS_FILE, parse_list::<Achievement>).unwrap_or_else(|e| {
        log::error!("achievements unavailable: {e}");
        Vec::new()
    })
});
pub static GLOBAL_SKILLS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| {
    load(SKILLS_FILE, parse_list::<SkillGroup>).unwrap_or_else(|e| {
        log::error!("skills unavailable: {e}");
        Vec::new()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub challenge: String,
    pub solution: String,
    pub results: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub details: ProjectDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectRecord {
    /// Gallery images, or `None` when the project has no gallery.
    pub fn gallery(&self) -> Option<&[String]> {
        if self.details.images.is_empty() {
            None
        } else {
            Some(&self.details.images)
        }
    }

    pub fn gallery_alt(&self, index: usize) -> String {
        format!("{} gallery image {}", self.title, index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub image: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub heading: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),
}

/// Ordered project catalog, loaded from the embedded content on first use.
pub fn projects() -> &'static [ProjectRecord] {
    &GLOBAL_PROJECTS
}

pub fn achievements() -> &'static [Achievement] {
    &GLOBAL_ACHIEVEMENTS
}

pub fn skill_groups() -> &'static [SkillGroup] {
    &GLOBAL_SKILLS
}

fn load<T>(
    name: &str,
    parse: fn(&[u8]) -> Result<Vec<T>, CatalogError>,
) -> Result<Vec<T>, CatalogError> {
    let file = Content::get(name).ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
    let items = parse(&file.data)?;
    log::debug!("loaded {} entries from {name}", items.len());
    Ok(items)
}

fn parse_list<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>, CatalogError> {
    Ok(serde_json::from_slice(data)?)
}

/// Parses a project list and checks that titles are unique.
pub fn parse_projects(data: &[u8]) -> Result<Vec<ProjectRecord>, CatalogError> {
    let records: Vec<ProjectRecord> = parse_list(data)?;
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.title.as_str()) {
            return Err(CatalogError::DuplicateTitle(record.title.clone()));
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let file = Content::get(PROJECTS_FILE).expect("projects.json should be embedded");
        let records = parse_projects(&file.data).expect("embedded catalog should parse");
        assert_eq!(records.len(), projects().len());
        assert!(!records.is_empty());

        let file = Content::get(ACHIEVEMENTS_FILE).expect("achievements.json should be embedded");
        let parsed: Vec<Achievement> = parse_list(&file.data).expect("achievements should parse");
        assert_eq!(parsed.len(), achievements().len());

        let file = Content::get(SKILLS_FILE).expect("skills.json should be embedded");
        let parsed: Vec<SkillGroup> = parse_list(&file.data).expect("skills should parse");
        assert_eq!(parsed.len(), skill_groups().len());
    }

    #[test]
    fn test_catalog_order_is_file_order() {
        let titles = projects().iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles.first(), Some(&"Hate Speech Detection using NLP"));
        assert_eq!(titles.last(), Some(&"DoubtTopia (Android Studio Version)"));
    }

    #[test]
    fn test_zip_cracker_record() {
        let record = projects()
            .iter()
            .find(|p| p.title == "Brute-Force ZIP Password Cracker")
            .expect("catalog should contain the ZIP cracker");
        assert_eq!(record.gallery().map(|g| g.len()), Some(2));
        assert!(record.link.is_some());
        assert_eq!(
            record.gallery_alt(1),
            "Brute-Force ZIP Password Cracker gallery image 2"
        );
    }

    #[test]
    fn test_missing_optional_fields_default_empty() {
        let data = br#"[{
            "title": "Bare",
            "description": "no tags, no gallery, no link",
            "image": "assets/bare.png",
            "details": { "challenge": "c", "solution": "s", "results": "r" }
        }]"#;
        let records = parse_projects(data).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].tags.is_empty());
        assert!(records[0].details.images.is_empty());
        assert!(records[0].gallery().is_none());
        assert!(records[0].link.is_none());
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let data = br#"[
            {"title": "Same", "description": "", "image": "", "details": {"challenge": "", "solution": "", "results": ""}},
            {"title": "Same", "description": "", "image": "", "details": {"challenge": "", "solution": "", "results": ""}}
        ]"#;
        match parse_projects(data) {
            Err(CatalogError::DuplicateTitle(t)) => assert_eq!(t, "Same"),
            other => panic!("expected duplicate title error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(
            parse_projects(b"{ not json"),
            Err(CatalogError::ParseError(_))
        ));
    }
}
