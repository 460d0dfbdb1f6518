//! Static portfolio content: identity, projects and skills.
//!
//! Built-in defaults can be replaced by a `[content]` table in the config
//! file; any sub-table left out keeps its default.

use std::collections::HashSet;

use serde::Deserialize;

use folio_types::config::FolioConfig;
use folio_types::error::{FolioError, Result};

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub bio: String,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    /// Unique lookup key for `run`.
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// Everything the output panels display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Content {
    pub identity: Identity,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
}

impl Content {
    /// Build content from the config's `[content]` table, or the defaults.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let content = match &config.content {
            Some(value) => value.clone().try_into::<Content>()?,
            None => Self::default(),
        };
        content.validate()?;
        Ok(content)
    }

    /// Find a project by slug.
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    fn validate(&self) -> Result<()> {
        if self.identity.name.trim().is_empty() {
            return Err(FolioError::Content("identity name is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.slug.is_empty() || project.slug.contains(' ') {
                return Err(FolioError::Content(format!(
                    "invalid slug for project '{}': '{}'",
                    project.name, project.slug
                )));
            }
            // `run` arguments are lower-cased before lookup.
            if project.slug != project.slug.to_lowercase() {
                return Err(FolioError::Content(format!(
                    "slug must be lower-case: {}",
                    project.slug
                )));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(FolioError::Content(format!(
                    "duplicate slug: {}",
                    project.slug
                )));
            }
        }
        Ok(())
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Sam Rivera".to_string(),
            headline: "Software Engineer | Systems & Web".to_string(),
            bio: "I build fast, reliable software and enjoy making tools that \
                  feel good to use. Lately that means Rust services, terminal \
                  interfaces and small web experiments like this one."
                .to_string(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            projects: vec![
                Project {
                    name: "Terminal Portfolio".to_string(),
                    slug: "terminal-portfolio".to_string(),
                    description: "This site: a portfolio you drive from a shell prompt."
                        .to_string(),
                    stack: vec!["Rust".to_string(), "TOML".to_string()],
                    live_url: Some("https://example.com/portfolio".to_string()),
                    repo_url: Some("https://example.com/git/portfolio".to_string()),
                    images: Vec::new(),
                },
                Project {
                    name: "Pixel Garden".to_string(),
                    slug: "pixel-garden".to_string(),
                    description: "A cellular-automaton toy that grows pixel-art plants."
                        .to_string(),
                    stack: vec!["TypeScript".to_string(), "Canvas".to_string()],
                    live_url: Some("https://example.com/pixel-garden".to_string()),
                    repo_url: None,
                    images: vec!["pixel-garden.png".to_string()],
                },
                Project {
                    name: "Ledger CLI".to_string(),
                    slug: "ledger-cli".to_string(),
                    description: "Plain-text double-entry bookkeeping from the command line."
                        .to_string(),
                    stack: vec!["Rust".to_string(), "SQLite".to_string()],
                    live_url: None,
                    repo_url: Some("https://example.com/git/ledger-cli".to_string()),
                    images: Vec::new(),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Languages".to_string(),
                    skills: ["Rust", "TypeScript", "Python", "SQL"]
                        .map(String::from)
                        .to_vec(),
                },
                SkillCategory {
                    title: "Tools".to_string(),
                    skills: ["Git", "Docker", "Linux", "PostgreSQL"]
                        .map(String::from)
                        .to_vec(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let content = Content::from_config(&FolioConfig::default()).unwrap();
        assert_eq!(content, Content::default());
    }

    #[test]
    fn project_lookup_by_slug() {
        let content = Content::default();
        assert_eq!(
            content.project("pixel-garden").map(|p| p.name.as_str()),
            Some("Pixel Garden")
        );
        assert!(content.project("nope").is_none());
    }

    #[test]
    fn defaults_include_project_without_live_url() {
        let content = Content::default();
        assert!(content.projects.iter().any(|p| p.live_url.is_none()));
        assert!(content.projects.iter().any(|p| p.live_url.is_some()));
    }

    #[test]
    fn config_overrides_identity_and_keeps_other_defaults() {
        let config = FolioConfig::from_toml(
            "[content.identity]\nname = \"Jane Doe\"\nheadline = \"Engineer\"\n",
        )
        .unwrap();
        let content = Content::from_config(&config).unwrap();
        assert_eq!(content.identity.name, "Jane Doe");
        assert_eq!(content.identity.bio, "");
        assert_eq!(content.projects, Content::default().projects);
    }

    #[test]
    fn config_projects_parse() {
        let config = FolioConfig::from_toml(
            r#"
            [[content.projects]]
            name = "Demo"
            slug = "demo"
            description = "A demo"
            stack = ["Rust"]
            live_url = "https://demo.example"
            "#,
        )
        .unwrap();
        let content = Content::from_config(&config).unwrap();
        assert_eq!(content.projects.len(), 1);
        let demo = content.project("demo").unwrap();
        assert_eq!(demo.live_url.as_deref(), Some("https://demo.example"));
        assert!(demo.images.is_empty());
    }

    #[test]
    fn duplicate_slug_rejected() {
        let config = FolioConfig::from_toml(
            r#"
            [[content.projects]]
            name = "A"
            slug = "same"
            description = ""
            [[content.projects]]
            name = "B"
            slug = "same"
            description = ""
            "#,
        )
        .unwrap();
        let err = Content::from_config(&config).unwrap_err();
        assert!(format!("{err}").contains("duplicate slug"));
    }

    #[test]
    fn uppercase_slug_rejected() {
        let config = FolioConfig::from_toml(
            "[[content.projects]]\nname = \"A\"\nslug = \"Web\"\ndescription = \"\"\n",
        )
        .unwrap();
        assert!(Content::from_config(&config).is_err());
    }
}
