//! The project catalog.
//!
//! A read-only, ordered list of [`Project`] records fixed at startup. The
//! default catalog is embedded from `catalog.toml`; [`Catalog::load`] reads
//! the same shape from disk so deployments and tests can substitute their own.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};

const EMBEDDED: &str = include_str!("../catalog.toml");

/// Number of entries the home page shows.
pub const HOME_PREFIX_LEN: usize = 2;

/// One portfolio entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub repository_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Display form of `created_at`, e.g. "January 2024".
    pub fn created_label(&self) -> String {
        self.created_at.format("%B %Y").to_string()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// The ordered, immutable set of projects the site serves.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog from projects in display order.
    ///
    /// Fails if any id is empty or appears twice.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id.trim().is_empty() {
                return Err(Error::Catalog(format!("project {:?} has an empty id", project.title)));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate project id {:?}", project.id)));
            }
        }
        Ok(Self { projects })
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED)
    }

    /// Parses a `[[projects]]` TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.projects)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks a project up by id. Linear scan; the catalog is tens of entries.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The entries shown on the home page: the first [`HOME_PREFIX_LEN`] in
    /// catalog order. `featured` is not consulted.
    pub fn home(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(HOME_PREFIX_LEN)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, featured: bool) -> Project {
        Project {
            id: id.to_owned(),
            title: format!("Title {id}"),
            short_description: String::new(),
            long_description: String::new(),
            repository_url: format!("https://example.com/{id}"),
            live_url: None,
            technologies: vec![],
            image_url: None,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            featured,
        }
    }

    #[test]
    fn embedded_catalog_loads_in_order() {
        let catalog = Catalog::embedded().unwrap();
        let ids: Vec<_> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["go-htmx-website", "go-api-service", "react-dashboard"]);

        let site = catalog.find("go-htmx-website").unwrap();
        assert_eq!(site.live_url.as_deref(), Some("https://fdecono.com"));
        assert_eq!(site.technologies, ["Go", "htmx", "Tailwind CSS", "HTML5"]);
        assert_eq!(site.created_label(), "January 2024");
        assert_eq!(catalog.find("go-api-service").unwrap().live_url, None);
    }

    #[test]
    fn find_misses_unknown_and_empty_ids() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.find("unknown-id").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn home_is_first_two_regardless_of_featured() {
        let catalog = Catalog::new(vec![
            project("a", false),
            project("b", false),
            project("c", true),
        ])
        .unwrap();
        let ids: Vec<_> = catalog.home().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn home_of_short_catalog_is_whole_catalog() {
        let catalog = Catalog::new(vec![project("only", true)]).unwrap();
        assert_eq!(catalog.home().len(), 1);
        assert!(Catalog::default().home().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![project("a", true), project("a", false)]).unwrap_err();
        assert!(matches!(err, Error::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn rejects_empty_ids() {
        assert!(matches!(Catalog::new(vec![project("  ", true)]), Err(Error::Catalog(_))));
    }

    #[test]
    fn missing_repository_url_is_a_parse_error() {
        let source = r#"
            [[projects]]
            id = "x"
            title = "X"
            short_description = ""
            long_description = ""
            created_at = "2024-01-01"
        "#;
        assert!(matches!(Catalog::from_toml(source), Err(Error::CatalogParse(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
            [[projects]]
            id = "solo"
            title = "Solo"
            short_description = "s"
            long_description = "l"
            repository_url = "https://example.com/solo"
            created_at = "2023-05-02"
            "#,
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.find("solo").unwrap().featured);
    }
}
