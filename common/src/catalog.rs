use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        ProjectId(id.into())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProjectImage {
    pub src: String,
    pub caption: String,
}

// Project
//
// a single portfolio entry.  these are loaded once from the site config and
// never change afterwards, so everything downstream just clones them
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

impl Project {
    // the card thumbnail is always the first image
    pub fn cover(&self) -> Option<&ProjectImage> {
        self.images.first()
    }
}

// Catalog
//
// the ordered project list shown in the work section
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> anyhow::Result<Self> {
        for (idx, project) in projects.iter().enumerate() {
            if projects[..idx].iter().any(|p| p.id == project.id) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate project id in catalog: {}",
                    project.id
                )));
            }
        }

        Ok(Catalog { projects })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, images: usize) -> Project {
        Project {
            id: ProjectId::new(id),
            title: id.to_uppercase(),
            description: String::new(),
            images: (0..images)
                .map(|n| ProjectImage {
                    src: format!("{id}/{n}.png"),
                    caption: format!("shot {n}"),
                })
                .collect(),
        }
    }

    #[test]
    fn keeps_declared_order() {
        let catalog = Catalog::new(vec![project("b", 1), project("a", 2)]).unwrap();

        let ids: Vec<String> = catalog.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![project("a", 1), project("a", 3)]).unwrap_err();
        assert!(err.to_string().contains("duplicate project id"));
    }

    #[test]
    fn cover_is_first_image() {
        assert_eq!(project("a", 3).cover().unwrap().src, "a/0.png");
        assert!(project("a", 0).cover().is_none());
    }
}
