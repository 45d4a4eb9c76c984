use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    catalog::{Catalog, Project},
    theme::DEFAULT_THEME_KEY,
};

// site configuration
//
// all of the copy, links and projects shown on the page.  none of it is
// logic, so it lives in a toml document that the webapp embeds at build time
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub owner: String,
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    pub profile_image: String,

    // local storage key for the theme preference
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    #[serde(default)]
    pub about: Vec<AboutBlock>,
    #[serde(default)]
    pub work_links: Vec<ExternalLink>,
    #[serde(default)]
    pub contact_blurb: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AboutBlock {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExternalLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    LinkedIn,
    GitHub,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: SocialIcon,
}

fn default_theme_key() -> String {
    DEFAULT_THEME_KEY.to_owned()
}

// as with the server configs, the site table sits under [config] so the same
// document can carry other tables later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

// a parsed config plus its validated project catalog
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
}

#[instrument(level=Level::DEBUG, skip_all)]
pub fn read_config(doc: &str) -> anyhow::Result<Site> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    let catalog = Catalog::new(data.config.projects.clone())?;

    debug!({ projects = catalog.len() }, "loaded project catalog");

    Ok(Site {
        config: data.config,
        catalog,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
[config]
owner = "Jane Doe"
headline = "Engineer"
profile_image = "assets/me.jpeg"

[[config.social_links]]
label = "GitHub"
href = "https://github.com/example"
icon = "github"

[[config.projects]]
id = "first"
title = "First"
description = "the first one"

[[config.projects.images]]
src = "assets/first/a.png"
caption = "a"

[[config.projects.images]]
src = "assets/first/b.png"
caption = "b"

[[config.projects]]
id = "second"
title = "Second"
description = "no images yet"
"#;

    #[test]
    fn reads_minimal_config() {
        let site = read_config(DOC).unwrap();

        assert_eq!(site.config.owner, "Jane Doe");
        assert_eq!(site.config.theme_key, "theme");
        assert!(site.config.about.is_empty());
        assert_eq!(site.config.social_links[0].icon, SocialIcon::GitHub);

        let titles: Vec<&str> = site.catalog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(site.catalog.iter().next().unwrap().images.len(), 2);
        assert!(site.catalog.iter().nth(1).unwrap().cover().is_none());
    }

    #[test]
    fn rejects_duplicate_projects() {
        let doc = DOC.replace("id = \"second\"", "id = \"first\"");
        assert!(read_config(&doc).is_err());
    }

    #[test]
    fn rejects_missing_table() {
        let err = read_config("owner = \"x\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));
    }
}
