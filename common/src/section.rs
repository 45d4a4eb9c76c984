use std::fmt;

// Section
//
// the navigable page sections, in page order.  the id doubles as the dom
// element id and the nav anchor
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Section {
    #[default]
    Home,
    About,
    Work,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Contact,
    ];

    // sections that fade in once they scroll into range
    pub const REVEALABLE: [Section; 3] = [Section::About, Section::Work, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Work => "work",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique() {
        for (idx, section) in Section::ALL.iter().enumerate() {
            assert!(Section::ALL[..idx].iter().all(|s| s.id() != section.id()));
        }
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn home_is_never_revealed() {
        assert!(!Section::REVEALABLE.contains(&Section::Home));
    }
}
