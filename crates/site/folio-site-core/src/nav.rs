//! Page sections and the header navigation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Home,
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Achievements,
    Certifications,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 9] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Achievements,
        Section::Certifications,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Achievements => "achievements",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        section: Section::Home,
        label: "Resume",
    },
    NavItem {
        section: Section::Projects,
        label: "Projects",
    },
    NavItem {
        section: Section::Contact,
        label: "Contact",
    },
];

/// Mobile menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Choose a section: closes the menu and returns the anchor to scroll to.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.open = false;
        section.id()
    }
}
