//! Named page regions and the links that point at them.

use std::fmt;

/// One of the five anchored regions of the page, in scroll order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Services,
    Portfolio,
    Team,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::Team,
        Section::Contact,
    ];

    /// DOM id of the section element, also used as the URL fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Team => "team",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Services => "#services",
            Section::Portfolio => "#portfolio",
            Section::Team => "#team",
            Section::Contact => "#contact",
        }
    }

    /// Resolves `#services` or `services` to its section.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavigationItem {
    pub fn section(&self) -> Option<Section> {
        Section::from_anchor(self.href)
    }
}

pub const NAVIGATION_ITEMS: [NavigationItem; 5] = [
    NavigationItem { href: "#home", label: "Home" },
    NavigationItem { href: "#services", label: "Services" },
    NavigationItem { href: "#portfolio", label: "Portfolio" },
    NavigationItem { href: "#team", label: "Team" },
    NavigationItem { href: "#contact", label: "Contact" },
];

/// Blocks that fade in the first time they enter the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Portfolio,
    Awards,
    Team,
    Contact,
    Footer,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 5] = [
        RevealTarget::Portfolio,
        RevealTarget::Awards,
        RevealTarget::Team,
        RevealTarget::Contact,
        RevealTarget::Footer,
    ];

    /// Value of the `data-reveal` attribute on the block's root element.
    pub fn key(self) -> &'static str {
        match self {
            RevealTarget::Portfolio => "portfolio",
            RevealTarget::Awards => "awards",
            RevealTarget::Team => "team",
            RevealTarget::Contact => "contact",
            RevealTarget::Footer => "footer",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of reveal targets that have already been seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealSet(u8);

impl RevealSet {
    pub fn contains(&self, target: RevealTarget) -> bool {
        self.0 & target.bit() != 0
    }

    pub fn insert(&mut self, target: RevealTarget) {
        self.0 |= target.bit();
    }

    pub fn union(self, other: RevealSet) -> RevealSet {
        RevealSet(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<RevealTarget> for RevealSet {
    fn from_iter<I: IntoIterator<Item = RevealTarget>>(iter: I) -> Self {
        let mut set = RevealSet::default();
        for target in iter {
            set.insert(target);
        }
        set
    }
}
