pub const BRAND: &str = "Rawchi Entertainment";
pub const HERO_TITLE: &str = "Crafting Cinematic Magic";
pub const HERO_SUBTITLE: &str = "Collaborating to Create Unforgettable Experiences";
pub const COPYRIGHT: &str = "© 2024 Rawchi Entertainment. All rights reserved.";

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Award {
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Office {
    pub heading: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Film Production",
        description: "Full-service film production, including story development, screenplay, direction, and post-production.",
    },
    Service {
        title: "Music Video Production",
        description: "High-quality music videos for artists across genres, with a focus on innovative storytelling.",
    },
    Service {
        title: "Animation and Graphics",
        description: "Custom animations and graphics for films, advertisements, and digital content.",
    },
    Service {
        title: "Post-Production Services",
        description: "Comprehensive post-production, including editing, sound design, and color grading.",
    },
];

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem { title: "The Future Is Dark" },
    PortfolioItem { title: "A Drop of Water" },
    PortfolioItem { title: "The reel & real life of Wasseypur" },
    PortfolioItem { title: "Meruthiya Gangsters" },
    PortfolioItem { title: "Family of Thakurgang" },
    PortfolioItem { title: "Shukla The Terror" },
    PortfolioItem { title: "Fair and handsome" },
    PortfolioItem { title: "Zhandu balm" },
    PortfolioItem { title: "The Lost Childhood" },
];

pub const AWARDS: &[Award] = &[
    Award { label: "Canadian Labour International Short Film Festival 2017" },
    Award { label: "San Mauro International Film Festival 2018" },
    Award { label: "Dada Saheb Phalke International Film Festival 2019" },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ashok Suman",
        role: "Film Editor & Founder Rawchi Entertainment",
    },
    TeamMember {
        name: "Priya Mishra",
        role: "Actor, Founder Zero Filmss Entertainment",
    },
    TeamMember {
        name: "Raj Kumar Das",
        role: "Writer, Director and Founder Zero Filmss Entertainment",
    },
];

pub const OFFICES: &[Office] = &[
    Office {
        heading: "Head Office",
        address: "Snehi A7, Four Bungalow Andheri West, Mumbai, Pin - 400053",
        phone: "+91-9833076450, 6207203662",
        email: "raajraj69@gmail.com",
    },
    Office {
        heading: "Working Office",
        address: "10th Mile Near Amba Toli Hazam Road, Ranchi, Jharkhand - 835221",
        phone: "+91-6207203662",
        email: "ashoksuman1972@gmail.com",
    },
];
