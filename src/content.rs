//! Static page content: skills, projects, blog teasers, nav links, and the
//! contact address. Everything here is fixture data with no behavior.

pub const SITE_OWNER: &str = "Iftekhar Uddin Bhuiyan";
pub const CONTACT_EMAIL: &str = "iftekhar@example.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/";
pub const GITHUB_URL: &str = "https://github.com/";

/// In-page anchor targets, shared by the desktop and mobile nav.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "#hero"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency as a bar-width percentage, 0-100.
    pub level: u8,
}

pub const SKILLS: [Skill; 5] = [
    Skill {
        name: "CSE Fundamentals",
        level: 90,
    },
    Skill {
        name: "Web Development",
        level: 85,
    },
    Skill {
        name: "AI / ML",
        level: 75,
    },
    Skill {
        name: "Data Structures",
        level: 88,
    },
    Skill {
        name: "UI/UX Design",
        level: 70,
    },
];

pub const TOOLS: [&str; 7] = [
    "React",
    "Tailwind CSS",
    "Node.js",
    "Python",
    "Pandas",
    "Git",
    "Docker",
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub img: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Smart Note — AI Study Companion",
        desc: "A notes app with summarization, search, and flashcard generation using transformer models.",
        img: "https://source.unsplash.com/collection/190727/800x600",
        tags: &["React", "Node", "AI"],
    },
    Project {
        title: "Portfolio v1",
        desc: "Personal portfolio with interactive UI and animations.",
        img: "https://source.unsplash.com/collection/190728/800x600",
        tags: &["React", "Tailwind", "Design"],
    },
    Project {
        title: "Mini ML Toolkit",
        desc: "Toy models and training visualizations for learning ML concepts.",
        img: "https://source.unsplash.com/collection/190729/800x600",
        tags: &["Python", "ML", "Visualization"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct BlogTeaser {
    pub title: &'static str,
    pub blurb: &'static str,
    pub meta: &'static str,
}

pub const BLOG_TEASERS: [BlogTeaser; 2] = [
    BlogTeaser {
        title: "Building a Small ML Project",
        blurb: "Walkthrough of dataset prep, model training, and deployment.",
        meta: "2 min read • Aug 2025",
    },
    BlogTeaser {
        title: "Designing Responsive Layouts",
        blurb: "Tips on layout, accessibility, and performance for modern web apps.",
        meta: "3 min read • Jul 2025",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
        }
    }

    #[test]
    fn test_projects_are_tagged() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn test_nav_links_are_anchors() {
        for (_, href) in NAV_LINKS {
            assert!(href.starts_with('#'));
        }
    }
}
