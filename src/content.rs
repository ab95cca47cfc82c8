//! Canonical content source for every section of the page.
//!
//! All records are plain `'static` data; components render them directly and
//! never mutate them. Category filters live here alongside the data they
//! filter.

pub const SITE_TITLE: &str = "Siddhesh Patil | Portfolio";
pub const OWNER_NAME: &str = "Siddhesh Patil";

pub static HERO_ROLES: &[&str] = &[
    "Computer Engineering Student!",
    "Development Enthusiast",
    "Problem Solver",
    "Machine Learning Enthusiast",
    "Computer Networks Specialist",
];

pub const CONTACT_EMAIL: &str = "sidpatil0505@gmail.com";
pub const CONTACT_PHONE: &str = "+91 7058996618";
pub const CONTACT_LOCATION: &str = "Pune, Maharashtra, India";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: &'static str,
}

/// Fixed section list; drives both the menu and scroll-spy tracking.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: "home", label: "Home" },
    NavItem { anchor: "about", label: "About" },
    NavItem { anchor: "education", label: "Education" },
    NavItem { anchor: "skills", label: "Skills" },
    NavItem { anchor: "projects", label: "Projects" },
    NavItem { anchor: "achievements", label: "Achievements" },
    NavItem { anchor: "certifications", label: "Certifications" },
    NavItem { anchor: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/sidz05",
        icon_class: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/siddhesh-patil-0a5840259/",
        icon_class: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/u/sidzp05/",
        icon_class: "devicon-devicon-plain",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Web,
    Frameworks,
    Databases,
    Fundamentals,
    Tools,
    Soft,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web Technologies",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Databases => "Databases",
            SkillCategory::Fundamentals => "CS Fundamentals",
            SkillCategory::Tools => "Tools",
            SkillCategory::Soft => "Soft Skills",
        }
    }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Languages,
    SkillCategory::Web,
    SkillCategory::Frameworks,
    SkillCategory::Databases,
    SkillCategory::Fundamentals,
    SkillCategory::Tools,
    SkillCategory::Soft,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100, rendered as a bar width.
    pub level: u8,
    pub category: SkillCategory,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "C++", level: 90, category: SkillCategory::Languages },
    Skill { name: "Java", level: 85, category: SkillCategory::Languages },
    Skill { name: "Python", level: 80, category: SkillCategory::Languages },
    Skill { name: "HTML", level: 95, category: SkillCategory::Web },
    Skill { name: "CSS", level: 85, category: SkillCategory::Web },
    Skill { name: "JavaScript", level: 85, category: SkillCategory::Web },
    Skill { name: "Node.js", level: 80, category: SkillCategory::Frameworks },
    Skill { name: "Express", level: 75, category: SkillCategory::Frameworks },
    Skill { name: "React", level: 70, category: SkillCategory::Frameworks },
    Skill { name: "MongoDB", level: 75, category: SkillCategory::Databases },
    Skill { name: "MySQL", level: 80, category: SkillCategory::Databases },
    Skill { name: "Data Structures", level: 90, category: SkillCategory::Fundamentals },
    Skill { name: "Algorithms", level: 85, category: SkillCategory::Fundamentals },
    Skill { name: "Git/GitHub", level: 85, category: SkillCategory::Tools },
    Skill { name: "VS Code", level: 90, category: SkillCategory::Tools },
    Skill { name: "Problem Solving", level: 90, category: SkillCategory::Soft },
    Skill { name: "Team Leadership", level: 85, category: SkillCategory::Soft },
];

/// `None` means the "all" filter; order of the source list is preserved.
pub fn filter_skills(category: Option<SkillCategory>) -> Vec<&'static Skill> {
    SKILLS
        .iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
    pub features: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "coding-mistake-mentor",
        title: "Coding Mistake Mentor – RAG-Based AI Assistant",
        description: "A Retrieval-Augmented Generation (RAG) system that helps students debug coding mistakes by retrieving similar past errors from a custom knowledge base using FAISS vector search.",
        technologies: &["Python", "RAG", "LangChain", "FAISS", "HuggingFace", "TinyLlama", "Streamlit"],
        image: "/projects/coding-mistake-mentor.jpg",
        link: None,
        github: Some("https://github.com/sidz05/coding-mistake-mentor"),
        features: &[
            "RAG system with FAISS vector search for similar error retrieval",
            "LangChain integration with HuggingFace sentence-transformer embeddings",
            "Local LLM deployment (TinyLlama via llama.cpp) without paid APIs",
            "Interactive Streamlit chat interface with session-based memory",
            "Context-aware explanations based on stored mistake data",
        ],
    },
    Project {
        id: "ev-hub",
        title: "EV-Hub",
        description: "A web platform for electric vehicle users to discover, book, and manage charging station reservations in real-time with secure payment processing.",
        technologies: &["Node.js", "React", "JavaScript", "Machine Learning", "MongoDB"],
        image: "/projects/ev-hub.jpg",
        link: Some("https://evhub-pro.vercel.app/"),
        github: Some("https://github.com/sidz05/EV_HUB-Fuel_Predition.git"),
        features: &[
            "Real-time charging station availability tracking",
            "Secure booking and payment system",
            "User reviews and ratings",
            "Geolocation-based search algorithm",
            "Responsive design for all devices",
        ],
    },
    Project {
        id: "portfolio",
        title: "Personal Portfolio",
        description: "A modern, responsive portfolio website showcasing my projects, skills, and achievements with dynamic animations and dark mode support.",
        technologies: &["Rust", "Leptos", "Tailwind CSS", "WebAssembly"],
        image: "/projects/portfolio.jpg",
        link: Some("https://siddhesh-portfolio-five.vercel.app/#home"),
        github: Some("https://github.com/sidz05/Siddhesh-Portfolio"),
        features: &[
            "Responsive design with dark mode support",
            "Dynamic typing animations and counters",
            "Smooth scrolling navigation",
            "Contact form with EmailJS integration",
            "Server-side rendering with WASM hydration",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Research,
    Competitive,
    Leadership,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AchievementCategory::Research => "Research",
            AchievementCategory::Competitive => "Competitive Programming",
            AchievementCategory::Leadership => "Leadership",
        }
    }
}

pub static ACHIEVEMENT_CATEGORIES: &[AchievementCategory] = &[
    AchievementCategory::Research,
    AchievementCategory::Competitive,
    AchievementCategory::Leadership,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "research",
        title: "International Conference Research Presentation",
        description: "Presented research at the International Conference ICTIS 2025 in Bangkok, Thailand, on \"AI-Driven Traffic Forecasting and Route Optimization System for Enhanced Navigation and Emergency Response\". The paper was accepted for publication in the Springer LNNS series.",
        category: AchievementCategory::Research,
    },
    Achievement {
        id: "codechef",
        title: "4-Star Rating on CodeChef",
        description: "Achieved a CodeChef rating of 1867 (4-Star) in Division 2, demonstrating advanced skills in data structures, algorithms, and problem-solving.",
        category: AchievementCategory::Competitive,
    },
    Achievement {
        id: "competitive",
        title: "Competitive Programming Achievements",
        description: "Secured a global rank of 4337 and a country rank of 3335 in CodeChef rated contests, competing against thousands of programmers worldwide.",
        category: AchievementCategory::Competitive,
    },
    Achievement {
        id: "hackathon",
        title: "UI Hackathon Organizer",
        description: "Managed and executed 10+ technical and non-technical events as Vice President of the ISTE Students' Chapter, including a UI Hackathon with 150+ participants, leading a core team of 20+ members.",
        category: AchievementCategory::Leadership,
    },
];

/// `None` means the "all" filter; order of the source list is preserved.
pub fn filter_achievements(category: Option<AchievementCategory>) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| category.map_or(true, |c| a.category == c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        id: "btech",
        degree: "Bachelor of Technology in Computer Science",
        institution: "Pimpri Chinchwad College of Engineering",
        location: "Pune",
        period: "November 2022 – June 2026",
        grade: "CGPA: 7.85 (out of 10)",
    },
    EducationEntry {
        id: "hsc",
        degree: "Higher Secondary Certificate (HSC) – Science",
        institution: "The New College",
        location: "Kolhapur",
        period: "2020 – 2022",
        grade: "76.17%",
    },
    EducationEntry {
        id: "ssc",
        degree: "Secondary School Certificate (SSC)",
        institution: "D.C. Narke Vidyaniketan",
        location: "Kolhapur",
        period: "2019 – 2020",
        grade: "96.20%",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "java-oop",
        title: "Java Object-Oriented Programming",
        issuer: "LinkedIn Learning Community",
        date: "August 2025",
        image: "/certificates/java-oop.png",
    },
    Certification {
        id: "java-foundations",
        title: "Oracle Java Foundations",
        issuer: "LinkedIn Learning Community",
        date: "August 2025",
        image: "/certificates/java-foundations.png",
    },
    Certification {
        id: "aws",
        title: "AWS Cloud Practitioner",
        issuer: "Amazon Web Services",
        date: "January 2024",
        image: "/certificates/aws.png",
    },
    Certification {
        id: "cpp",
        title: "C++ Programming",
        issuer: "Udemy",
        date: "February 2025",
        image: "/certificates/cpp.png",
    },
    Certification {
        id: "ml-python",
        title: "Machine Learning using Python",
        issuer: "Udemy",
        date: "March 2025",
        image: "/certificates/ml-python.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static PHOTOS: &[Photo] = &[
    Photo {
        id: "portrait",
        src: "/photos/siddhesh.png",
        alt: "Siddhesh Patil professional photo",
        title: "Professional Portrait",
        description: "Professional headshot for portfolio and LinkedIn",
    },
    Photo {
        id: "casual",
        src: "/photos/sid-lt.jpg",
        alt: "Siddhesh Patil casual photo",
        title: "Casual Portrait",
        description: "Casual photo showcasing personality",
    },
    Photo {
        id: "conference",
        src: "/photos/ictis-2025.jpg",
        alt: "Presenting at ICTIS 2025",
        title: "Tech Event",
        description: "Presenting research at ICTIS 2025 in Bangkok",
    },
    Photo {
        id: "hackathon",
        src: "/photos/ui-hackathon.jpg",
        alt: "UI Hackathon",
        title: "Team Collaboration",
        description: "Organizing the ISTE UI Hackathon with the core team",
    },
    Photo {
        id: "workspace",
        src: "/photos/workspace.jpg",
        alt: "Project work",
        title: "Working on Projects",
        description: "Coding and development work",
    },
    Photo {
        id: "award",
        src: "/photos/award.jpg",
        alt: "Achievement moment",
        title: "Achievement Moment",
        description: "Celebrating a milestone",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.anchor, b.anchor);
            }
        }
    }

    #[test]
    fn all_filter_is_identity_for_skills() {
        let all = filter_skills(None);
        assert_eq!(all.len(), SKILLS.len());
        for (filtered, source) in all.iter().zip(SKILLS.iter()) {
            assert!(std::ptr::eq(*filtered, source));
        }
    }

    #[test]
    fn skill_category_filter_selects_exact_subset() {
        let langs = filter_skills(Some(SkillCategory::Languages));
        assert_eq!(langs.len(), 3);
        assert!(langs.iter().all(|s| s.category == SkillCategory::Languages));
        // order of the source list is preserved
        assert_eq!(langs[0].name, "C++");
        assert_eq!(langs[2].name, "Python");
    }

    #[test]
    fn every_skill_category_has_at_least_one_skill() {
        for c in SKILL_CATEGORIES {
            assert!(
                !filter_skills(Some(*c)).is_empty(),
                "no skills tagged {:?}",
                c
            );
        }
    }

    #[test]
    fn achievement_filter_selects_exact_subset() {
        let comp = filter_achievements(Some(AchievementCategory::Competitive));
        assert_eq!(comp.len(), 2);
        assert_eq!(comp[0].id, "codechef");
        assert_eq!(comp[1].id, "competitive");

        let all = filter_achievements(None);
        assert_eq!(all.len(), ACHIEVEMENTS.len());
        for (filtered, source) in all.iter().zip(ACHIEVEMENTS.iter()) {
            assert!(std::ptr::eq(*filtered, source));
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
