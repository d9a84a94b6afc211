//! Static copy for the portfolio page.
//!
//! Nothing here has behavior beyond lookups; views iterate these tables in
//! order.

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub specialty: &'static str,
    pub tagline: &'static str,
    pub status: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub avatar: &'static str,
    pub resume: &'static str,
    pub resume_download_name: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Jawad",
    last_name: "Hussain",
    role: "Senior Software Engineer",
    specialty: "Angular Expert",
    tagline: "Building high-performance, scalable Angular applications with modern architecture.",
    status: "Available for new opportunities",
    email: "jwadg97@gmail.com",
    github: "https://github.com/jawad-aj",
    linkedin: "https://linkedin.com/in/jawad-hs",
    avatar: "/jawad-profile.jpeg",
    resume: "/Jawad_Resume.pdf",
    resume_download_name: "Jawad_Hussain_Resume.pdf",
};

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Anchors for the navbar, in page order. Targets are section ids.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", target: "about" },
    NavLink { label: "Expertise", target: "expertise" },
    NavLink { label: "Projects", target: "projects" },
    NavLink { label: "Stack", target: "stack" },
    NavLink { label: "Leadership", target: "leadership" },
    NavLink { label: "Contact", target: "contact" },
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "With over 5 years of experience building enterprise-scale applications, I specialize in creating high-performance Angular solutions that power critical systems across government, healthcare, and fintech sectors.",
    "My expertise spans the complete Angular ecosystem, from version 2 to 20, including microfrontend architectures, monorepo setups, and signals-based state management. I've led teams in delivering solutions that reduce deployment times by 40% and improve system reliability.",
    "Beyond Angular, I bring strong proficiency in React, Node.js, and Java Spring, enabling me to architect end-to-end solutions that scale.",
];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "💻",
        title: "5+ Years",
        description: "Enterprise-scale application development",
    },
    Highlight {
        icon: "🏛️",
        title: "Angular Expert",
        description: "Versions 2-20, modern architecture",
    },
    Highlight {
        icon: "⚙️",
        title: "Full-Stack",
        description: "React, Node.js, Java Spring",
    },
    Highlight {
        icon: "🌐",
        title: "Global Impact",
        description: "200k+ users across systems",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: bool,
}

pub const EXPERTISE_SKILLS: &[Skill] = &[
    Skill { name: "Signals", icon: "⚡", accent: false },
    Skill { name: "RxJS", icon: "🔀", accent: true },
    Skill { name: "Standalone Components", icon: "🧱", accent: false },
    Skill { name: "Microfrontends", icon: "🧩", accent: true },
];

pub struct Metric {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub organization: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub impact: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub metrics: &'static [Metric],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "MVIL VIRM",
        organization: "Government of PNG",
        kind: "National Insurance System",
        description: "A comprehensive national vehicle insurance registration and management system serving over 200,000 citizens.",
        problem: "Legacy monolithic system with slow deployments and scaling issues affecting citizen services.",
        solution: "Architected a microfrontend solution with Nx monorepo, enabling independent deployments and team autonomy.",
        impact: &[
            "Reduced deployment time by 40%",
            "Improved system uptime to 99.9%",
            "Enabled 5 teams to work independently",
        ],
        stack: &["Angular 18", "Java Spring", "MySQL", "Nx", "Module Federation"],
        metrics: &[
            Metric { icon: "👥", label: "Users", value: "200k+" },
            Metric { icon: "⚡", label: "Deploy Time", value: "-40%" },
            Metric { icon: "🛡️", label: "Uptime", value: "99.9%" },
        ],
    },
    Project {
        title: "Airehealth",
        organization: "US Healthcare",
        kind: "EMR + Admin Portal",
        description: "Electronic Medical Records system with comprehensive admin portal for healthcare providers.",
        problem: "Fragmented patient data, complex role-based access requirements, and real-time collaboration needs.",
        solution: "Built a real-time collaborative platform with WebSocket integration and granular RBAC system.",
        impact: &[
            "Reduced patient record access time by 60%",
            "Implemented 15+ role permission levels",
            "Real-time sync across 50+ concurrent users",
        ],
        stack: &["Angular 16", "Node.js", "Firebase", "WebSockets", "MySQL"],
        metrics: &[
            Metric { icon: "🗄️", label: "Records", value: "1M+" },
            Metric { icon: "👥", label: "Roles", value: "15+" },
            Metric { icon: "⚡", label: "Real-time", value: "Yes" },
        ],
    },
    Project {
        title: "Winsupply ERP",
        organization: "Enterprise",
        kind: "Pricing & Matrix Modules",
        description: "Enterprise resource planning system for complex pricing calculations and inventory management.",
        problem: "Outdated Angular 12 codebase with performance issues in pricing calculations and complex data grids.",
        solution: "Led migration to Angular 18 with virtual scrolling, optimized change detection, and standalone components.",
        impact: &[
            "10x improvement in grid performance",
            "Reduced bundle size by 35%",
            "Migrated 100+ components to standalone",
        ],
        stack: &["Angular 18", "Java", "IBM DB2", "AG Grid", "RxJS"],
        metrics: &[
            Metric { icon: "⚡", label: "Performance", value: "10x" },
            Metric { icon: "🗄️", label: "Bundle", value: "-35%" },
            Metric { icon: "🛡️", label: "Components", value: "100+" },
        ],
    },
];

pub struct TechCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        name: "Frontend",
        items: &["Angular", "React", "TypeScript", "RxJS", "Signals", "NgRx"],
    },
    TechCategory {
        name: "Backend",
        items: &["Node.js", "Java Spring", "Express", "NestJS"],
    },
    TechCategory {
        name: "Architecture",
        items: &[
            "Microfrontends",
            "Monorepo (Nx)",
            "Module Federation",
            "Standalone Components",
        ],
    },
    TechCategory {
        name: "UI Libraries",
        items: &[
            "Angular Material",
            "PrimeNG",
            "Ant Design",
            "Tailwind CSS",
            "Bootstrap",
            "AG Grid",
        ],
    },
    TechCategory {
        name: "DevOps",
        items: &["Docker", "AWS", "Jenkins", "GitHub Actions", "Azure DevOps"],
    },
    TechCategory {
        name: "State & APIs",
        items: &["NGXS", "REST", "GraphQL", "WebSockets", "Firebase"],
    },
];

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
    pub metric_label: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "👥",
        title: "Team Leadership",
        description: "Led sprint planning and delivery for a team of 6 engineers across multiple projects.",
        metric: "6",
        metric_label: "Engineers",
    },
    Achievement {
        icon: "📈",
        title: "Improved Delivery",
        description: "Streamlined development workflows and processes to accelerate project delivery.",
        metric: "15%",
        metric_label: "Faster Delivery",
    },
    Achievement {
        icon: "🎯",
        title: "Requirements Clarity",
        description: "Enhanced requirement gathering and documentation processes for better alignment.",
        metric: "20%",
        metric_label: "Fewer Gaps",
    },
    Achievement {
        icon: "💬",
        title: "Mentorship",
        description: "Conducted code reviews and mentoring sessions for junior developers.",
        metric: "50+",
        metric_label: "Reviews/Month",
    },
];

pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Web links open in a new tab; `mailto:` and friends don't.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }

    pub fn target(&self) -> Option<&'static str> {
        self.is_external().then_some("_blank")
    }
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "extra-email",
        label: "Email",
        value: "jwadg97@gmail.com",
        href: "mailto:jwadg97@gmail.com",
    },
    ContactLink {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "linkedin.com/in/jawad-hs",
        href: "https://linkedin.com/in/jawad-hs",
    },
    ContactLink {
        icon: "devicon-github-plain",
        label: "GitHub",
        value: "github.com/jawad-aj",
        href: "https://github.com/jawad-aj",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_targets() {
        let targets = NAV_LINKS.iter().map(|l| l.target).collect::<HashSet<_>>();
        assert_eq!(targets.len(), NAV_LINKS.len());
        assert_eq!(NAV_LINKS[0].href(), "#about");
        assert!(NAV_LINKS.iter().any(|l| l.target == "expertise"));
    }

    #[test]
    fn test_contact_links() {
        let email = &CONTACT_LINKS[0];
        assert!(!email.is_external());
        assert_eq!(email.target(), None);
        assert_eq!(email.href, PROFILE.mailto());

        for link in &CONTACT_LINKS[1..] {
            assert!(link.is_external(), "{} should be external", link.label);
            assert_eq!(link.target(), Some("_blank"));
        }
    }

    #[test]
    fn test_profile() {
        assert_eq!(PROFILE.full_name(), "Jawad Hussain");
        assert_eq!(PROFILE.mailto(), "mailto:jwadg97@gmail.com");
        assert!(CONTACT_LINKS.iter().any(|l| l.href == PROFILE.github));
        assert!(CONTACT_LINKS.iter().any(|l| l.href == PROFILE.linkedin));
    }

    #[test]
    fn test_projects_are_complete() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<HashSet<_>>();
        assert_eq!(titles.len(), PROJECTS.len());
        for project in PROJECTS {
            assert!(!project.impact.is_empty(), "{}", project.title);
            assert!(!project.stack.is_empty(), "{}", project.title);
            assert_eq!(project.metrics.len(), 3, "{}", project.title);
        }
    }

    #[test]
    fn test_tech_stack() {
        let names = TECH_STACK.iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Frontend",
                "Backend",
                "Architecture",
                "UI Libraries",
                "DevOps",
                "State & APIs"
            ]
        );
        assert!(TECH_STACK.iter().all(|c| !c.items.is_empty()));
    }
}
