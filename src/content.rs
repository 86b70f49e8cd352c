//! Everything the page says about its owner.

pub struct Contact {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
    pub link: &'static str,
}

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub cgpa: &'static str,
}

pub struct Activities {
    pub languages: &'static [&'static str],
    pub volunteer: &'static [&'static str],
    pub interests: &'static [&'static str],
}

pub struct TechItem {
    pub name: &'static str,
    pub src: &'static str,
}

pub struct TechCategory {
    pub title: &'static str,
    pub items: &'static [TechItem],
}

/// The sections of the home page. Each renders as an anchored `<section>`
/// whose element id is [`SectionKind::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Projects,
    Experience,
    Tech,
    Education,
    Activities,
    Contact,
}

impl SectionKind {
    pub const fn id(self) -> &'static str {
        match self {
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
            SectionKind::Tech => "tech",
            SectionKind::Education => "education",
            SectionKind::Activities => "activities",
            SectionKind::Contact => "contact",
        }
    }
}

pub struct PageSection {
    pub kind: SectionKind,
    pub title: &'static str,
}

/// A page section reachable from the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub kind: SectionKind,
    pub label: &'static str,
}

impl NavSection {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

pub const CONTACT: Contact = Contact {
    name: "Muhammad Abdur Rahim",
    title: "Software Developer",
    location: "Islamabad, Pakistan",
    phone: "+923325407566",
    email: "abdurrahim7566@gmail.com",
    linkedin: "https://linkedin.com/in/muhammad-abdur-rahim",
    github: "https://github.com/rahim7566",
};

pub const SUMMARY: &str = "Innovative and detail-oriented Java and Spring Boot developer with expertise in building robust applications, microservices, secure payment solutions, and advanced reporting systems, complemented by experience in developing dynamic and responsive front-end interfaces with React. Dedicated to delivering high-quality, reliable software platforms.";

pub const RESUME_PATH: &str = "/AbdurRahim_resume.pdf";
pub const RESUME_FILE: &str = "AbdurRahim_resume.pdf";
pub const HERO_IMAGE: &str = "/images/hero-rahim.svg";

/// Home page sections, top to bottom. The page renders exactly this list.
pub const PAGE_SECTIONS: [PageSection; 6] = [
    PageSection {
        kind: SectionKind::Projects,
        title: "Projects",
    },
    PageSection {
        kind: SectionKind::Experience,
        title: "Experience",
    },
    PageSection {
        kind: SectionKind::Tech,
        title: "Tech Stack",
    },
    PageSection {
        kind: SectionKind::Education,
        title: "Education",
    },
    PageSection {
        kind: SectionKind::Activities,
        title: "Activities",
    },
    PageSection {
        kind: SectionKind::Contact,
        title: "Contact",
    },
];

/// Navigation links, in page order. Their ids feed the scroll spy.
pub const NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        kind: SectionKind::Projects,
        label: "Projects",
    },
    NavSection {
        kind: SectionKind::Experience,
        label: "Experience",
    },
    NavSection {
        kind: SectionKind::Education,
        label: "Education",
    },
    NavSection {
        kind: SectionKind::Contact,
        label: "Contact",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Patient and Practice Management System",
        period: "Nov 2023 – Present",
        bullets: &[
            "Comprehensive healthcare platform for patient records, claims, and diagnoses.",
            "CRUD operations, secure data handling; integrated with third‑party services.",
            "Scalable MVC design with Spring Data JPA and SQL Server.",
        ],
        link: "https://hcmsus.com/",
    },
    Project {
        title: "Real‑time Patient Monitoring & Payment Integration",
        period: "Jul 2024 – Present",
        bullets: &[
            "Real‑time vitals dashboard; Spring Boot backend and Angular frontend.",
            "Integrated Apple Pay, Google Pay, and Stripe for compliant payments.",
            "End‑to‑end API integration with tokenized payment handling and HIPAA compliance.",
        ],
        link: "https://ircmpay.com/login",
    },
    Project {
        title: "Electronic Health Record (EHR) System",
        period: "Jul 2023 – Oct 2024",
        bullets: &[
            "EHR management with FHIR‑friendly features and secure data management.",
            "Advanced reporting: diagnoses, treatments, prescriptions, medication history.",
            "Built with Java, REST APIs, and Spring Security for reliability and compliance.",
        ],
        link: "https://ircm.com/",
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Java Developer",
        company: "Pmtac Private Limited, Rawalpindi",
        period: "Nov 2023 – Present",
        bullets: &[
            "Designed a healthcare management system using Java, Spring Boot, RESTful APIs.",
            "Built scalable microservices architecture with high availability and performance.",
            "Implemented Spring Security (authN/authZ), secure patient data & HIPAA compliance.",
            "Collaborated with cross‑functional teams (QA, DevOps, UI/UX) in Agile Scrum.",
        ],
    },
    Experience {
        role: "Junior Java Developer",
        company: "Pmtac Private Limited, Rawalpindi",
        period: "Dec 2022 – Nov 2023",
        bullets: &[
            "Maintained Java apps with Spring Boot, enforcing standards and functional requirements.",
            "Debugged, tested, and implemented new features ensuring code quality and maintainability.",
        ],
    },
];

pub const EDUCATION: Education = Education {
    degree: "Bachelors in Information Technology (BS‑IT)",
    institution: "Quaid‑i‑Azam University, Islamabad",
    period: "Jul 2017 – Aug 2021",
    cgpa: "3.3 / 4.0",
};

pub const ACTIVITIES: Activities = Activities {
    languages: &["English – Fluent", "Urdu – Native"],
    volunteer: &[
        "Volunteer Java Mentor helping beginners with Java fundamentals and projects.",
        "Final year project team member in food catering domain (architecture & core dev).",
    ],
    interests: &[
        "Open‑source Java projects and community contributions.",
        "AI/ML enthusiasm; Python with FastAPI for REST services.",
        "Automation, data science, and innovative problem solving.",
    ],
};

const SIMPLE_ICONS: &str = "https://cdn.simpleicons.org";

macro_rules! cdn {
    ($slug:literal) => {
        concat!("https://cdn.simpleicons.org/", $slug)
    };
}

pub const TECH_CATEGORIES: &[TechCategory] = &[
    TechCategory {
        title: "Programming Languages",
        items: &[
            TechItem {
                name: "Java",
                src: "/images/java.svg",
            },
            TechItem {
                name: "Python",
                src: "/images/python.svg",
            },
            TechItem {
                name: "SQL",
                src: cdn!("sqlite"),
            },
        ],
    },
    TechCategory {
        title: "Frameworks & Libraries",
        items: &[
            TechItem {
                name: "Spring",
                src: cdn!("spring"),
            },
            TechItem {
                name: "Spring Boot",
                src: cdn!("springboot"),
            },
            TechItem {
                name: "Hibernate",
                src: cdn!("hibernate"),
            },
            TechItem {
                name: "JUnit 5",
                src: cdn!("junit5"),
            },
        ],
    },
    TechCategory {
        title: "Tools & Platforms",
        items: &[
            TechItem {
                name: "Docker",
                src: cdn!("docker"),
            },
            TechItem {
                name: "Git",
                src: cdn!("git"),
            },
            TechItem {
                name: "Maven",
                src: cdn!("apachemaven"),
            },
            TechItem {
                name: "RabbitMQ",
                src: cdn!("rabbitmq"),
            },
            TechItem {
                name: "Twilio",
                src: cdn!("twilio"),
            },
            TechItem {
                name: "Azure DevOps",
                src: "/images/azure.svg",
            },
            TechItem {
                name: "IntelliJ IDEA",
                src: "/images/intellij.svg",
            },
            TechItem {
                name: "Pycharm",
                src: "/images/pycharm.svg",
            },
            TechItem {
                name: "VS Code",
                src: "/images/vs.svg",
            },
        ],
    },
    TechCategory {
        title: "Databases",
        items: &[
            TechItem {
                name: "MySQL",
                src: cdn!("mysql"),
            },
            TechItem {
                name: "PostgreSQL",
                src: cdn!("postgresql"),
            },
            TechItem {
                name: "SQL Server",
                src: "/images/sql-server.svg",
            },
        ],
    },
    TechCategory {
        title: "APIs & Testing",
        items: &[
            TechItem {
                name: "Swagger",
                src: cdn!("swagger"),
            },
            TechItem {
                name: "Postman",
                src: cdn!("postman"),
            },
        ],
    },
    TechCategory {
        title: "Security",
        items: &[
            TechItem {
                name: "Spring Security",
                src: "/images/security.svg",
            },
            TechItem {
                name: "JWT",
                src: "/images/jwt.svg",
            },
        ],
    },
];

impl TechItem {
    /// Whether the logo is fetched from the Simple Icons CDN rather than
    /// served from `public/images`.
    pub fn is_cdn(&self) -> bool {
        self.src.starts_with(SIMPLE_ICONS)
    }

    pub fn alt(&self) -> String {
        format!("{} logo", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_sections_exist_on_page_in_order() {
        let positions = NAV_SECTIONS
            .iter()
            .map(|nav| {
                PAGE_SECTIONS
                    .iter()
                    .position(|s| s.kind == nav.kind)
                    .unwrap_or_else(|| panic!("nav section {} not rendered", nav.id()))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_section_ids_unique() {
        let ids = PAGE_SECTIONS
            .iter()
            .map(|s| s.kind.id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), PAGE_SECTIONS.len());
    }

    #[test]
    fn test_nav_href() {
        assert_eq!(NAV_SECTIONS[0].href(), "#projects");
        assert_eq!(NAV_SECTIONS[3].href(), "#contact");
    }

    #[test]
    fn test_tech_items() {
        let names = TECH_CATEGORIES
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.name))
            .collect::<HashSet<_>>();
        assert!(names.contains("Spring Boot"));
        assert!(names.contains("JWT"));

        let docker = &TECH_CATEGORIES[2].items[0];
        assert!(docker.is_cdn());
        assert_eq!(docker.src, "https://cdn.simpleicons.org/docker");
        assert_eq!(docker.alt(), "Docker logo");
        assert!(!TECH_CATEGORIES[0].items[0].is_cdn());
    }

    #[test]
    fn test_local_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let local = TECH_CATEGORIES
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| !i.is_cdn())
            .map(|i| i.src)
            .chain([HERO_IMAGE, "/favicon.svg"]);
        for src in local {
            let path = public.join(src.trim_start_matches('/'));
            assert!(path.is_file(), "{} missing from public/", src);
        }
    }

    #[test]
    fn test_every_category_has_items() {
        assert!(TECH_CATEGORIES.iter().all(|c| !c.items.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.bullets.is_empty()));
        assert!(EXPERIENCE.iter().all(|e| !e.bullets.is_empty()));
    }
}
