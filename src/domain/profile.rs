use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dictionary {
    pub download_cv: String,
    pub copy_email: String,
    pub contact_me: String,
    pub years_ex: String,
    pub projects: String,
    pub clients: String,
}

impl Dictionary {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("download_cv", self.download_cv.as_str()),
            ("copy_email", self.copy_email.as_str()),
            ("contact_me", self.contact_me.as_str()),
            ("years_ex", self.years_ex.as_str()),
            ("projects", self.projects.as_str()),
            ("clients", self.clients.as_str()),
        ]
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Translations {
    pub en: Dictionary,
    pub ar: Dictionary,
}

impl Translations {
    #[must_use]
    pub fn dictionary(&self, lang: Language) -> &Dictionary {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Translates an English label by finding the dictionary key whose English
    /// value equals it. Labels with no entry come back unchanged.
    #[must_use]
    pub fn localize<'a>(&'a self, label: &'a str, lang: Language) -> &'a str {
        if lang == Language::En {
            return label;
        }
        self.en
            .entries()
            .into_iter()
            .find(|(_, v)| *v == label)
            .and_then(|(key, _)| self.dictionary(lang).get(key))
            .unwrap_or(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub excerpt: String,
    pub content: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
}

/// Read-only content behind every view. Treated as opaque by the
/// navigation core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub clients: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
}

impl ProfileData {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| FolioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self {
            name: "Alex Rivera".into(),
            title: "Mobile & Web Developer".into(),
            tagline: "Building digital products, brands, and experiences.".into(),
            email: "alex@example.com".into(),
            phone: "+1 555 010 0199".into(),
            location: "Lisbon, Portugal".into(),
            availability: "Available for Hire".into(),
            stats: vec![
                stat("Years Exp", "5+"),
                stat("Projects", "20+"),
                stat("Clients", "12+"),
            ],
            translations: Translations {
                en: Dictionary {
                    download_cv: "Download CV".into(),
                    copy_email: "Copy Email".into(),
                    contact_me: "Contact Me".into(),
                    years_ex: "Years Exp".into(),
                    projects: "Projects".into(),
                    clients: "Clients".into(),
                },
                ar: Dictionary {
                    download_cv: "تحميل السيرة الذاتية".into(),
                    copy_email: "نسخ البريد".into(),
                    contact_me: "تواصل معي".into(),
                    years_ex: "سنوات خبرة".into(),
                    projects: "مشاريع".into(),
                    clients: "عملاء".into(),
                },
            },
            social: vec![
                social("GitHub", "https://github.com/alex-rivera"),
                social("LinkedIn", "https://linkedin.com/in/alex-rivera"),
                social("Twitter", "https://twitter.com/alex_rivera"),
                social("Email", "mailto:alex@example.com"),
            ],
            services: vec![
                service(
                    "Web Development",
                    "Building fast, responsive, and SEO-friendly websites using modern \
                        technologies.",
                ),
                service(
                    "UI/UX Design",
                    "Designing intuitive, accessible interfaces and adapting quickly to project \
                        requirements.",
                ),
                service(
                    "Backend API",
                    "Developing robust and scalable RESTful and GraphQL APIs.",
                ),
                service(
                    "Mobile Apps",
                    "Creating cross-platform mobile applications for iOS and Android.",
                ),
                service(
                    "Database Architecture",
                    "Designing efficient database schemas and optimizing queries.",
                ),
                service(
                    "Technical Writing",
                    "Documenting APIs and writing technical blog posts.",
                ),
            ],
            skills: vec![
                SkillCategory {
                    category: "Frontend".into(),
                    items: vec![
                        skill("React", 75),
                        skill("TypeScript", 70),
                        skill("Tailwind CSS", 80),
                        skill("Next.js", 60),
                    ],
                },
                SkillCategory {
                    category: "Backend".into(),
                    items: vec![
                        skill("Node.js", 70),
                        skill("PostgreSQL", 65),
                        skill("Rust", 55),
                        skill("MongoDB", 50),
                    ],
                },
                SkillCategory {
                    category: "Tools".into(),
                    items: vec![
                        skill("Git", 90),
                        skill("Docker", 60),
                        skill("Figma", 55),
                        skill("CI/CD", 50),
                    ],
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "Alex shipped our dashboard ahead of schedule and kept the codebase \
                        spotless."
                        .into(),
                    author: "Jordan Lee".into(),
                    role: "Product Manager, Tech Corp".into(),
                },
                Testimonial {
                    quote: "A rare mix of design sense and engineering discipline.".into(),
                    author: "Sam Okafor".into(),
                    role: "Founder, StartUp Inc".into(),
                },
            ],
            clients: vec![
                "Tech Corp".into(),
                "StartUp Inc".into(),
                "Northwind".into(),
                "Globex".into(),
            ],
            experience: vec![
                Experience {
                    role: "Senior Frontend Engineer".into(),
                    company: "Tech Corp".into(),
                    period: "2021 - Present".into(),
                    description: "Leading a team of 5 developers building the next generation SaaS \
                        platform."
                        .into(),
                    achievements: vec![
                        "Architected a component library that cut development time by 40%.".into(),
                        "Improved Core Web Vitals scores by 25 points.".into(),
                        "Mentored junior developers and ran code reviews.".into(),
                    ],
                },
                Experience {
                    role: "Software Developer".into(),
                    company: "StartUp Inc".into(),
                    period: "2019 - 2021".into(),
                    description: "Developed and maintained multiple React applications for client \
                        deliverables."
                        .into(),
                    achievements: vec![
                        "Delivered 10+ client projects on time and within budget.".into(),
                        "Integrated payment gateways for e-commerce sites.".into(),
                    ],
                },
            ],
            education: vec![Education {
                degree: "Bachelor of Science in Computer Science".into(),
                school: "University of Technology".into(),
                period: "2015 - 2019".into(),
                description: "Graduated with Honors. Focused on Software Engineering and HCI."
                    .into(),
            }],
            certifications: vec![
                Certification {
                    name: "AWS Certified Developer - Associate".into(),
                    issuer: "Amazon Web Services".into(),
                    date: "2023".into(),
                },
                Certification {
                    name: "Meta Frontend Developer Professional Certificate".into(),
                    issuer: "Coursera".into(),
                    date: "2022".into(),
                },
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "E-Commerce Dashboard".into(),
                    category: "Web Apps".into(),
                    description: "Dashboard for online retailers with real-time analytics and \
                        inventory management."
                        .into(),
                    technologies: strings(&["React", "Tailwind", "Recharts", "Node.js"]),
                    link: "https://example.com/dashboard".into(),
                    featured: true,
                },
                Project {
                    id: 2,
                    title: "Social Media Manager".into(),
                    category: "Mobile".into(),
                    description: "Cross-platform app for scheduling posts with AI-powered caption \
                        generation."
                        .into(),
                    technologies: strings(&["React Native", "Firebase", "OpenAI API"]),
                    link: "https://example.com/social".into(),
                    featured: true,
                },
                Project {
                    id: 3,
                    title: "Portfolio Template".into(),
                    category: "Web Design".into(),
                    description: "Minimalist portfolio template for developers with dark mode and \
                        accessible components."
                        .into(),
                    technologies: strings(&["HTML", "CSS", "JS", "A11y"]),
                    link: "https://example.com/template".into(),
                    featured: false,
                },
                Project {
                    id: 4,
                    title: "Brand Identity Guide".into(),
                    category: "Branding".into(),
                    description: "Brand guidelines covering typography, color palette, and usage \
                        rules."
                        .into(),
                    technologies: strings(&["Figma", "Illustrator"]),
                    link: "https://example.com/brand".into(),
                    featured: false,
                },
            ],
            blog: vec![
                BlogPost {
                    id: 1,
                    title: "Mastering React Hooks".into(),
                    date: "Oct 12, 2023".into(),
                    category: "Development".into(),
                    tags: strings(&["React", "JavaScript", "Hooks"]),
                    excerpt: "A deep dive into useEffect and custom hooks for cleaner components."
                        .into(),
                    content: "React Hooks changed how components are written.\n\nThe useEffect \
                        hook runs side effects in function components.\n\nCustom hooks extract \
                        component logic into reusable functions."
                        .into(),
                    read_time: "5 min read".into(),
                    featured: true,
                },
                BlogPost {
                    id: 2,
                    title: "Why Tailwind CSS?".into(),
                    date: "Sep 28, 2023".into(),
                    category: "Design".into(),
                    tags: strings(&["CSS", "Tailwind", "Design"]),
                    excerpt: "The benefits of utility-first CSS and how it speeds up development."
                        .into(),
                    content: "Utility-first CSS lets you compose interfaces from small \
                        utilities.\n\n1. Faster styling\n2. Consistent design system\n3. \
                        Mobile-first approach"
                        .into(),
                    read_time: "3 min read".into(),
                    featured: false,
                },
                BlogPost {
                    id: 3,
                    title: "The Future of Web Dev".into(),
                    date: "Aug 15, 2023".into(),
                    category: "Trends".into(),
                    tags: strings(&["AI", "WebAssembly", "Future"]),
                    excerpt: "Predictions for AI-assisted coding, WebAssembly, and edge computing."
                        .into(),
                    content: "* AI-assisted coding becomes standard.\n* WebAssembly powers serious \
                        browser apps.\n* Edge computing moves logic closer to users."
                        .into(),
                    read_time: "6 min read".into(),
                    featured: false,
                },
                BlogPost {
                    id: 4,
                    title: "UI/UX Best Practices".into(),
                    date: "Jul 10, 2023".into(),
                    category: "Design".into(),
                    tags: strings(&["UI", "UX", "Accessibility"]),
                    excerpt: "Tips for accessible, user-friendly interfaces that drive engagement."
                        .into(),
                    content: "Good UI/UX is invisible.\n\nUse semantic structure, labels, and \
                        sufficient contrast.\n\nKeep the design language consistent."
                        .into(),
                    read_time: "4 min read".into(),
                    featured: false,
                },
            ],
        }
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.into(),
        value: value.into(),
    }
}

fn social(name: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.into(),
        url: url.into(),
    }
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.into(),
        description: description.into(),
    }
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.into(),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_localize_stat_labels() {
        let profile = ProfileData::builtin();
        let t = &profile.translations;
        assert_eq!(t.localize("Years Exp", Language::En), "Years Exp");
        assert_eq!(t.localize("Years Exp", Language::Ar), "سنوات خبرة");
        assert_eq!(t.localize("Unmapped", Language::Ar), "Unmapped");
    }

    #[test]
    fn test_load_round_trips_builtin() {
        let profile = ProfileData::builtin();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&profile).unwrap().as_bytes())
            .unwrap();

        let loaded = ProfileData::load(file.path()).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 42").unwrap();

        let err = ProfileData::load(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProfileData::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Read { .. }));
    }
}
