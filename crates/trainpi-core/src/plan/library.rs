//! Static plan template library.
//!
//! Templates are a fixed `'static` table keyed by career path. They are
//! instantiated into owned [`LearningPlan`](super::LearningPlan) values by the
//! builder and never mutated.

use super::model::{CourseLevel, CourseStatus, PlanCourse, PlanPhase};

/// Career path used when none is given or the requested one is unknown.
pub const DEFAULT_CAREER_PATH: &str = "Full Stack Developer";

/// A roadmap phase as stored in the library.
#[derive(Debug)]
pub struct PhaseTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub duration: &'static str,
    pub tasks: &'static [&'static str],
    pub milestone: &'static str,
    pub focus: &'static [&'static str],
}

impl PhaseTemplate {
    pub fn to_phase(&self) -> PlanPhase {
        PlanPhase {
            id: self.id.to_string(),
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            duration: self.duration.to_string(),
            tasks: owned(self.tasks),
            milestone: self.milestone.to_string(),
            focus: owned(self.focus),
        }
    }
}

/// A course as stored in the library, without a status.
#[derive(Debug)]
pub struct CourseTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub provider: &'static str,
    pub duration: &'static str,
    pub level: CourseLevel,
    pub focus: &'static [&'static str],
    pub description: &'static str,
}

impl CourseTemplate {
    pub fn to_course(&self, status: CourseStatus) -> PlanCourse {
        PlanCourse {
            id: self.id.to_string(),
            title: self.title.to_string(),
            provider: self.provider.to_string(),
            duration: self.duration.to_string(),
            level: self.level,
            status,
            focus: owned(self.focus),
            description: self.description.to_string(),
        }
    }
}

/// Everything needed to build a plan for one career path.
#[derive(Debug)]
pub struct PlanTemplate {
    pub career_path: &'static str,
    pub overview: &'static str,
    pub headline: &'static str,
    pub focus_skills: &'static [&'static str],
    pub phases: &'static [PhaseTemplate],
    pub courses: &'static [CourseTemplate],
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Looks up a template by career path (exact match after trimming).
pub fn find_template(career_path: &str) -> Option<&'static PlanTemplate> {
    let wanted = career_path.trim();
    PLAN_LIBRARY
        .iter()
        .find(|template| template.career_path == wanted)
}

/// Looks up a template, falling back to the [`DEFAULT_CAREER_PATH`] one.
pub fn template_or_default(career_path: &str) -> &'static PlanTemplate {
    // PLAN_LIBRARY[0] is the default template
    find_template(career_path).unwrap_or(&PLAN_LIBRARY[0])
}

/// The template table. The first entry is the default template.
pub static PLAN_LIBRARY: [PlanTemplate; 3] = [
    PlanTemplate {
        career_path: "Full Stack Developer",
        overview: "Blend front-end craft with back-end architecture to ship production-ready web applications end-to-end.",
        headline: "Ship complete web products from idea to deployment.",
        focus_skills: &["JavaScript", "React", "Node.js", "APIs", "Databases", "DevOps basics"],
        phases: &[
            PhaseTemplate {
                id: "fsd-foundations",
                title: "Modern Web Foundations",
                summary: "Refresh JavaScript fundamentals and UI building blocks while sharpening problem-solving routines.",
                duration: "Weeks 1-4",
                tasks: &[
                    "Revisit JavaScript essentials and latest language features each morning.",
                    "Complete one algorithms or data-structures kata every weekday.",
                    "Ship a responsive landing page in pure HTML/CSS to refresh layout muscle memory.",
                ],
                milestone: "Publish a polished personal portfolio site.",
                focus: &["JavaScript", "UI fundamentals"],
            },
            PhaseTemplate {
                id: "fsd-application",
                title: "Application Layer Mastery",
                summary: "Build confident React patterns and connect to production-grade APIs.",
                duration: "Weeks 5-9",
                tasks: &[
                    "Implement a dashboard with routing, state management, and data fetching.",
                    "Document an API layer with error handling and loading states.",
                    "Practice code reviews by annotating two pull requests per week.",
                ],
                milestone: "Launch a data-rich React application backed by a live API.",
                focus: &["React", "APIs"],
            },
            PhaseTemplate {
                id: "fsd-backend",
                title: "Service and Deployment Readiness",
                summary: "Design back-end services, manage persistence, and automate delivery pipelines.",
                duration: "Weeks 10-14",
                tasks: &[
                    "Model database entities and relationships for the portfolio project.",
                    "Containerize the application and configure CI/CD checks.",
                    "Conduct load testing and capture performance baselines.",
                ],
                milestone: "Deploy a full-stack project with monitoring in place.",
                focus: &["Node.js", "DevOps basics"],
            },
        ],
        courses: &[
            CourseTemplate {
                id: "course-fsd-1",
                title: "JavaScript: The Complete Guide",
                provider: "Udemy",
                duration: "6 weeks",
                level: CourseLevel::Introductory,
                focus: &["JavaScript", "Problem Solving"],
                description: "Deep dive into ES6+, asynchronous patterns, and real-world exercises.",
            },
            CourseTemplate {
                id: "course-fsd-2",
                title: "React Professional Certificate",
                provider: "Meta / Coursera",
                duration: "8 weeks",
                level: CourseLevel::Intermediate,
                focus: &["React", "UI Architecture"],
                description: "Component design, accessibility, hooks, and performance tooling.",
            },
            CourseTemplate {
                id: "course-fsd-3",
                title: "Node.js, Express, MongoDB Bootcamp",
                provider: "Udemy",
                duration: "6 weeks",
                level: CourseLevel::Intermediate,
                focus: &["Node.js", "APIs", "Databases"],
                description: "Build REST services with authentication, testing, and deployment.",
            },
            CourseTemplate {
                id: "course-fsd-4",
                title: "DevOps Foundations",
                provider: "LinkedIn Learning",
                duration: "3 weeks",
                level: CourseLevel::Introductory,
                focus: &["DevOps basics", "CI/CD"],
                description: "Versioning, pipelines, and release governance for modern teams.",
            },
        ],
    },
    PlanTemplate {
        career_path: "Data Scientist",
        overview: "Transform complex data into insight by blending statistics, programming, and storytelling.",
        headline: "Synthesise data into decisions that move strategy forward.",
        focus_skills: &["Python", "Statistics", "Machine Learning", "SQL", "Storytelling"],
        phases: &[
            PhaseTemplate {
                id: "ds-foundations",
                title: "Analytical Bedrock",
                summary: "Refresh core math, probability, and Python tooling.",
                duration: "Weeks 1-4",
                tasks: &[
                    "Practice descriptive statistics on new datasets daily.",
                    "Automate data cleaning notebooks and version them with Git.",
                    "Build a metrics glossary for a domain you care about.",
                ],
                milestone: "Publish a notebook covering EDA with polished visuals.",
                focus: &["Statistics", "Python"],
            },
            PhaseTemplate {
                id: "ds-ml",
                title: "Model Craft",
                summary: "Train, evaluate, and tune models across classification and regression problems.",
                duration: "Weeks 5-9",
                tasks: &[
                    "Implement train/validation/test workflows with scikit-learn.",
                    "Run model comparisons and capture experiment notes.",
                    "Ship a blog post explaining model decisions to non-technical readers.",
                ],
                milestone: "Release a predictive model and document its impact.",
                focus: &["Machine Learning", "Experimentation"],
            },
            PhaseTemplate {
                id: "ds-production",
                title: "Operational Analytics",
                summary: "Deploy insights, automate monitoring, and communicate outcomes with clarity.",
                duration: "Weeks 10-14",
                tasks: &[
                    "Deploy a simple inference API or dashboard.",
                    "Design alerting for data drift or pipeline issues.",
                    "Conduct a stakeholder readout with actionable recommendations.",
                ],
                milestone: "Deliver an end-to-end data product with monitoring.",
                focus: &["MLOps", "Storytelling"],
            },
        ],
        courses: &[
            CourseTemplate {
                id: "course-ds-1",
                title: "Applied Data Science with Python",
                provider: "University of Michigan / Coursera",
                duration: "8 weeks",
                level: CourseLevel::Introductory,
                focus: &["Python", "Pandas"],
                description: "EDA, visualisation, and introductory machine learning workflows.",
            },
            CourseTemplate {
                id: "course-ds-2",
                title: "Mathematics for Machine Learning",
                provider: "Imperial College / Coursera",
                duration: "6 weeks",
                level: CourseLevel::Intermediate,
                focus: &["Linear Algebra", "Statistics"],
                description: "Refresh the linear algebra and calculus powering ML models.",
            },
            CourseTemplate {
                id: "course-ds-3",
                title: "Machine Learning Specialization",
                provider: "DeepLearning.AI",
                duration: "7 weeks",
                level: CourseLevel::Intermediate,
                focus: &["Machine Learning", "Model Deployment"],
                description: "Supervised, unsupervised, and deployment-ready ML techniques.",
            },
            CourseTemplate {
                id: "course-ds-4",
                title: "Storytelling with Data",
                provider: "Storytelling with Data",
                duration: "3 weeks",
                level: CourseLevel::Introductory,
                focus: &["Storytelling", "Data Visualisation"],
                description: "Craft persuasive narratives anchored in evidence.",
            },
        ],
    },
    PlanTemplate {
        career_path: "UI/UX Designer",
        overview: "Design delightful digital experiences grounded in research, prototyping, and delivery craft.",
        headline: "Turn ideas into intuitive experiences people love to use.",
        focus_skills: &["User Research", "Interaction Design", "Figma", "Design Systems", "Accessibility"],
        phases: &[
            PhaseTemplate {
                id: "ux-research",
                title: "Research and Discovery",
                summary: "Understand users through qualitative and quantitative exploration.",
                duration: "Weeks 1-4",
                tasks: &[
                    "Plan and run three user interviews focused on pains and motivations.",
                    "Synthesise findings into personas and journey maps.",
                    "Audit an existing product for usability and accessibility gaps.",
                ],
                milestone: "Publish a discovery report with clear opportunity areas.",
                focus: &["User Research", "Accessibility"],
            },
            PhaseTemplate {
                id: "ux-ideation",
                title: "Ideation and Prototyping",
                summary: "Translate insights into wireframes, flows, and interactive prototypes.",
                duration: "Weeks 5-8",
                tasks: &[
                    "Sketch divergent concepts and converge on a direction with stakeholders.",
                    "Build mid-fidelity prototypes in Figma and run usability tests.",
                    "Create component variants that scale across viewports.",
                ],
                milestone: "Share a tested prototype validated by target users.",
                focus: &["Interaction Design", "Prototyping"],
            },
            PhaseTemplate {
                id: "ux-delivery",
                title: "Delivery and Collaboration",
                summary: "Partner with engineering to deliver and iterate on the experience.",
                duration: "Weeks 9-12",
                tasks: &[
                    "Document a design system starter kit with tokens and usage notes.",
                    "Annotate handoff files and host a walkthrough with engineers.",
                    "Define metrics to monitor post-launch performance.",
                ],
                milestone: "Launch a feature with measurable UX improvements.",
                focus: &["Design Systems", "Collaboration"],
            },
        ],
        courses: &[
            CourseTemplate {
                id: "course-ux-1",
                title: "Google UX Design Professional Certificate",
                provider: "Google / Coursera",
                duration: "8 weeks",
                level: CourseLevel::Introductory,
                focus: &["User Research", "UX Foundations"],
                description: "User-centred design and end-to-end UX process essentials.",
            },
            CourseTemplate {
                id: "course-ux-2",
                title: "Interaction Design Specialization",
                provider: "University of California San Diego",
                duration: "7 weeks",
                level: CourseLevel::Intermediate,
                focus: &["Interaction Design", "Prototyping"],
                description: "Wireframing, prototyping, and evaluating interactive systems.",
            },
            CourseTemplate {
                id: "course-ux-3",
                title: "Design Systems with Figma",
                provider: "Design Better",
                duration: "4 weeks",
                level: CourseLevel::Intermediate,
                focus: &["Design Systems", "Figma"],
                description: "Scale your UI library with reusable components and tokens.",
            },
            CourseTemplate {
                id: "course-ux-4",
                title: "Accessible Design Fundamentals",
                provider: "Deque University",
                duration: "3 weeks",
                level: CourseLevel::Introductory,
                focus: &["Accessibility"],
                description: "Implement WCAG principles and inclusive design patterns.",
            },
        ],
    },
];
