//! Static copy rendered by the pages.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub context: &'static str,
    pub challenge: &'static str,
    pub approach: &'static [&'static str],
    pub outcome: &'static str,
}

pub struct Sample {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub excerpt: &'static str,
}

pub struct Role {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const OWNER_TITLE: &str = "Senior Technical Writer";
pub const OWNER_LOCATION: &str = "Remote, available globally";

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        value: "200+",
        label: "Documents Delivered",
        description: "User guides, API docs, release notes, and compliance materials",
    },
    Highlight {
        value: "60%",
        label: "Onboarding Reduction",
        description: "Average reduction in user/developer onboarding time",
    },
    Highlight { value: "30+", label: "Product Releases", description: "Documentation delivered for major product releases" },
    Highlight { value: "0", label: "Audit Findings", description: "Zero findings in regulatory documentation audits" },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "api-overhaul",
        title: "Enterprise API Documentation Overhaul",
        context: "A platform team serving hundreds of enterprise integrators with reference docs that lagged the API.",
        challenge: "Partners spent weeks on first integrations and support tickets clustered around undocumented behavior.",
        approach: &[
            "Moved the reference to an OpenAPI source of truth generated in CI",
            "Wrote task-based quickstarts for the five most common integrations",
            "Added error-code catalogues with remediation steps",
        ],
        outcome: "Developer onboarding time fell by roughly 60% and integration tickets halved within two quarters.",
    },
    CaseStudy {
        slug: "compliance-suite",
        title: "Regulatory Compliance Documentation Suite",
        context: "A healthcare product preparing for regulated-software audits.",
        challenge: "Validation documents were inconsistent across teams and release sign-off routinely slipped.",
        approach: &[
            "Built controlled templates for requirements, test protocols, and trace matrices",
            "Introduced review checklists aligned with audit criteria",
            "Embedded documentation tasks into the release pipeline",
        ],
        outcome: "Two consecutive audits closed with zero documentation findings.",
    },
];

pub const SAMPLES: &[Sample] = &[
    Sample {
        title: "User Guide Excerpt",
        kind: "User Guide",
        description: "A sample user guide section demonstrating clear task-based writing for a fictional project management tool.",
        excerpt: "To create a project, select New Project, enter a name, choose a template, and select Create. The project opens on its overview board.",
    },
    Sample {
        title: "API Endpoint Reference",
        kind: "API Reference",
        description: "A sample API documentation snippet showing proper endpoint documentation structure.",
        excerpt: "POST /v1/projects creates a project. Required fields: name (string, 1-120 characters). Returns 201 with the created project.",
    },
    Sample {
        title: "Installation Guide",
        kind: "Installation",
        description: "A sample installation guide demonstrating systematic setup instructions.",
        excerpt: "Before you begin, confirm the host meets the prerequisites. Then download the installer, verify its checksum, and run it as an administrator.",
    },
];

pub const ROLES: &[Role] = &[
    Role {
        role: "Senior Technical Writer",
        company: "Enterprise SaaS Company",
        period: "2023 – Present",
        achievements: &[
            "Lead writer for core platform products serving 500+ enterprise clients",
            "Reduced developer onboarding time by 60% through an API documentation overhaul",
            "Established documentation standards adopted across three product teams",
        ],
    },
    Role {
        role: "Technical Writer",
        company: "Healthcare Technology Startup",
        period: "2021 – 2023",
        achievements: &[
            "Built a compliance documentation framework for regulated software",
            "Achieved zero compliance findings in two consecutive audits",
            "Cut documentation-related release delays by 80%",
        ],
    },
    Role {
        role: "Technical Writer (Contract)",
        company: "Various Technology Clients",
        period: "2020 – 2021",
        achievements: &[
            "Delivered API documentation, user guides, and knowledge bases for B2B software",
            "Established docs-as-code practices with Git-based review workflows",
        ],
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Documentation Types",
        skills: &["API references", "User guides", "Release notes", "Compliance documentation", "Knowledge bases"],
    },
    SkillGroup {
        title: "Tools & Technologies",
        skills: &["Markdown", "OpenAPI", "Git", "DITA", "Static site generators"],
    },
    SkillGroup {
        title: "Collaboration & Process",
        skills: &["Docs-as-code", "SME interviews", "Style guides", "Editorial review", "Agile delivery"],
    },
];
