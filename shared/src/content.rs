//! 静态营销内容：首页、招聘页与页脚

// =========================================================
// 首页
// =========================================================

pub const HERO_BADGE: &str = "Powering the Future of POS";
pub const HERO_TITLE: &str = "Building the Next Generation";
pub const HERO_HIGHLIGHT: &str = "POS Platforms";
pub const HERO_SUBTITLE: &str = "FastCode is the creator of a PaaS (Platform as a Service) for powerful, cloud-based Point of Sale (POS) solutions, supporting every type of business. Built by developers, for developers.";

pub const CTA_TITLE: &str = "Ready to Transform Your Business?";
pub const CTA_SUBTITLE: &str = "Join hundreds of businesses already using FastCode's POS solutions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Zap,
    Shield,
    Rocket,
    TrendingUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: FeatureIcon::Zap,
        title: "Lightning Fast",
        description: "Built with modern technologies for maximum performance and scalability",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Secure by Default",
        description: "Enterprise-grade security with end-to-end encryption and compliance",
    },
    Feature {
        icon: FeatureIcon::Rocket,
        title: "Cloud Native",
        description: "Designed for the cloud with automatic scaling and high availability",
    },
    Feature {
        icon: FeatureIcon::TrendingUp,
        title: "Analytics Driven",
        description: "Real-time insights and analytics to help grow your business",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    Planned,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub quarter: &'static str,
    pub title: &'static str,
    pub features: &'static [&'static str],
    pub status: MilestoneStatus,
}

pub static ROADMAP: [Milestone; 3] = [
    Milestone {
        quarter: "Q1 2024",
        title: "Core Platform Launch & Payments",
        features: &[
            "Basic Inventory Management",
            "Secure Payment Gateway Integration (Credit/Debit)",
            "User Authentication & Roles",
        ],
        status: MilestoneStatus::Completed,
    },
    Milestone {
        quarter: "Q2 2024",
        title: "Advanced Retail Features",
        features: &[
            "Customer Loyalty Program Module",
            "Multi-Store Support (Beta)",
            "Offline Mode Functionality",
        ],
        status: MilestoneStatus::InProgress,
    },
    Milestone {
        quarter: "Q3 2024",
        title: "Enterprise & API Expansion",
        features: &[
            "Public API for 3rd Party Integrations",
            "Advanced Reporting & BI Dashboard",
            "Employee Time Clock & Payroll Integration",
        ],
        status: MilestoneStatus::Planned,
    },
];

// =========================================================
// 招聘页
// =========================================================

pub const JOIN_INTRO: &str = "We're a team of passionate developers building next-generation POS platforms. Join us to work on challenging problems, use modern technologies, and make a real impact on businesses worldwide.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub department: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

pub static OPEN_POSITIONS: [Position; 8] = [
    Position {
        title: "Senior Full-Stack Developer",
        location: "Remote / San Francisco, CA",
        kind: "Full-time",
        department: "Engineering",
        description: "Build scalable cloud-based POS solutions using React, Node.js, and PostgreSQL",
        requirements: &[
            "1-2 years experience",
            "React & Node.js expertise",
            "Cloud architecture knowledge",
        ],
    },
    Position {
        title: "Backend Engineer",
        location: "Remote / New York, NY",
        kind: "Full-time",
        department: "Engineering",
        description: "Design and implement robust APIs for our payment processing systems",
        requirements: &[
            "1-2 years experience",
            "Node.js or Python",
            "API design expertise",
        ],
    },
    Position {
        title: "DevOps Engineer",
        location: "Remote",
        kind: "Full-time",
        department: "Operations",
        description: "Manage cloud infrastructure and deployment pipelines for our POS platform",
        requirements: &[
            "1-2 years experience with AWS/GCP",
            "CI/CD experience",
            "Docker & Kubernetes",
        ],
    },
    Position {
        title: "Product Designer",
        location: "Remote / Austin, TX",
        kind: "Full-time",
        department: "Design",
        description: "Create beautiful, intuitive interfaces for our suite of POS products",
        requirements: &[
            "1-2 years UI/UX portfolio experience",
            "Figma proficiency",
            "Design system experience",
        ],
    },
    Position {
        title: "IT Support Specialist",
        location: "Remote / Local Hub",
        kind: "Full-time",
        department: "Operations",
        description: "Provide technical assistance and resolve hardware/software issues for staff.",
        requirements: &[
            "1-2 years IT support experience",
            "Troubleshooting skills",
            "Helpdesk ticketing",
        ],
    },
    Position {
        title: "Sales Architect (SA)",
        location: "Remote / Major US City",
        kind: "Full-time",
        department: "Sales",
        description: "Serve as the technical expert to help close enterprise deals and architect custom solutions.",
        requirements: &[
            "1-2 years in solutions architect role",
            "Deep product knowledge",
            "Strong client communication",
        ],
    },
    Position {
        title: "Business Analyst",
        location: "Remote",
        kind: "Full-time",
        department: "Product",
        description: "Analyze business processes and gather requirements to inform product development decisions.",
        requirements: &[
            "1-2 years BA experience",
            "Requirements documentation (e.g., user stories)",
            "Experience with Agile",
        ],
    },
    Position {
        title: "Network Engineer",
        location: "Remote",
        kind: "Full-time",
        department: "Operations",
        description: "Design, implement, and manage secure and reliable network infrastructure.",
        requirements: &[
            "1-2 years network engineering experience",
            "Routing/Switching expertise",
            "Cloud networking",
        ],
    },
];

pub static BENEFITS: [&str; 6] = [
    "Competitive salary and equity",
    "Comprehensive health benefits",
    "Flexible remote work",
    "Unlimited PTO",
    "Learning & development budget",
    "Latest tech equipment",
];

// =========================================================
// 页脚
// =========================================================

pub const FOOTER_TAGLINE: &str =
    "Powering the next generation of POS platforms for every business. Built by developers, for developers.";

pub static PRODUCT_LINKS: [&str; 4] = ["POS Cloud", "Inventory Manager", "Payment API", "Documentation"];
pub static COMPANY_LINKS: [&str; 4] = ["About Us", "Careers", "Blog", "Contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Github,
    Twitter,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: SocialNetwork::Github,
        url: "https://github.com/fastcode",
    },
    SocialLink {
        network: SocialNetwork::Twitter,
        url: "https://twitter.com/fastcode",
    },
    SocialLink {
        network: SocialNetwork::Linkedin,
        url: "https://linkedin.com/company/fastcode",
    },
];

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, crate::BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_statuses() {
        let labels: Vec<&str> = ROADMAP.iter().map(|m| m.status.label()).collect();
        assert_eq!(labels, vec!["Completed", "In Progress", "Planned"]);
        assert!(ROADMAP.iter().all(|m| m.features.len() == 3));
    }

    #[test]
    fn test_positions_have_requirements() {
        assert!(OPEN_POSITIONS.iter().all(|p| !p.requirements.is_empty()));
        assert_eq!(
            OPEN_POSITIONS
                .iter()
                .filter(|p| p.department == "Operations")
                .count(),
            3
        );
    }

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2024), "© 2024 FastCode. All rights reserved.");
    }
}
