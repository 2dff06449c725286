//! Built-in page copy and loading of replacement content files.

use std::path::{Path, PathBuf};

use thiserror::Error;

use marquee_types::{
    CtaCopy, Feature, FeatureIcon, FooterColumn, FooterLink, HeroCopy, NavLink, PageContent,
    Rating, Statistic, Testimonial,
};

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read content at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse content at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Parse a TOML content file into [`PageContent`].
pub fn load_content(path: &Path) -> Result<PageContent, ContentLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ContentLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn nav(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn feature(icon: FeatureIcon, title: &str, description: &str) -> Feature {
    Feature {
        icon,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn statistic(value: u64, suffix: &str, label: &str) -> Statistic {
    Statistic {
        value,
        label: label.to_string(),
        prefix: String::new(),
        suffix: suffix.to_string(),
    }
}

fn testimonial(quote: &str, name: &str, title: &str, avatar: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        rating: Rating::FIVE,
        avatar: Some(avatar.to_string()),
    }
}

fn column(title: &str, labels: &[&str]) -> FooterColumn {
    FooterColumn {
        title: title.to_string(),
        links: labels
            .iter()
            .map(|label| FooterLink {
                label: (*label).to_string(),
                href: "#".to_string(),
            })
            .collect(),
    }
}

/// The stock landing page.
#[must_use]
pub fn default_content() -> PageContent {
    PageContent {
        company_name: "Platform".to_string(),
        copyright_year: None,
        navigation: vec![
            nav("Features", "#features"),
            nav("Statistics", "#stats"),
            nav("Testimonials", "#testimonials"),
            nav("CTA", "#cta"),
        ],
        hero: HeroCopy {
            headline: "The Future of Web Development".to_string(),
            subheading: "Build, deploy, and scale your applications with confidence. \
                Our platform provides everything you need to succeed in the modern web."
                .to_string(),
            primary_cta: "Get Started".to_string(),
            secondary_cta: "Learn More".to_string(),
        },
        features: vec![
            feature(
                FeatureIcon::Zap,
                "Lightning Fast",
                "Optimized performance with modern web technologies and best practices for blazing-fast load times.",
            ),
            feature(
                FeatureIcon::Rocket,
                "Easy to Deploy",
                "One-click deployment to any cloud platform with automatic scaling and zero downtime updates.",
            ),
            feature(
                FeatureIcon::Shield,
                "Enterprise Security",
                "Bank-grade security with encryption, compliance, and advanced threat detection built-in.",
            ),
            feature(
                FeatureIcon::Gauge,
                "Real-time Analytics",
                "Comprehensive dashboard with real-time metrics, insights, and customizable reports.",
            ),
            feature(
                FeatureIcon::Code,
                "Developer Friendly",
                "Simple API, extensive documentation, and SDK support for all major languages and frameworks.",
            ),
            feature(
                FeatureIcon::Users,
                "Team Collaboration",
                "Built for teams with role-based access, activity logs, and seamless collaboration tools.",
            ),
        ],
        statistics: vec![
            statistic(10_000, "+", "Active Users"),
            statistic(99, ".9%", "Uptime"),
            statistic(50, "ms", "Response Time"),
            statistic(180, "+", "Countries"),
        ],
        testimonials: vec![
            testimonial(
                "This platform has completely transformed how we deploy and manage our applications. The performance improvements are incredible.",
                "Sarah Chen",
                "CTO, TechCorp",
                "SC",
            ),
            testimonial(
                "Outstanding support and documentation. Their team went above and beyond to help us integrate everything seamlessly.",
                "Michael Rodriguez",
                "Founder, StartupXYZ",
                "MR",
            ),
            testimonial(
                "The developer experience is phenomenal. Our entire team was productive within hours of implementation.",
                "Emma Williams",
                "Tech Lead, InnovateCo",
                "EW",
            ),
            testimonial(
                "Best investment we made this year. ROI was evident within the first month of deployment.",
                "James Thompson",
                "VP Engineering, Enterprise Inc",
                "JT",
            ),
        ],
        cta: CtaCopy {
            headline: "Ready to Transform Your Business?".to_string(),
            subheading: "Join thousands of companies using our platform to build and scale \
                their applications. Start your free trial today, no credit card required."
                .to_string(),
            primary_cta: "Start Free Trial".to_string(),
            secondary_cta: "Schedule Demo".to_string(),
            benefits: vec![
                "Unlimited scalability and performance".to_string(),
                "Dedicated customer success team".to_string(),
                "Custom integrations and API access".to_string(),
                "Priority support and SLA guarantees".to_string(),
            ],
        },
        footer: vec![
            column("Product", &["Features", "Pricing", "Security", "Roadmap"]),
            column("Company", &["About", "Blog", "Careers", "Contact"]),
            column(
                "Resources",
                &["Documentation", "API Reference", "Community", "Support"],
            ),
            column("Legal", &["Privacy", "Terms", "Cookies", "Compliance"]),
        ],
    }
}
