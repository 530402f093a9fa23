// Copy for the landing, technologies and founder pages.

use super::model::{metric, Icon, Metric, Section, Trend::*};

pub const HERO_TITLE: &str = "Adaptive Regulatory Compliance";
pub const HERO_SUBTITLE: &str =
    "ARCS anticipates regulatory change and aligns compliance strategy with evolving standards in real time.";

pub static HERO_STATS: &[Metric] = &[
    metric("Compliance Accuracy", "99.9%", Up),
    metric("Regulatory Updates", "<1ms", Down),
    metric("Countries Served", "50+", Up),
    metric("Monitoring", "24/7", Flat),
];

pub const ABOUT_TITLE: &str = "About ARCS Scientific";
pub static ABOUT_PARAGRAPHS: &[&str] = &[
    "The Adaptive Regulatory Compliance System integrates AI, quantum-inspired computation and data science to adapt compliance processes as regulation evolves.",
    "Instead of reacting to new rules after the fact, ARCS forecasts regulatory movement and keeps policies, controls and documentation aligned before deadlines arrive.",
];

pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
}

pub static LEADERSHIP: &[Leader] = &[Leader {
    name: "James Scott",
    role: "Founder & Visionary",
    summary: "Over two decades advancing solutions in critical infrastructure, technology and societal resilience across more than 50 countries.",
}];

pub static FEATURES: &[Section] = &[
    Section {
        title: "Predictive Compliance",
        description: "Forecast regulatory change and prepare before it lands.",
        icon: Icon::Brain,
        benefits: &["Regulatory trend forecasting", "Impact simulation"],
        metrics: &[],
    },
    Section {
        title: "Real-Time Monitoring",
        description: "Continuous alignment of operations with current standards.",
        icon: Icon::Activity,
        benefits: &["Live control testing", "Instant deviation alerts"],
        metrics: &[],
    },
    Section {
        title: "Automated Documentation",
        description: "Audit-ready evidence generated as work happens.",
        icon: Icon::FileCheck,
        benefits: &["Versioned evidence", "Regulator-ready reports"],
        metrics: &[],
    },
    Section {
        title: "Secure by Design",
        description: "Enterprise-grade protection for sensitive compliance data.",
        icon: Icon::Lock,
        benefits: &["256-bit encryption", "Zero-trust access"],
        metrics: &[],
    },
];

pub const TECHNOLOGIES_TITLE: &str = "Core Technologies";
pub const TECHNOLOGIES_SUBTITLE: &str =
    "The technology stack that powers adaptive compliance, from neural processing to quantum-inspired optimization.";

pub static TECHNOLOGIES: &[Section] = &[
    Section {
        title: "Neural Processing Engine",
        description: "Deep models that read and interpret regulatory text at scale.",
        icon: Icon::Brain,
        benefits: &["Regulatory text understanding", "Obligation extraction", "Cross-reference resolution", "Multilingual coverage"],
        metrics: &[
            metric("Documents / Day", "1M+", Up),
            metric("Extraction Accuracy", "99.2%", Up),
            metric("Latency", "<50ms", Down),
        ],
    },
    Section {
        title: "Quantum-Inspired Optimization",
        description: "Optimization of compliance strategies across competing constraints.",
        icon: Icon::Sparkles,
        benefits: &["Constraint balancing", "Scenario optimization", "Resource allocation", "Cost minimization"],
        metrics: &[
            metric("Scenarios Evaluated", "10k/s", Up),
            metric("Cost Reduction", "45%", Up),
            metric("Solve Time", "<1s", Down),
        ],
    },
    Section {
        title: "Real-Time Intelligence",
        description: "Streaming detection of regulatory events and operational drift.",
        icon: Icon::Zap,
        benefits: &["Event streaming", "Drift detection", "Alert routing", "Continuous assurance"],
        metrics: &[
            metric("Uptime", "99.999%", Up),
            metric("Alert Speed", "<5ms", Down),
            metric("Coverage", "100%", Up),
        ],
    },
    Section {
        title: "Adaptive Knowledge Graph",
        description: "A living map of regulations, controls and their relationships.",
        icon: Icon::Network,
        benefits: &["Regulation-to-control mapping", "Impact tracing", "Jurisdiction overlays", "Change lineage"],
        metrics: &[
            metric("Regulations Mapped", "250k+", Up),
            metric("Jurisdictions", "190+", Up),
            metric("Refresh Cycle", "Real-time", Flat),
        ],
    },
];

pub struct StoryCard {
    pub icon: Icon,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const FOUNDER_NAME: &str = "James Scott";
pub const FOUNDER_BADGE: &str = "Founder & Visionary";
pub const FOUNDER_SUMMARY: &str = "Pioneering philanthropist and technology expert with over two decades dedicated to advancing solutions in critical infrastructure, technology, and societal resilience.";

pub static FOUNDER_STORY: &[StoryCard] = &[
    StoryCard {
        icon: Icon::Star,
        title: "Genesis of a Technological Visionary",
        paragraphs: &[
            "Scott's passion for technology was ignited in high school when he joined an advanced STEM program, splitting his day between academic classes and afternoon sessions devoted to robotics.",
            "During his senior year a recruiter from SGS Thomson Microelectronics recognized his potential, introducing him to advanced technology and international defense and laying the groundwork for his future in critical infrastructure strategy.",
        ],
    },
    StoryCard {
        icon: Icon::Brain,
        title: "The ARCS Process: A Crowning Achievement",
        paragraphs: &[
            "The Adaptive Regulatory Compliance System integrates AI, quantum technology and data science to adapt regulatory compliance processes in real time, reducing regulatory risk and accelerating market readiness.",
        ],
    },
    StoryCard {
        icon: Icon::Globe,
        title: "Global Impact & Innovation",
        paragraphs: &[
            "Scott's advisory services have expanded across more than 50 countries, helping establish labs, startups, institutes and think tanks that integrate AI, quantum computing, bioengineering and advanced analytics.",
        ],
    },
    StoryCard {
        icon: Icon::Award,
        title: "A Legacy of Visionary Leadership",
        paragraphs: &[
            "His influence mapping and problem-solving architecture have produced collaboration vehicles that set the standard for rapid, solution-oriented public-private partnerships.",
            "His initiatives reflect the belief that the next generation of international diplomacy will be led by problem solvers who blend technological leadership with incubators, accelerators and finance.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::reveal::{Reveal, RevealTimer, METRIC_PLACEHOLDER};

    #[test]
    fn hero_stats_show_placeholders_until_revealed() {
        let mut timer = RevealTimer::armed();
        let pending: Vec<&str> = HERO_STATS.iter().map(|m| timer.state().metric(m.value)).collect();
        assert!(pending.iter().all(|value| *value == METRIC_PLACEHOLDER));

        assert!(timer.fire());
        let shown: Vec<&str> = HERO_STATS.iter().map(|m| timer.state().metric(m.value)).collect();
        assert_eq!(shown, vec!["99.9%", "<1ms", "50+", "24/7"]);
        assert_eq!(timer.state(), Reveal::Shown);
    }

    #[test]
    fn technologies_are_all_disclosable() {
        assert!(!TECHNOLOGIES.is_empty());
        assert!(TECHNOLOGIES.iter().all(|section| !section.benefits.is_empty()));
    }
}
