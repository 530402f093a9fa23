use super::model::{metric, Icon, IndustryContent, Metric, PanelMode, Section, Trend::*};

const NO_METRICS: &[Metric] = &[];

pub static HEALTHCARE: IndustryContent = IndustryContent {
    name: "Healthcare & MedTech",
    nav_description: "Compliance solutions for healthcare institutions",
    icon: Icon::Stethoscope,
    title: "Advanced Healthcare Compliance Solutions",
    subtitle: "Revolutionizing healthcare compliance with quantum-inspired AI systems",
    label: "Healthcare",
    mode: PanelMode::Static,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "HIPAA Compliance Automation",
            description: "Real-time monitoring and automated compliance checks for HIPAA regulations.",
            icon: Icon::Shield,
            benefits: &["Real-time HIPAA monitoring", "Automated compliance checks", "Documentation tracking", "Risk assessment"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Clinical Trial Management",
            description: "Advanced oversight of clinical trials with regulatory alignment.",
            icon: Icon::Microscope,
            benefits: &["Protocol compliance", "Data management", "Trial monitoring", "Safety tracking"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Real-Time Monitoring",
            description: "Continuous monitoring of healthcare operations and compliance.",
            icon: Icon::Clock,
            benefits: &["Patient data protection", "Operation monitoring", "Compliance tracking", "Alert system"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Documentation Management",
            description: "Automated medical records compliance and documentation tracking.",
            icon: Icon::FileText,
            benefits: &["Record management", "Compliance verification", "Audit trails", "Access control"],
            metrics: NO_METRICS,
        },
    ],
};

pub static LEGAL: IndustryContent = IndustryContent {
    name: "Legal & Litigation",
    nav_description: "AI-powered legal compliance systems",
    icon: Icon::Scale,
    title: "Legal & Litigation Compliance Solutions",
    subtitle: "Advanced AI systems for legal compliance and risk management",
    label: "Legal",
    mode: PanelMode::Static,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Regulatory Compliance Analysis",
            description: "AI-powered analysis of legal documents and regulatory requirements.",
            icon: Icon::Scale,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Document Management",
            description: "Automated legal document processing and compliance tracking.",
            icon: Icon::FileText,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Risk Assessment",
            description: "Real-time risk analysis and compliance monitoring.",
            icon: Icon::Shield,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Legal Research",
            description: "Advanced legal research and precedent analysis.",
            icon: Icon::Search,
            benefits: &[],
            metrics: NO_METRICS,
        },
    ],
};

pub static HEDGE_FUNDS: IndustryContent = IndustryContent {
    name: "Hedge Funds",
    nav_description: "Fund operations and trading compliance",
    icon: Icon::TrendingUp,
    title: "Hedge Fund Compliance Solutions",
    subtitle: "Adaptive compliance intelligence for alternative investment managers",
    label: "Hedge Funds",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Trading Surveillance",
            description: "Continuous monitoring of trading activity against regulatory limits.",
            icon: Icon::Activity,
            benefits: &["Pre-trade compliance checks", "Best execution monitoring", "Position limit tracking", "Market abuse detection"],
            metrics: &[
                metric("Trade Coverage", "100%", Up),
                metric("Alert Latency", "<10ms", Down),
                metric("Accuracy", "99.7%", Up),
            ],
        },
        Section {
            title: "Regulatory Reporting",
            description: "Automated filings across jurisdictions and regulators.",
            icon: Icon::FileCheck,
            benefits: &["Form PF preparation", "AIFMD reporting", "Filing deadline tracking", "Audit-ready records"],
            metrics: &[
                metric("Filing Accuracy", "99.9%", Up),
                metric("Preparation Time", "-60%", Down),
                metric("Jurisdictions", "40+", Up),
            ],
        },
        Section {
            title: "Investor Disclosure",
            description: "Consistent, compliant communication with limited partners.",
            icon: Icon::Users,
            benefits: &["Marketing material review", "Disclosure consistency checks", "Performance presentation rules", "Side letter tracking"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Risk Analytics",
            description: "Portfolio-level risk monitoring aligned with compliance policy.",
            icon: Icon::LineChart,
            benefits: &["Exposure analysis", "Liquidity risk monitoring", "Counterparty tracking", "Stress scenario review"],
            metrics: &[
                metric("Risk Coverage", "98.9%", Up),
                metric("Update Cycle", "Real-time", Flat),
                metric("False Positives", "0.5%", Down),
            ],
        },
    ],
};

pub static INSURANCE: IndustryContent = IndustryContent {
    name: "Insurance",
    nav_description: "Risk management and compliance automation",
    icon: Icon::Shield,
    title: "Insurance Compliance Solutions",
    subtitle: "Advanced compliance automation for the insurance industry",
    label: "Insurance",
    mode: PanelMode::Static,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Risk Assessment Automation",
            description: "AI-powered risk analysis and compliance monitoring for insurance operations.",
            icon: Icon::Shield,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Claims Compliance",
            description: "Automated compliance verification for claims processing and management.",
            icon: Icon::FileCheck,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Fraud Detection",
            description: "Advanced fraud detection with regulatory compliance integration.",
            icon: Icon::AlertTriangle,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Analytics Dashboard",
            description: "Real-time compliance analytics and reporting dashboard.",
            icon: Icon::BarChart,
            benefits: &[],
            metrics: NO_METRICS,
        },
    ],
};

pub static BANKING: IndustryContent = IndustryContent {
    name: "Investment Banks",
    nav_description: "Banking regulation compliance solutions",
    icon: Icon::Bank,
    title: "Investment Banking Solutions",
    subtitle: "Advanced compliance systems for investment banking operations",
    label: "Investment Banking",
    mode: PanelMode::Static,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Banking Regulations",
            description: "Comprehensive compliance monitoring for banking regulations.",
            icon: Icon::Lock,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Transaction Monitoring",
            description: "Real-time transaction compliance and risk assessment.",
            icon: Icon::Activity,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Data Management",
            description: "Secure and compliant banking data management solutions.",
            icon: Icon::Database,
            benefits: &[],
            metrics: NO_METRICS,
        },
        Section {
            title: "Institutional Compliance",
            description: "Enterprise-wide compliance management for financial institutions.",
            icon: Icon::Bank,
            benefits: &[],
            metrics: NO_METRICS,
        },
    ],
};

pub static MANUFACTURING: IndustryContent = IndustryContent {
    name: "Manufacturing",
    nav_description: "Industrial compliance management",
    icon: Icon::Factory,
    title: "Manufacturing Compliance Solutions",
    subtitle: "Adaptive compliance for production, safety and supply chains",
    label: "Manufacturing",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Quality Management",
            description: "Continuous alignment of production quality with ISO and sector standards.",
            icon: Icon::ClipboardCheck,
            benefits: &["ISO standard tracking", "Deviation detection", "Corrective action workflows", "Certification readiness"],
            metrics: &[
                metric("Defect Detection", "99.5%", Up),
                metric("Audit Prep Time", "-50%", Down),
                metric("Line Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Workplace Safety",
            description: "Real-time monitoring of occupational safety requirements.",
            icon: Icon::Shield,
            benefits: &["OSHA compliance tracking", "Incident reporting", "Hazard identification", "Training records"],
            metrics: &[
                metric("Incident Response", "<1min", Down),
                metric("Protocol Adherence", "98.7%", Up),
                metric("Monitoring", "24/7", Flat),
            ],
        },
        Section {
            title: "Supply Chain Compliance",
            description: "Supplier verification and materials traceability.",
            icon: Icon::Network,
            benefits: &["Supplier due diligence", "Materials traceability", "Conflict minerals screening", "Export control checks"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Environmental Reporting",
            description: "Automated emissions and waste reporting for regulators.",
            icon: Icon::Leaf,
            benefits: &["Emissions tracking", "Waste stream reporting", "Permit management", "Sustainability disclosures"],
            metrics: &[
                metric("Reporting Accuracy", "99.8%", Up),
                metric("Filing Time", "-45%", Down),
                metric("Permit Coverage", "100%", Up),
            ],
        },
    ],
};

pub static GOVERNMENT: IndustryContent = IndustryContent {
    name: "Government",
    nav_description: "Public sector compliance systems",
    icon: Icon::Landmark,
    title: "Government Compliance Solutions",
    subtitle: "Advanced regulatory compliance for public sector operations",
    label: "Government",
    mode: PanelMode::Hover,
    highlights: &[
        metric("Security Level", "Level 4", Flat),
        metric("Data Centers", "12", Flat),
        metric("Uptime", "99.999%", Up),
        metric("Policy Compliance", "99.2%", Up),
        metric("Security Standards", "98.8%", Up),
        metric("Service Delivery", "95.5%", Up),
    ],
    sections: &[
        Section {
            title: "Regulatory Oversight",
            description: "Comprehensive regulatory compliance monitoring for government agencies.",
            icon: Icon::Landmark,
            benefits: &["Real-time policy tracking", "Automated compliance checks", "Policy implementation monitoring", "Regulatory impact assessment"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Security Compliance",
            description: "Advanced security protocols and compliance frameworks.",
            icon: Icon::Shield,
            benefits: &["Zero-trust architecture", "Data encryption standards", "Access control systems", "Security audit trails"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Documentation Management",
            description: "Automated documentation and compliance tracking systems.",
            icon: Icon::FileText,
            benefits: &["Digital document management", "Version control systems", "Audit trail maintenance", "Automated reporting"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Public Service Integration",
            description: "Streamlined compliance for public service delivery.",
            icon: Icon::Users,
            benefits: &["Service delivery monitoring", "Performance tracking", "Citizen feedback integration", "Service compliance metrics"],
            metrics: NO_METRICS,
        },
        Section {
            title: "International Compliance",
            description: "Cross-border regulatory compliance and coordination.",
            icon: Icon::Globe,
            benefits: &["International standards alignment", "Cross-border coordination", "Global compliance tracking", "International reporting"],
            metrics: NO_METRICS,
        },
    ],
};

pub static ENTERPRISE: IndustryContent = IndustryContent {
    name: "Enterprise",
    nav_description: "Corporate compliance solutions",
    icon: Icon::Building,
    title: "Enterprise Compliance Solutions",
    subtitle: "Organization-wide compliance orchestration for global enterprises",
    label: "Enterprise",
    mode: PanelMode::Hover,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Policy Management",
            description: "Central policy lifecycle with automatic regulatory mapping.",
            icon: Icon::FileText,
            benefits: &["Policy version control", "Regulation-to-policy mapping", "Attestation tracking", "Exception management"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Data Privacy",
            description: "GDPR, CCPA and global privacy compliance in one place.",
            icon: Icon::Lock,
            benefits: &["Data inventory mapping", "Consent management", "Subject request workflows", "Breach notification readiness"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Third-Party Risk",
            description: "Vendor onboarding and continuous third-party monitoring.",
            icon: Icon::Network,
            benefits: &["Vendor due diligence", "Contract compliance", "Continuous risk scoring", "Offboarding controls"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Compliance Analytics",
            description: "Executive dashboards for board-level compliance reporting.",
            icon: Icon::BarChart,
            benefits: &["Board reporting", "Control effectiveness", "Trend analysis", "Regulatory change impact"],
            metrics: NO_METRICS,
        },
    ],
};

pub static GEOPOLITICAL_ANALYSTS: IndustryContent = IndustryContent {
    name: "Geopolitical Analysis",
    nav_description: "Strategic compliance for global stability",
    icon: Icon::Globe,
    title: "ARCS for Geopolitical Analysts",
    subtitle: "Strategic compliance intelligence for a shifting global landscape",
    label: "Geopolitical Analysis",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Sanctions Monitoring",
            description: "Real-time tracking of sanctions regimes and export controls.",
            icon: Icon::Shield,
            benefits: &["Sanctions list screening", "Export control mapping", "Jurisdiction change alerts", "Exposure assessment"],
            metrics: &[
                metric("List Coverage", "100%", Up),
                metric("Update Speed", "<1min", Down),
                metric("Match Accuracy", "99.6%", Up),
            ],
        },
        Section {
            title: "Regional Risk Mapping",
            description: "Country and regional regulatory risk scoring.",
            icon: Icon::Globe,
            benefits: &["Country risk scoring", "Regulatory stability index", "Political event tracking", "Scenario comparison"],
            metrics: &[
                metric("Countries Covered", "190+", Up),
                metric("Refresh Cycle", "Daily", Flat),
                metric("Forecast Accuracy", "94.8%", Up),
            ],
        },
        Section {
            title: "Scenario Forecasting",
            description: "AI-driven forecasting of regulatory responses to global events.",
            icon: Icon::Brain,
            benefits: &["Policy response modeling", "Escalation pathways", "Impact projections", "Early warning indicators"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Strategic Briefings",
            description: "Decision-ready briefings for leadership and policy teams.",
            icon: Icon::FileText,
            benefits: &["Executive summaries", "Stakeholder mapping", "Compliance implications", "Recommended actions"],
            metrics: NO_METRICS,
        },
    ],
};

pub static CRITICAL_INFRASTRUCTURE: IndustryContent = IndustryContent {
    name: "Critical Infrastructure",
    nav_description: "Infrastructure protection compliance",
    icon: Icon::Lock,
    title: "ARCS for Critical Infrastructure",
    subtitle: "Advanced compliance solutions for critical infrastructure protection",
    label: "Critical Infrastructure",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Infrastructure Security",
            description: "Advanced security monitoring and compliance for critical infrastructure.",
            icon: Icon::Shield,
            benefits: &["Real-time security monitoring", "Threat detection", "Compliance validation", "Risk assessment"],
            metrics: &[
                metric("Security Score", "99.99%", Up),
                metric("Response Time", "<1ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "System Resilience",
            description: "Ensuring operational continuity through adaptive compliance.",
            icon: Icon::Server,
            benefits: &["System redundancy", "Disaster recovery", "Business continuity", "Performance monitoring"],
            metrics: &[
                metric("Uptime", "99.999%", Up),
                metric("Recovery Time", "<5min", Down),
                metric("Resilience", "100%", Up),
            ],
        },
        Section {
            title: "Performance Monitoring",
            description: "Continuous monitoring of infrastructure performance and compliance.",
            icon: Icon::Activity,
            benefits: &["Performance metrics", "Compliance tracking", "System optimization", "Resource management"],
            metrics: &[
                metric("Monitoring", "24/7", Up),
                metric("Latency", "<1ms", Down),
                metric("Accuracy", "99.9%", Up),
            ],
        },
        Section {
            title: "Risk Management",
            description: "Comprehensive risk assessment and mitigation strategies.",
            icon: Icon::AlertTriangle,
            benefits: &["Risk identification", "Mitigation planning", "Impact analysis", "Recovery protocols"],
            metrics: &[
                metric("Risk Detection", "99.9%", Up),
                metric("Alert Speed", "<2ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
    ],
};

pub static INVESTORS: IndustryContent = IndustryContent {
    name: "Investors",
    nav_description: "Investment compliance intelligence",
    icon: Icon::TrendingUp,
    title: "ARCS for Investors",
    subtitle: "Advanced compliance intelligence for investment decisions",
    label: "Investment",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Early-Stage Compliance Assessment",
            description: "Comprehensive compliance evaluation for early-stage investments.",
            icon: Icon::AlertTriangle,
            benefits: &["Pre-investment due diligence", "Projected regulatory pathway analysis", "Early risk identification", "Compliance readiness scoring"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Market Readiness Analysis",
            description: "Advanced market entry compliance and scenario analysis.",
            icon: Icon::LineChart,
            benefits: &["Market entry compliance mapping", "Regulatory scenario forecasting", "Compliance cost projection", "Time-to-market optimization"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Real-Time Monitoring",
            description: "Continuous compliance monitoring and risk assessment.",
            icon: Icon::Clock,
            benefits: &["Live compliance tracking", "Risk level monitoring", "Regulatory change alerts", "Performance metrics"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Data-Driven Insights",
            description: "Advanced analytics for investment compliance decisions.",
            icon: Icon::Database,
            benefits: &["Compliance trend analysis", "Predictive risk modeling", "Market impact assessment", "Investment optimization"],
            metrics: NO_METRICS,
        },
    ],
};

pub static ADVANCED_LABS: IndustryContent = IndustryContent {
    name: "Advanced Labs",
    nav_description: "Research compliance solutions",
    icon: Icon::Beaker,
    title: "ARCS for Advanced Labs",
    subtitle: "Empowering research excellence through adaptive compliance and security",
    label: "Advanced Labs",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Advanced Research Compliance",
            description: "Real-time monitoring and adaptation of research protocols to ensure compliance with evolving standards.",
            icon: Icon::Microscope,
            benefits: &["Protocol adaptation", "Standards tracking", "Ethics review support", "Grant compliance"],
            metrics: &[
                metric("Compliance Rate", "99.9%", Flat),
                metric("Update Speed", "<1min", Flat),
                metric("Protocol Coverage", "100%", Flat),
            ],
        },
        Section {
            title: "Data Security Protocol",
            description: "Enterprise-grade security measures protecting sensitive research data and intellectual property.",
            icon: Icon::Shield,
            benefits: &["IP protection", "Encrypted storage", "Role-based access", "Security audits"],
            metrics: &[
                metric("Security Score", "98/100", Flat),
                metric("Encryption", "256-bit", Flat),
                metric("Access Control", "Multi-layer", Flat),
            ],
        },
        Section {
            title: "Research Data Management",
            description: "Comprehensive data lifecycle management ensuring compliance and accessibility.",
            icon: Icon::Database,
            benefits: &["Lifecycle management", "Backup and recovery", "Metadata standards", "Retention policies"],
            metrics: &[
                metric("Data Integrity", "100%", Flat),
                metric("Recovery Time", "<5min", Flat),
                metric("Storage Efficiency", "99.5%", Flat),
            ],
        },
        Section {
            title: "Automated Compliance Scanning",
            description: "Continuous monitoring of research activities for regulatory alignment.",
            icon: Icon::Search,
            benefits: &["Continuous scanning", "Real-time alerts", "Deviation reports", "Regulatory alignment"],
            metrics: &[
                metric("Scan Frequency", "24/7", Flat),
                metric("Alert Speed", "Real-time", Flat),
                metric("Accuracy", "99.99%", Flat),
            ],
        },
    ],
};

pub static LEGISLATURE: IndustryContent = IndustryContent {
    name: "Legislature",
    nav_description: "Legislative compliance support",
    icon: Icon::Landmark,
    title: "ARCS for Legislature",
    subtitle: "Advanced compliance solutions for legislative bodies",
    label: "Legislature",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Policy Development Support",
            description: "Data-driven insights for legislative decision-making.",
            icon: Icon::FileText,
            benefits: &["Real-time impact analysis", "Regulatory gap identification", "Policy effectiveness metrics", "Compliance forecasting"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Legislative Compliance",
            description: "Comprehensive compliance monitoring for legislative bodies.",
            icon: Icon::Scale,
            benefits: &["Legislative tracking", "Compliance verification", "Documentation management", "Audit trail maintenance"],
            metrics: NO_METRICS,
        },
        Section {
            title: "International Alignment",
            description: "Cross-border regulatory harmonization support.",
            icon: Icon::Globe,
            benefits: &["International standards tracking", "Regulatory alignment analysis", "Global compliance mapping", "Policy coordination"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Performance Analytics",
            description: "Advanced analytics for legislative effectiveness.",
            icon: Icon::BarChart,
            benefits: &["Policy impact metrics", "Compliance success rates", "Implementation tracking", "Outcome analysis"],
            metrics: NO_METRICS,
        },
    ],
};

pub static INTELLIGENCE_AGENCIES: IndustryContent = IndustryContent {
    name: "Intelligence Agencies",
    nav_description: "Intelligence compliance systems",
    icon: Icon::Eye,
    title: "ARCS for Intelligence Agencies",
    subtitle: "Advanced compliance and security intelligence for strategic operations",
    label: "Intelligence",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Real-Time Threat Detection",
            description: "Advanced threat monitoring and compliance tracking for intelligence operations.",
            icon: Icon::Eye,
            benefits: &["Continuous threat monitoring", "Adaptive compliance protocols", "Real-time alert systems", "Pattern recognition"],
            metrics: &[
                metric("Threat Detection Rate", "99.99%", Up),
                metric("Response Time", "<50ms", Down),
                metric("False Positive Rate", "0.001%", Down),
            ],
        },
        Section {
            title: "Predictive Analytics",
            description: "AI-powered predictive capabilities for proactive threat mitigation.",
            icon: Icon::Brain,
            benefits: &["Threat forecasting", "Risk assessment", "Strategic planning", "Resource optimization"],
            metrics: &[
                metric("Prediction Accuracy", "97.5%", Up),
                metric("Lead Time", "72hrs", Up),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Influence Mapping",
            description: "Comprehensive network analysis for counterintelligence operations.",
            icon: Icon::Network,
            benefits: &["Network visualization", "Pattern identification", "Relationship mapping", "Anomaly detection"],
            metrics: &[
                metric("Network Coverage", "98.7%", Up),
                metric("Pattern Recognition", "99.3%", Up),
                metric("Analysis Speed", "100ms", Down),
            ],
        },
        Section {
            title: "Secure Communications",
            description: "Advanced encryption and secure data transmission protocols.",
            icon: Icon::Lock,
            benefits: &["End-to-end encryption", "Secure channels", "Authentication protocols", "Data integrity"],
            metrics: &[
                metric("Encryption Level", "256-bit", Up),
                metric("Security Score", "99.99%", Up),
                metric("Latency", "<10ms", Down),
            ],
        },
    ],
};

pub static HEDGE_FUNDS_VC: IndustryContent = IndustryContent {
    name: "Hedge Funds & VCs",
    nav_description: "Investment operations compliance",
    icon: Icon::TrendingUp,
    title: "ARCS for Hedge Funds & Venture Capital",
    subtitle: "Compliance intelligence across the full investment lifecycle",
    label: "Hedge Funds & VC",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Portfolio Due Diligence",
            description: "Regulatory readiness assessment for portfolio companies.",
            icon: Icon::Search,
            benefits: &["Regulatory pathway review", "Founder and entity screening", "Compliance gap reports", "Readiness scoring"],
            metrics: &[
                metric("Assessment Time", "-70%", Down),
                metric("Risk Detection", "98.4%", Up),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Fund Operations",
            description: "Operational compliance for fund administration and reporting.",
            icon: Icon::ClipboardCheck,
            benefits: &["Capital call compliance", "Valuation policy checks", "LP reporting", "Fee calculation review"],
            metrics: &[
                metric("Reporting Accuracy", "99.9%", Up),
                metric("Close Cycle", "-40%", Down),
                metric("Automation", "92%", Up),
            ],
        },
        Section {
            title: "Exit Readiness",
            description: "Compliance preparation for acquisitions and public listings.",
            icon: Icon::Target,
            benefits: &["Data room preparation", "Disclosure review", "Regulatory approvals tracking", "Post-exit obligations"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Market Intelligence",
            description: "Regulatory trend analysis for investment theses.",
            icon: Icon::LineChart,
            benefits: &["Sector regulation trends", "Policy change alerts", "Competitive landscape", "Thesis risk scoring"],
            metrics: NO_METRICS,
        },
    ],
};

pub static OPIOID_CRISIS: IndustryContent = IndustryContent {
    name: "Opioid Crisis",
    nav_description: "Opioid crisis management compliance",
    icon: Icon::AlertTriangle,
    title: "ARCS Applied to the Opioid Crisis",
    subtitle: "Advanced compliance solutions for opioid crisis management",
    label: "Healthcare",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Prescription Monitoring",
            description: "Real-time monitoring of opioid prescriptions and usage patterns.",
            icon: Icon::Activity,
            benefits: &["Usage pattern analysis", "Prescription tracking", "Risk identification", "Alert system"],
            metrics: &[
                metric("Monitoring Coverage", "100%", Up),
                metric("Alert Speed", "<5ms", Down),
                metric("Accuracy", "99.99%", Up),
            ],
        },
        Section {
            title: "Predictive Analytics",
            description: "Advanced analytics for addiction risk assessment and prevention.",
            icon: Icon::Brain,
            benefits: &["Risk prediction", "Early intervention", "Pattern recognition", "Prevention strategies"],
            metrics: &[
                metric("Prediction Accuracy", "97.5%", Up),
                metric("Lead Time", "48hrs", Up),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Treatment Compliance",
            description: "Comprehensive treatment monitoring and compliance tracking.",
            icon: Icon::Shield,
            benefits: &["Treatment adherence", "Progress monitoring", "Outcome tracking", "Protocol compliance"],
            metrics: &[
                metric("Compliance Rate", "98.8%", Up),
                metric("Response Time", "10ms", Down),
                metric("Success Rate", "96.5%", Up),
            ],
        },
        Section {
            title: "Community Impact",
            description: "Analysis of community-level impact and intervention effectiveness.",
            icon: Icon::Users,
            benefits: &["Impact assessment", "Resource allocation", "Community engagement", "Intervention tracking"],
            metrics: &[
                metric("Coverage", "100%", Up),
                metric("Response Rate", "95.5%", Up),
                metric("Effectiveness", "92.8%", Up),
            ],
        },
    ],
};

pub static MYOCARDITIS: IndustryContent = IndustryContent {
    name: "Myocarditis",
    nav_description: "Myocarditis treatment compliance",
    icon: Icon::Heart,
    title: "ARCS Applied to Myocarditis",
    subtitle: "Advanced compliance solutions for myocarditis treatment and monitoring",
    label: "Healthcare",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Real-Time Monitoring",
            description: "Continuous monitoring of myocarditis indicators and treatment compliance.",
            icon: Icon::Activity,
            benefits: &["Real-time vital tracking", "Treatment adherence monitoring", "Early warning system", "Patient risk assessment"],
            metrics: &[
                metric("Monitoring Accuracy", "99.99%", Up),
                metric("Response Time", "<1ms", Down),
                metric("Coverage", "24/7", Up),
            ],
        },
        Section {
            title: "Treatment Compliance",
            description: "Advanced compliance tracking for myocarditis treatment protocols.",
            icon: Icon::Stethoscope,
            benefits: &["Protocol adherence tracking", "Medication compliance", "Treatment optimization", "Progress monitoring"],
            metrics: &[
                metric("Compliance Rate", "98.5%", Up),
                metric("Protocol Updates", "Real-time", Up),
                metric("Accuracy", "99.9%", Up),
            ],
        },
        Section {
            title: "Predictive Analytics",
            description: "AI-powered prediction of treatment outcomes and complications.",
            icon: Icon::LineChart,
            benefits: &["Outcome prediction", "Risk forecasting", "Treatment optimization", "Patient stratification"],
            metrics: &[
                metric("Prediction Accuracy", "96.7%", Up),
                metric("Lead Time", "48hrs", Up),
                metric("Analysis Speed", "<5ms", Down),
            ],
        },
        Section {
            title: "Patient Management",
            description: "Comprehensive patient monitoring and care coordination.",
            icon: Icon::Heart,
            benefits: &["Care coordination", "Patient engagement", "Treatment tracking", "Recovery monitoring"],
            metrics: &[
                metric("Patient Engagement", "94.2%", Up),
                metric("Care Coordination", "99.1%", Up),
                metric("Response Rate", "100%", Up),
            ],
        },
    ],
};

pub static SYNTHETIC_BIOLOGY: IndustryContent = IndustryContent {
    name: "Synthetic Biology",
    nav_description: "Bioengineering compliance solutions",
    icon: Icon::Dna,
    title: "ARCS Applied to Synthetic Biology",
    subtitle: "Advanced compliance solutions for synthetic biology research",
    label: "Synthetic Biology",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Bioengineering Compliance",
            description: "Advanced compliance monitoring for synthetic biology research.",
            icon: Icon::Dna,
            benefits: &["Protocol compliance", "Safety standards", "Research validation", "Documentation tracking"],
            metrics: &[
                metric("Compliance Rate", "99.99%", Up),
                metric("Protocol Updates", "Real-time", Up),
                metric("Safety Score", "100%", Up),
            ],
        },
        Section {
            title: "Safety Protocols",
            description: "Comprehensive safety monitoring and risk management.",
            icon: Icon::Shield,
            benefits: &["Risk assessment", "Safety protocols", "Containment verification", "Emergency response"],
            metrics: &[
                metric("Safety Rating", "100%", Up),
                metric("Response Time", "<1ms", Down),
                metric("Protocol Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Research Data Management",
            description: "Advanced data management and compliance tracking.",
            icon: Icon::Database,
            benefits: &["Data integrity", "Version control", "Access management", "Audit trails"],
            metrics: &[
                metric("Data Integrity", "100%", Up),
                metric("Access Control", "99.99%", Up),
                metric("Audit Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Risk Assessment",
            description: "Continuous risk monitoring and mitigation strategies.",
            icon: Icon::AlertTriangle,
            benefits: &["Risk identification", "Impact assessment", "Mitigation planning", "Compliance verification"],
            metrics: &[
                metric("Risk Detection", "99.99%", Up),
                metric("Alert Speed", "<5ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
    ],
};

pub static DISINFORMATION: IndustryContent = IndustryContent {
    name: "Disinformation",
    nav_description: "Countering disinformation compliance",
    icon: Icon::Eye,
    title: "ARCS Applied to Countering Disinformation",
    subtitle: "Advanced compliance solutions for digital influence operations",
    label: "Information Security",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Real-Time Content Monitoring",
            description: "Advanced monitoring of digital channels for disinformation detection.",
            icon: Icon::Eye,
            benefits: &["Multi-channel monitoring", "Pattern recognition", "Source verification", "Content analysis"],
            metrics: &[
                metric("Detection Rate", "99.9%", Up),
                metric("Response Time", "<1ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Pattern Recognition",
            description: "AI-powered detection of coordinated disinformation campaigns.",
            icon: Icon::Brain,
            benefits: &["Campaign tracking", "Network analysis", "Behavioral patterns", "Trend identification"],
            metrics: &[
                metric("Accuracy", "97.8%", Up),
                metric("Processing", "5ms", Down),
                metric("Pattern Match", "96.5%", Up),
            ],
        },
        Section {
            title: "Influence Mapping",
            description: "Comprehensive mapping of influence networks and spread patterns.",
            icon: Icon::Network,
            benefits: &["Network visualization", "Spread tracking", "Impact assessment", "Source identification"],
            metrics: &[
                metric("Network Coverage", "98.7%", Up),
                metric("Analysis Speed", "10ms", Down),
                metric("Accuracy", "99.1%", Up),
            ],
        },
        Section {
            title: "Countermeasure Deployment",
            description: "Automated response and mitigation strategies.",
            icon: Icon::Shield,
            benefits: &["Rapid response", "Strategy optimization", "Impact monitoring", "Effectiveness tracking"],
            metrics: &[
                metric("Response Rate", "99.9%", Up),
                metric("Deploy Time", "<2ms", Down),
                metric("Success Rate", "97.3%", Up),
            ],
        },
    ],
};

pub static LITIGATION: IndustryContent = IndustryContent {
    name: "Litigation",
    nav_description: "Litigation risk and case compliance",
    icon: Icon::Gavel,
    title: "ARCS for Litigation",
    subtitle: "Advanced compliance intelligence for legal operations",
    label: "Litigation",
    mode: PanelMode::Hover,
    highlights: &[
        metric("Success Rate", "98%", Up),
        metric("Alignment Score", "95%", Up),
        metric("Time Reduction", "65%", Up),
        metric("Cost Savings", "45%", Up),
    ],
    sections: &[
        Section {
            title: "Predictive Scenario Mapping",
            description: "AI-driven analysis of potential case outcomes and compliance pathways",
            icon: Icon::Network,
            benefits: &["Outcome probability modeling", "Compliance pathway comparison", "Settlement scenario review", "Precedent weighting"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Risk Assessment Engine",
            description: "Real-time evaluation of compliance risks and mitigation strategies",
            icon: Icon::AlertTriangle,
            benefits: &["Regulatory non-compliance alerts", "Documentation gap detection", "Procedural error checks", "Timeline delay warnings"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Reviewer Alignment",
            description: "Automated alignment of multiple reviewers for consistent compliance evaluation",
            icon: Icon::Users,
            benefits: &["Reviewer consistency scoring", "Conflict resolution", "Shared evaluation criteria", "Review audit trail"],
            metrics: NO_METRICS,
        },
        Section {
            title: "Compliance Shield",
            description: "Proactive compliance monitoring and violation prevention",
            icon: Icon::Shield,
            benefits: &["Violation prevention", "Continuous monitoring", "Multi-jurisdiction tracking", "Investigation defense support"],
            metrics: NO_METRICS,
        },
    ],
};

pub static FDA_PROGRAMS: IndustryContent = IndustryContent {
    name: "FDA Programs",
    nav_description: "FDA regulatory compliance",
    icon: Icon::Shield,
    title: "ARCS for FDA Programs in MedTech",
    subtitle: "Advanced compliance solutions for FDA regulatory pathways",
    label: "MedTech",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Accelerated Pathway Support",
            description: "Streamlined compliance for FDA Fast Track and PMA submissions.",
            icon: Icon::Clock,
            benefits: &["Fast Track optimization", "PMA submission support", "Documentation automation", "Timeline acceleration"],
            metrics: &[
                metric("Success Rate", "98.5%", Up),
                metric("Time Saved", "65%", Up),
                metric("Accuracy", "99.9%", Up),
            ],
        },
        Section {
            title: "Regulatory Compliance",
            description: "Comprehensive FDA compliance monitoring and verification.",
            icon: Icon::Shield,
            benefits: &["Real-time monitoring", "Compliance verification", "Audit preparation", "Risk assessment"],
            metrics: &[
                metric("Compliance Rate", "99.9%", Up),
                metric("Update Speed", "<1ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Clinical Trial Management",
            description: "Advanced oversight of clinical trials and regulatory alignment.",
            icon: Icon::Microscope,
            benefits: &["Trial monitoring", "Data management", "Protocol compliance", "Safety tracking"],
            metrics: &[
                metric("Trial Success", "96.7%", Up),
                metric("Data Accuracy", "99.9%", Up),
                metric("Protocol Adherence", "100%", Up),
            ],
        },
        Section {
            title: "Documentation Management",
            description: "Automated documentation and compliance tracking system.",
            icon: Icon::ClipboardCheck,
            benefits: &["Document automation", "Version control", "Audit trails", "Compliance verification"],
            metrics: &[
                metric("Automation Rate", "95%", Up),
                metric("Processing Time", "2ms", Down),
                metric("Accuracy", "99.99%", Up),
            ],
        },
    ],
};

pub static CARBON_CAPTURE: IndustryContent = IndustryContent {
    name: "Carbon Capture",
    nav_description: "Environmental compliance solutions",
    icon: Icon::Leaf,
    title: "ARCS Applied to Carbon Capture",
    subtitle: "Advanced compliance solutions for carbon capture technology",
    label: "Environmental Technology",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Environmental Compliance",
            description: "Real-time monitoring of carbon capture compliance standards.",
            icon: Icon::Leaf,
            benefits: &["Emissions tracking", "Regulatory alignment", "Performance monitoring", "Compliance reporting"],
            metrics: &[
                metric("Compliance Rate", "99.9%", Up),
                metric("Response Time", "<1ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Performance Analytics",
            description: "Advanced analytics for carbon capture efficiency.",
            icon: Icon::Activity,
            benefits: &["Efficiency tracking", "Process optimization", "Cost analysis", "Impact assessment"],
            metrics: &[
                metric("Capture Rate", "97.8%", Up),
                metric("Processing", "5ms", Down),
                metric("Efficiency", "96.5%", Up),
            ],
        },
        Section {
            title: "Predictive Maintenance",
            description: "AI-powered maintenance scheduling and optimization.",
            icon: Icon::LineChart,
            benefits: &["Equipment monitoring", "Failure prediction", "Maintenance planning", "Resource optimization"],
            metrics: &[
                metric("Uptime", "99.9%", Up),
                metric("Prediction", "48hrs", Up),
                metric("Accuracy", "98.7%", Up),
            ],
        },
        Section {
            title: "Risk Management",
            description: "Comprehensive risk assessment and mitigation strategies.",
            icon: Icon::AlertTriangle,
            benefits: &["Risk identification", "Impact analysis", "Mitigation planning", "Emergency response"],
            metrics: &[
                metric("Risk Detection", "99.9%", Up),
                metric("Alert Speed", "<2ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
    ],
};

pub static CONFLICT_ZONES: IndustryContent = IndustryContent {
    name: "Conflict Zones",
    nav_description: "Crisis zone compliance management",
    icon: Icon::Radio,
    title: "ARCS Applied to Conflict Zones",
    subtitle: "Advanced compliance solutions for high-risk environments",
    label: "Crisis Management",
    mode: PanelMode::Accordion,
    highlights: NO_METRICS,
    sections: &[
        Section {
            title: "Risk Assessment",
            description: "Real-time risk monitoring and assessment in conflict zones.",
            icon: Icon::AlertTriangle,
            benefits: &["Threat detection", "Risk scoring", "Area monitoring", "Safety alerts"],
            metrics: &[
                metric("Detection Rate", "99.9%", Up),
                metric("Response Time", "<1ms", Down),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Safety Protocols",
            description: "Advanced safety protocol management and compliance.",
            icon: Icon::Shield,
            benefits: &["Protocol automation", "Safety verification", "Emergency response", "Compliance tracking"],
            metrics: &[
                metric("Protocol Rate", "98.5%", Up),
                metric("Response", "<5ms", Down),
                metric("Compliance", "100%", Up),
            ],
        },
        Section {
            title: "Resource Management",
            description: "Efficient resource allocation and distribution tracking.",
            icon: Icon::Activity,
            benefits: &["Resource tracking", "Distribution planning", "Supply monitoring", "Efficiency optimization"],
            metrics: &[
                metric("Efficiency", "97.8%", Up),
                metric("Accuracy", "99.9%", Up),
                metric("Coverage", "100%", Up),
            ],
        },
        Section {
            title: "Communication Systems",
            description: "Secure communication and coordination networks.",
            icon: Icon::Radio,
            benefits: &["Secure channels", "Real-time updates", "Network resilience", "Data protection"],
            metrics: &[
                metric("Uptime", "99.99%", Up),
                metric("Latency", "<10ms", Down),
                metric("Security", "100%", Up),
            ],
        },
    ],
};
