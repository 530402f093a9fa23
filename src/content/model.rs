use crate::Route;

/// Symbolic glyph reference carried by content records. Resolved to markup
/// through [`Icon::glyph`] and [`Icon::class_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Activity,
    AlertTriangle,
    Award,
    BarChart,
    Beaker,
    BookOpen,
    Brain,
    Building,
    Bank,
    ClipboardCheck,
    Clock,
    Cpu,
    Database,
    Dna,
    Eye,
    Factory,
    FileCheck,
    FileText,
    Gavel,
    Globe,
    Heart,
    Landmark,
    Leaf,
    LineChart,
    Lock,
    Microscope,
    Network,
    Radio,
    Scale,
    Search,
    Server,
    Shield,
    Sparkles,
    Star,
    Stethoscope,
    Target,
    TrendingUp,
    Users,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Activity => "📈",
            Icon::AlertTriangle => "⚠️",
            Icon::Award => "🏅",
            Icon::BarChart => "📊",
            Icon::Beaker => "⚗️",
            Icon::BookOpen => "📖",
            Icon::Brain => "🧠",
            Icon::Building => "🏢",
            Icon::Bank => "🏦",
            Icon::ClipboardCheck => "📋",
            Icon::Clock => "⏱️",
            Icon::Cpu => "🖥️",
            Icon::Database => "🗄️",
            Icon::Dna => "🧬",
            Icon::Eye => "👁️",
            Icon::Factory => "🏭",
            Icon::FileCheck => "✅",
            Icon::FileText => "📄",
            Icon::Gavel => "🔨",
            Icon::Globe => "🌐",
            Icon::Heart => "❤️",
            Icon::Landmark => "🏛️",
            Icon::Leaf => "🍃",
            Icon::LineChart => "📉",
            Icon::Lock => "🔒",
            Icon::Microscope => "🔬",
            Icon::Network => "🕸️",
            Icon::Radio => "📡",
            Icon::Scale => "⚖️",
            Icon::Search => "🔍",
            Icon::Server => "🖧",
            Icon::Shield => "🛡️",
            Icon::Sparkles => "✨",
            Icon::Star => "⭐",
            Icon::Stethoscope => "🩺",
            Icon::Target => "🎯",
            Icon::TrendingUp => "💹",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Icon::Activity => "icon-activity",
            Icon::AlertTriangle => "icon-alert",
            Icon::Award => "icon-award",
            Icon::BarChart => "icon-bar-chart",
            Icon::Beaker => "icon-beaker",
            Icon::BookOpen => "icon-book",
            Icon::Brain => "icon-brain",
            Icon::Building => "icon-building",
            Icon::Bank => "icon-bank",
            Icon::ClipboardCheck => "icon-clipboard",
            Icon::Clock => "icon-clock",
            Icon::Cpu => "icon-cpu",
            Icon::Database => "icon-database",
            Icon::Dna => "icon-dna",
            Icon::Eye => "icon-eye",
            Icon::Factory => "icon-factory",
            Icon::FileCheck => "icon-file-check",
            Icon::FileText => "icon-file",
            Icon::Gavel => "icon-gavel",
            Icon::Globe => "icon-globe",
            Icon::Heart => "icon-heart",
            Icon::Landmark => "icon-landmark",
            Icon::Leaf => "icon-leaf",
            Icon::LineChart => "icon-line-chart",
            Icon::Lock => "icon-lock",
            Icon::Microscope => "icon-microscope",
            Icon::Network => "icon-network",
            Icon::Radio => "icon-radio",
            Icon::Scale => "icon-scale",
            Icon::Search => "icon-search",
            Icon::Server => "icon-server",
            Icon::Shield => "icon-shield",
            Icon::Sparkles => "icon-sparkles",
            Icon::Star => "icon-star",
            Icon::Stethoscope => "icon-stethoscope",
            Icon::Target => "icon-target",
            Icon::TrendingUp => "icon-trending",
            Icon::Users => "icon-users",
            Icon::Zap => "icon-zap",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }
}

/// Static display tuple. Values are illustrative strings, never computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

pub const fn metric(label: &'static str, value: &'static str, trend: Trend) -> Metric {
    Metric { label, value, trend }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub benefits: &'static [&'static str],
    pub metrics: &'static [Metric],
}

/// How a section list opens its detail panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    Accordion,
    Hover,
    Static,
}

#[derive(Debug, PartialEq)]
pub struct IndustryContent {
    pub name: &'static str,
    pub nav_description: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub mode: PanelMode,
    pub highlights: &'static [Metric],
    pub sections: &'static [Section],
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub name: &'static str,
    pub icon: Icon,
    pub route: Route,
    pub description: &'static str,
}
