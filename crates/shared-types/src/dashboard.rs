use serde::{Deserialize, Serialize};

use crate::navigation::paths;
use crate::IconRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "\u{2197}",
            Trend::Down => "\u{2198}",
        }
    }
}

/// Visual tone for a KPI card or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Destructive,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Destructive => "destructive",
        }
    }
}

/// Key performance indicator card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub description: String,
    pub icon: IconRef,
    pub trend: Trend,
    pub trend_value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceAlert {
    pub title: String,
    pub detail: String,
    pub tone: Tone,
}

/// Dashboard shortcut into another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: IconRef,
    pub route_path: &'static str,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "New Registration",
        icon: IconRef::Users,
        route_path: paths::REGISTRATION,
    },
    QuickAction {
        label: "Schedule Inspection",
        icon: IconRef::ClipboardCheck,
        route_path: paths::INSPECTIONS,
    },
    QuickAction {
        label: "Generate Report",
        icon: IconRef::FileText,
        route_path: paths::REPORTS,
    },
    QuickAction {
        label: "View Analytics",
        icon: IconRef::TrendingUp,
        route_path: paths::ANALYTICS,
    },
];

/// Dashboard shortcuts, the same four for every role.
pub fn quick_actions() -> &'static [QuickAction] {
    QUICK_ACTIONS
}

pub fn sample_kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            title: "Total Registrations".into(),
            value: "2,847".into(),
            description: "Active registrations".into(),
            icon: IconRef::Users,
            trend: Trend::Up,
            trend_value: "+12%".into(),
            tone: Tone::Default,
        },
        Kpi {
            title: "Pending Inspections".into(),
            value: "147".into(),
            description: "Awaiting inspection".into(),
            icon: IconRef::ClipboardCheck,
            trend: Trend::Down,
            trend_value: "-8%".into(),
            tone: Tone::Warning,
        },
        Kpi {
            title: "Compliance Issues".into(),
            value: "23".into(),
            description: "Require attention".into(),
            icon: IconRef::Shield,
            trend: Trend::Down,
            trend_value: "-15%".into(),
            tone: Tone::Destructive,
        },
        Kpi {
            title: "Reports Generated".into(),
            value: "1,204".into(),
            description: "This month".into(),
            icon: IconRef::FileText,
            trend: Trend::Up,
            trend_value: "+25%".into(),
            tone: Tone::Success,
        },
    ]
}

pub fn sample_compliance_alerts() -> Vec<ComplianceAlert> {
    vec![
        ComplianceAlert {
            title: "Overdue Inspections".into(),
            detail: "5 inspections are past due date".into(),
            tone: Tone::Destructive,
        },
        ComplianceAlert {
            title: "Pending Renewals".into(),
            detail: "12 licenses expiring this month".into(),
            tone: Tone::Warning,
        },
        ComplianceAlert {
            title: "New Regulations".into(),
            detail: "3 new safety standards published".into(),
            tone: Tone::Info,
        },
    ]
}
