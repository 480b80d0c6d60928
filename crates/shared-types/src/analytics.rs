use serde::{Deserialize, Serialize};

use crate::{IconRef, Trend};

/// Compliance rate band used to colour regional figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceBand {
    Good,
    Warning,
    Critical,
}

impl ComplianceBand {
    /// `>= 85` is good, `>= 70` warning, anything lower critical.
    pub fn classify(compliance_percent: u8) -> Self {
        match compliance_percent {
            85..=u8::MAX => ComplianceBand::Good,
            70..=84 => ComplianceBand::Warning,
            _ => ComplianceBand::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceBand::Good => "good",
            ComplianceBand::Warning => "warning",
            ComplianceBand::Critical => "critical",
        }
    }
}

/// Inspection counts for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: String,
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub compliance: u8,
}

impl RegionStats {
    /// Share of `total` that is completed, for the progress bar width.
    pub fn completed_percent(&self) -> f64 {
        percent_of(self.completed, self.total)
    }

    pub fn pending_percent(&self) -> f64 {
        percent_of(self.pending, self.total)
    }

    pub fn band(&self) -> ComplianceBand {
        ComplianceBand::classify(self.compliance)
    }
}

fn percent_of(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(part) * 100.0 / f64::from(total)
}

/// Reporting window offered on the regional performance card. The sample
/// figures are the same for every window; the choice labels the card and
/// the export requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPeriod {
    #[default]
    LastQuarter,
    LastMonth,
    LastYear,
}

pub const REPORT_PERIODS: &[ReportPeriod] = &[
    ReportPeriod::LastQuarter,
    ReportPeriod::LastMonth,
    ReportPeriod::LastYear,
];

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::LastQuarter => "last-quarter",
            ReportPeriod::LastMonth => "last-month",
            ReportPeriod::LastYear => "last-year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::LastQuarter => "Last Quarter",
            ReportPeriod::LastMonth => "Last Month",
            ReportPeriod::LastYear => "Last Year",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        REPORT_PERIODS.iter().copied().find(|p| p.as_str() == s)
    }
}

/// Downloads offered on the analytics page. Requests are acknowledged,
/// nothing is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    RegionalReport,
    ComplianceData,
    SummaryReport,
}

pub const EXPORT_KINDS: &[ExportKind] = &[
    ExportKind::RegionalReport,
    ExportKind::ComplianceData,
    ExportKind::SummaryReport,
];

impl ExportKind {
    /// Button text.
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::RegionalReport => "Export Regional Report (PDF)",
            ExportKind::ComplianceData => "Download Compliance Data (Excel)",
            ExportKind::SummaryReport => "Generate Summary Report (PDF)",
        }
    }

    pub fn document(&self) -> &'static str {
        match self {
            ExportKind::RegionalReport => "Regional Report (PDF)",
            ExportKind::ComplianceData => "Compliance Data (Excel)",
            ExportKind::SummaryReport => "Summary Report (PDF)",
        }
    }

    /// Acknowledgement text for a request covering `period`.
    pub fn request_summary(&self, period: ReportPeriod) -> String {
        format!("{} for {}", self.document(), period.label())
    }
}

/// Headline figure on the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetric {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    /// Whether the trend direction is good news (drives the colour).
    pub favorable: bool,
    pub icon: IconRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// A facility that has fallen behind on a compliance obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityAlert {
    pub facility: String,
    pub location: String,
    pub issue: String,
    pub severity: Severity,
    pub days_overdue: u32,
}

fn region(name: &str, total: u32, completed: u32, pending: u32, compliance: u8) -> RegionStats {
    RegionStats {
        region: name.into(),
        total,
        completed,
        pending,
        compliance,
    }
}

pub fn sample_region_stats() -> Vec<RegionStats> {
    vec![
        region("Maharashtra", 450, 380, 70, 85),
        region("Gujarat", 320, 280, 40, 88),
        region("Tamil Nadu", 280, 240, 40, 86),
        region("Karnataka", 250, 200, 50, 80),
        region("West Bengal", 180, 150, 30, 83),
    ]
}

pub fn sample_summary_metrics() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            label: "Total Inspections".into(),
            value: "1,480".into(),
            change: "+8.2% from last month".into(),
            trend: Trend::Up,
            favorable: true,
            icon: IconRef::BarChart,
        },
        SummaryMetric {
            label: "Avg Compliance".into(),
            value: "84.5%".into(),
            change: "+2.1% from last month".into(),
            trend: Trend::Up,
            favorable: true,
            icon: IconRef::Shield,
        },
        SummaryMetric {
            label: "Pending Reviews".into(),
            value: "230".into(),
            change: "+5.3% from last month".into(),
            trend: Trend::Up,
            favorable: false,
            icon: IconRef::ClipboardCheck,
        },
        SummaryMetric {
            label: "Critical Alerts".into(),
            value: "12".into(),
            change: "-15% from last month".into(),
            trend: Trend::Down,
            favorable: true,
            icon: IconRef::TrendingUp,
        },
    ]
}

pub fn sample_facility_alerts() -> Vec<FacilityAlert> {
    vec![
        FacilityAlert {
            facility: "ABC Manufacturing Ltd.".into(),
            location: "Mumbai, MH".into(),
            issue: "Overdue boiler inspection".into(),
            severity: Severity::High,
            days_overdue: 15,
        },
        FacilityAlert {
            facility: "XYZ Chemical Works".into(),
            location: "Pune, MH".into(),
            issue: "Safety equipment certification expired".into(),
            severity: Severity::Medium,
            days_overdue: 7,
        },
        FacilityAlert {
            facility: "DEF Steel Plant".into(),
            location: "Chennai, TN".into(),
            issue: "Environmental compliance review due".into(),
            severity: Severity::Low,
            days_overdue: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(ComplianceBand::classify(100), ComplianceBand::Good);
        assert_eq!(ComplianceBand::classify(85), ComplianceBand::Good);
        assert_eq!(ComplianceBand::classify(84), ComplianceBand::Warning);
        assert_eq!(ComplianceBand::classify(70), ComplianceBand::Warning);
        assert_eq!(ComplianceBand::classify(69), ComplianceBand::Critical);
        assert_eq!(ComplianceBand::classify(0), ComplianceBand::Critical);
    }

    #[test]
    fn region_percentages() {
        let stats = region("Test", 200, 150, 50, 90);
        assert_eq!(stats.completed_percent(), 75.0);
        assert_eq!(stats.pending_percent(), 25.0);
        assert_eq!(stats.band(), ComplianceBand::Good);
    }

    #[test]
    fn zero_total_does_not_divide_by_zero() {
        let stats = region("Empty", 0, 0, 0, 0);
        assert_eq!(stats.completed_percent(), 0.0);
        assert_eq!(stats.pending_percent(), 0.0);
    }

    #[test]
    fn sample_regions_add_up() {
        for stats in sample_region_stats() {
            assert_eq!(stats.completed + stats.pending, stats.total, "{}", stats.region);
        }
    }

    #[test]
    fn report_period_defaults_to_last_quarter() {
        assert_eq!(ReportPeriod::default(), ReportPeriod::LastQuarter);
        assert_eq!(REPORT_PERIODS[0], ReportPeriod::default());
    }

    #[test]
    fn report_period_select_values_parse_back() {
        for period in REPORT_PERIODS {
            assert_eq!(ReportPeriod::parse(period.as_str()), Some(*period));
        }
        assert_eq!(ReportPeriod::parse("last-week"), None);
    }

    #[test]
    fn export_request_names_document_and_period() {
        assert_eq!(
            ExportKind::ComplianceData.request_summary(ReportPeriod::LastYear),
            "Compliance Data (Excel) for Last Year"
        );
        let labels: Vec<&str> = EXPORT_KINDS.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Export Regional Report (PDF)",
                "Download Compliance Data (Excel)",
                "Generate Summary Report (PDF)",
            ]
        );
    }
}
