// 📊 Live Charts - static labelled series for the dashboards page
// Pure presentation data; the TUI renders bar widgets from it, the API
// serves it as JSON.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
}

impl ChartSeries {
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

pub fn monthly_active_users() -> ChartSeries {
    ChartSeries {
        title: "Active Users",
        kind: ChartKind::Bar,
        labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        values: &[1200.0, 1350.0, 1180.0, 1400.0, 1600.0, 1750.0],
    }
}

pub fn status_distribution() -> ChartSeries {
    ChartSeries {
        title: "Status Distribution",
        kind: ChartKind::Doughnut,
        labels: &["Active", "Scheduled", "Completed", "Cancelled"],
        values: &[45.0, 25.0, 20.0, 10.0],
    }
}

pub fn weekly_procedures() -> ChartSeries {
    ChartSeries {
        title: "Procedures",
        kind: ChartKind::Line,
        labels: &["Week 1", "Week 2", "Week 3", "Week 4"],
        values: &[85.0, 92.0, 78.0, 96.0],
    }
}

pub fn work_type_hours() -> ChartSeries {
    ChartSeries {
        title: "Hours by Work Type",
        kind: ChartKind::Bar,
        labels: &["Surgery", "Consultation", "Emergency", "Routine", "Diagnostics"],
        values: &[45.0, 32.0, 28.0, 55.0, 20.0],
    }
}

pub fn quarterly_savings() -> ChartSeries {
    ChartSeries {
        title: "Cost Savings ($)",
        kind: ChartKind::Bar,
        labels: &["Q1", "Q2", "Q3", "Q4"],
        values: &[25_000.0, 32_000.0, 28_000.0, 35_000.0],
    }
}

pub fn patients_by_country() -> ChartSeries {
    ChartSeries {
        title: "Patients by Country",
        kind: ChartKind::Doughnut,
        labels: &["USA", "Germany", "UK", "Switzerland", "Canada"],
        values: &[35.0, 25.0, 15.0, 15.0, 10.0],
    }
}

/// Every series shown on the live-charts page, in display order.
pub fn all_series() -> Vec<ChartSeries> {
    vec![
        monthly_active_users(),
        status_distribution(),
        weekly_procedures(),
        work_type_hours(),
        quarterly_savings(),
        patients_by_country(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_labels_match_values() {
        for series in all_series() {
            assert_eq!(
                series.labels.len(),
                series.values.len(),
                "series {} is ragged",
                series.title
            );
        }
    }

    #[test]
    fn test_max_value() {
        assert_eq!(monthly_active_users().max_value(), 1750.0);
        assert_eq!(quarterly_savings().max_value(), 35_000.0);
    }
}
