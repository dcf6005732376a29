use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A headline figure with its change against the previous period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub title: String,
    /// Preformatted, e.g. `$45,678`.
    pub value: String,
    pub change_pct: f64,
    #[serde(default)]
    pub accent: String,
}

impl StatCard {
    pub fn trend(&self) -> Trend {
        if self.change_pct < 0.0 {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    /// `+12%`, `-3%`, `+2.5%`.
    pub fn change_label(&self) -> String {
        let sign = if self.change_pct < 0.0 { '-' } else { '+' };
        let magnitude = self.change_pct.abs();
        if magnitude.fract() == 0.0 {
            format!("{}{:.0}%", sign, magnitude)
        } else {
            format!("{}{:.1}%", sign, magnitude)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyPoint {
    pub month: String,
    pub visitors: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrafficShare {
    pub name: String,
    pub value: u32,
    /// Any CSS color.
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub monthly: Vec<MonthlyPoint>,
    pub traffic: Vec<TrafficShare>,
}

impl DashboardData {
    pub fn revenue_series(&self) -> Vec<u32> {
        self.monthly.iter().map(|p| p.revenue).collect()
    }

    pub fn visitor_series(&self) -> Vec<u32> {
        self.monthly.iter().map(|p| p.visitors).collect()
    }
}

/// Each value as a percentage of the largest one; all zeros when the series is empty or flat at zero.
pub fn relative_heights(values: &[u32]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|&v| f64::from(v) * 100.0 / f64::from(max))
        .collect()
}

/// Each slice's share of the total, in percent, rounded to whole numbers.
pub fn share_percentages(shares: &[TrafficShare]) -> Vec<u32> {
    let total: u32 = shares.iter().map(|s| s.value).sum();
    if total == 0 {
        return vec![0; shares.len()];
    }
    shares
        .iter()
        .map(|s| (f64::from(s.value) * 100.0 / f64::from(total)).round() as u32)
        .collect()
}

/// `conic-gradient` stops for the traffic donut.
pub fn conic_gradient(shares: &[TrafficShare]) -> String {
    let total: u32 = shares.iter().map(|s| s.value).sum();
    if total == 0 {
        return "conic-gradient(var(--border) 0 100%)".to_string();
    }

    let mut start = 0.0;
    let stops: Vec<String> = shares
        .iter()
        .map(|s| {
            let end = start + f64::from(s.value) * 100.0 / f64::from(total);
            let stop = format!("{} {:.1}% {:.1}%", s.color, start, end);
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(change_pct: f64) -> StatCard {
        StatCard {
            title: "Orders".into(),
            value: "1,234".into(),
            change_pct,
            accent: String::new(),
        }
    }

    #[test]
    fn change_label_keeps_sign_and_drops_zero_fraction() {
        assert_eq!(card(12.0).change_label(), "+12%");
        assert_eq!(card(-3.0).change_label(), "-3%");
        assert_eq!(card(2.5).change_label(), "+2.5%");
        assert_eq!(card(-3.0).trend(), Trend::Down);
        assert_eq!(card(0.0).trend(), Trend::Up);
    }

    #[test]
    fn heights_scale_to_the_peak() {
        assert_eq!(relative_heights(&[50, 100, 0]), vec![50.0, 100.0, 0.0]);
        assert_eq!(relative_heights(&[0, 0]), vec![0.0, 0.0]);
        assert!(relative_heights(&[]).is_empty());
    }
}
