use admin_board::core::dashboard::{conic_gradient, relative_heights, share_percentages, Trend};
use admin_board::core::seed::seed_dashboard;
use pretty_assertions::assert_eq;

#[test]
fn stat_cards_report_trend_and_change() {
    let data = seed_dashboard().unwrap();
    let labels: Vec<(String, String, Trend)> = data
        .stats
        .iter()
        .map(|s| (s.title.clone(), s.change_label(), s.trend()))
        .collect();

    assert_eq!(
        labels,
        vec![
            ("Total Users".into(), "+12%".into(), Trend::Up),
            ("Revenue".into(), "+8%".into(), Trend::Up),
            ("Orders".into(), "-3%".into(), Trend::Down),
            ("Growth".into(), "+5%".into(), Trend::Up),
        ]
    );
}

#[test]
fn revenue_bars_scale_to_march_peak() {
    let data = seed_dashboard().unwrap();
    let heights = relative_heights(&data.revenue_series());

    assert_eq!(heights.len(), 7);
    assert_eq!(heights[2], 100.0);
    assert!(heights.iter().all(|h| (0.0..=100.0).contains(h)));
    assert!((heights[0] - 2400.0 * 100.0 / 9800.0).abs() < 1e-9);
}

#[test]
fn traffic_shares_sum_to_one_hundred() {
    let data = seed_dashboard().unwrap();
    assert_eq!(share_percentages(&data.traffic), vec![45, 35, 20]);

    let gradient = conic_gradient(&data.traffic);
    assert!(gradient.starts_with("conic-gradient(rgb(59 130 246) 0.0% 45.0%"));
    assert!(gradient.ends_with("rgb(16 185 129) 80.0% 100.0%)"));
}

#[test]
fn empty_traffic_renders_a_plain_ring() {
    assert!(share_percentages(&[]).is_empty());
    assert_eq!(conic_gradient(&[]), "conic-gradient(var(--border) 0 100%)");
}
