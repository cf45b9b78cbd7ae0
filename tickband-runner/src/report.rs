//! Report rendering — plain text for the terminal, pretty JSON for
//! files and pipelines.

use serde::Serialize;

use crate::runner::{RunSummary, ScanSummary};

/// Pretty-printed JSON for any summary type.
pub fn to_json<T: Serialize>(summary: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

pub fn render_backtest_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Run        {}\n", &summary.run_id[..16]));
    out.push_str(&format!("Validator  {}\n", summary.validator));
    if let Some(alpha) = summary.alpha {
        out.push_str(&format!("Alpha      {alpha}\n"));
    }
    if let Some(window) = summary.window {
        out.push_str(&format!("Window     {window}\n"));
    }
    if let Some(threshold) = summary.threshold {
        out.push_str(&format!("Threshold  {threshold}\n"));
    }
    out.push_str(&format!(
        "Ticks      {} ({} malformed rows skipped)\n",
        summary.ticks, summary.skipped_rows
    ));
    out.push_str(&format!("PnL        {:.4}\n", summary.pnl));
    out.push_str(&format!(
        "Trades     {} ({} wins)\n",
        summary.trades, summary.wins
    ));
    out.push_str(&format!("Max DD     {:.4}\n", summary.max_drawdown));
    out.push_str(&format!("Sharpe     {:.4}\n", summary.sharpe));
    out
}

pub fn render_scan_text(summary: &ScanSummary) -> String {
    format!(
        "Run        {}\nValidator  {}\nTicks      {} ({} malformed rows skipped)\nAccepted   {}\n",
        &summary.run_id[..16],
        summary.validator,
        summary.ticks,
        summary.skipped_rows,
        summary.accepted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_summary() -> RunSummary {
        RunSummary {
            run_id: "0123456789abcdef0123456789abcdef".to_string(),
            generated_at: Utc::now(),
            validator: "band".to_string(),
            window: None,
            alpha: Some(0.05),
            threshold: Some(2.5),
            pnl: -14.0,
            trades: 5,
            wins: 0,
            max_drawdown: 14.0,
            sharpe: -3.2549,
            ticks: 6,
            skipped_rows: 0,
        }
    }

    #[test]
    fn text_report_carries_result_surface() {
        let text = render_backtest_text(&sample_summary());
        assert!(text.contains("Validator  band"));
        assert!(text.contains("PnL        -14.0000"));
        assert!(text.contains("Trades     5 (0 wins)"));
        assert!(text.contains("Max DD     14.0000"));
        assert!(text.contains("Sharpe"));
    }

    #[test]
    fn json_report_has_expected_keys() {
        let json = to_json(&sample_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in [
            "validator",
            "window",
            "alpha",
            "threshold",
            "pnl",
            "trades",
            "wins",
            "max_drawdown",
            "sharpe",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn scan_report_renders() {
        let summary = ScanSummary {
            run_id: "0123456789abcdef0123456789abcdef".to_string(),
            generated_at: Utc::now(),
            validator: "persistence".to_string(),
            ticks: 100,
            accepted: 7,
            skipped_rows: 2,
        };
        let text = render_scan_text(&summary);
        assert!(text.contains("Accepted   7"));
        assert!(text.contains("2 malformed rows skipped"));
    }
}
