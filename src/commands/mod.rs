pub mod calc;
pub mod config;
pub mod form;

use crate::OutputFormat;
use crate::config::Config;
use crate::work::calculator::{CalculationResult, StatusTier};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A calculation result as handed to the display layer.
#[derive(Debug, Serialize)]
pub struct ResultView<'a> {
    pub remaining_minutes: i64,
    pub remaining_label: &'a str,
    pub logout_label: &'a str,
    pub status_tier: StatusTier,
    pub logout_at: Option<NaiveDateTime>,
    pub illustration: &'a str,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a CalculationResult, config: &'a Config) -> Self {
        Self {
            remaining_minutes: result.remaining_minutes,
            remaining_label: &result.remaining_label,
            logout_label: &result.logout_label,
            status_tier: result.status_tier,
            logout_at: result.logout_at,
            illustration: config.status.asset_for(result.status_tier),
        }
    }
}

pub fn render_result(
    result: &CalculationResult,
    config: &Config,
    format: OutputFormat,
) -> Result<String> {
    let view = ResultView::new(result, config);
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&view).context("Failed to serialize result")
        }
        OutputFormat::Text => {
            let logout_line = if result.is_done() {
                format!("✅ {}", view.logout_label)
            } else {
                format!("✅ You can log out at: {}", view.logout_label)
            };
            Ok(format!(
                "⏳ Remaining Time: {}\n{}\nStatus: {} ({})",
                view.remaining_label, logout_line, view.status_tier, view.illustration
            ))
        }
    }
}
