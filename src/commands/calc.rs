use crate::OutputFormat;
use crate::config::Config;
use crate::work::calculator::calculate_text;
use anyhow::Result;
use chrono::NaiveDate;

/// Text of the four form fields supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct CalcArgs {
    pub login_time: Option<String>,
    pub required_hours: Option<String>,
    pub effective_hours: Option<String>,
    pub last_login_time: Option<String>,
}

/// One-shot calculation straight from arguments; the saved form is not touched.
pub fn calc(
    config: &Config,
    args: &CalcArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    let required = args
        .required_hours
        .as_deref()
        .unwrap_or(&config.form.default_required_hours);

    tracing::debug!(?args, %required, %today, "one-shot calculation");

    let result = calculate_text(
        args.login_time.as_deref().unwrap_or_default(),
        required,
        args.effective_hours.as_deref().unwrap_or_default(),
        args.last_login_time.as_deref().unwrap_or_default(),
        today,
    )?;

    println!("{}", super::render_result(&result, config, format)?);
    Ok(())
}
