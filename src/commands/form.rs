use crate::OutputFormat;
use crate::config::Config;
use crate::error::Field;
use crate::form::Phase;
use crate::platform::form_paths;
use crate::state::{SavedForm, with_form_lock};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::json;
use std::path::PathBuf;

fn paths(config: &Config) -> Result<(PathBuf, PathBuf)> {
    let (lock_path, form_path) = form_paths(config.state.state_dir_override.as_ref())?;
    tracing::debug!(form = %form_path.display(), "resolved form file");
    Ok((lock_path, form_path))
}

/// Edit one field of the saved form.
pub fn set(config: &Config, field: Field, value: &str) -> Result<()> {
    let (lock_path, form_path) = paths(config)?;

    with_form_lock(&lock_path, &form_path, |saved| {
        saved.form.set(field, value);
        Ok(())
    })?;

    tracing::info!(%field, value, "field updated");
    println!("✓ {} = {}", field, value);
    Ok(())
}

/// Calculate from the saved form. A rejected form is left exactly as it was.
pub fn calculate(config: &Config, today: NaiveDate, format: OutputFormat) -> Result<()> {
    let (lock_path, form_path) = paths(config)?;

    let result = with_form_lock(&lock_path, &form_path, |saved| {
        let result = saved.form.calculate(today)?.clone();
        Ok(result)
    })
    .inspect_err(|e| tracing::debug!("calculation rejected: {}", e))?;

    tracing::info!(tier = %result.status_tier, "form resolved");
    println!("{}", super::render_result(&result, config, format)?);
    Ok(())
}

/// Reset the saved form to its idle defaults.
pub fn clear(config: &Config) -> Result<()> {
    let (lock_path, form_path) = paths(config)?;

    with_form_lock(&lock_path, &form_path, |saved| {
        saved.form.clear(&config.form.default_required_hours);
        Ok(())
    })?;

    tracing::info!("form cleared");
    println!("✓ Form cleared");
    Ok(())
}

/// Print the saved form and, once resolved, its result.
pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    let (_, form_path) = paths(config)?;

    // Read-only, unlocked
    let saved = SavedForm::load(&form_path)?;
    let form = &saved.form;

    match format {
        OutputFormat::Json => {
            let result = form
                .result
                .as_ref()
                .map(|r| super::ResultView::new(r, config));
            let value = json!({
                "phase": form.phase(),
                "login_time": form.login_time,
                "required_hours": form.required_hours,
                "effective_hours": form.effective_hours,
                "last_login_time": form.last_login_time,
                "result": result,
                "updated_at": saved.updated_at,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).context("Failed to serialize form")?
            );
        }
        OutputFormat::Text => {
            for field in Field::ALL {
                let value = form.get(field);
                let shown = if value.is_empty() { "(empty)" } else { value };
                println!("{:<17} {}", format!("{}:", title_case(field.label())), shown);
            }
            match (form.phase(), &form.result) {
                (Phase::Resolved, Some(result)) => {
                    println!();
                    println!("{}", super::render_result(result, config, format)?);
                }
                _ => println!("\nNo result yet. Run 'lgo calculate'."),
            }
        }
    }

    Ok(())
}

fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_labels() {
        assert_eq!(title_case(Field::LastLoginTime.label()), "Last Login Time");
        assert_eq!(title_case(Field::RequiredHours.label()), "Required Hours");
    }
}
