//! Output renderers for the list and form views

use serde::Serialize;
use std::io::Write;

use core_kernel::{Currency, HealthCheckResult, Money};
use domain_policy::{Policy, PolicyDraft, PortalState, PremiumQuote, RecordSource};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Shown above records that did not come from the backend
pub const DEMONSTRATION_BANNER: &str =
    "Showing demonstration data. These records are not stored on the backend.";

/// Shown instead of an empty table
pub const EMPTY_LIST: &str = "No policies found.";

const HEADERS: [&str; 7] = [
    "No.",
    "Policy Number",
    "Beneficiary",
    "Car",
    "TSI",
    "Premium",
    "Policy Dates",
];

/// The currency the form shows its calculated premium in
pub const FORM_CURRENCY: Currency = Currency::USD;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListView<'a> {
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    policies: &'a [Policy],
}

/// Renders the list view: banners first, then the table or JSON document
pub fn render_list<W: Write>(
    out: &mut W,
    state: &PortalState,
    records: &[Policy],
    currency: Currency,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let view = ListView {
                source: match state.source() {
                    RecordSource::Live => "live",
                    RecordSource::Demonstration => "demonstration",
                },
                error: state.error(),
                policies: records,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        }
        OutputFormat::Table => {
            if let Some(message) = state.error() {
                writeln!(out, "Error: {message}")?;
            }
            if state.source() == RecordSource::Demonstration {
                writeln!(out, "{DEMONSTRATION_BANNER}")?;
            }
            if records.is_empty() {
                writeln!(out, "{EMPTY_LIST}")?;
                return Ok(());
            }
            let rows: Vec<[String; 7]> = records
                .iter()
                .enumerate()
                .map(|(index, policy)| table_row(index + 1, policy, currency))
                .collect();
            write_table(out, &rows)?;
        }
    }
    Ok(())
}

fn table_row(number: usize, policy: &Policy, currency: Currency) -> [String; 7] {
    [
        number.to_string(),
        policy.policy_number.clone().unwrap_or_default(),
        policy.beneficiary_name.clone(),
        policy.car_label(),
        Money::new(policy.tsi, currency).format(),
        Money::new(policy.premium_amount(), currency).format(),
        coverage_label(policy),
    ]
}

/// "start to end", flagging windows that end before they start
fn coverage_label(policy: &Policy) -> String {
    match policy.coverage() {
        Some(period) if period.is_well_ordered() => period.to_string(),
        Some(period) => format!("{period} (!)"),
        None => {
            let show = |date: Option<core_kernel::PolicyDate>| {
                date.map(|d| d.to_string()).unwrap_or_default()
            };
            format!("{} to {}", show(policy.start_date), show(policy.end_date))
        }
    }
}

fn write_table<W: Write>(out: &mut W, rows: &[[String; 7]]) -> CliResult<()> {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 7]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(HEADERS))?;
    for row in rows {
        writeln!(out, "{}", line(row.each_ref().map(String::as_str)))?;
    }
    Ok(())
}

/// Renders the form header and its calculated premium
pub fn render_draft<W: Write>(out: &mut W, draft: &PolicyDraft) -> CliResult<()> {
    writeln!(out, "{}", draft.mode().title())?;
    writeln!(
        out,
        "Calculated Premium: {}",
        Money::new(draft.premium_amount(), FORM_CURRENCY).format()
    )?;
    Ok(())
}

/// Renders a standalone premium quote
pub fn render_quote<W: Write>(out: &mut W, quote: &PremiumQuote, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(quote)?)?,
        OutputFormat::Table => {
            writeln!(out, "Total Sum Insured: {}", quote.sum_insured.format())?;
            writeln!(out, "Premium Rate: {}%", quote.rate.as_percentage())?;
            writeln!(out, "Calculated Premium: {}", quote.premium.format())?;
        }
    }
    Ok(())
}

/// Renders a backend health report
pub fn render_health<W: Write>(out: &mut W, result: &HealthCheckResult, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(result)?)?,
        OutputFormat::Table => {
            writeln!(out, "adapter: {}", result.adapter_id)?;
            writeln!(out, "status: {:?}", result.status)?;
            writeln!(out, "latency: {}ms", result.latency_ms)?;
            if let Some(message) = &result.message {
                writeln!(out, "message: {message}")?;
            }
        }
    }
    Ok(())
}
