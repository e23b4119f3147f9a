//! Report CLI commands
//!
//! Balance, monthly summary, spending analysis and the monthly report.
//! Commands that take a period accept "YYYY-MM" and default to the current
//! month.

use crate::config::settings::Settings;
use crate::display::{format_balance, format_insights, format_monthly_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::MonthPeriod;

pub fn handle_balance_command(ledger: &Ledger, settings: &Settings) -> LedgerResult<()> {
    print!("{}", format_balance(ledger.balance(), &settings.currency_symbol));
    Ok(())
}

pub fn handle_summary_command(
    ledger: &Ledger,
    settings: &Settings,
    period: Option<&str>,
) -> LedgerResult<()> {
    let period = parse_period_or_current(period)?;
    let summary = ledger.summary_for(period);
    print!(
        "{}",
        format_monthly_summary(&summary, &settings.currency_symbol)
    );
    Ok(())
}

/// Insights for the current month
pub fn handle_analysis_command(ledger: &Ledger) -> LedgerResult<()> {
    println!("--- Spending Analysis ---");
    print!("{}", format_insights(&ledger.spending_analysis()));
    Ok(())
}

pub fn handle_report_command(ledger: &Ledger, period: Option<&str>) -> LedgerResult<()> {
    let period = parse_period_or_current(period)?;
    println!("{}", ledger.report_for(period));
    Ok(())
}

/// Parse "YYYY-MM", or fall back to the current month
pub fn parse_period_or_current(period: Option<&str>) -> LedgerResult<MonthPeriod> {
    match period {
        Some(s) => MonthPeriod::parse(s).map_err(|e| LedgerError::InvalidPeriod(e.to_string())),
        None => Ok(MonthPeriod::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_or_current() {
        assert_eq!(
            parse_period_or_current(Some("2025-03")).unwrap(),
            MonthPeriod::new(2025, 3).unwrap()
        );
        assert_eq!(parse_period_or_current(None).unwrap(), MonthPeriod::current());
        assert!(matches!(
            parse_period_or_current(Some("2025-13")),
            Err(LedgerError::InvalidPeriod(_))
        ));
    }
}
