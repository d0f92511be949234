//! Text rendering for trade and exposure summaries

use rust_decimal::Decimal;

use crate::exposure::{currency_symbol, Account, ExposureSummary};
use crate::sizing::TradeSummary;

const RULE_WIDTH: usize = 50;

/// Render a trade summary as a fixed-width text block
///
/// Reads the summary's fields as-is; absent reward fields are omitted from
/// the output. Never fails.
pub fn format_trade_summary(trade: &TradeSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        format!("  {} - {}", trade.instrument_name, trade.direction),
        rule.clone(),
        format!("  Stop Distance:    {:.1} pips", trade.stop_distance_pips),
        format!("  Position Size:    {:.2} lots", trade.position_size),
        format!("  Risk Amount:      ${:.2}", trade.actual_risk_amount),
        format!("  Risk Percent:     {:.2}%", trade.actual_risk_percent),
    ];

    if let (Some(ratio), Some(reward)) = (trade.reward_risk_ratio, trade.potential_reward) {
        lines.push(format!("  R:R Ratio:        {ratio:.2}:1"));
        lines.push(format!("  Potential Reward: ${reward:.2}"));
    }

    lines.push(rule);
    lines.push(String::new());
    lines.join("\n")
}

/// Write a formatted trade summary to stdout
pub fn print_trade_summary(trade: &TradeSummary) {
    println!("{}", format_trade_summary(trade));
}

/// Render an account's exposure summary as a readable report
pub fn format_exposure_summary(exposure: &ExposureSummary, account: &Account) -> String {
    let symbol = currency_symbol(&account.currency);
    let mut lines = vec![
        format!("=== Exposure Summary: {} ===", account.name),
        format!("Account Balance: {symbol}{}", with_thousands(account.balance)),
        String::new(),
        format!(
            "Total Risk: {symbol}{} ({:.2}%)",
            with_thousands(exposure.total_risk_amount),
            exposure.total_risk_percent
        ),
        format!("Open Positions: {}", exposure.position_count),
    ];

    if !exposure.risk_by_instrument.is_empty() {
        lines.push(String::new());
        lines.push("Risk by Instrument:".to_string());
        for (instrument, risk) in &exposure.risk_by_instrument {
            lines.push(format!("  {instrument}: {symbol}{}", with_thousands(*risk)));
        }
    }

    lines.push(String::new());
    lines.push("Risk by Direction:".to_string());
    lines.push(format!(
        "  LONG: {symbol}{}",
        with_thousands(exposure.risk_by_direction.long)
    ));
    lines.push(format!(
        "  SHORT: {symbol}{}",
        with_thousands(exposure.risk_by_direction.short)
    ));

    if let Some(ref position) = exposure.largest_position {
        lines.push(String::new());
        lines.push(format!(
            "Largest Position: {} ({} {})",
            position.position_id, position.instrument, position.direction
        ));
        lines.push(format!(
            "  Risk: {symbol}{}",
            with_thousands(position.risk_amount)
        ));
    }

    lines.join("\n")
}

/// Format to two decimal places with thousands separators (e.g. "10,000.00")
fn with_thousands(value: Decimal) -> String {
    let text = format!("{value:.2}");
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{frac_part}")
}
