// Colored terminal output for scan results and the rule table.

use colored::Colorize;

use crate::scoring::{RiskTier, Rule, ScanError, ScanResult};

/// Print the report block in the tier's color.
pub fn display_result(result: &ScanResult) {
    // Reason lines already end in '\n'; println! supplies the last one
    let report = super::render_report(result);
    println!("{}", colorize_for_tier(report.trim_end(), result.tier));
}

/// Print the message for a refused scan.
pub fn display_refusal(err: &ScanError) {
    eprintln!("{}", err.to_string().red());
}

/// Print the rule table in evaluation order.
pub fn display_rules(rules: &[Rule]) {
    println!(
        "\n{}",
        format!("=== Phishing Rules ({} rules) ===", rules.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<40} {:>6}",
        "#".dimmed(),
        "Trigger".dimmed(),
        "Points".dimmed()
    );
    println!("  {}", "-".repeat(52).dimmed());

    for (i, rule) in rules.iter().enumerate() {
        println!(
            "  {:>4}. {:<40} {:>6}",
            i + 1,
            rule.trigger.to_string(),
            format!("+{}", rule.weight)
        );
    }

    println!();
    println!(
        "  Tiers: {} 0-3  |  {} 4-7  |  {} 8+",
        colorize_for_tier("LOW", RiskTier::Low),
        colorize_for_tier("MEDIUM", RiskTier::Medium),
        colorize_for_tier("HIGH", RiskTier::High),
    );
}

/// Color text according to a risk tier.
fn colorize_for_tier(text: &str, tier: RiskTier) -> colored::ColoredString {
    match tier {
        RiskTier::High => text.red().bold(),
        RiskTier::Medium => text.yellow(),
        RiskTier::Low => text.green(),
    }
}
