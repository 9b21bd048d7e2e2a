// Output formatting: the plain result block, colored terminal display,
// and the JSON report.

pub mod json;
pub mod terminal;

use crate::scoring::ScanResult;

/// Shown in place of the reasons list when no rule fired.
pub const NO_INDICATORS_MESSAGE: &str = "No suspicious indicators found.";

/// Render a scan result as the plain-text report block.
///
/// ```text
/// Phishing Score: <n>
/// <tier label>
///
/// Reasons:
/// - <reason>
/// ```
pub fn render_report(result: &ScanResult) -> String {
    let mut message = format!(
        "Phishing Score: {}\n{}\n\nReasons:\n",
        result.score,
        result.tier.label()
    );

    if result.is_clean() {
        message.push_str(NO_INDICATORS_MESSAGE);
    } else {
        for reason in &result.reasons {
            message.push_str("- ");
            message.push_str(reason);
            message.push('\n');
        }
    }

    message
}
