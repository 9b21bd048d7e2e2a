// Heuristic rule table.
//
// Every rule pairs a trigger with a fixed point value. The table order is
// the evaluation order, and the reasons in a scan result follow it exactly.
// Triggers match against text that has already been lowercased.

use std::fmt;

/// Points added for each suspicious phrase found.
pub const PHRASE_WEIGHT: u32 = 2;
/// Points added for each suspicious link pattern found.
pub const LINK_PATTERN_WEIGHT: u32 = 2;
/// Points added when the sender check fires.
pub const SENDER_WEIGHT: u32 = 3;

/// What a rule looks for in the normalized email text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A social-engineering phrase, matched as a plain substring.
    Phrase(&'static str),
    /// A link or attachment pattern, matched as a plain substring.
    LinkPattern(&'static str),
    /// A "from:" header whose address has no ".com" domain, or any text
    /// mentioning the "paypa1" typosquat alongside a "from:" header.
    SenderAddress,
}

/// A single heuristic: trigger plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub trigger: Trigger,
    pub weight: u32,
}

impl Rule {
    const fn phrase(keyword: &'static str) -> Self {
        Self {
            trigger: Trigger::Phrase(keyword),
            weight: PHRASE_WEIGHT,
        }
    }

    const fn link_pattern(pattern: &'static str) -> Self {
        Self {
            trigger: Trigger::LinkPattern(pattern),
            weight: LINK_PATTERN_WEIGHT,
        }
    }

    /// Check the rule against lowercased text.
    pub fn matches(&self, normalized: &str) -> bool {
        match self.trigger {
            Trigger::Phrase(keyword) => normalized.contains(keyword),
            Trigger::LinkPattern(pattern) => normalized.contains(pattern),
            // Also fires for a legitimate .com sender if "paypa1" shows up
            // anywhere in the body.
            Trigger::SenderAddress => {
                normalized.contains("from:")
                    && (!normalized.contains(".com") || normalized.contains("paypa1"))
            }
        }
    }

    /// Human-readable explanation recorded when the rule fires.
    pub fn reason(&self) -> String {
        match self.trigger {
            Trigger::Phrase(keyword) => format!("Suspicious phrase found: \"{keyword}\""),
            Trigger::LinkPattern(pattern) => {
                format!("Suspicious link pattern found: \"{pattern}\"")
            }
            Trigger::SenderAddress => "Suspicious sender address detected.".to_string(),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Phrase(keyword) => write!(f, "phrase \"{keyword}\""),
            Trigger::LinkPattern(pattern) => write!(f, "link pattern \"{pattern}\""),
            Trigger::SenderAddress => write!(f, "sender address check"),
        }
    }
}

/// The compound sender-address rule, evaluated last.
pub const SENDER_RULE: Rule = Rule {
    trigger: Trigger::SenderAddress,
    weight: SENDER_WEIGHT,
};

static RULES: [Rule; 15] = [
    Rule::phrase("verify your account"),
    Rule::phrase("urgent"),
    Rule::phrase("click here"),
    Rule::phrase("password expired"),
    Rule::phrase("update your information"),
    Rule::phrase("suspended"),
    Rule::phrase("login immediately"),
    Rule::link_pattern("http://"),
    Rule::link_pattern("https://"),
    Rule::link_pattern("bit.ly"),
    Rule::link_pattern(".ru"),
    Rule::link_pattern(".tk"),
    Rule::link_pattern(".zip"),
    Rule::link_pattern(".exe"),
    SENDER_RULE,
];

/// The full rule table in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}
