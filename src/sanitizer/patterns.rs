// Trigger pattern catalogue

use std::fmt;

/// Family of injection technique a trigger belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    InstructionOverride,
    RoleHijack,
    FakeSystemDelimiter,
    RuleInjection,
    Jailbreak,
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InstructionOverride => "instruction_override",
            Self::RoleHijack => "role_hijack",
            Self::FakeSystemDelimiter => "fake_system_delimiter",
            Self::RuleInjection => "rule_injection",
            Self::Jailbreak => "jailbreak",
        };
        f.write_str(label)
    }
}

/// A single trigger pattern.
#[derive(Debug)]
pub struct TriggerPattern {
    /// Short identifier used in logs.
    pub name: &'static str,
    pub kind: TriggerKind,
    /// Case-insensitive regex source.
    pub pattern: &'static str,
}

/// Ordered trigger catalogue. Patterns are applied in this order.
///
/// None of these may match the redaction token itself, otherwise
/// sanitizing twice would keep rewriting the text.
pub static TRIGGER_PATTERNS: &[TriggerPattern] = &[
    TriggerPattern {
        name: "ignore_previous",
        kind: TriggerKind::InstructionOverride,
        pattern: r"(?i)ignore\s+(all\s+)?previous\s+instructions",
    },
    TriggerPattern {
        name: "system_prompt",
        kind: TriggerKind::FakeSystemDelimiter,
        pattern: r"(?i)system\s+prompt",
    },
    TriggerPattern {
        name: "you_are_now",
        kind: TriggerKind::RoleHijack,
        pattern: r"(?i)you\s+are\s+now\s+a",
    },
    TriggerPattern {
        name: "dan_mode",
        kind: TriggerKind::RoleHijack,
        pattern: r"(?i)dan\s+mode",
    },
    TriggerPattern {
        name: "developer_mode",
        kind: TriggerKind::RoleHijack,
        pattern: r"(?i)developer\s+mode",
    },
    TriggerPattern {
        name: "new_rule",
        kind: TriggerKind::RuleInjection,
        pattern: r"(?i)new\s+rule\s*:",
    },
    TriggerPattern {
        name: "bracket_system",
        kind: TriggerKind::FakeSystemDelimiter,
        pattern: r"(?i)\[system\]",
    },
    TriggerPattern {
        name: "paren_system",
        kind: TriggerKind::FakeSystemDelimiter,
        pattern: r"(?i)\(system\)",
    },
    TriggerPattern {
        name: "jailbreak",
        kind: TriggerKind::Jailbreak,
        pattern: r"(?i)jailbreak",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitizer::REDACTION_TOKEN;

    #[test]
    fn all_patterns_compile() {
        for trigger in TRIGGER_PATTERNS {
            regex::Regex::new(trigger.pattern)
                .unwrap_or_else(|e| panic!("pattern '{}' failed to compile: {e}", trigger.name));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for trigger in TRIGGER_PATTERNS {
            assert!(seen.insert(trigger.name), "duplicate trigger name: {}", trigger.name);
        }
    }

    #[test]
    fn redaction_token_matches_no_trigger() {
        for trigger in TRIGGER_PATTERNS {
            let re = regex::Regex::new(trigger.pattern).unwrap();
            assert!(
                !re.is_match(REDACTION_TOKEN),
                "trigger '{}' matches the redaction token",
                trigger.name
            );
        }
    }
}
