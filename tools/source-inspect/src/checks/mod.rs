use crate::artifact::SourceArtifact;
use serde::Serialize;

/// A named predicate: the artifact text contains `needle` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDefinition {
    pub label: &'static str,
    pub needle: &'static str,
}

impl CheckDefinition {
    /// Case-sensitive substring test, no word boundaries.
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.needle)
    }
}

/// The fixed check set, in report order.
pub static CHECK_DEFINITIONS: &[CheckDefinition] = &[
    CheckDefinition {
        label: "Secrets validation",
        needle: "secrets.alpacaKey",
    },
    CheckDefinition {
        label: "HTTP request",
        needle: "Functions.makeHttpRequest",
    },
    CheckDefinition {
        label: "Headers setup",
        needle: "APCA-API-KEY-ID",
    },
    CheckDefinition {
        label: "Return encoding",
        needle: "Functions.encodeUint256",
    },
    CheckDefinition {
        label: "Error handling",
        needle: "response.error",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub label: &'static str,
    pub passed: bool,
}

/// Outcomes in definition order, one per definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CheckResult {
    outcomes: Vec<CheckOutcome>,
}

impl CheckResult {
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn get(&self, label: &str) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.passed)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

pub fn evaluate_checks(artifact: &SourceArtifact, definitions: &[CheckDefinition]) -> CheckResult {
    let text = artifact.text();
    let outcomes = definitions
        .iter()
        .map(|def| CheckOutcome {
            label: def.label,
            passed: def.matches(text),
        })
        .collect();

    CheckResult { outcomes }
}
