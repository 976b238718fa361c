//! Message tone. Selects the template catalog and frames rewrite instructions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tone of a payment reminder.
///
/// Deserialization is lenient: any label other than `friendly` or `urgent`
/// resolves to `Formal`, matching the template selector's fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Formal,
    Friendly,
    Urgent,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Friendly, Tone::Urgent];

    /// Resolves a label. Only the exact lowercase names select a catalog;
    /// anything else, including other casings or padding, is `Formal`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "friendly" => Tone::Friendly,
            "urgent" => Tone::Urgent,
            _ => Tone::Formal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Urgent => "urgent",
        }
    }
}

impl From<String> for Tone {
    fn from(label: String) -> Self {
        Tone::from_label(&label)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
