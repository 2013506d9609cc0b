//! Background accent that changes with every new query.

use serde::{Deserialize, Serialize};

/// Fixed palette the accent cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Indigo,
    Teal,
    Amber,
    Rose,
    Violet,
    Emerald,
}

impl Accent {
    pub const PALETTE: [Accent; 6] = [
        Accent::Indigo,
        Accent::Teal,
        Accent::Amber,
        Accent::Rose,
        Accent::Violet,
        Accent::Emerald,
    ];

    /// The next palette entry; never equal to `self`.
    pub fn next(self) -> Self {
        let index = Self::PALETTE
            .iter()
            .position(|accent| *accent == self)
            .unwrap_or(0);
        Self::PALETTE[(index + 1) % Self::PALETTE.len()]
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Accent::Indigo => "indigo",
            Accent::Teal => "teal",
            Accent::Amber => "amber",
            Accent::Rose => "rose",
            Accent::Violet => "violet",
            Accent::Emerald => "emerald",
        }
    }

    /// ANSI 256-colour code used by the terminal views.
    pub fn ansi_code(self) -> u8 {
        match self {
            Accent::Indigo => 63,
            Accent::Teal => 30,
            Accent::Amber => 214,
            Accent::Rose => 204,
            Accent::Violet => 135,
            Accent::Emerald => 35,
        }
    }
}
