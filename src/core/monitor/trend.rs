use serde::{Deserialize, Serialize};

/// Semantic direction of the glucose series, derived from the raw
/// Nightscout direction symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    SharplyRising,
    Rising,
    GentlyRising,
    Flat,
    GentlyFalling,
    Falling,
    SharplyFalling,
    Unknown,
}

impl Trend {
    /// Total mapping from the raw direction symbol. Anything
    /// unrecognized resolves to `Unknown` instead of failing.
    pub fn resolve(symbol: &str) -> Self {
        match symbol {
            "TripleUp" | "DoubleUp" => Trend::SharplyRising,
            "SingleUp" => Trend::Rising,
            "FortyFiveUp" => Trend::GentlyRising,
            "Flat" => Trend::Flat,
            "FortyFiveDown" => Trend::GentlyFalling,
            "SingleDown" => Trend::Falling,
            "DoubleDown" | "TripleDown" => Trend::SharplyFalling,
            _ => Trend::Unknown,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::SharplyRising => "⇈",
            Trend::Rising => "↑",
            Trend::GentlyRising => "↗",
            Trend::Flat => "→",
            Trend::GentlyFalling => "↘",
            Trend::Falling => "↓",
            Trend::SharplyFalling => "⇊",
            Trend::Unknown => "-",
        }
    }

    /// Rising steeply enough to alert on. Gentle rises do not count.
    pub fn is_rising(&self) -> bool {
        matches!(self, Trend::SharplyRising | Trend::Rising)
    }

    pub fn is_falling(&self) -> bool {
        matches!(self, Trend::SharplyFalling | Trend::Falling)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Trend::Unknown)
    }
}
