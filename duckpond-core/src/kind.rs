use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::behavior::{FlyStyle, QuackStyle};
use crate::error::{ParseStyleError, normalize_ident};

/// Construction-time defaults for one kind of duck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub fly: FlyStyle,
    pub quack: QuackStyle,
    pub display: &'static str,
}

/// The concrete kinds of duck on the pond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuckKind {
    Mallard,
    Redhead,
    #[serde(alias = "rubber_duck")]
    Rubber,
    Decoy,
    Model,
}

impl DuckKind {
    pub const ALL: [Self; 5] = [
        Self::Mallard,
        Self::Redhead,
        Self::Rubber,
        Self::Decoy,
        Self::Model,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mallard => "mallard",
            Self::Redhead => "redhead",
            Self::Rubber => "rubber",
            Self::Decoy => "decoy",
            Self::Model => "model",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mallard => "Mallard Duck",
            Self::Redhead => "Redhead Duck",
            Self::Rubber => "Rubber Duck",
            Self::Decoy => "Decoy Duck",
            Self::Model => "Model Duck",
        }
    }

    #[must_use]
    pub const fn preset(self) -> Preset {
        match self {
            Self::Mallard => Preset {
                fly: FlyStyle::Wings,
                quack: QuackStyle::Quack,
                display: "I'm a real Mallard duck.",
            },
            Self::Redhead => Preset {
                fly: FlyStyle::Wings,
                quack: QuackStyle::Quack,
                display: "I'm a Redhead duck.",
            },
            Self::Rubber => Preset {
                fly: FlyStyle::NoFly,
                quack: QuackStyle::Squeak,
                display: "I'm a rubber duckie.",
            },
            Self::Decoy => Preset {
                fly: FlyStyle::NoFly,
                quack: QuackStyle::Mute,
                display: "I'm a decoy duck.",
            },
            // Starts grounded; the demo hands it a rocket later.
            Self::Model => Preset {
                fly: FlyStyle::NoFly,
                quack: QuackStyle::Quack,
                display: "I'm a model duck.",
            },
        }
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DuckKind {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_ident(s).as_str() {
            "mallard" => Ok(Self::Mallard),
            "redhead" => Ok(Self::Redhead),
            "rubber" | "rubber_duck" => Ok(Self::Rubber),
            "decoy" => Ok(Self::Decoy),
            "model" => Ok(Self::Model),
            _ => Err(ParseStyleError::new(
                "duck kind",
                s,
                &Self::ALL.map(Self::as_str),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_pond_roster() {
        let roster: Vec<_> = DuckKind::ALL
            .iter()
            .map(|kind| {
                let preset = kind.preset();
                (kind.as_str(), preset.fly, preset.quack)
            })
            .collect();
        assert_eq!(
            roster,
            vec![
                ("mallard", FlyStyle::Wings, QuackStyle::Quack),
                ("redhead", FlyStyle::Wings, QuackStyle::Quack),
                ("rubber", FlyStyle::NoFly, QuackStyle::Squeak),
                ("decoy", FlyStyle::NoFly, QuackStyle::Mute),
                ("model", FlyStyle::NoFly, QuackStyle::Quack),
            ]
        );
    }

    #[test]
    fn kinds_parse_from_identifiers() {
        for kind in DuckKind::ALL {
            assert_eq!(kind.as_str().parse::<DuckKind>(), Ok(kind));
        }
        assert_eq!("Rubber-Duck".parse::<DuckKind>(), Ok(DuckKind::Rubber));
        assert!("goose".parse::<DuckKind>().is_err());
    }

    #[test]
    fn kinds_deserialize_with_alias() {
        let kind: DuckKind = serde_json::from_str("\"rubber_duck\"").unwrap();
        assert_eq!(kind, DuckKind::Rubber);
        assert_eq!(
            serde_json::to_string(&DuckKind::Decoy).unwrap(),
            "\"decoy\""
        );
    }

    #[test]
    fn labels_read_like_headings() {
        assert_eq!(DuckKind::Model.to_string(), "Model Duck");
    }
}
