//! Fly and quack capabilities and their built-in variants.
//!
//! Variants are stateless unit structs, so a single instance can sit in the
//! slots of any number of ducks at once. [`FlyStyle`] and [`QuackStyle`] name
//! the built-in variants for scripts and the command line.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ParseStyleError, normalize_ident};

/// Shared handle to a fly variant.
pub type SharedFly = Arc<dyn FlyBehavior>;
/// Shared handle to a quack variant.
pub type SharedQuack = Arc<dyn QuackBehavior>;

/// How a duck gets (or fails to get) off the water.
pub trait FlyBehavior: fmt::Debug + Send + Sync {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Describe the flight.
    fn fly(&self) -> &'static str;

    /// Built-in identifier, if this is one of the stock variants.
    fn style(&self) -> Option<FlyStyle> {
        None
    }
}

/// What noise a duck makes.
pub trait QuackBehavior: fmt::Debug + Send + Sync {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Describe the noise.
    fn quack(&self) -> &'static str;

    /// Built-in identifier, if this is one of the stock variants.
    fn style(&self) -> Option<QuackStyle> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlyWithWings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoFly;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RocketPoweredFly;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quack;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MuteQuack;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Squeak;

impl FlyBehavior for FlyWithWings {
    fn name(&self) -> &'static str {
        "FlyWithWings"
    }

    fn fly(&self) -> &'static str {
        "I'm flying!"
    }

    fn style(&self) -> Option<FlyStyle> {
        Some(FlyStyle::Wings)
    }
}

impl FlyBehavior for NoFly {
    fn name(&self) -> &'static str {
        "NoFly"
    }

    fn fly(&self) -> &'static str {
        "I can't fly."
    }

    fn style(&self) -> Option<FlyStyle> {
        Some(FlyStyle::NoFly)
    }
}

impl FlyBehavior for RocketPoweredFly {
    fn name(&self) -> &'static str {
        "RocketPoweredFly"
    }

    fn fly(&self) -> &'static str {
        "I'm flying with a rocket!"
    }

    fn style(&self) -> Option<FlyStyle> {
        Some(FlyStyle::Rocket)
    }
}

impl QuackBehavior for Quack {
    fn name(&self) -> &'static str {
        "Quack"
    }

    fn quack(&self) -> &'static str {
        "Quack!"
    }

    fn style(&self) -> Option<QuackStyle> {
        Some(QuackStyle::Quack)
    }
}

impl QuackBehavior for MuteQuack {
    fn name(&self) -> &'static str {
        "MuteQuack"
    }

    fn quack(&self) -> &'static str {
        "<< Silence >>"
    }

    fn style(&self) -> Option<QuackStyle> {
        Some(QuackStyle::Mute)
    }
}

impl QuackBehavior for Squeak {
    fn name(&self) -> &'static str {
        "Squeak"
    }

    fn quack(&self) -> &'static str {
        "Squeak!"
    }

    fn style(&self) -> Option<QuackStyle> {
        Some(QuackStyle::Squeak)
    }
}

/// Built-in fly variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlyStyle {
    Wings,
    NoFly,
    Rocket,
}

impl FlyStyle {
    pub const ALL: [Self; 3] = [Self::Wings, Self::NoFly, Self::Rocket];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wings => "wings",
            Self::NoFly => "no_fly",
            Self::Rocket => "rocket",
        }
    }

    /// Create the shared behavior object for this style.
    #[must_use]
    pub fn create_behavior(self) -> SharedFly {
        match self {
            Self::Wings => Arc::new(FlyWithWings),
            Self::NoFly => Arc::new(NoFly),
            Self::Rocket => Arc::new(RocketPoweredFly),
        }
    }
}

impl fmt::Display for FlyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlyStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_ident(s).as_str() {
            "wings" => Ok(Self::Wings),
            "no_fly" => Ok(Self::NoFly),
            "rocket" => Ok(Self::Rocket),
            _ => Err(ParseStyleError::new(
                "fly style",
                s,
                &Self::ALL.map(Self::as_str),
            )),
        }
    }
}

/// Built-in quack variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuackStyle {
    Quack,
    Mute,
    Squeak,
}

impl QuackStyle {
    pub const ALL: [Self; 3] = [Self::Quack, Self::Mute, Self::Squeak];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quack => "quack",
            Self::Mute => "mute",
            Self::Squeak => "squeak",
        }
    }

    /// Create the shared behavior object for this style.
    #[must_use]
    pub fn create_behavior(self) -> SharedQuack {
        match self {
            Self::Quack => Arc::new(Quack),
            Self::Mute => Arc::new(MuteQuack),
            Self::Squeak => Arc::new(Squeak),
        }
    }
}

impl fmt::Display for QuackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuackStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_ident(s).as_str() {
            "quack" => Ok(Self::Quack),
            "mute" => Ok(Self::Mute),
            "squeak" => Ok(Self::Squeak),
            _ => Err(ParseStyleError::new(
                "quack style",
                s,
                &Self::ALL.map(Self::as_str),
            )),
        }
    }
}
