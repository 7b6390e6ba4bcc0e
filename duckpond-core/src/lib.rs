//! Duckpond Core
//!
//! A duck simulation built on the strategy pattern: each duck delegates
//! flying and quacking to behavior objects that can be swapped at runtime.
//! The crate also carries a small inheritance demo in [`lineage`].

pub mod behavior;
pub mod duck;
pub mod error;
pub mod kind;
pub mod lineage;
pub mod script;

// Re-export commonly used types
pub use behavior::{
    FlyBehavior, FlyStyle, FlyWithWings, MuteQuack, NoFly, Quack, QuackBehavior, QuackStyle,
    RocketPoweredFly, SharedFly, SharedQuack, Squeak,
};
pub use duck::{Duck, NO_FLY_BEHAVIOR, NO_QUACK_BEHAVIOR, SWIM};
pub use error::{ParseStyleError, ScriptError};
pub use kind::{DuckKind, Preset};
pub use lineage::{Child, Family, Languages, Member, Parent};
pub use script::{Scenario, Step, Transcript, demo_scenarios, find_scenario, load_scenarios};
