use std::sync::Arc;

use crate::behavior::{
    FlyBehavior, FlyStyle, QuackBehavior, QuackStyle, SharedFly, SharedQuack,
};
use crate::kind::DuckKind;

pub const NO_FLY_BEHAVIOR: &str = "No fly behavior set.";
pub const NO_QUACK_BEHAVIOR: &str = "No quack behavior set.";
pub const SWIM: &str = "All ducks float, even decoys!";

/// A duck whose flying and quacking are delegated to swappable behaviors.
///
/// The kind fixes the display text for the duck's whole lifetime; the two
/// slots can be reassigned at any point.
#[derive(Debug, Clone)]
pub struct Duck {
    kind: DuckKind,
    fly: Option<SharedFly>,
    quack: Option<SharedQuack>,
}

impl Duck {
    /// Build a duck of `kind` with its preset behaviors in both slots.
    #[must_use]
    pub fn new(kind: DuckKind) -> Self {
        let preset = kind.preset();
        Self {
            kind,
            fly: Some(preset.fly.create_behavior()),
            quack: Some(preset.quack.create_behavior()),
        }
    }

    /// Build a duck of `kind` with both slots empty.
    #[must_use]
    pub const fn unequipped(kind: DuckKind) -> Self {
        Self {
            kind,
            fly: None,
            quack: None,
        }
    }

    #[must_use]
    pub fn mallard() -> Self {
        Self::new(DuckKind::Mallard)
    }

    #[must_use]
    pub fn redhead() -> Self {
        Self::new(DuckKind::Redhead)
    }

    #[must_use]
    pub fn rubber() -> Self {
        Self::new(DuckKind::Rubber)
    }

    #[must_use]
    pub fn decoy() -> Self {
        Self::new(DuckKind::Decoy)
    }

    #[must_use]
    pub fn model() -> Self {
        Self::new(DuckKind::Model)
    }

    #[must_use]
    pub const fn kind(&self) -> DuckKind {
        self.kind
    }

    /// Replace whatever currently occupies the fly slot.
    pub fn set_fly_behavior(&mut self, behavior: SharedFly) {
        log::debug!(
            "{}: fly behavior {} -> {}",
            self.kind.as_str(),
            self.fly.as_ref().map_or("<unset>", |b| b.name()),
            behavior.name()
        );
        self.fly = Some(behavior);
    }

    /// Replace whatever currently occupies the quack slot.
    pub fn set_quack_behavior(&mut self, behavior: SharedQuack) {
        log::debug!(
            "{}: quack behavior {} -> {}",
            self.kind.as_str(),
            self.quack.as_ref().map_or("<unset>", |b| b.name()),
            behavior.name()
        );
        self.quack = Some(behavior);
    }

    pub fn set_fly_style(&mut self, style: FlyStyle) {
        self.set_fly_behavior(style.create_behavior());
    }

    pub fn set_quack_style(&mut self, style: QuackStyle) {
        self.set_quack_behavior(style.create_behavior());
    }

    /// Fly using the current behavior, or report that none is set.
    #[must_use]
    pub fn perform_fly(&self) -> &'static str {
        if let Some(behavior) = &self.fly {
            behavior.fly()
        } else {
            log::warn!("{} has no fly behavior", self.kind.as_str());
            NO_FLY_BEHAVIOR
        }
    }

    /// Quack using the current behavior, or report that none is set.
    #[must_use]
    pub fn perform_quack(&self) -> &'static str {
        if let Some(behavior) = &self.quack {
            behavior.quack()
        } else {
            log::warn!("{} has no quack behavior", self.kind.as_str());
            NO_QUACK_BEHAVIOR
        }
    }

    #[must_use]
    pub const fn swim(&self) -> &'static str {
        SWIM
    }

    #[must_use]
    pub const fn display(&self) -> &'static str {
        self.kind.preset().display
    }

    #[must_use]
    pub fn fly_behavior(&self) -> Option<&dyn FlyBehavior> {
        self.fly.as_deref()
    }

    #[must_use]
    pub fn quack_behavior(&self) -> Option<&dyn QuackBehavior> {
        self.quack.as_deref()
    }

    /// Stock style in the fly slot; `None` when unset or a custom behavior.
    #[must_use]
    pub fn fly_style(&self) -> Option<FlyStyle> {
        self.fly.as_ref().and_then(|b| b.style())
    }

    /// Stock style in the quack slot; `None` when unset or a custom behavior.
    #[must_use]
    pub fn quack_style(&self) -> Option<QuackStyle> {
        self.quack.as_ref().and_then(|b| b.style())
    }

    /// Whether both ducks share the very same fly behavior object.
    #[must_use]
    pub fn shares_fly_with(&self, other: &Self) -> bool {
        match (&self.fly, &other.fly) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{MuteQuack, RocketPoweredFly};

    #[derive(Debug)]
    struct Glide;

    impl FlyBehavior for Glide {
        fn name(&self) -> &'static str {
            "Glide"
        }

        fn fly(&self) -> &'static str {
            "I'm gliding."
        }
    }

    #[test]
    fn mallard_scenario() {
        let mallard = Duck::mallard();
        assert_eq!(mallard.display(), "I'm a real Mallard duck.");
        assert_eq!(mallard.perform_fly(), "I'm flying!");
        assert_eq!(mallard.perform_quack(), "Quack!");
        assert_eq!(mallard.swim(), "All ducks float, even decoys!");
    }

    #[test]
    fn rubber_duck_scenario() {
        let rubber = Duck::rubber();
        assert_eq!(rubber.display(), "I'm a rubber duckie.");
        assert_eq!(rubber.perform_fly(), "I can't fly.");
        assert_eq!(rubber.perform_quack(), "Squeak!");
    }

    #[test]
    fn model_duck_gets_a_rocket() {
        let mut model = Duck::model();
        assert_eq!(model.perform_fly(), "I can't fly.");
        model.set_fly_behavior(Arc::new(RocketPoweredFly));
        assert_eq!(model.perform_fly(), "I'm flying with a rocket!");
        assert_eq!(model.perform_quack(), "Quack!");
        assert_eq!(model.display(), "I'm a model duck.");
    }

    #[test]
    fn reassignment_touches_only_its_slot() {
        let mut redhead = Duck::redhead();
        redhead.set_quack_behavior(Arc::new(MuteQuack));
        assert_eq!(redhead.perform_quack(), "<< Silence >>");
        assert_eq!(redhead.perform_fly(), "I'm flying!");
        assert_eq!(redhead.display(), "I'm a Redhead duck.");
        assert_eq!(redhead.fly_style(), Some(FlyStyle::Wings));
    }

    #[test]
    fn reassignment_overwrites() {
        let mut decoy = Duck::decoy();
        decoy.set_fly_style(FlyStyle::Rocket);
        decoy.set_fly_style(FlyStyle::Wings);
        assert_eq!(decoy.perform_fly(), "I'm flying!");
        assert_eq!(decoy.fly_style(), Some(FlyStyle::Wings));
    }

    #[test]
    fn unset_slots_fall_back_to_notice() {
        let mut duck = Duck::unequipped(DuckKind::Mallard);
        assert_eq!(duck.perform_fly(), NO_FLY_BEHAVIOR);
        assert_eq!(duck.perform_quack(), NO_QUACK_BEHAVIOR);
        assert!(duck.fly_behavior().is_none());
        assert_eq!(duck.quack_style(), None);

        duck.set_quack_style(QuackStyle::Squeak);
        assert_eq!(duck.perform_quack(), "Squeak!");
        assert_eq!(duck.perform_fly(), NO_FLY_BEHAVIOR);
        assert_eq!(duck.display(), "I'm a real Mallard duck.");
    }

    #[test]
    fn performing_does_not_change_slots() {
        let decoy = Duck::decoy();
        for _ in 0..3 {
            assert_eq!(decoy.perform_quack(), "<< Silence >>");
        }
        assert_eq!(decoy.quack_style(), Some(QuackStyle::Mute));
    }

    #[test]
    fn custom_behaviors_plug_in() {
        let mut duck = Duck::mallard();
        duck.set_fly_behavior(Arc::new(Glide));
        assert_eq!(duck.perform_fly(), "I'm gliding.");
        assert_eq!(duck.fly_style(), None);
        assert_eq!(duck.fly_behavior().map(|b| b.name()), Some("Glide"));
    }

    #[test]
    fn behaviors_can_be_shared_between_ducks() {
        let rocket = FlyStyle::Rocket.create_behavior();
        let mut first = Duck::model();
        let mut second = Duck::decoy();
        first.set_fly_behavior(Arc::clone(&rocket));
        second.set_fly_behavior(rocket);
        assert!(first.shares_fly_with(&second));
        assert_eq!(first.perform_fly(), second.perform_fly());
        assert!(!Duck::mallard().shares_fly_with(&Duck::mallard()));
    }

    #[test]
    fn display_ignores_slot_contents() {
        for kind in DuckKind::ALL {
            let mut duck = Duck::new(kind);
            let before = duck.display();
            duck.set_fly_style(FlyStyle::Rocket);
            duck.set_quack_style(QuackStyle::Mute);
            assert_eq!(duck.display(), before);
            assert_eq!(before, kind.preset().display);
        }
    }
}
