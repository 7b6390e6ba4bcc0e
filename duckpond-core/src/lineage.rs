//! Inheritance with overriding, expressed as a trait with default methods.
//!
//! Members of one [`Family`] share a single language list, so a change made
//! through any member (or the family) is seen by all of them.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable list of spoken languages.
#[derive(Debug, Clone)]
pub struct Languages(Rc<RefCell<Vec<String>>>);

impl Languages {
    #[must_use]
    pub fn new(initial: &[&str]) -> Self {
        Self(Rc::new(RefCell::new(
            initial.iter().map(ToString::to_string).collect(),
        )))
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Replace the list for every member sharing it.
    pub fn replace(&self, languages: &[&str]) {
        *self.0.borrow_mut() = languages.iter().map(ToString::to_string).collect();
    }

    pub fn add(&self, language: &str) {
        self.0.borrow_mut().push(language.to_string());
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(&["English"])
    }
}

/// Common behavior of every family member.
pub trait Member {
    fn name(&self) -> &str;

    fn age(&self) -> u32;

    fn languages(&self) -> &Languages;

    fn speaks(&self) -> Vec<String> {
        self.languages().snapshot()
    }

    fn description(&self) -> String {
        format!("{} is {} years old", self.name(), self.age())
    }

    fn speak(&self, sound: &str) -> String {
        format!("{} says {}", self.name(), sound)
    }
}

#[derive(Debug, Clone)]
pub struct Parent {
    name: String,
    age: u32,
    languages: Languages,
}

impl Member for Parent {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn languages(&self) -> &Languages {
        &self.languages
    }
}

/// Behaves like [`Parent`] except for the wording of `description`.
#[derive(Debug, Clone)]
pub struct Child {
    name: String,
    age: u32,
    languages: Languages,
}

impl Member for Child {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn languages(&self) -> &Languages {
        &self.languages
    }

    fn description(&self) -> String {
        format!("{} is {} years of age.", self.name, self.age)
    }
}

/// Owner of the language list shared by its members.
#[derive(Debug, Clone, Default)]
pub struct Family {
    languages: Languages,
}

impl Family {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn parent(&self, name: &str, age: u32) -> Parent {
        Parent {
            name: name.to_string(),
            age,
            languages: self.languages.clone(),
        }
    }

    #[must_use]
    pub fn child(&self, name: &str, age: u32) -> Child {
        Child {
            name: name.to_string(),
            age,
            languages: self.languages.clone(),
        }
    }

    #[must_use]
    pub const fn languages(&self) -> &Languages {
        &self.languages
    }
}

/// Walk through a small family: default and overridden wording, then a
/// language change made through one member and seen by another.
#[must_use]
pub fn demo_lines() -> Vec<String> {
    let family = Family::new();
    let mom = family.parent("Mom", 35);
    let kid = family.child("Kid", 3);
    let mut lines = vec![
        mom.description(),
        mom.speak("Hello!"),
        kid.description(),
        kid.speak("Hello!"),
        format!("{} speaks {}", kid.name(), kid.speaks().join(", ")),
    ];
    mom.languages().add("Spanish");
    lines.push(format!("{} speaks {}", kid.name(), kid.speaks().join(", ")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_uses_default_wording() {
        let family = Family::new();
        let mom = family.parent("Mom", 35);
        assert_eq!(mom.name(), "Mom");
        assert_eq!(mom.age(), 35);
        assert_eq!(mom.description(), "Mom is 35 years old");
        assert_eq!(mom.speak("Hello!"), "Mom says Hello!");
        assert_eq!(mom.speak("Goodbye"), "Mom says Goodbye");
    }

    #[test]
    fn child_inherits_speak_and_overrides_description() {
        let family = Family::new();
        let kid = family.child("Kid", 3);
        assert_eq!(kid.speak("Hello!"), "Kid says Hello!");
        assert_eq!(kid.description(), "Kid is 3 years of age.");
    }

    #[test]
    fn language_changes_reach_every_member() {
        let family = Family::new();
        let mom = family.parent("Mom", 35);
        let step_mom = family.parent("Step Mom", 40);
        let kid = family.child("Kid", 3);
        assert_eq!(mom.speaks(), vec!["English"]);
        assert_eq!(step_mom.speaks(), vec!["English"]);

        family.languages().replace(&["English", "Spanish"]);
        assert_eq!(mom.speaks(), vec!["English", "Spanish"]);
        assert_eq!(step_mom.speaks(), vec!["English", "Spanish"]);

        kid.languages().add("French");
        assert_eq!(mom.speaks(), vec!["English", "Spanish", "French"]);
    }

    #[test]
    fn families_do_not_share_languages() {
        let first = Family::new();
        let second = Family::new();
        first.languages().add("German");
        assert_eq!(second.parent("Dad", 50).speaks(), vec!["English"]);
    }

    #[test]
    fn demo_lines_show_override_and_shared_languages() {
        assert_eq!(
            demo_lines(),
            vec![
                "Mom is 35 years old",
                "Mom says Hello!",
                "Kid is 3 years of age.",
                "Kid says Hello!",
                "Kid speaks English",
                "Kid speaks English, Spanish",
            ]
        );
    }

    #[test]
    fn members_work_behind_trait_objects() {
        let family = Family::new();
        let members: Vec<Box<dyn Member>> = vec![
            Box::new(family.parent("Mom", 35)),
            Box::new(family.child("Kid", 3)),
        ];
        let descriptions: Vec<_> = members.iter().map(|m| m.description()).collect();
        assert_eq!(
            descriptions,
            vec!["Mom is 35 years old", "Kid is 3 years of age."]
        );
    }
}
