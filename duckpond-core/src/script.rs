//! Scripted scenarios: a duck kind plus an ordered list of steps, run to
//! produce a transcript of what the duck said.

use serde::{Deserialize, Serialize};

use crate::behavior::{FlyStyle, QuackStyle};
use crate::duck::Duck;
use crate::error::{ScriptError, normalize_ident};
use crate::kind::DuckKind;

/// One action taken against a duck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Display,
    Fly,
    Quack,
    Swim,
    SetFly { style: FlyStyle },
    SetQuack { style: QuackStyle },
}

impl Step {
    /// Apply the step, returning the line it produced, if any.
    pub fn apply(self, duck: &mut Duck) -> Option<&'static str> {
        match self {
            Self::Display => Some(duck.display()),
            Self::Fly => Some(duck.perform_fly()),
            Self::Quack => Some(duck.perform_quack()),
            Self::Swim => Some(duck.swim()),
            Self::SetFly { style } => {
                duck.set_fly_style(style);
                None
            }
            Self::SetQuack { style } => {
                duck.set_quack_style(style);
                None
            }
        }
    }
}

/// Output of a single scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub title: String,
    pub kind: DuckKind,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub kind: DuckKind,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    #[must_use]
    pub fn new(title: impl Into<String>, kind: DuckKind) -> Self {
        Self {
            title: title.into(),
            kind,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Run the steps against a freshly built duck of this scenario's kind.
    #[must_use]
    pub fn run(&self) -> Transcript {
        let mut duck = Duck::new(self.kind);
        self.run_on(&mut duck)
    }

    /// Run the steps against an existing duck, leaving its slots as the
    /// script left them.
    pub fn run_on(&self, duck: &mut Duck) -> Transcript {
        log::debug!("running scenario '{}' ({} steps)", self.title, self.steps.len());
        let lines = self
            .steps
            .iter()
            .filter_map(|step| step.apply(duck))
            .map(str::to_string)
            .collect();
        Transcript {
            title: self.title.clone(),
            kind: duck.kind(),
            lines,
        }
    }

    fn matches(&self, name: &str) -> bool {
        let wanted = normalize_ident(name);
        wanted == self.kind.as_str() || wanted == normalize_ident(&self.title)
    }
}

const INTRODUCE: [Step; 4] = [Step::Display, Step::Fly, Step::Quack, Step::Swim];

/// The stock demonstration: a mallard, a rubber duck, and a model duck that
/// is handed a rocket halfway through.
#[must_use]
pub fn demo_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Mallard Duck", DuckKind::Mallard).with_steps(INTRODUCE),
        Scenario::new("Rubber Duck", DuckKind::Rubber).with_steps(INTRODUCE),
        Scenario::new("Dynamic Behavior Change (Model Duck)", DuckKind::Model).with_steps([
            Step::Display,
            Step::Fly,
            Step::SetFly {
                style: FlyStyle::Rocket,
            },
            Step::Fly,
            Step::Quack,
        ]),
    ]
}

/// Look up a stock scenario by duck kind identifier or by title.
#[must_use]
pub fn find_scenario(name: &str) -> Option<Scenario> {
    demo_scenarios()
        .into_iter()
        .find(|scenario| scenario.matches(name))
}

/// Parse a JSON array of scenarios.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the array is empty, or any
/// scenario has no steps.
pub fn load_scenarios(json: &str) -> Result<Vec<Scenario>, ScriptError> {
    let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
    if scenarios.is_empty() {
        return Err(ScriptError::Empty);
    }
    if let Some(idle) = scenarios.iter().find(|s| s.steps.is_empty()) {
        return Err(ScriptError::NoSteps {
            title: idle.title.clone(),
        });
    }
    Ok(scenarios)
}
