use crate::error::Result;
use crate::types::scenario::{Direction, Outcome, Scenario, MAX_PROBABILITY, MIN_PROBABILITY};
use crate::types::task::Impact;
use tracing::debug;

pub fn apply_completion(
    scenarios: &[Scenario],
    impact: Impact,
    direction: Direction,
) -> Result<Vec<Scenario>> {
    let weight = impact.weight();
    let change = match direction {
        Direction::Up => weight,
        Direction::Down => -weight,
    };
    debug!(%impact, ?direction, change, count = scenarios.len(), "applying completion");

    scenarios
        .iter()
        .map(|scenario| {
            scenario.validate()?;
            let delta = match scenario.outcome {
                Outcome::Positive => change,
                Outcome::Negative => -change,
            };
            Ok(scenario.with_probability(clamp_probability(scenario.probability + delta)))
        })
        .collect()
}

// Clamping makes this differ from summing the weights first, so order matters.
pub fn apply_sequence<I>(
    scenarios: &[Scenario],
    impacts: I,
    direction: Direction,
) -> Result<Vec<Scenario>>
where
    I: IntoIterator<Item = Impact>,
{
    impacts
        .into_iter()
        .try_fold(scenarios.to_vec(), |current, impact| {
            apply_completion(&current, impact, direction)
        })
}

fn clamp_probability(value: i32) -> i32 {
    value.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}
