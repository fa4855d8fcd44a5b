pub mod catalog;
pub mod estimator;

use tracing::warn;

use crate::error::{Error, Result};
use crate::hand_landmarks::geometry::{FingerCurl, FingerDirection};
use crate::hand_landmarks::Finger;

pub const DEFAULT_WEIGHT: f32 = 1.0;

/// Upper end of the confidence scale scores are reported on.
pub const MAX_SCORE: f32 = 10.0;

/// Expected value for one finger together with how much it counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint<T> {
    pub expected: T,
    pub weight: f32,
}

/// A named static hand pose, described finger by finger.
///
/// Fingers without a constraint do not take part in scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureDescription {
    name: String,
    curls: [Option<Constraint<FingerCurl>>; 5],
    directions: [Option<Constraint<FingerDirection>>; 5],
}

impl GestureDescription {
    pub fn describe(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            curls: [None; 5],
            directions: [None; 5],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_curl(&mut self, finger: Finger, curl: FingerCurl, weight: f32) -> &mut Self {
        let weight = self.checked_weight(finger, weight);
        let slot = &mut self.curls[finger.index()];
        if let Some(previous) = slot {
            warn!(
                gesture = %self.name,
                finger = finger.as_str(),
                previous = previous.expected.as_str(),
                "curl registered twice, keeping the last one"
            );
        }
        *slot = Some(Constraint {
            expected: curl,
            weight,
        });
        self
    }

    pub fn add_direction(
        &mut self,
        finger: Finger,
        direction: FingerDirection,
        weight: f32,
    ) -> &mut Self {
        let weight = self.checked_weight(finger, weight);
        let slot = &mut self.directions[finger.index()];
        if let Some(previous) = slot {
            warn!(
                gesture = %self.name,
                finger = finger.as_str(),
                previous = previous.expected.as_str(),
                "direction registered twice, keeping the last one"
            );
        }
        *slot = Some(Constraint {
            expected: direction,
            weight,
        });
        self
    }

    pub fn curl(&self, finger: Finger) -> Option<Constraint<FingerCurl>> {
        self.curls[finger.index()]
    }

    pub fn direction(&self, finger: Finger) -> Option<Constraint<FingerDirection>> {
        self.directions[finger.index()]
    }

    pub fn constraint_count(&self) -> usize {
        self.curls.iter().flatten().count() + self.directions.iter().flatten().count()
    }

    /// Score reached when every constraint matches.
    pub fn max_score(&self) -> f32 {
        let count = self.constraint_count();
        if count == 0 {
            return 0.0;
        }
        let total: f32 = self
            .curls
            .iter()
            .flatten()
            .map(|c| c.weight)
            .chain(self.directions.iter().flatten().map(|c| c.weight))
            .sum();
        total / count as f32 * MAX_SCORE
    }

    // weights live in (0, 1]
    fn checked_weight(&self, finger: Finger, weight: f32) -> f32 {
        if weight > 0.0 && weight <= 1.0 {
            return weight;
        }
        let fixed = if weight.is_nan() {
            DEFAULT_WEIGHT
        } else {
            weight.clamp(f32::EPSILON, 1.0)
        };
        warn!(
            gesture = %self.name,
            finger = finger.as_str(),
            weight,
            fixed,
            "constraint weight outside (0, 1]"
        );
        fixed
    }
}

/// Ordered, name-unique collection of gesture descriptions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    gestures: Vec<GestureDescription>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gesture: GestureDescription) -> Result<()> {
        if self.get(gesture.name()).is_some() {
            return Err(Error::DuplicateGesture(gesture.name));
        }
        self.gestures.push(gesture);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&GestureDescription> {
        self.gestures.iter().find(|g| g.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GestureDescription> {
        self.gestures.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.gestures.iter().map(|g| g.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a GestureDescription;
    type IntoIter = std::slice::Iter<'a, GestureDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Score of one gesture for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub name: String,
    pub score: f32,
}
