use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::RecognizerConfig;
use crate::gesture::catalog::turkish_sign_language;
use crate::gesture::estimator::GestureEstimator;
use crate::gesture::{Catalog, MatchResult};
use crate::hand_landmarks::HandLandmarks;

/// One-shot sign classification over the Turkish Sign Language catalog.
///
/// `recognize` returns nothing until `initialize` has built the catalog.
#[derive(Debug, Clone)]
pub struct SignLanguageRecognizer {
    config: RecognizerConfig,
    estimator: GestureEstimator,
    catalog: Option<Catalog>,
}

impl Default for SignLanguageRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

impl SignLanguageRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            estimator: GestureEstimator::new(&config),
            config,
            catalog: None,
        }
    }

    /// Builds a fresh catalog, replacing any previous one. Returns the number
    /// of gestures that can be recognized.
    pub fn initialize(&mut self) -> usize {
        let catalog = turkish_sign_language();
        let count = catalog.len();
        self.catalog = Some(catalog);

        info!(
            gestures = count,
            threshold = self.config.threshold,
            "sign language recognizer initialized"
        );
        count
    }

    pub fn is_initialized(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn estimator(&self) -> &GestureEstimator {
        &self.estimator
    }

    /// Gestures reaching the configured threshold for `landmarks`.
    pub fn matches<L: HandLandmarks + ?Sized>(&self, landmarks: &L) -> Vec<MatchResult> {
        match &self.catalog {
            Some(catalog) => self
                .estimator
                .estimate(landmarks, catalog, self.config.threshold),
            None => Vec::new(),
        }
    }

    /// Name of the best scoring gesture, if any reaches the threshold.
    ///
    /// On equal scores the gesture listed first in the catalog wins.
    pub fn recognize<L: HandLandmarks + ?Sized>(&self, landmarks: &L) -> Option<&str> {
        let catalog = self.catalog.as_ref()?;

        let mut best: Option<MatchResult> = None;
        for candidate in self.matches(landmarks) {
            if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        let best = best?;
        debug!(gesture = %best.name, score = best.score, "recognized");
        // hand back the catalog's own name so the result borrows from self
        catalog.get(&best.name).map(|g| g.name())
    }

    /// Classifies independent frames in parallel. Results keep input order.
    pub fn recognize_batch<L: HandLandmarks>(&self, frames: &[L]) -> Vec<Option<&str>> {
        frames
            .par_iter()
            .map(|frame| self.recognize(frame))
            .collect()
    }
}
