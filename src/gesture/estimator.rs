use tracing::debug;

use super::{Catalog, GestureDescription, MatchResult, MAX_SCORE};
use crate::config::{CurlThresholds, RecognizerConfig};
use crate::hand_landmarks::geometry::{finger_curl, finger_direction, FingerCurl, FingerDirection};
use crate::hand_landmarks::{Finger, HandLandmarks, LandmarkFrame};

/// Curl and direction detected for every finger of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPose {
    pub curls: [FingerCurl; 5],
    pub directions: [Option<FingerDirection>; 5],
}

impl HandPose {
    pub fn curl(&self, finger: Finger) -> FingerCurl {
        self.curls[finger.index()]
    }

    pub fn direction(&self, finger: Finger) -> Option<FingerDirection> {
        self.directions[finger.index()]
    }
}

/// Scores landmark frames against gesture descriptions.
///
/// Holds only tuning parameters; every call is independent.
#[derive(Debug, Clone)]
pub struct GestureEstimator {
    curl_thresholds: CurlThresholds,
    mismatch_penalty: f32,
}

impl Default for GestureEstimator {
    fn default() -> Self {
        Self::new(&RecognizerConfig::default())
    }
}

impl GestureEstimator {
    pub fn new(config: &RecognizerConfig) -> Self {
        Self {
            curl_thresholds: config.curl,
            mismatch_penalty: config.mismatch_penalty,
        }
    }

    pub fn analyze(&self, frame: &LandmarkFrame) -> HandPose {
        HandPose {
            curls: Finger::ALL.map(|f| finger_curl(frame, f, &self.curl_thresholds)),
            directions: Finger::ALL.map(|f| finger_direction(frame, f)),
        }
    }

    /// Every gesture of `catalog` scoring at least `threshold`, in catalog order.
    ///
    /// Landmark sets that are not a complete hand yield no matches.
    pub fn estimate<L: HandLandmarks + ?Sized>(
        &self,
        landmarks: &L,
        catalog: &Catalog,
        threshold: f32,
    ) -> Vec<MatchResult> {
        match LandmarkFrame::from_landmarks(landmarks) {
            Ok(frame) => self.estimate_frame(&frame, catalog, threshold),
            Err(e) => {
                debug!("skipping frame: {}", e);
                Vec::new()
            }
        }
    }

    pub fn estimate_frame(
        &self,
        frame: &LandmarkFrame,
        catalog: &Catalog,
        threshold: f32,
    ) -> Vec<MatchResult> {
        let pose = self.analyze(frame);

        catalog
            .iter()
            .filter_map(|gesture| {
                let score = self.score(gesture, &pose);
                debug!(gesture = gesture.name(), score, "scored gesture");
                (score >= threshold).then(|| MatchResult {
                    name: gesture.name().to_string(),
                    score,
                })
            })
            .collect()
    }

    /// Score of `gesture` for `pose` on the 0-10 scale.
    ///
    /// Each matching constraint adds its weight, each mismatch subtracts the
    /// penalty, and the sum is averaged over the constraints.
    pub fn score(&self, gesture: &GestureDescription, pose: &HandPose) -> f32 {
        let mut total = 0.0;
        let mut parameters = 0usize;

        for finger in Finger::ALL {
            if let Some(constraint) = gesture.curl(finger) {
                parameters += 1;
                if pose.curl(finger) == constraint.expected {
                    total += constraint.weight;
                } else {
                    total -= self.mismatch_penalty;
                }
            }

            if let Some(constraint) = gesture.direction(finger) {
                parameters += 1;
                if pose.direction(finger) == Some(constraint.expected) {
                    total += constraint.weight;
                } else {
                    total -= self.mismatch_penalty;
                }
            }
        }

        if parameters == 0 {
            return 0.0;
        }
        total / parameters as f32 * MAX_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::catalog::{describe_curls, turkish_sign_language};
    use crate::hand_landmarks::HAND_LANDMARK_COUNT;
    use crate::hand_landmarks::geometry::FingerCurl::{FullCurl, HalfCurl, NoCurl};

    // every finger grows upwards from its own base, bent at the first joint
    fn synthetic_hand(curls: [FingerCurl; 5]) -> Vec<[f32; 3]> {
        let mut points = vec![[0.0, 0.0, 0.0]; HAND_LANDMARK_COUNT];
        points[0] = [200.0, 400.0, 0.0];
        for (i, (finger, curl)) in Finger::ALL.into_iter().zip(curls).enumerate() {
            let bend: f32 = match curl {
                NoCurl => 0.0,
                HalfCurl => 85.0,
                FullCurl => 160.0,
            };
            let (s, c) = bend.to_radians().sin_cos();
            let x = 100.0 + 50.0 * i as f32;
            let [k0, k1, k2, k3] = finger.indices();
            points[k0] = [x, 300.0, 0.0];
            points[k1] = [x, 260.0, 0.0];
            points[k2] = [x + 40.0 * s, 260.0 - 40.0 * c, 0.0];
            points[k3] = [x + 80.0 * s, 260.0 - 80.0 * c, 0.0];
        }
        points
    }

    #[test]
    fn test_analyze_recovers_curls() {
        let estimator = GestureEstimator::default();
        let curls = [NoCurl, HalfCurl, FullCurl, NoCurl, HalfCurl];
        let frame = LandmarkFrame::from_points(&synthetic_hand(curls)).unwrap();

        let pose = estimator.analyze(&frame);
        assert_eq!(pose.curls, curls);
        assert_eq!(pose.direction(Finger::Thumb), Some(FingerDirection::VerticalUp));
    }

    #[test]
    fn test_exact_match_scores_maximum() {
        let estimator = GestureEstimator::default();
        let curls = [NoCurl, NoCurl, NoCurl, FullCurl, FullCurl];
        let frame = LandmarkFrame::from_points(&synthetic_hand(curls)).unwrap();

        let score = estimator.score(&describe_curls("Su", curls), &estimator.analyze(&frame));
        assert!((score - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_single_mismatch_drops_below_threshold() {
        let estimator = GestureEstimator::default();
        let frame = LandmarkFrame::from_points(&synthetic_hand([
            FullCurl, FullCurl, FullCurl, FullCurl, FullCurl,
        ]))
        .unwrap();
        let evet = describe_curls("Evet", [NoCurl, FullCurl, FullCurl, FullCurl, FullCurl]);

        // (4 - 3) / 5 * 10
        let score = estimator.score(&evet, &estimator.analyze(&frame));
        assert!((score - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_unconstrained_fingers_are_ignored() {
        let estimator = GestureEstimator::default();
        let mut point = GestureDescription::describe("point");
        point.add_curl(Finger::Index, NoCurl, 1.0);

        for other in [NoCurl, HalfCurl, FullCurl] {
            let frame =
                LandmarkFrame::from_points(&synthetic_hand([other, NoCurl, other, other, other]))
                    .unwrap();
            let score = estimator.score(&point, &estimator.analyze(&frame));
            assert!((score - 10.0).abs() < 1e-4);
        }

        let empty = GestureDescription::describe("empty");
        let frame = LandmarkFrame::from_points(&synthetic_hand([NoCurl; 5])).unwrap();
        assert_eq!(estimator.score(&empty, &estimator.analyze(&frame)), 0.0);
    }

    #[test]
    fn test_direction_constraints_take_part() {
        let estimator = GestureEstimator::default();
        let frame = LandmarkFrame::from_points(&synthetic_hand([NoCurl; 5])).unwrap();
        let pose = estimator.analyze(&frame);

        let mut up = GestureDescription::describe("up");
        up.add_curl(Finger::Index, NoCurl, 1.0)
            .add_direction(Finger::Index, FingerDirection::VerticalUp, 1.0);
        assert!((estimator.score(&up, &pose) - 10.0).abs() < 1e-4);

        let mut down = GestureDescription::describe("down");
        down.add_curl(Finger::Index, NoCurl, 1.0)
            .add_direction(Finger::Index, FingerDirection::VerticalDown, 1.0);
        // (1 - 3) / 2 * 10
        assert!((estimator.score(&down, &pose) + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_estimate_filters_by_threshold_in_catalog_order() {
        let estimator = GestureEstimator::default();
        let catalog = turkish_sign_language();
        let hand = synthetic_hand([NoCurl, FullCurl, FullCurl, FullCurl, FullCurl]);

        let matches = estimator.estimate(&hand, &catalog, 8.0);
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Evet", "İyiyim"]);
        assert!(matches.iter().all(|m| m.score >= 8.0));

        let everything = estimator.estimate(&hand, &catalog, -100.0);
        assert_eq!(everything.len(), catalog.len());
    }

    #[test]
    fn test_estimate_rejects_incomplete_frames() {
        let estimator = GestureEstimator::default();
        let catalog = turkish_sign_language();
        let hand = synthetic_hand([NoCurl; 5]);

        assert!(estimator.estimate(&hand[..20], &catalog, 8.0).is_empty());
        assert!(estimator.estimate(&Vec::<[f32; 3]>::new(), &catalog, 8.0).is_empty());

        let mut long = hand.clone();
        long.push([0.0, 0.0, 0.0]);
        assert!(estimator.estimate(&long, &catalog, 8.0).is_empty());
    }

    #[test]
    fn test_mismatch_penalty_comes_from_config() {
        let config = RecognizerConfig {
            mismatch_penalty: 0.0,
            ..Default::default()
        };
        let estimator = GestureEstimator::new(&config);
        let frame = LandmarkFrame::from_points(&synthetic_hand([FullCurl; 5])).unwrap();
        let evet = describe_curls("Evet", [NoCurl, FullCurl, FullCurl, FullCurl, FullCurl]);

        let score = estimator.score(&evet, &estimator.analyze(&frame));
        assert!((score - 8.0).abs() < 1e-4);
    }
}
