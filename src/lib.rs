//! Static hand-sign classification from 21-point hand landmarks.
//!
//! A hand-pose detector supplies one landmark frame per video frame; the
//! [`SignLanguageRecognizer`] turns it into the name of a Turkish Sign
//! Language gesture by matching per-finger curl against a fixed catalog.

pub mod config;
pub mod error;
pub mod gesture;
pub mod hand_landmarks;
pub mod recognizer;
pub mod utils;

pub use config::{CurlThresholds, RecognizerConfig};
pub use error::{Error, Result};
pub use gesture::estimator::{GestureEstimator, HandPose};
pub use gesture::{Catalog, GestureDescription, MatchResult};
pub use hand_landmarks::geometry::{FingerCurl, FingerDirection};
pub use hand_landmarks::{Finger, HandLandmarks, LandmarkFrame};
pub use recognizer::SignLanguageRecognizer;
pub use utils::RecognitionHistory;
