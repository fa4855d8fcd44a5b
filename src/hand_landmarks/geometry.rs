//! Per-finger features derived from a landmark frame.
//!
//! Curl is measured as the angle at the first mid-joint between the finger
//! base and the fingertip: a straight finger gives ~180 degrees, a finger
//! folded back onto itself approaches 0.

use nalgebra::{Point3, Vector2};

use super::{Finger, LandmarkFrame};
use crate::config::CurlThresholds;

/// Segments shorter than this are treated as coincident points.
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerCurl {
    NoCurl,
    HalfCurl,
    FullCurl,
}

impl FingerCurl {
    pub fn as_str(&self) -> &'static str {
        match self {
            FingerCurl::NoCurl => "no-curl",
            FingerCurl::HalfCurl => "half-curl",
            FingerCurl::FullCurl => "full-curl",
        }
    }
}

/// Pointing direction of a finger in the image plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerDirection {
    VerticalUp,
    VerticalDown,
    HorizontalLeft,
    HorizontalRight,
    DiagonalUpRight,
    DiagonalUpLeft,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl FingerDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FingerDirection::VerticalUp => "vertical-up",
            FingerDirection::VerticalDown => "vertical-down",
            FingerDirection::HorizontalLeft => "horizontal-left",
            FingerDirection::HorizontalRight => "horizontal-right",
            FingerDirection::DiagonalUpRight => "diagonal-up-right",
            FingerDirection::DiagonalUpLeft => "diagonal-up-left",
            FingerDirection::DiagonalDownRight => "diagonal-down-right",
            FingerDirection::DiagonalDownLeft => "diagonal-down-left",
        }
    }
}

/// Angle in degrees at `mid` between the segments towards `start` and `end`.
///
/// Returns `None` when either segment has zero length or the computation
/// produces a non-finite value.
pub fn joint_angle(start: Point3<f32>, mid: Point3<f32>, end: Point3<f32>) -> Option<f32> {
    let start_mid = (start - mid).norm();
    let mid_end = (end - mid).norm();
    let start_end = (end - start).norm();

    if !(start_mid > MIN_SEGMENT_LENGTH && mid_end > MIN_SEGMENT_LENGTH) {
        return None;
    }

    // law of cosines
    let cos_in = (mid_end * mid_end + start_mid * start_mid - start_end * start_end)
        / (2.0 * mid_end * start_mid);
    if !cos_in.is_finite() {
        return None;
    }

    Some(cos_in.clamp(-1.0, 1.0).acos().to_degrees())
}

pub fn curl_from_angle(angle: f32, thresholds: &CurlThresholds) -> FingerCurl {
    if angle > thresholds.no_curl_start {
        FingerCurl::NoCurl
    } else if angle > thresholds.half_curl_start {
        FingerCurl::HalfCurl
    } else {
        FingerCurl::FullCurl
    }
}

/// Classifies how bent `finger` is. Degenerate joints fall back to `FullCurl`.
pub fn finger_curl(frame: &LandmarkFrame, finger: Finger, thresholds: &CurlThresholds) -> FingerCurl {
    let [base, mid, _, tip] = frame.get_finger(finger);

    match joint_angle(base, mid, tip) {
        Some(angle) => curl_from_angle(angle, thresholds),
        None => FingerCurl::FullCurl,
    }
}

/// Direction from the finger base to its tip, bucketed into 45 degree sectors.
///
/// The y axis grows downwards (image space), so a tip above its base points up.
/// A finger whose base and tip coincide has no direction.
pub fn finger_direction(frame: &LandmarkFrame, finger: Finger) -> Option<FingerDirection> {
    let [base, _, _, tip] = frame.get_finger(finger);
    let v = Vector2::new(tip.x - base.x, base.y - tip.y);

    if !(v.norm() > MIN_SEGMENT_LENGTH) {
        return None;
    }

    let angle = v.y.atan2(v.x).to_degrees();
    let sector = ((angle + 360.0 + 22.5) / 45.0).floor() as i32 % 8;

    let direction = match sector {
        0 => FingerDirection::HorizontalRight,
        1 => FingerDirection::DiagonalUpRight,
        2 => FingerDirection::VerticalUp,
        3 => FingerDirection::DiagonalUpLeft,
        4 => FingerDirection::HorizontalLeft,
        5 => FingerDirection::DiagonalDownLeft,
        6 => FingerDirection::VerticalDown,
        _ => FingerDirection::DiagonalDownRight,
    };
    Some(direction)
}
