pub mod geometry;

use nalgebra::Point3;

use crate::error::{Error, Result};

/// Number of landmarks a hand-pose detector reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;

// define the HandLandmarks trait
pub trait HandLandmarks: Send + Sync {
    fn get_landmark(&self, index: usize) -> Option<Point3<f32>>;
    fn get_landmarks(&self) -> Vec<Point3<f32>>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Position of this finger in per-finger tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Landmark indices of this finger, ordered from base to tip.
    pub fn indices(&self) -> [usize; 4] {
        match self {
            Finger::Thumb => [1, 2, 3, 4],
            Finger::Index => [5, 6, 7, 8],
            Finger::Middle => [9, 10, 11, 12],
            Finger::Ring => [13, 14, 15, 16],
            Finger::Pinky => [17, 18, 19, 20],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// One detected hand pose: 21 points in the detector's native coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    points: [Point3<f32>; HAND_LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn from_points(points: &[[f32; 3]]) -> Result<LandmarkFrame> {
        if points.len() != HAND_LANDMARK_COUNT {
            return Err(Error::LandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                found: points.len(),
            });
        }

        let mut frame = LandmarkFrame {
            points: [Point3::origin(); HAND_LANDMARK_COUNT],
        };
        for (slot, &[x, y, z]) in frame.points.iter_mut().zip(points) {
            *slot = Point3::new(x, y, z);
        }
        Ok(frame)
    }

    // construct from 1D vector of 21 3D points (flattened 3D points)
    pub fn from_flat(points: &[f32]) -> Result<LandmarkFrame> {
        if points.len() != HAND_LANDMARK_COUNT * 3 {
            return Err(Error::LandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                found: points.len() / 3,
            });
        }

        let triples: Vec<[f32; 3]> = points
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect();
        Self::from_points(&triples)
    }

    /// Copies any landmark source into a frame, rejecting sources that do not
    /// provide every hand joint.
    pub fn from_landmarks<L: HandLandmarks + ?Sized>(landmarks: &L) -> Result<LandmarkFrame> {
        if landmarks.len() != HAND_LANDMARK_COUNT {
            return Err(Error::LandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                found: landmarks.len(),
            });
        }

        let mut frame = LandmarkFrame {
            points: [Point3::origin(); HAND_LANDMARK_COUNT],
        };
        for (i, slot) in frame.points.iter_mut().enumerate() {
            *slot = landmarks.get_landmark(i).ok_or(Error::LandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                found: i,
            })?;
        }
        Ok(frame)
    }

    pub fn wrist(&self) -> Point3<f32> {
        self.points[WRIST]
    }

    /// The four points of `finger`, base first.
    pub fn get_finger(&self, finger: Finger) -> [Point3<f32>; 4] {
        finger.indices().map(|i| self.points[i])
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }
}

impl TryFrom<&[[f32; 3]]> for LandmarkFrame {
    type Error = Error;

    fn try_from(points: &[[f32; 3]]) -> Result<Self> {
        Self::from_points(points)
    }
}

impl HandLandmarks for [[f32; 3]] {
    fn get_landmark(&self, index: usize) -> Option<Point3<f32>> {
        self.get(index).map(|&[x, y, z]| Point3::new(x, y, z))
    }

    fn get_landmarks(&self) -> Vec<Point3<f32>> {
        self.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect()
    }

    fn len(&self) -> usize {
        <[[f32; 3]]>::len(self)
    }
}

impl HandLandmarks for Vec<[f32; 3]> {
    fn get_landmark(&self, index: usize) -> Option<Point3<f32>> {
        self.as_slice().get_landmark(index)
    }

    fn get_landmarks(&self) -> Vec<Point3<f32>> {
        self.as_slice().get_landmarks()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl HandLandmarks for LandmarkFrame {
    fn get_landmark(&self, index: usize) -> Option<Point3<f32>> {
        self.points.get(index).copied()
    }

    fn get_landmarks(&self) -> Vec<Point3<f32>> {
        self.points.to_vec()
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
