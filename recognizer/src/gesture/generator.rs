//! Synthetic landmark sets for the built-in test gestures.
//!
//! Every set starts from a diagonal progression and applies a few explicit
//! fingertip overrides. The generated data is not guaranteed to satisfy the
//! classifier rule of the gesture it is named after.

use tracing::debug;

use super::landmarks::{HandLandmark, Point, LANDMARK_COUNT};

/// Gestures the generator knows how to fabricate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestGesture {
    Fist,
    OpenPalm,
    Pointing,
    ThumbsUp,
    Peace,
}

impl TestGesture {
    /// All test gestures in driver order.
    pub const ALL: [TestGesture; 5] = [
        Self::Fist,
        Self::OpenPalm,
        Self::Pointing,
        Self::ThumbsUp,
        Self::Peace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fist => "fist",
            Self::OpenPalm => "open_palm",
            Self::Pointing => "pointing",
            Self::ThumbsUp => "thumbs_up",
            Self::Peace => "peace",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "fist" => Some(Self::Fist),
            "open_palm" => Some(Self::OpenPalm),
            "pointing" => Some(Self::Pointing),
            "thumbs_up" => Some(Self::ThumbsUp),
            "peace" => Some(Self::Peace),
            _ => None,
        }
    }

    /// Build the landmark set for this gesture.
    pub fn landmarks(&self) -> Vec<Point> {
        let step = match self {
            Self::OpenPalm => 10,
            _ => 5,
        };
        let mut landmarks = diagonal(step);

        match self {
            Self::Fist | Self::OpenPalm => {}
            Self::Pointing => {
                landmarks[HandLandmark::IndexTip.index()] = Point::new(80, 80);
            }
            Self::ThumbsUp => {
                // Smaller y is higher: lift the tip above the IP joint.
                landmarks[HandLandmark::ThumbTip.index()] = Point::new(20, 0);
            }
            Self::Peace => {
                landmarks[HandLandmark::IndexTip.index()] = Point::new(80, 80);
                landmarks[HandLandmark::MiddleTip.index()] = Point::new(120, 120);
            }
        }

        landmarks
    }
}

/// `point[i] = (i * step, i * step)` for every landmark.
fn diagonal(step: i32) -> Vec<Point> {
    (0..LANDMARK_COUNT as i32)
        .map(|i| Point::new(i * step, i * step))
        .collect()
}

/// Generate landmarks for a gesture by name.
///
/// Unrecognised names are not an error: they produce 21 points at the
/// origin, which makes every fingertip distance zero.
pub fn generate(name: &str) -> Vec<Point> {
    match TestGesture::from_name(name) {
        Some(gesture) => gesture.landmarks(),
        None => {
            debug!("unknown test gesture {:?}, using all-zero landmarks", name);
            vec![Point::default(); LANDMARK_COUNT]
        }
    }
}
