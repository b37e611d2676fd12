//! Static gesture classification from 2D hand landmarks.
//!
//! Classifies closed fist, open palm, pointing index, thumbs up, and peace
//! sign poses by comparing fingertip-to-palm distances against fixed
//! thresholds. Rules are evaluated in a fixed order and the first match wins.

use std::fmt;

use tracing::debug;

use super::landmarks::{distance, HandLandmark, Point, LANDMARK_COUNT};

// ── Labels ─────────────────────────────────────────────────

/// Result of classifying one landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    /// Every fingertip close to the palm.
    ClosedFist,
    /// Every fingertip far from the palm.
    OpenPalm,
    /// Index finger extended, middle/ring/pinky curled.
    PointingIndex,
    /// Thumb tip above its IP joint, other fingers curled.
    ThumbsUp,
    /// Index and middle extended, ring and pinky curled.
    PeaceSign,
    /// No rule matched.
    Unknown,
    /// Landmark set did not contain exactly 21 points.
    InvalidInput,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClosedFist => "Closed Fist",
            Self::OpenPalm => "Open Palm",
            Self::PointingIndex => "Pointing Index",
            Self::ThumbsUp => "Thumbs Up",
            Self::PeaceSign => "Peace Sign",
            Self::Unknown => "Unknown Gesture",
            Self::InvalidInput => "Invalid input: Expected 21 landmarks",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Config ─────────────────────────────────────────────────

/// Distance thresholds, in landmark coordinate units.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// A fingertip at or under this distance from the palm counts as curled.
    pub curled_threshold: f64,
    /// A fingertip at or over this distance from the palm counts as extended.
    pub extended_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            curled_threshold: 50.0,
            extended_threshold: 100.0,
        }
    }
}

// ── Rules ──────────────────────────────────────────────────

type Predicate = fn(&GestureConfig, &[Point]) -> bool;

/// Rule table in evaluation order.
const RULES: [(Predicate, GestureLabel); 5] = [
    (is_closed_fist, GestureLabel::ClosedFist),
    (is_open_palm, GestureLabel::OpenPalm),
    (is_pointing_index, GestureLabel::PointingIndex),
    (is_thumbs_up, GestureLabel::ThumbsUp),
    (is_peace_sign, GestureLabel::PeaceSign),
];

/// Distance from a landmark to the palm reference.
fn palm_distance(landmarks: &[Point], landmark: HandLandmark) -> f64 {
    distance(
        &landmarks[landmark.index()],
        &landmarks[HandLandmark::Wrist.index()],
    )
}

fn is_closed_fist(config: &GestureConfig, landmarks: &[Point]) -> bool {
    HandLandmark::fingertip_landmarks()
        .iter()
        .all(|&tip| palm_distance(landmarks, tip) <= config.curled_threshold)
}

fn is_open_palm(config: &GestureConfig, landmarks: &[Point]) -> bool {
    HandLandmark::fingertip_landmarks()
        .iter()
        .all(|&tip| palm_distance(landmarks, tip) >= config.extended_threshold)
}

fn is_pointing_index(config: &GestureConfig, landmarks: &[Point]) -> bool {
    let d = |tip| palm_distance(landmarks, tip);
    d(HandLandmark::IndexTip) > config.extended_threshold
        && d(HandLandmark::MiddleTip) < config.curled_threshold
        && d(HandLandmark::RingTip) < config.curled_threshold
        && d(HandLandmark::PinkyTip) < config.curled_threshold
}

fn is_thumbs_up(config: &GestureConfig, landmarks: &[Point]) -> bool {
    let d = |tip| palm_distance(landmarks, tip);
    // Image coordinates: smaller y is higher.
    landmarks[HandLandmark::ThumbTip.index()].y < landmarks[HandLandmark::ThumbIp.index()].y
        && d(HandLandmark::IndexTip) < config.curled_threshold
        && d(HandLandmark::MiddleTip) < config.curled_threshold
        && d(HandLandmark::RingTip) < config.curled_threshold
        && d(HandLandmark::PinkyTip) < config.curled_threshold
}

fn is_peace_sign(config: &GestureConfig, landmarks: &[Point]) -> bool {
    let d = |tip| palm_distance(landmarks, tip);
    d(HandLandmark::IndexTip) > config.extended_threshold
        && d(HandLandmark::MiddleTip) > config.extended_threshold
        && d(HandLandmark::RingTip) < config.curled_threshold
        && d(HandLandmark::PinkyTip) < config.curled_threshold
}

// ── Classifier ─────────────────────────────────────────────

/// Rule-based gesture classifier.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    pub config: GestureConfig,
}

impl GestureClassifier {
    /// Create a classifier with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Classify a landmark set.
    ///
    /// A set without exactly 21 points yields [`GestureLabel::InvalidInput`]
    /// and no rule is evaluated.
    pub fn classify(&self, landmarks: &[Point]) -> GestureLabel {
        if landmarks.len() != LANDMARK_COUNT {
            debug!(
                "Gesture classifier: expected {} landmarks, got {}",
                LANDMARK_COUNT,
                landmarks.len(),
            );
            return GestureLabel::InvalidInput;
        }

        for (predicate, label) in RULES {
            if predicate(&self.config, landmarks) {
                debug!("Gesture matched: {:?}", label);
                return label;
            }
        }

        GestureLabel::Unknown
    }

    /// Generate s-expression for the active thresholds.
    pub fn config_sexp(&self) -> String {
        format!(
            "(:curled-threshold {:.1} :extended-threshold {:.1})",
            self.config.curled_threshold, self.config.extended_threshold,
        )
    }
}

/// Classify a landmark set with the default thresholds.
pub fn recognize(landmarks: &[Point]) -> GestureLabel {
    GestureClassifier::new().classify(landmarks)
}

// ── Hand pose ──────────────────────────────────────────────

/// A landmark set awaiting classification.
#[derive(Debug, Clone, PartialEq)]
pub struct HandPose {
    landmarks: Vec<Point>,
}

impl HandPose {
    pub fn new(landmarks: Vec<Point>) -> Self {
        Self { landmarks }
    }

    pub fn landmarks(&self) -> &[Point] {
        &self.landmarks
    }

    /// Classify this pose with the default thresholds.
    pub fn recognize(&self) -> GestureLabel {
        recognize(&self.landmarks)
    }

    /// Fingertip-to-palm distances, thumb to pinky.
    ///
    /// `None` when the pose does not hold exactly 21 landmarks.
    pub fn fingertip_distances(&self) -> Option<[f64; 5]> {
        if self.landmarks.len() != LANDMARK_COUNT {
            return None;
        }
        Some(HandLandmark::fingertip_landmarks().map(|tip| palm_distance(&self.landmarks, tip)))
    }
}

// ── Test helpers ───────────────────────────────────────────

/// All 21 landmarks at the origin.
#[cfg(test)]
fn make_hand() -> Vec<Point> {
    vec![Point::default(); LANDMARK_COUNT]
}

#[cfg(test)]
fn set_landmark(landmarks: &mut [Point], landmark: HandLandmark, x: i32, y: i32) {
    landmarks[landmark.index()] = Point::new(x, y);
}

/// Place the middle, ring and pinky tips 10 units from the palm.
#[cfg(test)]
fn curl_lower_fingers(landmarks: &mut [Point]) {
    set_landmark(landmarks, HandLandmark::MiddleTip, 10, 0);
    set_landmark(landmarks, HandLandmark::RingTip, 10, 0);
    set_landmark(landmarks, HandLandmark::PinkyTip, 10, 0);
}

// ── Tests ──────────────────────────────────────────────────
