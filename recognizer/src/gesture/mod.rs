//! Gesture subsystem: landmark model, synthetic data and classification.
//!
//! Provides:
//! - `landmarks`: 21-point hand landmark indices, `Point`, and distance
//! - `generator`: synthetic landmark sets for the built-in test gestures
//! - `classifier`: ordered threshold rules producing a `GestureLabel`

pub mod classifier;
pub mod generator;
pub mod landmarks;

pub use classifier::{GestureClassifier, GestureLabel, HandPose};
pub use generator::{generate, TestGesture};
