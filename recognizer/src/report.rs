//! Driver loop: generate, classify and report test gestures.

use std::io::{self, Write};

use clap::ValueEnum;
use tracing::{debug, info};

use crate::gesture::landmarks::HandLandmark;
use crate::gesture::{generate, GestureLabel, HandPose, TestGesture};

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Test Gesture: <name>, Recognized as: <label>`
    #[default]
    Text,
    /// `(:gesture "<name>" :label "<label>")`
    Sexp,
}

/// One classified test gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Gesture name as given to the generator.
    pub gesture: String,
    pub label: GestureLabel,
}

impl Recognition {
    pub fn to_line(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!(
                "Test Gesture: {}, Recognized as: {}",
                self.gesture, self.label
            ),
            OutputFormat::Sexp => format!(
                "(:gesture {} :label {})",
                sexp_string(&self.gesture),
                sexp_string(self.label.as_str())
            ),
        }
    }
}

/// Quote a string for s-expression output. Only `\\` and `"` are escaped.
fn sexp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Default gesture names, in report order.
pub fn default_gestures() -> Vec<String> {
    TestGesture::ALL
        .iter()
        .map(|g| g.as_str().to_string())
        .collect()
}

/// Generate and classify each named gesture, in order.
pub fn run<S: AsRef<str>>(gestures: &[S]) -> Vec<Recognition> {
    gestures
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let pose = HandPose::new(generate(name));
            if let Some(dists) = pose.fingertip_distances() {
                for (tip, d) in HandLandmark::fingertip_landmarks().iter().zip(dists) {
                    debug!("{}: {} at {:.1} from palm", name, tip.as_str(), d);
                }
            }
            let label = pose.recognize();
            info!("{} -> {}", name, label);
            Recognition {
                gesture: name.to_string(),
                label,
            }
        })
        .collect()
}

/// Write one line per recognition.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[Recognition],
    format: OutputFormat,
) -> io::Result<()> {
    for r in results {
        writeln!(out, "{}", r.to_line(format))?;
    }
    out.flush()
}
