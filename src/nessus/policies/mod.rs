mod severity;

pub use severity::{ScoreLabel, SeverityPolicy};
