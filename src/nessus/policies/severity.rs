use serde::Serialize;
use std::fmt;

/// Label derived from a numeric score; always recomputed, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreLabel {
    None,
    Info,
    Low,
    Medium,
    High,
    Critical,
    /// The score is numeric but outside every band
    Unknown,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::None => "None",
            ScoreLabel::Info => "Info",
            ScoreLabel::Low => "Low",
            ScoreLabel::Medium => "Medium",
            ScoreLabel::High => "High",
            ScoreLabel::Critical => "Critical",
            ScoreLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// SeverityPolicy maps scanner scores to labels
///
/// CVSSv2 and the newer scoring systems (CVSSv3, CVSSv4, VPR) use different
/// bands: v2 reserves Critical for exactly 10.0, the others start Critical
/// at 9.0. The two schemes are kept apart on purpose.
///
/// | Score      | None | Low       | Medium     | High        | Critical    |
/// |------------|------|-----------|------------|-------------|-------------|
/// | CVSSv2     | 0.0  | (0, 4)    | [4, 7)     | [7, 10)     | 10.0        |
/// | v3/v4/VPR  | 0.0  | (0, 4)    | [4, 7)     | [7, 9)      | [9, 10]     |
pub struct SeverityPolicy;

impl SeverityPolicy {
    /// Severity ordinal recorded on each finding (0-4)
    pub fn severity_label(severity: i64) -> ScoreLabel {
        match severity {
            0 => ScoreLabel::Info,
            1 => ScoreLabel::Low,
            2 => ScoreLabel::Medium,
            3 => ScoreLabel::High,
            4 => ScoreLabel::Critical,
            _ => ScoreLabel::Unknown,
        }
    }

    pub fn cvss_v2(score: f64) -> ScoreLabel {
        match score {
            s if s == 0.0 => ScoreLabel::None,
            s if s > 0.0 && s < 4.0 => ScoreLabel::Low,
            s if (4.0..7.0).contains(&s) => ScoreLabel::Medium,
            s if (7.0..10.0).contains(&s) => ScoreLabel::High,
            s if s == 10.0 => ScoreLabel::Critical,
            _ => ScoreLabel::Unknown,
        }
    }

    pub fn cvss_v3(score: f64) -> ScoreLabel {
        Self::modern_bands(score)
    }

    pub fn cvss_v4(score: f64) -> ScoreLabel {
        Self::modern_bands(score)
    }

    /// Vulnerability Priority Rating
    pub fn vpr(score: f64) -> ScoreLabel {
        Self::modern_bands(score)
    }

    fn modern_bands(score: f64) -> ScoreLabel {
        match score {
            s if s == 0.0 => ScoreLabel::None,
            s if s > 0.0 && s < 4.0 => ScoreLabel::Low,
            s if (4.0..7.0).contains(&s) => ScoreLabel::Medium,
            s if (7.0..9.0).contains(&s) => ScoreLabel::High,
            s if (9.0..=10.0).contains(&s) => ScoreLabel::Critical,
            _ => ScoreLabel::Unknown,
        }
    }

    /// EPSS probability in [0, 1] as a percentage with one decimal, e.g. `15.3%`
    pub fn epss_percent(score: f64) -> String {
        format!("{:.1}%", score * 100.0)
    }

    /// Parses a score as stored in a report field; `None` for missing or
    /// non-numeric values
    pub fn parse_score(raw: Option<&str>) -> Option<f64> {
        raw?.trim().parse::<f64>().ok().filter(|score| score.is_finite())
    }

    /// CVSSv2 label of a raw field value; empty string when the value is
    /// missing or non-numeric, which is distinct from `Unknown`
    pub fn cvss_v2_text(raw: Option<&str>) -> String {
        Self::label_text(raw, Self::cvss_v2)
    }

    pub fn cvss_v3_text(raw: Option<&str>) -> String {
        Self::label_text(raw, Self::cvss_v3)
    }

    pub fn cvss_v4_text(raw: Option<&str>) -> String {
        Self::label_text(raw, Self::cvss_v4)
    }

    pub fn vpr_text(raw: Option<&str>) -> String {
        Self::label_text(raw, Self::vpr)
    }

    pub fn epss_text(raw: Option<&str>) -> String {
        Self::parse_score(raw)
            .map(Self::epss_percent)
            .unwrap_or_default()
    }

    fn label_text(raw: Option<&str>, classify: fn(f64) -> ScoreLabel) -> String {
        Self::parse_score(raw)
            .map(|score| classify(score).to_string())
            .unwrap_or_default()
    }
}
