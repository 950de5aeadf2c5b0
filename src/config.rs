//! Search options with the defaults and clamps the ranker relies on.
//!
//! Values coming from outside (JSON, CLI flags) are always clamped on the
//! way in, so a `SearchOptions` in hand is valid: `threshold` in `[0, 1]`
//! and `limit >= 1`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default minimum score a match must reach
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default maximum number of matches returned
pub const DEFAULT_LIMIT: usize = 10;

/// Search options/configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOptions")]
pub struct SearchOptions {
    threshold: f64,
    limit: usize,
}

/// Unclamped wire form
#[derive(Deserialize)]
struct RawOptions {
    #[serde(default = "default_threshold")]
    threshold: f64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT as i64
}

impl From<RawOptions> for SearchOptions {
    fn from(raw: RawOptions) -> Self {
        Self {
            threshold: clamp_threshold(raw.threshold),
            limit: clamp_limit(raw.limit),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn new(threshold: f64, limit: usize) -> Self {
        Self::default().with_threshold(threshold).with_limit(limit)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Parse options from a JSON object, e.g. `{"threshold": 0.5}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit.max(1)).unwrap_or(usize::MAX)
}

/// Longest leading numeric prefix of `text` after leading whitespace:
/// optional sign and digits, plus fraction and exponent when `fraction` is set.
///
/// Empty when no digit is found, e.g. `"x5"` or `"-"`.
fn numeric_prefix(text: &str, fraction: bool) -> &str {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut has_digits = end > int_start;

    if fraction {
        if bytes.get(end) == Some(&b'.') {
            let frac_end = digits_from(end + 1);
            if has_digits || frac_end > end + 1 {
                has_digits = true;
                end = frac_end;
            }
        }

        if has_digits && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = digits_from(exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
    }

    if has_digits {
        &s[..end]
    } else {
        ""
    }
}

/// Lenient threshold flag parsing: reads the leading number (`"0.5x"` is
/// 0.5), anything without one counts as 0.
pub fn parse_threshold(text: &str) -> f64 {
    let prefix = numeric_prefix(text, true);

    let value = match prefix.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            let unsigned = text.trim_start().trim_start_matches(['+', '-']);
            if unsigned.starts_with("Infinity") {
                if text.trim_start().starts_with('-') {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            } else {
                0.0
            }
        }
    };

    clamp_threshold(value)
}

/// Lenient limit flag parsing: reads the leading integer (`"3.7"` is 3,
/// `"5x"` is 5). No integer or 0 falls back to the default, negatives
/// clamp to 1.
pub fn parse_limit(text: &str) -> usize {
    let prefix = numeric_prefix(text, false);

    match prefix.parse::<i64>() {
        Ok(0) => DEFAULT_LIMIT,
        Ok(n) => clamp_limit(n),
        Err(_) if prefix.is_empty() => DEFAULT_LIMIT,
        // more digits than fit
        Err(_) if prefix.starts_with('-') => 1,
        Err(_) => usize::MAX,
    }
}
