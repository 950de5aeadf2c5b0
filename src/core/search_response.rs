use serde::Serialize;
use std::fmt::Write;

use crate::ranking::Match;

/// Search response with ranked matches and metadata
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    /// Query as supplied by the caller
    pub query: String,

    /// Matches, best first
    pub matches: Vec<Match<'a>>,

    /// Size of the collection that was scanned
    pub total_records: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,

    /// Ranking method used
    pub ranking_method: String,
}

impl<'a> SearchResponse<'a> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn best(&self) -> Option<&Match<'a>> {
        self.matches.first()
    }

    /// Console listing, one block per match
    pub fn render_text(&self) -> String {
        render_matches(&self.matches)
    }

    /// Pretty JSON array of the matches
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.matches)
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.best() {
            Some(best) => format!(
                "{:?} -> {} match(es) of {}, best {} {:.3} ({}) [{}] {:.2}ms",
                self.query,
                self.matches.len(),
                self.total_records,
                best.record.display_name(),
                best.score,
                best.reason,
                self.ranking_method,
                self.latency_ms
            ),
            None => format!(
                "{:?} -> no match of {} [{}] {:.2}ms",
                self.query, self.total_records, self.ranking_method, self.latency_ms
            ),
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Round to 3 decimals with ties away from zero (`{:.3}` alone rounds ties to even)
fn round_half_up(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Render matches as `---` separated blocks, or `No results.`
pub fn render_matches(matches: &[Match<'_>]) -> String {
    if matches.is_empty() {
        return "No results.\n".to_string();
    }

    let mut out = String::new();
    for m in matches {
        let record = m.record;
        // writing to a String cannot fail
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "id: {}", or_dash(record.id.as_deref().unwrap_or_default()));
        let _ = writeln!(out, "key: {}", or_dash(&record.key));
        let _ = writeln!(out, "score: {:.3} ({})", round_half_up(m.score), m.reason);
        let _ = writeln!(out, "frag: {}", or_dash(&record.frag));
        if !record.tags.is_empty() {
            let _ = writeln!(out, "tags: {}", record.tags.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchOptions;
    use crate::core::Record;
    use crate::ranking::{rank, MatchReason};

    fn response<'a>(matches: Vec<Match<'a>>) -> SearchResponse<'a> {
        SearchResponse {
            query: "engine".to_string(),
            total_records: 5,
            matches,
            latency_ms: 0.12,
            ranking_method: "tiered".to_string(),
        }
    }

    #[test]
    fn test_render_no_results() {
        let resp = response(Vec::new());
        assert!(resp.is_empty());
        assert_eq!(resp.render_text(), "No results.\n");
        assert!(resp.display().contains("no match of 5"));
    }

    #[test]
    fn test_render_blocks() {
        let first = Record::new("engine/start", "Ignition sequence start")
            .with_id("t1")
            .with_tags(["engine", "start"]);
        let second = Record::new("", "Shutdown sequence");
        let resp = response(vec![
            Match::new(&first, 0.95, MatchReason::Prefix),
            Match::new(&second, 0.6666, MatchReason::Fuzzy),
        ]);

        let expected = "\
---
id: t1
key: engine/start
score: 0.950 (prefix)
frag: Ignition sequence start
tags: engine, start
---
id: -
key: -
score: 0.667 (fuzzy)
frag: Shutdown sequence
";
        assert_eq!(resp.render_text(), expected);
        assert_eq!(resp.best().unwrap().record.key, "engine/start");
    }

    #[test]
    fn test_score_ties_round_up() {
        let records = vec![Record::new("abcdefghijklmnop", "")];
        let matches = rank(&records, "abcdefghijklmXYZ", &SearchOptions::default());

        // 3 edits over 16 chars
        assert_eq!(matches[0].score, 0.8125);
        assert_eq!(matches[0].reason, MatchReason::Fuzzy);

        let text = response(matches).render_text();
        assert!(text.contains("score: 0.813 (fuzzy)"), "{}", text);
    }

    #[test]
    fn test_render_json() {
        let record = Record::new("brake/check", "Brake pressure check").with_id("brk/check");
        let resp = response(vec![Match::new(&record, 1.0, MatchReason::Exact)]);

        let value: serde_json::Value = serde_json::from_str(&resp.render_json().unwrap()).unwrap();
        assert_eq!(value[0]["id"], "brk/check");
        assert_eq!(value[0]["reason"], "exact");
        assert_eq!(value[0]["score"], 1.0);
    }
}
