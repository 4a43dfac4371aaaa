use crate::cli::types::ids::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;


pub const MISSING_TEAM: &str = "N/A";

fn default_active() -> bool {
    true
}

/// `top_terms_json` may be missing or `null`; both mean "no terms".
fn de_null_as_empty_terms<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, u64>> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Player record from `/players` and `/players/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Player {
    /// Team name for display; blank or missing teams show as `N/A`.
    pub fn team_label(&self) -> &str {
        self.team
            .as_deref()
            .filter(|team| !team.trim().is_empty())
            .unwrap_or(MISSING_TEAM)
    }
}

/// One day's aggregated sentiment for a player
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MetricPoint {
    pub date: NaiveDate,
    /// Weighted mean compound score, nominally in [-1, 1]
    pub avg_compound: f64,
    #[serde(default)]
    pub comment_count: Option<u32>,
    #[serde(default)]
    pub pos_share: Option<f64>,
    #[serde(default)]
    pub neg_share: Option<f64>,
}

impl MetricPoint {
    pub fn score_label(&self) -> String {
        format!("{:+.3}", self.avg_compound)
    }

    pub fn comment_count_label(&self) -> String {
        self.comment_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn pos_share_label(&self) -> String {
        share_label(self.pos_share)
    }

    pub fn neg_share_label(&self) -> String {
        share_label(self.neg_share)
    }
}

fn share_label(share: Option<f64>) -> String {
    share
        .map(|s| format!("{:.0}%", s * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

/// Narrative summary for a player on one day
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Narrative {
    pub date: NaiveDate,
    pub summary: String,
    /// Term -> occurrence count; the backend sends it unordered
    #[serde(default, deserialize_with = "de_null_as_empty_terms")]
    pub top_terms_json: BTreeMap<String, u64>,
}

impl Narrative {
    /// Terms by descending count, ties broken alphabetically.
    pub fn sorted_terms(&self) -> Vec<(&str, u64)> {
        let mut terms: Vec<(&str, u64)> = self
            .top_terms_json
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms
    }
}
