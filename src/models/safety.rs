//! Safety models built from recent crime news

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article returned by the news provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
    /// Publishing outlet name
    pub source: Option<String>,
}

impl NewsArticle {
    /// Title and description joined and lower-cased for keyword matching
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        if let Some(description) = &self.description {
            text.push(' ');
            text.push_str(&description.to_lowercase());
        }
        text
    }
}

/// Articles matching a city crime search, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyPayload {
    pub articles: Vec<NewsArticle>,
    /// Result count reported by the provider before relevance filtering
    pub total_results: u32,
}

/// Discrete risk label derived from the safety score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Risk tier for a safety score: >=80 Low, >=60 Medium, >=40 High
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskLevel::Low,
            60..=79 => RiskLevel::Medium,
            40..=59 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored safety assessment for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRecord {
    /// Number of relevant crime articles
    pub article_count: usize,
    /// Up to three most recent relevant articles
    pub recent_articles: Vec<NewsArticle>,
    /// Safety sub-score (0-100)
    pub score: u8,
    pub risk_level: RiskLevel,
    /// Keyword severity adjustment applied to the score (-10..=10)
    pub severity_adjustment: i32,
}
