//! Safety scoring from recent crime news
//!
//! A destination starts at 100 and loses points for every relevant crime
//! article, with a diminishing marginal penalty that saturates at 40. The
//! wording of the articles then nudges the score by up to ten points in
//! either direction: violent crime lowers it, petty incidents raise it.

use tracing::debug;

use crate::models::{NewsArticle, RiskLevel, SafetyPayload, SafetyRecord};

/// Number of relevant articles kept on the record
pub const RECENT_ARTICLE_SAMPLE: usize = 3;

/// Deduction for 0..=5 articles; beyond that two points per article up to 40
const COUNT_DEDUCTIONS: [u32; 6] = [0, 5, 12, 18, 25, 32];
const MAX_COUNT_DEDUCTION: u32 = 40;

const MAX_SEVERITY_ADJUSTMENT: i32 = 10;

const HIGH_SEVERITY: &[&str] = &[
    "shooting",
    "murder",
    "homicide",
    "terrorism",
    "bomb",
    "stabbing",
    "kidnapping",
];

const MEDIUM_SEVERITY: &[&str] = &[
    "assault",
    "robbery",
    "theft",
    "burglary",
    "domestic violence",
    "sexual assault",
];

const LOW_SEVERITY: &[&str] = &["vandalism", "dispute", "argument", "fraud"];

/// Severity tiers in matching order with their per-article adjustment
const SEVERITY_TIERS: [(&[&str], i32); 3] = [
    (HIGH_SEVERITY, -3),
    (MEDIUM_SEVERITY, -1),
    (LOW_SEVERITY, 1),
];

/// An article must mention at least one of these to count as crime news
const CRIME_KEYWORDS: &[&str] = &[
    "crime",
    "criminal",
    "police",
    "arrest",
    "suspect",
    "violence",
    "violent",
    "shooting",
    "murder",
    "homicide",
    "terrorism",
    "bomb",
    "stabbing",
    "kidnapping",
    "assault",
    "robbery",
    "theft",
    "burglary",
    "vandalism",
    "fraud",
];

/// Articles on these topics are dropped even when they mention crime words
const IRRELEVANT_TOPICS: &[&str] = &[
    "entertainment",
    "celebrity",
    "movie",
    "film",
    "concert",
    "album",
    "sports",
    "football",
    "basketball",
    "baseball",
    "soccer",
    "tournament",
    "business",
    "stock",
    "earnings",
    "economy",
    "politics",
    "election",
    "campaign",
    "fashion",
    "recipe",
    "video game",
];

/// Score a city's crime news.
///
/// Only articles that pass [`is_relevant_article`] are counted and scanned
/// for severity.
#[must_use]
pub fn score_safety(city: &str, payload: SafetyPayload) -> SafetyRecord {
    let total_articles = payload.articles.len();
    let payload_total = payload.total_results;
    let relevant: Vec<NewsArticle> = payload
        .articles
        .into_iter()
        .filter(|article| is_relevant_article(city, article))
        .collect();

    let article_count = relevant.len();
    let adjustment = severity_adjustment(&relevant);
    let (score, risk_level) = safety_score(article_count, &relevant);

    debug!(
        "Safety score {} ({}) for '{}': {} of {} articles relevant ({} reported), severity {:+}",
        score, risk_level, city, article_count, total_articles, payload_total, adjustment
    );

    let recent_articles = relevant.into_iter().take(RECENT_ARTICLE_SAMPLE).collect();

    SafetyRecord {
        article_count,
        recent_articles,
        score,
        risk_level,
        severity_adjustment: adjustment,
    }
}

/// Safety score and risk level for `article_count` crime articles
#[must_use]
pub fn safety_score(article_count: usize, articles: &[NewsArticle]) -> (u8, RiskLevel) {
    let deduction = i64::from(count_deduction(article_count));
    let adjustment = i64::from(severity_adjustment(articles));
    let score = (100 - deduction + adjustment).clamp(0, 100);
    let score = u8::try_from(score).unwrap_or(0);
    (score, RiskLevel::from_score(score))
}

fn count_deduction(article_count: usize) -> u32 {
    match COUNT_DEDUCTIONS.get(article_count) {
        Some(deduction) => *deduction,
        None => {
            let extra = u32::try_from(article_count - 5).unwrap_or(u32::MAX);
            extra
                .saturating_mul(2)
                .saturating_add(32)
                .min(MAX_COUNT_DEDUCTION)
        }
    }
}

/// Net keyword severity across articles, clamped to -10..=10.
///
/// Each article contributes once, through the most severe tier it matches.
#[must_use]
pub fn severity_adjustment(articles: &[NewsArticle]) -> i32 {
    let total: i32 = articles
        .iter()
        .map(|article| {
            let text = article.searchable_text();
            let words = split_words(&text);
            SEVERITY_TIERS
                .iter()
                .find(|(keywords, _)| contains_any(&words, keywords))
                .map_or(0, |(_, adjustment)| *adjustment)
        })
        .sum();
    total.clamp(-MAX_SEVERITY_ADJUSTMENT, MAX_SEVERITY_ADJUSTMENT)
}

/// Whether an article is crime news about `city`.
///
/// The article must mention the city (or the part before its first comma,
/// so "Paris, France" matches "Paris"), contain a crime keyword, and avoid
/// unrelated topics such as sports or business. Matching is by whole word,
/// so "Stockholm" never matches "stock".
#[must_use]
pub fn is_relevant_article(city: &str, article: &NewsArticle) -> bool {
    let text = article.searchable_text();
    let words = split_words(&text);
    mentions_city(&words, city)
        && contains_any(&words, CRIME_KEYWORDS)
        && !contains_any(&words, IRRELEVANT_TOPICS)
}

/// Keyword endings still counted as the keyword ("arrests", "bombing")
const INFLECTIONS: &[&str] = &["s", "es", "ed", "ing"];

fn split_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

fn mentions_city(words: &[&str], city: &str) -> bool {
    let city = city.to_lowercase();
    let short_name = city.split(',').next().unwrap_or_default();
    [city.as_str(), short_name].into_iter().any(|name| {
        let name_words = split_words(name);
        !name_words.is_empty()
            && words
                .windows(name_words.len())
                .any(|window| window == name_words.as_slice())
    })
}

fn matches_keyword(word: &str, keyword: &str) -> bool {
    word.strip_prefix(keyword)
        .is_some_and(|rest| rest.is_empty() || INFLECTIONS.contains(&rest))
}

/// Whether `phrase` occurs as a run of whole words. Only its last word may
/// be inflected.
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split_whitespace().collect();
    let Some((last, leading)) = parts.split_last() else {
        return false;
    };
    words.windows(parts.len()).any(|window| {
        &window[..leading.len()] == leading && matches_keyword(window[leading.len()], last)
    })
}

fn contains_any(words: &[&str], keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| contains_phrase(words, keyword))
}
