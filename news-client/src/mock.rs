use crate::Article;
use chrono::{Duration, Utc};

const HEADLINES: [(&str, &str); 5] = [
    (
        "sector outlook brightens as analysts revise estimates upward",
        "A roundup of analyst commentary pointing to improving fundamentals across the group.",
    ),
    (
        "earnings season preview: what to watch this quarter",
        "Key reporting dates, consensus figures and the themes likely to move the group.",
    ),
    (
        "regulatory shift could reshape competitive landscape",
        "Proposed rule changes have incumbents and challengers repositioning.",
    ),
    (
        "M&A chatter picks up after latest industry conference",
        "Bankers report renewed interest in consolidation plays at the mid-cap level.",
    ),
    (
        "capital spending trends diverge across the industry",
        "Survey data shows a widening gap between leaders and laggards on investment.",
    ),
];

const SOURCES: [&str; 5] = [
    "Market Brief",
    "Sector Daily",
    "The Capital Desk",
    "Industry Wire",
    "Finance Observer",
];

/// Human-readable label derived from a subsector id, e.g.
/// "software-saas" becomes "Software Saas".
fn pretty_label(subsector_id: &str) -> String {
    subsector_id
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate placeholder articles for a subsector, spread across the
/// requested day window. Titles, sources and ids derive only from the
/// inputs; timestamps are relative to now.
pub fn mock_articles(subsector_id: &str, days: u32) -> Vec<Article> {
    let label = pretty_label(subsector_id);
    let window_hours = i64::from(days.max(1)) * 24;
    let step = (window_hours / HEADLINES.len() as i64).max(1);
    let now = Utc::now();

    HEADLINES
        .iter()
        .enumerate()
        .map(|(i, (headline, description))| Article {
            id: format!("mock-{}-{}", subsector_id, i),
            title: format!("{}: {}", label, headline),
            description: (*description).to_string(),
            source: SOURCES[i % SOURCES.len()].to_string(),
            url: format!("https://news.example.com/{}/{}", subsector_id, i),
            published_at: (now - Duration::hours(step * i as i64)).to_rfc3339(),
            is_mock: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_articles_are_flagged_and_non_empty() {
        let articles = mock_articles("software-saas", 7);

        assert!(!articles.is_empty());
        assert!(articles.iter().all(|a| a.is_mock));
        assert!(articles.iter().all(|a| !a.title.is_empty()));
    }

    #[test]
    fn test_mock_ids_derive_from_subsector() {
        let articles = mock_articles("banks", 7);
        assert!(articles.iter().all(|a| a.id.starts_with("mock-banks-")));
    }

    #[test]
    fn test_titles_carry_subsector_label() {
        let articles = mock_articles("software-saas", 7);
        assert!(articles.iter().all(|a| a.title.starts_with("Software Saas: ")));
    }

    #[test]
    fn test_timestamps_stay_within_window() {
        let articles = mock_articles("banks", 3);
        let cutoff = Utc::now() - Duration::days(3) - Duration::minutes(1);

        for article in articles {
            let published = chrono::DateTime::parse_from_rfc3339(&article.published_at).unwrap();
            assert!(published.with_timezone(&Utc) > cutoff);
        }
    }
}
