use std::collections::HashMap;

use super::*;

fn dataset(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Dataset parsing
// =============================================================

#[test]
fn minimal_dataset_uses_defaults() {
    let config = PanelConfig::from_dataset(dataset(&[("articleId", "3")])).unwrap();
    assert_eq!(config.article_id, ArticleId::from("3"));
    assert_eq!(config.articles_base, "/api/articles");
    assert!(config.author.is_none());
    assert!(config.poll_interval.is_none());
}

#[test]
fn full_dataset_is_read() {
    let config = PanelConfig::from_dataset(dataset(&[
        ("articleId", " 3 "),
        ("userId", "7"),
        ("apiBase", "https://blog.local/api/articles/"),
        ("pollInterval", "2000"),
    ]))
    .unwrap();
    assert_eq!(config.article_id.as_str(), "3");
    assert_eq!(config.author, Some(AuthorId::from("7")));
    assert_eq!(config.articles_base, "https://blog.local/api/articles");
    assert_eq!(config.poll_interval, Some(Duration::from_millis(2000)));
}

#[test]
fn blank_user_id_is_anonymous() {
    let config = PanelConfig::from_dataset(dataset(&[("articleId", "3"), ("userId", "  ")])).unwrap();
    assert!(config.author.is_none());
}

// =============================================================
// Missing and odd values
// =============================================================

#[test]
fn missing_article_id_is_rejected() {
    assert_eq!(PanelConfig::from_dataset(dataset(&[("userId", "7")])), Err(ConfigError::MissingArticleId));
    assert_eq!(PanelConfig::from_dataset(dataset(&[("articleId", "")])), Err(ConfigError::MissingArticleId));
}

#[test]
fn zero_poll_interval_disables_polling() {
    let config = PanelConfig::from_dataset(dataset(&[("articleId", "3"), ("pollInterval", "0")])).unwrap();
    assert!(config.poll_interval.is_none());
}

#[test]
fn non_numeric_poll_interval_is_rejected() {
    assert_eq!(
        PanelConfig::from_dataset(dataset(&[("articleId", "3"), ("pollInterval", "2s")])),
        Err(ConfigError::InvalidPollInterval("2s".to_owned()))
    );
}
