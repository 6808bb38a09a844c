use crate::article::application::domain::article::Article;

/// Category value that means "no filter".
pub const ALL_CATEGORIES: &str = "all";

pub fn public_only(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().filter(Article::is_public).collect()
}

/// `None`, blank or `"all"` keeps everything.
pub fn in_category(articles: Vec<Article>, category: Option<&str>) -> Vec<Article> {
    match category.map(str::trim) {
        None | Some("") | Some(ALL_CATEGORIES) => articles,
        Some(category) => articles
            .into_iter()
            .filter(|a| a.category == category)
            .collect(),
    }
}

/// Featured articles that are also public.
pub fn featured(articles: Vec<Article>) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|a| a.featured && a.is_public())
        .collect()
}

/// Stable: equal dates keep their relative order.
pub fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::application::domain::article::Visibility;
    use chrono::{TimeZone, Utc};

    fn article(id: &str, visibility: Visibility, category: &str, featured: bool) -> Article {
        Article {
            id: id.into(),
            visibility,
            category: category.into(),
            featured,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Article> {
        vec![
            article("a", Visibility::Public, "rust", false),
            article("b", Visibility::Draft, "rust", true),
            article("c", Visibility::Private, "web", false),
            article("d", Visibility::Public, "web", true),
        ]
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_public_only_drops_draft_and_private_in_order() {
        assert_eq!(ids(&public_only(sample())), vec!["a", "d"]);
    }

    #[test]
    fn test_public_only_is_idempotent() {
        let once = public_only(sample());
        let twice = public_only(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_in_category() {
        assert_eq!(ids(&in_category(sample(), Some("web"))), vec!["c", "d"]);
        assert_eq!(in_category(sample(), Some("all")).len(), 4);
        assert_eq!(in_category(sample(), None).len(), 4);
    }

    #[test]
    fn test_featured_requires_public() {
        assert_eq!(ids(&featured(sample())), vec!["d"]);
    }

    #[test]
    fn test_newest_first() {
        let mut older = article("old", Visibility::Public, "x", false);
        older.date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut newer = article("new", Visibility::Public, "x", false);
        newer.date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(ids(&newest_first(vec![older, newer])), vec!["new", "old"]);
    }
}
