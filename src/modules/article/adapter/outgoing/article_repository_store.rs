use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::warn;

use crate::article::application::domain::article::Article;
use crate::article::application::ports::outgoing::article_repository::{
    ArticleRepository, ArticleRepositoryError,
};
use crate::content_store::{ContentStoreError, SharedContentStore, StorePath};

pub const ARTICLES_ROOT: &str = "articles";

/// Articles kept as children of `articles/`, keyed by store-generated id.
#[derive(Clone)]
pub struct ArticleRepositoryStore {
    store: SharedContentStore,
}

impl ArticleRepositoryStore {
    pub fn new(store: SharedContentStore) -> Self {
        Self { store }
    }

    fn root() -> Result<StorePath, ArticleRepositoryError> {
        StorePath::parse(ARTICLES_ROOT).map_err(|e| ArticleRepositoryError::DatabaseError(e.to_string()))
    }

    /// `None` for ids that can never name a stored article.
    fn article_path(id: &str) -> Option<StorePath> {
        Self::root().ok()?.child(id).ok().filter(|p| p.segments().len() == 2)
    }

    fn decode(id: &str, value: Value) -> Result<Article, ArticleRepositoryError> {
        let mut article: Article = serde_json::from_value(value)
            .map_err(|e| ArticleRepositoryError::SerializationError(e.to_string()))?;
        article.id = id.to_string();
        Ok(article)
    }

    /// Raw children of `articles/`; a missing or non-object root reads as empty.
    async fn children(&self) -> Result<Map<String, Value>, ArticleRepositoryError> {
        match self.store.get(&Self::root()?).await.map_err(map_store_err)? {
            None => Ok(Map::new()),
            Some(Value::Object(children)) => Ok(children),
            Some(_) => {
                warn!("Article root is not an object; treating as empty");
                Ok(Map::new())
            }
        }
    }

    fn encode(article: &Article) -> Result<Value, ArticleRepositoryError> {
        serde_json::to_value(article)
            .map_err(|e| ArticleRepositoryError::SerializationError(e.to_string()))
    }
}

fn map_store_err(e: ContentStoreError) -> ArticleRepositoryError {
    match e {
        ContentStoreError::SerializationError(msg) => {
            ArticleRepositoryError::SerializationError(msg)
        }
        other => ArticleRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryStore {
    async fn insert(&self, mut article: Article) -> Result<Article, ArticleRepositoryError> {
        article.id = String::new();
        let value = Self::encode(&article)?;

        let id = self
            .store
            .push(&Self::root()?, value)
            .await
            .map_err(map_store_err)?;

        article.id = id;
        Ok(article)
    }

    async fn list(&self) -> Result<Vec<Article>, ArticleRepositoryError> {
        let children = self.children().await?;

        let mut articles = Vec::with_capacity(children.len());
        for (id, child) in children {
            match Self::decode(&id, child) {
                Ok(article) => articles.push(article),
                Err(e) => warn!(article_id = %id, error = %e, "Skipping unreadable article"),
            }
        }
        Ok(articles)
    }

    async fn list_slugs(&self) -> Result<Vec<(String, String)>, ArticleRepositoryError> {
        Ok(self
            .children()
            .await?
            .into_iter()
            .filter_map(|(id, child)| {
                let slug = child.get("slug")?.as_str()?.to_string();
                Some((id, slug))
            })
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, ArticleRepositoryError> {
        let Some(path) = Self::article_path(id) else {
            return Ok(None);
        };

        match self.store.get(&path).await.map_err(map_store_err)? {
            Some(value) => Self::decode(id, value).map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleRepositoryError> {
        Ok(self.list().await?.into_iter().find(|a| a.slug == slug))
    }

    async fn replace(&self, article: &Article) -> Result<(), ArticleRepositoryError> {
        let path = Self::article_path(&article.id).ok_or_else(|| {
            ArticleRepositoryError::DatabaseError(format!("invalid article id '{}'", article.id))
        })?;

        let mut stored = article.clone();
        stored.id = String::new();

        self.store
            .set(&path, Self::encode(&stored)?)
            .await
            .map_err(map_store_err)
    }

    async fn delete(&self, id: &str) -> Result<bool, ArticleRepositoryError> {
        let Some(path) = Self::article_path(id) else {
            return Ok(false);
        };
        self.store.remove(&path).await.map_err(map_store_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::application::domain::article::Visibility;
    use crate::content_store::ContentStoreMemory;
    use serde_json::json;
    use std::sync::Arc;

    fn repo_with(data: Value) -> ArticleRepositoryStore {
        ArticleRepositoryStore::new(Arc::new(ContentStoreMemory::with_data(data)))
    }

    fn article(title: &str, slug: &str) -> Article {
        Article {
            title: title.into(),
            slug: slug.into(),
            visibility: Visibility::Public,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips() {
        let repo = repo_with(json!({}));

        let created = repo.insert(article("Hello", "hello")).await.unwrap();
        assert!(!created.id.is_empty());

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = repo_with(json!({}));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_uses_keys_as_ids_and_skips_garbage() {
        let repo = repo_with(json!({
            "articles": {
                "k1": {"title": "One", "slug": "one"},
                "k2": "not an article"
            }
        }));

        let articles = repo.list().await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "k1");
        assert_eq!(articles[0].title, "One");
    }

    #[tokio::test]
    async fn test_list_slugs_includes_unreadable_children() {
        let repo = repo_with(json!({
            "articles": {
                "k1": {"title": "One", "slug": "one"},
                "k2": {"title": "Post", "slug": "post", "visibility": "archived"},
                "k3": {"title": "No slug"},
                "k4": 7
            }
        }));

        let mut slugs = repo.list_slugs().await.unwrap();
        slugs.sort();

        assert_eq!(
            slugs,
            vec![
                ("k1".to_string(), "one".to_string()),
                ("k2".to_string(), "post".to_string()),
            ]
        );
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_slug() {
        let repo = repo_with(json!({
            "articles": {
                "k1": {"title": "One", "slug": "one"},
                "k2": {"title": "Two", "slug": "two"}
            }
        }));

        let found = repo.find_by_slug("two").await.unwrap().unwrap();
        assert_eq!(found.id, "k2");
        assert!(repo.find_by_slug("three").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unaddressable_ids_are_not_found() {
        let repo = repo_with(json!({"articles": {"k1": {"title": "One"}}}));

        assert!(repo.find_by_id("a.b").await.unwrap().is_none());
        assert!(repo.find_by_id("k1/extra").await.unwrap().is_none());
        assert!(!repo.delete("").await.unwrap());
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let repo = repo_with(json!({"articles": {"k1": {"title": "One", "slug": "one"}}}));

        let mut updated = repo.find_by_id("k1").await.unwrap().unwrap();
        updated.title = "Uno".into();
        repo.replace(&updated).await.unwrap();

        assert_eq!(repo.find_by_id("k1").await.unwrap().unwrap().title, "Uno");
        assert!(repo.delete("k1").await.unwrap());
        assert!(!repo.delete("k1").await.unwrap());
    }
}
