//! Catalog service: memoized access to topic content.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use unistudy_core::catalog::{Category, TopicContentProvider, TopicKey, categories};
use unistudy_core::department::Department;
use unistudy_core::error::Result;

/// Serves the static taxonomy and fetches topic content on demand,
/// consulting the provider at most once per topic.
///
/// Failed fetches are not cached, so a transient failure can be retried.
pub struct CatalogService {
    provider: Arc<dyn TopicContentProvider>,
    cache: Mutex<HashMap<TopicKey, String>>,
}

impl CatalogService {
    pub fn new(provider: Arc<dyn TopicContentProvider>) -> Self {
        Self {
            provider,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The categories and topic names offered for a department.
    pub fn categories(&self, department: Department) -> &'static [Category] {
        categories(department)
    }

    /// Validates the coordinate against the taxonomy and returns the
    /// topic's content.
    pub async fn load_topic(
        &self,
        department: Department,
        category: &str,
        topic: &str,
    ) -> Result<String> {
        let key = TopicKey::new(department, category, topic)?;
        self.topic_content(&key).await
    }

    /// Content for a topic, fetched once and memoized thereafter.
    pub async fn topic_content(&self, key: &TopicKey) -> Result<String> {
        {
            let cache = self.cache.lock().await;
            if let Some(content) = cache.get(key) {
                return Ok(content.clone());
            }
        }

        let content = self.provider.fetch(key).await?;

        let mut cache = self.cache.lock().await;
        // A concurrent fetch may have won; the first stored value sticks
        Ok(cache.entry(key.clone()).or_insert(content).clone())
    }
}

/// Local stand-in for a content API, mirroring what the front end shipped
/// before a real resource backend existed.
pub struct SimulatedTopicProvider;

#[async_trait]
impl TopicContentProvider for SimulatedTopicProvider {
    async fn fetch(&self, key: &TopicKey) -> Result<String> {
        Ok(format!(
            "Study materials for {} ({} / {}): lecture notes, worked \
             examples, and practice questions curated for the {} department.",
            key.topic,
            key.department,
            key.category,
            key.department.label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
        fail_first: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: AtomicUsize::new(0),
            }
        }

        fn failing_once() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: AtomicUsize::new(1),
            }
        }
    }

    #[async_trait]
    impl TopicContentProvider for CountingProvider {
        async fn fetch(&self, key: &TopicKey) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                n.checked_sub(1)
            }).is_ok()
            {
                return Err(unistudy_core::StudyError::transport("unreachable"));
            }
            Ok(format!("content for {}", key.topic))
        }
    }

    fn key(topic: &str) -> TopicKey {
        TopicKey::new(Department::Engineering, "Mathematics", topic).unwrap()
    }

    #[tokio::test]
    async fn test_provider_consulted_at_most_once_per_topic() {
        let provider = Arc::new(CountingProvider::new());
        let service = CatalogService::new(provider.clone());

        let first = service.topic_content(&key("Calculus")).await.unwrap();
        let second = service.topic_content(&key("Calculus")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        service.topic_content(&key("Statistics")).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let provider = Arc::new(CountingProvider::failing_once());
        let service = CatalogService::new(provider.clone());

        assert!(service.topic_content(&key("Calculus")).await.is_err());
        let content = service.topic_content(&key("Calculus")).await.unwrap();
        assert_eq!(content, "content for Calculus");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);

        // Now cached
        service.topic_content(&key("Calculus")).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_load_topic_rejects_unknown_coordinates() {
        let provider = Arc::new(CountingProvider::new());
        let service = CatalogService::new(provider.clone());

        assert!(
            service
                .load_topic(Department::Engineering, "Mathematics", "Alchemy")
                .await
                .is_err()
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

        let content = service
            .load_topic(Department::Engineering, "Mathematics", "Calculus")
            .await
            .unwrap();
        assert_eq!(content, "content for Calculus");
    }

    #[tokio::test]
    async fn test_simulated_provider_mentions_the_topic() {
        let service = CatalogService::new(Arc::new(SimulatedTopicProvider));
        let content = service
            .topic_content(&key("Linear Algebra"))
            .await
            .unwrap();
        assert!(content.contains("Linear Algebra"));
        assert!(content.contains("Engineering"));
    }
}
