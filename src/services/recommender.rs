use serde::Serialize;

use crate::domain::{
    grouping::{group_by_category, CategoryGroups},
    matching::{match_recommendations, recommendation_names},
    recommendation::extract_recommendations,
    resource::ResourceRecord,
};

use super::{directory::ResourceDirectory, snapshot::ProfileSnapshot};

#[derive(Debug, Serialize)]
pub struct Recommendations {
    /// AI recommendations resolved to directory records.
    pub matched: CategoryGroups<ResourceRecord>,
    /// The whole directory, for browsing beyond the recommendations.
    pub additional: CategoryGroups<ResourceRecord>,
    /// Set when the recommended records could not be read and `matched` is
    /// the last stored snapshot.
    pub from_cache: bool,
}

pub async fn build_recommendations<S: ResourceDirectory>(
    source: &S,
    snapshot: &ProfileSnapshot<'_>,
) -> Recommendations {
    let text = snapshot.recommendations().await.unwrap_or_else(|e| {
        log::error!(
            "Error reading recommendations for profile {}: {:?}",
            snapshot.profile(),
            e
        );
        None
    });

    let entries = extract_recommendations(text.as_deref());
    log::info!(
        "Extracted {} recommendations for profile {}",
        entries.len(),
        snapshot.profile()
    );

    let broad = match source.all_resources().await {
        Ok(broad) => broad,
        Err(e) => {
            log::error!("Error fetching resources: {:?}", e);
            return Recommendations {
                matched: saved_matches(snapshot).await,
                additional: CategoryGroups::new(),
                from_cache: true,
            };
        }
    };

    let names = recommendation_names(&group_by_category(entries.iter().cloned()));
    let narrow = match names.is_empty() {
        true => Ok(vec![]),
        false => source.resources_named(&names).await,
    };

    let (matched, from_cache) = match narrow {
        Ok(narrow) => {
            let matched = match_recommendations(&entries, &narrow, &broad);
            if let Err(e) = snapshot.set_matched_resources(&matched).await {
                log::error!("Error saving matched resources: {:?}", e);
            }
            (matched, false)
        }
        Err(e) => {
            log::error!("Error fetching recommended resources: {:?}", e);
            (saved_matches(snapshot).await, true)
        }
    };

    Recommendations {
        matched,
        additional: group_by_category(broad),
        from_cache,
    }
}

async fn saved_matches(snapshot: &ProfileSnapshot<'_>) -> CategoryGroups<ResourceRecord> {
    match snapshot.matched_resources().await {
        Ok(Some(saved)) => saved,
        Ok(None) => CategoryGroups::new(),
        Err(e) => {
            log::error!("Error reading saved resources: {:?}", e);
            CategoryGroups::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use chrono::Utc;
    use uuid::Uuid;

    use super::build_recommendations;
    use crate::{
        domain::resource::ResourceRecord,
        services::{directory::ResourceDirectory, snapshot::SnapshotStore},
    };

    struct FakeDirectory {
        records: Vec<ResourceRecord>,
        failing: AtomicBool,
        failing_named: AtomicBool,
        named_calls: AtomicUsize,
    }

    impl FakeDirectory {
        fn new(records: Vec<ResourceRecord>) -> Self {
            FakeDirectory {
                records,
                failing: AtomicBool::new(false),
                failing_named: AtomicBool::new(false),
                named_calls: AtomicUsize::new(0),
            }
        }
    }

    impl ResourceDirectory for FakeDirectory {
        async fn all_resources(&self) -> Result<Vec<ResourceRecord>, sqlx::Error> {
            match self.failing.load(Ordering::SeqCst) {
                true => Err(sqlx::Error::PoolTimedOut),
                false => Ok(self.records.clone()),
            }
        }

        async fn resources_named(
            &self,
            names: &[String],
        ) -> Result<Vec<ResourceRecord>, sqlx::Error> {
            self.named_calls.fetch_add(1, Ordering::SeqCst);
            if self.failing_named.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut);
            }
            Ok(self
                .records
                .iter()
                .filter(|r| names.contains(&r.name))
                .cloned()
                .collect())
        }
    }

    fn record(name: &str, category: &str) -> ResourceRecord {
        ResourceRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: format!("{} description", name),
            eco_friendly: true,
            category: category.to_string(),
            address: "Dearborn, MI".to_string(),
            website: None,
            hours_of_operation: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn directory() -> FakeDirectory {
        FakeDirectory::new(vec![
            record("Westborn Market", "Grocery Store"),
            record("Rouge Park Trail", "Bike/Walk Trail"),
            record("DDOT Bus", "Public Transportation"),
        ])
    }

    #[tokio::test]
    async fn matches_ai_text_against_directory() {
        let store = SnapshotStore::memory();
        let snapshot = store.profile("alice");
        snapshot
            .set_recommendations(
                "Westborn Market (Grocery Store), Unknown Thrift (Clothes Market) \
                 and Rouge Park Trail (Bike/Walk Trail)",
            )
            .await
            .unwrap();

        let result = build_recommendations(&directory(), &snapshot).await;

        assert!(!result.from_cache);
        assert_eq!(
            result.matched.categories().collect::<Vec<_>>(),
            vec!["Grocery Store", "Clothes Market", "Bike/Walk Trail"]
        );
        assert_eq!(result.matched.get("Grocery Store").unwrap()[0].name, "Westborn Market");
        assert!(result.matched.get("Clothes Market").unwrap().is_empty());
        assert_eq!(result.additional.total(), 3);
        assert_eq!(
            snapshot.matched_resources().await.unwrap(),
            Some(result.matched)
        );
    }

    #[tokio::test]
    async fn no_ai_text_skips_name_lookup() {
        let store = SnapshotStore::memory();
        let snapshot = store.profile("alice");
        let directory = directory();

        let result = build_recommendations(&directory, &snapshot).await;

        assert!(result.matched.is_empty());
        assert_eq!(result.additional.len(), 3);
        assert_eq!(directory.named_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_back_to_saved_matches_when_directory_fails() {
        let store = SnapshotStore::memory();
        let snapshot = store.profile("alice");
        snapshot
            .set_recommendations("DDOT Bus (Public Transportation)")
            .await
            .unwrap();

        let directory = directory();
        let first = build_recommendations(&directory, &snapshot).await;

        directory.failing.store(true, Ordering::SeqCst);
        let second = build_recommendations(&directory, &snapshot).await;

        assert!(second.from_cache);
        assert_eq!(second.matched, first.matched);
        assert!(second.additional.is_empty());
    }

    #[tokio::test]
    async fn failure_without_snapshot_is_empty() {
        let store = SnapshotStore::memory();
        let snapshot = store.profile("alice");
        let directory = directory();
        directory.failing.store(true, Ordering::SeqCst);

        let result = build_recommendations(&directory, &snapshot).await;

        assert!(result.from_cache);
        assert!(result.matched.is_empty());
    }

    #[tokio::test]
    async fn name_lookup_failure_keeps_directory_listing() {
        let store = SnapshotStore::memory();
        let snapshot = store.profile("alice");
        snapshot
            .set_recommendations("Westborn Market (Grocery Store)")
            .await
            .unwrap();

        let directory = directory();
        let first = build_recommendations(&directory, &snapshot).await;

        directory.failing_named.store(true, Ordering::SeqCst);
        let second = build_recommendations(&directory, &snapshot).await;

        assert!(second.from_cache);
        assert_eq!(second.matched, first.matched);
        assert_eq!(second.additional.total(), 3);
        assert_eq!(
            second.additional.categories().collect::<Vec<_>>(),
            vec!["Grocery Store", "Bike/Walk Trail", "Public Transportation"]
        );
    }
}
