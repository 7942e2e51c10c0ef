//! Macro-generated test suite for `ShipStore` contract validation.
//!
//! The `ship_store_tests!` macro generates a test module that validates any
//! `ShipStore` implementation: id allocation, get/replace/delete, filtered
//! and ordered range queries, counts, and concurrent inserts.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use fleet::storage::InMemoryShipStore;
//!
//! ship_store_tests!(InMemoryShipStore::new());
//! ```

/// Generate a full `ShipStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `ShipStore + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! ship_store_tests {
    ($factory:expr) => {
        mod ship_store_contract_tests {
            use super::*;
            use fleet::core::field::{FieldValue, ShipField};
            use fleet::core::filter::{Comparator, Predicate, ShipFilter};
            use fleet::core::query::{PageRequest, ShipOrder};
            use fleet::core::ship::{Ship, ShipType};
            use fleet::core::store::ShipStore;
            use std::collections::HashSet;
            use std::sync::Arc;

            /// Insert the fleet fixture, returning the stored ships in fixture order
            async fn populate(store: &dyn ShipStore) -> Vec<Ship> {
                let mut stored = Vec::new();
                for ship in fleet_fixture() {
                    stored.push(store.insert(ship).await.unwrap());
                }
                stored
            }

            fn names(ships: &[Ship]) -> Vec<&str> {
                ships.iter().map(|s| s.name.as_str()).collect()
            }

            fn everything() -> PageRequest {
                PageRequest::new(0, 100)
            }

            // ==================================================================
            // Insert & Get
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_get() {
                let store = $factory;
                let ship = make_ship("Aurora", ShipType::Transport, 2900, false, 0.5, 100);

                let created = store.insert(ship.clone()).await.unwrap();
                assert!(created.id > 0);
                assert_eq!(created.name, "Aurora");
                assert_eq!(created.rating, ship.rating);

                let fetched = store.get(created.id).await.unwrap().expect("stored ship");
                assert_eq!(fetched, created);
            }

            #[tokio::test]
            async fn test_insert_ignores_supplied_id() {
                let store = $factory;
                let mut ship = make_ship("Aurora", ShipType::Transport, 2900, false, 0.5, 100);
                ship.id = 777;

                let first = store.insert(ship.clone()).await.unwrap();
                let second = store.insert(ship).await.unwrap();
                assert_ne!(first.id, second.id);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get(12345).await.unwrap().is_none());
            }

            // ==================================================================
            // Replace
            // ==================================================================

            #[tokio::test]
            async fn test_replace_existing() {
                let store = $factory;
                let stored = populate(&store).await;

                let mut changed = stored[1].clone();
                changed.name = "Bulwark".to_string();
                changed.crew_size = 600;

                let replaced = store.replace(changed.clone()).await.unwrap();
                assert_eq!(replaced, Some(changed.clone()));
                assert_eq!(store.get(changed.id).await.unwrap(), Some(changed));
                assert_eq!(store.count(&ShipFilter::all()).await.unwrap(), 5);
            }

            #[tokio::test]
            async fn test_replace_nonexistent() {
                let store = $factory;
                let mut ghost = make_ship("Ghost", ShipType::Merchant, 2900, false, 0.5, 1);
                ghost.id = 999;

                assert!(store.replace(ghost).await.unwrap().is_none());
                assert!(store.get(999).await.unwrap().is_none());
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let stored = populate(&store).await;

                assert!(store.delete(stored[0].id).await.unwrap());
                assert!(store.get(stored[0].id).await.unwrap().is_none());
                assert_eq!(store.count(&ShipFilter::all()).await.unwrap(), 4);
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;
                assert!(!store.delete(4242).await.unwrap());
            }

            // ==================================================================
            // Find — ordering and paging
            // ==================================================================

            #[tokio::test]
            async fn test_find_empty_store() {
                let store = $factory;
                let found = store
                    .find(&ShipFilter::all(), ShipOrder::Id, everything())
                    .await
                    .unwrap();
                assert!(found.is_empty());
            }

            #[tokio::test]
            async fn test_find_default_page_is_first_three_by_id() {
                let store = $factory;
                let stored = populate(&store).await;

                let found = store
                    .find(&ShipFilter::all(), ShipOrder::Id, PageRequest::default())
                    .await
                    .unwrap();
                assert_eq!(found, stored[..3].to_vec());
            }

            #[tokio::test]
            async fn test_find_pages_partition_the_result() {
                let store = $factory;
                populate(&store).await;

                let mut seen = Vec::new();
                for number in 0..3 {
                    let page = store
                        .find(&ShipFilter::all(), ShipOrder::Id, PageRequest::new(number, 2))
                        .await
                        .unwrap();
                    seen.extend(page);
                }
                assert_eq!(seen.len(), 5);
                let ids: Vec<i64> = seen.iter().map(|s| s.id).collect();
                let mut sorted = ids.clone();
                sorted.sort();
                assert_eq!(ids, sorted);
            }

            #[tokio::test]
            async fn test_find_page_past_end_is_empty() {
                let store = $factory;
                populate(&store).await;

                let found = store
                    .find(&ShipFilter::all(), ShipOrder::Id, PageRequest::new(10, 3))
                    .await
                    .unwrap();
                assert!(found.is_empty());
            }

            #[tokio::test]
            async fn test_find_order_by_speed_breaks_ties_by_id() {
                let store = $factory;
                populate(&store).await;

                let found = store
                    .find(&ShipFilter::all(), ShipOrder::Speed, everything())
                    .await
                    .unwrap();
                assert_eq!(
                    names(&found),
                    vec!["Comet", "Aurora", "Drifter", "Eclipse", "Bastion"]
                );
            }

            #[tokio::test]
            async fn test_find_order_by_date() {
                let store = $factory;
                populate(&store).await;

                let found = store
                    .find(&ShipFilter::all(), ShipOrder::Date, everything())
                    .await
                    .unwrap();
                assert_eq!(
                    names(&found),
                    vec!["Comet", "Aurora", "Eclipse", "Bastion", "Drifter"]
                );
            }

            #[tokio::test]
            async fn test_find_order_by_rating() {
                let store = $factory;
                populate(&store).await;

                let found = store
                    .find(&ShipFilter::all(), ShipOrder::Rating, everything())
                    .await
                    .unwrap();
                assert_eq!(
                    names(&found),
                    vec!["Comet", "Aurora", "Eclipse", "Bastion", "Drifter"]
                );
            }

            // ==================================================================
            // Find & Count — filters
            // ==================================================================

            #[tokio::test]
            async fn test_find_with_filter() {
                let store = $factory;
                populate(&store).await;

                let filter = ShipFilter::all().and(Predicate::new(
                    ShipField::ShipType,
                    Comparator::Equals,
                    FieldValue::ShipType(ShipType::Military),
                ));
                let found = store.find(&filter, ShipOrder::Id, everything()).await.unwrap();
                assert_eq!(names(&found), vec!["Bastion", "Eclipse"]);
            }

            #[tokio::test]
            async fn test_find_by_planet() {
                let store = $factory;
                populate(&store).await;

                let filter = ShipFilter::all().and(Predicate::new(
                    ShipField::Planet,
                    Comparator::Contains,
                    FieldValue::String("Mars".to_string()),
                ));
                let found = store.find(&filter, ShipOrder::Id, everything()).await.unwrap();
                assert_eq!(names(&found), vec!["Bastion", "Drifter"]);
                assert_eq!(store.count(&filter).await.unwrap(), 2);
            }

            #[tokio::test]
            async fn test_find_by_max_rating_is_inclusive() {
                let store = $factory;
                populate(&store).await;

                let filter = ShipFilter::all().and(Predicate::new(
                    ShipField::Rating,
                    Comparator::AtMost,
                    FieldValue::Float(0.86),
                ));
                let found = store.find(&filter, ShipOrder::Rating, everything()).await.unwrap();
                assert_eq!(names(&found), vec!["Comet", "Aurora", "Eclipse"]);
                assert_eq!(store.count(&filter).await.unwrap(), 3);
            }

            #[tokio::test]
            async fn test_count_matches_unpaginated_find() {
                let store = $factory;
                populate(&store).await;

                let filter = ShipFilter::all()
                    .and(Predicate::new(
                        ShipField::Speed,
                        Comparator::AtLeast,
                        FieldValue::Float(0.5),
                    ))
                    .and(Predicate::new(
                        ShipField::IsUsed,
                        Comparator::Equals,
                        FieldValue::Boolean(false),
                    ));
                let found = store.find(&filter, ShipOrder::Id, everything()).await.unwrap();
                let count = store.count(&filter).await.unwrap();
                assert_eq!(count, found.len());
                assert_eq!(names(&found), vec!["Aurora", "Eclipse"]);
            }

            #[tokio::test]
            async fn test_count_without_filter() {
                let store = $factory;
                assert_eq!(store.count(&ShipFilter::all()).await.unwrap(), 0);
                populate(&store).await;
                assert_eq!(store.count(&ShipFilter::all()).await.unwrap(), 5);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts_get_distinct_ids() {
                let store: Arc<dyn ShipStore> = Arc::new($factory);

                let mut handles = Vec::new();
                for i in 0..20 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        let ship = make_ship(
                            &format!("Ship {}", i),
                            ShipType::Merchant,
                            2900,
                            false,
                            0.5,
                            10,
                        );
                        store.insert(ship).await.unwrap().id
                    }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap());
                }
                assert_eq!(ids.len(), 20);
                assert_eq!(store.count(&ShipFilter::all()).await.unwrap(), 20);
            }
        }
    };
}
