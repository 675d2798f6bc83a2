//! Store Concurrency Tests
//!
//! Many threads hammering one store:
//! - Concurrent creates never collide on ids
//! - Readers only ever observe whole records
//! - Concurrent deletes of the same id succeed exactly once

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use exocatalog::catalog::{validate, PlanetKind, PlanetRecord, PlanetStore, StoreError};

fn planet(i: usize) -> PlanetRecord {
    PlanetRecord::terrestrial(format!("P-{}", i), "generated", 11.0 + i as f64, 1.0, 1.0)
}

#[test]
fn test_concurrent_creates_have_unique_ids() {
    let store = Arc::new(PlanetStore::new());
    let mut handles = vec![];

    for t in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            (0..250)
                .map(|i| store.create(planet(t * 1000 + i)))
                .collect::<Vec<_>>()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id");
        }
    }

    assert_eq!(ids.len(), 2000);
    assert_eq!(store.len(), 2000);
}

#[test]
fn test_readers_never_see_partial_updates() {
    let store = Arc::new(PlanetStore::new());
    let id = store.create(planet(0));

    let writer = {
        let store = Arc::clone(&store);
        let id = id.clone();
        thread::spawn(move || {
            for i in 0..500 {
                let record = if i % 2 == 0 {
                    PlanetRecord::gas_giant("Giant", "even", 500.0, 5.0)
                } else {
                    PlanetRecord::terrestrial("Rock", "odd", 20.0, 0.5, 2.0)
                };
                store.update(&id, validate(record).unwrap()).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let record = store.get(&id).unwrap();
                    match record.kind {
                        PlanetKind::GasGiant => {
                            assert_eq!(record.name, "Giant");
                            assert_eq!(record.mass, 0.0);
                        }
                        PlanetKind::Terrestrial => {
                            assert!(record.name == "Rock" || record.name == "P-0");
                        }
                        PlanetKind::Unrecognized => panic!("unrecognized kind stored"),
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn test_concurrent_delete_succeeds_once() {
    let store = Arc::new(PlanetStore::new());
    let id = store.create(planet(1));
    let successes = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            let successes = Arc::clone(&successes);
            thread::spawn(move || match store.delete(&id) {
                Ok(()) => {
                    successes.fetch_add(1, Ordering::SeqCst);
                }
                Err(StoreError::NotFound) => {}
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert!(store.is_empty());
}
