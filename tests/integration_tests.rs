// Integration tests for Date Match

use date_match::core::{MatchStore, StoreError};
use date_match::models::{Gender, Person, PersonAttributes};
use date_match::services::SequentialIdGenerator;
use std::sync::Arc;
use std::thread;

fn add(store: &MatchStore, id: &str, gender: Gender, height: u16, dates: u32) -> Person {
    store.add(id, PersonAttributes::new(format!("User {}", id), height, gender), dates)
}

fn heights(people: &[Person]) -> Vec<u16> {
    people.iter().map(|p| p.height).collect()
}

#[test]
fn test_single_match_exhausts_both() {
    let store = MatchStore::new();
    add(&store, "m1", Gender::Male, 100, 1);
    add(&store, "f1", Gender::Female, 90, 1);

    let possible = store.possible_matches("f1", 1).unwrap();
    assert_eq!(possible.len(), 1);
    assert_eq!(possible[0].id, "m1");

    let matched = store.match_person("f1").unwrap();
    assert_eq!(matched.id, "m1");
    assert_eq!(matched.number_of_wanted_dates, 0);

    for id in ["m1", "f1"] {
        assert_eq!(store.get(id), Err(StoreError::NotFound));
        assert_eq!(store.possible_matches(id, 1), Err(StoreError::NotFound));
        assert_eq!(store.match_person(id), Err(StoreError::NotFound));
    }
    assert!(store.is_empty());
    assert!(store.is_consistent());
}

#[test]
fn test_men_get_shortest_women_overall() {
    let store = MatchStore::new();
    for (i, height) in [1, 2, 3, 4, 5, 9].into_iter().enumerate() {
        add(&store, &format!("f{}", i + 1), Gender::Female, height, 1);
    }
    add(&store, "m", Gender::Male, 10, 1);

    let possible = store.possible_matches("m", 3).unwrap();
    assert_eq!(heights(&possible), vec![1, 2, 3]);
}

#[test]
fn test_women_get_nearest_taller_men() {
    let store = MatchStore::new();
    for (i, height) in [1, 2, 3, 4, 5, 9].into_iter().enumerate() {
        add(&store, &format!("m{}", i + 1), Gender::Male, height, 1);
    }
    add(&store, "f", Gender::Female, 1, 1);

    let possible = store.possible_matches("f", 3).unwrap();
    assert_eq!(heights(&possible), vec![2, 3, 4]);
}

#[test]
fn test_equal_height_woman_is_a_candidate_for_man() {
    let store = MatchStore::new();
    add(&store, "m", Gender::Male, 170, 1);
    add(&store, "f", Gender::Female, 170, 1);

    assert_eq!(store.possible_matches("m", 1).unwrap()[0].id, "f");
    // The reverse direction requires a strictly taller man
    assert_eq!(store.possible_matches("f", 1), Err(StoreError::NotFound));
}

#[test]
fn test_non_positive_n_is_not_found() {
    let store = MatchStore::new();
    add(&store, "m", Gender::Male, 180, 1);
    add(&store, "f", Gender::Female, 160, 1);

    for n in [0, -1, i64::MIN] {
        assert_eq!(store.possible_matches("m", n), Err(StoreError::NotFound));
        assert_eq!(store.possible_matches("f", n), Err(StoreError::NotFound));
    }
}

#[test]
fn test_exhausted_person_cannot_query() {
    let store = MatchStore::new();
    add(&store, "m", Gender::Male, 180, 0);
    add(&store, "f", Gender::Female, 160, 1);

    assert_eq!(store.possible_matches("m", 1), Err(StoreError::NotFound));
    assert_eq!(store.match_person("m"), Err(StoreError::NotFound));
}

#[test]
fn test_remove_twice() {
    let store = MatchStore::new();
    add(&store, "m", Gender::Male, 180, 1);

    assert_eq!(store.remove("m"), Ok(()));
    assert_eq!(store.remove("m"), Err(StoreError::NotFound));
    assert!(store.is_consistent());
}

#[test]
fn test_quota_drains_one_per_match() {
    let store = MatchStore::new();
    add(&store, "m", Gender::Male, 190, 3);
    add(&store, "f1", Gender::Female, 150, 1);
    add(&store, "f2", Gender::Female, 160, 1);
    add(&store, "f3", Gender::Female, 170, 1);
    add(&store, "f4", Gender::Female, 180, 1);

    let order: Vec<String> = (0..3)
        .map(|_| store.match_person("m").unwrap().id)
        .collect();
    assert_eq!(order, vec!["f1", "f2", "f3"]);

    // Third match used up his last date
    assert_eq!(store.get("m"), Err(StoreError::NotFound));
    assert_eq!(store.get("f4").unwrap().number_of_wanted_dates, 1);
    assert_eq!(store.len(), 1);
    assert!(store.is_consistent());
}

#[test]
fn test_candidate_keeps_remaining_quota() {
    let store = MatchStore::new();
    add(&store, "m", Gender::Male, 190, 5);
    add(&store, "f", Gender::Female, 150, 1);

    let matched = store.match_person("f").unwrap();
    assert_eq!(matched.id, "m");
    assert_eq!(matched.number_of_wanted_dates, 4);
    assert_eq!(store.get("m").unwrap().number_of_wanted_dates, 4);
    assert_eq!(store.get("f"), Err(StoreError::NotFound));
}

#[test]
fn test_register_uses_id_source() {
    let store = MatchStore::new();
    let ids = SequentialIdGenerator::new("p");
    let a = store.register(&ids, PersonAttributes::new("a", 170, Gender::Male), 1);
    let b = store.register(&ids, PersonAttributes::new("b", 160, Gender::Female), 1);
    assert_eq!(a.id, "p-1");
    assert_eq!(b.id, "p-2");
    assert_eq!(store.match_person("p-1").unwrap().id, "p-2");
}

#[test]
fn test_concurrent_matching_keeps_store_consistent() {
    let store = Arc::new(MatchStore::new());
    for i in 0..200u16 {
        add(&store, &format!("m{:03}", i), Gender::Male, 100 + i % 50, 2);
        add(&store, &format!("f{:03}", i), Gender::Female, 90 + i % 50, 2);
    }

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut matches = 0;
                for i in (t..200).step_by(4) {
                    if store.match_person(&format!("f{:03}", i)).is_ok() {
                        matches += 1;
                    }
                }
                matches
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..200 {
                    if let Ok(found) = store.possible_matches(&format!("m{:03}", i), 5) {
                        assert!(!found.is_empty() && found.len() <= 5);
                        assert!(found.windows(2).all(|w| (w[0].height, &w[0].id) < (w[1].height, &w[1].id)));
                    }
                }
            })
        })
        .collect();

    let total: u32 = writers.into_iter().map(|h| h.join().unwrap()).sum();
    for reader in readers {
        reader.join().unwrap();
    }

    assert!(total > 0);
    assert!(store.is_consistent());

    // Every match consumed exactly two dates from a pool of 800
    let remaining: u32 = [Gender::Male, Gender::Female]
        .into_iter()
        .flat_map(|g| store.ordered(g))
        .map(|p| p.number_of_wanted_dates)
        .sum();
    assert_eq!(remaining, 800 - 2 * total);
}
