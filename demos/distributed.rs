use ezid::{IdGenerator, MAX_GENERATOR_ID};
use rand::{rng, Rng};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Derive a generator ID (0-1023) from the host name
fn generator_id_for_host() -> i64 {
    let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
    let mut hasher = DefaultHasher::new();
    host.hash(&mut hasher);
    (hasher.finish() & MAX_GENERATOR_ID as u64) as i64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let generator_id = generator_id_for_host();
    println!("Using generator ID {generator_id}");

    // One generator per process, shared by every worker thread
    let generator = Arc::new(IdGenerator::new(generator_id).unwrap());
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_ez_id().unwrap();
                let (ts, node, seq) = generator.extract.decompose(id.value());

                println!(
                    "Thread {} generated ID {} = {} (ts={}, node={}, seq={})",
                    thread_id, i, id, ts, node, seq
                );

                assert!(ids.insert(id.value()), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not monotonically increasing!");
    }
    println!("All IDs are unique and monotonically increasing!");
}
