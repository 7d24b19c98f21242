use chrono::{DateTime, Utc};
use ezid::{EzId, IdGenerator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Create a generator with generator ID 1
    let generator = IdGenerator::new(1).unwrap();

    // Generate some IDs
    let id1 = generator.next_ez_id().unwrap();
    let id2 = generator.next_ez_id().unwrap();
    let id3 = generator.next_ez_id().unwrap();

    println!("Generated IDs (guaranteed to be monotonic):");
    print_id(&id1);
    print_id(&id2);
    print_id(&id3);

    // Or extract components individually
    let raw = id3.value();
    let ts = generator.extract.timestamp(raw);
    let node = generator.extract.generator_id(raw);
    let seq = generator.extract.sequence(raw);
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Timestamp: {ts} ms since 1970");
    println!("  Generator ID: {node}");
    println!("  Sequence: {seq}");

    // Text form round-trips
    let parsed: EzId = id3.as_str().parse().unwrap();
    assert_eq!(parsed, id3);
    println!("\nParsed {} back to {}", id3, parsed.value());

    let (ok, fallback) = EzId::try_parse("not-an-id");
    println!("try_parse(\"not-an-id\") -> ({ok}, {})", fallback.value());
}

fn print_id(id: &EzId) {
    let datetime: DateTime<Utc> = id.created_at().unwrap();

    println!(
        "  ID: {id} ({}), Human date: {datetime}, Generator ID: {}, Sequence: {}",
        id.value(),
        id.generator_id(),
        id.sequence()
    );
}
