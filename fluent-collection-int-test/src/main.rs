use fluent_collection::collection::Collection;
use fluent_collection::common::{Record, SortOptions, SortOrder};
use fluent_collection::errors::CollectionResult;
use fluent_collection::filter::field;
use fluent_collection::record;

fn main() -> CollectionResult<()> {
    colog::init();
    println!("Starting stress test...");

    let count = 1_000_000;
    let statuses = ["ok", "failed", "pending"];

    let start = std::time::Instant::now();
    let mut records: Collection<Record> = Collection::new();
    for i in 0..count {
        let status = statuses[i % statuses.len()];
        let score = (i * 7919 % 1000) as i64;
        records.add(record! {
            id: i,
            status: status,
            score: score,
            owner: { name: (format!("user-{}", i % 100)) },
        });
    }
    println!("Inserted {} records in {:?}", records.count(), start.elapsed());

    let start = std::time::Instant::now();
    let failed = records.where_equals("status", "failed", true)?;
    println!("Found {} failed records in {:?}", failed.count(), start.elapsed());

    let start = std::time::Instant::now();
    let high = records.find(&field("score").gte(900).and(field("owner.name").eq("user-42")))?;
    println!("Found {} high scores for user-42 in {:?}", high.count(), start.elapsed());

    let start = std::time::Instant::now();
    let groups = records.group_by("status", false)?;
    println!("Grouped into {} buckets in {:?}", groups.count(), start.elapsed());

    let start = std::time::Instant::now();
    let average = records.avg_by("score")?;
    println!("Average score {:.2} in {:?}", average, start.elapsed());

    let start = std::time::Instant::now();
    let sorted = failed.sort_by_with_options("score", &SortOptions::new().order(SortOrder::Descending))?;
    println!("Sorted {} records in {:?}", sorted.count(), start.elapsed());

    let start = std::time::Instant::now();
    let chunks = records.chunk(1000)?;
    println!("Split into {} chunks in {:?}", chunks.count(), start.elapsed());

    Ok(())
}
