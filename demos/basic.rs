use streakcache::prelude::*;

fn main() {
    // Create a cache that holds at most 3 elements
    let mut cache: BoundedOrderedCache<i32, 3> = BoundedOrderedCache::new();

    cache.insert(5);
    cache.insert(2);
    cache.insert(9);

    // Newest first, space separated
    println!("residents: {}", cache);

    // Capacity reached: inserting evicts the oldest (5)
    cache.insert(4);
    println!("after insert(4): {}", cache);

    if let (Some(high), Some(low)) = (cache.streak_high(), cache.streak_low()) {
        println!("streak high: {high}, streak low: {low}");
    }

    match cache.evict_oldest() {
        Ok(evicted) => println!("evicted: {evicted}"),
        Err(err) => println!("eviction failed: {err}"),
    }
}
