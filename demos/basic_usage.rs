//! Basic usage example for ugeo-rs
//!
//! This example demonstrates how to:
//! - Load the village index (set `UGEO_DATA` to point at a dataset)
//! - Walk down from a district to its villages
//! - Walk up from a village to its parish, subcounty and district
//! - Run a scored free-text search

use ugeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ugeo-rs Basic Usage Example ===\n");

    println!("Loading village index...");
    let index = DefaultIndex::load()?;
    println!("✓ Index loaded successfully\n");
    println!("{}\n", index.stats());

    // Example 1: districts
    println!("--- Example 1: List districts ---");
    let districts = index.districts();
    println!("Total districts: {}", districts.len());
    for (i, district) in districts.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, district);
    }
    println!();

    // Example 2: walk down the first district
    println!("--- Example 2: Walk down a district ---");
    if let Some(district) = districts.first() {
        let subcounties = index.subcounties_in_district(district);
        println!("Subcounties in {}: {}", district, subcounties.len());
        if let Some(subcounty) = subcounties.first() {
            for parish in index.parishes_in_subcounty(district, subcounty) {
                let villages = index.villages_in_parish(district, subcounty, parish);
                println!("  {} / {}: {} villages", subcounty, parish, villages.len());
            }
        }
    }
    println!();

    // Example 3: walk up from a village
    println!("--- Example 3: Parent of a village ---");
    if let Some(loc) = index.locations().next() {
        if let Some(parent) = index.parent(loc.village()) {
            println!("Village: {}", loc.village());
            println!("Parish: {}", parent.parish);
            println!("Subcounty: {}", parent.subcounty);
            println!("District: {}", parent.district);
        }
        println!("Path: {}", loc.path());
    }
    println!();

    // Example 4: search
    println!("--- Example 4: Search ---");
    let query = "kampala";
    let hits = index.search_hits(query, &SearchOptions::new().limit(5));
    println!("Top {} results for '{}':", hits.len(), query);
    for hit in hits {
        println!("  [{:>2}] {}", hit.score, hit.location);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
