//! Error handling example for ugeo-rs
//!
//! Lookups never fail: unknown names yield `None` or an empty list. Only
//! loading can fail, with a [`GeoError`] describing why.

use std::path::Path;
use ugeo_rs::prelude::*;

fn main() {
    println!("=== ugeo-rs Error Handling Example ===\n");

    // Example 1: a dataset that does not exist
    println!("--- Example 1: Missing dataset ---");
    match DefaultIndex::load_from_path(Path::new("/nonexistent/locations.json")) {
        Ok(_) => println!("Unexpectedly loaded"),
        Err(GeoError::NotFound(path)) => println!("✓ Not found: {path}"),
        Err(e) => println!("✗ Other error: {e}"),
    }
    println!();

    // Example 2: malformed JSON
    println!("--- Example 2: Malformed JSON ---");
    match DefaultIndex::from_json_str("{ \"districts\": [") {
        Ok(_) => println!("Unexpectedly parsed"),
        Err(e) => println!("✓ Parse error: {e}"),
    }
    println!();

    // Example 3: absent units are not errors
    println!("--- Example 3: Unknown names ---");
    let index = match LocationIndex::<StandardBackend>::from_json_str(
        r#"{"districts": ["WAKISO"], "byVillage": {}, "byParish": {}, "bySubcounty": {}}"#,
    ) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("✗ Could not build index: {e}");
            return;
        }
    };
    match index.location_by_village("NOWHERE") {
        Some(loc) => println!("Found {loc}"),
        None => println!("✓ No village named NOWHERE"),
    }
    println!(
        "✓ Subcounties of GULU: {:?}",
        index.subcounties_in_district("GULU")
    );
    println!();

    // Example 4: consistency report
    println!("--- Example 4: Verify ---");
    let report = index.verify();
    if report.is_empty() {
        println!("✓ Tables agree");
    }
    for finding in report {
        println!("  {finding}");
    }

    println!("\n=== Example completed ===");
}
