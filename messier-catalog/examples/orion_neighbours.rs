//! Loads a catalogue and prints each object's nearest neighbour on the sky.
//!
//! ```text
//! cargo run -p messier-catalog --example orion_neighbours [catalogue.txt]
//! ```
//!
//! Without an argument the sample catalogue from the test data is used.

use messier_catalog::{read_catalogue, IngestOptions};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/messier_sample.txt")
        });

    let report = read_catalogue(&path, &IngestOptions::lenient())?;
    for rejected in &report.rejected {
        eprintln!("line {}: {}", rejected.line, rejected.error);
    }

    let mut catalogue = report.catalogue;
    catalogue.sort();

    for record in &catalogue {
        match catalogue.nearest(record) {
            Some(n) => println!(
                "{:<5} mag {:4.1}  nearest {:<5} {:8.2}'",
                record.primary_id(),
                record.magnitude(),
                n.record.primary_id(),
                n.separation.arcminutes()
            ),
            None => println!("{:<5} mag {:4.1}  (alone)", record.primary_id(), record.magnitude()),
        }
    }

    Ok(())
}
