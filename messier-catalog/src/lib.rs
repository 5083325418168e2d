//! Messier catalogue: line parsing, validation, and queries.
//!
//! Each catalogue line describes one deep-sky object in nine comma-separated fields:
//!
//! ```text
//! M1, "NGC 1952", "Crab Nebula", Supernova remnant, 4.9-8.1, Taurus, 8.4, 5h 34m 31.9400s, 22° 0' 52.2000"
//! ```
//!
//! Lines are parsed into immutable [`Record`]s, every field validated on the way in,
//! and collected into a [`Catalogue`] that supports sorting, filtering, lookups, and
//! extremal queries. A record's text form is canonical and parses back to an equal
//! record.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`tokenizer`] | Quote-aware splitting of a line into raw fields |
//! | [`fields`] | Per-field validators, [`SecondaryId`], [`DistanceRange`], canonical rendering |
//! | [`record`] | [`Record`], [`RecordParts`] |
//! | [`catalogue`] | [`Catalogue`] and its queries, [`Neighbour`] |
//! | [`ingest`] | Multi-line and file ingest with [`IngestPolicy`] |
//! | [`error`] | [`CatalogueError`], [`Field`] |
//!
//! # Quick Start
//!
//! ```
//! use messier_catalog::Catalogue;
//!
//! let text = concat!(
//!     r#"M1, "NGC 1952", "Crab Nebula", Supernova remnant, 4.9-8.1, Taurus, 8.4, 5h 34m 31.9400s, 22° 0' 52.2000""#,
//!     "\n",
//!     r#"M2, "NGC 7089", "-", Globular cluster, 33.0, Aquarius, 6.3, 21h 33m 27.0200s, -0° 49' 23.7000""#,
//! );
//!
//! let mut catalogue: Catalogue = text.parse().unwrap();
//! catalogue.sort();
//! assert_eq!(catalogue.get(0).unwrap().primary_id(), "M2");
//! assert_eq!(catalogue.most_distant().unwrap().primary_id(), "M2");
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`Record`] and its field types.
//! - **`cli`**: Enables the `messier` binary for querying a catalogue file from the
//!   command line.

pub mod catalogue;
pub mod error;
pub mod fields;
pub mod ingest;
pub mod record;
pub mod tokenizer;

pub use catalogue::{Catalogue, Neighbour};
pub use error::{CatalogueError, CatalogueResult, Field};
pub use fields::{DistanceRange, SecondaryId};
pub use ingest::{ingest_lines, read_catalogue, IngestOptions, IngestPolicy, IngestReport};
pub use record::{Record, RecordParts, FIELD_COUNT};
