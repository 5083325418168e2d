//! Table, JSON and CSV rendering of query results.

use crate::cli::OutputFormat;
use messier_catalog::fields::join_names;
use messier_catalog::{Neighbour, Record};

#[derive(serde::Serialize)]
struct JsonRecord<'a> {
    id: &'a str,
    secondary_id: &'a str,
    common_names: &'a [String],
    category: &'a str,
    distance_low_kly: f64,
    distance_high_kly: f64,
    region: &'a str,
    magnitude: f64,
    ra: String,
    dec: String,
    ra_deg: f64,
    dec_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    separation_arcmin: Option<f64>,
}

impl<'a> JsonRecord<'a> {
    fn new(record: &'a Record, separation_arcmin: Option<f64>) -> Self {
        Self {
            id: record.primary_id(),
            secondary_id: record.secondary_id().as_str(),
            common_names: record.common_names(),
            category: record.category(),
            distance_low_kly: record.lowest_distance(),
            distance_high_kly: record.highest_distance(),
            region: record.region(),
            magnitude: record.magnitude(),
            ra: record.right_ascension_text(),
            dec: record.declination_text(),
            ra_deg: record.right_ascension().degrees(),
            dec_deg: record.declination().degrees(),
            separation_arcmin,
        }
    }
}

const CSV_HEADER: &str =
    "id,secondary_id,common_names,category,distance_low_kly,distance_high_kly,region,magnitude,ra,dec";

pub fn print_records<'a, I>(records: I, format: OutputFormat) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();

    match format {
        OutputFormat::Table => {
            for (i, record) in records.iter().enumerate() {
                println!("{:4}: {}", i + 1, table_row(record));
            }
            if records.is_empty() {
                println!("No objects matched.");
            } else {
                println!("\nTotal: {}", records.len());
            }
        }
        OutputFormat::Json => {
            let rows: Vec<JsonRecord<'_>> =
                records.iter().map(|r| JsonRecord::new(r, None)).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("{CSV_HEADER}");
            for record in records {
                println!("{}", csv_row(record));
            }
        }
    }
    Ok(())
}

pub fn print_record(record: &Record, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", table_row(record)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&JsonRecord::new(record, None))?
        ),
        OutputFormat::Csv => {
            println!("{CSV_HEADER}");
            println!("{}", csv_row(record));
        }
    }
    Ok(())
}

pub fn print_neighbour(
    reference: &Record,
    neighbour: &Neighbour<'_>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let arcmin = neighbour.separation.arcminutes();
    match format {
        OutputFormat::Table => {
            println!("{}", table_row(neighbour.record));
            println!(
                "Separation from {}: {:.2}' ({:.4}°)",
                reference.primary_id(),
                arcmin,
                neighbour.separation.degrees()
            );
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&JsonRecord::new(neighbour.record, Some(arcmin)))?
        ),
        OutputFormat::Csv => {
            println!("{CSV_HEADER},separation_arcmin");
            println!("{},{}", csv_row(neighbour.record), arcmin);
        }
    }
    Ok(())
}

pub fn print_value(label: &str, key: &str, value: f64, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{label}: {value:.4}"),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(key.to_string(), serde_json::Value::from(value));
            println!("{}", serde_json::to_string_pretty(&object)?);
        }
        OutputFormat::Csv => {
            println!("{key}");
            println!("{value}");
        }
    }
    Ok(())
}

fn table_row(record: &Record) -> String {
    format!(
        "{:<5} {:<9} Mag={:5.2} RA={} Dec={} Dist={} kly {} / {} / {}",
        record.primary_id(),
        record.secondary_id().as_str(),
        record.magnitude(),
        record.right_ascension_text(),
        record.declination_text(),
        record.distance(),
        record.category(),
        record.region(),
        join_names(record.common_names()),
    )
}

fn csv_row(record: &Record) -> String {
    [
        record.primary_id().to_string(),
        record.secondary_id().as_str().to_string(),
        record.common_names().join("; "),
        record.category().to_string(),
        record.lowest_distance().to_string(),
        record.highest_distance().to_string(),
        record.region().to_string(),
        record.magnitude().to_string(),
        record.right_ascension_text(),
        record.declination_text(),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
