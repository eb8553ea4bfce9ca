// Rendering of command results for the terminal
use std::io::Write;

use serde::Serialize;

use crate::api::types::{Meta, ObjectStorage, ObjectStorageCluster, ObjectStorageTier, S3Keys};
use crate::error::Result;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for humans
    #[default]
    Text,
    /// Pretty-printed JSON mirroring the API response
    Json,
}

/// A result that knows how to lay itself out as a table.
pub trait Printable: Serialize {
    fn columns(&self) -> Vec<&'static str>;

    fn rows(&self) -> Vec<Vec<String>>;

    fn meta(&self) -> Option<&Meta> {
        None
    }

    /// Single line printed instead of a table in text mode.
    fn plain(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn display<W: Write, P: Printable>(&self, out: &mut W, data: &P) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, data)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                if let Some(line) = data.plain() {
                    writeln!(out, "{line}")?;
                    out.flush()?;
                    return Ok(());
                }

                let mut rows = data.rows();
                if rows.is_empty() {
                    rows.push(vec!["---".to_string()]);
                }
                write_table(out, &data.columns(), &rows)?;
                if let Some(meta) = data.meta() {
                    let links = meta.links.clone().unwrap_or_default();
                    writeln!(out, "======================================")?;
                    write_table(
                        out,
                        &["TOTAL", "NEXT PAGE", "PREV PAGE"],
                        &[vec![
                            cell(&meta.total),
                            cell(&links.next),
                            cell(&links.prev),
                        ]],
                    )?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Table cell for a field the server may have left out.
fn cell<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn write_table<W: Write>(out: &mut W, columns: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    write_row(out, &widths, columns.iter().copied())?;
    for row in rows {
        write_row(out, &widths, row.iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_row<'a, W: Write>(
    out: &mut W,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let cells: Vec<&str> = cells.collect();
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i + 1 == cells.len() {
            line.push_str(cell);
        } else {
            let width = widths.get(i).copied().unwrap_or_default();
            line.push_str(&format!("{cell:<width$}  "));
        }
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

const OBJECT_STORAGE_COLUMNS: [&str; 10] = [
    "ID",
    "DATE CREATED",
    "OBJECTSTORAGE CLUSTER ID",
    "REGION",
    "LOCATION",
    "STATUS",
    "LABEL",
    "S3 HOSTNAME",
    "S3 ACCESS KEY",
    "S3 SECRET KEY",
];

fn object_storage_row(os: &ObjectStorage) -> Vec<String> {
    vec![
        os.id.clone(),
        cell(&os.date_created),
        cell(&os.cluster_id),
        cell(&os.region),
        cell(&os.location),
        cell(&os.status),
        cell(&os.label),
        cell(&os.s3_hostname),
        cell(&os.s3_access_key),
        cell(&os.s3_secret_key),
    ]
}

#[derive(Debug, Serialize)]
pub struct ObjectStoragesPrinter {
    pub object_storages: Vec<ObjectStorage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Printable for ObjectStoragesPrinter {
    fn columns(&self) -> Vec<&'static str> {
        OBJECT_STORAGE_COLUMNS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.object_storages.iter().map(object_storage_row).collect()
    }

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

#[derive(Debug, Serialize)]
pub struct ObjectStoragePrinter {
    pub object_storage: ObjectStorage,
}

impl Printable for ObjectStoragePrinter {
    fn columns(&self) -> Vec<&'static str> {
        OBJECT_STORAGE_COLUMNS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![object_storage_row(&self.object_storage)]
    }
}

#[derive(Debug, Serialize)]
pub struct KeysPrinter {
    pub s3_credentials: S3Keys,
}

impl Printable for KeysPrinter {
    fn columns(&self) -> Vec<&'static str> {
        vec!["S3 HOSTNAME", "S3 ACCESS KEY", "S3 SECRET KEY"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let keys = &self.s3_credentials;
        vec![vec![
            cell(&keys.s3_hostname),
            keys.s3_access_key.clone(),
            keys.s3_secret_key.clone(),
        ]]
    }
}

#[derive(Debug, Serialize)]
pub struct ClustersPrinter {
    pub clusters: Vec<ObjectStorageCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Printable for ClustersPrinter {
    fn columns(&self) -> Vec<&'static str> {
        vec!["ID", "REGION", "HOSTNAME", "DEPLOY"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.clusters
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    cell(&c.region),
                    cell(&c.hostname),
                    cell(&c.deploy),
                ]
            })
            .collect()
    }

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

#[derive(Debug, Serialize)]
pub struct TiersPrinter {
    pub tiers: Vec<ObjectStorageTier>,
}

impl Printable for TiersPrinter {
    fn columns(&self) -> Vec<&'static str> {
        vec![
            "ID",
            "SLUG",
            "PRICE",
            "PRICE BANDWIDTH GB",
            "PRICE DISK GB",
            "RATELIMIT OPS SECS",
            "RATELIMIT OPS BYTES",
            "LOCATIONS",
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.tiers
            .iter()
            .map(|t| {
                let locations = t
                    .locations
                    .iter()
                    .flatten()
                    .filter_map(|l| l.region.as_deref())
                    .collect::<Vec<_>>()
                    .join(",");
                vec![
                    t.id.to_string(),
                    cell(&t.slug),
                    cell(&t.price),
                    cell(&t.price_bandwidth_gb),
                    cell(&t.price_disk_gb),
                    cell(&t.ratelimit_ops_secs),
                    cell(&t.ratelimit_ops_bytes),
                    locations,
                ]
            })
            .collect()
    }
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessagePrinter {
    pub message: String,
}

impl MessagePrinter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Printable for MessagePrinter {
    fn columns(&self) -> Vec<&'static str> {
        vec!["MESSAGE"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.message.clone()]]
    }

    fn plain(&self) -> Option<&str> {
        Some(&self.message)
    }
}
