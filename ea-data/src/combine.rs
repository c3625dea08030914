//! Merge partial checkpoint CSVs into one deduplicated file.

use anyhow::Context;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-name prefix of scraper checkpoint files.
pub const CHECKPOINT_PREFIX: &str = "laptop_data_checkpoint_";

/// Column added to every row naming the file it came from.
pub const SOURCE_COLUMN: &str = "source_file";

/// Column used to drop duplicate rows (first occurrence wins).
pub const DEDUP_COLUMN: &str = "url";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombineStats {
    pub files_read: usize,
    pub input_rows: usize,
    pub duplicates_removed: usize,
    pub output_rows: usize,
    pub columns: usize,
}

/// Checkpoint files (`laptop_data_checkpoint_*.csv`) in `dir`, sorted by name.
pub fn find_checkpoints(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        let is_checkpoint = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(CHECKPOINT_PREFIX) && n.ends_with(".csv"))
            .unwrap_or(false);
        if is_checkpoint && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

struct Table {
    source: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn read_table<R: io::Read>(source: &str, reader: R) -> anyhow::Result<Table> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(Table {
        source: source.to_string(),
        headers,
        rows,
    })
}

/// Combine named CSV sources.
///
/// The output header is the union of all input headers in first-seen order,
/// followed by `source_file`. Missing cells are left empty. Rows whose `url`
/// was already seen are dropped. A source that fails to parse is logged and
/// skipped.
pub fn combine<R: io::Read, W: io::Write>(
    sources: Vec<(String, R)>,
    writer: W,
) -> anyhow::Result<CombineStats> {
    let mut stats = CombineStats::default();
    let mut tables = Vec::new();

    for (name, reader) in sources {
        match read_table(&name, reader) {
            Ok(table) => {
                log::info!("Read {} rows from {}", table.rows.len(), name);
                stats.input_rows += table.rows.len();
                tables.push(table);
            }
            Err(e) => log::warn!("Error reading {}: {:#}", name, e),
        }
    }
    anyhow::ensure!(!tables.is_empty(), "No data could be read from checkpoint files");
    stats.files_read = tables.len();

    let mut columns: Vec<String> = Vec::new();
    for table in &tables {
        for h in &table.headers {
            if h != SOURCE_COLUMN && !columns.contains(h) {
                columns.push(h.clone());
            }
        }
    }
    columns.push(SOURCE_COLUMN.to_string());
    stats.columns = columns.len();

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;

    let mut seen_urls: HashSet<String> = HashSet::new();
    for table in &tables {
        let positions: Vec<Option<usize>> = columns
            .iter()
            .map(|c| table.headers.iter().position(|h| h == c))
            .collect();
        let url_idx = table.headers.iter().position(|h| h == DEDUP_COLUMN);

        for row in &table.rows {
            if let Some(url) = url_idx.and_then(|i| row.get(i)) {
                if !seen_urls.insert(url.clone()) {
                    stats.duplicates_removed += 1;
                    continue;
                }
            }
            let last = positions.len() - 1;
            let fields: Vec<&str> = positions
                .iter()
                .enumerate()
                .map(|(n, pos)| {
                    if n == last {
                        table.source.as_str()
                    } else {
                        pos.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
                    }
                })
                .collect();
            wtr.write_record(&fields)?;
            stats.output_rows += 1;
        }
    }
    wtr.flush()?;

    Ok(stats)
}

/// Combine checkpoint files on disk into `output`.
pub fn combine_files(files: &[PathBuf], output: &Path) -> anyhow::Result<CombineStats> {
    let mut sources = Vec::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match fs::File::open(path) {
            Ok(file) => sources.push((name, file)),
            Err(e) => log::warn!("Error opening {}: {}", path.display(), e),
        }
    }

    let out = fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    combine(sources, out)
}
