use crate::records::{KeywordTarget, MatchRecord, PageRecord};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::error::Error;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Loads the list of site URLs to audit from a headerless CSV file.
///
/// URLs are taken from the first column; surrounding whitespace and a UTF-8
/// BOM are trimmed and blank rows are skipped.
pub fn load_site_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let file = File::open(path)?;
    read_site_urls(file)
}

/// Reads site URLs from any CSV source
pub fn read_site_urls<R: Read>(reader: R) -> Result<Vec<String>, Box<dyn Error>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut urls = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let Some(field) = record.get(0) else {
            continue;
        };
        let url = field.trim_start_matches('\u{feff}').trim();
        if url.is_empty() {
            continue;
        }
        urls.push(url.to_string());
    }
    Ok(urls)
}

/// Loads keyword targets from a headerless CSV file with columns
/// (target URL, keyword).
pub fn load_keyword_targets<P: AsRef<Path>>(path: P) -> Result<Vec<KeywordTarget>, Box<dyn Error>> {
    let file = File::open(path)?;
    read_keyword_targets(file)
}

/// Reads keyword targets from any CSV source
pub fn read_keyword_targets<R: Read>(reader: R) -> Result<Vec<KeywordTarget>, Box<dyn Error>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut keyword_targets = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(target_url), Some(keyword)) => {
                let target_url = target_url.trim_start_matches('\u{feff}').trim();
                let keyword = keyword.trim();
                if target_url.is_empty() || keyword.is_empty() {
                    ::log::warn!("Skipping keyword row {} with empty field", row + 1);
                    continue;
                }
                keyword_targets.push(KeywordTarget::new(keyword, target_url));
            }
            _ => {
                ::log::warn!("Skipping malformed keyword row {}", row + 1);
            }
        }
    }
    Ok(keyword_targets)
}

/// Writes fetched page bodies to a headerless CSV file, one (source URL,
/// body text) row per page, quoting every field.
pub fn save_content<P: AsRef<Path>>(path: P, pages: &[PageRecord]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_content(file, pages)
}

/// Writes page bodies to any destination
pub fn write_content<W: Write>(writer: W, pages: &[PageRecord]) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    for page in pages {
        csv_writer.write_record([&page.source_url, &page.body_text])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the unlinked keyword report to a CSV file with a header row
/// (`source_url,sentence/paragraph,link_text,target_url`).
pub fn save_matches<P: AsRef<Path>>(
    path: P,
    matches: &[MatchRecord],
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_matches(file, matches)
}

/// Writes match records to any destination
pub fn write_matches<W: Write>(writer: W, matches: &[MatchRecord]) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in matches {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
