//! # Ingestion
//!
//! DBLP-style XML parsing and record validation. Parsing produces raw
//! records; validation decides retention and normalizes fields. The new model
//! is staged and committed atomically, so a malformed source never clobbers a
//! previously loaded corpus.
//!
//! Retention rules: records whose element name is outside the closed kind set
//! and records without a parseable year are dropped silently; a missing title
//! defaults to the empty string; an empty author list is retained.

use crate::model::{AuthorArena, Publication, PublicationKind};
use crate::Database;
use anyhow::{bail, Result};
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A record as parsed from the source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Element name of the record (`article`, `inproceedings`, ...).
    pub element: String,
    /// Title text, if the record carried one.
    pub title: Option<String>,
    /// Year text, if the record carried one; validated as an integer later.
    pub year: Option<String>,
    /// Author names in document order.
    pub authors: Vec<String>,
}

pub(crate) fn read_path(db: &mut Database, path: &Path) -> bool {
    let xml = match fs::read_to_string(path) {
        Ok(xml) => xml,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read corpus source");
            return false;
        }
    };
    read_str(db, &xml)
}

pub(crate) fn read_str(db: &mut Database, xml: &str) -> bool {
    match parse_records(xml) {
        Ok(records) => {
            let parsed = records.len();
            *db = build_model(&records);
            debug!(
                parsed,
                retained = db.publications.len(),
                authors = db.authors.len(),
                "corpus loaded"
            );
            true
        }
        Err(err) => {
            warn!(%err, "malformed corpus source; keeping previous model");
            false
        }
    }
}

/// Parse every top-level record out of a DBLP-style document.
///
/// The root element is transparent; each of its children becomes one
/// [`RawRecord`]. Fails on malformed markup (mismatched or unclosed tags).
pub fn parse_records(xml: &str) -> Result<Vec<RawRecord>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut records = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 1 {
                    let element =
                        String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    records.push(parse_record(&mut reader, &element)?);
                } else {
                    depth += 1;
                }
            }
            Event::Empty(e) => {
                if depth == 1 {
                    records.push(RawRecord {
                        element: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                        ..RawRecord::default()
                    });
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        bail!("unclosed element at end of input");
    }
    Ok(records)
}

/// Parse one record element; the reader is positioned just past its start
/// tag and is consumed through the matching end tag.
fn parse_record(reader: &mut Reader<&[u8]>, element: &str) -> Result<RawRecord> {
    let mut record = RawRecord {
        element: element.to_string(),
        ..RawRecord::default()
    };

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"author" => {
                    let text = reader.read_text(e.name())?;
                    record.authors.push(normalize_text(&text));
                }
                b"title" => {
                    let text = reader.read_text(e.name())?;
                    record.title = Some(normalize_text(&text));
                }
                b"year" => {
                    let text = reader.read_text(e.name())?;
                    record.year = Some(normalize_text(&text));
                }
                _ => {
                    // Other fields (pages, ee, booktitle, ...) are irrelevant
                    // but must still be well formed.
                    reader.read_to_end(e.name())?;
                }
            },
            Event::End(_) => return Ok(record),
            Event::Eof => bail!("unexpected end of input inside <{element}>"),
            _ => {}
        }
    }
}

/// Normalize element text: trim and resolve XML escapes.
fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    match unescape(trimmed) {
        Ok(unescaped) => unescaped.trim().to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// A record that passed validation, ready for interning into the model.
#[derive(Debug)]
struct ValidRecord<'a> {
    kind: PublicationKind,
    title: String,
    year: i32,
    authors: &'a [String],
}

/// Decide retention and normalize fields for one raw record.
///
/// Returns `None` for records outside the closed kind set and for records
/// without an integer-parseable year.
fn validate(record: &RawRecord) -> Option<ValidRecord<'_>> {
    let kind = PublicationKind::from_element(&record.element)?;
    let year = record.year.as_deref()?.trim().parse::<i32>().ok()?;
    Some(ValidRecord {
        kind,
        title: record.title.clone().unwrap_or_default(),
        year,
        authors: &record.authors,
    })
}

fn build_model(records: &[RawRecord]) -> Database {
    let mut publications: Vec<Publication> = Vec::new();
    let mut authors = AuthorArena::new();
    let mut author_pubs: Vec<Vec<usize>> = Vec::new();

    for record in records {
        let Some(valid) = validate(record) else {
            debug!(element = %record.element, "dropping record failing validation");
            continue;
        };

        let index = publications.len();
        let mut ids = Vec::with_capacity(valid.authors.len());
        for name in valid.authors {
            let id = authors.intern(name);
            if author_pubs.len() <= id.0 as usize {
                author_pubs.push(Vec::new());
            }
            // An author repeated on the same record is linked once.
            let pubs = &mut author_pubs[id.0 as usize];
            if pubs.last() != Some(&index) {
                pubs.push(index);
            }
            ids.push(id);
        }
        publications.push(Publication::new(valid.title, valid.year, valid.kind, ids));
    }

    Database {
        publications,
        authors,
        author_pubs,
    }
}
