//! # Authorship Positions
//!
//! Counts of first, last, and sole authorship per author, globally and per
//! publication kind. Sole authorship is exclusive: single-author publications
//! are counted only as sole, never as first or last. Unknown authors yield
//! zero-filled results rather than failing.

use crate::model::{AuthorId, PublicationKind};
use crate::Database;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    First,
    Last,
    Sole,
}

/// Publications where `author` is first author among more than one.
pub fn times_author_appears_first(db: &Database, author: &str) -> u64 {
    position_total(db, author, Position::First)
}

/// Publications where `author` is last author among more than one.
pub fn times_author_appears_last(db: &Database, author: &str) -> u64 {
    position_total(db, author, Position::Last)
}

/// Publications where `author` is the only author.
pub fn times_author_appears_sole(db: &Database, author: &str) -> u64 {
    position_total(db, author, Position::Sole)
}

/// Per-kind publication counts for one author, with a trailing total.
///
/// The vector has [`PublicationKind::COUNT`] + 1 elements and is all zero for
/// unknown authors.
pub fn publications_by_author_name(db: &Database, author: &str) -> Vec<u64> {
    let mut counts = vec![0u64; PublicationKind::COUNT + 1];
    if let Some(id) = db.authors.get(author) {
        for &index in &db.author_pubs[id.0 as usize] {
            counts[db.publications[index].kind.index()] += 1;
        }
        counts[PublicationKind::COUNT] = counts[..PublicationKind::COUNT].iter().sum();
    }
    counts
}

/// Three rows — first, last, sole — each per kind with a trailing total.
pub fn detailed_publications_by_author_name(db: &Database, author: &str) -> Vec<Vec<u64>> {
    [Position::First, Position::Last, Position::Sole]
        .into_iter()
        .map(|position| {
            let mut row = vec![0u64; PublicationKind::COUNT + 1];
            if let Some(id) = db.authors.get(author) {
                let counts = position_counts(db, id, position);
                row[..PublicationKind::COUNT].copy_from_slice(&counts);
                row[PublicationKind::COUNT] = counts.iter().sum();
            }
            row
        })
        .collect()
}

fn position_total(db: &Database, author: &str, position: Position) -> u64 {
    match db.authors.get(author) {
        Some(id) => position_counts(db, id, position).iter().sum(),
        None => 0,
    }
}

fn position_counts(
    db: &Database,
    id: AuthorId,
    position: Position,
) -> [u64; PublicationKind::COUNT] {
    let mut counts = [0u64; PublicationKind::COUNT];
    for &index in &db.author_pubs[id.0 as usize] {
        let publication = &db.publications[index];
        let authors = &publication.authors;
        let hit = match position {
            Position::First => authors.len() > 1 && authors.first() == Some(&id),
            Position::Last => authors.len() > 1 && authors.last() == Some(&id),
            Position::Sole => authors.len() == 1 && authors[0] == id,
        };
        if hit {
            counts[publication.kind.index()] += 1;
        }
    }
    counts
}
