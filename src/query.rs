//! # Statistics Queries
//!
//! The statistics engine: count metrics grouped globally, per author, or per
//! year, aggregated under a caller-chosen central-tendency statistic. Every
//! operation returns a [`Table`] whose rows align to its header; per-author
//! tables use author-appearance order and per-year tables ascend by year.

use crate::model::{AuthorId, Publication, PublicationKind};
use crate::stats::{self, Stat};
use crate::table::{Cell, Table};
use crate::Database;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// Authors-per-publication counts aggregated over the whole corpus.
pub fn average_authors_per_publication(db: &Database, stat: Stat) -> Table {
    let counts: Vec<u64> = db
        .publications
        .iter()
        .map(|publication| publication.author_count() as u64)
        .collect();

    single_row(
        format!("{} authors per publication", stat.label()),
        stat,
        &counts,
    )
}

/// Publications-per-author counts aggregated over all authors.
pub fn average_publications_per_author(db: &Database, stat: Stat) -> Table {
    let counts: Vec<u64> = db
        .author_pubs
        .iter()
        .map(|pubs| pubs.len() as u64)
        .collect();

    single_row(
        format!("{} publications per author", stat.label()),
        stat,
        &counts,
    )
}

/// Publications-per-year counts aggregated over all years.
pub fn average_publications_in_a_year(db: &Database, stat: Stat) -> Table {
    let counts: Vec<u64> = publications_per_year(db)
        .values()
        .map(|indices| indices.len() as u64)
        .collect();

    single_row(
        format!("{} publications in a year", stat.label()),
        stat,
        &counts,
    )
}

/// Distinct-author union sizes per year, aggregated, plus the literal sorted
/// union-size sequence for verification.
pub fn average_authors_in_a_year(db: &Database, stat: Stat) -> Table {
    let mut sizes: Vec<u64> = author_unions_per_year(db)
        .values()
        .map(|authors| authors.len() as u64)
        .collect();
    let value = stats::summarize(stat, &sizes);
    sizes.sort_unstable();

    let mut table = Table::new([
        format!("{} authors in a year", stat.label()),
        "Authors per year".to_string(),
    ]);
    table.push_row(vec![value.into(), Cell::Values(sizes)]);
    table
}

/// Per author: the authors-per-publication metric restricted to that
/// author's own publications, aggregated with `stat`.
pub fn average_authors_per_publication_by_author(db: &Database, stat: Stat) -> Table {
    let mut table = Table::new([
        "Author".to_string(),
        format!("{} authors per publication", stat.label()),
    ]);

    for (position, name) in db.authors.names().iter().enumerate() {
        let counts: Vec<u64> = db.author_pubs[position]
            .iter()
            .map(|&index| db.publications[index].author_count() as u64)
            .collect();
        table.push_row(vec![
            Cell::from(name.clone()),
            stats::summarize(stat, &counts).into(),
        ]);
    }
    table
}

/// The fixed two-row summary: publication counts per kind, then
/// author-appearance counts per kind, each with a trailing total.
pub fn publication_summary(db: &Database) -> Table {
    let mut publication_counts = [0u64; PublicationKind::COUNT];
    let mut author_appearances = [0u64; PublicationKind::COUNT];
    for publication in &db.publications {
        publication_counts[publication.kind.index()] += 1;
        author_appearances[publication.kind.index()] += publication.author_count() as u64;
    }

    let mut table = Table::new(kind_header("Details"));
    table.push_row(labelled_kind_row(
        Cell::from("Number of publications"),
        &publication_counts,
    ));
    table.push_row(labelled_kind_row(
        Cell::from("Number of authors"),
        &author_appearances,
    ));
    table
}

/// One row per author: publication counts per kind plus a total.
pub fn publications_by_author(db: &Database) -> Table {
    let mut table = Table::new(kind_header("Author"));

    for (position, name) in db.authors.names().iter().enumerate() {
        let mut counts = [0u64; PublicationKind::COUNT];
        for &index in &db.author_pubs[position] {
            counts[db.publications[index].kind.index()] += 1;
        }
        table.push_row(labelled_kind_row(Cell::from(name.clone()), &counts));
    }
    table
}

/// One row per year, ascending: publication counts per kind plus a total.
pub fn publications_by_year(db: &Database) -> Table {
    let mut table = Table::new(kind_header("Year"));

    for (year, indices) in publications_per_year(db) {
        let mut counts = [0u64; PublicationKind::COUNT];
        for index in indices {
            counts[db.publications[index].kind.index()] += 1;
        }
        table.push_row(labelled_kind_row(Cell::from(year), &counts));
    }
    table
}

/// One row per year, ascending: that year's per-author publication counts
/// aggregated with `stat`.
pub fn average_publications_per_author_by_year(db: &Database, stat: Stat) -> Table {
    let mut table = Table::new([
        "Year".to_string(),
        format!("{} publications per author", stat.label()),
    ]);

    for (year, indices) in publications_per_year(db) {
        let mut per_author: FxHashMap<AuthorId, u64> = FxHashMap::default();
        for index in &indices {
            for id in distinct_author_ids(&db.publications[*index]) {
                *per_author.entry(id).or_insert(0) += 1;
            }
        }
        let counts: Vec<u64> = per_author.values().copied().collect();
        table.push_row(vec![Cell::from(year), stats::summarize(stat, &counts).into()]);
    }
    table
}

/// One row per year, ascending: the distinct author count for that year.
pub fn author_totals_by_year(db: &Database) -> Table {
    let mut table = Table::new(["Year", "Number of authors"]);

    for (year, authors) in author_unions_per_year(db) {
        table.push_row(vec![Cell::from(year), Cell::from(authors.len() as u64)]);
    }
    table
}

fn single_row(label: String, stat: Stat, counts: &[u64]) -> Table {
    let mut table = Table::new([label]);
    table.push_row(vec![stats::summarize(stat, counts).into()]);
    table
}

/// Header of a per-kind table: a leading label column, one column per kind
/// in fixed order, and a trailing total.
fn kind_header(first: &str) -> Vec<String> {
    let mut header = Vec::with_capacity(PublicationKind::COUNT + 2);
    header.push(first.to_string());
    for kind in PublicationKind::ALL {
        header.push(kind.label().to_string());
    }
    header.push("Total".to_string());
    header
}

fn labelled_kind_row(label: Cell, counts: &[u64; PublicationKind::COUNT]) -> Vec<Cell> {
    let mut row = Vec::with_capacity(PublicationKind::COUNT + 2);
    row.push(label);
    row.extend(counts.iter().map(|&count| Cell::from(count)));
    row.push(Cell::from(counts.iter().sum::<u64>()));
    row
}

/// Publication indices grouped by year, ascending.
fn publications_per_year(db: &Database) -> BTreeMap<i32, Vec<usize>> {
    let mut per_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (index, publication) in db.publications.iter().enumerate() {
        per_year.entry(publication.year).or_default().push(index);
    }
    per_year
}

/// Distinct authors publishing in each year, ascending. Years whose
/// publications carry no authors still appear, with an empty union.
fn author_unions_per_year(db: &Database) -> BTreeMap<i32, FxHashSet<AuthorId>> {
    let mut unions: BTreeMap<i32, FxHashSet<AuthorId>> = BTreeMap::new();
    for publication in &db.publications {
        let authors = unions.entry(publication.year).or_default();
        authors.extend(publication.authors.iter().copied());
    }
    unions
}

/// Author ids of one publication with duplicates removed, order preserved.
fn distinct_author_ids(publication: &Publication) -> Vec<AuthorId> {
    let mut seen = FxHashSet::default();
    publication
        .authors
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}
