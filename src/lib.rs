//! # Bibliograph
//!
//! An in-memory bibliographic analytics engine. A [`Database`] is populated
//! once from a DBLP-style XML source and then answers read-only queries:
//! aggregate statistics over several groupings, per-author authorship
//! position counts, and co-authorship "degrees of separation" lookups.
//!
//! The model is immutable after a successful [`Database::read`]; every query
//! component reads it without mutation, so a loaded database can be shared
//! freely behind a reference.

pub mod graph;
pub mod ingest;
pub mod model;
pub mod positions;
pub mod query;
pub mod stats;
pub mod table;

// Re-export main types for convenience
pub use graph::CoauthorGraph;
pub use model::{AuthorId, Publication, PublicationKind};
pub use stats::{Stat, StatValue};
pub use table::{Cell, Table};

use model::AuthorArena;
use std::path::Path;

/// The loaded corpus plus every analytics entry point.
///
/// Ingestion is the only mutating operation; a failed read leaves the
/// previous contents untouched and reports `false`.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub(crate) publications: Vec<Publication>,
    pub(crate) authors: AuthorArena,
    /// Per-author publication indices, parallel to the arena; each
    /// publication is linked at most once per author.
    pub(crate) author_pubs: Vec<Vec<usize>>,
}

impl Database {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the corpus from a DBLP-style XML file.
    ///
    /// Returns `false` when the file cannot be read or its markup is
    /// malformed, leaving the current model unchanged. Returns `true` for
    /// well-formed input even when validation drops every record.
    pub fn read<P: AsRef<Path>>(&mut self, path: P) -> bool {
        ingest::read_path(self, path.as_ref())
    }

    /// Load the corpus from an in-memory XML document, under the same
    /// contract as [`Database::read`].
    pub fn read_str(&mut self, xml: &str) -> bool {
        ingest::read_str(self, xml)
    }

    /// All retained publications.
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Distinct author names across all retained publications, in
    /// first-appearance order.
    pub fn get_all_authors(&self) -> &[String] {
        self.authors.names()
    }

    /// Name of an interned author.
    pub fn author_name(&self, id: AuthorId) -> &str {
        self.authors.name(id)
    }

    // --- statistics engine ---

    /// Authors-per-publication counts aggregated over the whole corpus.
    pub fn get_average_authors_per_publication(&self, stat: Stat) -> Table {
        query::average_authors_per_publication(self, stat)
    }

    /// Publications-per-author counts aggregated over all authors.
    pub fn get_average_publications_per_author(&self, stat: Stat) -> Table {
        query::average_publications_per_author(self, stat)
    }

    /// Publications-per-year counts aggregated over all years.
    pub fn get_average_publications_in_a_year(&self, stat: Stat) -> Table {
        query::average_publications_in_a_year(self, stat)
    }

    /// Per-year distinct-author union sizes: the aggregate plus the literal
    /// sorted union-size sequence.
    pub fn get_average_authors_in_a_year(&self, stat: Stat) -> Table {
        query::average_authors_in_a_year(self, stat)
    }

    /// Per author, the aggregate of authors-per-publication over that
    /// author's own publications.
    pub fn get_average_authors_per_publication_by_author(&self, stat: Stat) -> Table {
        query::average_authors_per_publication_by_author(self, stat)
    }

    /// The fixed two-row, per-kind summary table.
    pub fn get_publication_summary(&self) -> Table {
        query::publication_summary(self)
    }

    /// Per-author publication counts broken down by kind.
    pub fn get_publications_by_author(&self) -> Table {
        query::publications_by_author(self)
    }

    /// Per-year publication counts broken down by kind.
    pub fn get_publications_by_year(&self) -> Table {
        query::publications_by_year(self)
    }

    /// Per-year aggregate of that year's per-author publication counts.
    pub fn get_average_publications_per_author_by_year(&self, stat: Stat) -> Table {
        query::average_publications_per_author_by_year(self, stat)
    }

    /// Per-year distinct author totals.
    pub fn get_author_totals_by_year(&self) -> Table {
        query::author_totals_by_year(self)
    }

    // --- authorship positions ---

    /// Publications where `author` appears first among more than one author.
    pub fn get_times_author_appears_first(&self, author: &str) -> u64 {
        positions::times_author_appears_first(self, author)
    }

    /// Publications where `author` appears last among more than one author.
    pub fn get_times_author_appears_last(&self, author: &str) -> u64 {
        positions::times_author_appears_last(self, author)
    }

    /// Publications where `author` is the only author.
    pub fn get_times_author_appears_sole(&self, author: &str) -> u64 {
        positions::times_author_appears_sole(self, author)
    }

    /// Per-kind publication counts for one author, with a trailing total;
    /// all zero for unknown authors.
    pub fn get_publications_by_author_name(&self, author: &str) -> Vec<u64> {
        positions::publications_by_author_name(self, author)
    }

    /// First, last, and sole rows for one author, each per kind with a
    /// trailing total; all zero for unknown authors.
    pub fn get_detailed_publications_by_author_name(&self, author: &str) -> Vec<Vec<u64>> {
        positions::detailed_publications_by_author_name(self, author)
    }

    // --- co-authorship graph ---

    /// Derive the co-authorship graph from the current model.
    pub fn build_coauthor_graph(&self) -> CoauthorGraph {
        graph::build(self)
    }

    /// Shortest-path edge count between two authors; `None` when either is
    /// unknown or no path exists.
    ///
    /// The graph is rebuilt for the call; to run many queries, build it once
    /// with [`Database::build_coauthor_graph`].
    pub fn get_degrees_of_separation(&self, a: &str, b: &str) -> Option<usize> {
        graph::build(self).degrees_of_separation(a, b)
    }
}
