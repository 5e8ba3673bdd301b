//! Shared corpus fixtures for the integration tests.
//!
//! Each fixture is a complete DBLP-style document small enough to verify the
//! expected numbers by hand.

#![allow(dead_code)]

use bibliograph_rs::Database;

/// Load a fixture, asserting the read succeeds.
pub fn load(xml: &str) -> Database {
    let mut db = Database::new();
    assert!(db.read_str(xml), "fixture should parse");
    db
}

/// Round to one decimal place, matching the precision the statistics tests
/// assert at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One conference paper with two authors.
pub const SIMPLE: &str = "<dblp>\
<inproceedings>\
<author>Stefano Ceri</author><author>Piero Fraternali</author>\
<title>Design Principles</title><year>9999</year>\
</inproceedings>\
</dblp>";

/// Truncated markup; must be rejected outright.
pub const INVALID: &str = "<dblp><article><author>Duy</author>";

/// Mismatched end tag; must be rejected outright.
pub const MISMATCHED: &str = "<dblp><article></inproceedings></dblp>";

/// Well-formed records that all fail year validation.
pub const MISSING_YEAR: &str = "<dblp>\
<article><author>Ann</author><title>No Year</title></article>\
<article><author>Ben</author><title>Bad Year</title><year>20xx</year></article>\
</dblp>";

/// A record without a title is retained with an empty one.
pub const MISSING_TITLE: &str = "<dblp>\
<inproceedings><author>Ann</author><year>2007</year></inproceedings>\
</dblp>";

/// A retained record with no authors at all, next to an unknown record kind.
pub const SPARSE: &str = "<dblp>\
<article><title>Unattributed</title><year>2003</year></article>\
<phdthesis><author>Ann</author><title>Thesis</title><year>2003</year></phdthesis>\
</dblp>";

/// Author counts 2, 2, 3: mean 2.3, median 2, mode [2].
pub const AUTHORS_PER_PUBLICATION: &str = "<dblp>\
<article><author>A</author><author>B</author><title>p1</title><year>2005</year></article>\
<article><author>C</author><author>D</author><title>p2</title><year>2005</year></article>\
<article><author>E</author><author>F</author><author>G</author><title>p3</title><year>2005</year></article>\
</dblp>";

/// Publication counts per author 1, 2, 2, 1: mean 1.5, median 1.5, mode [1, 2].
pub const PUBLICATIONS_PER_AUTHOR: &str = "<dblp>\
<article><author>X</author><author>Y</author><title>p1</title><year>2005</year></article>\
<article><author>Y</author><author>W</author><title>p2</title><year>2005</year></article>\
<article><author>W</author><author>Z</author><title>p3</title><year>2005</year></article>\
</dblp>";

/// Yearly publication counts 1, 3, 3, 3: mean 2.5, median 3, mode [3].
pub const PUBLICATIONS_PER_YEAR: &str = "<dblp>\
<article><author>A</author><title>p</title><year>2010</year></article>\
<article><author>A</author><title>p</title><year>2011</year></article>\
<article><author>A</author><title>p</title><year>2011</year></article>\
<article><author>A</author><title>p</title><year>2011</year></article>\
<article><author>A</author><title>p</title><year>2012</year></article>\
<article><author>A</author><title>p</title><year>2012</year></article>\
<article><author>A</author><title>p</title><year>2012</year></article>\
<article><author>A</author><title>p</title><year>2013</year></article>\
<article><author>A</author><title>p</title><year>2013</year></article>\
<article><author>A</author><title>p</title><year>2013</year></article>\
</dblp>";

/// Yearly distinct-author unions of size 0, 2, 4, 5:
/// mean 2.8, median 3, mode [0, 2, 4, 5].
pub const AUTHORS_PER_YEAR: &str = "<dblp>\
<article><title>anonymous</title><year>2010</year></article>\
<article><author>Ann</author><author>Ben</author><title>p</title><year>2011</year></article>\
<article><author>Carl</author><author>Dora</author><title>p</title><year>2012</year></article>\
<article><author>Dora</author><author>Emil</author><author>Fay</author><title>p</title><year>2012</year></article>\
<article><author>Gus</author><author>Hal</author><author>Ida</author><author>Jon</author><author>Kim</author><title>p</title><year>2013</year></article>\
</dblp>";

/// Per-author authors-per-publication means 1.5, 2, 1.
pub const THREE_AUTHORS: &str = "<dblp>\
<article><author>author1</author><title>p1</title><year>2005</year></article>\
<article><author>author1</author><author>author2</author><title>p2</title><year>2005</year></article>\
<article><author>author3</author><title>p3</title><year>2005</year></article>\
</dblp>";

/// Canonical first/last/sole corpus: Maryam first 3 times, Meng first twice
/// and last three times, Mohammed last twice, Aris sole once.
pub const FIRST_LAST: &str = "<dblp>\
<inproceedings><author>Maryam</author><author>Mohammed</author><author>Meng</author><title>p1</title><year>2014</year></inproceedings>\
<inproceedings><author>Maryam</author><author>Mohammed</author><author>Meng</author><title>p2</title><year>2014</year></inproceedings>\
<inproceedings><author>Maryam</author><author>Mohammed</author><author>Meng</author><title>p3</title><year>2014</year></inproceedings>\
<inproceedings><author>Meng</author><author>Maryam</author><author>Mohammed</author><title>p4</title><year>2014</year></inproceedings>\
<inproceedings><author>Meng</author><author>Mohammed</author><title>p5</title><year>2014</year></inproceedings>\
<inproceedings><author>Aris</author><title>p6</title><year>2014</year></inproceedings>\
</dblp>";

/// Mixed-kind corpus for the detailed first/last/sole breakdown of
/// Author A and Author B.
pub const FLS_DETAILED: &str = "<dblp>\
<inproceedings><author>Author A</author><author>Author B</author><title>c1</title><year>2015</year></inproceedings>\
<inproceedings><author>Author A</author><author>Author B</author><title>c2</title><year>2015</year></inproceedings>\
<article><author>Author A</author><author>Author B</author><title>j1</title><year>2015</year></article>\
<book><author>Author B</author><author>Author A</author><title>b1</title><year>2015</year></book>\
<incollection><author>Author B</author><author>Author A</author><title>k1</title><year>2015</year></incollection>\
<inproceedings><author>Author A</author><title>c3</title><year>2015</year></inproceedings>\
<article><author>Author A</author><title>j2</title><year>2015</year></article>\
<inproceedings><author>Author B</author><title>c4</title><year>2015</year></inproceedings>\
<article><author>Author B</author><title>j3</title><year>2015</year></article>\
<book><author>Author B</author><title>b2</title><year>2015</year></book>\
<incollection><author>Author B</author><title>k2</title><year>2015</year></incollection>\
</dblp>";

/// Graph corpus: edges A-B, A-D, B-D, A-E, B-C; Author F stays isolated.
pub const SEPARATION: &str = "<dblp>\
<inproceedings><author>Author A</author><author>Author B</author><author>Author D</author><title>p1</title><year>2016</year></inproceedings>\
<inproceedings><author>Author A</author><author>Author E</author><title>p2</title><year>2016</year></inproceedings>\
<inproceedings><author>Author B</author><author>Author C</author><title>p3</title><year>2016</year></inproceedings>\
<inproceedings><author>Author F</author><title>p4</title><year>2016</year></inproceedings>\
</dblp>";
