//! # Entity Model
//!
//! Core data structures for the loaded corpus: the closed set of publication
//! kinds, interned author identities, and publications with ordered author
//! lists. The model is built once at load time and treated as immutable by
//! every query component.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact identifier for authors, assigned in first-appearance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuthorId(pub u32);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// The closed set of publication kinds.
///
/// Declaration order is the column order of every per-kind table; column
/// position is part of the observable contract, so reordering variants is a
/// breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicationKind {
    ConferencePaper,
    Journal,
    Book,
    BookChapter,
}

impl PublicationKind {
    /// Number of kinds; per-kind tables carry this many columns plus a total.
    pub const COUNT: usize = 4;

    /// All kinds in column order.
    pub const ALL: [PublicationKind; PublicationKind::COUNT] = [
        PublicationKind::ConferencePaper,
        PublicationKind::Journal,
        PublicationKind::Book,
        PublicationKind::BookChapter,
    ];

    /// Column position of this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column label used by summary tables.
    pub fn label(self) -> &'static str {
        match self {
            PublicationKind::ConferencePaper => "Conference papers",
            PublicationKind::Journal => "Journals",
            PublicationKind::Book => "Books",
            PublicationKind::BookChapter => "Book chapters",
        }
    }

    /// Map a DBLP-style record element name to a kind.
    pub fn from_element(name: &str) -> Option<Self> {
        match name {
            "inproceedings" => Some(PublicationKind::ConferencePaper),
            "article" => Some(PublicationKind::Journal),
            "book" => Some(PublicationKind::Book),
            "incollection" => Some(PublicationKind::BookChapter),
            _ => None,
        }
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single retained publication.
///
/// `authors` preserves authorship order: position 0 is the first author and
/// the final position is the last author. A one-element list is a sole
/// authorship; the list may also be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication title; empty when the source record carried none.
    pub title: String,
    /// Publication year. Records without a parseable year are never retained.
    pub year: i32,
    /// Kind of publication, from the closed set.
    pub kind: PublicationKind,
    /// Authors in authorship order.
    pub authors: Vec<AuthorId>,
}

impl Publication {
    /// Create a new publication.
    pub fn new(title: String, year: i32, kind: PublicationKind, authors: Vec<AuthorId>) -> Self {
        Self {
            title,
            year,
            kind,
            authors,
        }
    }

    /// Number of author positions on this publication.
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }
}

/// Interner mapping author names to compact ids.
///
/// Author identity is the exact name string; no normalization or fuzzy
/// matching is applied. Ids are assigned in first-appearance order, which is
/// also the deterministic row order of every per-author table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorArena {
    name_to_id: FxHashMap<String, AuthorId>,
    names: Vec<String>,
}

impl AuthorArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an author name and return its id.
    pub fn intern(&mut self, name: &str) -> AuthorId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = AuthorId(self.names.len() as u32);
        self.name_to_id.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Look up the id for a name, if the author exists in the corpus.
    pub fn get(&self, name: &str) -> Option<AuthorId> {
        self.name_to_id.get(name).copied()
    }

    /// Name of an interned author.
    pub fn name(&self, id: AuthorId) -> &str {
        &self.names[id.0 as usize]
    }

    /// All interned names in first-appearance order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct authors.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the arena holds no authors.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_arena_interning() {
        let mut arena = AuthorArena::new();

        let alice = arena.intern("Alice Jones");
        let bob = arena.intern("Bob Smith");
        let alice_again = arena.intern("Alice Jones");

        assert_eq!(alice, alice_again);
        assert_ne!(alice, bob);
        assert_eq!(arena.name(alice), "Alice Jones");
        assert_eq!(arena.get("Bob Smith"), Some(bob));
        assert_eq!(arena.get("Unknown"), None);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_arena_preserves_appearance_order() {
        let mut arena = AuthorArena::new();
        arena.intern("C");
        arena.intern("A");
        arena.intern("B");
        arena.intern("A");

        assert_eq!(arena.names(), &["C", "A", "B"]);
    }

    #[test]
    fn test_kind_column_order() {
        for (position, kind) in PublicationKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
        assert_eq!(PublicationKind::ConferencePaper.index(), 0);
        assert_eq!(PublicationKind::BookChapter.index(), 3);
    }

    #[test]
    fn test_kind_element_mapping() {
        assert_eq!(
            PublicationKind::from_element("inproceedings"),
            Some(PublicationKind::ConferencePaper)
        );
        assert_eq!(
            PublicationKind::from_element("article"),
            Some(PublicationKind::Journal)
        );
        assert_eq!(
            PublicationKind::from_element("book"),
            Some(PublicationKind::Book)
        );
        assert_eq!(
            PublicationKind::from_element("incollection"),
            Some(PublicationKind::BookChapter)
        );
        assert_eq!(PublicationKind::from_element("phdthesis"), None);
        assert_eq!(PublicationKind::from_element(""), None);
    }

    #[test]
    fn test_publication_author_count() {
        let publication = Publication::new(
            "On Testing".to_string(),
            2014,
            PublicationKind::Journal,
            vec![AuthorId(0), AuthorId(1)],
        );
        assert_eq!(publication.author_count(), 2);
    }
}
