//! Display-string helpers for view code.

use crate::entities::{Author, AuthorKind, Source, SourceKind};

/// Display name for a single author: `"Last, First"` for persons, the
/// organization name otherwise.
#[must_use]
pub fn author_display_name(author: &Author) -> String {
    match &author.kind {
        AuthorKind::Person {
            first_name,
            last_name,
        } => format!("{last_name}, {first_name}"),
        AuthorKind::Organization { organization_name } => organization_name.clone(),
    }
}

/// Display names of several authors joined with `"; "`, in given order.
#[must_use]
pub fn author_list_display(authors: &[Author]) -> String {
    authors
        .iter()
        .map(author_display_name)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Display name for a source. Journal sources lead with the article name.
#[must_use]
pub fn source_display_name(source: &Source) -> String {
    match &source.kind {
        SourceKind::Journal(journal) => format!("{}. {}", journal.article_name, source.title),
        SourceKind::Book(_) | SourceKind::Web(_) => source.title.clone(),
    }
}
