//! Query Builder
//!
//! Pure functions turning typed catalog requests into [`QueryDescriptor`]s.
//! Nothing here performs I/O or keeps state, so equal inputs always yield
//! equal descriptors, and therefore equal cache keys.
//!
//! Full-text descriptors never carry a sort: backend relevance ranking is
//! authoritative for searches.

use movies_domain::constants::{
    FILM_GENRE_ID_FIELD, FILM_GENRES_PATH, FILM_SEARCH_FIELDS, GENRE_NAME_FIELD,
    GENRE_NAME_SORT_FIELD, GENRES_LIST_LIMIT, PERSON_FILMS_LIMIT, PERSON_SEARCH_FIELD,
    SEARCH_FUZZINESS,
};
use movies_domain::error::Result;
use movies_domain::value_objects::{
    EntityKind, FieldBoost, FilmSort, Filter, FullTextQuery, PageRequest, QueryDescriptor,
    SortDirective, Window,
};
use uuid::Uuid;

/// Structured listing: filters in the given order, optional sort, page window
pub fn build(
    kind: EntityKind,
    filters: Vec<Filter>,
    sort: Option<SortDirective>,
    page: PageRequest,
) -> QueryDescriptor {
    let mut descriptor = QueryDescriptor::new(kind, page.window());
    descriptor.filters = filters;
    descriptor.sort = sort;
    descriptor
}

/// Weighted, fuzzy full-text match over the fields searched for `kind`
pub fn full_text(kind: EntityKind, text: &str, page: PageRequest) -> QueryDescriptor {
    QueryDescriptor::new(kind, page.window()).with_full_text(FullTextQuery {
        text: text.to_string(),
        fields: search_fields(kind),
        fuzziness: Some(SEARCH_FUZZINESS),
    })
}

/// Fields and boosts searched for each entity kind
pub fn search_fields(kind: EntityKind) -> Vec<FieldBoost> {
    match kind {
        EntityKind::Film => FILM_SEARCH_FIELDS
            .iter()
            .map(|(field, boost)| FieldBoost::new(*field, *boost))
            .collect(),
        EntityKind::Person => vec![FieldBoost::new(PERSON_SEARCH_FIELD, 1)],
        EntityKind::Genre => vec![FieldBoost::new(GENRE_NAME_FIELD, 1)],
    }
}

/// Film listing in `sort` order, optionally restricted to films of `genre`
pub fn film_listing(sort: FilmSort, genre: Option<Uuid>, page: PageRequest) -> QueryDescriptor {
    let filters = genre.map(genre_filter).into_iter().collect();
    build(EntityKind::Film, filters, Some(sort.directive()), page)
}

/// Nested membership filter: the film has a genre with this id
pub fn genre_filter(genre: Uuid) -> Filter {
    Filter::Nested {
        path: FILM_GENRES_PATH.to_string(),
        field: FILM_GENRE_ID_FIELD.to_string(),
        value: genre.to_string(),
    }
}

/// Every genre, alphabetically on the `name.keyword` subfield
pub fn genre_listing() -> Result<QueryDescriptor> {
    Ok(
        QueryDescriptor::new(EntityKind::Genre, Window::first(GENRES_LIST_LIMIT)?)
            .with_sort(SortDirective::ascending(GENRE_NAME_SORT_FIELD)),
    )
}

/// Films whose id is one of `ids`, in backend order
pub fn films_by_ids(ids: &[Uuid]) -> Result<QueryDescriptor> {
    let values = ids.iter().map(Uuid::to_string).collect();
    Ok(
        QueryDescriptor::new(EntityKind::Film, Window::first(PERSON_FILMS_LIMIT)?)
            .with_filter(Filter::Ids { values }),
    )
}
