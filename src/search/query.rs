//! Search-query descriptors.
//!
//! A descriptor says *what* to ask the search index for: which collection,
//! which fields to autocomplete against and how much each one counts, how
//! many hits to keep and which fields to return. Executing it is the
//! store's business.

pub const SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Hotels,
    Cities,
    Countries,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Hotels => "hotels",
            Collection::Cities => "cities",
            Collection::Countries => "countries",
        }
    }
}

/// Prefix match of the query text against one indexed field.
#[derive(Debug, Clone, PartialEq)]
pub struct Autocomplete {
    pub path: &'static str,
    pub boost: f64,
}

impl Autocomplete {
    pub fn on(path: &'static str) -> Self {
        Autocomplete { path, boost: 1.0 }
    }

    pub fn boosted(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub collection: Collection,
    pub text: String,
    /// Disjunction: a document matches when at least
    /// `minimum_should_match` clauses do.
    pub should: Vec<Autocomplete>,
    pub minimum_should_match: usize,
    pub limit: usize,
    pub projection: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQueries {
    pub hotels: SearchQuery,
    pub cities: SearchQuery,
    pub countries: SearchQuery,
}

const HOTEL_PROJECTION: &[&str] = &["id", "hotel_name", "city", "country"];
const NAME_PROJECTION: &[&str] = &["id", "name"];

/// Hotel-name hits count double so that typing a hotel's name ranks the
/// hotel above hotels that merely sit in a matching city or country.
pub const HOTEL_NAME_BOOST: f64 = 2.0;

pub fn compose_search_queries(term: &str) -> SearchQueries {
    SearchQueries {
        hotels: SearchQuery {
            collection: Collection::Hotels,
            text: term.to_string(),
            should: vec![
                Autocomplete::on("hotel_name").boosted(HOTEL_NAME_BOOST),
                Autocomplete::on("city"),
                Autocomplete::on("country"),
            ],
            minimum_should_match: 1,
            limit: SEARCH_LIMIT,
            projection: HOTEL_PROJECTION,
        },
        cities: name_query(Collection::Cities, term),
        countries: name_query(Collection::Countries, term),
    }
}

fn name_query(collection: Collection, term: &str) -> SearchQuery {
    SearchQuery {
        collection,
        text: term.to_string(),
        should: vec![Autocomplete::on("name")],
        minimum_should_match: 1,
        limit: SEARCH_LIMIT,
        projection: NAME_PROJECTION,
    }
}
