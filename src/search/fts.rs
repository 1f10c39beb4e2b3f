//! Translation of search descriptors into SQLite FTS5 queries.

use super::query::{Autocomplete, Collection, SearchQuery};

/// An FTS5 table indexing some columns of a content table.
#[derive(Debug)]
pub struct SearchIndex {
    pub table: &'static str,
    pub fts_table: &'static str,
    pub columns: &'static [&'static str],
}

pub const HOTELS_INDEX: SearchIndex = SearchIndex {
    table: "hotels",
    fts_table: "hotels_search",
    columns: &["hotel_name", "city", "country"],
};

pub const CITIES_INDEX: SearchIndex = SearchIndex {
    table: "cities",
    fts_table: "cities_search",
    columns: &["name"],
};

pub const COUNTRIES_INDEX: SearchIndex = SearchIndex {
    table: "countries",
    fts_table: "countries_search",
    columns: &["name"],
};

pub fn index_for(collection: Collection) -> &'static SearchIndex {
    match collection {
        Collection::Hotels => &HOTELS_INDEX,
        Collection::Cities => &CITIES_INDEX,
        Collection::Countries => &COUNTRIES_INDEX,
    }
}

/// A ready-to-run statement. `sql` takes the match expression as `?1` and
/// the limit as `?2`.
#[derive(Debug, Clone, PartialEq)]
pub struct FtsPlan {
    pub sql: String,
    pub match_expr: String,
    pub limit: i64,
}

/// Returns `None` when the query text has nothing the tokenizer would index,
/// in which case nothing can match.
pub fn plan(query: &SearchQuery) -> Option<FtsPlan> {
    let index = index_for(query.collection);
    let phrase = prefix_phrase(&query.text)?;

    let clauses: Vec<&Autocomplete> = query
        .should
        .iter()
        .filter(|clause| {
            let indexed = index.columns.contains(&clause.path);
            if !indexed {
                log::warn!("{} is not indexed on {}", clause.path, index.table);
            }
            indexed
        })
        .collect();
    let required = query.minimum_should_match.max(1);
    if clauses.len() < required {
        return None;
    }

    let match_expr = combinations(&clauses, required)
        .iter()
        .map(|group| {
            let terms: Vec<String> = group
                .iter()
                .map(|clause| format!("{} : {}", clause.path, phrase))
                .collect();
            if terms.len() == 1 {
                terms[0].clone()
            } else {
                format!("({})", terms.join(" AND "))
            }
        })
        .collect::<Vec<_>>()
        .join(" OR ");

    let weights: Vec<String> = index
        .columns
        .iter()
        .map(|column| {
            let boost = clauses
                .iter()
                .find(|clause| clause.path == *column)
                .map_or(0.0, |clause| clause.boost);
            format!("{boost:?}")
        })
        .collect();

    let projection: Vec<String> = query
        .projection
        .iter()
        .map(|column| format!("t.{column}"))
        .collect();

    let sql = format!(
        "SELECT {projection} FROM {fts} JOIN {table} AS t ON t.seq = {fts}.rowid \
         WHERE {fts} MATCH ?1 ORDER BY bm25({fts}, {weights}) LIMIT ?2",
        projection = projection.join(", "),
        fts = index.fts_table,
        table = index.table,
        weights = weights.join(", "),
    );

    Some(FtsPlan {
        sql,
        match_expr,
        limit: query.limit as i64,
    })
}

/// Quotes the text as one FTS5 phrase whose last token is prefix-matched.
/// Control characters become spaces; SQLite would cut the string at a NUL.
fn prefix_phrase(text: &str) -> Option<String> {
    let text: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let text = text.trim();
    if !text.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(format!("\"{}\"*", text.replace('"', "\"\"")))
}

fn combinations<'a, T>(items: &[&'a T], k: usize) -> Vec<Vec<&'a T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let (first, rest) = (items[0], &items[1..]);
    let mut with_first: Vec<Vec<&T>> = combinations(rest, k - 1)
        .into_iter()
        .map(|mut group| {
            group.insert(0, first);
            group
        })
        .collect();
    with_first.extend(combinations(rest, k));
    with_first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::query::compose_search_queries;

    #[test]
    fn hotels_plan_ors_the_three_fields_with_boosted_hotel_name() {
        let queries = compose_search_queries("Lis");
        let plan = plan(&queries.hotels).unwrap();

        assert_eq!(
            plan.match_expr,
            r#"hotel_name : "Lis"* OR city : "Lis"* OR country : "Lis"*"#
        );
        assert_eq!(
            plan.sql,
            "SELECT t.id, t.hotel_name, t.city, t.country FROM hotels_search \
             JOIN hotels AS t ON t.seq = hotels_search.rowid \
             WHERE hotels_search MATCH ?1 ORDER BY bm25(hotels_search, 2.0, 1.0, 1.0) LIMIT ?2"
        );
        assert_eq!(plan.limit, 10);
    }

    #[test]
    fn name_plans_project_id_and_name() {
        let queries = compose_search_queries("Por");
        let plan = plan(&queries.countries).unwrap();

        assert_eq!(plan.match_expr, r#"name : "Por"*"#);
        assert!(plan.sql.starts_with("SELECT t.id, t.name FROM countries_search"));
        assert!(plan.sql.contains("bm25(countries_search, 1.0)"));
    }

    #[test]
    fn quotes_are_escaped_inside_the_phrase() {
        let queries = compose_search_queries(r#"the "grand" lis"#);
        let plan = plan(&queries.cities).unwrap();
        assert_eq!(plan.match_expr, r#"name : "the ""grand"" lis"*"#);
    }

    #[test]
    fn control_characters_are_replaced_by_spaces() {
        let queries = compose_search_queries("Lis\0bon\t\n");
        let rendered = plan(&queries.cities).unwrap();
        assert_eq!(rendered.match_expr, r#"name : "Lis bon"*"#);

        let queries = compose_search_queries("\0\u{1b}");
        assert!(plan(&queries.cities).is_none());
    }

    #[test]
    fn operator_words_stay_inside_the_phrase() {
        let queries = compose_search_queries("rome OR NOT");
        let plan = plan(&queries.cities).unwrap();
        assert_eq!(plan.match_expr, r#"name : "rome OR NOT"*"#);
    }

    #[test]
    fn text_without_searchable_characters_has_no_plan() {
        for text in ["", "   ", "***", "\"\""] {
            let queries = compose_search_queries(text);
            assert!(plan(&queries.hotels).is_none(), "{text:?}");
        }
    }

    #[test]
    fn minimum_should_match_above_one_requires_clause_pairs() {
        let mut query = compose_search_queries("Lis").hotels;
        query.minimum_should_match = 2;
        let plan = plan(&query).unwrap();
        assert_eq!(
            plan.match_expr,
            r#"(hotel_name : "Lis"* AND city : "Lis"*) OR (hotel_name : "Lis"* AND country : "Lis"*) OR (city : "Lis"* AND country : "Lis"*)"#
        );
    }

    #[test]
    fn unindexed_fields_are_dropped() {
        let mut query = compose_search_queries("Lis").cities;
        query.should.push(Autocomplete::on("population"));
        let plan = plan(&query).unwrap();
        assert_eq!(plan.match_expr, r#"name : "Lis"*"#);
    }
}
