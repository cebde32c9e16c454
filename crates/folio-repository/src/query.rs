//! Dynamic equality filters and their translation to SQL.
//!
//! A [`Filter`] is an ordered list of predicates. Clauses are emitted in
//! insertion order. Column names are taken as given; an unknown column is
//! reported by the backend.

use sqlx::{MySql, QueryBuilder};
use std::fmt;

/// A value on the right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FilterValue {
    /// Renders the value as a SQL literal.
    ///
    /// Text is single-quoted with embedded quotes doubled.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    fn push_bind(&self, builder: &mut QueryBuilder<'_, MySql>) {
        match self {
            Self::Text(s) => builder.push_bind(s.clone()),
            Self::Int(n) => builder.push_bind(*n),
            Self::Float(n) => builder.push_bind(*n),
            Self::Bool(b) => builder.push_bind(*b),
        };
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Comparison operator of a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
}

impl Operator {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
        }
    }
}

/// How predicates are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joiner {
    #[default]
    And,
    Or,
}

impl Joiner {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// A single `column op value` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: Operator,
    pub value: FilterValue,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.column,
            self.op.as_sql(),
            self.value.to_literal()
        )
    }
}

/// An ordered set of predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Creates an empty filter, which matches every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality predicate.
    #[must_use]
    pub fn equals(mut self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.push(Predicate {
            column: column.into(),
            op: Operator::Eq,
            value: value.into(),
        });
        self
    }

    /// Appends a predicate.
    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Returns the predicates in insertion order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Renders the condition with values inlined as literals.
    ///
    /// For diagnostics only; queries go through [`Filter::push_where`].
    /// An empty filter renders as the empty string.
    #[must_use]
    pub fn render(&self, joiner: Joiner) -> String {
        self.predicates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(joiner.as_sql())
    }

    /// Appends ` WHERE col = ? ...` to `builder`, binding every value.
    ///
    /// Does nothing for an empty filter.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, MySql>, joiner: Joiner) {
        if self.is_empty() {
            return;
        }

        builder.push(" WHERE ");
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                builder.push(joiner.as_sql());
            }
            builder.push(&predicate.column);
            builder.push(" ");
            builder.push(predicate.op.as_sql());
            builder.push(" ");
            predicate.value.push_bind(builder);
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Joiner::And))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_renders_nothing() {
        assert_eq!(Filter::new().render(Joiner::And), "");
        assert_eq!(Filter::new().render(Joiner::Or), "");
    }

    #[test]
    fn test_single_text_predicate() {
        let filter = Filter::new().equals("k", "v");
        assert_eq!(filter.render(Joiner::And), "k = 'v'");
    }

    #[test]
    fn test_single_numeric_predicate() {
        assert_eq!(Filter::new().equals("k", 5).render(Joiner::And), "k = 5");
        assert_eq!(Filter::new().equals("k", 2.5).render(Joiner::And), "k = 2.5");
        assert_eq!(Filter::new().equals("k", true).render(Joiner::And), "k = true");
    }

    #[test]
    fn test_quotes_are_doubled() {
        let filter = Filter::new().equals("title", "O'Brien's");
        assert_eq!(filter.render(Joiner::And), "title = 'O''Brien''s'");
    }

    #[test]
    fn test_insertion_order_and_joiners() {
        let filter = Filter::new().equals("author", "ann").equals("id", "x1");
        assert_eq!(filter.render(Joiner::And), "author = 'ann' AND id = 'x1'");
        assert_eq!(filter.render(Joiner::Or), "author = 'ann' OR id = 'x1'");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_push_where_binds_values() {
        let filter = Filter::new().equals("author", "ann").equals("id", "x1");
        let mut builder = QueryBuilder::<MySql>::new("SELECT id FROM articles");
        filter.push_where(&mut builder, Joiner::And);
        assert_eq!(
            builder.sql(),
            "SELECT id FROM articles WHERE author = ? AND id = ?"
        );
    }

    #[test]
    fn test_push_where_empty_is_noop() {
        let mut builder = QueryBuilder::<MySql>::new("SELECT id FROM articles");
        Filter::new().push_where(&mut builder, Joiner::Or);
        assert_eq!(builder.sql(), "SELECT id FROM articles");
    }

    #[test]
    fn test_injection_attempt_stays_a_literal() {
        let filter = Filter::new().equals("id", "x' OR '1'='1");
        assert_eq!(filter.render(Joiner::And), "id = 'x'' OR ''1''=''1'");

        let mut builder = QueryBuilder::<MySql>::new("SELECT id FROM articles");
        filter.push_where(&mut builder, Joiner::And);
        assert_eq!(builder.sql(), "SELECT id FROM articles WHERE id = ?");
    }
}
