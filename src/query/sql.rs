//! SQL rendering of an [`ItemQuery`].
//!
//! Produces a parameterized statement with `?` placeholders. User input only
//! ever travels in the bindings; column names come from [`ItemField`].

use std::fmt;

use crate::query::{ItemField, ItemQuery, Predicate, Window};

/// Table holding catalog items.
pub const ITEMS_TABLE: &str = "items";

/// A positional bind value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
}

/// A rendered statement with its positional bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub sql: String,
    pub bindings: Vec<Literal>,
}

impl fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.sql)?;
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match binding {
                Literal::Number(n) => write!(f, "{}", n)?,
                Literal::Text(t) => write!(f, "'{}'", t)?,
            }
        }
        f.write_str("]")
    }
}

impl ItemQuery {
    /// Renders `select * from items ...` for this query.
    pub fn to_sql(&self, window: Option<Window>) -> SqlStatement {
        let mut bindings = Vec::new();
        let mut sql = format!("select * from {}", ITEMS_TABLE);

        if !self.predicate.is_trivial() {
            sql.push_str(" where ");
            render(&self.predicate, &mut sql, &mut bindings, true);
        }

        if let Some(sort) = self.sort {
            sql.push_str(&format!(
                " order by {} {}",
                sort.field.column(),
                sort.direction.as_sql()
            ));
        }

        if let Some(window) = window {
            sql.push_str(&format!(" limit {} offset {}", window.limit, window.offset));
        }

        SqlStatement { sql, bindings }
    }

    /// Renders `select count(*) from items ...` for this query.
    pub fn to_count_sql(&self) -> SqlStatement {
        let without_order = ItemQuery::new(self.predicate.clone(), None);
        let SqlStatement { sql, bindings } = without_order.to_sql(None);
        SqlStatement {
            sql: sql.replacen("select *", "select count(*) as aggregate", 1),
            bindings,
        }
    }
}

fn render(predicate: &Predicate, sql: &mut String, bindings: &mut Vec<Literal>, top: bool) {
    match predicate {
        Predicate::Equals { field, value } => {
            sql.push_str(&format!("{} = ?", field.column()));
            bindings.push(Literal::Number(*value));
        }
        Predicate::Contains { field, needle } => {
            sql.push_str(&format!("lower({}) like ?", cast(*field)));
            bindings.push(Literal::Text(like_pattern(needle)));
        }
        Predicate::Or(members) if members.is_empty() => sql.push_str("1 = 0"),
        Predicate::And(members) if members.is_empty() => sql.push_str("1 = 1"),
        Predicate::Or(members) => group(members, " or ", sql, bindings, top),
        Predicate::And(members) => group(members, " and ", sql, bindings, top),
    }
}

fn group(
    members: &[Predicate],
    joiner: &str,
    sql: &mut String,
    bindings: &mut Vec<Literal>,
    top: bool,
) {
    let wrap = !top && members.len() > 1;
    if wrap {
        sql.push('(');
    }
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            sql.push_str(joiner);
        }
        render(member, sql, bindings, false);
    }
    if wrap {
        sql.push(')');
    }
}

fn cast(field: ItemField) -> String {
    match field {
        ItemField::Id | ItemField::Price => format!("cast({} as text)", field.column()),
        _ => field.column().to_string(),
    }
}

fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Sort, SortDirection};

    #[test]
    fn test_unfiltered_query() {
        let stmt = ItemQuery::all().to_sql(None);
        assert_eq!(stmt.sql, "select * from items");
        assert!(stmt.bindings.is_empty());
    }

    #[test]
    fn test_search_group_is_parenthesized() {
        let query = ItemQuery::new(
            Predicate::And(vec![
                Predicate::contains(ItemField::Category, "Electronics"),
                Predicate::equals(ItemField::Price, 7079.0),
                Predicate::Or(vec![
                    Predicate::contains(ItemField::Name, "act"),
                    Predicate::contains(ItemField::Category, "act"),
                    Predicate::contains(ItemField::Status, "act"),
                ]),
            ]),
            Some(Sort::new(ItemField::Price, SortDirection::Desc)),
        );

        let stmt = query.to_sql(Some(Window::new(10, 10)));
        assert_eq!(
            stmt.sql,
            "select * from items where lower(category) like ? and price = ? and \
             (lower(name) like ? or lower(category) like ? or lower(status) like ?) \
             order by price desc limit 10 offset 10"
        );
        assert_eq!(stmt.bindings.len(), 5);
        assert_eq!(stmt.bindings[0], Literal::Text("%electronics%".into()));
        assert_eq!(stmt.bindings[1], Literal::Number(7079.0));
    }

    #[test]
    fn test_like_wildcards_escaped() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_count_sql_drops_order() {
        let query = ItemQuery::new(
            Predicate::And(vec![Predicate::contains(ItemField::Name, "x")]),
            Some(Sort::new(ItemField::Name, SortDirection::Asc)),
        );
        let stmt = query.to_count_sql();
        assert_eq!(
            stmt.sql,
            "select count(*) as aggregate from items where lower(name) like ?"
        );
    }

    #[test]
    fn test_display_includes_bindings() {
        let query = ItemQuery::new(
            Predicate::And(vec![Predicate::contains(ItemField::Name, "Drill")]),
            None,
        );
        let rendered = query.to_sql(None).to_string();
        assert_eq!(rendered, "select * from items where lower(name) like ? ['%drill%']");
    }
}
