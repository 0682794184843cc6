use serde::{Deserialize, Serialize};

/// A named relation. Identity is the name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Reference a column of this table.
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column::new(self.clone(), name)
    }
}

/// A column reference: the owning table plus the column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Column {
    pub table: Table,
    pub name: String,
}

impl Column {
    pub fn new(table: Table, name: impl Into<String>) -> Self {
        Self {
            table,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_structural() {
        let books = Table::new("books");
        assert_eq!(books, Table::new("books"));
        assert_ne!(books.column("id"), Table::new("authors").column("id"));
        assert_eq!(books.column("id"), Column::new(Table::new("books"), "id"));
    }

    #[test]
    fn test_tables_order_by_name() {
        let mut tables = vec![Table::new("b"), Table::new("a"), Table::new("c")];
        tables.sort();
        let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
