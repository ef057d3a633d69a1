use serde_json::Value;
use sqlx::{
    self,
    postgres::{PgArguments, PgRow},
    FromRow, PgPool,
};

use crate::database::manager::{DatabaseError, DatabaseManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}

/// Read-only SELECT builder: column projection, AND-combined equality
/// filters, ordering and a row limit. Values are always bound as `$n`
/// parameters; identifiers are validated and quoted.
#[derive(Debug, Clone)]
pub struct QueryBuilder<T> {
    table_name: String,
    select_columns: Vec<String>,
    conditions: Vec<(String, Value)>,
    order: Vec<(String, SortDirection)>,
    limit: Option<i64>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T> {
    pub fn new(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        let name = table_name.into();
        Self::validate_identifier(&name)?;
        Ok(Self {
            table_name: name,
            select_columns: vec![],
            conditions: vec![],
            order: vec![],
            limit: None,
            _phantom: std::marker::PhantomData,
        })
    }

    pub fn select(mut self, columns: &[&str]) -> Result<Self, DatabaseError> {
        for column in columns {
            Self::validate_identifier(column)?;
        }
        self.select_columns = columns.iter().map(|c| c.to_string()).collect();
        Ok(self)
    }

    /// `column = value`, or `column IS NULL` when the value is JSON null.
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Result<Self, DatabaseError> {
        Self::validate_identifier(column)?;
        self.conditions.push((column.to_string(), value.into()));
        Ok(self)
    }

    /// Adds the equality filter only when a value is supplied.
    pub fn eq_opt(self, column: &str, value: Option<&str>) -> Result<Self, DatabaseError> {
        match value {
            Some(v) => self.eq(column, v),
            None => Ok(self),
        }
    }

    pub fn order(mut self, column: &str, direction: SortDirection) -> Result<Self, DatabaseError> {
        Self::validate_identifier(column)?;
        self.order.push((column.to_string(), direction));
        Ok(self)
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit.max(0));
        self
    }

    pub fn to_sql(&self) -> SqlResult {
        let select_clause = if self.select_columns.is_empty() {
            "*".to_string()
        } else {
            self.select_columns
                .iter()
                .map(|c| format!("\"{}\"", c))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut params = Vec::new();
        let mut where_parts = Vec::new();
        for (column, value) in &self.conditions {
            if value.is_null() {
                where_parts.push(format!("\"{}\" IS NULL", column));
            } else {
                params.push(value.clone());
                where_parts.push(format!("\"{}\" = ${}", column, params.len()));
            }
        }

        let order_clause = if self.order.is_empty() {
            String::new()
        } else {
            let parts: Vec<String> = self
                .order
                .iter()
                .map(|(column, dir)| format!("\"{}\" {}", column, dir.to_sql()))
                .collect();
            format!("ORDER BY {}", parts.join(", "))
        };

        let query = [
            format!("SELECT {}", select_clause),
            format!("FROM \"{}\"", self.table_name),
            if where_parts.is_empty() { String::new() } else { format!("WHERE {}", where_parts.join(" AND ")) },
            order_clause,
            self.limit.map(|l| format!("LIMIT {}", l)).unwrap_or_default(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        SqlResult { query, params }
    }

    fn validate_identifier(name: &str) -> Result<(), DatabaseError> {
        if DatabaseManager::is_valid_identifier(name) {
            Ok(())
        } else {
            Err(DatabaseError::InvalidIdentifier(name.to_string()))
        }
    }
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub async fn fetch_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.to_sql();
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    /// Zero or one row. More than one matching row is an error rather than
    /// an arbitrary pick.
    pub async fn maybe_single(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        let table_name = self.table_name.clone();
        let mut rows = self.limit(2).fetch_all(pool).await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            _ => Err(DatabaseError::MultipleRows(table_name)),
        }
    }
}

fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q Value,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match v {
        Value::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        Value::Bool(b) => q.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                q.bind(i)
            } else if let Some(f) = n.as_f64() {
                q.bind(f)
            } else {
                q.bind(n.to_string())
            }
        }
        Value::String(s) => q.bind(s.as_str()),
        Value::Array(_) | Value::Object(_) => q.bind(v.clone()), // JSONB
    }
}
