//! Partial-update statement construction.
//!
//! A PATCH body is turned into a [`PartialUpdate`] holding only the columns the
//! caller supplied. The statement is assembled with `sqlx::QueryBuilder`:
//! identifiers come from [`Table`], every value is a bound parameter.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Postgres, QueryBuilder};

use super::table::{quote_ident, Table};
use crate::error::{Error, Result};

/// A typed, nullable value assigned to one column.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchValue {
    Int(Option<i32>),
    Text(Option<String>),
    Bool(Option<bool>),
    Date(Option<NaiveDate>),
    Timestamp(Option<DateTime<Utc>>),
}

impl PatchValue {
    fn bind(self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            PatchValue::Int(v) => builder.push_bind(v),
            PatchValue::Text(v) => builder.push_bind(v),
            PatchValue::Bool(v) => builder.push_bind(v),
            PatchValue::Date(v) => builder.push_bind(v),
            PatchValue::Timestamp(v) => builder.push_bind(v),
        };
    }
}

macro_rules! patch_value_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for PatchValue {
            fn from(value: $ty) -> Self {
                PatchValue::$variant(Some(value))
            }
        }

        impl From<Option<$ty>> for PatchValue {
            fn from(value: Option<$ty>) -> Self {
                PatchValue::$variant(value)
            }
        }
    };
}

patch_value_from!(Int, i32);
patch_value_from!(Text, String);
patch_value_from!(Bool, bool);
patch_value_from!(Date, NaiveDate);
patch_value_from!(Timestamp, DateTime<Utc>);

/// Payloads that carry a subset of a table's columns.
pub trait FieldPatch {
    fn into_update(self) -> Result<PartialUpdate>;
}

#[derive(Debug, Clone)]
pub struct PartialUpdate {
    table: Table,
    assignments: Vec<(&'static str, PatchValue)>,
    touch: Option<&'static str>,
}

impl PartialUpdate {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            touch: None,
        }
    }

    pub fn table(&self) -> Table {
        self.table
    }

    /// Assigns `column`, replacing any earlier assignment to it.
    pub fn set(&mut self, column: &'static str, value: impl Into<PatchValue>) -> &mut Self {
        let value = value.into();
        match self.assignments.iter_mut().find(|(c, _)| *c == column) {
            Some(existing) => existing.1 = value,
            None => self.assignments.push((column, value)),
        }
        self
    }

    /// Assigns `column` only when the caller supplied a value.
    pub fn set_some<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: Into<PatchValue>,
    {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// Stamps `column` with `NOW()` whenever the update runs.
    pub fn touch(&mut self, column: &'static str) -> &mut Self {
        self.touch = Some(column);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assignments.iter().map(|(c, _)| *c)
    }

    pub fn value(&self, column: &str) -> Option<&PatchValue> {
        self.assignments
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    /// Builds `UPDATE .. SET .. WHERE pk = $n RETURNING ..` for the row `id`.
    ///
    /// Refuses an empty assignment set.
    pub fn into_query(self, id: i32) -> Result<QueryBuilder<'static, Postgres>> {
        if self.assignments.is_empty() {
            return Err(Error::BadRequest("No field to update".to_string()));
        }

        let table = self.table;
        let unknown = self
            .columns()
            .chain(self.touch)
            .find(|column| !table.is_writable(column));
        if let Some(column) = unknown {
            return Err(Error::Internal(format!(
                "Column {} is not writable on {}",
                column,
                table.name()
            )));
        }

        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(table.quoted_name());
        builder.push(" SET ");
        for (index, (column, value)) in self.assignments.into_iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            builder.push(quote_ident(column));
            builder.push(" = ");
            value.bind(&mut builder);
        }
        if let Some(column) = self.touch {
            builder.push(", ");
            builder.push(quote_ident(column));
            builder.push(" = NOW()");
        }
        builder.push(" WHERE ");
        builder.push(quote_ident(table.primary_key()));
        builder.push(" = ");
        builder.push_bind(id);
        builder.push(" RETURNING ");
        builder.push(table.select_list());

        Ok(builder)
    }
}
