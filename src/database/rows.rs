//! Statement helpers shared by every resource service.

use sqlx::{postgres::PgRow, FromRow, PgPool};

use super::patch::PartialUpdate;
use super::table::{quote_ident, Table};
use crate::error::{ConstraintMessages, Error, Result};

pub async fn list<T>(pool: &PgPool, table: Table, limit: i64) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT $1",
        table.select_list(),
        table.quoted_name(),
        quote_ident(table.primary_key())
    );
    let rows = sqlx::query_as::<_, T>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find<T>(pool: &PgPool, table: Table, id: i32) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = $1",
        table.select_list(),
        table.quoted_name(),
        quote_ident(table.primary_key())
    );
    let row = sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn get<T>(pool: &PgPool, table: Table, id: i32) -> Result<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    find(pool, table, id).await?.ok_or_else(|| not_found(table))
}

/// Rows whose `column` references `parent_id`, ordered by primary key.
///
/// An empty result is disambiguated: a missing parent is reported as not
/// found, an existing parent without children yields an empty list.
pub async fn children<T>(
    pool: &PgPool,
    table: Table,
    column: &'static str,
    parent: Table,
    parent_id: i32,
    order_by: &str,
) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    if !table.columns().contains(&column) {
        return Err(Error::Internal(format!(
            "Column {} does not exist on {}",
            column,
            table.name()
        )));
    }
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {}",
        table.select_list(),
        table.quoted_name(),
        quote_ident(column),
        order_by
    );
    let rows = sqlx::query_as::<_, T>(&sql)
        .bind(parent_id)
        .fetch_all(pool)
        .await?;

    if rows.is_empty() && !exists(pool, parent, parent_id).await? {
        return Err(not_found(parent));
    }
    Ok(rows)
}

pub async fn exists(pool: &PgPool, table: Table, id: i32) -> Result<bool> {
    let sql = format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE {} = $1)",
        table.quoted_name(),
        quote_ident(table.primary_key())
    );
    let found = sqlx::query_scalar::<_, bool>(&sql)
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}

/// Applies a partial update and returns the row as it now stands.
pub async fn patch<T>(
    pool: &PgPool,
    update: PartialUpdate,
    id: i32,
    messages: &ConstraintMessages,
) -> Result<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let table = update.table();
    let mut builder = update.into_query(id)?;
    let row = builder
        .build_query_as::<T>()
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::from_db(e, messages))?;
    let row = row.ok_or_else(|| not_found(table))?;
    tracing::info!(table = table.name(), id, "Row patched");
    Ok(row)
}

/// Deletes one row, returning its key.
pub async fn delete(
    pool: &PgPool,
    table: Table,
    id: i32,
    messages: &ConstraintMessages,
) -> Result<i32> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        table.quoted_name(),
        quote_ident(table.primary_key()),
        quote_ident(table.primary_key())
    );
    let deleted = sqlx::query_scalar::<_, i32>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::from_db(e, messages))?
        .ok_or_else(|| not_found(table))?;
    tracing::info!(table = table.name(), id = deleted, "Row deleted");
    Ok(deleted)
}

pub fn not_found(table: Table) -> Error {
    Error::NotFound(format!("{} not found", table.label()))
}

/// Default list cap narrowed or widened by the caller, within bounds.
pub fn clamp_limit(requested: Option<i64>, default: i64) -> i64 {
    requested.unwrap_or(default).clamp(1, 100)
}
