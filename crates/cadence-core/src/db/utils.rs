//! Column conversion helpers shared by the query modules.

use std::str::FromStr;

use jiff::{Timestamp, Zoned};
use rusqlite::{types::Type, Row};

use crate::error::{Result, TaskError};

/// Reads a text column and parses it with `FromStr`.
pub(crate) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid value '{raw}': {e}").into(),
        )
    })
}

/// Reads a nullable text column and parses it with `FromStr`.
pub(crate) fn parse_optional_column<T>(row: &Row, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = row.get(idx)?;
    raw.map(|raw| {
        raw.parse::<T>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Text,
                format!("Invalid value '{raw}': {e}").into(),
            )
        })
    })
    .transpose()
}

pub(crate) fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    parse_column(row, idx)
}

pub(crate) fn zoned_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Zoned>> {
    parse_optional_column(row, idx)
}

/// Reads a nullable comma-separated list of integer IDs.
pub(crate) fn id_list_column(row: &Row, idx: usize) -> rusqlite::Result<Vec<u64>> {
    let raw: Option<String> = row.get(idx)?;
    let mut ids = raw
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim().parse::<u64>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        })
        .collect::<rusqlite::Result<Vec<u64>>>()?;
    ids.sort_unstable();
    Ok(ids)
}

/// Rejects blank names and titles, returning the trimmed value.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskError::invalid_input(field).with_reason("cannot be empty"));
    }
    Ok(trimmed.to_string())
}
