//! Sparse `UPDATE` statements for PATCH-style edits.
//!
//! Columns come from an entity's typed `Column` enum, never from the request,
//! and every value is bound positionally. `updated_at` is always the first
//! assignment so that an edit with no supplied fields still touches the row.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{DbBackend, EntityName, EntityTrait, IdenStatic, Statement, Value};
use serde_json::Value as JsonValue;

use crate::utils::json_doc::{self, Fallback};

pub struct PartialUpdate<E: EntityTrait> {
    backend: DbBackend,
    assignments: Vec<(E::Column, Value)>,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> PartialUpdate<E> {
    pub fn new(backend: DbBackend) -> Self {
        Self {
            backend,
            assignments: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Assigns `column` when a value was supplied.
    pub fn set<V: Into<Value>>(mut self, column: E::Column, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.assignments.push((column, value.into()));
        }
        self
    }

    /// Empty strings count as "not supplied", so a text column cannot be
    /// cleared through an update.
    pub fn set_text(self, column: E::Column, value: Option<String>) -> Self {
        self.set(column, value.filter(|v| !v.is_empty()))
    }

    /// JSON `null` counts as "not supplied".
    pub fn set_json(self, column: E::Column, value: Option<JsonValue>, fallback: Fallback) -> Self {
        let encoded = value
            .filter(|v| !v.is_null())
            .map(|v| json_doc::encode(Some(&v), fallback));
        self.set(column, encoded)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn build(self, id: i32) -> Statement {
        let table = E::default();
        let mut values: Vec<Value> = Vec::with_capacity(self.assignments.len() + 2);

        values.push(Utc::now().into());
        let mut sql = format!(
            "UPDATE {} SET {} = {}",
            quote(self.backend, table.table_name()),
            quote(self.backend, "updated_at"),
            placeholder(self.backend, values.len())
        );

        for (column, value) in self.assignments {
            values.push(value);
            sql.push_str(&format!(
                ", {} = {}",
                quote(self.backend, column.as_str()),
                placeholder(self.backend, values.len())
            ));
        }

        values.push(id.into());
        sql.push_str(&format!(
            " WHERE {} = {}",
            quote(self.backend, "id"),
            placeholder(self.backend, values.len())
        ));

        Statement::from_sql_and_values(self.backend, sql, values)
    }
}

fn placeholder(backend: DbBackend, position: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${}", position),
        _ => "?".to_string(),
    }
}

fn quote(backend: DbBackend, ident: &str) -> String {
    match backend {
        DbBackend::MySql => format!("`{}`", ident),
        _ => format!("\"{}\"", ident),
    }
}
