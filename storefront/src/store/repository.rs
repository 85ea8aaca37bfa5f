//! Typed repository over a [`DataStore`]
//!
//! Serializes payloads into rows and decodes rows into models, turning
//! store failures and missing rows into [`AppError`]s.

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::store::{DataStore, Query, Record, StoreError};
use std::sync::Arc;
use uuid::Uuid;

/// Typed access to the backend tables
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DataStore>,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").finish_non_exhaustive()
    }
}

fn decode<T: Record>(row: serde_json::Value) -> AppResult<T> {
    serde_json::from_value(row).map_err(|e| {
        tracing::warn!(table = %T::TABLE, error = %e, "Failed to decode row");
        AppError::from(StoreError::from(e))
    })
}

fn encode<P: Serialize>(payload: &P) -> AppResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| AppError::from(StoreError::from(e)))
}

fn missing<T: Record>(id: Uuid) -> AppError {
    AppError::with_message(T::NOT_FOUND, format!("{} not found", T::NAME))
        .with_detail("id", id.to_string())
}

impl Repository {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn DataStore> {
        &self.store
    }

    /// Rows of `T` matching `query`
    pub async fn list<T: Record>(&self, query: &Query) -> AppResult<Vec<T>> {
        let rows = self.store.select(T::TABLE, query).await?;
        rows.into_iter().map(decode::<T>).collect()
    }

    /// First row of `T` matching `query`
    pub async fn find<T: Record>(&self, query: &Query) -> AppResult<Option<T>> {
        let query = query.clone().limit(1);
        let row = self.store.select(T::TABLE, &query).await?.into_iter().next();
        row.map(decode::<T>).transpose()
    }

    /// Row of `T` with the given id
    pub async fn get<T: Record>(&self, id: Uuid) -> AppResult<T> {
        self.find::<T>(&Query::by_id(id))
            .await?
            .ok_or_else(|| missing::<T>(id))
    }

    /// Insert one row and return it as stored
    pub async fn insert<T: Record, P: Serialize + Sync>(&self, payload: &P) -> AppResult<T> {
        let row = encode(payload)?;
        let stored = self.store.insert(T::TABLE, vec![row]).await?;
        let row = stored
            .into_iter()
            .next()
            .ok_or_else(|| AppError::database(format!("{} insert returned no row", T::NAME)))?;
        decode(row)
    }

    /// Insert several rows in one request
    pub async fn insert_many<T: Record, P: Serialize + Sync>(
        &self,
        payloads: &[P],
    ) -> AppResult<Vec<T>> {
        if payloads.is_empty() {
            return Ok(Vec::new());
        }
        let rows = payloads.iter().map(encode).collect::<AppResult<Vec<_>>>()?;
        let stored = self.store.insert(T::TABLE, rows).await?;
        stored.into_iter().map(decode::<T>).collect()
    }

    /// Apply `patch` to the row with the given id and return the result
    pub async fn update<T, P>(&self, id: Uuid, patch: &P) -> AppResult<T>
    where
        T: Record,
        P: Serialize + Sync,
    {
        let patch = encode(patch)?;
        let updated = self.store.update(T::TABLE, &Query::by_id(id), patch).await?;
        updated
            .into_iter()
            .next()
            .map(decode::<T>)
            .transpose()?
            .ok_or_else(|| missing::<T>(id))
    }

    /// Delete the row with the given id
    pub async fn delete<T: Record>(&self, id: Uuid) -> AppResult<()> {
        match self.store.delete(T::TABLE, &Query::by_id(id)).await? {
            0 => Err(missing::<T>(id)),
            _ => Ok(()),
        }
    }
}
