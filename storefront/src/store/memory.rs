//! In-memory data store
//!
//! Process-local implementation of [`DataStore`] and [`ChangeFeed`] with the
//! same defaults the hosted backend applies on insert: UUID v4 ids, UTC
//! `created_at` timestamps and `true` for the availability flags. Used by
//! tests and the offline demo.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use shared::store::{
    ChangeCallback, ChangeEvent, ChangeFeed, ChangeKind, DataStore, Query, StoreError,
    StoreResult, Subscription, Table,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

const CHANGE_CHANNEL_CAPACITY: usize = 1024;

/// In-memory table storage with change broadcasting
#[derive(Clone)]
pub struct MemoryStore {
    /// Rows per table, in insertion order
    tables: Arc<RwLock<HashMap<Table, Vec<Value>>>>,
    changes: broadcast::Sender<ChangeEvent>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        let counts: HashMap<&str, usize> =
            tables.iter().map(|(t, rows)| (t.as_str(), rows.len())).collect();
        f.debug_struct("MemoryStore").field("rows", &counts).finish()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            changes,
        }
    }

    /// Number of rows in a table
    pub fn row_count(&self, table: Table) -> usize {
        self.tables.read().get(&table).map_or(0, Vec::len)
    }

    fn publish(&self, table: Table, kind: ChangeKind, rows: &[Value]) {
        // No receivers is fine: nobody is subscribed yet
        for row in rows {
            let _ = self.changes.send(ChangeEvent {
                table,
                kind,
                row: row.clone(),
            });
        }
    }

    /// Fill backend defaults on a new row
    fn prepare_row(table: Table, row: Value) -> StoreResult<Value> {
        let Value::Object(mut object) = row else {
            return Err(StoreError::InvalidRow {
                table: table.to_string(),
                message: "row must be a JSON object".into(),
            });
        };

        if !object.get("id").is_some_and(|id| !id.is_null()) {
            object.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        }
        if table.has_created_at() && !object.get("created_at").is_some_and(|c| !c.is_null()) {
            object.insert("created_at".into(), serde_json::to_value(Utc::now())?);
        }
        for column in table.default_true_columns() {
            if object.get(*column).is_none_or(Value::is_null) {
                object.insert((*column).into(), Value::Bool(true));
            }
        }

        Ok(Value::Object(object))
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn select(&self, table: Table, query: &Query) -> StoreResult<Vec<Value>> {
        let tables = self.tables.read();
        let mut rows: Vec<Value> = tables
            .get(&table)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();
        drop(tables);

        if query.order.is_some() {
            rows.sort_by(|a, b| query.compare(a, b));
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn insert(&self, table: Table, rows: Vec<Value>) -> StoreResult<Vec<Value>> {
        let prepared = rows
            .into_iter()
            .map(|row| Self::prepare_row(table, row))
            .collect::<StoreResult<Vec<_>>>()?;

        {
            let mut tables = self.tables.write();
            let existing = tables.entry(table).or_default();
            for row in &prepared {
                let id = &row["id"];
                if existing.iter().any(|r| &r["id"] == id)
                    || prepared.iter().filter(|r| &r["id"] == id).count() > 1
                {
                    return Err(StoreError::Conflict {
                        table: table.to_string(),
                        id: id.to_string(),
                    });
                }
            }
            existing.extend(prepared.iter().cloned());
        }

        tracing::debug!(table = %table, rows = prepared.len(), "Inserted rows");
        self.publish(table, ChangeKind::Insert, &prepared);
        Ok(prepared)
    }

    async fn update(&self, table: Table, query: &Query, patch: Value) -> StoreResult<Vec<Value>> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::InvalidRow {
                table: table.to_string(),
                message: "patch must be a JSON object".into(),
            });
        };

        let updated: Vec<Value> = {
            let mut tables = self.tables.write();
            let Some(rows) = tables.get_mut(&table) else {
                return Ok(Vec::new());
            };
            rows.iter_mut()
                .filter(|row| query.matches(row))
                .map(|row| {
                    if let Some(object) = row.as_object_mut() {
                        for (key, value) in &patch {
                            object.insert(key.clone(), value.clone());
                        }
                    }
                    row.clone()
                })
                .collect()
        };

        tracing::debug!(table = %table, rows = updated.len(), "Updated rows");
        self.publish(table, ChangeKind::Update, &updated);
        Ok(updated)
    }

    async fn delete(&self, table: Table, query: &Query) -> StoreResult<u64> {
        let removed: Vec<Value> = {
            let mut tables = self.tables.write();
            let Some(rows) = tables.get_mut(&table) else {
                return Ok(0);
            };
            let (removed, kept): (Vec<Value>, Vec<Value>) =
                rows.drain(..).partition(|row| query.matches(row));
            *rows = kept;
            removed
        };

        tracing::debug!(table = %table, rows = removed.len(), "Deleted rows");
        self.publish(table, ChangeKind::Delete, &removed);
        Ok(removed.len() as u64)
    }
}

impl ChangeFeed for MemoryStore {
    /// Must be called from within a Tokio runtime; delivery runs on a
    /// spawned task.
    fn subscribe(&self, table: Table, callback: ChangeCallback) -> Subscription {
        let mut receiver = self.changes.subscribe();
        let token = CancellationToken::new();
        let task_token = token.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    received = receiver.recv() => match received {
                        Ok(event) if event.table == table => callback(event),
                        Ok(_) => {}
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(table = %table, skipped, "Change subscriber lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }
            tracing::debug!(table = %table, "Change subscription closed");
        });

        tracing::debug!(table = %table, "Change subscription opened");
        Subscription::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::store::Direction;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_insert_fills_defaults() {
        let store = MemoryStore::new();
        let rows = store
            .insert(Table::Orders, vec![json!({ "total_amount": "10" })])
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0]["id"].as_str().is_some_and(|id| Uuid::parse_str(id).is_ok()));
        assert!(rows[0]["created_at"].is_string());

        let rows = store
            .insert(Table::MenuItems, vec![json!({ "name": "Maggi" })])
            .await
            .unwrap();
        assert!(rows[0].get("created_at").is_none());
        assert_eq!(rows[0]["is_available"], json!(true));
    }

    #[tokio::test]
    async fn test_insert_keeps_explicit_flags() {
        let store = MemoryStore::new();
        let rows = store
            .insert(
                Table::Categories,
                vec![json!({ "name": "Hidden", "is_active": false }), json!({ "name": "Snacks" })],
            )
            .await
            .unwrap();
        assert_eq!(rows[0]["is_active"], json!(false));
        assert_eq!(rows[1]["is_active"], json!(true));

        let active = store
            .select(Table::Categories, &Query::new().eq("is_active", true))
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = MemoryStore::new();
        store
            .insert(Table::Profiles, vec![json!({ "id": "p1" })])
            .await
            .unwrap();
        let err = store
            .insert(Table::Profiles, vec![json!({ "id": "p1" })])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(store.row_count(Table::Profiles), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_non_object() {
        let store = MemoryStore::new();
        let err = store.insert(Table::Profiles, vec![json!(42)]).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidRow { .. }));
    }

    #[tokio::test]
    async fn test_select_filters_orders_and_limits() {
        let store = MemoryStore::new();
        store
            .insert(
                Table::Categories,
                vec![
                    json!({ "name": "Drinks", "display_order": 3, "is_active": true }),
                    json!({ "name": "Snacks", "display_order": 1, "is_active": true }),
                    json!({ "name": "Hidden", "display_order": 2, "is_active": false }),
                    json!({ "name": "Meals", "display_order": 2, "is_active": true }),
                ],
            )
            .await
            .unwrap();

        let query = Query::new()
            .eq("is_active", true)
            .order_by("display_order", Direction::Asc);
        let rows = store.select(Table::Categories, &query).await.unwrap();
        let names: Vec<&str> = rows.iter().filter_map(|r| r["name"].as_str()).collect();
        assert_eq!(names, vec!["Snacks", "Meals", "Drinks"]);

        let rows = store
            .select(Table::Categories, &query.clone().limit(2))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);

        let rows = store.select(Table::Messages, &Query::new()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_select_without_order_keeps_insertion_order() {
        let store = MemoryStore::new();
        for name in ["c", "a", "b"] {
            store
                .insert(Table::MenuItems, vec![json!({ "name": name })])
                .await
                .unwrap();
        }
        let rows = store.select(Table::MenuItems, &Query::new()).await.unwrap();
        let names: Vec<&str> = rows.iter().filter_map(|r| r["name"].as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = MemoryStore::new();
        let rows = store
            .insert(
                Table::MenuItems,
                vec![json!({ "name": "Tea", "is_available": true })],
            )
            .await
            .unwrap();
        let id = rows[0]["id"].as_str().unwrap().to_string();

        let updated = store
            .update(
                Table::MenuItems,
                &Query::new().eq("id", id.clone()),
                json!({ "is_available": false }),
            )
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0]["is_available"], json!(false));
        assert_eq!(updated[0]["name"], json!("Tea"));

        let none = store
            .update(
                Table::MenuItems,
                &Query::new().eq("id", "missing"),
                json!({ "is_available": true }),
            )
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_count() {
        let store = MemoryStore::new();
        store
            .insert(
                Table::PricingRules,
                vec![
                    json!({ "menu_item_id": "a" }),
                    json!({ "menu_item_id": "a" }),
                    json!({ "menu_item_id": "b" }),
                ],
            )
            .await
            .unwrap();

        let removed = store
            .delete(Table::PricingRules, &Query::new().eq("menu_item_id", "a"))
            .await
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.row_count(Table::PricingRules), 1);

        let removed = store
            .delete(Table::Messages, &Query::new())
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn test_subscribe_delivers_only_its_table() {
        let store = MemoryStore::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = store.subscribe(
            Table::Orders,
            Box::new(move |event| {
                let _ = tx.send(event);
            }),
        );

        store
            .insert(Table::Messages, vec![json!({ "message": "hi" })])
            .await
            .unwrap();
        store
            .insert(Table::Orders, vec![json!({ "status": "pending" })])
            .await
            .unwrap();

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.table, Table::Orders);
        assert_eq!(event.kind, ChangeKind::Insert);
        assert_eq!(event.row["status"], json!("pending"));

        drop(subscription);
    }

    #[tokio::test]
    async fn test_cancelled_subscription_stops_delivery() {
        let store = MemoryStore::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let subscription = store.subscribe(
            Table::Orders,
            Box::new(move |event| {
                let _ = tx.send(event);
            }),
        );
        subscription.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        store
            .insert(Table::Orders, vec![json!({ "status": "pending" })])
            .await
            .unwrap();

        // Sender is dropped with the finished task, so recv yields None
        let received = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(received.is_none());
    }
}
