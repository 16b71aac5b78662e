//! In-process record table.
//!
//! Records live in a `RwLock`-guarded map keyed by primary key value, with
//! one equality index map per declared secondary attribute. Index entries are
//! maintained on every write, so lookups never scan.
//!
//! Indexes are sparse: a record without the indexed attribute, or holding a
//! non-scalar value for it, has no entry and is absent from that index's
//! result set.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;
use std::sync::RwLock;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::schema::TableSchema;
use super::table::{Record, RecordTable};

/// Records returned per internal scan page
const SCAN_PAGE_SIZE: usize = 256;

/// In-memory [`RecordTable`] implementation
pub struct MemoryTable {
    schema: TableSchema,
    inner: RwLock<TableInner>,
}

#[derive(Default)]
struct TableInner {
    /// Primary key value -> record
    records: BTreeMap<String, Record>,
    /// Index attribute -> index key -> primary key values
    indexes: HashMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl MemoryTable {
    /// Create an empty table for the given schema
    pub fn new(schema: TableSchema) -> Self {
        let mut indexes = HashMap::new();
        for attribute in schema.secondary_indexes() {
            indexes.insert(attribute.clone(), BTreeMap::new());
        }

        Self {
            schema,
            inner: RwLock::new(TableInner {
                records: BTreeMap::new(),
                indexes,
            }),
        }
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.records.len()).unwrap_or(0)
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, TableInner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("table lock poisoned".to_string()))
    }

    fn write_lock(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, TableInner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("table lock poisoned".to_string()))
    }

    /// One page of records in primary key order, starting after `cursor`.
    /// Returns the page and the cursor for the next one, if any.
    fn scan_page(&self, cursor: Option<&str>) -> StoreResult<(Vec<Record>, Option<String>)> {
        let inner = self.read_lock()?;

        let range = match cursor {
            Some(after) => inner
                .records
                .range((Bound::Excluded(after.to_string()), Bound::Unbounded)),
            None => inner.records.range::<String, _>(..),
        };

        let mut page = Vec::with_capacity(SCAN_PAGE_SIZE);
        let mut last_key = None;
        for (key, record) in range.take(SCAN_PAGE_SIZE) {
            page.push(record.clone());
            last_key = Some(key.clone());
        }

        // A short page means the table is exhausted
        let next = if page.len() == SCAN_PAGE_SIZE {
            last_key
        } else {
            None
        };

        Ok((page, next))
    }
}

impl RecordTable for MemoryTable {
    fn schema(&self) -> &TableSchema {
        &self.schema
    }

    fn put(&self, record: Record) -> StoreResult<()> {
        let primary_key = record
            .get(self.schema.primary_key())
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StoreError::MissingPrimaryKey(self.schema.primary_key().to_string()))?;

        let mut guard = self.write_lock()?;
        let inner = &mut *guard;

        if let Some(old) = inner.records.get(&primary_key) {
            remove_index_entries(&self.schema, &mut inner.indexes, &primary_key, old);
        }
        add_index_entries(&self.schema, &mut inner.indexes, &primary_key, &record);
        inner.records.insert(primary_key, record);

        Ok(())
    }

    fn get_by_primary_key(&self, value: &str) -> StoreResult<Vec<Record>> {
        let inner = self.read_lock()?;
        Ok(inner.records.get(value).cloned().into_iter().collect())
    }

    fn get_by_secondary_key(&self, index: &str, value: &str) -> StoreResult<Vec<Record>> {
        if !self.schema.has_index(index) {
            return Err(StoreError::InvalidIndex(index.to_string()));
        }

        let inner = self.read_lock()?;
        let Some(tree) = inner.indexes.get(index) else {
            return Ok(Vec::new());
        };

        let mut matches = Vec::new();
        if let Some(ids) = tree.get(value) {
            for id in ids {
                if let Some(record) = inner.records.get(id) {
                    matches.push(record.clone());
                }
            }
        }
        Ok(matches)
    }

    fn scan_all(&self) -> StoreResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let (page, next) = self.scan_page(cursor.as_deref())?;
            records.extend(page);
            match next {
                Some(key) => cursor = Some(key),
                None => break,
            }
        }
        Ok(records)
    }

    fn update_field(&self, primary_key: &str, field: &str, value: Value) -> StoreResult<Value> {
        if field == self.schema.primary_key() {
            return Err(StoreError::PrimaryKeyImmutable(field.to_string()));
        }

        let mut guard = self.write_lock()?;
        let inner = &mut *guard;

        let record = inner
            .records
            .get_mut(primary_key)
            .ok_or_else(|| StoreError::NotFound(primary_key.to_string()))?;

        if let Some(tree) = inner.indexes.get_mut(field) {
            if let Some(old_key) = record.get(field).and_then(index_key) {
                remove_index_entry(tree, &old_key, primary_key);
            }
            if let Some(new_key) = index_key(&value) {
                tree.entry(new_key).or_default().insert(primary_key.to_string());
            }
        }

        record.insert(field.to_string(), value.clone());
        Ok(value)
    }

    fn delete(&self, primary_key: &str) -> StoreResult<()> {
        let mut guard = self.write_lock()?;
        let inner = &mut *guard;

        if let Some(record) = inner.records.remove(primary_key) {
            remove_index_entries(&self.schema, &mut inner.indexes, primary_key, &record);
        }
        Ok(())
    }
}

/// Index key for a scalar attribute value; non-scalars are not indexed
fn index_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn add_index_entries(
    schema: &TableSchema,
    indexes: &mut HashMap<String, BTreeMap<String, BTreeSet<String>>>,
    primary_key: &str,
    record: &Record,
) {
    for attribute in schema.secondary_indexes() {
        let Some(key) = record.get(attribute).and_then(index_key) else {
            continue;
        };
        if let Some(tree) = indexes.get_mut(attribute) {
            tree.entry(key).or_default().insert(primary_key.to_string());
        }
    }
}

fn remove_index_entries(
    schema: &TableSchema,
    indexes: &mut HashMap<String, BTreeMap<String, BTreeSet<String>>>,
    primary_key: &str,
    record: &Record,
) {
    for attribute in schema.secondary_indexes() {
        let Some(key) = record.get(attribute).and_then(index_key) else {
            continue;
        };
        if let Some(tree) = indexes.get_mut(attribute) {
            remove_index_entry(tree, &key, primary_key);
        }
    }
}

fn remove_index_entry(
    tree: &mut BTreeMap<String, BTreeSet<String>>,
    key: &str,
    primary_key: &str,
) {
    if let Some(ids) = tree.get_mut(key) {
        ids.remove(primary_key);
        if ids.is_empty() {
            tree.remove(key);
        }
    }
}
