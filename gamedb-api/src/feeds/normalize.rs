//! Feed normalizer
//!
//! Flattens the nested feed document into a flat ordered sequence of
//! descriptors, drops entries without an integer rank (they cannot
//! compete for the top-100), and maps feed fields onto `GamePayload`.

use gamedb_common::db::GamePayload;
use serde_json::{Map, Value};

/// A normalized feed entry still carrying its rank. The rank orders the
/// merge and is stripped before persistence; it is not a Game field.
#[derive(Debug, Clone)]
pub struct RankedApp {
    pub rank: i64,
    pub payload: GamePayload,
}

/// Normalize one feed document. Output order is encounter order, not
/// rank order; the merger sorts.
pub fn normalize_feed(feed: Value) -> Vec<RankedApp> {
    let mut descriptors = Vec::new();
    flatten_into(feed, &mut descriptors);
    descriptors.into_iter().filter_map(normalize_entry).collect()
}

/// Recursively flatten nested arrays, collecting descriptor objects in
/// encounter order. Feeds nest up to three levels; recursion handles any
/// depth. Scalars at array level carry no app data and are dropped.
fn flatten_into(value: Value, out: &mut Vec<Map<String, Value>>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        Value::Object(map) => out.push(map),
        _ => {}
    }
}

fn normalize_entry(entry: Map<String, Value>) -> Option<RankedApp> {
    // Absent or null rank disqualifies the entry
    let rank = entry.get("rank")?.as_i64()?;

    Some(RankedApp {
        rank,
        payload: GamePayload {
            publisher_id: field_string(&entry, "publisher_id"),
            name: field_string(&entry, "name"),
            platform: field_string(&entry, "os"),
            store_id: None, // no source field in the feeds
            bundle_id: field_string(&entry, "bundle_id"),
            app_version: field_string(&entry, "version"),
            is_published: true,
        },
    })
}

/// Feed fields are usually strings but publisher ids show up as bare
/// numbers; stringify both.
fn field_string(entry: &Map<String, Value>, key: &str) -> String {
    match entry.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
