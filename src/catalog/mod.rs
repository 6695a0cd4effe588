//! The bundled car catalog: one-time load and read-only access.
//!
//! The dataset ships inside the binary and is parsed exactly once into a
//! process-wide collection. Nothing mutates it after load, so every consumer
//! shares the same slice without synchronization.

use std::sync::OnceLock;

use crate::state::CarRecord;

mod lookup;
mod query;

pub use lookup::{find_by_id, lineup_for, related_to};
pub use query::{categories, manufacturers, query, years};

/// JSON dataset embedded at compile time.
const BUNDLED_DATASET: &str = include_str!("../../data/cars.json");

/// Process-wide holder for the parsed catalog.
static CATALOG: OnceLock<Vec<CarRecord>> = OnceLock::new();

/// What: Access the full catalog, loading it on first use.
///
/// Output:
/// - Shared slice of every record, in dataset order.
///
/// Details:
/// - The bundled dataset is validated ahead of time; if it were ever
///   malformed the catalog degrades to empty rather than failing, since no
///   caller can recover from a bad embed at runtime.
pub fn all() -> &'static [CarRecord] {
    CATALOG
        .get_or_init(|| serde_json::from_str(BUNDLED_DATASET).unwrap_or_default())
        .as_slice()
}
