//! Global test utilities for ensuring test isolation.

#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(test)]
/// Global mutex for tests that modify the HOME environment variable.
///
/// Since `std::env::set_var` affects the entire process, all tests that
/// redirect HOME (to exercise config-path resolution or the view log) must
/// serialize their execution using this mutex to prevent race conditions
/// between parallel tests.
static HOME_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

#[cfg(test)]
/// Acquire the global HOME mutex to safely modify the HOME environment variable.
///
/// Output:
/// - `MutexGuard<()>` that must be held while HOME is modified.
///
/// Details:
/// - Automatically recovers from a poisoned mutex (from panicked tests).
/// - Hold this guard for the entire duration that HOME is modified.
pub fn lock_home_mutex() -> std::sync::MutexGuard<'static, ()> {
    HOME_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
/// Build a minimal record fixture for tests that only care about the
/// classification fields. Horsepower derives from the year so sort tests
/// have something deterministic to order by.
pub fn car(
    id: &str,
    manufacturer: &str,
    model: &str,
    year: u16,
    category: &str,
) -> crate::state::CarRecord {
    use crate::state::{CarDimensions, CarRecord, CarSpecs, ModelInfo};
    CarRecord {
        id: id.to_string(),
        manufacturer: manufacturer.to_string(),
        model: model.to_string(),
        year,
        variant: None,
        category: category.to_string(),
        specs: CarSpecs {
            engine: "test engine".to_string(),
            horsepower: u32::from(year).saturating_sub(1800),
            torque: 200,
            transmission: "automatic".to_string(),
            drivetrain: "FWD".to_string(),
            fuel_efficiency: String::new(),
            dimensions: CarDimensions {
                length: 4900,
                width: 1860,
                height: 1445,
                wheelbase: 2840,
                ..CarDimensions::default()
            },
            ..CarSpecs::default()
        },
        model_info: ModelInfo::default(),
        price: String::new(),
    }
}
