//! Application state: the record/value types and the central [`AppState`]
//! container mutated by the event layer and read by the UI.

pub mod app_state;
pub mod modal;
pub mod types;

// Public re-exports to keep paths short at call sites
pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    CarDimensions, CarRecord, CarSpecs, ComfortSpecs, ElectricSpecs, EngineSpecs, FilterField,
    FilterSpec, Focus, ModelInfo, PerformanceSpecs, SafetySpecs, SortMode, YEAR_MAX, YEAR_MIN,
};
