//! Caller-requested ordering of the results list.

use crate::state::{AppState, CarRecord, SortMode};

/// What: Order records in place according to a sort mode.
///
/// Details:
/// - `DatasetOrder` leaves the stable filter output untouched. All sorts are
///   stable, so records tying on the sort key keep dataset order. Only the
///   record's year, horsepower, and name fields are consulted.
pub fn sort_records(records: &mut [CarRecord], mode: SortMode) {
    match mode {
        SortMode::DatasetOrder => {}
        SortMode::YearDesc => records.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::HorsepowerDesc => {
            records.sort_by(|a, b| b.specs.horsepower.cmp(&a.specs.horsepower));
        }
        SortMode::NameAsc => records.sort_by(|a, b| {
            (a.manufacturer.as_str(), a.model.as_str())
                .cmp(&(b.manufacturer.as_str(), b.model.as_str()))
        }),
    }
}

/// What: Re-sort the current results under `app.sort_mode`, keeping the
/// highlighted record highlighted wherever it lands.
pub fn sort_results_preserve_selection(app: &mut AppState) {
    let keep = app.selected_car().map(|c| c.id.clone());
    sort_records(&mut app.results, app.sort_mode);
    super::selection::restore_selection(app, keep);
}
