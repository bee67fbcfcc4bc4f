use crate::error::RouteLogError;
use crate::facilities::FacilityTable;

const KNOWN_FACILITIES_JSON: &str = include_str!("../../../../facilities/known-facilities.json");

/// Load the curated Colorado Springs area facility table shipped with
/// the crate.
pub fn builtin_table() -> Result<FacilityTable, RouteLogError> {
    FacilityTable::parse_str(KNOWN_FACILITIES_JSON)
}
