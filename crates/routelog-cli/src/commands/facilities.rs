use routelog_core::error::RouteLogError;
use routelog_core::facilities::{builtin, FacilityTable};
use std::path::Path;

pub fn list() -> Result<(), RouteLogError> {
    let table = builtin::builtin_table()?;

    println!("Builtin facility table ({} entries):\n", table.len());
    let max_key = table.iter().map(|(k, _)| k.len()).max().unwrap_or(10);
    for (key, name) in table.iter() {
        println!("  {key:<max_key$}  ->  {name}");
    }

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), RouteLogError> {
    let table = FacilityTable::load(file)?;
    println!("OK: {} ({} entries)", file.display(), table.len());
    Ok(())
}
