use routelog_core::error::RouteLogError;
use routelog_core::model::ParsedRoute;

pub fn print(route: &ParsedRoute) -> Result<(), RouteLogError> {
    let json = serde_json::to_string_pretty(route)?;
    println!("{json}");
    Ok(())
}
