use routelog_core::error::RouteLogError;
use std::path::PathBuf;

use crate::commands;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    facilities_file: Option<PathBuf>,
    default_city: Option<String>,
) -> Result<(), RouteLogError> {
    let facilities = commands::load_facilities(facilities_file.as_ref())?;
    let config = commands::build_config(default_city);
    let route = commands::parse_input(&input_file, &facilities, &config)?;

    if route.is_empty() {
        eprintln!("no visits found in {}", input_file.display());
        commands::report_warnings(&route);
        return Ok(());
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&route)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} visit(s), written to {}",
                route.visits.len(),
                path.display()
            );
            commands::report_warnings(&route);
        }
        None => {
            match output_format {
                "json" => output::json::print(&route)?,
                _ => output::table::print(&route),
            }
            commands::report_warnings(&route);
        }
    }

    Ok(())
}
