use routelog_core::error::RouteLogError;
use routelog_core::sheet::{rows_for, CsvSink, SheetAppender, SHEET_HEADERS};
use std::path::PathBuf;

use crate::commands;

pub fn run(
    input_file: PathBuf,
    output_file: PathBuf,
    format: &str,
    facilities_file: Option<PathBuf>,
    default_city: Option<String>,
) -> Result<(), RouteLogError> {
    let facilities = commands::load_facilities(facilities_file.as_ref())?;
    let config = commands::build_config(default_city);
    let route = commands::parse_input(&input_file, &facilities, &config)?;

    // Nothing to append is an error here: the sheet contract appends
    // unconditionally, so an empty batch is a caller mistake.
    if route.is_empty() {
        commands::report_warnings(&route);
        return Err(RouteLogError::NoVisitsFound);
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&route.visits)?;
            std::fs::write(&output_file, json)?;
        }
        _ => {
            let file = std::fs::File::create(&output_file)?;
            let mut sink = CsvSink::new(file);
            sink.append_rows("Visits", &SHEET_HEADERS, &rows_for(&route.visits))?;
        }
    }

    eprintln!(
        "Exported {} visit(s) to {}",
        route.visits.len(),
        output_file.display()
    );
    commands::report_warnings(&route);

    Ok(())
}
