use routelog_core::model::ParsedRoute;

pub fn print(route: &ParsedRoute) {
    let name_width = column_width(route, |v| v.business_name.len(), 13);
    let addr_width = column_width(route, |v| v.address.len(), 7);
    let city_width = column_width(route, |v| v.city.len(), 4);

    println!(
        "{:>4}  {:<name_width$}  {:<addr_width$}  {:<city_width$}  Notes",
        "Stop", "Business Name", "Address", "City"
    );

    for visit in &route.visits {
        println!(
            "{:>4}  {:<name_width$}  {:<addr_width$}  {:<city_width$}  {}",
            visit.stop, visit.business_name, visit.address, visit.city, visit.notes
        );
    }

    if route.stop_lines_seen > route.visits.len() {
        println!();
        println!(
            "{} of {} stop(s) dropped during parsing",
            route.stop_lines_seen - route.visits.len(),
            route.stop_lines_seen
        );
    }
}

fn column_width(route: &ParsedRoute, len: impl Fn(&routelog_core::model::VisitRecord) -> usize, min: usize) -> usize {
    route.visits.iter().map(&len).max().unwrap_or(min).max(min)
}
