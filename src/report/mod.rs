use crate::stats::Stats;

/// Prints the grouped-count report. Pure read of the aggregates, no
/// file access.
pub fn print_report(stats: &Stats) {
    println!();
    println!(":: Report :: {} articles ::", stats.total);

    println!();
    println!(":: By year");
    for (year, count) in stats.by_year.iter() {
        println!("     {year}: {count}");
    }

    print_section(":: By country", &stats.countries_desc());
    print_section(":: By study type", &stats.study_types_desc());
    print_section(":: By source", &stats.sources_desc());
}

fn print_section(heading: &str, entries: &[(String, usize)]) {
    println!();
    println!("{heading}");
    for (key, count) in entries {
        println!("     {key}: {count}");
    }
}
