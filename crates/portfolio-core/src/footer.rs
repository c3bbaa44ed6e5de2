/// Footer copyright text for the given year.
pub fn copyright_line(year: u32, owner: &str) -> String {
    format!("\u{a9} {year} {owner}. All rights reserved.")
}
