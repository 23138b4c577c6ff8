use crate::dates::Month;
use crate::models::Store;

const BOM: char = '\u{feff}';
const HEADER: &str = "Date,User,Chapters";

pub fn export_filename(month: Month) -> String {
    format!("reading_report_{month}.csv")
}

pub fn month_csv(store: &Store, month: Month) -> String {
    let mut lines = vec![format!("{BOM}{HEADER}")];
    for (date, entries) in store.entries.iter().filter(|(date, _)| month.contains(date)) {
        for member in &store.members {
            if let Some(chapters) = entries.get(member).filter(|chapters| **chapters >= 1) {
                lines.push(format!("{date},{},{chapters}", quote(member)));
            }
        }
    }
    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
