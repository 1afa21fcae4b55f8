use colored::*;
use sharebridge_core::SharedPayloadMap;

const ABSENT: &str = "<absent>";

pub fn display_mapping(mapping: &SharedPayloadMap) {
    println!("{}", render_mapping(mapping));
}

fn render_mapping(mapping: &SharedPayloadMap) -> String {
    mapping
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Some(v) => v.green().to_string(),
                None => ABSENT.dimmed().to_string(),
            };
            format!("{} {}", format!("{:<8}", key).bold(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
