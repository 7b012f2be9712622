use crate::cli::ParseCommand;
use crate::commands::Session;
use anyhow::Result;
use kigen_core::clock::Clock;
use kigen_core::due::{format_iso, Resolution};
use kigen_core::error::CoreError;
use kigen_core::urgency::label;
use owo_colors::OwoColorize;

pub fn parse_expression(session: &Session<impl Clock>, command: ParseCommand) -> Result<Resolution> {
    let text = command.text.join(" ");
    let today = session.today();
    let resolution = session
        .parser
        .resolve(&text, today)
        .ok_or_else(|| CoreError::UnrecognizedDueDate(text.clone()))?;

    println!("{} {}", "Date: ".bold(), format_iso(resolution.date));
    println!("{} {}", "Rule: ".bold(), resolution.rule);
    println!("{} {}", "Label:".bold(), label(Some(resolution.date), today));
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{session, words};
    use kigen_core::due::DueRule;

    #[test]
    fn test_reports_rule() {
        let resolution = parse_expression(&session("u1"), ParseCommand { text: words("next week") }).unwrap();
        assert_eq!(resolution.rule, DueRule::NextWeek);
        assert_eq!(format_iso(resolution.date), "2025-06-17");
    }

    #[test]
    fn test_unrecognized() {
        assert!(parse_expression(&session("u1"), ParseCommand { text: words("gibberish") }).is_err());
    }
}
