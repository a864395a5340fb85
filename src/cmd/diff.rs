// struct-compare reports field-level differences between two records
// Copyright (C) 2025  Peoples Grocers LLC
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// To purchase a license under different terms contact admin@peoplesgrocers.com
// To request changes, report bugs, or give user feedback contact
// marxism@peoplesgrocers.com
//

use crate::cmd::library::Person;
use crate::flags;
use std::path::Path;
use struct_compare::{compare, Diagnostic, DiagnosticCode, DiagnosticLevel, Difference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

pub fn run(flags: &flags::Diff) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = same_file_warning(flags).into_iter().collect();

    match report(flags) {
        Ok(text) => println!("{}", text),
        Err(errors) => diagnostics.extend(errors),
    }

    diagnostics
}

fn same_file_warning(flags: &flags::Diff) -> Option<Diagnostic> {
    let same = match (flags.old.canonicalize(), flags.new.canonicalize()) {
        (Ok(old), Ok(new)) => old == new,
        _ => flags.old == flags.new,
    };
    if !same {
        return None;
    }

    Some(
        Diagnostic::new(
            DiagnosticLevel::Warning,
            DiagnosticCode::SameInputFile,
            format!("Both inputs are the same file: {}", flags.old.display()),
        )
        .with_advice("Comparing a file with itself always reports no difference.".to_string()),
    )
}

fn report(flags: &flags::Diff) -> Result<String, Vec<Diagnostic>> {
    let format = parse_output_format(flags.output.as_deref()).map_err(|d| vec![d])?;

    let mut diagnostics = Vec::new();
    let old = load_person(&flags.old).map_err(|d| diagnostics.push(d)).ok();
    let new = load_person(&flags.new).map_err(|d| diagnostics.push(d)).ok();

    let (Some(old), Some(new)) = (old, new) else {
        return Err(diagnostics);
    };

    let differences = compare(&old, &new).map_err(|d| vec![d])?;
    render(&differences, format).map_err(|d| vec![d])
}

fn parse_output_format(output: Option<&str>) -> Result<OutputFormat, Diagnostic> {
    match output {
        None | Some("text") => Ok(OutputFormat::Text),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => Err(Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::UnknownOutputFormat,
            format!("I don't know the output format '{}'", other),
        )
        .with_advice("Use --output text or --output json.".to_string())),
    }
}

fn load_person(path: &Path) -> Result<Person, Diagnostic> {
    if !path.exists() {
        return Err(Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::FileNotFound,
            format!("I couldn't find the input file: {}", path.display()),
        )
        .with_advice(
            "Make sure the file path is correct and the file exists. \
             Check for typos in the filename."
                .to_string(),
        ));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::FileUnreadable,
            format!("I couldn't read {}: {}", path.display(), e),
        )
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        let line = e.line();
        let mut diagnostic = Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::InvalidJson,
            format!("I couldn't read a member record from this file: {}", e),
        )
        .with_location(path.display().to_string(), line)
        .with_column(e.column());

        if let Some(text) = contents.lines().nth(line.saturating_sub(1)) {
            diagnostic = diagnostic.with_snippet(format!("  {} | {}", line, text));
        }

        diagnostic.with_advice(
            "A member record needs \"id\", \"name\", \"age\" and a \"book\" with \
             \"name\" and \"returned\"."
                .to_string(),
        )
    })
}

fn render(differences: &[Difference], format: OutputFormat) -> Result<String, Diagnostic> {
    match format {
        OutputFormat::Text => {
            if differences.is_empty() {
                return Ok("no difference".to_string());
            }
            Ok(differences
                .iter()
                .map(Difference::to_string)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(differences).map_err(|e| {
            Diagnostic::new(
                DiagnosticLevel::Fatal,
                DiagnosticCode::InvalidJson,
                format!("I couldn't serialize the differences to JSON: {}", e),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const OLD: &str = r#"{
        "id": "2f1b3a8e-6a55-4c1e-9a43-0d7f3b0c9e11",
        "name": "boozoorg",
        "age": 22,
        "book": {"name": "WWW", "returned": true}
    }"#;

    const NEW: &str = r#"{
        "id": "9a0e6c2d-1b44-4a57-8f3e-6c1d2e3f4a5b",
        "name": "buzurg",
        "age": 23,
        "joined": "2024-03-01T12:00:00Z",
        "book": {"name": "XXX", "returned": false, "tags": ["sci-fi"]}
    }"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn flags(old: PathBuf, new: PathBuf, output: Option<&str>) -> flags::Diff {
        flags::Diff {
            old,
            new,
            output: output.map(str::to_string),
        }
    }

    #[test]
    fn test_text_report() {
        let old = write_temp(OLD);
        let new = write_temp(NEW);

        let text = report(&flags(old.path().into(), new.path().into(), None)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "name was boozoorg and now buzurg",
                "Person.age was 22 and now 23",
                "Person.joined was nil and now 2024-03-01 12:00:00 UTC",
                "book_name was WWW and now XXX",
                "Person.book.returned was true and now false",
                r#"Person.book.tags was [] and now ["sci-fi"]"#,
            ]
        );
    }

    #[test]
    fn test_json_report() {
        let old = write_temp(OLD);
        let new = write_temp(NEW);

        let text = report(&flags(old.path().into(), new.path().into(), Some("json"))).unwrap();
        let differences: Vec<Difference> = serde_json::from_str(&text).unwrap();
        assert_eq!(differences.len(), 6);
        assert_eq!(differences[0], Difference::new("name", "boozoorg", "buzurg"));
    }

    #[test]
    fn test_identical_files() {
        let old = write_temp(OLD);
        let text = report(&flags(old.path().into(), old.path().into(), None)).unwrap();
        assert_eq!(text, "no difference");
    }

    #[test]
    fn test_same_file_warns() {
        let old = write_temp(OLD);
        let new = write_temp(OLD);

        let warning = same_file_warning(&flags(old.path().into(), old.path().into(), None)).unwrap();
        assert_eq!(warning.code, DiagnosticCode::SameInputFile);
        assert!(!warning.is_fatal());

        assert!(same_file_warning(&flags(old.path().into(), new.path().into(), None)).is_none());
    }

    #[test]
    fn test_missing_files_are_all_reported() {
        let diagnostics = report(&flags(
            PathBuf::from("/nonexistent/old.json"),
            PathBuf::from("/nonexistent/new.json"),
            None,
        ))
        .unwrap_err();

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| d.code == DiagnosticCode::FileNotFound && d.is_fatal()));
    }

    #[test]
    fn test_invalid_json_has_location() {
        let old = write_temp(OLD);
        let broken = write_temp("{\n  \"name\": \"Bob\",\n  \"age\": \"old\"\n}");

        let diagnostics = report(&flags(old.path().into(), broken.path().into(), None)).unwrap_err();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::InvalidJson);
        assert_eq!(diagnostics[0].line_number, Some(3));
        assert!(diagnostics[0].code_snippet.is_some());
    }

    #[test]
    fn test_unknown_output_format() {
        let old = write_temp(OLD);
        let diagnostics =
            report(&flags(old.path().into(), old.path().into(), Some("yaml"))).unwrap_err();
        assert_eq!(diagnostics[0].code, DiagnosticCode::UnknownOutputFormat);
    }
}
