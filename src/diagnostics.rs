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

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Fatal,
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Fatal => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticCode {
    FileNotFound,
    FileUnreadable,
    InvalidJson,
    SameInputFile,

    NotARecord,
    ShapeMismatch,

    UnknownOutputFormat,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::FileNotFound => "E001",
            DiagnosticCode::FileUnreadable => "E002",
            DiagnosticCode::InvalidJson => "E003",
            DiagnosticCode::SameInputFile => "W004",

            DiagnosticCode::NotARecord => "E010",
            DiagnosticCode::ShapeMismatch => "E011",

            DiagnosticCode::UnknownOutputFormat => "E020",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DiagnosticCode::FileNotFound => "File not found",
            DiagnosticCode::FileUnreadable => "File unreadable",
            DiagnosticCode::InvalidJson => "Invalid JSON",
            DiagnosticCode::SameInputFile => "Same input file",

            DiagnosticCode::NotARecord => "Not a record",
            DiagnosticCode::ShapeMismatch => "Shape mismatch",

            DiagnosticCode::UnknownOutputFormat => "Unknown output format",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub filename: Option<String>,
    pub line_number: Option<usize>,
    pub column: Option<usize>,
    pub level: DiagnosticLevel,
    pub code: DiagnosticCode,
    pub description: String,
    pub code_snippet: Option<String>,
    pub advice: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, code: DiagnosticCode, description: String) -> Self {
        Self {
            filename: None,
            line_number: None,
            column: None,
            level,
            code,
            description,
            code_snippet: None,
            advice: None,
        }
    }

    /// A fatal `NotARecord` for the `which` input ("first" or "second").
    pub fn not_a_record(which: &str, type_name: &str) -> Self {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::NotARecord,
            format!(
                "I can only compare records, but the {} input is a {}",
                which, type_name
            ),
        )
        .with_advice(
            "Records are structs with named fields that implement the Record trait, \
             usually through the record! macro. Maps, sequences and scalars are compared \
             as whole values only when they sit inside a record field."
                .to_string(),
        )
    }

    /// A fatal `ShapeMismatch` pointing at the qualified path that could not be paired up.
    pub fn shape_mismatch(path: &str, reason: &str) -> Self {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::ShapeMismatch,
            format!("I couldn't line up the field '{}': {}", path, reason),
        )
    }

    pub fn with_location(mut self, filename: String, line_number: usize) -> Self {
        self.filename = Some(filename);
        self.line_number = Some(line_number);
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.code_snippet = Some(snippet);
        self
    }

    pub fn with_advice(mut self, advice: String) -> Self {
        self.advice = Some(advice);
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.level == DiagnosticLevel::Fatal
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(filename), Some(line)) = (&self.filename, self.line_number) {
            if let Some(col) = self.column {
                write!(f, "{}:{}:{} - ", filename, line, col)?;
            } else {
                write!(f, "{}:{} - ", filename, line)?;
            }
        }

        writeln!(
            f,
            "{} {}: {}",
            self.level,
            self.code.as_str(),
            self.code.title()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if let Some(snippet) = &self.code_snippet {
            writeln!(f)?;
            writeln!(f, "{}", snippet)?;
        }

        if let Some(advice) = &self.advice {
            writeln!(f)?;
            writeln!(f, "{}", advice)?;
        }

        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
