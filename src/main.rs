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

use std::process;
use struct_compare::Diagnostic;

mod cmd;
mod flags;

fn main() {
    let flags = flags::StructCompare::from_env_or_exit();

    let diagnostics = run(flags);

    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    let has_fatal = diagnostics.iter().any(|d| d.is_fatal());
    if has_fatal {
        process::exit(1);
    }
}

fn run(flags: flags::StructCompare) -> Vec<Diagnostic> {
    match flags.subcommand {
        flags::StructCompareCmd::Diff(diff_flags) => cmd::diff::run(&diff_flags),
    }
}
