/// Console multitool entry point
use constants::OUTPUT_DIR;
use point_cloud_multitools::folder;
use point_cloud_multitools::options::{ArgKind, OptionEntry, OptionError, OptionParser};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut parser = OptionParser::new(env::args(), 1);
    parser.set_context("A small multitools console software to help for simple tasks.");
    parser.add_usage("-c <folder>");
    parser.add_example("-v -c data/");
    parser.set_entries(vec![
        OptionEntry::new("verbose", "v", ArgKind::None, "enable printing of messages"),
        OptionEntry::new(
            "show-stats",
            "c",
            ArgKind::Str,
            "converts PLY to Matrix file format",
        ),
    ]);

    if let Err(err) = parser.parse_options() {
        // Help and below-minimum failures already printed the help text.
        if !matches!(err, OptionError::HelpRequested | OptionError::BelowMinimum) {
            eprintln!("{}", err);
        }
        return ExitCode::from(err.exit_code());
    }

    let verbose = parser.flag("verbose");
    if let Some(source) = parser.string("show-stats") {
        if let Err(err) = folder::convert_folder(Path::new(source), Path::new(OUTPUT_DIR), verbose)
        {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
