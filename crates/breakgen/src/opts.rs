use crate::utils;
use breakgen_core::{Family, fs};
use clap::{ArgGroup, Parser, ValueHint};
use eyre::{OptionExt, Result};
use similar::TextDiff;
use std::path::PathBuf;

/// CLI arguments for `breakgen`.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "breakgen",
    version,
    about = "Generate packed Unicode break-property tables",
    group = ArgGroup::new("family").required(true).multiple(false),
)]
pub struct Breakgen {
    /// Path to the source property table.
    #[arg(value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub source: PathBuf,

    /// Process the word-break property family (UAX #29).
    #[arg(long, group = "family")]
    pub word_break: bool,

    /// Process the line-break property family (UAX #14).
    #[arg(long, group = "family")]
    pub line_break: bool,

    /// Path the generated table is written to.
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        value_name = "PATH",
        required_unless_present = "dry_run"
    )]
    pub out: Option<PathBuf>,

    /// Print the generated table to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Verify that the destination is up to date without rewriting it.
    ///
    /// Exits with 1 and prints a diff when the generated output differs.
    #[arg(long, conflicts_with = "dry_run", requires = "out")]
    pub check: bool,

    /// Use verbose output.
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print log messages.
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Breakgen {
    /// The property family selected on the command line.
    pub fn family(&self) -> Family {
        if self.word_break { Family::WordBreak } else { Family::LineBreak }
    }

    pub fn run(self) -> Result<()> {
        let family = self.family();
        let source = fs::read_to_string(&self.source)?;
        debug!(source = %self.source.display(), bytes = source.len(), "read source table");

        // The artifact exists as a string before anything touches the
        // destination, so a failed run never leaves partial output.
        let generated = breakgen_core::generate(family, &source)?;

        if self.dry_run {
            print!("{generated}");
            return Ok(());
        }

        let out = self.out.as_deref().ok_or_eyre("--out is required unless --dry-run")?;

        if self.check {
            let existing = fs::read_to_string(out)?;
            if existing == generated {
                if !self.quiet {
                    println!("{} is up to date", out.display());
                }
                return Ok(());
            }
            let name = out.display().to_string();
            let diff = TextDiff::from_lines(&existing, &generated);
            print!("{}", utils::format_diff_summary(&name, &diff));
            std::process::exit(1);
        }

        if let Some(parent) = out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(out, &generated)?;
        if !self.quiet {
            println!(
                "{} table has been generated to {}",
                family.config().prefix,
                out.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    #[test]
    fn verify_cli() {
        Breakgen::command().debug_assert();
    }

    #[test]
    fn exactly_one_family_selector_is_required() {
        let err = Breakgen::try_parse_from(["breakgen", "in.txt", "--out", "out.rs"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Breakgen::try_parse_from([
            "breakgen",
            "in.txt",
            "--word-break",
            "--line-break",
            "--out",
            "out.rs",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn out_is_optional_only_for_dry_runs() {
        let err =
            Breakgen::try_parse_from(["breakgen", "in.txt", "--word-break"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let args =
            Breakgen::try_parse_from(["breakgen", "in.txt", "--word-break", "--dry-run"])
                .unwrap();
        assert!(args.dry_run);
        assert_eq!(args.family(), Family::WordBreak);
    }

    #[test]
    fn check_mode_needs_a_destination_and_excludes_dry_run() {
        let err = Breakgen::try_parse_from(["breakgen", "in.txt", "--line-break", "--check"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Breakgen::try_parse_from([
            "breakgen",
            "in.txt",
            "--line-break",
            "--out",
            "out.rs",
            "--check",
            "--dry-run",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn generates_and_rewrites_deterministically() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("LineBreak.txt");
        let out = dir.path().join("tables/line_break.rs");
        std::fs::write(&source, "000A;LF\n0041..005A;AL\n").unwrap();

        let args = Breakgen::try_parse_from([
            "breakgen",
            source.to_str().unwrap(),
            "--line-break",
            "--out",
            out.to_str().unwrap(),
            "--quiet",
        ])
        .unwrap();
        args.clone().run().unwrap();
        let first = std::fs::read_to_string(&out).unwrap();
        assert!(first.contains("pub enum LineBreak {"));

        args.run().unwrap();
        let second = std::fs::read_to_string(&out).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("WordBreakProperty.txt");
        let out = dir.path().join("word_break.rs");
        std::fs::write(&source, "0041..005A;ALetter\n").unwrap();

        let args = Breakgen::try_parse_from([
            "breakgen",
            source.to_str().unwrap(),
            "--word-break",
            "--out",
            out.to_str().unwrap(),
            "--dry-run",
        ])
        .unwrap();
        args.run().unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn check_mode_accepts_an_up_to_date_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("WordBreakProperty.txt");
        let out = dir.path().join("word_break.rs");
        std::fs::write(&source, "0041..005A;ALetter\n").unwrap();

        let generate = Breakgen::try_parse_from([
            "breakgen",
            source.to_str().unwrap(),
            "--word-break",
            "--out",
            out.to_str().unwrap(),
            "--quiet",
        ])
        .unwrap();
        generate.run().unwrap();

        let check = Breakgen::try_parse_from([
            "breakgen",
            source.to_str().unwrap(),
            "--word-break",
            "--out",
            out.to_str().unwrap(),
            "--check",
            "--quiet",
        ])
        .unwrap();
        check.run().unwrap();
    }
}
