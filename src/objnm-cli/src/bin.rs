/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    ArgAction, Parser,
};
use objnm::{NmConfig, ObjectFileReader, SortOrder, SymbolDisplayFlags};
use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
    process,
};

/// Accepts exactly the names of [`SortOrder`], listing them in the help.
fn sort_order_parser() -> impl TypedValueParser<Value = SortOrder> {
    PossibleValuesParser::new(SortOrder::ALL.map(|x| x.as_str()))
        .try_map(|x| x.parse::<SortOrder>())
}

/// objnm: lists the symbols defined or used by object files, archives and executables
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
struct Args {
    #[clap(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Sort output in the given order. `size` orders from largest to smallest
    #[clap(long, default_value_t, value_parser = sort_order_parser())]
    sort: SortOrder,

    /// An alias for `-sort address` (numeric)
    #[clap(short = 'n')]
    numeric: bool,

    /// Print symbol size in decimal between address and type
    #[clap(long)]
    size: bool,

    /// Print symbol type after name
    #[clap(long = "type")]
    type_: bool,

    /// Print help
    #[clap(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn config(&self) -> NmConfig {
        let mut display_flags = SymbolDisplayFlags::empty();
        display_flags.set(SymbolDisplayFlags::SIZE, self.size);
        display_flags.set(SymbolDisplayFlags::TYPE, self.type_);

        NmConfig::new()
            .with_sort_order(self.sort)
            .with_numeric_alias(self.numeric)
            .with_display_flags(display_flags)
            .with_file_prefix(self.files.len() > 1)
    }
}

/// Long options that may be spelled with a single dash, like `-sort size` or `-type`.
///
/// `-help` is not one of them and there is no `-h`, so it stays a usage error.
const SINGLE_DASH_LONG: [&str; 3] = ["sort", "size", "type"];

/// Rewrites single dash long options into their double dash form so clap can parse them.
///
/// Everything after a bare `--` is left untouched.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut options_done = false;

    args.into_iter()
        .map(|arg| {
            if options_done {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                options_done = true;
                return arg;
            }

            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if SINGLE_DASH_LONG.contains(&name) {
                        OsString::from(format!("-{s}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args = Args::parse_from(normalize_args(std::env::args_os()));
    log::debug!("{:?}", args);

    let config = args.config();
    let reader = ObjectFileReader::new();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = objnm::run(
        &reader,
        &args.files,
        &config,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    match status {
        Ok(status) => {
            log::debug!(
                "{} files, {} failed",
                status.files(),
                status.failed_files()
            );
            process::exit(status.exit_code());
        }
        Err(err) => {
            // Nothing sensible is left to do if stderr is gone too.
            let _ = writeln!(io::stderr(), "{}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn normalized(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|x| x.into_string().unwrap())
            .collect()
    }

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn single_dash_long_options() {
        assert_eq!(
            normalized(&["objnm", "-sort", "size", "-size", "-type", "-n", "a.o"]),
            ["objnm", "--sort", "size", "--size", "--type", "-n", "a.o"]
        );
        assert_eq!(
            normalized(&["objnm", "-sort=address", "--size", "a.o"]),
            ["objnm", "--sort=address", "--size", "a.o"]
        );
    }

    #[test]
    fn files_after_double_dash_are_kept() {
        assert_eq!(
            normalized(&["objnm", "--", "-size", "-sort"]),
            ["objnm", "--", "-size", "-sort"]
        );
    }

    #[test]
    fn default_config() {
        let args = parse(&["objnm", "a.o"]).unwrap();

        assert_eq!(args.config(), NmConfig::new());
    }

    #[test]
    fn all_options() {
        let args = parse(&["objnm", "-sort", "size", "-size", "-type", "a.o", "b.o"]).unwrap();

        assert_eq!(
            args.config(),
            NmConfig::new()
                .with_sort_order(SortOrder::Size)
                .with_display_flags(SymbolDisplayFlags::SIZE | SymbolDisplayFlags::TYPE)
                .with_file_prefix(true)
        );
    }

    #[test]
    fn numeric_overrides_sort() {
        let args = parse(&["objnm", "-sort", "none", "-n", "a.o"]).unwrap();

        assert_eq!(args.config().sort_order(), SortOrder::Address);
    }

    #[test]
    fn usage_errors() {
        let missing_files = parse(&["objnm", "-size"]).unwrap_err();
        assert_eq!(missing_files.exit_code(), 2);

        let bad_sort = parse(&["objnm", "-sort", "random", "a.o"]).unwrap_err();
        assert_eq!(bad_sort.exit_code(), 2);

        let help = parse(&["objnm", "-help", "a.o"]).unwrap_err();
        assert_eq!(help.exit_code(), 2);
        assert_eq!(normalized(&["objnm", "-help"]), ["objnm", "-help"]);
    }

    #[test]
    fn every_sort_order_is_accepted() {
        for order in SortOrder::ALL {
            let args = parse(&["objnm", "-sort", order.as_str(), "a.o"]).unwrap();
            assert_eq!(args.sort, order);
        }
    }
}
