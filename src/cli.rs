use std::{ffi::OsString, path::PathBuf};

use clap::{App, Arg, ArgMatches};

#[derive(Debug)]
pub struct Args {
    pub root: PathBuf,
    pub patterns: String,
    pub excludes: Vec<String>,
    pub ignore_case: bool,
    pub follow_links: bool,
    pub absolute: bool,
    pub print0: bool,
    pub verbosity: u64,
}

fn app() -> App<'static, 'static> {
    App::new("artifact-scanner")
        .version(crate_version!())
        .about("List the files an artifact pattern specification selects")
        .arg(Arg::with_name("pattern")
                 .help("Ant-style patterns, each may be a comma-separated list (out/,**/*.bin)")
                 .multiple(true)
                 .required(true))
        .arg(Arg::with_name("root")
                 .help("Directory the patterns are relative to [default: .]")
                 .short("r")
                 .long("root")
                 .takes_value(true)
                 .value_name("dir"))
        .arg(Arg::with_name("exclude")
                 .help("Never list files matching the pattern")
                 .short("x")
                 .long("exclude")
                 .number_of_values(1)
                 .multiple(true)
                 .takes_value(true)
                 .value_name("pattern"))
        .arg(Arg::with_name("ignore-case")
                 .help("Match patterns case-insensitively")
                 .short("i")
                 .long("ignore-case"))
        .arg(Arg::with_name("follow-links")
                 .help("Descend into symlinked directories")
                 .short("L")
                 .long("follow-links"))
        .arg(Arg::with_name("absolute")
                 .help("Print paths on disk instead of paths relative to the root")
                 .short("a")
                 .long("absolute"))
        .arg(Arg::with_name("print0")
                 .help("Separate output paths with NUL instead of newlines")
                 .short("0")
                 .long("print0"))
        .arg(Arg::with_name("verbose")
                 .help("Print diagnostic messages to stderr, repeat for more")
                 .short("v")
                 .long("verbose")
                 .multiple(true))
}

pub fn get_args() -> Args {
    app().get_matches().into()
}

/// Parses arguments from an explicit list, the first being the program name.
pub fn get_args_from<I, T>(itr: I) -> clap::Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    app().get_matches_from_safe(itr).map(Args::from)
}

impl<'a> From<ArgMatches<'a>> for Args {
    fn from(args: ArgMatches<'a>) -> Self {
        let patterns = args
            .values_of("pattern")
            .map(|values| values.collect::<Vec<_>>().join(","))
            .unwrap_or_default();
        let excludes = args
            .values_of("exclude")
            .map(|values| values.map(String::from).collect())
            .unwrap_or_default();

        Self {
            root: args.value_of_os("root").map_or_else(|| PathBuf::from("."), PathBuf::from),
            patterns,
            excludes,
            ignore_case: args.is_present("ignore-case"),
            follow_links: args.is_present("follow-links"),
            absolute: args.is_present("absolute"),
            print0: args.is_present("print0"),
            verbosity: args.occurrences_of("verbose"),
        }
    }
}
