use std::io::{self, Write};

use crate::cli::Args;
use crate::config::ScanOptionsBuilder;
use crate::error::{Error, Result};
use crate::scanner::{MatchedFile, Scanner};

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut log_builder = env_logger::Builder::new();
    log_builder
        .format(|buf, r| writeln!(buf, "*** {}", r.args()))
        .filter(None, level);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        log_builder.parse_filters(&filters);
    }

    // a logger may already be installed when embedded
    if log_builder.try_init().is_err() {
        debug!("Logger already initialised");
    }
}

pub fn run(args: Args) -> Result<()> {
    init_logger(args.verbosity);

    let options = ScanOptionsBuilder::default()
        .case_sensitive(!args.ignore_case)
        .follow_links(args.follow_links)
        .excludes(args.excludes)
        .finish()?;

    debug!("Scanning {:?} for '{}'", args.root, args.patterns);
    let files = Scanner::new(options).scan(&args.root, &args.patterns)?;
    if files.is_empty() {
        warn!("No files under {:?} matched '{}'", args.root, args.patterns);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_files(&mut out, &files, args.absolute, args.print0).map_err(|err| Error::Io {
        path: "<stdout>".into(),
        err,
    })
}

fn print_files(
    out: &mut impl Write,
    files: &[MatchedFile],
    absolute: bool,
    print0: bool,
) -> io::Result<()> {
    let terminator = if print0 { b'\0' } else { b'\n' };

    for file in files {
        if absolute {
            write!(out, "{}", file.path().display())?;
        } else {
            out.write_all(file.relative_path().as_bytes())?;
        }
        out.write_all(&[terminator])?;
    }

    out.flush()
}
