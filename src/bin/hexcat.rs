use clap::Parser;
use hexcat::{DumpOptions, dump_file};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(version, about = "Hex dump of a file: offset, byte grid, printable column")]
struct Args {
    /// File to dump
    path: String,

    /// Maximum number of bytes to display (default: all)
    #[arg(short = 'n', long = "count")]
    count: Option<u64>,

    /// Number of bytes to skip at the beginning
    #[arg(short = 's', long = "skip", default_value_t = 0)]
    skip: u64,

    /// Number of bytes per line
    #[arg(short = 'w', long = "width", default_value_t = 16)]
    width: usize,
}

fn main() -> anyhow::Result<()> {
    // --help/--version report on stdout and exit 0; every real parse error
    // reports on stderr and must exit 1, not clap's default 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let opts = DumpOptions {
        limit: args.count,
        skip: args.skip,
        width: args.width,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_file(&args.path, &mut out, &opts)?;
    out.flush()?;
    Ok(())
}
