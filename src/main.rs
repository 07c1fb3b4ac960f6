use clap::Parser;
use anyhow::Result;
use bytesize::ByteSize;
use std::io::Write;
use std::time::Instant;

use tally_io::{CountingReader, CountingWriter};

mod cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // wrap both ends, then let io::copy shovel everything across
    let mut reader = CountingReader::new(args.input);
    let mut writer = CountingWriter::new(args.output);

    let start = Instant::now();
    std::io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    let time_taken = start.elapsed();

    let read = reader.read_count();
    let written = writer.write_count();

    // totals go to stderr, stdout may be the copy target
    eprintln!("{} read in {} calls, {} written in {} calls",
        ByteSize(read.bytes), read.ops, ByteSize(written.bytes), written.ops);
    eprintln!("took {time_taken:?} ({}/s)",
        ByteSize((read.bytes as f64 / time_taken.as_secs_f64()) as u64));

    Ok(())
}
