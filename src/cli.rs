use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The file to read from, or '-' for stdin
    #[arg(value_parser, default_value = "-")]
    pub input: clio::Input,

    /// The file to write to, or '-' for stdout
    #[arg(value_parser, default_value = "-")]
    pub output: clio::Output,
}
