use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "chrot13")]
#[command(
    about = "ROT13 encoder/decoder for files, standard input and literal text",
    long_about = None,
    disable_version_flag = true,
    after_help = "Examples:\n  chrot13 -t \"Hello, World!\"\n  chrot13 -d -f secret.txt -o plain.txt\n  echo \"Uryyb\" | chrot13 -d"
)]
pub struct Cli {
    /// Encode text (default)
    #[arg(short, long)]
    pub encode: bool,

    /// Decode text (same transform, different status messages)
    #[arg(short, long)]
    pub decode: bool,

    /// Read input from PATH ("-" for standard input)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use STRING as input
    #[arg(short, long, value_name = "STRING", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Write output to PATH instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only print the result and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print additional status messages
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Disable colored status messages
    #[arg(long)]
    pub no_color: bool,

    /// Print the banner and exit
    #[arg(long)]
    pub banner: bool,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Text to transform when neither --file nor --text is given
    #[arg(value_name = "TEXT")]
    pub words: Vec<String>,
}
