use crate::cipher::{transform, Mode, TransformReport};
use crate::cli::args::Cli;
use crate::error::Result;
use crate::interrupt::Cancellation;
use crate::sink::Sink;
use crate::source::Source;
use crate::status::{Reporter, Verbosity};
use std::io::{Read, Write};

/// Options for a single read → transform → write run
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub mode: Mode,
    pub source: Source,
    pub sink: Sink,
    pub verbosity: Verbosity,
}

impl TransformOptions {
    /// Build options from parsed arguments
    /// Conflicting modes are rejected before the input source is even looked at
    pub fn from_cli(cli: &Cli, stdin_is_terminal: bool) -> Result<Self> {
        let mode = Mode::from_flags(cli.encode, cli.decode)?;
        let source = Source::resolve(
            cli.file.as_deref(),
            cli.text.as_deref(),
            &cli.words,
            stdin_is_terminal,
        )?;

        Ok(Self {
            mode,
            source,
            sink: Sink::from_output(cli.output.as_deref()),
            verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
        })
    }
}

/// Read the input, apply ROT13 and write the result
/// Status lines go to `reporter`; only the transformed text reaches `stdout`.
/// `cancellation` is honored between the read, transform and write steps.
pub fn run_transform<R, W, E>(
    options: &TransformOptions,
    stdin: R,
    stdout: W,
    reporter: &mut Reporter<E>,
    cancellation: &Cancellation,
) -> Result<TransformReport>
where
    R: Read,
    W: Write,
    E: Write,
{
    cancellation.check()?;
    reporter.info(&options.source.describe());
    let input = options.source.read(stdin)?;
    tracing::debug!(source = ?options.source, bytes = input.len(), "input read");

    cancellation.check()?;
    reporter.process(&options.mode.progress_message());
    let (output, report) = transform(&input, options.mode);
    reporter.success(&report.summary_message());

    cancellation.check()?;
    if let Sink::File(path) = &options.sink {
        reporter.info(&format!("Writing output to: {}", path.display()));
    }
    options.sink.write(&output, stdout, cancellation)?;
    if let Sink::File(path) = &options.sink {
        reporter.success(&format!("Output written to {}", path.display()));
    }

    Ok(report)
}
