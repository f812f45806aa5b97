use chrot13::cli::{render_banner, run_transform, version_line, Cli, TransformOptions};
use chrot13::interrupt::{install_interrupt_handler, Cancellation};
use chrot13::logging::init_logging;
use chrot13::status::{format_status, Reporter, StatusKind, StatusStyle};
use chrot13::ChRot13Error;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help goes to stdout and succeeds; usage errors fail with status 1
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let style = StatusStyle::detect(cli.no_color);
    init_logging(style.color);
    install_panic_hook(style);

    if cli.banner {
        print!("{}", render_banner(style));
        return ExitCode::SUCCESS;
    }

    if cli.version {
        println!("{}", version_line());
        return ExitCode::SUCCESS;
    }

    let cancellation = Cancellation::new();
    if let Err(e) = install_interrupt_handler(cancellation.clone(), style) {
        tracing::warn!(error = %e, "continuing without interrupt handler");
    }

    let stdin = std::io::stdin();
    let options = match TransformOptions::from_cli(&cli, stdin.is_terminal()) {
        Ok(options) => options,
        Err(e) => return finish(Err(e), style),
    };
    tracing::debug!(?options, "resolved options");

    let mut reporter = Reporter::stderr(style, options.verbosity);
    let result = run_transform(
        &options,
        stdin.lock(),
        std::io::stdout().lock(),
        &mut reporter,
        &cancellation,
    );
    finish(result.map(|_| ()), style)
}

/// Report the outcome on stderr and map it to an exit status
fn finish(result: chrot13::Result<()>, style: StatusStyle) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if !e.is_failure() => {
            eprintln!("{}", format_status(StatusKind::Info, &e.to_string(), style));
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Errors are shown regardless of --quiet
            eprintln!("{}", format_status(StatusKind::Error, &e.to_string(), style));
            if matches!(e, ChRot13Error::NoInput) {
                eprintln!("{}", Cli::command().render_help());
            }
            ExitCode::FAILURE
        }
    }
}

/// Report panics as a decorated error line and exit with status 1
fn install_panic_hook(style: StatusStyle) {
    std::panic::set_hook(Box::new(move |info| {
        let message = ChRot13Error::Unexpected(info.to_string()).to_string();
        eprintln!("{}", format_status(StatusKind::Error, &message, style));
        std::process::exit(1);
    }));
}
