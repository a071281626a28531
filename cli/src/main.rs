use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use rinha::{
    DecoderOptions, Engine, EngineOptions, Error, EvaluatorOptions, error_line, render_error,
};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Rinha - run programs delivered as JSON syntax trees
#[derive(Parser, Debug)]
#[command(name = "rinha")]
#[command(about = "Evaluate a Rinha program from its JSON syntax tree", long_about = None)]
struct Args {
    /// Maximum evaluation depth before giving up with a stack overflow error
    #[arg(long, default_value_t = EvaluatorOptions::default().max_depth)]
    max_depth: usize,

    /// Disable the call-result cache
    #[arg(long)]
    no_memo: bool,

    /// Print the decoded syntax tree as JSON instead of running it
    #[arg(long)]
    dump_ast: bool,

    /// Show the source snippet of runtime errors when the source file is readable
    #[arg(long)]
    pretty: bool,

    /// JSON document to run (if not provided, reads from stdin)
    file: Option<PathBuf>,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            decoding: DecoderOptions::default(),
            execution: EvaluatorOptions {
                max_depth: self.max_depth,
                memoize: !self.no_memo,
            },
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()
                .wrap_err("cannot read standard input")?;
            Ok(source)
        }
    }
}

/// Source text of the file a runtime error points into.
///
/// Looked up relative to the working directory, then next to the input document.
fn error_source(error: &Error, input: Option<&Path>) -> Option<String> {
    let Error::Runtime(err) = error else {
        return None;
    };
    let filename = Path::new(&err.span.filename);
    std::fs::read_to_string(filename).ok().or_else(|| {
        let dir = input?.parent()?;
        std::fs::read_to_string(dir.join(filename)).ok()
    })
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = read_input(args.file.as_deref())?;
    tracing::debug!(bytes = source.len(), "read document");

    let arena = Bump::new();
    let engine = Engine::new(args.engine_options());
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match engine.load(&arena, &source) {
        Ok(program) if args.dump_ast => {
            serde_json::to_writer_pretty(&mut out, &program)
                .into_diagnostic()
                .wrap_err("cannot write syntax tree")?;
            writeln!(out).into_diagnostic()?;
            Ok(())
        }
        Ok(program) => engine.run(&arena, &program, &mut out).map(|_| ()),
        Err(err) => Err(err),
    };
    out.flush()
        .into_diagnostic()
        .wrap_err("cannot write output")?;

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            let origin = args
                .file
                .as_deref()
                .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());
            let pretty_source = if args.pretty {
                error_source(&err, args.file.as_deref())
            } else {
                None
            };
            match pretty_source {
                Some(text) => render_error(&err, &origin, Some(&text)),
                None => eprintln!("{}", error_line(&err, &origin)),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
