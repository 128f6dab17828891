use std::fs;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use tracing::debug;

use smallml::config::{Config, DEFAULT_MAX_DEPTH};
use smallml::desugar::desugar_program;
use smallml::fmt::{CoreProgram, SurfaceProgram};
use smallml::parser::parse;
use smallml::types::typecheck_program;
use smallml::{Session, repl};

/// The parser and the type checker recurse on deeply nested source.
const STACK_SIZE: usize = 256 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "smallml", version, about = "Run smallml programs or start a REPL")]
struct Cli {
    /// Program to run; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Give `fix` a type (also enabled by ENABLE_FIXPOINT)
    #[arg(long)]
    fixpoint: bool,

    /// Evaluation nesting limit
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print an intermediate form of the program instead of running it
    #[arg(long, value_enum, requires = "file")]
    emit: Option<Emit>,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The parsed program
    Surface,
    /// The program after desugaring
    Core,
    /// Every statement elaborated by the type checker, with its type
    Typed,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = Config::from_env().with_max_depth(cli.max_depth);
    if cli.fixpoint {
        config = config.with_fixpoint(true);
    }
    debug!(?config, "starting");

    thread::Builder::new()
        .name("smallml".to_string())
        .stack_size(STACK_SIZE)
        .spawn(move || run(cli, config))?
        .join()
        .map_err(|_| anyhow!("interpreter thread panicked"))?
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let Some(path) = cli.file else {
        return repl::run(config);
    };
    let source =
        fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;

    match cli.emit {
        Some(emit) => print_form(emit, &source, &config),
        None => {
            let mut session = Session::new(config);
            match session.run_program(&source) {
                Ok(outcomes) => {
                    for outcome in outcomes {
                        println!("{}", outcome.report());
                    }
                    Ok(())
                }
                Err(err) => bail!("{}", err.report()),
            }
        }
    }
}

fn print_form(emit: Emit, source: &str, config: &Config) -> Result<()> {
    let program = parse(source).map_err(|err| anyhow!(err.report()))?;
    if emit == Emit::Surface {
        println!("{}", SurfaceProgram(&program));
        return Ok(());
    }

    let core = desugar_program(program)?;
    if emit == Emit::Core {
        println!("{}", CoreProgram(&core));
        return Ok(());
    }

    let checked = typecheck_program(&core, config).map_err(|err| anyhow!(err.report()))?;
    for (stmt, scheme) in checked {
        println!("{stmt} : {scheme}");
    }
    Ok(())
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
