use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use defarg_config::{ArgumentConfig, GenConfig, MethodConfig};
use defarg_core::{FileSink, Limited, OverloadSink, Visibility, WriterSink};
use miette::Result;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "defarg")]
#[command(author, version, about = "Generate Java overloads that emulate default arguments")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// The visibility of the target method
    #[arg(short = 'v', long, value_enum, default_value = "package")]
    visibility: VisibilityArg,

    /// Whether the target method is static
    #[arg(short = 's', long = "static")]
    is_static: bool,

    /// Whether the target method is final
    #[arg(short = 'f', long = "final")]
    is_final: bool,

    /// The return type of the target method
    #[arg(short = 'r', long, default_value = defarg_core::VOID)]
    return_type: String,

    /// The name of the target method
    #[arg(short = 'n', long, required_unless_present = "config")]
    method_name: Option<String>,

    /// Argument names, in declaration order
    #[arg(short = 'a', long, num_args = 1.., required_unless_present = "config")]
    arg_names: Vec<String>,

    /// Argument types, one per argument name
    #[arg(short = 't', long, num_args = 1.., required_unless_present = "config")]
    arg_types: Vec<String>,

    /// Default values for the leading arguments
    #[arg(short = 'd', long, num_args = 1.., allow_negative_numbers = true)]
    arg_values: Vec<String>,

    /// Output file (standard output when absent)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Batch configuration file (TOML or JSON) describing several methods
    #[arg(
        short = 'c',
        long,
        conflicts_with_all = ["method_name", "arg_names", "arg_types", "arg_values"]
    )]
    config: Option<PathBuf>,

    /// Stop after this many overloads
    #[arg(short = 'l', long)]
    limit: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum VisibilityArg {
    Package,
    Public,
    Private,
    Protected,
}

impl From<VisibilityArg> for Visibility {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::Package => Visibility::Package,
            VisibilityArg::Public => Visibility::Public,
            VisibilityArg::Private => Visibility::Private,
            VisibilityArg::Protected => Visibility::Protected,
        }
    }
}

impl Cli {
    /// Checks that clap cannot express on its own.
    fn check_usage(&self) -> std::result::Result<(), clap::Error> {
        if self.config.is_some() {
            return Ok(());
        }
        if self.arg_names.len() != self.arg_types.len() {
            return Err(Cli::command().error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "got {} argument names but {} argument types",
                    self.arg_names.len(),
                    self.arg_types.len()
                ),
            ));
        }
        if self.arg_values.len() > self.arg_types.len() {
            return Err(Cli::command().error(
                ErrorKind::TooManyValues,
                format!(
                    "got {} argument values for {} arguments",
                    self.arg_values.len(),
                    self.arg_types.len()
                ),
            ));
        }
        Ok(())
    }

    /// The single method described by the command-line flags.
    fn method_config(&self) -> MethodConfig {
        let mut method = MethodConfig::new(self.method_name.as_deref().unwrap_or_default());
        method.visibility = Visibility::from(self.visibility).name().to_string();
        method.is_static = self.is_static;
        method.is_final = self.is_final;
        method.return_type = self.return_type.clone();
        method.arguments = self
            .arg_names
            .iter()
            .zip(&self.arg_types)
            .enumerate()
            .map(|(i, (name, ty))| ArgumentConfig {
                ty: ty.clone(),
                name: name.clone(),
                default: self.arg_values.get(i).cloned(),
            })
            .collect();
        method
    }

    /// The configuration to generate, from `--config` or the flags.
    fn gen_config(&self) -> Result<GenConfig> {
        let mut config = match &self.config {
            Some(path) => GenConfig::from_file(path)?,
            None => GenConfig {
                output: None,
                methods: vec![self.method_config()],
            },
        };
        if self.output.is_some() {
            config.output = self.output.clone();
        }
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DEFARG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn generate_into<S: OverloadSink>(config: &GenConfig, sink: S, limit: Option<usize>) -> Result<S> {
    let mut sink = Limited::new(sink, limit.unwrap_or(usize::MAX));
    let emitted = config.generate(&mut sink)?;
    info!(emitted, "generation finished");
    Ok(sink.into_inner())
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.gen_config()?;

    match &config.output {
        Some(path) => {
            let sink = FileSink::create(path)?;
            generate_into(&config, sink, cli.limit)?.finish()?;
            info!(path = %path.display(), "wrote overloads");
        }
        None => {
            generate_into(&config, WriterSink::stdout(), cli.limit)?.finish()?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = cli.check_usage() {
        err.exit();
    }

    run(&cli)
}
