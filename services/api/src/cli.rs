use crate::demo::{run_demo, run_program_insights, DemoArgs, ProgramInsightsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use confdesk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Conference Program Desk",
    about = "Score proposal reviews and serve program-committee insights",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Program-committee reporting over an imported review export
    Program {
        #[command(subcommand)]
        command: ProgramCommand,
    },
    /// Run an end-to-end CLI demo over a seeded review ledger
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProgramCommand {
    /// Print the program board and distribution tables
    Insights(ProgramInsightsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Preload the in-memory review source from a CSV export
    #[arg(long)]
    pub(crate) reviews_csv: Option<std::path::PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Program {
            command: ProgramCommand::Insights(args),
        } => run_program_insights(args),
        Command::Demo(args) => run_demo(args),
    }
}
