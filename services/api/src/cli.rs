use crate::commands::{
    run_analyze_contract, run_describe_unit, run_generate, run_summary, AnalyzeContractArgs,
    DescribeUnitArgs, GenerateArgs, SummaryArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use insignia::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Insignia",
    about = "Serve and explore the Insignia real-estate development dashboard",
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
    /// Write the generated dataset as JSON
    Generate(GenerateArgs),
    /// Print a portfolio report for the generated dataset
    Summary(SummaryArgs),
    /// Ask the generative model for a listing description of one unit
    DescribeUnit(DescribeUnitArgs),
    /// Ask the generative model a question about a contract document
    AnalyzeContract(AnalyzeContractArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed for a reproducible dataset
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Generate(args) => run_generate(args).await,
        Command::Summary(args) => run_summary(args),
        Command::DescribeUnit(args) => run_describe_unit(args).await,
        Command::AnalyzeContract(args) => run_analyze_contract(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["insignia"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from([
            "insignia",
            "describe-unit",
            "--unit-id",
            "abc123",
            "--seed",
            "7",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::DescribeUnit(args)) => {
                assert_eq!(args.unit_id, "abc123");
                assert_eq!(args.seed, 7);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn describe_unit_requires_a_seed() {
        let err = Cli::try_parse_from(["insignia", "describe-unit", "--unit-id", "abc123"])
            .expect_err("seed is mandatory");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
