use clap::Parser;
use eval_leaderboard::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Render(args) => cli::render::run(args).await,
        Command::Export(args) => cli::export::run(args).await,
        Command::Prepare(args) => cli::prepare::run(args).await,
    }
}
