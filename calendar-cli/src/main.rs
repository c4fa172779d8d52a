//! calendar CLI - front door for the calendar query service
//!
//! - `serve`: run the HTTP API and static front-end
//! - `check`: run the health and stats queries once, print JSON
//! - `completions`: shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "calendar",
    author,
    version,
    about = "Read-only HTTP API over campus calendar data",
    long_about = "Serve month summaries, per-day details and table stats from the calendar \
                  database, together with the static calendar front-end."
)]
struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (API routes and static front-end)
    Serve(commands::serve::ServeArgs),
    /// Connect once, run the health and stats queries, print JSON
    Check(commands::check::CheckArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Platform-style MYSQL* variables may come from a local .env
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Check(args) => commands::run_check(args).await,
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_reads_flags() {
        let cli = Cli::try_parse_from([
            "calendar",
            "serve",
            "--port",
            "8080",
            "--db-host",
            "db.internal",
            "--db-user",
            "calendar",
            "--db-name",
            "campus",
            "--cors-origin",
            "https://calendar.example.edu",
        ])
        .unwrap();

        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.cors_origins, ["https://calendar.example.edu"]);
        let db = args.db.to_config();
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.database, "campus");
    }
}
