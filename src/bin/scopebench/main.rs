use clap::{Parser, Subcommand};

mod bench;
mod cmds;
mod scope;

/// Measure variable resolution cost across nested lexical scopes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default)]
enum Command {
    /// Run the scope lookup benchmark once and print the elapsed time.
    #[default]
    Run,
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    let parse = Cli::parse();

    match parse.command.unwrap_or_default() {
        Command::Run => cmds::run(&mut std::io::stdout().lock())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn no_arguments_defaults_to_run() {
        let cli = Cli::try_parse_from(["scopebench"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Run));
    }

    #[test]
    fn explicit_run_subcommand() {
        let cli = Cli::try_parse_from(["scopebench", "run"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Run)));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["scopebench", "--iterations", "10"]).is_err());
    }
}
