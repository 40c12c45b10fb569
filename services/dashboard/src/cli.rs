//! Command line interface

use clap::{Parser, Subcommand};

/// Dodam student dashboard
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session
    Login {
        /// Account id
        id: String,
        /// Password
        pw: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the home screen
    Home,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from(["dashboard", "login", "dodam", "secret"]).unwrap();
        match cli.command {
            Command::Login { id, pw } => {
                assert_eq!(id, "dodam");
                assert_eq!(pw, "secret");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_login_requires_password() {
        assert!(Cli::try_parse_from(["dashboard", "login", "dodam"]).is_err());
    }

    #[test]
    fn test_parse_home() {
        let cli = Cli::try_parse_from(["dashboard", "home"]).unwrap();
        assert!(matches!(cli.command, Command::Home));
    }
}
