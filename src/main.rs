use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;

use yall_nerds::logging;
use yall_nerds::GreetingService;

#[derive(Parser)]
#[command(name = "yall")]
#[command(author = "Y'all Nerds Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Y'all Nerds - personalized greetings from the club", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Greet someone by name (or everyone, with no name)")]
    Greet {
        #[arg(help = "Name of the person to greet")]
        name: Option<String>,

        #[arg(long, help = "Emit the greeting as JSON")]
        json: bool,
    },

    #[command(about = "Check whether a name is usable for a greeting")]
    Check {
        #[arg(help = "Name to check")]
        name: String,
    },

    #[command(about = "Print the club welcome message")]
    Welcome,
}

/// Machine-readable shape of a greeting, for `--json` output.
#[derive(Debug, Serialize)]
struct GreetingPayload<'a> {
    name: Option<&'a str>,
    greeting: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    let service = GreetingService::new();

    match cli.command {
        Commands::Greet { name, json } => greet(&service, name.as_deref(), json)?,
        Commands::Check { name } => {
            if !check_name(&service, &name) {
                // Non-zero exit so shell callers can branch on validity
                std::process::exit(1);
            }
        }
        Commands::Welcome => {
            println!("{}", service.welcome_message().blue().bold());
        }
    }

    Ok(())
}

fn greet(service: &GreetingService, name: Option<&str>, as_json: bool) -> Result<()> {
    let personalized = service.is_valid_name(name);
    let greeting = service.generate_personalized_greeting(name);
    logging::log_greeting(name.is_some(), personalized);

    if as_json {
        let payload = GreetingPayload {
            name: name.map(str::trim).filter(|n| !n.is_empty()),
            greeting,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", greeting.green());
    }

    Ok(())
}

/// Print the validity verdict for `name` and return it; the caller decides
/// the process exit status.
fn check_name(service: &GreetingService, name: &str) -> bool {
    let valid = service.is_valid_name(Some(name));
    logging::log_name_check(valid);

    if valid {
        println!("{} {} is a valid name", "✓".green(), name.trim().cyan());
    } else {
        println!("{} not a usable name (empty or whitespace-only)", "✗".red());
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_with_name_succeeds() {
        let service = GreetingService::new();
        assert!(greet(&service, Some("John"), false).is_ok());
        assert!(greet(&service, None, true).is_ok());
    }

    #[test]
    fn test_check_name_reports_validity() {
        let service = GreetingService::new();
        assert!(check_name(&service, "John"));
        assert!(!check_name(&service, ""));
        assert!(!check_name(&service, " \t\n "));
    }

    #[test]
    fn test_greeting_payload_serialization() {
        let payload = GreetingPayload {
            name: Some("John"),
            greeting: "Hello John, welcome to the Y'all Nerds club!".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"John","greeting":"Hello John, welcome to the Y'all Nerds club!"}"#
        );

        let default = GreetingPayload {
            name: None,
            greeting: "Hello Y'all Nerds!".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&default).unwrap(),
            r#"{"name":null,"greeting":"Hello Y'all Nerds!"}"#
        );
    }
}
