use crate::cli::args::{CliArgs, Command};

pub fn validate(args: &CliArgs) -> Result<(), String> {
    match &args.command {
        Some(Command::Serve { port: Some(0), .. }) => {
            Err("invalid port, expected 1-65535".to_string())
        }
        Some(Command::Update { data, html }) => {
            if data.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err("invalid --data, expected a file path".to_string());
            }
            if html.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err("invalid --html, expected a file path".to_string());
            }
            Ok(())
        }
        Some(Command::Report { data }) => {
            if data.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err("invalid --data, expected a file path".to_string());
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
