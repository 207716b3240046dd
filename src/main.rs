use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actions_outdated::config::{DEFAULT_TIMEOUT_SECS, Settings};
use actions_outdated::scanner::{self, ParseFailureMode};
use actions_outdated::version::{GitHubRegistry, VersionChecker};
use actions_outdated::{log, report};
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "actions-outdated")]
#[command(about = "Report outdated GitHub Actions referenced by workflow files")]
struct Cli {
    /// Directory to scan for workflow files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// GitHub API token used for release lookups
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds for release lookups
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Fail on the first workflow file that cannot be read or parsed
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            dir: self.dir,
            token: self.token,
            timeout: Duration::from_secs(self.timeout),
            strict: self.strict,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log::init();

    let settings = Cli::parse().into_settings();

    let mode = if settings.strict {
        ParseFailureMode::Abort
    } else {
        ParseFailureMode::Skip
    };

    let usage = scanner::scan_dir(&settings.dir, mode)
        .with_context(|| format!("Failed to scan {}", settings.dir.display()))?;

    let registry = GitHubRegistry::new(settings.token, settings.timeout);
    let checker = VersionChecker::new(Arc::new(registry));
    let outdated = checker.check(&usage).await;

    print!("{}", report::render(&usage, &outdated));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_scan_the_current_directory_without_a_token() {
        unsafe { std::env::remove_var("GITHUB_TOKEN") };

        let settings = Cli::parse_from(["actions-outdated"]).into_settings();

        assert_eq!(settings.dir, PathBuf::from("."));
        assert_eq!(settings.token, None);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!settings.strict);
    }

    #[test]
    #[serial]
    fn token_falls_back_to_the_environment() {
        unsafe { std::env::set_var("GITHUB_TOKEN", "from-env") };

        let settings = Cli::parse_from(["actions-outdated"]).into_settings();

        assert_eq!(settings.token, Some("from-env".to_string()));

        unsafe { std::env::remove_var("GITHUB_TOKEN") };
    }

    #[test]
    #[serial]
    fn token_flag_overrides_the_environment() {
        unsafe { std::env::set_var("GITHUB_TOKEN", "from-env") };

        let settings =
            Cli::parse_from(["actions-outdated", "--token", "from-flag"]).into_settings();

        assert_eq!(settings.token, Some("from-flag".to_string()));

        unsafe { std::env::remove_var("GITHUB_TOKEN") };
    }

    #[test]
    #[serial]
    fn flags_override_defaults() {
        unsafe { std::env::remove_var("GITHUB_TOKEN") };

        let settings = Cli::parse_from([
            "actions-outdated",
            "--dir",
            "/tmp/workflows",
            "--timeout",
            "30",
            "--strict",
        ])
        .into_settings();

        assert_eq!(settings.dir, PathBuf::from("/tmp/workflows"));
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(settings.strict);
    }
}
