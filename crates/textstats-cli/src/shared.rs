use std::fs;
use std::io::{self, Read};
use std::time::Duration;

use anyhow::Context;
use textstats_core::{RemoteConfig, StrategyKind};

use crate::cli::RemoteArgs;
use crate::error::{CliError, CliResult};

pub fn parse_strategy(s: &str) -> CliResult<StrategyKind> {
    s.parse::<StrategyKind>().map_err(|_| {
        CliError::input(format!(
            "Invalid strategy '{}'. Expected: local, remote, auto",
            s
        ))
    })
}

/// Build the remote configuration, or `None` when no API key is set.
///
/// An empty key counts as unset so `OPENAI_API_KEY=` disables the remote path.
pub fn remote_config(args: &RemoteArgs) -> CliResult<Option<RemoteConfig>> {
    let Some(api_key) = args
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
    else {
        return Ok(None);
    };

    if args.timeout_secs == 0 {
        return Err(CliError::input("Invalid timeout_secs '0'. Expected: a positive number"));
    }

    Ok(Some(
        RemoteConfig::new(api_key)
            .with_base_url(args.api_base.trim())
            .with_model(args.model.trim())
            .with_timeout(Duration::from_secs(args.timeout_secs)),
    ))
}

pub fn read_input(path: &str, stdin: bool) -> CliResult<String> {
    load_text(path, stdin).map_err(|e| CliError::runtime(format!("{e:#}")))
}

fn load_text(path: &str, stdin: bool) -> anyhow::Result<String> {
    if stdin || path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path))
    }
}
