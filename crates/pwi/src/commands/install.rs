use std::fmt::Write;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use tokio::process::Command;
use tracing::debug;
use url::Url;

use pwi_cli::{IndexArgs, InstallArgs};
use pwi_client::{IndexClientBuilder, IndexUrl};
use pwi_detect::{detect_backend, detect_language, detect_platform};
use pwi_resolver::find_links;

use crate::commands::ExitStatus;
use crate::printer::Printer;

/// Select a wheel for each requested distribution, then install the wheels (or print their URLs).
pub(crate) async fn install(
    args: InstallArgs,
    index: IndexArgs,
    printer: Printer,
) -> Result<ExitStatus> {
    // Fill in any constraints that weren't provided with those of the current machine.
    let backend = match args.backend {
        Some(backend) => backend,
        None => detect_backend()?,
    };
    let language = match args.language {
        Some(language) => language,
        None => detect_language(&args.python)?,
    };
    let platform = match args.platform {
        Some(platform) => platform,
        None => detect_platform()?,
    };
    debug!("Using backend `{backend}`, language `{language}`, and platform `{platform}`");
    if backend.is_unset() {
        debug!("No backend constraint; considering wheels for any backend");
    }
    if platform.is_unset() {
        debug!("No platform constraint; considering wheels for any platform");
    }

    let client = IndexClientBuilder::new()
        .timeout(Duration::from_secs(index.timeout))
        .build()?;
    let index = IndexUrl::new(index.index_url, index.index_page)?;
    let links = find_links(
        &client,
        &index,
        &args.distributions,
        &backend,
        &language,
        &platform,
    )
    .await?;

    if args.no_install {
        for link in &links {
            writeln!(printer.stdout(), "{link}")?;
        }
        return Ok(ExitStatus::Success);
    }

    let mut words = args.pip_cmd.split_whitespace();
    let Some(program) = words.next() else {
        bail!("The install command (`--pip-cmd`) is empty");
    };

    let s = if links.len() == 1 { "" } else { "s" };
    writeln!(
        printer.stderr(),
        "{}",
        format!("Installing {} wheel{s} with `{}`", links.len(), args.pip_cmd).dimmed()
    )?;

    let status = Command::new(program)
        .args(words)
        .args(links.iter().map(Url::as_str))
        .status()
        .await
        .with_context(|| format!("Failed to run `{program}`"))?;
    if !status.success() {
        bail!("`{}` failed with {status}", args.pip_cmd);
    }

    Ok(ExitStatus::Success)
}
