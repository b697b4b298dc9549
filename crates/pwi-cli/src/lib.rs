use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Args, Parser};
use url::Url;

use pwi_client::{DEFAULT_TIMEOUT, PYTORCH_INDEX_PAGE, PYTORCH_INDEX_URL};
use pwi_detect::DEFAULT_PYTHON;
use pwi_static::EnvVars;
use pwi_tags::{Backend, Language, Platform};

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "pwi", author, version)]
#[command(about = "Install PyTorch distributions from the latest wheels.")]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(flatten)]
    pub install: InstallArgs,

    #[command(flatten)]
    pub index: IndexArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// The PyTorch distributions to install, e.g., `torch` or `torchvision`.
    ///
    /// Multiple distributions can be given as a comma-separated list.
    #[arg(
        long = "distribution",
        short,
        env = EnvVars::PWI_DISTRIBUTION,
        value_delimiter = ',',
        default_values = ["torch", "torchvision"],
        value_name = "DISTRIBUTION"
    )]
    pub distributions: Vec<String>,

    /// The computation backend, e.g., `cpu` or `cu113`.
    ///
    /// If not given, the backend is detected from the installed CUDA toolkit, falling back to the
    /// CPU. Any value other than `cpu` or `cu<version>` matches every backend.
    #[arg(long, short, env = EnvVars::PWI_BACKEND)]
    pub backend: Option<Backend>,

    /// The language tag, e.g., `cp38` or `py3`.
    ///
    /// If not given, the language is detected from the Python interpreter (see `--python`).
    #[arg(long, short, env = EnvVars::PWI_LANGUAGE)]
    pub language: Option<Language>,

    /// The platform, e.g., `linux`, `windows`, `macos`, or `any`.
    ///
    /// If not given, the platform of the current machine is used.
    #[arg(long, short, env = EnvVars::PWI_PLATFORM)]
    pub platform: Option<Platform>,

    /// Print the URLs of the selected wheels instead of installing them.
    #[arg(long)]
    pub no_install: bool,

    /// The command used to install the selected wheels.
    ///
    /// The command is split on whitespace, and the wheel URLs are appended to it.
    #[arg(long, env = EnvVars::PWI_PIP_CMD, default_value = "pip install")]
    pub pip_cmd: String,

    /// The Python interpreter used to detect the language tag.
    #[arg(long, env = EnvVars::PWI_PYTHON, default_value = DEFAULT_PYTHON)]
    pub python: String,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Index options")]
pub struct IndexArgs {
    /// The base URL of the wheel index.
    #[arg(long, env = EnvVars::PWI_INDEX_URL, default_value = PYTORCH_INDEX_URL)]
    pub index_url: Url,

    /// The page beneath the index URL that lists the available wheels.
    #[arg(long, env = EnvVars::PWI_INDEX_PAGE, default_value = PYTORCH_INDEX_PAGE)]
    pub index_page: String,

    /// The timeout for requests to the index, in seconds.
    #[arg(
        long,
        env = EnvVars::PWI_HTTP_TIMEOUT,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_name = "SECONDS"
    )]
    pub timeout: u64,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Do not print any output.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use verbose output.
    ///
    /// You can configure fine-grained logging using the `RUST_LOG` environment variable.
    /// (<https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives>)
    #[arg(global = true, action = clap::ArgAction::Count, long, short, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Control colors in output.
    #[arg(
        global = true,
        long,
        value_enum,
        default_value = "auto",
        value_name = "COLOR_CHOICE"
    )]
    pub color: ColorChoice,
}

#[derive(Debug, Copy, Clone, clap::ValueEnum)]
pub enum ColorChoice {
    /// Enables colored output only when the output is going to a terminal or TTY with support.
    Auto,

    /// Enables colored output regardless of the detected environment.
    Always,

    /// Disables colored output.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}
