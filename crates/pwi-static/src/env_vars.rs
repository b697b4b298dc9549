/// Declares all environment variables used throughout `pwi` and its crates.
pub struct EnvVars;

impl EnvVars {
    /// Equivalent to the `--distribution` command-line argument. A comma-separated list of
    /// PyTorch distributions to select, e.g., `torch,torchvision`.
    pub const PWI_DISTRIBUTION: &'static str = "PWI_DISTRIBUTION";

    /// Equivalent to the `--backend` command-line argument, e.g., `cpu` or `cu113`.
    pub const PWI_BACKEND: &'static str = "PWI_BACKEND";

    /// Equivalent to the `--language` command-line argument, e.g., `py38` or `cp36`.
    pub const PWI_LANGUAGE: &'static str = "PWI_LANGUAGE";

    /// Equivalent to the `--platform` command-line argument, e.g., `linux`, `windows`, `macos`,
    /// or `any`.
    pub const PWI_PLATFORM: &'static str = "PWI_PLATFORM";

    /// Equivalent to the `--index-url` command-line argument. The base URL against which the
    /// index page and all wheel filenames are resolved.
    pub const PWI_INDEX_URL: &'static str = "PWI_INDEX_URL";

    /// Equivalent to the `--index-page` command-line argument. The name of the flat HTML page
    /// listing all available wheels, relative to the index URL.
    pub const PWI_INDEX_PAGE: &'static str = "PWI_INDEX_PAGE";

    /// Timeout (in seconds) for the index request. Equivalent to `--timeout`.
    pub const PWI_HTTP_TIMEOUT: &'static str = "PWI_HTTP_TIMEOUT";

    /// Equivalent to the `--pip-cmd` command-line argument. The command used to install the
    /// selected wheels; the wheel URLs are appended as trailing arguments.
    pub const PWI_PIP_CMD: &'static str = "PWI_PIP_CMD";

    /// Equivalent to the `--python` command-line argument. The interpreter queried to detect the
    /// language tag when `--language` is not given.
    pub const PWI_PYTHON: &'static str = "PWI_PYTHON";

    /// The CUDA toolkit version (e.g., `11.3`) to assume instead of querying `nvcc`.
    pub const PWI_CUDA_VERSION: &'static str = "PWI_CUDA_VERSION";

    /// Disables colored output. Equivalent to `--color never`.
    ///
    /// See [no-color.org](https://no-color.org).
    pub const NO_COLOR: &'static str = "NO_COLOR";

    /// If set, pwi will use this value as the log level for its `--verbose` output. Accepts
    /// any filter compatible with the `tracing_subscriber` crate.
    ///
    /// For example:
    ///
    /// * `RUST_LOG=pwi=debug` is the equivalent of adding `--verbose` to the command line
    /// * `RUST_LOG=trace` will enable trace-level logging.
    ///
    /// See the [tracing documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#example-syntax)
    /// for more.
    pub const RUST_LOG: &'static str = "RUST_LOG";
}
