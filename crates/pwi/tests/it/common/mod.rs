use std::process::Output;

use assert_cmd::Command;
use indoc::indoc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pwi_static::EnvVars;

/// A stable index page with a handful of wheels.
const PAGE: &str = indoc! {r#"
    <!DOCTYPE html>
    <html>
    <body>
    <h1>PyTorch wheels</h1>
    <a href="cpu/torch-1.9.1%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torch-1.9.1%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cpu/torch-1.10.0%2Bcpu-cp39-cp39-win_amd64.whl">cpu/torch-1.10.0%2Bcpu-cp39-cp39-win_amd64.whl</a><br>
    <a href="cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl">cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cu113/torchvision-0.11.1%2Bcu113-cp38-cp38-linux_x86_64.whl">cu113/torchvision-0.11.1%2Bcu113-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="torchtext-0.6.0-py3-none-any.whl">torchtext-0.6.0-py3-none-any.whl</a><br>
    </body>
    </html>
"#};

/// Filters for the address of the mock index.
pub(crate) const INDEX_FILTERS: &[(&str, &str)] = &[(r"http://127\.0\.0\.1:\d+", "[INDEX]")];

pub(crate) struct TestContext {
    pub(crate) server: MockServer,
}

impl TestContext {
    /// Start a mock index serving the stable page.
    pub(crate) async fn new() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/whl/torch_stable.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;
        Self { server }
    }

    /// Start a mock index that responds to every request with the given status.
    pub(crate) async fn with_status(status: u16) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        Self { server }
    }

    pub(crate) fn index_url(&self) -> String {
        format!("{}/whl/", self.server.uri())
    }

    /// Create a `pwi` command against the mock index, isolated from the environment.
    pub(crate) fn command(&self) -> Command {
        let mut command = Command::cargo_bin("pwi").unwrap();
        command
            .arg("--index-url")
            .arg(self.index_url())
            .env(EnvVars::NO_COLOR, "1")
            .env_remove(EnvVars::RUST_LOG)
            .env_remove(EnvVars::PWI_DISTRIBUTION)
            .env_remove(EnvVars::PWI_BACKEND)
            .env_remove(EnvVars::PWI_LANGUAGE)
            .env_remove(EnvVars::PWI_PLATFORM)
            .env_remove(EnvVars::PWI_INDEX_URL)
            .env_remove(EnvVars::PWI_INDEX_PAGE)
            .env_remove(EnvVars::PWI_HTTP_TIMEOUT)
            .env_remove(EnvVars::PWI_PIP_CMD)
            .env_remove(EnvVars::PWI_PYTHON)
            .env_remove(EnvVars::PWI_CUDA_VERSION);
        command
    }
}

/// Render the output of a command for snapshotting.
pub(crate) fn render(output: &Output) -> String {
    format!(
        "success: {}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
        output.status.success(),
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    )
}

/// Run a command and snapshot its rendered output, with the address of the mock index filtered.
#[macro_export]
macro_rules! pwi_snapshot {
    ($cmd:expr, @$snapshot:literal) => {{
        let output = $cmd.output().unwrap();
        insta::with_settings!({ filters => $crate::common::INDEX_FILTERS.to_vec() }, {
            insta::assert_snapshot!($crate::common::render(&output), @$snapshot);
        });
    }};
}
