use std::str::FromStr;

use anyhow::Result;
use indoc::indoc;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pwi_client::{IndexClientBuilder, IndexUrl};
use pwi_resolver::{Field, FindLinksError, find_links};
use pwi_tags::{Backend, Language, Platform};

const PAGE: &str = indoc! {r#"
    <html>
    <body>
    <a href="cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cpu/torch-1.10.0%2Bcpu-cp39-cp39-linux_x86_64.whl">cpu/torch-1.10.0%2Bcpu-cp39-cp39-linux_x86_64.whl</a><br>
    <a href="cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl">cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>
    <a href="cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-win_amd64.whl">cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-win_amd64.whl</a><br>
    <a href="cpu/torchcsprng-0.2.0%2Bcpu-cp38-cp38-linux_x86_64.whl">cpu/torchcsprng-0.2.0%2Bcpu-cp38-cp38-linux_x86_64.whl</a><br>
    </body>
    </html>
"#};

async fn server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/whl/torch_stable.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn index(server: &MockServer) -> Result<IndexUrl> {
    let base = Url::parse(&format!("{}/whl/", server.uri()))?;
    Ok(IndexUrl::new(base, "torch_stable.html")?)
}

#[tokio::test]
async fn links_in_request_order() -> Result<()> {
    let server = server().await;
    let client = IndexClientBuilder::new().build()?;

    let links = find_links(
        &client,
        &index(&server)?,
        &["torchvision", "torch"],
        &Backend::Cpu,
        &Language::from_str("cp38")?,
        &Platform::Linux,
    )
    .await?;

    let links = links
        .iter()
        .map(|url| url.path().to_string())
        .collect::<Vec<_>>();
    insta::assert_debug_snapshot!(links, @r#"
    [
        "/whl/cpu/torchvision-0.11.1%2Bcpu-cp38-cp38-linux_x86_64.whl",
        "/whl/cpu/torch-1.10.0%2Bcpu-cp38-cp38-linux_x86_64.whl",
    ]
    "#);

    Ok(())
}

#[tokio::test]
async fn links_resolve_against_base() -> Result<()> {
    let server = server().await;
    let client = IndexClientBuilder::new().build()?;

    let links = find_links(
        &client,
        &index(&server)?,
        &["torch"],
        &Backend::Cuda {
            version: "113".into(),
        },
        &Language::from_str("cp38")?,
        &Platform::Linux,
    )
    .await?;

    assert_eq!(
        links,
        vec![Url::parse(&format!(
            "{}/whl/cu113/torch-1.10.0%2Bcu113-cp38-cp38-linux_x86_64.whl",
            server.uri()
        ))?]
    );

    Ok(())
}

#[tokio::test]
async fn links_ignore_page_directory() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/whl/stable/torch_stable.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;
    let client = IndexClientBuilder::new().build()?;
    let base = Url::parse(&format!("{}/whl/", server.uri()))?;
    let index = IndexUrl::new(base, "stable/torch_stable.html")?;

    let links = find_links(
        &client,
        &index,
        &["torch"],
        &Backend::Cpu,
        &Language::from_str("cp39")?,
        &Platform::Linux,
    )
    .await?;

    assert_eq!(
        links,
        vec![Url::parse(&format!(
            "{}/whl/cpu/torch-1.10.0%2Bcpu-cp39-cp39-linux_x86_64.whl",
            server.uri()
        ))?]
    );

    Ok(())
}

#[tokio::test]
async fn unknown_distribution() -> Result<()> {
    let server = server().await;
    let client = IndexClientBuilder::new().build()?;

    let err = find_links(
        &client,
        &index(&server)?,
        &["torch", "torchcsprng"],
        &Backend::Cpu,
        &Language::from_str("cp38")?,
        &Platform::Linux,
    )
    .await
    .unwrap_err();

    let FindLinksError::Selection(distribution, err) = err else {
        panic!("Expected a selection error, got: {err:?}");
    };
    assert_eq!(distribution, "torchcsprng");
    assert_eq!(err.field, Field::Distribution);
    assert_eq!(err.valid, vec!["torch", "torchvision"]);

    Ok(())
}

#[tokio::test]
async fn index_unavailable() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = IndexClientBuilder::new().build()?;

    let err = find_links(
        &client,
        &index(&server)?,
        &["torch"],
        &Backend::Cpu,
        &Language::from_str("cp38")?,
        &Platform::Linux,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, FindLinksError::Index(..)), "{err:?}");

    Ok(())
}
