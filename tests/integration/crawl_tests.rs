//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small mock shop and run the full
//! crawl cycle end-to-end: fetch, link discovery, extraction and CSV output.

use shop_harvest::config::Config;
use shop_harvest::crawler::{crawl, Session};
use shop_harvest::output::{CsvSink, ProductSink};
use shop_harvest::StopReason;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at `route`
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=UTF-8"),
        )
        .mount(server)
        .await;
}

/// Serves a shop rooted at `/shop/` and returns its base URL
///
/// - `/shop/` links to two listing pages, a product detail page, an
///   off-site page and some links that must be ignored
/// - `/shop/page/2/` is a full product and links to a missing page 4
/// - `/shop/page/3/` is a product without a price
/// - `/shop/page/4/` is not mounted and answers 404
async fn mock_shop(server: &MockServer) -> String {
    let base_url = format!("{}/shop/", server.uri());

    mount_page(
        server,
        "/shop/",
        r##"<html><body>
            <a href="#content">Skip to content</a>
            <a href="/shop/page/2/">2</a>
            <a href="page/3/">3</a>
            <a href="/shop/pikachu/">Pikachu</a>
            <a href="https://woocommerce.com/">Built with WooCommerce</a>
            <a href="mailto:shop@scrapeme.live">Contact</a>
        </body></html>"##
            .to_string(),
    )
    .await;

    mount_page(
        server,
        "/shop/page/2/",
        format!(
            r#"<html><body>
                <img class="wp-post-image" src="{uri}/img/bulbasaur.png">
                <h2 class="woocommerce-loop-product__title">Bulbasaur</h2>
                <span class="price">£63.00</span>
                <a href="/shop/page/3/">3</a>
                <a href="/shop/page/4/">4</a>
            </body></html>"#,
            uri = server.uri()
        ),
    )
    .await;

    mount_page(
        server,
        "/shop/page/3/",
        format!(
            r#"<html><body>
                <img class="wp-post-image" src="{uri}/img/ivysaur.png">
                <h2 class="woocommerce-loop-product__title">Ivysaur</h2>
                <a href="/shop/">Shop</a>
            </body></html>"#,
            uri = server.uri()
        ),
    )
    .await;

    mount_page(
        server,
        "/shop/pikachu/",
        r#"<html><body><h1>Pikachu</h1><a href="/shop/">Back</a></body></html>"#.to_string(),
    )
    .await;

    base_url
}

fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.crawler.request_timeout = 5;
    config
}

#[tokio::test]
async fn test_full_crawl_of_mock_shop() {
    let mock_server = MockServer::start().await;
    let base_url = mock_shop(&mock_server).await;
    let uri = mock_server.uri();

    let outcome = crawl(&test_config(&base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(outcome.stop_reason, StopReason::FrontierExhausted);
    assert_eq!(outcome.pages_scraped, 4);
    assert_eq!(outcome.fetch_failures, 1);
    assert_eq!(outcome.extraction_faults, 0);
    assert_eq!(outcome.urls_visited, 5);
    assert_eq!(outcome.frontier_remaining, 0);

    assert_eq!(outcome.products.len(), 2);

    let bulbasaur = &outcome.products[0];
    assert_eq!(bulbasaur.url, format!("{}/shop/page/2/", uri));
    assert_eq!(bulbasaur.image(), format!("{}/img/bulbasaur.png", uri));
    assert_eq!(bulbasaur.name(), "Bulbasaur");
    assert_eq!(bulbasaur.price(), "£63.00");

    let ivysaur = &outcome.products[1];
    assert_eq!(ivysaur.url, format!("{}/shop/page/3/", uri));
    assert_eq!(ivysaur.name(), "Ivysaur");
    assert_eq!(ivysaur.price(), "no price found");

    // Listing pages are fetched before the ordinary product detail page
    let requested: Vec<String> = mock_server
        .received_requests()
        .await
        .expect("Request recording disabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(
        requested,
        vec![
            "/shop/",
            "/shop/page/2/",
            "/shop/page/3/",
            "/shop/page/4/",
            "/shop/pikachu/",
        ]
    );
}

#[tokio::test]
async fn test_crawl_results_written_to_csv() {
    let mock_server = MockServer::start().await;
    let base_url = mock_shop(&mock_server).await;
    let uri = mock_server.uri();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let csv_path = dir.path().join("products.csv");

    let outcome = crawl(&test_config(&base_url))
        .await
        .expect("Crawl failed");
    CsvSink::new(&csv_path)
        .write_products(&outcome.products)
        .expect("Failed to write CSV");

    let written = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "url,image,name,price".to_string(),
            format!(
                "{uri}/shop/page/2/,{uri}/img/bulbasaur.png,Bulbasaur,£63.00",
                uri = uri
            ),
            format!(
                "{uri}/shop/page/3/,{uri}/img/ivysaur.png,Ivysaur,no price found",
                uri = uri
            ),
        ]
    );
}

#[tokio::test]
async fn test_page_limit_stops_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_shop(&mock_server).await;

    let mut config = test_config(&base_url);
    config.crawler.page_limit = Some(2);

    let mut session = Session::new(&config).expect("Failed to create session");
    let outcome = session.run().await.expect("Crawl failed");

    assert_eq!(outcome.stop_reason, StopReason::PageLimitReached);
    assert_eq!(outcome.pages_scraped, 2);
    assert_eq!(outcome.products.len(), 1);
    assert_eq!(outcome.products[0].name(), "Bulbasaur");

    // page/3, page/4 and the detail page are still queued
    assert_eq!(outcome.frontier_remaining, 3);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_concurrent_crawl_finds_same_products() {
    let mock_server = MockServer::start().await;
    let base_url = mock_shop(&mock_server).await;

    let mut config = test_config(&base_url);
    config.crawler.concurrency = 4;

    let outcome = crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.stop_reason, StopReason::FrontierExhausted);
    assert_eq!(outcome.pages_scraped, 4);
    assert_eq!(outcome.fetch_failures, 1);

    let mut names: Vec<&str> = outcome.products.iter().map(|p| p.name()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Bulbasaur", "Ivysaur"]);

    // Every URL is fetched at most once
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
}

#[tokio::test]
async fn test_zero_page_limit_writes_header_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_shop(&mock_server).await;

    let mut config = test_config(&base_url);
    config.crawler.page_limit = Some(0);

    let outcome = crawl(&config).await.expect("Crawl failed");
    assert_eq!(outcome.pages_scraped, 0);
    assert!(mock_server.received_requests().await.unwrap().is_empty());

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("products.csv");
    CsvSink::new(&csv_path)
        .write_products(&outcome.products)
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "url,image,name,price\n"
    );
}

#[tokio::test]
async fn test_unreachable_shop_finishes_with_failure() {
    // Nothing listens on the discard port
    let config = test_config("http://127.0.0.1:9/shop/");

    let outcome = crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.stop_reason, StopReason::FrontierExhausted);
    assert_eq!(outcome.pages_scraped, 0);
    assert_eq!(outcome.fetch_failures, 1);
    assert!(outcome.products.is_empty());
}
