//! End-to-end tests for the `collections` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn collections() -> Command {
    let mut cmd = Command::cargo_bin("collections").unwrap();
    cmd.env_remove("GALAXY_URL")
        .env_remove("GALAXY_API_KEY")
        .env_remove("GALAXY_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

fn details_body() -> Value {
    json!({
        "id": "abc",
        "collection_id": "xyz",
        "model_class": "HistoryDatasetCollectionAssociation",
        "name": "paired reads",
        "hid": 3,
        "history_id": "hist1",
        "collection_type": "list:paired",
        "populated_state": "ok",
        "element_count": 1
    })
}

fn page_body() -> Value {
    json!([
        {
            "id": "dce1",
            "model_class": "DatasetCollectionElement",
            "element_index": 0,
            "element_identifier": "sample1",
            "element_type": "hda",
            "object": {
                "id": "hda1",
                "model_class": "HistoryDatasetAssociation",
                "state": "ok"
            }
        }
    ])
}

#[test]
fn help_lists_subcommands() {
    collections()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("details"))
        .stdout(predicate::str::contains("contents"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("attributes"));
}

#[test]
fn missing_url_fails() {
    collections()
        .args(["details", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GALAXY_URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn attributes_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc/attributes"))
        .and(query_param("instance_type", "history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dbkey": "hg38",
            "extension": "bed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .env("GALAXY_URL", server.uri())
        .args(["attributes", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""dbkey": "hg38""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn browse_sub_collection_uses_default_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc/contents/elem1"))
        .and(query_param("instance_type", "history"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .args(["--url", &server.uri(), "browse", "abc", "--element", "elem1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn details_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body()))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .env("GALAXY_URL", server.uri())
        .args(["details", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""collection_id": "xyz""#))
        .stdout(predicate::str::contains(r#""collection_type": "list:paired""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn contents_passes_pagination_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc/contents/xyz"))
        .and(query_param("instance_type", "history"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .env("GALAXY_URL", server.uri())
        .args(["contents", "abc", "xyz", "--offset", "20", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""element_identifier": "sample1""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn contents_without_pagination_sends_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc/contents/xyz"))
        .and(query_param("instance_type", "history"))
        .and(query_param_is_missing("offset"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .env("GALAXY_URL", server.uri())
        .args(["contents", "abc", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "dce1""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn browse_hdca_fetches_details_then_default_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc/contents/xyz"))
        .and(query_param("instance_type", "history"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .env("GALAXY_URL", server.uri())
        .args(["browse", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""element_identifier": "sample1""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn api_key_flag_overrides_environment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dataset_collections/abc/attributes"))
        .and(header("x-api-key", "from-flag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dbkey": "hg38",
            "extension": "bed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    collections()
        .env("GALAXY_URL", server.uri())
        .env("GALAXY_API_KEY", "from-env")
        .args(["--api-key", "from-flag", "attributes", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""extension": "bed""#));
}
