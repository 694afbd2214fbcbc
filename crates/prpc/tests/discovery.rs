//! Integration tests for seed-based discovery against mock pNodes.

use prpc::{DiscoveryError, FindPNodeOptions, RpcClient, find_pnode};
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TARGET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

fn pod_json(pubkey: &str, address: &str) -> Value {
    json!({
        "address": address,
        "is_public": true,
        "last_seen_timestamp": 1_735_000_000i64,
        "pubkey": pubkey,
        "rpc_port": 6000,
        "storage_committed": 1_073_741_824i64,
        "storage_usage_percent": 50.0,
        "storage_used": 536_870_912i64,
        "uptime": 3600,
        "version": "1.0.0"
    })
}

fn pods_result(pods: Vec<Value>) -> Value {
    let total = pods.len();
    json!({
        "jsonrpc": "2.0",
        "result": { "pods": pods, "total_count": total },
        "id": 1
    })
}

/// Start a mock pNode whose get-pods returns the given pods
async fn mock_pnode(pods: Vec<Value>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pods_result(pods)))
        .mount(&server)
        .await;
    server
}

fn seed_of(server: &MockServer) -> String {
    server.address().to_string()
}

#[tokio::test]
async fn finds_pod_on_single_holder() {
    let empty_a = mock_pnode(vec![pod_json("other", "10.0.0.1")]).await;
    let holder = mock_pnode(vec![
        pod_json("other", "10.0.0.1"),
        pod_json(TARGET, "10.0.0.2"),
    ])
    .await;
    let empty_b = mock_pnode(vec![]).await;

    let options = FindPNodeOptions::default()
        .with_replace_seeds(vec![seed_of(&empty_a), seed_of(&holder), seed_of(&empty_b)])
        .with_timeout(Duration::from_secs(5));

    let pod = find_pnode(TARGET, options).await.unwrap();
    assert_eq!(pod.pubkey, TARGET);
    assert_eq!(pod.address, "10.0.0.2");
}

#[tokio::test]
async fn match_wins_despite_failing_seeds() {
    let broken_a = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken_a)
        .await;

    let holder = mock_pnode(vec![pod_json(TARGET, "10.0.0.2")]).await;

    // Closed port: bind then drop so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_seed = listener.local_addr().unwrap().to_string();
    drop(listener);

    let options = FindPNodeOptions::default()
        .with_replace_seeds(vec![seed_of(&broken_a), dead_seed, seed_of(&holder)])
        .with_timeout(Duration::from_secs(5));

    let pod = find_pnode(TARGET, options).await.unwrap();
    assert_eq!(pod.pubkey, TARGET);
}

#[tokio::test]
async fn exhausted_when_no_seed_matches() {
    let a = mock_pnode(vec![pod_json("other", "10.0.0.1")]).await;
    let b = mock_pnode(vec![]).await;

    let options = FindPNodeOptions::default()
        .with_replace_seeds(vec![seed_of(&a), seed_of(&b)])
        .with_timeout(Duration::from_secs(5));

    match find_pnode(TARGET, options).await {
        Err(DiscoveryError::NotFound { pubkey, failures }) => {
            assert_eq!(pubkey, TARGET);
            assert!(failures.is_empty());
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn exhausted_collects_seed_failures() {
    let broken = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": { "code": -32000, "message": "gossip table unavailable" },
            "id": 1
        })))
        .mount(&broken)
        .await;

    let clean = mock_pnode(vec![]).await;

    let options = FindPNodeOptions::default()
        .with_replace_seeds(vec![seed_of(&broken), seed_of(&clean)])
        .with_timeout(Duration::from_secs(5));

    match find_pnode(TARGET, options).await {
        Err(DiscoveryError::NotFound { failures, .. }) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].seed, seed_of(&broken));
            assert!(failures[0].error.contains("gossip table unavailable"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn times_out_on_slow_seeds() {
    let slow = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pods_result(vec![pod_json(TARGET, "10.0.0.2")]))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&slow)
        .await;

    let options = FindPNodeOptions::default()
        .with_replace_seeds(vec![seed_of(&slow)])
        .with_timeout(Duration::from_millis(200));

    let started = Instant::now();
    match find_pnode(TARGET, options).await {
        Err(DiscoveryError::TimedOut { pubkey }) => assert_eq!(pubkey, TARGET),
        other => panic!("expected TimedOut, got {other:?}"),
    }
    // Bounded by the deadline plus scheduling slack, not the seed's latency
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn duplicate_holders_yield_exactly_one_pod() {
    let holder_a = mock_pnode(vec![pod_json(TARGET, "10.0.0.2")]).await;
    let holder_b = mock_pnode(vec![pod_json(TARGET, "10.0.0.3")]).await;

    let options = FindPNodeOptions::default()
        .with_replace_seeds(vec![seed_of(&holder_a), seed_of(&holder_b)])
        .with_timeout(Duration::from_secs(5));

    // Arrival order decides which holder answers; either is a valid result
    let pod = find_pnode(TARGET, options).await.unwrap();
    assert_eq!(pod.pubkey, TARGET);
    assert!(pod.address == "10.0.0.2" || pod.address == "10.0.0.3");
}

#[tokio::test]
async fn replacement_hides_added_seeds() {
    // The added seed holds the pod, but the replacement list wins, so the
    // search must come back empty without ever touching the holder
    let holder = mock_pnode(vec![pod_json(TARGET, "10.0.0.2")]).await;
    let empty = mock_pnode(vec![]).await;

    let options = FindPNodeOptions::default()
        .with_add_seeds(vec![seed_of(&holder)])
        .with_replace_seeds(vec![seed_of(&empty)])
        .with_timeout(Duration::from_secs(5));

    match find_pnode(TARGET, options).await {
        Err(DiscoveryError::NotFound { failures, .. }) => assert!(failures.is_empty()),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(holder.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn get_pods_returns_typed_listing() {
    let server = mock_pnode(vec![pod_json(TARGET, "10.0.0.2"), pod_json("other", "10.0.0.3")]).await;

    let client = RpcClient::new(&seed_of(&server)).unwrap();
    let resp = client.get_pods().await.unwrap();

    assert_eq!(resp.total_count, 2);
    assert_eq!(resp.pods[0].pubkey, TARGET);
    assert_eq!(resp.pods[1].address, "10.0.0.3");
}

#[tokio::test]
async fn get_pods_with_stats_returns_typed_listing() {
    let server = mock_pnode(vec![pod_json(TARGET, "10.0.0.2")]).await;

    let client = RpcClient::new(&seed_of(&server)).unwrap();
    let resp = client.get_pods_with_stats().await.unwrap();

    assert_eq!(resp.total_count, 1);
    assert_eq!(resp.pods[0].storage_used, 536_870_912);
}

#[tokio::test]
async fn get_stats_returns_node_stats() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": {
                "active_streams": 2,
                "cpu_percent": 14.2,
                "current_index": 77,
                "file_size": 1024,
                "last_updated": 1_735_000_000i64,
                "packets_received": 100,
                "packets_sent": 90,
                "ram_total": 8_589_934_592i64,
                "ram_used": 2_147_483_648i64,
                "total_bytes": 4096,
                "total_pages": 16,
                "uptime": 600
            },
            "id": 1
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(&seed_of(&server)).unwrap();
    let stats = client.get_stats().await.unwrap();

    assert_eq!(stats.active_streams, 2);
    assert_eq!(stats.cpu_percent, 14.2);
    assert_eq!(stats.uptime, 600);
}

#[tokio::test]
async fn rpc_error_surfaces_as_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": { "code": -32601, "message": "method not found" },
            "id": 1
        })))
        .mount(&server)
        .await;

    let client = RpcClient::new(&seed_of(&server)).unwrap();
    let err = client.get_pods().await.unwrap_err();
    assert!(err.to_string().contains("method not found"));
}
