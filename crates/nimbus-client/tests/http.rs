use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nimbus_api::{KubernetesClusterConfig, KubernetesClusterPoolConfig};
use nimbus_client::{ClientError, CloudApi, HttpClient};

async fn client(server: &MockServer) -> HttpClient {
    HttpClient::new(server.uri(), "test-key")
        .unwrap()
        .with_region("LON1")
}

#[tokio::test]
async fn test_list_volumes_sends_auth_and_region() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/volumes"))
        .and(query_param("region", "LON1"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "v-1", "name": "data", "size_gb": 10, "status": "available"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let volumes = client(&server).await.list_volumes().await.unwrap();
    assert_eq!(volumes.len(), 1);
    assert_eq!(volumes[0].size_gigabytes, 10);
}

#[tokio::test]
async fn test_list_dangling_volumes_uses_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/volumes"))
        .and(query_param("dangling", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "v-9", "name": "orphan", "status": "dangling", "cluster_id": "gone"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let volumes = client(&server).await.list_dangling_volumes().await.unwrap();
    assert_eq!(volumes[0].status, "dangling");
}

#[tokio::test]
async fn test_paginated_endpoints_return_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/instances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "per_page": 20, "pages": 1,
            "items": [{"id": "i-1", "hostname": "web-1"}, {"id": "i-2", "hostname": "web-2"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/kubernetes/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1, "per_page": 20, "pages": 1,
            "items": [{"id": "c-1", "name": "prod", "instances": []}]
        })))
        .mount(&server)
        .await;

    let api = client(&server).await;
    let instances = api.list_instances().await.unwrap();
    let clusters = api.list_kubernetes_clusters().await.unwrap();

    assert_eq!(instances[1].hostname, "web-2");
    assert_eq!(clusters[0].name, "prod");
}

#[tokio::test]
async fn test_error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/quota"))
        .respond_with(ResponseTemplate::new(401).set_body_string("authentication failed"))
        .mount(&server)
        .await;

    let err = client(&server).await.get_quota().await.unwrap_err();
    match &err {
        ClientError::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "authentication failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_connectivity());
}

#[tokio::test]
async fn test_find_cluster_through_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/kubernetes/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "c-1", "name": "production"},
                {"id": "c-2", "name": "staging"}
            ]
        })))
        .mount(&server)
        .await;

    let cluster = client(&server)
        .await
        .find_kubernetes_cluster("stag")
        .await
        .unwrap();
    assert_eq!(cluster.id, "c-2");
}

#[tokio::test]
async fn test_update_cluster_puts_pools_with_region() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/kubernetes/clusters/c-1"))
        .and(body_json(json!({
            "pools": [
                {"id": "existing", "count": 3, "size": "g4s.kube.medium"},
                {"id": "extra", "count": 2, "size": "g4s.kube.large", "public_ip_node_pool": true}
            ],
            "region": "LON1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c-1", "name": "production"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = KubernetesClusterConfig {
        pools: vec![
            KubernetesClusterPoolConfig {
                id: "existing".to_string(),
                count: 3,
                size: "g4s.kube.medium".to_string(),
                public_ip_node_pool: false,
            },
            KubernetesClusterPoolConfig {
                id: "extra".to_string(),
                count: 2,
                size: "g4s.kube.large".to_string(),
                public_ip_node_pool: true,
            },
        ],
        region: None,
    };

    let cluster = client(&server)
        .await
        .update_kubernetes_cluster("c-1", &config)
        .await
        .unwrap();
    assert_eq!(cluster.name, "production");
}
