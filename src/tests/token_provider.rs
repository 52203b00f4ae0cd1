// Token provider against a mocked token endpoint:
//  - cached token served without I/O
//  - expired/absent token refreshed with exactly one exchange
//  - failed exchanges surface as authorization errors and leave nothing cached
//  - concurrent refreshes coalesce when enabled

#[cfg(test)]
mod test {

    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{DateTime, Duration as ChronoDuration, Utc};
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use tokio::task::JoinSet;

    use crate::cache::token::Token;
    use crate::config::services::{Endpoint, SecurityConfig, ServiceSettings};
    use crate::error::BridgeError;
    use crate::tests::common::{
        service_settings, token_json, token_provider, token_provider_with, CLIENT_ID,
        CLIENT_SECRET, TOKEN_PATH,
    };
    use crate::utils::constants::TOKEN_EXCHANGE_FAILED;

    #[tokio::test]
    async fn absent_token_triggers_one_exchange_then_serves_cache() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST)
                .path(TOKEN_PATH)
                .header("content-type", "application/x-www-form-urlencoded")
                .body_includes("grant_type=client_credentials")
                .body_includes(format!("client_id={}", CLIENT_ID))
                .body_includes(format!("client_secret={}", CLIENT_SECRET));
            then.status(200)
                .header("content-type", "application/json")
                .body(token_json("tok-1", 3600));
        });
        let provider = token_provider(&server, true);

        let before = Utc::now();
        let first = provider.get_token().await.unwrap();
        let after = Utc::now();
        let second = provider.get_token().await.unwrap();

        assert_eq!(first.access_token, "tok-1");
        assert!(first.expires_at >= before + ChronoDuration::seconds(3600));
        assert!(first.expires_at <= after + ChronoDuration::seconds(3600));
        assert_eq!(second, first);
        assert_eq!(token_mock.calls(), 1);
    }

    #[tokio::test]
    async fn valid_cached_token_needs_no_exchange() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200).body(token_json("fresh", 3600));
        });
        let provider = token_provider(&server, true);
        provider
            .cache()
            .set(Token::issued_at("seeded".into(), Utc::now(), 600))
            .await;

        let token = provider.get_token().await.unwrap();

        assert_eq!(token.access_token, "seeded");
        assert_eq!(token_mock.calls(), 0);
    }

    #[tokio::test]
    async fn expired_token_is_replaced() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200).body(token_json("renewed", 120));
        });
        let provider = token_provider(&server, false);
        provider
            .cache()
            .set(Token::new("stale".into(), Utc::now() - ChronoDuration::seconds(5)))
            .await;

        let token = provider.get_token().await.unwrap();

        assert_eq!(token.access_token, "renewed");
        assert!(token.expires_at > Utc::now());
        assert_eq!(provider.cache().peek().await.unwrap().access_token, "renewed");
        assert_eq!(token_mock.calls(), 1);
    }

    #[tokio::test]
    async fn rejected_exchange_is_an_authorization_error_and_clears_cache() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"error":"invalid_client","error_description":"unknown client"}"#);
        });
        let provider = token_provider(&server, true);
        provider
            .cache()
            .set(Token::new("stale".into(), Utc::now() - ChronoDuration::seconds(5)))
            .await;

        let err = provider.get_token().await.unwrap_err();

        assert!(matches!(err, BridgeError::Authorization(ref reason) if reason == TOKEN_EXCHANGE_FAILED));
        assert!(provider.cache().peek().await.is_none());
        assert_eq!(token_mock.calls(), 1);
    }

    #[tokio::test]
    async fn response_without_access_token_is_an_authorization_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200).body(r#"{"expires_in":3600,"token_type":"Bearer"}"#);
        });
        let provider = token_provider(&server, true);

        let err = provider.get_token().await.unwrap_err();

        assert!(matches!(err, BridgeError::Authorization(_)));
        assert!(provider.cache().peek().await.is_none());
    }

    #[tokio::test]
    async fn missing_credentials_still_attempt_the_exchange() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST)
                .path(TOKEN_PATH)
                .body_includes("grant_type=client_credentials")
                .body_excludes("client_id");
            then.status(400).body(r#"{"error":"invalid_request"}"#);
        });
        let provider = token_provider_with(&server, service_settings(), SecurityConfig::default(), true);

        let err = provider.get_token().await.unwrap_err();

        assert!(matches!(err, BridgeError::Authorization(_)));
        assert_eq!(token_mock.calls(), 1);
    }

    #[tokio::test]
    async fn huge_expires_in_is_clamped_instead_of_overflowing() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200).body(r#"{"access_token":"x","expires_in":10000000000000}"#);
        });
        let provider = token_provider(&server, true);

        let first = provider.get_token().await.unwrap();
        let second = provider.get_token().await.unwrap();

        assert_eq!(first.access_token, "x");
        assert_eq!(first.expires_at, DateTime::<Utc>::MAX_UTC);
        assert_eq!(second, first);
        assert_eq!(token_mock.calls(), 1);
    }

    #[tokio::test]
    async fn unconfigured_token_endpoint_is_a_configuration_error() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200).body(token_json("never", 60));
        });
        let services = Arc::new(ServiceSettings {
            base_url: "http://unused".into(),
            endpoints: vec![Endpoint::new("HealthCheck", "health")],
        });
        let provider = token_provider_with(&server, services, SecurityConfig::default(), true);

        let err = provider.get_token().await.unwrap_err();

        assert!(matches!(err, BridgeError::Configuration(ref name) if name == "Token"));
        assert_eq!(token_mock.calls(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_refreshes_coalesce_into_one_exchange() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .delay(Duration::from_millis(200))
                .body(token_json("shared", 3600));
        });
        let provider = Arc::new(token_provider(&server, true));

        let mut tasks = JoinSet::new();
        for _ in 0..8 {
            let provider = provider.clone();
            tasks.spawn(async move { provider.get_token().await });
        }
        while let Some(result) = tasks.join_next().await {
            assert_eq!(result.unwrap().unwrap().access_token, "shared");
        }

        assert_eq!(token_mock.calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn uncoalesced_refreshes_may_duplicate_exchanges() {
        let server = MockServer::start_async().await;
        let token_mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .delay(Duration::from_millis(200))
                .body(token_json("last-write-wins", 3600));
        });
        let provider = Arc::new(token_provider(&server, false));

        let mut tasks = JoinSet::new();
        for _ in 0..4 {
            let provider = provider.clone();
            tasks.spawn(async move { provider.get_token().await });
        }
        while let Some(result) = tasks.join_next().await {
            assert_eq!(result.unwrap().unwrap().access_token, "last-write-wins");
        }

        assert!(token_mock.calls() > 1);
        assert!(provider.cache().get().await.is_some());
    }
}
