use std::net::TcpListener;
use std::time::Duration;

use loader::{FetchState, HttpTransport, Transport, TransportConfig};
use payloads::User;
use test_helpers::{mock, spawn_app};

use crate::recording_loader;

fn seeded(id: payloads::UserId) -> User {
    mock::users().into_iter().find(|u| u.id == id).unwrap()
}

#[tokio::test]
async fn loads_user_over_http() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let transport = HttpTransport::new(app.api_base());
    let (loader, sink) = recording_loader::<User, _>(transport);

    loader.load("/users/42").await;

    assert_eq!(
        sink.states(),
        vec![FetchState::Pending, FetchState::success(seeded(mock::ADA))]
    );

    Ok(())
}

#[tokio::test]
async fn missing_user_over_http_is_404_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let transport = HttpTransport::new(app.api_base());
    let (loader, sink) = recording_loader::<User, _>(transport);

    loader.load("/users/999").await;

    assert_eq!(
        sink.states(),
        vec![
            FetchState::Pending,
            FetchState::failure("HTTP error! status: 404")
        ]
    );

    Ok(())
}

#[tokio::test]
async fn loads_user_list_over_http() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let transport = HttpTransport::new(app.api_base());
    let (loader, sink) = recording_loader::<Vec<User>, _>(transport);

    loader.load("/users").await;

    let users = sink.states()[1].clone().into_payload().unwrap();
    let mut expected = mock::users();
    expected.sort_by_key(|u| u.id);
    assert_eq!(users, expected);

    Ok(())
}

#[tokio::test]
async fn non_json_body_over_http_is_parse_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let transport = HttpTransport::new(app.api_base());
    let (loader, sink) = recording_loader::<User, _>(transport);

    // plain-text "healthy"
    loader.load("/health_check").await;

    let expected = serde_json::from_slice::<User>(b"healthy")
        .unwrap_err()
        .to_string();
    assert_eq!(sink.states()[1], FetchState::failure(expected));

    Ok(())
}

#[tokio::test]
async fn connection_failure_publishes_transport_text() -> anyhow::Result<()> {
    // grab a free port, then close it so nothing is listening
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let url = format!("http://127.0.0.1:{port}/api/users/42");
    let transport = HttpTransport::new("http://unused.invalid");
    let expected = transport.fetch(&url).await.unwrap_err();
    let (loader, sink) = recording_loader::<User, _>(transport);

    loader.load(&url).await;

    assert_eq!(
        sink.states(),
        vec![
            FetchState::Pending,
            FetchState::failure(expected.message())
        ]
    );

    Ok(())
}

#[tokio::test]
async fn transport_from_config() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let config = TransportConfig {
        base_url: app.api_base(),
        timeout: Duration::from_secs(5),
    };
    let transport = HttpTransport::from_config(&config)?;

    let response = transport.fetch("/users/1").await?;
    assert!(response.ok());
    assert_eq!(response.json::<User>()?, seeded(mock::JOHN));

    Ok(())
}

#[tokio::test]
async fn newly_added_user_is_loadable() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.add_user(mock::user(
        payloads::UserId(7),
        "Grace",
        "grace@example.com",
        true,
    ))
    .await?;
    let transport = HttpTransport::new(app.api_base());
    let (loader, sink) = recording_loader::<User, _>(transport);

    loader.load("/users/7").await;
    app.remove_user(payloads::UserId(7)).await?;
    loader.load("/users/7").await;

    let states = sink.states();
    assert_eq!(states[1].payload().map(|u| u.name.as_str()), Some("Grace"));
    assert_eq!(states[3].message(), Some("HTTP error! status: 404"));

    Ok(())
}
