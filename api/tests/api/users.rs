use payloads::{ClientError, UserId};
use test_helpers::{mock, spawn_app, spawn_app_with_users};

#[tokio::test]
async fn fetch_user_by_id() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let user = app.client.fetch_user(mock::ADA).await?;
    assert_eq!(user.id, UserId(42));
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert!(user.is_active);
    assert!(user.created_at.is_some());

    Ok(())
}

#[tokio::test]
async fn fetch_missing_user_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let err = app.client.fetch_user(mock::MISSING).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
    assert_eq!(err.to_string(), "Resource not found");

    Ok(())
}

#[tokio::test]
async fn list_returns_inactive_users_too() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users: Vec<payloads::User> = app.client.fetch_data("/users").await?;
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![mock::JOHN, mock::JANE, mock::ADA]);

    Ok(())
}

#[tokio::test]
async fn fetch_active_users_skips_inactive() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users = app.client.fetch_active_users().await?;
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Ada"]);

    Ok(())
}

#[tokio::test]
async fn fetch_active_users_on_empty_service() -> anyhow::Result<()> {
    let app = spawn_app_with_users(0, Vec::<payloads::User>::new()).await;

    assert!(app.client.fetch_active_users().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn create_and_delete_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let grace = mock::user(UserId(7), "Grace", "grace@example.com", true);

    let created = app.client.create_user(&grace).await?;
    assert_eq!(created, grace);
    assert_eq!(app.client.fetch_user(UserId(7)).await?, grace);

    // ids are unique
    let err = app.client.create_user(&grace).await.unwrap_err();
    assert!(matches!(err, ClientError::APIError(status, _) if status == 400));
    assert!(err.to_string().contains("already exists"));

    app.client.delete_user(UserId(7)).await?;
    assert!(matches!(
        app.client.fetch_user(UserId(7)).await,
        Err(ClientError::NotFound)
    ));
    assert!(matches!(
        app.client.delete_user(UserId(7)).await,
        Err(ClientError::NotFound)
    ));

    Ok(())
}

#[tokio::test]
async fn decoding_a_mismatched_body_is_a_parse_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // the user listing is an array, not a single user
    let err = app
        .client
        .fetch_data::<payloads::User>("/users")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));

    Ok(())
}
