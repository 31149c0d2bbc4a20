pub mod mock;

use api::{Config, store::UserStore, telemetry};
use payloads::{User, UserId};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
    pub users: UserStore,
}

impl TestApp {
    /// Base address of the running service, without the `/api` prefix.
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Base url for the loader's http transport.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.address())
    }

    pub async fn add_user(&self, user: User) -> anyhow::Result<User> {
        Ok(api::store::create_user(user, &self.users).await?)
    }

    pub async fn remove_user(&self, user_id: UserId) -> anyhow::Result<()> {
        Ok(api::store::delete_user(&user_id, &self.users).await?)
    }
}

/// Start the service with the given users on `port` (0 for OS-assigned).
pub async fn spawn_app_with_users(
    port: u16,
    users: impl IntoIterator<Item = User>,
) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let users = UserStore::with_users(users);
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = api::build(&mut config, users.clone()).await.unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}",
            config.port
        )),
        users,
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    spawn_app_with_users(port, mock::users()).await
}

/// Use OS-assigned port for parallel testing. Seeded with [`mock::users`].
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}
