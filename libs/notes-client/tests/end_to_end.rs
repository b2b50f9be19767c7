//! The client against the real server stack on an in-memory database.

use std::net::SocketAddr;

use api_ingress::{ApiIngress, ApiIngressConfig};
use apikit::TracedClient;
use auth::{config::AuthConfig, AuthModule};
use notes::{config::NotesConfig, NotesModule};
use sea_orm::Database;
use tempfile::TempDir;
use tokio::sync::oneshot;

use notes_client::{
    compose::Compose,
    dashboard::{Dashboard, EditDraft},
    register::RegisterForm,
    ClientError, NotesApiClient, SessionStore,
};

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn start_server() -> TestServer {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let auth = AuthModule::init(db.clone(), AuthConfig::default())
        .await
        .unwrap();
    let notes = NotesModule::init(db, NotesConfig::default(), auth.client())
        .await
        .unwrap();

    let ingress = ApiIngress::new(ApiIngressConfig::default())
        .mount(AuthModule::NAME, auth.router(), AuthModule::openapi())
        .mount(NotesModule::NAME, notes.router(), NotesModule::openapi());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        ingress
            .serve_on(listener, async {
                let _ = rx.await;
            })
            .await
    });

    TestServer {
        addr,
        shutdown: Some(tx),
    }
}

fn signup(email: &str) -> RegisterForm {
    RegisterForm {
        name: "Ann".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn register_login_compose_and_manage_notes() {
    let server = start_server().await;
    let api = NotesApiClient::new(TracedClient::default(), format!("http://{}", server.addr));
    let home = TempDir::new().unwrap();
    let store = SessionStore::new(home.path().join("session.json"));

    let user = signup("ann@example.com").submit(&api).await.unwrap();
    assert_eq!(user.email, "ann@example.com");

    let session = api.login("ann@example.com", "secret123").await.unwrap();
    store.save(&session).unwrap();
    let session = store.require().unwrap();
    assert_eq!(api.me(&session).await.unwrap().id, user.id);

    for (title, content) in [("Groceries", "Milk"), ("Team Meeting", "Agenda")] {
        Compose::new(title, content)
            .save(&api, Some(&session))
            .await
            .unwrap();
    }

    let mut dashboard = Dashboard::load(&api, Some(session.clone())).await.unwrap();
    let titles: Vec<_> = dashboard.notes().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Team Meeting", "Groceries"]);

    dashboard.set_query("meet");
    let meeting_id = dashboard.visible()[0].id;

    let mut draft = EditDraft::from(dashboard.visible()[0]);
    draft.content = "Agenda v2".to_string();
    dashboard.edit(&draft).await.unwrap();
    assert_eq!(dashboard.view(meeting_id).await.unwrap().content, "Agenda v2");

    dashboard.delete(meeting_id).await.unwrap();
    assert!(dashboard.visible().is_empty());
    assert!(matches!(
        api.get_note(&session, meeting_id).await,
        Err(ClientError::NotFound(_))
    ));

    api.logout(&session).await.unwrap();
    store.clear().unwrap();
    assert!(matches!(
        api.list_notes(&session).await,
        Err(ClientError::Unauthenticated(_))
    ));
}

#[tokio::test]
async fn other_users_notes_are_forbidden() {
    let server = start_server().await;
    let api = NotesApiClient::new(TracedClient::default(), format!("http://{}", server.addr));

    signup("ann@example.com").submit(&api).await.unwrap();
    signup("bob@example.com").submit(&api).await.unwrap();
    let ann = api.login("ann@example.com", "secret123").await.unwrap();
    let bob = api.login("bob@example.com", "secret123").await.unwrap();

    let note = Compose::new("Private", "Mine only")
        .save(&api, Some(&ann))
        .await
        .unwrap();

    let err = api.get_note(&bob, note.id).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(ref d) if d == "Unauthorized access"));

    let err = signup("ANN@example.com").submit(&api).await.unwrap_err();
    assert_eq!(
        err.field_message("email"),
        Some("The email has already been taken.")
    );
}
