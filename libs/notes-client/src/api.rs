//! Typed calls against the notes REST API.

use apikit::TracedClient;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{
    LoginResp, MessageResp, Note, NoteInput, NoteListResp, NoteResp, RegisterResp, Registration,
    UserInfo, UserResp,
};
use crate::session::Session;

#[derive(Clone)]
pub struct NotesApiClient {
    http: TracedClient,
    base_url: String,
}

impl NotesApiClient {
    pub fn new(http: TracedClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::new(TracedClient::new(inner), &config.api_base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, &format!("{}{}", self.base_url, path))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    fn authed(&self, method: Method, path: &str, session: &Session) -> RequestBuilder {
        self.request(method, path).bearer_auth(&session.token)
    }

    async fn call<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let resp = self.http.send(builder).await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let body = resp.bytes().await?;
        let err = ClientError::from_response(status, &body);
        tracing::debug!(status = status.as_u16(), error = %err, "request rejected");
        Err(err)
    }

    #[instrument(name = "client.register", skip_all, fields(email = %form.email))]
    pub async fn register(&self, form: &Registration) -> Result<UserInfo, ClientError> {
        let resp: RegisterResp = self
            .call(self.request(Method::POST, "/register").json(form))
            .await?;
        Ok(resp.user)
    }

    /// Exchange credentials for a session. Nothing is persisted here.
    #[instrument(name = "client.login", skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let resp: LoginResp = self
            .call(
                self.request(Method::POST, "/login")
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;
        Ok(Session {
            token: resp.token,
            user: resp.user,
        })
    }

    #[instrument(name = "client.logout", skip_all)]
    pub async fn logout(&self, session: &Session) -> Result<String, ClientError> {
        let resp: MessageResp = self
            .call(self.authed(Method::POST, "/logout", session))
            .await?;
        Ok(resp.message)
    }

    #[instrument(name = "client.me", skip_all)]
    pub async fn me(&self, session: &Session) -> Result<UserInfo, ClientError> {
        let resp: UserResp = self.call(self.authed(Method::GET, "/user", session)).await?;
        Ok(resp.user)
    }

    #[instrument(name = "client.list_notes", skip_all)]
    pub async fn list_notes(&self, session: &Session) -> Result<Vec<Note>, ClientError> {
        let resp: NoteListResp = self
            .call(self.authed(Method::GET, "/notes", session))
            .await?;
        Ok(resp.notes)
    }

    #[instrument(name = "client.get_note", skip(self, session))]
    pub async fn get_note(&self, session: &Session, id: i32) -> Result<Note, ClientError> {
        let resp: NoteResp = self
            .call(self.authed(Method::GET, &format!("/notes/{id}"), session))
            .await?;
        Ok(resp.note)
    }

    #[instrument(name = "client.create_note", skip_all)]
    pub async fn create_note(
        &self,
        session: &Session,
        input: &NoteInput,
    ) -> Result<Note, ClientError> {
        let resp: NoteResp = self
            .call(self.authed(Method::POST, "/notes", session).json(input))
            .await?;
        Ok(resp.note)
    }

    #[instrument(name = "client.update_note", skip(self, session, input))]
    pub async fn update_note(
        &self,
        session: &Session,
        id: i32,
        input: &NoteInput,
    ) -> Result<Note, ClientError> {
        let resp: NoteResp = self
            .call(
                self.authed(Method::PUT, &format!("/notes/{id}"), session)
                    .json(input),
            )
            .await?;
        Ok(resp.note)
    }

    #[instrument(name = "client.delete_note", skip(self, session))]
    pub async fn delete_note(&self, session: &Session, id: i32) -> Result<String, ClientError> {
        let resp: MessageResp = self
            .call(self.authed(Method::DELETE, &format!("/notes/{id}"), session))
            .await?;
        Ok(resp.message)
    }
}
