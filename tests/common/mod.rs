#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use company_registry::types::Role;
use company_registry::{router, AppConfig, AppState, Database};

/// Demo accounts created by the seed
pub const DEMO_ANALYST: (&str, &str) = ("analyst@example.com", "analyst123");
pub const DEMO_VIEWER: (&str, &str) = ("viewer@example.com", "viewer123");

/// The full router over a private in-memory database
pub struct TestApp {
    pub router: Router,
    pub db: Database,
}

impl TestApp {
    /// Schema and reference data only
    pub async fn spawn() -> Result<Self> {
        let config = AppConfig::for_tests();
        let db = Database::connect(&config.database)
            .await
            .context("failed to open in-memory database")?;
        db.apply_schema().await?;
        db.seed_reference_data().await?;

        let router = router(AppState::new(db.clone(), config));
        Ok(Self { router, db })
    }

    /// Reference data plus demo users, companies and holdings
    pub async fn with_demo_data() -> Result<Self> {
        let app = Self::spawn().await?;
        app.db.seed_demo_data().await?;
        Ok(app)
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .with_context(|| format!("non-JSON body: {}", String::from_utf8_lossy(&bytes)))?
        };

        Ok((status, value))
    }

    /// Sends a raw body with the given content type
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        content_type: &str,
        body: impl Into<Body>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = self.router.clone().oneshot(builder.body(body.into())?).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Ok((status, value))
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, uri, token, None).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let (status, body) = self
            .post("/api/auth/login", None, json!({ "email": email, "password": password }))
            .await?;
        anyhow::ensure!(status == StatusCode::OK, "login failed: {status} {body}");
        token_of(&body)
    }

    /// Registers a VIEWER and returns its token
    pub async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<String> {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                json!({ "email": email, "password": password, "displayName": display_name }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "register failed: {status} {body}");
        token_of(&body)
    }

    /// Registers an account, promotes it to ANALYST and logs in again so the
    /// token carries the new role. Returns `(token, user id)`.
    pub async fn analyst(&self, email: &str) -> Result<(String, i64)> {
        self.register(email, "password123", "Test Analyst").await?;
        anyhow::ensure!(self.db.users().set_role(email, Role::Analyst).await?, "promote failed");

        let token = self.login(email, "password123").await?;
        let (_, me) = self.get("/api/auth/me", Some(&token)).await?;
        let id = me["user"]["id"].as_i64().context("missing user id")?;
        Ok((token, id))
    }

    pub async fn demo_analyst(&self) -> Result<String> {
        self.login(DEMO_ANALYST.0, DEMO_ANALYST.1).await
    }

    pub async fn demo_viewer(&self) -> Result<String> {
        self.login(DEMO_VIEWER.0, DEMO_VIEWER.1).await
    }
}

pub fn token_of(body: &Value) -> Result<String> {
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("response has no token")
}

pub fn valid_company() -> Value {
    json!({
        "name": "Vistula Energy",
        "nip": "1234567890",
        "krs": "0000999999",
        "founded_at": "2021-06-30",
        "company_type_id": 1,
        "share_capital": 5000,
        "last_valuation": 125000.5,
        "is_restricted": false,
        "notes": "Created in tests"
    })
}
