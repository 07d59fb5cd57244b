//! Transport layer shared by the node and wallet API surfaces.
//!
//! [`Client`] turns logical requests (path + optional JSON body) into HTTP
//! calls against `scheme://host:port/prefix` and normalizes every outcome
//! into either a typed value or an [`Error`]. Two call shapes exist:
//!
//! - verb calls ([`get`](Client::get), [`post`](Client::post),
//!   [`put`](Client::put), [`delete`](Client::delete)) for the REST-style
//!   endpoints, which return the decoded body directly;
//! - [`execute`](Client::execute) for the RPC dialect, which POSTs a
//!   `{method, params}` envelope to the root path and unwraps
//!   `{result, error}`.
//!
//! The client is stateless beyond the options captured at construction: no
//! retries, no client-side timeout, no coordination between concurrent
//! calls. Cancellation is whatever the underlying HTTP stack provides.

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::rpc::{RpcRequest, RpcResponse};

/// Default port of the hsd node HTTP server (regtest).
pub const NODE_PORT: u16 = 14037;
/// Default port of the hsd wallet HTTP server (regtest).
pub const WALLET_PORT: u16 = 14039;

/// Connection settings for an hsd HTTP server.
///
/// The defaults target a local regtest node; [`ClientOptions::wallet`] is
/// the same preset pointed at the wallet server port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Use `https` instead of `http`.
    pub ssl: bool,
    /// Server hostname.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// URL prefix prepended to every request path.
    pub path: String,
    /// API key for Basic auth; no `Authorization` header is sent when empty.
    pub api_key: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            ssl: false,
            host: "localhost".to_string(),
            port: NODE_PORT,
            path: "/".to_string(),
            api_key: String::new(),
        }
    }
}

impl ClientOptions {
    /// Preset for the node HTTP server.
    pub fn node() -> Self {
        Self::default()
    }

    /// Preset for the wallet HTTP server. Identical to [`node`](Self::node)
    /// except for the default port.
    pub fn wallet() -> Self {
        Self {
            port: WALLET_PORT,
            ..Self::default()
        }
    }
}

/// HTTP client for an hsd node or wallet server.
///
/// Holds immutable connection options and a shared `reqwest` client; it is
/// cheap to clone and safe to use from multiple tasks concurrently. Each
/// method issues exactly one request and places no ordering guarantee
/// between concurrent calls.
#[derive(Debug, Clone)]
pub struct Client {
    options: ClientOptions,
    http: reqwest::Client,
    auth: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientOptions::node())
    }
}

impl Client {
    /// Create a client from connection options.
    ///
    /// hsd authenticates with HTTP Basic auth, username fixed to `x` and the
    /// API key as the password. The header value is precomputed here since
    /// the options never change afterwards.
    pub fn new(options: ClientOptions) -> Self {
        use base64::Engine;
        let auth = if options.api_key.is_empty() {
            None
        } else {
            let credentials = format!("x:{}", options.api_key);
            Some(base64::engine::general_purpose::STANDARD.encode(credentials))
        };
        Self {
            options,
            http: reqwest::Client::new(),
            auth,
        }
    }

    /// The connection options this client was built with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// `scheme://host:port/prefix`, the target of the RPC call shape and the
    /// stem of every verb call. Request paths are appended verbatim.
    pub fn base_url(&self) -> String {
        let proto = if self.options.ssl { "https" } else { "http" };
        format!(
            "{}://{}:{}{}",
            proto, self.options.host, self.options.port, self.options.path
        )
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json");
        if let Some(ref auth) = self.auth {
            req = req.header("Authorization", format!("Basic {}", auth));
        }
        req
    }

    /// Issue a verb call and normalize the response.
    ///
    /// The body is buffered once and interpreted from memory. A non-2xx
    /// status fails with the raw body text as the message; a 2xx body with a
    /// non-null `error` field fails with that error's message; anything else
    /// is deserialized into `T`, surfacing [`Error::Decode`] on a shape
    /// mismatch. No runtime schema validation happens beyond that — the
    /// server is trusted.
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url(), path);
        debug!(%url, method = %method, "hsd http request");

        let mut req = self.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = serde_json::from_str(&text)?;
        if let Some(err) = json.get("error") {
            if !err.is_null() {
                let message = err
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
                    .unwrap_or_else(|| err.to_string());
                return Err(Error::Api(message));
            }
        }

        Ok(serde_json::from_value(json)?)
    }

    /// `GET` a REST-style endpoint.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.fetch(Method::GET, path, None).await
    }

    /// `POST` to a REST-style endpoint with an optional JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.fetch(Method::POST, path, body).await
    }

    /// `PUT` to a REST-style endpoint with an optional JSON body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.fetch(Method::PUT, path, body).await
    }

    /// `DELETE` a REST-style endpoint with an optional JSON body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.fetch(Method::DELETE, path, body).await
    }

    /// Call an RPC method and deserialize the envelope's `result`.
    ///
    /// POSTs `{method, params}` to the base URL (no sub-path). A non-2xx
    /// status fails with the raw body; an envelope `error` fails with
    /// [`Error::Rpc`] carrying the server's code and message verbatim.
    /// Otherwise the `result` value resolves, explicit `null` included
    /// (setters like `selectwallet` legitimately return
    /// `{"result": null}`). If the body cannot be interpreted — non-JSON,
    /// the wrong envelope shape, the `result` key absent with no `error`,
    /// or a result that does not fit `T` — the failure is [`Error::Api`]
    /// with the raw response text as the message, so a malformed body never
    /// surfaces a parse error to the caller.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<T> {
        let url = self.base_url();
        debug!(%url, method, "hsd rpc request");

        let request = RpcRequest {
            method: method.to_string(),
            params,
        };
        let resp = self
            .request(Method::POST, url)
            .json(&request)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        match serde_json::from_str::<RpcResponse>(&text) {
            Ok(RpcResponse {
                error: Some(err), ..
            }) => Err(Error::Rpc {
                code: err.code,
                message: err.message,
            }),
            // An explicit null result is Some(Value::Null) here and resolves.
            Ok(RpcResponse {
                result: Some(result),
                ..
            }) => serde_json::from_value(result).map_err(|_| Error::Api(text)),
            // Unusable envelope: fall back to the buffered raw text.
            Ok(RpcResponse { result: None, .. }) | Err(_) => Err(Error::Api(text)),
        }
    }
}
