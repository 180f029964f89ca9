//! Client layer: interprets the endpoint manifest and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{OrgId, Page, PaginationOptions, Password, Response, Username, ValidationError};
use crate::transport::{
    WireRecord, decode_page, decode_record, decode_response_json, encode_pagination_query,
};

mod endpoint;
#[cfg(test)]
mod fake;
mod network;
mod pagination;
mod server;

use endpoint::{Endpoint, HttpMethod};
pub use pagination::{PageRequest, PagedStream, paginate};

const DEFAULT_ENDPOINT: &str = "https://api-na.dimensiondata.com/caas/2.4";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self.client.request(method, request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(*name, value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// HTTP Basic credentials for the CloudControl API.
pub struct Auth {
    username: Username,
    password: Password,
}

impl Auth {
    /// Create [`Auth`] and validate that both parts are non-empty.
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    fn authorization_header(&self) -> String {
        let credentials = format!("{}:{}", self.username.as_str(), self.password.as_str());
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CloudControlClient`].
///
/// Only [`CloudControlError::NotFound`] is ever recovered, and only by listing
/// and lookup calls; everything else reaches the caller unchanged.
pub enum CloudControlError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status without a recognizable response envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// HTTP 404 or a `RESOURCE_NOT_FOUND` response code.
    #[error("resource not found (HTTP {status})")]
    NotFound {
        status: u16,
        response: Option<Response>,
    },

    /// Non-successful HTTP status carrying a response envelope, e.g. `INVALID_INPUT_DATA`.
    #[error("API error (HTTP {status}): {}", .response.response_code)]
    Api { status: u16, response: Response },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request payload could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured endpoint cannot be used to build request URLs.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CloudControlError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    fn parse(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Parse(Box::new(err))
    }

    fn from_status(status: u16, body: String) -> Self {
        let response = decode_response_json(&body).ok();
        if status == 404 || response.as_ref().is_some_and(Response::is_not_found) {
            return Self::NotFound { status, response };
        }
        match response {
            Some(response) => Self::Api { status, response },
            None => Self::HttpStatus {
                status,
                body: if body.trim().is_empty() {
                    None
                } else {
                    Some(body)
                },
            },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`CloudControlClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct CloudControlClientBuilder {
    auth: Auth,
    org_id: OrgId,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CloudControlClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(auth: Auth, org_id: OrgId) -> Self {
        Self {
            auth,
            org_id,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL, e.g. `https://api-eu.dimensiondata.com/caas/2.4`.
    ///
    /// The organization id and resource paths are appended to it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`CloudControlClient`].
    pub fn build(self) -> Result<CloudControlClient, CloudControlError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|err| CloudControlError::InvalidEndpoint(format!("{}: {err}", self.endpoint)))?;
        if endpoint.cannot_be_a_base() {
            return Err(CloudControlError::InvalidEndpoint(format!(
                "{}: cannot carry path segments",
                self.endpoint
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| CloudControlError::Transport(Box::new(err)))?;

        Ok(CloudControlClient {
            auth: self.auth,
            org_id: self.org_id,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

/// Arguments bound into one endpoint call.
#[derive(Debug, Default)]
struct Invocation<'a> {
    path: Vec<(&'static str, &'a str)>,
    query: Vec<(String, String)>,
    body: Option<String>,
}

#[derive(Clone)]
/// High-level CloudControl client.
///
/// Every call is resolved against `<endpoint>/<orgId>` using the endpoint
/// manifest; listings come in two forms, a single [`Page`] (`list_*`) and a
/// lazy [`PagedStream`] over every page (`stream_*`).
///
/// Cloning is cheap and clones share the underlying HTTP connection pool.
pub struct CloudControlClient {
    auth: Auth,
    org_id: OrgId,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl CloudControlClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`CloudControlClient::builder`].
    pub fn new(auth: Auth, org_id: OrgId) -> Self {
        Self {
            auth,
            org_id,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth, org_id: OrgId) -> CloudControlClientBuilder {
        CloudControlClientBuilder::new(auth, org_id)
    }

    pub fn org_id(&self) -> &OrgId {
        &self.org_id
    }

    fn resolve_url(
        &self,
        endpoint: &Endpoint,
        invocation: &Invocation<'_>,
    ) -> Result<Url, CloudControlError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|err| CloudControlError::InvalidEndpoint(format!("{}: {err}", self.endpoint)))?;
        let segments = endpoint.path_segments(&invocation.path)?;
        url.path_segments_mut()
            .map_err(|()| {
                CloudControlError::InvalidEndpoint(format!(
                    "{}: cannot carry path segments",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .push(self.org_id.as_str())
            .extend(segments);
        if !invocation.query.is_empty() {
            url.query_pairs_mut().extend_pairs(invocation.query.iter());
        }
        Ok(url)
    }

    /// Send one request described by `endpoint` and return the body of a 2xx response.
    async fn dispatch(
        &self,
        endpoint: &Endpoint,
        invocation: Invocation<'_>,
    ) -> Result<String, CloudControlError> {
        let url = self.resolve_url(endpoint, &invocation)?;
        debug!(
            endpoint = endpoint.name,
            method = endpoint.method.as_str(),
            url = %url,
            "dispatching request"
        );

        let mut headers = vec![
            ("Authorization", self.auth.authorization_header()),
            ("Accept", "application/json".to_owned()),
        ];
        if invocation.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }

        let response = self
            .http
            .execute(HttpRequest {
                method: endpoint.method,
                url: url.into(),
                headers,
                body: invocation.body,
            })
            .await
            .map_err(CloudControlError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let err = CloudControlError::from_status(response.status, response.body);
            if !err.is_not_found() {
                warn!(endpoint = endpoint.name, status = response.status, error = %err, "request failed");
            }
            return Err(err);
        }

        Ok(response.body)
    }

    /// Fetch one page, without any fallback.
    async fn fetch_page<R: WireRecord>(
        &self,
        endpoint: &Endpoint,
        filters: &[(String, String)],
        options: &PaginationOptions,
    ) -> Result<Page<R>, CloudControlError> {
        let mut query = filters.to_vec();
        query.extend(encode_pagination_query(options));
        let body = self
            .dispatch(
                endpoint,
                Invocation {
                    query,
                    ..Invocation::default()
                },
            )
            .await?;

        let page = decode_page::<R>(&body).map_err(CloudControlError::parse)?;
        debug!(
            endpoint = endpoint.name,
            items = page.len(),
            last = page.is_last(),
            "fetched page"
        );
        Ok(page)
    }

    /// Fetch one page, applying the endpoint's not-found fallback.
    async fn list_page<R: WireRecord>(
        &self,
        endpoint: &Endpoint,
        filters: &[(String, String)],
        options: &PaginationOptions,
    ) -> Result<Page<R>, CloudControlError> {
        let result = self.fetch_page(endpoint, filters, options).await;
        endpoint.fallback.recover(endpoint.name, result, Page::empty)
    }

    fn stream_records<R>(
        &self,
        endpoint: &'static Endpoint,
        filters: Vec<(String, String)>,
    ) -> PagedStream<R>
    where
        R: WireRecord + Send + 'static,
    {
        let client = self.clone();
        let filters = Arc::new(filters);
        paginate(PaginationOptions::default(), move |request| {
            let client = client.clone();
            let filters = Arc::clone(&filters);
            async move {
                match request {
                    PageRequest::First(options) => {
                        client.list_page::<R>(endpoint, &filters, &options).await
                    }
                    PageRequest::Next(options) => {
                        client.fetch_page::<R>(endpoint, &filters, &options).await
                    }
                }
            }
        })
    }

    async fn fetch_record<R: WireRecord>(
        &self,
        endpoint: &Endpoint,
        id: &str,
    ) -> Result<Option<R>, CloudControlError> {
        let result = match self
            .dispatch(
                endpoint,
                Invocation {
                    path: vec![("id", id)],
                    ..Invocation::default()
                },
            )
            .await
        {
            Ok(body) => decode_record::<R>(&body)
                .map(Some)
                .map_err(CloudControlError::parse),
            Err(err) => Err(err),
        };
        endpoint.fallback.recover(endpoint.name, result, || None)
    }

    async fn submit(
        &self,
        endpoint: &Endpoint,
        body: Result<String, serde_json::Error>,
    ) -> Result<Response, CloudControlError> {
        let body = body.map_err(CloudControlError::Encode)?;
        let body = self
            .dispatch(
                endpoint,
                Invocation {
                    body: Some(body),
                    ..Invocation::default()
                },
            )
            .await?;

        let response = decode_response_json(&body).map_err(CloudControlError::parse)?;
        debug!(
            endpoint = endpoint.name,
            response_code = %response.response_code,
            "operation submitted"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{FakeTransport, make_client};
    use super::*;
    use crate::domain::{NatRule, NetworkDomainId};

    #[test]
    fn auth_constructors_validate_inputs() {
        assert!(Auth::basic("   ", "pass").is_err());
        assert!(Auth::basic("user", "").is_err());
    }

    #[test]
    fn authorization_header_is_basic_base64() {
        let auth = Auth::basic("Aladdin", "open sesame").unwrap();
        assert_eq!(
            auth.authorization_header(),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn builder_validates_endpoint() {
        let auth = Auth::basic("user", "pass").unwrap();
        let org = OrgId::new("org-1").unwrap();

        let client = CloudControlClient::builder(auth.clone(), org.clone())
            .endpoint("https://api-eu.dimensiondata.com/caas/2.4")
            .timeout(Duration::from_secs(30))
            .user_agent("cloudcontrol-tests")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://api-eu.dimensiondata.com/caas/2.4");
        assert_eq!(client.org_id().as_str(), "org-1");

        let err = CloudControlClient::builder(auth.clone(), org.clone())
            .endpoint("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, CloudControlError::InvalidEndpoint(_)));

        let err = CloudControlClient::builder(auth, org)
            .endpoint("mailto:ops@example.invalid")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, CloudControlError::InvalidEndpoint(_)));
    }

    #[test]
    fn status_errors_are_classified() {
        assert!(CloudControlError::from_status(404, String::new()).is_not_found());

        let body = r#"{"operation": "GET_VLAN", "responseCode": "RESOURCE_NOT_FOUND", "message": "Vlan not found."}"#;
        match CloudControlError::from_status(400, body.to_owned()) {
            CloudControlError::NotFound { status, response } => {
                assert_eq!(status, 400);
                assert_eq!(
                    response.and_then(|it| it.message),
                    Some("Vlan not found.".to_owned())
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let body = r#"{"responseCode": "INVALID_INPUT_DATA", "message": "bad id"}"#;
        assert!(matches!(
            CloudControlError::from_status(400, body.to_owned()),
            CloudControlError::Api { status: 400, .. }
        ));

        assert!(matches!(
            CloudControlError::from_status(502, "  ".to_owned()),
            CloudControlError::HttpStatus {
                status: 502,
                body: None
            }
        ));
        assert!(matches!(
            CloudControlError::from_status(500, "<html>oops</html>".to_owned()),
            CloudControlError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[test]
    fn api_error_message_names_response_code() {
        let err = CloudControlError::from_status(
            400,
            r#"{"responseCode": "INVALID_INPUT_DATA"}"#.to_owned(),
        );
        assert_eq!(err.to_string(), "API error (HTTP 400): INVALID_INPUT_DATA");
    }

    #[tokio::test]
    async fn dispatch_sends_auth_and_binds_org_path() {
        let transport = FakeTransport::new().respond(200, r#"{"natRule": []}"#);
        let client = make_client(transport.clone());
        let domain = NetworkDomainId::new("netdom 1").unwrap();

        let page: Page<NatRule> = client
            .list_page(
                &endpoint::LIST_NAT_RULES,
                &[(NetworkDomainId::FIELD.to_owned(), domain.as_str().to_owned())],
                &PaginationOptions::default(),
            )
            .await
            .unwrap();
        assert!(page.is_empty());

        let request = transport.only_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://api.example.invalid/caas/2.4/org-1/network/natRule?networkDomainId=netdom+1"
        );
        assert!(
            request
                .headers
                .iter()
                .any(|(name, value)| *name == "Authorization" && value.starts_with("Basic "))
        );
        assert!(request.headers.iter().all(|(name, _)| *name != "Content-Type"));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let transport = FakeTransport::new();
        let client = make_client(transport);

        let err = client
            .list_page::<NatRule>(
                &endpoint::LIST_NAT_RULES,
                &[],
                &PaginationOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CloudControlError::Transport(_)));
    }
}
