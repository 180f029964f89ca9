use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::*;

#[derive(Debug, Clone, Default)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug, Default)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    responses: VecDeque<HttpResponse>,
}

impl FakeTransport {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Queue a response; responses are replayed in the order they were queued.
    pub(super) fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(HttpResponse {
                status,
                body: body.into(),
            });
        self
    }

    pub(super) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(super) fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl HttpTransport for FakeTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        let response = state.responses.pop_front();
        drop(state);
        Box::pin(async move { response.ok_or_else(|| "no response queued".into()) })
    }
}

pub(super) fn make_client(transport: FakeTransport) -> CloudControlClient {
    CloudControlClient {
        auth: Auth::basic("user", "pass").unwrap(),
        org_id: OrgId::new("org-1").unwrap(),
        endpoint: "https://api.example.invalid/caas/2.4".to_owned(),
        http: Arc::new(transport),
    }
}

pub(super) fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(header, _)| *header == name)
        .map(|(_, value)| value.as_str())
}
