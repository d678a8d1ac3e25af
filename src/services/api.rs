use std::collections::VecDeque;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{DirectoryClient, Doctor};
use crate::error::FetchError;

/// API request types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Fetch the whole doctor directory for a page view
    FetchDirectory { view_id: u64 },
}

impl ApiRequest {
    fn view_id(&self) -> u64 {
        match self {
            ApiRequest::FetchDirectory { view_id } => *view_id,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    DirectoryResult {
        view_id: u64,
        doctors: Result<Vec<Doctor>, FetchError>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(u64),
}

/// API service worker that processes requests in the background
pub(crate) struct ApiService {
    client: DirectoryClient,
    request_queue: VecDeque<ApiRequest>,
    in_flight: usize,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub(crate) fn new(
        client: DirectoryClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: 0,
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    /// Add a request to the queue
    ///
    /// Queued requests for older page views are dropped; their results would
    /// be discarded on arrival anyway.
    fn enqueue(&mut self, request: ApiRequest) {
        let view_id = request.view_id();
        let before = self.request_queue.len();
        self.request_queue.retain(|queued| queued.view_id() >= view_id);

        let superseded = before - self.request_queue.len();
        if superseded > 0 {
            tracing::debug!(view_id, superseded, "dropped queued fetches for older views");
        }

        self.request_queue.push_back(request);
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight >= self.max_concurrent {
            return;
        }

        let Some(request) = self.request_queue.pop_front() else {
            return;
        };

        self.in_flight += 1;

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();
        let view_id = request.view_id();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(view_id));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &DirectoryClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchDirectory { view_id } => {
                tracing::debug!(view_id, url = client.endpoint_url(), "fetching directory");
                let doctors = client.fetch_doctors().await;
                if let Err(error) = &doctors {
                    tracing::warn!(view_id, %error, "directory fetch failed");
                }

                ApiResponse::DirectoryResult { view_id, doctors }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: DirectoryClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // Every sender is gone; the app has shut down
                        None => break,
                    }
                }

                Some(InternalMessage::Completed(view_id)) = completion_rx.recv() => {
                    service.in_flight = service.in_flight.saturating_sub(1);
                    tracing::trace!(view_id, in_flight = service.in_flight, "fetch completed");
                }

                _ = tick.tick() => {
                    while !service.request_queue.is_empty() && service.in_flight < service.max_concurrent {
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
