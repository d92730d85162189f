//! Platform-abstracted HTTP GET with Send-safe futures.
//!
//! On wasm, `reqwest::Response` is not `Send` (it wraps JS types), so the
//! request runs on the JS thread via `wasm_bindgen_futures::spawn_local`
//! and the result comes back through a `flume` channel. On native, reqwest
//! is used directly. Either way commands get a
//! `Pin<Box<dyn Future<Output = ()> + Send>>`-compatible future.

use thiserror::Error;

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    headers: Vec<(String, String)>,
}

/// Start a GET request.
pub fn get(url: impl Into<String>) -> Request {
    Request {
        url: url.into(),
        headers: Vec::new(),
    }
}

impl Request {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.send_native().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_native(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = client.get(&self.url);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        // flume is Send-safe, so awaiting the receiver keeps the outer
        // future Send even though the request itself runs on the JS thread.
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        wasm_bindgen_futures::spawn_local(async move {
            let result = Self::execute_wasm(self.url, self.headers).await;
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("request cancelled"))?
    }

    #[cfg(target_arch = "wasm32")]
    async fn execute_wasm(url: String, headers: Vec<(String, String)>) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = client.get(&url);
        for (name, value) in &headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}
