use std::sync::Arc;

use reqwest::{
    Client, Method, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use super::{
    super::error::{RestApiError, Result},
    path::RestPath,
};
use crate::api::config::RestClientConfig;

struct AtaixCredentials {
    key: String,
}

impl AtaixCredentials {
    fn new(key: String) -> Self {
        Self { key }
    }

    fn get_authentication_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(&self.key)?,
        );

        Ok(headers)
    }
}

pub(crate) struct AtaixRestBase {
    domain: String,
    credentials: Option<AtaixCredentials>,
    client: Client,
}

impl AtaixRestBase {
    fn new_inner(
        config: &RestClientConfig,
        domain: String,
        credentials: Option<AtaixCredentials>,
    ) -> Result<Arc<Self>> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(RestApiError::HttpClient)?;

        Ok(Arc::new(Self {
            domain,
            credentials,
            client,
        }))
    }

    pub fn new(config: &RestClientConfig, domain: String) -> Result<Arc<Self>> {
        Self::new_inner(config, domain, None)
    }

    pub fn with_credentials(
        config: &RestClientConfig,
        domain: String,
        key: String,
    ) -> Result<Arc<Self>> {
        let creds = AtaixCredentials::new(key);

        Self::new_inner(config, domain, Some(creds))
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn get_url(&self, path_str: &str) -> Result<Url> {
        let url_str = format!("https://{}{}", self.domain, path_str);
        let url = Url::parse(&url_str).map_err(|e| RestApiError::UrlParse(e.to_string()))?;

        Ok(url)
    }

    async fn make_request<T>(
        &self,
        method: Method,
        path: RestPath,
        body: Option<String>,
        authenticated: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        // The API key is attached whenever it is available; `authenticated`
        // marks endpoints that cannot be called without one.
        let mut headers = match (&self.credentials, authenticated) {
            (Some(creds), _) => creds.get_authentication_headers()?,
            (None, false) => HeaderMap::new(),
            (None, true) => return Err(RestApiError::MissingRequestCredentials),
        };
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let path_str = path.to_path_string();
        let url = self.get_url(&path_str)?;

        let req = match method {
            Method::POST | Method::PUT => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

                let mut req = self.client.request(method.clone(), url).headers(headers);
                if let Some(body) = body {
                    req = req.body(body);
                }
                req
            }
            Method::GET | Method::DELETE => {
                self.client.request(method.clone(), url).headers(headers)
            }
            m => return Err(RestApiError::UnsupportedMethod(m)),
        };

        debug!(method = %method, path = %path_str, "dispatching request");

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(method = %method, path = %path_str, "failed to send request: {e}");
                return Err(RestApiError::SendFailed(e));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(RestApiError::ResponseDecoding)?;

            error!(
                method = %method,
                path = %path_str,
                %status,
                body = %text,
                "API responded with error status"
            );
            return Err(RestApiError::ErrorResponse { status, text });
        }

        let raw_response = response
            .text()
            .await
            .map_err(RestApiError::ResponseDecoding)?;

        match serde_json::from_str::<T>(&raw_response) {
            Ok(response_data) => Ok(response_data),
            Err(e) => {
                error!(
                    method = %method,
                    path = %path_str,
                    body = %raw_response,
                    "failed to deserialize response: {e}"
                );
                Err(RestApiError::ResponseJsonDeserializeFailed { raw_response, e })
            }
        }
    }

    pub async fn make_request_with_body<T, B>(
        &self,
        method: Method,
        path: RestPath,
        body: B,
        authenticated: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body =
            serde_json::to_string(&body).map_err(RestApiError::RequestJsonSerializeFailed)?;

        self.make_request(method, path, Some(body), authenticated)
            .await
    }

    pub async fn make_request_without_params<T>(
        &self,
        method: Method,
        path: RestPath,
        authenticated: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.make_request(method, path, None, authenticated).await
    }
}
