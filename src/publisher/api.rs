use crate::{consts::CHAIN, contract::ContractRecord, settings::ApiSettings};
use anyhow::{anyhow, Context};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum RemoteCallError {
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Contract registry operations used to publish a single contract.
#[async_trait::async_trait]
pub trait ContractsApi {
    /// `POST /contracts/{label}` with the whole record as the body.
    async fn upload_contract(&self, contract: &ContractRecord) -> Result<(), RemoteCallError>;

    /// `POST /chains/ethereum/addresses`.
    async fn label_address(&self, label: &str, address: &str) -> Result<(), RemoteCallError>;

    /// `PUT /chains/ethereum/addresses/{address}/contracts/{label}/{version}`.
    async fn link_address(
        &self,
        address: &str,
        label: &str,
        version: &str,
    ) -> Result<(), RemoteCallError>;
}

#[derive(Debug, Serialize)]
struct LabelAddressRequest<'a> {
    label: &'a str,
    address: &'a str,
}

#[derive(Clone)]
pub struct HttpApiClient {
    endpoint: Url,
    api_key: String,
    request_client: reqwest::Client,
}

impl HttpApiClient {
    pub fn try_new(settings: &ApiSettings) -> anyhow::Result<Self> {
        if settings.endpoint.cannot_be_a_base() {
            return Err(anyhow!(
                "api endpoint cannot be used as a base url: {}",
                settings.endpoint
            ));
        }

        let mut builder = reqwest::Client::builder();
        if settings.request_timeout > 0 {
            builder = builder.timeout(Duration::from_secs(settings.request_timeout));
        }
        let request_client = builder.build().context("http client initialization")?;

        Ok(Self {
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            request_client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Appends percent-encoded `segments` to the endpoint path.
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .expect("endpoint is checked to be a base url")
            .pop_if_empty()
            .extend(segments);
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<(), RemoteCallError> {
        let response = request.bearer_auth(&self.api_key).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<failed to read response body: {err}>"));
            return Err(RemoteCallError::Status { status, body });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ContractsApi for HttpApiClient {
    async fn upload_contract(&self, contract: &ContractRecord) -> Result<(), RemoteCallError> {
        let url = self.url(["contracts", contract.label.as_str()]);
        self.send(self.request_client.post(url).json(contract)).await
    }

    async fn label_address(&self, label: &str, address: &str) -> Result<(), RemoteCallError> {
        let url = self.url(["chains", CHAIN, "addresses"]);
        let body = LabelAddressRequest { label, address };
        self.send(self.request_client.post(url).json(&body)).await
    }

    async fn link_address(
        &self,
        address: &str,
        label: &str,
        version: &str,
    ) -> Result<(), RemoteCallError> {
        let url = self.url(["chains", CHAIN, "addresses", address, "contracts", label, version]);
        self.send(self.request_client.put(url)).await
    }
}
