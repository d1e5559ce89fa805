mod api;
mod report;

pub use api::{ContractsApi, HttpApiClient, RemoteCallError};
pub use report::{CallKind, RecordReport, Summary};

use crate::contract::ContractRecord;

/// Publishes contracts one by one. Each contract is uploaded, its address is
/// labelled, and the address is linked to the uploaded contract. A failed call
/// is logged and does not stop the remaining calls.
pub struct Publisher<A> {
    api: A,
}

impl<A: ContractsApi> Publisher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn publish(&self, contract: &ContractRecord) -> RecordReport {
        log::info!("processing contract '{}'", contract.contract_name);

        log::info!("   - uploading contract as '{}'", contract.label);
        let upload = self.api.upload_contract(contract).await;
        log_failure(CallKind::Upload, contract, &upload);

        log::info!(
            "   - labelling the address '{}' as '{}'",
            contract.address,
            contract.label
        );
        let label_address = self
            .api
            .label_address(&contract.label, &contract.address)
            .await;
        log_failure(CallKind::Label, contract, &label_address);

        log::info!("   - linking the address to the contract");
        let link = self
            .api
            .link_address(&contract.address, &contract.label, &contract.version)
            .await;
        log_failure(CallKind::Link, contract, &link);

        RecordReport {
            contract_name: contract.contract_name.clone(),
            label: contract.label.clone(),
            upload,
            label_address,
            link,
        }
    }

    pub async fn publish_all(&self, contracts: &[ContractRecord]) -> Summary {
        let mut summary = Summary::default();
        for contract in contracts {
            summary.push(self.publish(contract).await);
        }
        summary
    }
}

fn log_failure(kind: CallKind, contract: &ContractRecord, result: &Result<(), RemoteCallError>) {
    if let Err(err) = result {
        log::error!(
            "{kind} call failed for contract '{}': {err}",
            contract.contract_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use std::{collections::HashSet, sync::Mutex};

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
        failing: HashSet<CallKind>,
    }

    impl RecordingApi {
        fn failing(kinds: &[CallKind]) -> Self {
            Self {
                failing: kinds.iter().copied().collect(),
                ..Default::default()
            }
        }

        fn record(&self, kind: CallKind, call: String) -> Result<(), RemoteCallError> {
            self.calls.lock().unwrap().push(call);
            if self.failing.contains(&kind) {
                return Err(RemoteCallError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "registry unavailable".into(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ContractsApi for RecordingApi {
        async fn upload_contract(&self, contract: &ContractRecord) -> Result<(), RemoteCallError> {
            self.record(CallKind::Upload, format!("upload {}", contract.label))
        }

        async fn label_address(&self, label: &str, address: &str) -> Result<(), RemoteCallError> {
            self.record(CallKind::Label, format!("label {address} {label}"))
        }

        async fn link_address(
            &self,
            address: &str,
            label: &str,
            version: &str,
        ) -> Result<(), RemoteCallError> {
            self.record(CallKind::Link, format!("link {address} {label} {version}"))
        }
    }

    fn contracts() -> Vec<ContractRecord> {
        vec![
            ContractRecord::new("TokenA", "0xA", "[]"),
            ContractRecord::new("TokenB", "0xB", "[]"),
        ]
    }

    #[tokio::test]
    async fn calls_are_made_in_order() {
        let publisher = Publisher::new(RecordingApi::default());
        let summary = publisher.publish_all(&contracts()).await;

        assert_eq!(
            publisher.api.calls(),
            vec![
                "upload token_a",
                "label 0xA token_a",
                "link 0xA token_a 1.0",
                "upload token_b",
                "label 0xB token_b",
                "link 0xB token_b 1.0",
            ]
        );
        assert_eq!(summary.reports.len(), 2);
        assert!(!summary.has_failures());
    }

    #[tokio::test]
    async fn failed_upload_does_not_stop_remaining_calls() {
        let publisher = Publisher::new(RecordingApi::failing(&[CallKind::Upload]));
        let contract = ContractRecord::new("SimpleStorage", "0xABC", "[]");
        let report = publisher.publish(&contract).await;

        assert_eq!(
            publisher.api.calls(),
            vec![
                "upload simple_storage",
                "label 0xABC simple_storage",
                "link 0xABC simple_storage 1.0",
            ]
        );
        assert!(report.upload.is_err());
        assert!(report.label_address.is_ok());
        assert!(report.link.is_ok());
    }

    #[tokio::test]
    async fn every_call_failing_still_processes_whole_batch() {
        let api = RecordingApi::failing(&[CallKind::Upload, CallKind::Label, CallKind::Link]);
        let publisher = Publisher::new(api);
        let summary = publisher.publish_all(&contracts()).await;

        assert_eq!(publisher.api.calls().len(), 6);
        assert_eq!(summary.failures(CallKind::Upload), 2);
        assert_eq!(summary.failures(CallKind::Label), 2);
        assert_eq!(summary.failures(CallKind::Link), 2);
        assert_eq!(summary.incomplete().count(), 2);
    }
}
