mod label;
mod loader;

pub use label::derive_label;
pub use loader::{load, parse, LoadError, LoadOptions};

use crate::consts::{
    CONTRACT_BIN, CONTRACT_DEVELOPER_DOC, CONTRACT_LANGUAGE, CONTRACT_USER_DOC, CONTRACT_VERSION,
};
use serde::Serialize;

/// Contract prepared for upload. Serializes into the body of the upload request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub contract_name: String,
    pub label: String,
    pub address: String,
    pub raw_abi: String,
    pub version: String,
    pub bin: String,
    pub developer_doc: String,
    pub user_doc: String,
    pub language: String,
}

impl ContractRecord {
    pub fn new(
        contract_name: impl Into<String>,
        address: impl Into<String>,
        raw_abi: impl Into<String>,
    ) -> Self {
        let contract_name = contract_name.into();
        Self {
            label: derive_label(&contract_name),
            contract_name,
            address: address.into(),
            raw_abi: raw_abi.into(),
            version: CONTRACT_VERSION.to_string(),
            bin: CONTRACT_BIN.to_string(),
            developer_doc: CONTRACT_DEVELOPER_DOC.to_string(),
            user_doc: CONTRACT_USER_DOC.to_string(),
            language: CONTRACT_LANGUAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = ContractRecord::new("SimpleStorage", "0xABC", "[]");
        let expected = serde_json::json!({
            "contractName": "SimpleStorage",
            "label": "simple_storage",
            "address": "0xABC",
            "rawAbi": "[]",
            "version": "1.0",
            "bin": "0x",
            "developerDoc": "{}",
            "userDoc": "{}",
            "language": "solidity",
        });
        assert_eq!(serde_json::to_value(&record).unwrap(), expected);
    }
}
