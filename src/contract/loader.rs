use super::ContractRecord;
use crate::settings::SourceSettings;
use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

mod json {
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Debug, Deserialize)]
    pub struct SourceFile {
        pub contracts: Option<Map<String, Value>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SourceContract {
        pub address: String,
        pub abi: Value,
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read contracts file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("contracts file is not a valid json object: {0}")]
    Parse(serde_json::Error),
    #[error("contracts file has no 'contracts' mapping")]
    MissingContracts,
    #[error("invalid entry for contract '{name}': {source}")]
    InvalidEntry {
        name: String,
        source: serde_json::Error,
    },
    #[error("invalid abi for contract '{name}': {source}")]
    InvalidAbi {
        name: String,
        source: serde_json::Error,
    },
    #[error("contracts '{first}' and '{second}' have the same label '{label}'")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub validate_abi: bool,
}

impl From<&SourceSettings> for LoadOptions {
    fn from(settings: &SourceSettings) -> Self {
        Self {
            validate_abi: settings.validate_abi,
        }
    }
}

pub async fn load(path: &Path, options: &LoadOptions) -> Result<Vec<ContractRecord>, LoadError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let records = parse(&data, options)?;
    log::info!("loaded {} contracts from {:?}", records.len(), path);
    Ok(records)
}

/// Builds one record per entry of the `contracts` mapping, keeping the order
/// in which the entries appear in `data`.
pub fn parse(data: &[u8], options: &LoadOptions) -> Result<Vec<ContractRecord>, LoadError> {
    let file: json::SourceFile = serde_json::from_slice(data).map_err(LoadError::Parse)?;
    let contracts = file.contracts.ok_or(LoadError::MissingContracts)?;
    try_parse_contracts(contracts, options)
}

fn try_parse_contracts(
    contracts: Map<String, Value>,
    options: &LoadOptions,
) -> Result<Vec<ContractRecord>, LoadError> {
    let mut records = Vec::with_capacity(contracts.len());
    // label -> contract name
    let mut labels: HashMap<String, String> = HashMap::with_capacity(contracts.len());
    for (name, value) in contracts {
        let contract: json::SourceContract = match serde_json::from_value(value) {
            Ok(contract) => contract,
            Err(source) => return Err(LoadError::InvalidEntry { name, source }),
        };
        if options.validate_abi {
            if let Err(source) = serde_json::from_value::<ethabi::Contract>(contract.abi.clone()) {
                return Err(LoadError::InvalidAbi { name, source });
            }
        }

        let record = ContractRecord::new(name, contract.address, contract.abi.to_string());
        if let Some(first) = labels.insert(record.label.clone(), record.contract_name.clone()) {
            return Err(LoadError::DuplicateLabel {
                label: record.label,
                first,
                second: record.contract_name,
            });
        }
        records.push(record);
    }
    Ok(records)
}
