pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8080/api/v0";
pub const DEFAULT_SOURCE_PATH: &str = "./json/kovan-releaseB.json";

pub const ENV_PREFIX: &str = "CONTRACTS_PUBLISHER";

/// Chain segment used in every address route of the registry API.
pub const CHAIN: &str = "ethereum";

pub const CONTRACT_VERSION: &str = "1.0";
// Bytecode is not uploaded
pub const CONTRACT_BIN: &str = "0x";
pub const CONTRACT_DEVELOPER_DOC: &str = "{}";
pub const CONTRACT_USER_DOC: &str = "{}";
pub const CONTRACT_LANGUAGE: &str = "solidity";
