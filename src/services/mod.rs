pub mod api_client;
pub mod token_cache;

pub use api_client::{ApiClient, TrustBridgeApi};
pub use token_cache::{
    BrowserStorage, LocalStorageTokenCache, MemoryTokenCache, StorageTokenCache, StringStorage,
    TokenSink, TokenSource,
};
