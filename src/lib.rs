//! # hsd-client
//!
//! A typed async client for the hsd node and wallet HTTP/JSON APIs.
//!
//! This crate is a thin binding: it builds request URLs from connection
//! options, attaches Basic auth, serializes parameters, and maps JSON
//! responses onto typed records. It keeps no protocol state, performs no
//! retries, and does no coordination between calls — every method is one
//! stateless request/response round trip.
//!
//! Two layers:
//!
//! - [`client`]: the transport, with REST-style verb calls and the
//!   `{method, params}` RPC call shape, both normalized to one error
//!   surface ([`Error`]).
//! - [`wallet`]: the wallet endpoint catalogue, typed one-line methods over
//!   the transport.
//!
//! ## Example
//!
//! ```no_run
//! use hsd_client::client::ClientOptions;
//! use hsd_client::wallet::WalletClient;
//!
//! # async fn example() -> hsd_client::Result<()> {
//! // Connect to a local wallet server
//! let client = WalletClient::new(ClientOptions {
//!     api_key: "api-key".into(),
//!     ..ClientOptions::wallet()
//! });
//!
//! // List wallets and read one
//! let ids = client.get_wallets().await?;
//! let wallet = client.get_wallet(&ids[0]).await?;
//! println!("{} balance: {}", wallet.id, wallet.balance.confirmed);
//!
//! // The RPC dialect rides the same transport
//! let info: serde_json::Value = client.execute("getwalletinfo", vec![]).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod rpc;
pub mod types;
pub mod wallet;

pub use client::{Client, ClientOptions};
pub use error::{Error, Result};
pub use wallet::WalletClient;

/// Re-export commonly used types
pub use types::*;
