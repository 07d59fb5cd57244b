//! Typed surface over the hsd wallet HTTP API.
//!
//! [`WalletClient`] binds each wallet endpoint to a one-line method on the
//! shared transport: fixed URL template in, typed record out. There is no
//! branching beyond building the URL (and, for account creation, splitting
//! the routing identifiers out of the request body). Calls are independent;
//! idempotency is whatever the underlying verb gives you.

use serde_json::json;

use crate::client::{Client, ClientOptions};
use crate::error::Result;
use crate::types::{
    Account, CreateAccountOptions, MasterHd, Success, UnconfirmedWalletTx, Wallet, WalletTx,
};

/// Client for an hsd wallet server.
///
/// Thin composition over [`Client`]: every method delegates to the
/// transport, and the RPC dialect remains reachable through
/// [`execute`](WalletClient::execute) since it rides the same connection
/// settings. Safe to share across tasks.
///
/// # Example
///
/// ```no_run
/// use hsd_client::wallet::WalletClient;
/// use hsd_client::client::ClientOptions;
///
/// # async fn example() -> hsd_client::Result<()> {
/// let client = WalletClient::new(ClientOptions {
///     api_key: "api-key".into(),
///     ..ClientOptions::wallet()
/// });
///
/// for id in client.get_wallets().await? {
///     let wallet = client.get_wallet(&id).await?;
///     println!("{}: {} tx", wallet.id, wallet.balance.tx);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WalletClient {
    client: Client,
}

impl Default for WalletClient {
    fn default() -> Self {
        Self::new(ClientOptions::wallet())
    }
}

impl WalletClient {
    /// Create a wallet client from connection options.
    pub fn new(options: ClientOptions) -> Self {
        Self {
            client: Client::new(options),
        }
    }

    /// Wrap an existing transport.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying transport.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Call a wallet RPC method (`POST /` with a `{method, params}`
    /// envelope). See [`Client::execute`].
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<T> {
        self.client.execute(method, params).await
    }

    /// Rescan the chain for wallet transactions from `height` upward.
    pub async fn rescan(&self, height: u64) -> Result<Success> {
        self.client
            .post("/rescan", Some(json!({ "height": height })))
            .await
    }

    /// Rebroadcast all pending wallet transactions.
    pub async fn resend(&self) -> Result<Success> {
        self.client.post("/resend", None).await
    }

    /// Back up the wallet database to `path` on the server.
    pub async fn backup(&self, path: &str) -> Result<Success> {
        self.client
            .post(&format!("/backup?path={}", path), None)
            .await
    }

    /// List wallet ids known to the server.
    pub async fn get_wallets(&self) -> Result<Vec<String>> {
        self.client.get("/wallets").await
    }

    /// Fetch a wallet summary.
    pub async fn get_wallet(&self, wallet: &str) -> Result<Wallet> {
        self.client.get(&format!("/wallets/{}", wallet)).await
    }

    /// Fetch the wallet's master HD key. Branch on the returned variant
    /// before touching key material.
    pub async fn get_master_hd(&self, wallet: &str) -> Result<MasterHd> {
        self.client
            .get(&format!("/wallets/{}/master", wallet))
            .await
    }

    /// List account names in a wallet.
    pub async fn get_accounts(&self, wallet: &str) -> Result<Vec<String>> {
        self.client
            .get(&format!("/wallets/{}/accounts", wallet))
            .await
    }

    /// Fetch a single account.
    pub async fn get_account(&self, wallet: &str, account: &str) -> Result<Account> {
        self.client
            .get(&format!("/wallets/{}/accounts/{}", wallet, account))
            .await
    }

    /// Create an account. `wallet` and `name` route into the URL; the
    /// remaining options form the request body.
    pub async fn create_account(&self, options: &CreateAccountOptions) -> Result<Account> {
        let body = serde_json::to_value(options)?;
        self.client
            .put(
                &format!("/wallets/{}/accounts/{}", options.wallet, options.name),
                Some(body),
            )
            .await
    }

    /// Fetch a wallet transaction by hash.
    pub async fn get_tx(&self, wallet: &str, hash: &str) -> Result<WalletTx> {
        self.client
            .get(&format!("/wallets/{}/tx/{}", wallet, hash))
            .await
    }

    /// Remove a pending transaction from the wallet.
    pub async fn delete_tx(&self, wallet: &str, hash: &str) -> Result<Success> {
        self.client
            .delete(&format!("/wallets/{}/tx/{}", wallet, hash), None)
            .await
    }

    /// Full transaction history of a wallet.
    pub async fn get_history(&self, wallet: &str) -> Result<Vec<WalletTx>> {
        self.client
            .get(&format!("/wallets/{}/tx/history", wallet))
            .await
    }

    /// Pending (unconfirmed) transactions. The server reports these with
    /// sentinel values: `height = -1`, `block = null`, `confirmations = 0`.
    pub async fn get_pending(&self, wallet: &str) -> Result<Vec<UnconfirmedWalletTx>> {
        self.client
            .get(&format!("/wallets/{}/tx/unconfirmed", wallet))
            .await
    }

    /// Transactions within a height range.
    pub async fn get_range(&self, wallet: &str, start: u64, end: u64) -> Result<Vec<WalletTx>> {
        self.client
            .get(&format!(
                "/wallets/{}/tx/range?start={}&end={}",
                wallet, start, end
            ))
            .await
    }
}
