//! Domain records for the wallet API.
//!
//! These mirror the server's JSON response schema field for field; nothing
//! here is computed client-side. Wire names are camelCase, mapped through
//! serde renames.

use serde::{Deserialize, Serialize};

/// Network the server is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Testnet,
    Regtest,
}

/// Balance of an account, or of a whole wallet when `account` is `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub account: i64,
    pub tx: u64,
    pub coin: u64,
    pub unconfirmed: u64,
    pub confirmed: u64,
    pub locked_unconfirmed: u64,
    pub locked_confirmed: u64,
}

/// Wallet summary as returned by `GET /wallets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub network: Network,
    pub wid: u64,
    pub id: String,
    pub watch_only: bool,
    pub account_depth: u32,
    pub token: String,
    pub token_depth: u32,
    pub master: WalletMaster,
    pub balance: Balance,
}

/// Master key summary embedded in a [`Wallet`].
///
/// An unlocked wallet embeds only the `{encrypted: false}` stub; a locked
/// one embeds the full encrypted record. The encrypted variant must be
/// tried first: serde ignores unknown fields, so the stub would otherwise
/// also match encrypted payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalletMaster {
    Encrypted(MasterHdEncrypted),
    Plain { encrypted: bool },
}

/// Master HD key as returned by `GET /wallets/{id}/master`.
///
/// Polymorphic over the `encrypted` discriminant; branch on the variant
/// before touching key material or KDF parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MasterHd {
    Encrypted(MasterHdEncrypted),
    Plain(MasterHdPlain),
}

/// Unencrypted master key material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterHdPlain {
    pub encrypted: bool,
    pub key: MasterKey,
    pub mnemonic: Mnemonic,
}

/// Encrypted master key: PBKDF2 parameters and ciphertext only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterHdEncrypted {
    pub encrypted: bool,
    pub until: u64,
    pub iv: String,
    pub ciphertext: String,
    pub algorithm: String,
    pub n: u32,
    pub r: u32,
    pub p: u32,
}

/// Extended private key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterKey {
    pub xprivkey: String,
}

/// Seed mnemonic backing a master key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mnemonic {
    pub bits: u32,
    pub language: String,
    pub entropy: String,
    pub phrase: String,
}

/// Account type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Pubkeyhash,
    Multisig,
}

/// Account record as returned by the account endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    pub initialized: bool,
    pub watch_only: bool,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub m: u32,
    pub n: u32,
    pub account_index: u32,
    pub receive_depth: u32,
    pub change_depth: u32,
    pub lookahead: u32,
    pub receive_address: String,
    pub change_address: String,
    pub account_key: String,
    pub keys: Vec<String>,
    pub balance: Balance,
}

/// Parameters for `PUT /wallets/{wallet}/accounts/{name}`.
///
/// `wallet` and `name` route into the URL and are excluded from the request
/// body; everything else is forwarded as the payload, omitting unset
/// options. hsd defaults the type to `pubkeyhash` when absent; `m` and `n`
/// only apply to multisig accounts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAccountOptions {
    #[serde(skip)]
    pub wallet: String,
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

/// Covenant attached to a transaction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Covenant {
    #[serde(rename = "type")]
    pub covenant_type: u32,
    pub items: Vec<String>,
}

/// Derivation path of an address owned by the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPath {
    pub name: String,
    pub account: u32,
    pub change: bool,
    pub derivation: String,
}

/// Transaction input as seen by the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxInput {
    pub value: u64,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<KeyPath>,
}

/// Transaction output as seen by the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: u64,
    pub address: String,
    pub covenant: Covenant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<KeyPath>,
}

/// Wallet transaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTx {
    pub hash: String,
    /// `-1` while unconfirmed.
    pub height: i64,
    /// `None` while unconfirmed.
    pub block: Option<String>,
    pub time: u64,
    pub mtime: u64,
    pub date: String,
    pub mdate: String,
    pub size: u64,
    pub virtual_size: u64,
    pub fee: u64,
    pub rate: u64,
    /// `0` while unconfirmed.
    pub confirmations: u64,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    /// Raw transaction hex.
    pub tx: String,
}

/// Unconfirmed wallet transaction.
///
/// Structurally a [`WalletTx`] with the server's sentinel convention:
/// `height = -1`, `block = null`, `confirmations = 0`. The sentinels come
/// from the server, never from this client.
pub type UnconfirmedWalletTx = WalletTx;

/// Uniform acknowledgment for write operations (account creation, tx
/// deletion, rescan, resend, backup). Writes never return enriched state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success {
    pub success: bool,
}
