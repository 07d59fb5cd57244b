//! Walks the wallet API: lists wallets, then prints accounts and balances.
//!
//! Expects a local hsd wallet server (regtest defaults). Pass the API key
//! via the `HSD_API_KEY` environment variable if the server requires one.

use hsd_client::client::ClientOptions;
use hsd_client::wallet::WalletClient;
use hsd_client::WalletMaster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = WalletClient::new(ClientOptions {
        api_key: std::env::var("HSD_API_KEY").unwrap_or_default(),
        ..ClientOptions::wallet()
    });

    for id in client.get_wallets().await? {
        let wallet = client.get_wallet(&id).await?;
        let locked = match wallet.master {
            WalletMaster::Encrypted(_) => "locked",
            WalletMaster::Plain { .. } => "unlocked",
        };
        println!(
            "{} ({}, {} tx): {} confirmed, {} unconfirmed",
            wallet.id,
            locked,
            wallet.balance.tx,
            wallet.balance.confirmed,
            wallet.balance.unconfirmed
        );

        for name in client.get_accounts(&id).await? {
            let account = client.get_account(&id, &name).await?;
            println!(
                "  account {}: receive {}",
                account.name, account.receive_address
            );
        }

        for tx in client.get_pending(&id).await? {
            println!("  pending {} (fee {})", tx.hash, tx.fee);
        }
    }

    Ok(())
}
