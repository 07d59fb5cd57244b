//! Calls the RPC dialect on the wallet server and prints the raw result.
//!
//! Usage: `cargo run --example rpc_call -- getwalletinfo [params-json...]`

use hsd_client::client::ClientOptions;
use hsd_client::wallet::WalletClient;
use hsd_client::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let method = args.next().unwrap_or_else(|| "getwalletinfo".to_string());
    let params = args
        .map(|arg| serde_json::from_str(&arg).unwrap_or(serde_json::Value::String(arg)))
        .collect();

    let client = WalletClient::new(ClientOptions {
        api_key: std::env::var("HSD_API_KEY").unwrap_or_default(),
        ..ClientOptions::wallet()
    });

    match client.execute::<serde_json::Value>(&method, params).await {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(Error::Rpc { code, message }) => {
            eprintln!("rpc failed with code {}: {}", code, message)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
