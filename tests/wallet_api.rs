//! End-to-end tests for the wallet API surface against a mock hsd server.

use hsd_client::client::ClientOptions;
use hsd_client::wallet::WalletClient;
use hsd_client::{AccountType, MasterHd, Network, WalletMaster};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: &str) -> WalletClient {
    let addr = server.address();
    WalletClient::new(ClientOptions {
        host: addr.ip().to_string(),
        port: addr.port(),
        path: String::new(),
        api_key: api_key.to_string(),
        ..ClientOptions::wallet()
    })
}

fn wallet_json() -> serde_json::Value {
    json!({
        "network": "regtest",
        "wid": 1,
        "id": "primary",
        "watchOnly": false,
        "accountDepth": 1,
        "token": "977fbb8d212a1e78c7ce9dfda4ff3d7cc8bcd20c4ccf85d2c9c84bbef4c88a8c",
        "tokenDepth": 0,
        "master": {"encrypted": false},
        "balance": {
            "account": -1,
            "tx": 177,
            "coin": 177,
            "unconfirmed": 50062499773u64,
            "confirmed": 50062499773u64,
            "lockedUnconfirmed": 0,
            "lockedConfirmed": 0
        }
    })
}

fn tx_json(height: i64, confirmations: u64) -> serde_json::Value {
    json!({
        "hash": "bcff3b1e836ecad5d2e623b36bb5bccd17e7a2d80063a557e9a1007f44d8b87b",
        "height": height,
        "block": if height >= 0 {
            json!("52e935ed9a4bbe9960f2e07ceee4a441ad2d6ded7f2f9d1e4b6ceb7ad1178ack")
        } else {
            json!(null)
        },
        "time": 1528335679,
        "mtime": 1528335679,
        "date": "2018-06-07T01:41:19Z",
        "mdate": "2018-06-07T01:41:19Z",
        "size": 215,
        "virtualSize": 140,
        "fee": 2800,
        "rate": 20000,
        "confirmations": confirmations,
        "inputs": [{
            "value": 500002800,
            "address": "rs1q7rvnwj3vaqxrwuv87j7xc6ye83tpevfkvhzsap",
            "path": {
                "name": "default",
                "account": 0,
                "change": false,
                "derivation": "m/0'/0/0"
            }
        }],
        "outputs": [{
            "value": 500000000,
            "address": "rs1q2x2suqr44gjn2plm3f99v2ae6ad3q4043m7j8f",
            "covenant": {"type": 0, "items": []},
            "path": null
        }],
        "tx": "0000000001758758e600061e62a92ee7c35298e6e7d2e2d50a1c0354"
    })
}

#[tokio::test]
async fn reads_wallets_with_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallets"))
        .and(header("Authorization", "Basic eDphcGkta2V5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["primary"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wallets/primary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json()))
        .mount(&server)
        .await;

    // base64("x:api-key") == "eDphcGkta2V5"
    let client = client_for(&server, "api-key");

    let ids = client.get_wallets().await.unwrap();
    assert_eq!(ids, vec!["primary".to_string()]);

    let wallet = client.get_wallet("primary").await.unwrap();
    assert_eq!(wallet.id, "primary");
    assert_eq!(wallet.network, Network::Regtest);
    assert!(matches!(
        wallet.master,
        WalletMaster::Plain { encrypted: false }
    ));
}

#[tokio::test]
async fn reads_master_hd_and_accounts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallets/primary/master"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "encrypted": false,
            "key": {"xprivkey": "tprv8ZgxMBicQKsPe7977psQCjBBjWtLDoJVPiiKog42RCoShJLJATYeSkNTzdwfBpk"},
            "mnemonic": {
                "bits": 128,
                "language": "english",
                "entropy": "a560ac7f5a109a01ed1c28279dfbdc7c",
                "phrase": "pistol air cabbage high conduct party powder inject jungle knee spell derive"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wallets/primary/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["default"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wallets/primary/accounts/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "default",
            "initialized": true,
            "watchOnly": false,
            "type": "pubkeyhash",
            "m": 1,
            "n": 1,
            "accountIndex": 0,
            "receiveDepth": 1,
            "changeDepth": 1,
            "lookahead": 10,
            "receiveAddress": "rs1q7rvnwj3vaqxrwuv87j7xc6ye83tpevfkvhzsap",
            "changeAddress": "rs1q2x2suqr44gjn2plm3f99v2ae6ad3q4043m7j8f",
            "accountKey": "rpubKBBGCWqgVn4RRVpJTDUvTJeFJzFBHRrrZqRaoe2UXXNq14KVAUkavaTg9i4yJdK",
            "keys": [],
            "balance": {
                "account": 0,
                "tx": 0,
                "coin": 0,
                "unconfirmed": 0,
                "confirmed": 0,
                "lockedUnconfirmed": 0,
                "lockedConfirmed": 0
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "");

    let master = client.get_master_hd("primary").await.unwrap();
    match master {
        MasterHd::Plain(hd) => assert_eq!(hd.mnemonic.language, "english"),
        MasterHd::Encrypted(_) => panic!("expected plain master key"),
    }

    let accounts = client.get_accounts("primary").await.unwrap();
    assert_eq!(accounts, vec!["default".to_string()]);

    let account = client.get_account("primary", "default").await.unwrap();
    assert_eq!(account.account_type, AccountType::Pubkeyhash);
    assert_eq!(account.lookahead, 10);
}

#[tokio::test]
async fn reads_transactions() {
    let server = MockServer::start().await;
    let hash = "bcff3b1e836ecad5d2e623b36bb5bccd17e7a2d80063a557e9a1007f44d8b87b";

    Mock::given(method("GET"))
        .and(path(format!("/wallets/primary/tx/{}", hash)))
        .respond_with(ResponseTemplate::new(200).set_body_json(tx_json(502, 3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wallets/primary/tx/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([tx_json(502, 3)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wallets/primary/tx/unconfirmed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([tx_json(-1, 0)])))
        .mount(&server)
        .await;

    let client = client_for(&server, "");

    let tx = client.get_tx("primary", hash).await.unwrap();
    assert_eq!(tx.hash, hash);
    assert_eq!(tx.height, 502);
    assert_eq!(tx.inputs[0].path.as_ref().unwrap().derivation, "m/0'/0/0");

    let history = client.get_history("primary").await.unwrap();
    assert_eq!(history.len(), 1);

    let pending = client.get_pending("primary").await.unwrap();
    assert_eq!(pending[0].height, -1);
    assert_eq!(pending[0].block, None);
    assert_eq!(pending[0].confirmations, 0);
}

#[tokio::test]
async fn wallet_rpc_rides_the_same_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({"method": "getnames", "params": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .mount(&server)
        .await;

    let addr = server.address();
    let client = WalletClient::new(ClientOptions {
        host: addr.ip().to_string(),
        port: addr.port(),
        ..ClientOptions::wallet()
    });

    let names: Vec<serde_json::Value> = client.execute("getnames", vec![]).await.unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn wallet_rpc_setters_resolve_with_null() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({"method": "selectwallet", "params": ["primary"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": null, "error": null})),
        )
        .mount(&server)
        .await;

    let addr = server.address();
    let client = WalletClient::new(ClientOptions {
        host: addr.ip().to_string(),
        port: addr.port(),
        ..ClientOptions::wallet()
    });

    let result: serde_json::Value = client
        .execute("selectwallet", vec![json!("primary")])
        .await
        .unwrap();
    assert_eq!(result, serde_json::Value::Null);
}
