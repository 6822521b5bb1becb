//! Flashbots relay client

use crate::request::{prepare_relay_request, RequestIdCounter};
use crate::signer::{sign_request, AuthSigner};
use crate::transport::{Headers, JsonTransport, ReqwestTransport};
use alloy::primitives::{TxHash, U256};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use types::utils::{hex_block_number, sanitize_for_logging};
use types::{
    BlocksApiResponse, BundlePricing, BundleStats, BundleStatsParams, CallBundleParams,
    CallBundleResult, CancelPrivateTransactionParams, PrivateTransactionParams, RelayEndpoint,
    RelayError, RelayMethod, RelayRequest, RelayResponse, Result, SendBundleParams, UserStats,
    FLASHBOTS_SIGNATURE_HEADER,
};

/// Authenticated client for a single relay
pub struct RelayClient {
    endpoint: RelayEndpoint,
    signer: Arc<dyn AuthSigner>,
    transport: Arc<dyn JsonTransport>,
    ids: RequestIdCounter,
}

impl std::fmt::Debug for RelayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayClient")
            .field("endpoint", &self.endpoint)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl RelayClient {
    /// Create a client talking to `endpoint` over HTTP
    pub fn new(endpoint: RelayEndpoint, signer: Arc<dyn AuthSigner>) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&endpoint)?);
        Ok(Self::with_transport(endpoint, signer, transport))
    }

    /// Create a client with an injected transport
    pub fn with_transport(
        endpoint: RelayEndpoint,
        signer: Arc<dyn AuthSigner>,
        transport: Arc<dyn JsonTransport>,
    ) -> Self {
        Self {
            endpoint,
            signer,
            transport,
            ids: RequestIdCounter::new(),
        }
    }

    /// Relay connection info
    pub fn endpoint(&self) -> &RelayEndpoint {
        &self.endpoint
    }

    /// Build the next request envelope for `method`
    pub fn prepare_relay_request(&self, method: RelayMethod, params: Value) -> RelayRequest {
        prepare_relay_request(&self.ids, method, params)
    }

    /// Simulate a bundle against a given state (eth_callBundle)
    pub async fn simulate(&self, params: CallBundleParams) -> Result<CallBundleResult> {
        let result = self.call(RelayMethod::CallBundle, json!([params])).await?;
        let simulation: CallBundleResult = self.decode(RelayMethod::CallBundle, result)?;

        if let Some(reverted) = simulation.first_revert() {
            tracing::warn!(
                relay = %self.endpoint.name,
                tx_hash = %reverted.tx_hash,
                error = reverted.error.as_deref().unwrap_or_default(),
                revert = reverted.revert.as_deref().unwrap_or_default(),
                "Bundle simulation reverted"
            );
        }

        Ok(simulation)
    }

    /// Submit a bundle for inclusion (eth_sendBundle), returning the bundle hash
    pub async fn send_bundle(&self, params: SendBundleParams) -> Result<String> {
        tracing::info!(
            relay = %self.endpoint.name,
            target_block = %params.block_number,
            tx_count = params.txs.len(),
            "Submitting bundle to relay"
        );

        let result = self.call(RelayMethod::SendBundle, json!([params])).await?;
        let bundle_hash = parse_bundle_hash(&self.endpoint.name, &result)?;

        tracing::info!(
            relay = %self.endpoint.name,
            bundle_hash = %bundle_hash,
            "Bundle submitted"
        );
        Ok(bundle_hash)
    }

    /// Submit a single transaction privately (eth_sendPrivateTransaction)
    pub async fn send_private_transaction(
        &self,
        params: PrivateTransactionParams,
    ) -> Result<TxHash> {
        let result = self
            .call(RelayMethod::SendPrivateTransaction, json!([params]))
            .await?;
        self.decode(RelayMethod::SendPrivateTransaction, result)
    }

    /// Stop the relay from forwarding a private transaction
    pub async fn cancel_private_transaction(&self, tx_hash: TxHash) -> Result<bool> {
        let params = CancelPrivateTransactionParams { tx_hash };
        let result = self
            .call(RelayMethod::CancelPrivateTransaction, json!([params]))
            .await?;
        self.decode(RelayMethod::CancelPrivateTransaction, result)
    }

    /// Reputation of the signing address as of `block_number`
    pub async fn get_user_stats(&self, block_number: u64) -> Result<UserStats> {
        let result = self
            .call(RelayMethod::GetUserStats, json!([hex_block_number(block_number)]))
            .await?;
        self.decode(RelayMethod::GetUserStats, result)
    }

    /// Simulation and delivery status of a submitted bundle
    pub async fn get_bundle_stats(
        &self,
        bundle_hash: &str,
        block_number: u64,
    ) -> Result<BundleStats> {
        let params = BundleStatsParams {
            bundle_hash: bundle_hash.to_string(),
            block_number: hex_block_number(block_number),
        };
        let result = self.call(RelayMethod::GetBundleStats, json!([params])).await?;
        self.decode(RelayMethod::GetBundleStats, result)
    }

    /// Send an arbitrary relay method and return its raw `result`.
    ///
    /// `headers` are merged over the signature header, so a caller-supplied
    /// `X-Flashbots-Signature` replaces the computed one.
    pub async fn request<P: Serialize>(
        &self,
        method: RelayMethod,
        params: P,
        headers: &Headers,
    ) -> Result<Value> {
        let params = serde_json::to_value(params)?;
        let request = self.prepare_relay_request(method, params);
        self.send_request(&request, headers).await
    }

    /// Sign and POST a prepared envelope
    pub async fn send_request(&self, request: &RelayRequest, headers: &Headers) -> Result<Value> {
        let body = serde_json::to_string(request)?;
        let signature = sign_request(&body, self.signer.as_ref()).await?;

        tracing::info!(
            relay = %self.endpoint.name,
            method = %request.method,
            id = request.id,
            "Sending relay request"
        );
        tracing::debug!(
            signature = %sanitize_for_logging(&signature),
            body = %body,
            "Signed relay request"
        );

        let headers = merge_headers(signature, headers);
        let raw = self
            .transport
            .post_json(&self.endpoint.relay_url, &headers, body)
            .await?;

        self.unwrap_result(raw)
    }

    /// Fetch landed bundle details for a block from the public blocks API
    pub async fn fetch_block_stats(&self, block_number: u64) -> Result<BlocksApiResponse> {
        tracing::debug!(block_number, url = %self.endpoint.blocks_api_url, "Fetching block stats");

        let raw = self
            .transport
            .get_json(
                &self.endpoint.blocks_api_url,
                &[("block_number", block_number.to_string())],
            )
            .await?;

        serde_json::from_value(raw).map_err(|e| {
            RelayError::InvalidResponse {
                relay: self.endpoint.name.clone(),
                message: format!("unexpected blocks API response: {}", e),
            }
            .into()
        })
    }

    /// Realized pricing of the transactions `tx_hashes` that landed in `block_number`
    pub async fn bundle_pricing_for_block(
        &self,
        block_number: u64,
        base_fee: U256,
        tx_hashes: &[TxHash],
    ) -> Result<BundlePricing> {
        let block_stats = self.fetch_block_stats(block_number).await?;
        let landed: Vec<_> = block_stats.transactions_matching(tx_hashes).collect();

        if landed.len() < tx_hashes.len() {
            tracing::warn!(
                block_number,
                requested = tx_hashes.len(),
                found = landed.len(),
                "Not every bundle transaction was found in the block"
            );
        }

        pricing::aggregate_bundle_pricing(landed, base_fee)
    }

    async fn call(&self, method: RelayMethod, params: Value) -> Result<Value> {
        let request = self.prepare_relay_request(method, params);
        self.send_request(&request, &Headers::new()).await
    }

    fn unwrap_result(&self, raw: Value) -> Result<Value> {
        let response: RelayResponse =
            serde_json::from_value(raw.clone()).map_err(|e| RelayError::InvalidResponse {
                relay: self.endpoint.name.clone(),
                message: format!("not a JSON-RPC response: {} | raw: {}", e, raw),
            })?;

        if let Some(error) = response.error {
            return Err(RelayError::Rpc {
                relay: self.endpoint.name.clone(),
                code: error.code,
                message: error.message,
            }
            .into());
        }

        response.result.ok_or_else(|| {
            RelayError::InvalidResponse {
                relay: self.endpoint.name.clone(),
                message: format!("response has neither result nor error | raw: {}", raw),
            }
            .into()
        })
    }

    fn decode<T: DeserializeOwned>(&self, method: RelayMethod, result: Value) -> Result<T> {
        serde_json::from_value(result).map_err(|e| {
            RelayError::InvalidResponse {
                relay: self.endpoint.name.clone(),
                message: format!("unexpected {} result: {}", method, e),
            }
            .into()
        })
    }
}

/// Signature header first, then caller headers on top of it.
///
/// Header names compare case-insensitively, so a caller header spelled
/// differently still replaces the signature.
pub fn merge_headers(signature: String, headers: &Headers) -> Headers {
    let mut merged = Headers::new();
    merged.insert(FLASHBOTS_SIGNATURE_HEADER.to_string(), signature);

    for (name, value) in headers {
        if name.eq_ignore_ascii_case(FLASHBOTS_SIGNATURE_HEADER) {
            merged.remove(FLASHBOTS_SIGNATURE_HEADER);
        }
        merged.insert(name.clone(), value.clone());
    }

    merged
}

/// Bundle hash from either `"0x.."` or `{ "bundleHash": "0x.." }`
fn parse_bundle_hash(relay_name: &str, result: &Value) -> Result<String> {
    if let Some(hash) = result.as_str() {
        return Ok(hash.to_string());
    }
    if let Some(hash) = result.get("bundleHash").and_then(|v| v.as_str()) {
        return Ok(hash.to_string());
    }

    Err(RelayError::InvalidResponse {
        relay: relay_name.to_string(),
        message: format!("unexpected eth_sendBundle result: {}", result),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::AuthSigner;
    use alloy::primitives::{Address, Bytes, Signature};
    use alloy::signers::local::PrivateKeySigner;
    use async_trait::async_trait;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use types::{RelayKitError, SigningError};
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    // anvil account #1
    const SECOND_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn test_signer() -> Arc<PrivateKeySigner> {
        Arc::new(PrivateKeySigner::from_str(TEST_KEY).unwrap())
    }

    fn endpoint(server: &MockServer) -> RelayEndpoint {
        RelayEndpoint {
            name: "test".to_string(),
            relay_url: server.uri(),
            blocks_api_url: format!("{}/v1/blocks", server.uri()),
            timeout_seconds: 5,
            ..RelayEndpoint::default()
        }
    }

    fn client(server: &MockServer) -> RelayClient {
        RelayClient::new(endpoint(server), test_signer()).unwrap()
    }

    async fn expected_signature(request: &RelayRequest) -> String {
        let body = serde_json::to_string(request).unwrap();
        sign_request(&body, test_signer().as_ref()).await.unwrap()
    }

    struct LockedSigner;

    #[async_trait]
    impl AuthSigner for LockedSigner {
        async fn address(&self) -> Result<Address> {
            Ok(Address::ZERO)
        }

        async fn sign_message(&self, _message: &[u8]) -> Result<Signature> {
            Err(SigningError::Message("hardware wallet locked".to_string()).into())
        }
    }

    /// Switches to the next key on `rotate`, like a key rotated in a vault
    struct RotatingSigner {
        keys: Vec<PrivateKeySigner>,
        current: AtomicUsize,
    }

    impl RotatingSigner {
        fn rotate(&self) {
            self.current.fetch_add(1, Ordering::SeqCst);
        }

        fn key(&self) -> &PrivateKeySigner {
            &self.keys[self.current.load(Ordering::SeqCst) % self.keys.len()]
        }
    }

    #[async_trait]
    impl AuthSigner for RotatingSigner {
        async fn address(&self) -> Result<Address> {
            AuthSigner::address(self.key()).await
        }

        async fn sign_message(&self, message: &[u8]) -> Result<Signature> {
            AuthSigner::sign_message(self.key(), message).await
        }
    }

    fn signature_headers(requests: &[wiremock::Request]) -> Vec<String> {
        requests
            .iter()
            .map(|r| {
                r.headers
                    .get("x-flashbots-signature")
                    .unwrap()
                    .to_str()
                    .unwrap()
                    .to_string()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_every_request_is_signed_afresh() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 0,
                "result": true
            })))
            .expect(3)
            .mount(&mock_server)
            .await;

        let signer = Arc::new(RotatingSigner {
            keys: vec![
                PrivateKeySigner::from_str(TEST_KEY).unwrap(),
                PrivateKeySigner::from_str(SECOND_KEY).unwrap(),
            ],
            current: AtomicUsize::new(0),
        });
        let client = RelayClient::new(endpoint(&mock_server), signer.clone()).unwrap();

        // same payload twice, only the id differs
        client.cancel_private_transaction(TxHash::ZERO).await.unwrap();
        client.cancel_private_transaction(TxHash::ZERO).await.unwrap();
        signer.rotate();
        client.cancel_private_transaction(TxHash::ZERO).await.unwrap();

        let received = mock_server.received_requests().await.unwrap();
        let headers = signature_headers(&received);
        assert_ne!(headers[0], headers[1]);

        let addresses: Vec<Address> = headers
            .iter()
            .map(|h| h.split_once(':').unwrap().0.parse().unwrap())
            .collect();
        assert_eq!(addresses[0], addresses[1]);
        assert_eq!(
            addresses[2],
            Address::from_str("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap()
        );

        // each header matches the body it was sent with
        for (request, header) in received.iter().zip(&headers) {
            let body = std::str::from_utf8(&request.body).unwrap();
            let (_, signature) = header.split_once(':').unwrap();
            let signature = Signature::from_str(signature).unwrap();
            let message = crate::signer::signing_message(body);
            let recovered = signature.recover_address_from_msg(message.as_bytes()).unwrap();
            assert_eq!(header.split_once(':').unwrap().0, recovered.to_string());
        }
    }

    #[tokio::test]
    async fn test_successful_bundle_submission() {
        let mock_server = MockServer::start().await;
        let params = SendBundleParams::new(vec![Bytes::from(vec![0x02, 0x01])], 12345);
        let request = RelayRequest::new(1, RelayMethod::SendBundle, json!([params]));

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-Flashbots-Signature", expected_signature(&request).await.as_str()))
            .and(body_json(&request))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "bundleHash": "0x1234567890abcdef" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client(&mock_server).send_bundle(params).await;
        assert_eq!(result.unwrap(), "0x1234567890abcdef");
    }

    #[tokio::test]
    async fn test_bundle_submission_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {
                    "code": -32000,
                    "message": "bundle rejected"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = client(&mock_server)
            .send_bundle(SendBundleParams::new(vec![Bytes::from(vec![0x01])], 12345))
            .await;

        match result {
            Err(RelayKitError::Relay(RelayError::Rpc { code, message, .. })) => {
                assert_eq!(code, -32000);
                assert_eq!(message, "bundle rejected");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_ids_increase_across_calls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 0,
                "result": true
            })))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        // consumes id 1 without sending
        let unsent = client.prepare_relay_request(RelayMethod::GetUserStats, json!([]));
        assert_eq!(unsent.id, 1);

        for _ in 0..3 {
            assert!(client.cancel_private_transaction(TxHash::ZERO).await.unwrap());
        }

        let ids: Vec<u64> = mock_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice::<Value>(&r.body).unwrap()["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn test_caller_header_wins_over_signature() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("X-Flashbots-Signature", "0xabc:0xdef"))
            .and(header("X-Request-Source", "bot"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": "0x01"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut headers = Headers::new();
        headers.insert("x-flashbots-signature".to_string(), "0xabc:0xdef".to_string());
        headers.insert("X-Request-Source".to_string(), "bot".to_string());

        let result = client(&mock_server)
            .request(RelayMethod::SendBundle, json!([]), &headers)
            .await
            .unwrap();
        assert_eq!(result, json!("0x01"));
    }

    #[test]
    fn test_merge_headers() {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "token".to_string());

        let merged = merge_headers("0xaddr:0xsig".to_string(), &headers);
        assert_eq!(merged.get(FLASHBOTS_SIGNATURE_HEADER).unwrap(), "0xaddr:0xsig");
        assert_eq!(merged.get("Authorization").unwrap(), "token");

        headers.insert(FLASHBOTS_SIGNATURE_HEADER.to_string(), "override".to_string());
        let merged = merge_headers("0xaddr:0xsig".to_string(), &headers);
        assert_eq!(merged.get(FLASHBOTS_SIGNATURE_HEADER).unwrap(), "override");
        assert_eq!(merged.len(), 2);
    }

    #[tokio::test]
    async fn test_signing_failure_prevents_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = RelayClient::new(endpoint(&mock_server), Arc::new(LockedSigner)).unwrap();
        let result = client.get_user_stats(13_000_000).await;

        assert!(matches!(result, Err(RelayKitError::Signing(_))));
    }

    #[tokio::test]
    async fn test_simulate_bundle() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "bundleGasPrice": "476190476193",
                    "bundleHash":
                        "0x73b1e258c7a42fd0230b2fd05529c5d4b6fcb66c227783f8bece8aeacdd1db2e",
                    "coinbaseDiff": "20000000000126000",
                    "ethSentToCoinbase": "20000000000000000",
                    "gasFees": "126000",
                    "results": [{
                        "coinbaseDiff": "10000000000063000",
                        "ethSentToCoinbase": "10000000000000000",
                        "fromAddress": "0x02a727155aef8609c9f7f2179b2a1f560b39f5a0",
                        "gasFees": "63000",
                        "gasPrice": "476190476193",
                        "gasUsed": 21000,
                        "toAddress": "0x73625f59cadc5009cb458b751b3e7b6b48c06f2c",
                        "txHash":
                            "0x669b4704a7d993a946cdd6e2f95233f308ce0c4649d2e04944e8299efcaa098a",
                        "value": "0x"
                    }],
                    "stateBlockNumber": 5221585,
                    "totalGasUsed": 42000
                }
            })))
            .mount(&mock_server)
            .await;

        let simulation = client(&mock_server)
            .simulate(CallBundleParams::new(vec![Bytes::from(vec![0x01])], 5_221_586))
            .await
            .unwrap();

        assert_eq!(simulation.total_gas_used, 42_000);
        assert_eq!(simulation.bundle_gas_price, U256::from(476_190_476_193u64));
        assert!(simulation.first_revert().is_none());
    }

    #[tokio::test]
    async fn test_malformed_result_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "isHighPriority": "maybe" }
            })))
            .mount(&mock_server)
            .await;

        let result = client(&mock_server).get_user_stats(1).await;
        assert!(matches!(
            result,
            Err(RelayKitError::Relay(RelayError::InvalidResponse { .. }))
        ));
    }

    #[tokio::test]
    async fn test_bundle_stats_request_shape() {
        let mock_server = MockServer::start().await;
        let bundle_hash = "0x73b1e258c7a42fd0230b2fd05529c5d4b6fcb66c227783f8bece8aeacdd1db2e";

        Mock::given(method("POST"))
            .and(body_json(json!({
                "method": "flashbots_getBundleStats",
                "params": [{ "bundleHash": bundle_hash, "blockNumber": "0xc65d40" }],
                "id": 1,
                "jsonrpc": "2.0"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "isSimulated": true, "isSentToMiners": true, "isHighPriority": false }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let stats = client(&mock_server)
            .get_bundle_stats(bundle_hash, 13_000_000)
            .await
            .unwrap();
        assert!(stats.is_simulated);
        assert!(stats.is_sent_to_miners);
    }

    #[tokio::test]
    async fn test_block_stats_and_pricing() {
        let mock_server = MockServer::start().await;
        let ours = "0x1b2f1d6b5fdf1e6e4b4c6c1b5c3f7e62a5bd19b60ad86f9f0e0e7d35c4b8b2f1";
        let theirs = "0x2222222222222222222222222222222222222222222222222222222222222222";

        let tx = |hash: &str, gas_used: u64, gas_price: &str, coinbase: &str| {
            json!({
                "transaction_hash": hash,
                "tx_index": 0,
                "bundle_type": "flashbots",
                "bundle_index": 0,
                "block_number": 13_000_000,
                "eoa_address": "0x4b6b7b5c8c1d1b2d6d2b8d1f6cfb1a8a3c2d1e0f",
                "to_address": "0xa57bd00134b2850b2a1c55860c9e9ea100fdd6cf",
                "gas_used": gas_used,
                "gas_price": gas_price,
                "coinbase_transfer": coinbase
            })
        };

        Mock::given(method("GET"))
            .and(path("/v1/blocks"))
            .and(query_param("block_number", "13000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "latest_block_number": 13_000_010,
                "blocks": [{
                    "block_number": 13_000_000,
                    "gas_used": 121_000,
                    "transactions": [
                        tx(ours, 100_000, "60", "1000000"),
                        tx(theirs, 21_000, "99", "0")
                    ]
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let stats = client.fetch_block_stats(13_000_000).await.unwrap();
        assert_eq!(stats.blocks[0].transactions.len(), 2);

        let bundle = [TxHash::from_str(ours).unwrap()];
        let pricing = client
            .bundle_pricing_for_block(13_000_000, U256::from(50u64), &bundle)
            .await
            .unwrap();

        assert_eq!(pricing.tx_count, 1);
        // (1_000_000 + 60 * 100_000) / 100_000
        assert_eq!(pricing.effective_gas_price_to_searcher, U256::from(70u64));
        // no signed relay request for the public endpoint
        let received = mock_server.received_requests().await.unwrap();
        assert!(received.iter().all(|r| !r.headers.contains_key("x-flashbots-signature")));
    }
}
