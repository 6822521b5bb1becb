//! Relay request authentication
//!
//! The relay identifies searchers by address. Every request body is hashed
//! with keccak256 and the hex digest is signed as an EIP-191 personal
//! message; the relay recovers the signer from the `X-Flashbots-Signature`
//! header and compares it with the claimed address.

use alloy::primitives::{keccak256, Address, Signature};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use std::sync::Arc;
use types::{Result, SigningError};

/// Capability that proves control of an address to the relay
#[async_trait]
pub trait AuthSigner: Send + Sync {
    /// Address the relay should attribute requests to
    async fn address(&self) -> Result<Address>;

    /// Sign `message` under the EIP-191 personal message convention
    async fn sign_message(&self, message: &[u8]) -> Result<Signature>;
}

#[async_trait]
impl AuthSigner for PrivateKeySigner {
    async fn address(&self) -> Result<Address> {
        Ok(alloy::signers::Signer::address(self))
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        alloy::signers::Signer::sign_message(self, message)
            .await
            .map_err(|e| SigningError::Message(e.to_string()).into())
    }
}

#[async_trait]
impl<S: AuthSigner + ?Sized> AuthSigner for Arc<S> {
    async fn address(&self) -> Result<Address> {
        (**self).address().await
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        (**self).sign_message(message).await
    }
}

/// Message the relay expects to be signed for `body`: the 0x-prefixed
/// keccak256 hex digest of the serialized request.
pub fn signing_message(body: &str) -> String {
    format!("0x{}", hex::encode(keccak256(body.as_bytes())))
}

/// Build the `<address>:<signature>` auth header value for `body`.
///
/// The signer address is looked up on every call so a rotated key is picked
/// up by the next request.
pub async fn sign_request<S: AuthSigner + ?Sized>(body: &str, signer: &S) -> Result<String> {
    let message = signing_message(body);
    let signature = signer.sign_message(message.as_bytes()).await?;
    let address = signer.address().await?;

    Ok(format!("{}:0x{}", address, hex::encode(signature.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicU64, Ordering};

    // Well-known development key (anvil account #0)
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_signer() -> PrivateKeySigner {
        PrivateKeySigner::from_str(TEST_KEY).unwrap()
    }

    struct RejectingSigner;

    #[async_trait]
    impl AuthSigner for RejectingSigner {
        async fn address(&self) -> Result<Address> {
            Ok(Address::ZERO)
        }

        async fn sign_message(&self, _message: &[u8]) -> Result<Signature> {
            Err(SigningError::Message("device locked".to_string()).into())
        }
    }

    #[test]
    fn test_header_format() {
        let signer = test_signer();
        let header = tokio_test::block_on(sign_request(r#"{"id":1}"#, &signer)).unwrap();

        let (address, signature) = header.split_once(':').unwrap();
        assert_eq!(
            address.parse::<Address>().unwrap(),
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );
        assert!(signature.starts_with("0x"));
        // r || s || v
        assert_eq!(signature.len(), 2 + 65 * 2);
    }

    #[test]
    fn test_signature_recovers_to_signer() {
        let signer = test_signer();
        let body = r#"{"method":"eth_sendBundle","params":[],"id":3,"jsonrpc":"2.0"}"#;
        let message = signing_message(body);

        let signature =
            tokio_test::block_on(AuthSigner::sign_message(&signer, message.as_bytes())).unwrap();
        let recovered = signature.recover_address_from_msg(message.as_bytes()).unwrap();

        assert_eq!(recovered, signer.address());
        let header = tokio_test::block_on(sign_request(body, &signer)).unwrap();
        assert!(header.ends_with(&hex::encode(signature.as_bytes())));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let signer = test_signer();
        let first = tokio_test::block_on(sign_request("body", &signer)).unwrap();
        let second = tokio_test::block_on(sign_request("body", &signer)).unwrap();
        let other = tokio_test::block_on(sign_request("other body", &signer)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_signing_message_is_hex_digest() {
        let message = signing_message("");
        assert_eq!(
            message,
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_signing_failure_propagates() {
        let result = tokio_test::block_on(sign_request("body", &RejectingSigner));
        assert!(matches!(
            result,
            Err(types::RelayKitError::Signing(SigningError::Message(_)))
        ));
    }

    /// Reports a different address on every lookup
    struct CountingSigner {
        inner: PrivateKeySigner,
        lookups: AtomicU64,
    }

    #[async_trait]
    impl AuthSigner for CountingSigner {
        async fn address(&self) -> Result<Address> {
            let n = self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(Address::with_last_byte(n as u8 + 1))
        }

        async fn sign_message(&self, message: &[u8]) -> Result<Signature> {
            AuthSigner::sign_message(&self.inner, message).await
        }
    }

    #[tokio::test]
    async fn test_address_is_looked_up_per_call() {
        let signer = CountingSigner {
            inner: test_signer(),
            lookups: AtomicU64::new(0),
        };

        let first = sign_request("body", &signer).await.unwrap();
        let second = sign_request("body", &signer).await.unwrap();

        assert!(first.starts_with(&format!("{}:", Address::with_last_byte(1))));
        assert!(second.starts_with(&format!("{}:", Address::with_last_byte(2))));
        // same body, same key: only the address part changed
        assert_eq!(first.split_once(':').unwrap().1, second.split_once(':').unwrap().1);
    }

    #[tokio::test]
    async fn test_shared_signer() {
        let signer: Arc<dyn AuthSigner> = Arc::new(test_signer());
        let header = sign_request("body", &signer).await.unwrap();
        assert!(header.starts_with("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266:"));
    }
}
