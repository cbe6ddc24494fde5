//! Legacy (pre-segwit) input signing and validation

use bitcoin::hashes::Hash;
use bitcoin::secp256k1::{ecdsa, Message, Secp256k1};
use bitcoin::sighash::SighashCache;
use tracing::debug;

use crate::domain::primitives::{EcPrivate, EcPublic, HashType, Script, Transaction};
use crate::domain::{DomainError, DomainResult};

/// Compute the legacy signature hash of input `index` under `script_code`.
pub fn signature_hash(
    tx: &Transaction,
    index: usize,
    script_code: &Script,
    hash_type: HashType,
) -> DomainResult<Message> {
    let count = tx.input_count();
    if index >= count {
        return Err(DomainError::IndexOutOfRange { index, count });
    }
    let sighash = SighashCache::new(tx.tx())
        .legacy_signature_hash(index, script_code.as_script(), hash_type.to_u32())
        .map_err(|e| DomainError::Sighash(e.to_string()))?;
    Ok(Message::from_digest(sighash.to_byte_array()))
}

/// Sign input `index`, returning the DER signature followed by the hash type byte.
pub fn sign_input(
    tx: &Transaction,
    index: usize,
    script_code: &Script,
    secret: &EcPrivate,
    hash_type: HashType,
) -> DomainResult<Vec<u8>> {
    let message = signature_hash(tx, index, script_code, hash_type)?;
    let secp = Secp256k1::signing_only();
    let signature = secp.sign_ecdsa(&message, secret.secret());
    let mut endorsement = signature.serialize_der().to_vec();
    // hash type values all fit in the low byte
    endorsement.push(hash_type.to_u32() as u8);
    Ok(endorsement)
}

/// Verify `signature` for input `index`.
///
/// Accepts bare DER or DER followed by a hash type byte. Bytes that do not
/// decode as a signature verify as false; only an out-of-range index is an error.
pub fn validate_input(
    tx: &Transaction,
    index: usize,
    script_code: &Script,
    public_key: &EcPublic,
    signature: &[u8],
    hash_type: HashType,
) -> DomainResult<bool> {
    let message = signature_hash(tx, index, script_code, hash_type)?;
    let Some(mut signature) = parse_signature(signature) else {
        debug!("signature is not DER encoded");
        return Ok(false);
    };
    signature.normalize_s();
    let secp = Secp256k1::verification_only();
    Ok(secp
        .verify_ecdsa(&message, &signature, public_key.point())
        .is_ok())
}

fn parse_signature(bytes: &[u8]) -> Option<ecdsa::Signature> {
    ecdsa::Signature::from_der(bytes).ok().or_else(|| {
        let (_, der) = bytes.split_last()?;
        ecdsa::Signature::from_der(der).ok()
    })
}
