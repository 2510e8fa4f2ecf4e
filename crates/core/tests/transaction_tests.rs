//! Envelope construction and signing against fixed vectors.

use stellar_data_core::{
    CoreError, DecodeError, Memo, MuxedAccount, Network, Operation, OperationBody,
    Preconditions, TransactionBuilder, TransactionEnvelope,
};
use stellar_data_cryptography::{sha256, KeyPair};

const EXPECTED_HASH: &str = "23a9b55cf5e4f074894f445fc4b95e0e91bd6eee521b2886139afb0c479c8c55";
const EXPECTED_ENVELOPE: &str = "AAAAAgAAAAADoQe/884Qvh1w3RjnS8CZZ+TWMJulDV8d3IZkElUxuAAAAGQAAAAAAAAE0wAAAAAAAAAAAAAAAQAAAAEAAAAAA6EHv/POEL4dcN0Y50vAmWfk1jCbpQ1fHdyGZBJVMbgAAAAKAAAAC2V4YW1wbGVfa2V5AAAAAAEAAAANZXhhbXBsZV92YWx1ZQAAAAAAAAAAAAABElUxuAAAAECFYwZzlqztQWXavba1Rnsa7W1Dz10e2i4ifj696Nh7BGZaTeGZuCkkG9H6spXXOsIgiGF4PWFsXerxFWrndloF";

fn signer() -> KeyPair {
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = i as u8;
    }
    KeyPair::from_raw_seed(&seed)
}

fn signed_envelope() -> TransactionEnvelope {
    let signer = signer();
    let operation = Operation::manage_data("example_key", Some(b"example_value"))
        .unwrap()
        .with_source(MuxedAccount::from(&signer));
    let tx = TransactionBuilder::new(MuxedAccount::from(&signer), 1234)
        .add_operation(operation)
        .build()
        .unwrap();
    let mut envelope = TransactionEnvelope::new(tx);
    envelope.sign(&signer, &Network::testnet()).unwrap();
    envelope
}

#[test]
fn test_envelope_matches_known_vector() {
    let envelope = signed_envelope();
    assert_eq!(
        hex::encode(envelope.hash(&Network::testnet()).unwrap()),
        EXPECTED_HASH
    );
    assert_eq!(envelope.to_xdr_base64().unwrap(), EXPECTED_ENVELOPE);
}

#[test]
fn test_hash_covers_signature_base() {
    let envelope = signed_envelope();
    let network = Network::testnet();
    let base = envelope.transaction.signature_base(&network).unwrap();
    assert_eq!(&base[..32], &network.network_id());
    assert_eq!(&base[32..36], &[0, 0, 0, 2]);
    assert_eq!(hex::encode(sha256(&base)), EXPECTED_HASH);
    assert_eq!(envelope.transaction.hash(&network).unwrap(), sha256(&base));
}

#[test]
fn test_signature_verifies_only_on_signing_network() {
    let envelope = signed_envelope();
    let signer = signer();
    assert_eq!(envelope.signatures.len(), 1);
    assert_eq!(envelope.signatures[0].hint, signer.signature_hint());
    assert!(envelope.is_signed_by(&signer, &Network::testnet()));
    assert!(!envelope.is_signed_by(&signer, &Network::public()));
    assert!(!envelope.is_signed_by(&KeyPair::random(), &Network::testnet()));
}

#[test]
fn test_decode_submitted_envelope() {
    let envelope = TransactionEnvelope::from_xdr_base64(EXPECTED_ENVELOPE).unwrap();
    assert_eq!(envelope, signed_envelope());

    let tx = &envelope.transaction;
    assert_eq!(tx.fee, 100);
    assert_eq!(tx.seq_num, 1235);
    assert_eq!(tx.preconditions, Preconditions::None);
    assert_eq!(tx.memo, Memo::None);
    assert_eq!(
        tx.source_account.to_string(),
        "GAB2CB576PHBBPQ5ODORRZ2LYCMWPZGWGCN2KDK7DXOIMZASKUY3QZ6Q"
    );
    let OperationBody::ManageData(op) = &tx.operations[0].body;
    assert_eq!(op.data_name(), "example_key");
    assert_eq!(op.data_value(), Some(&b"example_value"[..]));
}

#[test]
fn test_decode_envelope_errors() {
    assert_eq!(
        TransactionEnvelope::from_xdr_base64("  "),
        Err(DecodeError::Empty)
    );
    assert!(matches!(
        TransactionEnvelope::from_xdr_base64("not base64!"),
        Err(DecodeError::Base64(_))
    ));
    assert!(matches!(
        TransactionEnvelope::from_xdr_base64(&EXPECTED_ENVELOPE[..40]),
        Err(DecodeError::Xdr(_)) | Err(DecodeError::Base64(_))
    ));
}

#[test]
fn test_muxed_source_changes_hash() {
    let signer = signer();
    let muxed: MuxedAccount =
        "MAB2CB576PHBBPQ5ODORRZ2LYCMWPZGWGCN2KDK7DXOIMZASKUY3QAAAAAAAAAAE2KDXS"
            .parse()
            .unwrap();
    assert_eq!(muxed.account_id(), MuxedAccount::from(&signer).account_id());

    let tx = TransactionBuilder::new(muxed, 1234)
        .add_operation(Operation::manage_data("example_key", Some(b"example_value")).unwrap())
        .build()
        .unwrap();
    let envelope = TransactionEnvelope::new(tx);
    assert_ne!(
        hex::encode(envelope.hash(&Network::testnet()).unwrap()),
        EXPECTED_HASH
    );
}

#[test]
fn test_public_key_only_cannot_sign() {
    let public_only = KeyPair::from_account_id(&signer().account_id()).unwrap();
    let mut envelope = signed_envelope();
    let result = envelope.sign(&public_only, &Network::testnet());
    assert!(matches!(result, Err(CoreError::Crypto(_))));
    assert_eq!(envelope.signatures.len(), 1);
}

#[test]
fn test_signature_limit() {
    let signer = signer();
    let mut envelope = signed_envelope();
    for _ in 1..20 {
        envelope.sign(&signer, &Network::testnet()).unwrap();
    }
    assert_eq!(
        envelope.sign(&signer, &Network::testnet()),
        Err(CoreError::TooManySignatures)
    );
}
