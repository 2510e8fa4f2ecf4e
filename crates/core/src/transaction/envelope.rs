//! Signed transaction envelopes.

use super::body::ENVELOPE_TYPE_TX;
use super::Transaction;
use crate::{CoreError, CoreResult, DecodeError, Network};
use stellar_data_config::{MAX_SIGNATURES_PER_ENVELOPE, SIGNATURE_SIZE};
use stellar_data_cryptography::KeyPair;
use stellar_data_io::{IoError, IoResult, XdrCodec, XdrCodecExt, XdrReader, XdrWriter};
use tracing::debug;

/// A signature together with the last four bytes of the signer's public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

impl XdrCodec for DecoratedSignature {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        writer.write_fixed_opaque(&self.hint);
        writer.write_var_opaque(&self.signature, SIGNATURE_SIZE)
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        Ok(Self {
            hint: reader.read_fixed_opaque::<4>()?,
            signature: reader.read_var_opaque(SIGNATURE_SIZE)?,
        })
    }
}

/// A v1 transaction envelope: the body plus up to 20 signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEnvelope {
    pub transaction: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl TransactionEnvelope {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            signatures: Vec::new(),
        }
    }

    pub fn hash(&self, network: &Network) -> CoreResult<[u8; 32]> {
        Ok(self.transaction.hash(network)?)
    }

    /// Signs the transaction hash on `network` and appends the signature.
    pub fn sign(&mut self, key_pair: &KeyPair, network: &Network) -> CoreResult<()> {
        if self.signatures.len() >= MAX_SIGNATURES_PER_ENVELOPE {
            return Err(CoreError::TooManySignatures);
        }
        let hash = self.hash(network)?;
        let signature = key_pair.sign(&hash)?;
        self.signatures.push(DecoratedSignature {
            hint: key_pair.signature_hint(),
            signature: signature.to_vec(),
        });
        debug!(
            target: "stellar_data",
            signer = %key_pair.account_id(),
            hash = %hex::encode(hash),
            "transaction signed"
        );
        Ok(())
    }

    /// Whether one of the signatures verifies against `key_pair` on `network`.
    pub fn is_signed_by(&self, key_pair: &KeyPair, network: &Network) -> bool {
        let Ok(hash) = self.hash(network) else {
            return false;
        };
        let hint = key_pair.signature_hint();
        self.signatures
            .iter()
            .filter(|decorated| decorated.hint == hint)
            .any(|decorated| key_pair.verify(&hash, &decorated.signature).is_ok())
    }

    /// Standard base64 of the envelope XDR, the form `POST /transactions` takes.
    pub fn to_xdr_base64(&self) -> CoreResult<String> {
        Ok(XdrCodecExt::to_xdr_base64(self)?)
    }

    pub fn from_xdr_base64(encoded: &str) -> Result<Self, DecodeError> {
        crate::decode_base64(encoded)
    }
}

impl XdrCodec for TransactionEnvelope {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        writer.write_i32(ENVELOPE_TYPE_TX);
        self.transaction.encode(writer)?;
        writer.write_vec(&self.signatures, MAX_SIGNATURES_PER_ENVELOPE)
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        match reader.read_i32()? {
            ENVELOPE_TYPE_TX => Ok(Self {
                transaction: Transaction::decode(reader)?,
                signatures: reader.read_vec(MAX_SIGNATURES_PER_ENVELOPE)?,
            }),
            other => Err(IoError::unknown_discriminant("EnvelopeType", other)),
        }
    }
}
