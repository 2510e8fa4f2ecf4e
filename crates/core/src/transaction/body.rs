//! The unsigned transaction body and its signature payload.

use super::{Memo, Operation, Preconditions};
use crate::{MuxedAccount, Network};
use stellar_data_config::MAX_OPERATIONS_PER_TRANSACTION;
use stellar_data_cryptography::sha256;
use stellar_data_io::{IoError, IoResult, XdrCodec, XdrReader, XdrWriter};

/// `ENVELOPE_TYPE_TX`, the tagged-transaction discriminant mixed into every
/// signature payload.
pub(crate) const ENVELOPE_TYPE_TX: i32 = 2;

/// A transaction body as it appears inside a v1 envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub source_account: MuxedAccount,
    /// Total fee in stroops: base fee times operation count.
    pub fee: u32,
    /// Sequence number this transaction consumes; the account's current one plus one.
    pub seq_num: i64,
    pub preconditions: Preconditions,
    pub memo: Memo,
    pub operations: Vec<Operation>,
}

impl Transaction {
    /// Bytes that get hashed and signed: network id, envelope type, body.
    pub fn signature_base(&self, network: &Network) -> IoResult<Vec<u8>> {
        let mut writer = XdrWriter::new();
        writer.write_fixed_opaque(&network.network_id());
        writer.write_i32(ENVELOPE_TYPE_TX);
        self.encode(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Transaction hash on `network`, the identifier Horizon reports.
    pub fn hash(&self, network: &Network) -> IoResult<[u8; 32]> {
        Ok(sha256(&self.signature_base(network)?))
    }
}

impl XdrCodec for Transaction {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        self.source_account.encode(writer)?;
        writer.write_u32(self.fee);
        writer.write_i64(self.seq_num);
        self.preconditions.encode(writer)?;
        self.memo.encode(writer)?;
        writer.write_vec(&self.operations, MAX_OPERATIONS_PER_TRANSACTION)?;
        // ext
        writer.write_i32(0);
        Ok(())
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        let transaction = Self {
            source_account: MuxedAccount::decode(reader)?,
            fee: reader.read_u32()?,
            seq_num: reader.read_i64()?,
            preconditions: Preconditions::decode(reader)?,
            memo: Memo::decode(reader)?,
            operations: reader.read_vec(MAX_OPERATIONS_PER_TRANSACTION)?,
        };
        match reader.read_i32()? {
            0 => Ok(transaction),
            other => Err(IoError::unknown_discriminant("TransactionExt", other)),
        }
    }
}
