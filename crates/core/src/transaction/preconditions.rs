//! Validity window of a transaction.

use stellar_data_io::{IoError, IoResult, XdrCodec, XdrReader, XdrWriter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Closed interval of UNIX timestamps; `0` as the upper bound means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

impl TimeBounds {
    pub fn new(min_time: u64, max_time: u64) -> Self {
        Self { min_time, max_time }
    }

    /// Valid from now until `timeout` has elapsed.
    pub fn expiring_in(timeout: Duration) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        Self {
            min_time: 0,
            max_time: now.saturating_add(timeout.as_secs()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_time == 0
    }
}

/// Conditions the ledger checks before applying a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preconditions {
    #[default]
    None,
    Time(TimeBounds),
}

impl Preconditions {
    pub fn time_bounds(&self) -> Option<&TimeBounds> {
        match self {
            Preconditions::None => None,
            Preconditions::Time(bounds) => Some(bounds),
        }
    }
}

impl XdrCodec for Preconditions {
    fn encode(&self, writer: &mut XdrWriter) -> IoResult<()> {
        match self {
            Preconditions::None => writer.write_i32(0),
            Preconditions::Time(bounds) => {
                writer.write_i32(1);
                writer.write_u64(bounds.min_time);
                writer.write_u64(bounds.max_time);
            }
        }
        Ok(())
    }

    fn decode(reader: &mut XdrReader<'_>) -> IoResult<Self> {
        match reader.read_i32()? {
            0 => Ok(Preconditions::None),
            1 => Ok(Preconditions::Time(TimeBounds {
                min_time: reader.read_u64()?,
                max_time: reader.read_u64()?,
            })),
            other => Err(IoError::unknown_discriminant("PreconditionType", other)),
        }
    }
}
