use std::io::Read;

use cipwire_types::{CipType, CipValue};

use crate::codec::{decode, DecoderConfig};
use crate::error::{DecodeError, ReadFault, Result};

/// Upper bound on units reserved up front by [`UnitReader::read_units`].
const MAX_RESERVED_UNITS: usize = 4096;

/// Decodes a run of units from any `Read` source.
///
/// Faults are recorded and decoding continues, so one bad field does not
/// stop the run. A run ends early only once the source is exhausted. Inspect [`faults`](Self::faults) after the run to tell a real
/// zero from a failed read.
pub struct UnitReader<R> {
    inner: R,
    config: DecoderConfig,
    consumed: u64,
    faults: Vec<ReadFault>,
    dropped_faults: usize,
    exhausted: bool,
}

impl<R: Read> UnitReader<R> {
    /// Create a new unit reader with default configuration.
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, DecoderConfig::default())
    }

    /// Create a new unit reader with explicit configuration.
    pub fn with_config(inner: R, config: DecoderConfig) -> Self {
        Self {
            inner,
            config,
            consumed: 0,
            faults: Vec::new(),
            dropped_faults: 0,
            exhausted: false,
        }
    }

    /// Decode the next unit of `tag`.
    ///
    /// Returns the zero value on a read fault unless
    /// [`DecoderConfig::fail_on_read_fault`] is set.
    pub fn read_unit(&mut self, tag: CipType) -> Result<CipValue> {
        let mut counted = CountingRead {
            inner: &mut self.inner,
            count: 0,
        };
        let decoded = decode(tag, &mut counted)?;
        self.consumed += counted.count;
        if decoded.fault.as_ref().is_some_and(ReadFault::is_short_read) {
            self.exhausted = true;
        }

        match decoded.fault {
            None => Ok(decoded.value),
            Some(fault) if self.config.fail_on_read_fault => Err(DecodeError::Read(fault)),
            Some(fault) => {
                self.record(fault);
                Ok(decoded.value)
            }
        }
    }

    /// Decode up to `count` consecutive units of `tag`.
    ///
    /// The run stops at end of input: the unit that hit it is returned as a
    /// zero with its fault recorded, and no further units are read. Other
    /// read faults do not stop the run.
    pub fn read_units(&mut self, tag: CipType, count: usize) -> Result<Vec<CipValue>> {
        if !tag.is_decodable() {
            return Err(DecodeError::UnsupportedTag(tag));
        }
        let mut values = Vec::with_capacity(count.min(MAX_RESERVED_UNITS));
        for _ in 0..count {
            values.push(self.read_unit(tag)?);
            if self.exhausted {
                break;
            }
        }
        tracing::debug!(tag = %tag, count, faults = self.faults.len(), "decoded unit run");
        Ok(values)
    }

    /// Total bytes pulled from the source so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns true once a read has hit end of input.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Faults recorded so far, oldest first.
    pub fn faults(&self) -> &[ReadFault] {
        &self.faults
    }

    /// Faults that occurred after the record was full.
    pub fn dropped_faults(&self) -> usize {
        self.dropped_faults
    }

    /// Take the recorded faults, leaving the record empty.
    pub fn take_faults(&mut self) -> Vec<ReadFault> {
        self.dropped_faults = 0;
        std::mem::take(&mut self.faults)
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Current decoder configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    fn record(&mut self, fault: ReadFault) {
        if self.faults.len() < self.config.max_recorded_faults {
            self.faults.push(fault);
        } else {
            self.dropped_faults += 1;
        }
    }
}

struct CountingRead<'a, R> {
    inner: &'a mut R,
    count: u64,
}

impl<R: Read> Read for CountingRead<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}
