//! DAF container parsing.
//!
//! Layout (NAIF "DAF Required Reading"): 1024-byte records; record 1 is the
//! file record, summary records form a doubly linked list starting at
//! `FWARD`, each followed by a name record. Addresses are 1-based indices of
//! 8-byte words.

use crate::error::KernelError;

pub(crate) const RECORD_BYTES: usize = 1024;
const WORD_BYTES: usize = 8;
const MAX_SUMMARY_RECORDS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Little,
    Big,
}

/// Raw DAF bytes plus the decoded file record.
#[derive(Debug, Clone)]
pub(crate) struct DafFile {
    bytes: Vec<u8>,
    endian: Endian,
    nd: usize,
    ni: usize,
    fward: usize,
}

/// One array summary: `nd` doubles and `ni` integers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DafSummary {
    pub doubles: Vec<f64>,
    pub ints: Vec<i32>,
}

impl DafFile {
    pub(crate) fn parse(bytes: Vec<u8>) -> Result<Self, KernelError> {
        if bytes.len() < RECORD_BYTES {
            return Err(KernelError::InvalidFormat("file shorter than one record".into()));
        }
        let id = String::from_utf8_lossy(&bytes[0..8]).to_string();
        if !id.starts_with("DAF/") && !id.starts_with("NAIF/DAF") {
            return Err(KernelError::InvalidFormat(format!("unknown id word '{id}'")));
        }
        let endian = match &bytes[88..96] {
            b"LTL-IEEE" => Endian::Little,
            b"BIG-IEEE" => Endian::Big,
            other => {
                return Err(KernelError::InvalidFormat(format!(
                    "unsupported binary format '{}'",
                    String::from_utf8_lossy(other)
                )));
            }
        };
        let mut daf = Self {
            bytes,
            endian,
            nd: 0,
            ni: 0,
            fward: 0,
        };
        let nd = daf.read_i32(8)?;
        let ni = daf.read_i32(12)?;
        let fward = daf.read_i32(76)?;
        if nd < 0 || ni < 2 || fward < 2 {
            return Err(KernelError::InvalidFormat(format!(
                "bad file record: ND={nd} NI={ni} FWARD={fward}"
            )));
        }
        daf.nd = nd as usize;
        daf.ni = ni as usize;
        daf.fward = fward as usize;
        Ok(daf)
    }

    /// Walk the summary-record chain and collect every array summary.
    pub(crate) fn summaries(&self) -> Result<Vec<DafSummary>, KernelError> {
        let summary_words = self.nd + self.ni.div_ceil(2);
        let mut out = Vec::new();
        let mut record = self.fward;
        let mut visited = 0;

        while record != 0 {
            visited += 1;
            if visited > MAX_SUMMARY_RECORDS {
                return Err(KernelError::InvalidFormat("summary chain does not end".into()));
            }
            let base = (record - 1) * RECORD_BYTES;
            let next = self.read_f64(base)?;
            let count = self.read_f64(base + 2 * WORD_BYTES)?;
            if !(0.0..=125.0).contains(&count) || next < 0.0 {
                return Err(KernelError::InvalidFormat(format!(
                    "bad summary record {record}"
                )));
            }

            for i in 0..count as usize {
                let offset = base + (3 + i * summary_words) * WORD_BYTES;
                let mut doubles = Vec::with_capacity(self.nd);
                for k in 0..self.nd {
                    doubles.push(self.read_f64(offset + k * WORD_BYTES)?);
                }
                let int_base = offset + self.nd * WORD_BYTES;
                let mut ints = Vec::with_capacity(self.ni);
                for k in 0..self.ni {
                    ints.push(self.read_i32(int_base + k * 4)?);
                }
                out.push(DafSummary { doubles, ints });
            }
            record = next as usize;
        }
        Ok(out)
    }

    /// Read the double at a 1-based word address.
    pub(crate) fn word(&self, address: usize) -> Result<f64, KernelError> {
        if address == 0 {
            return Err(KernelError::InvalidFormat("word address 0".into()));
        }
        self.read_f64((address - 1) * WORD_BYTES)
    }

    fn slice<const N: usize>(&self, offset: usize) -> Result<[u8; N], KernelError> {
        self.bytes
            .get(offset..offset + N)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| KernelError::InvalidFormat(format!("read past end at byte {offset}")))
    }

    fn read_f64(&self, offset: usize) -> Result<f64, KernelError> {
        let raw = self.slice::<8>(offset)?;
        Ok(match self.endian {
            Endian::Little => f64::from_le_bytes(raw),
            Endian::Big => f64::from_be_bytes(raw),
        })
    }

    fn read_i32(&self, offset: usize) -> Result<i32, KernelError> {
        let raw = self.slice::<4>(offset)?;
        Ok(match self.endian {
            Endian::Little => i32::from_le_bytes(raw),
            Endian::Big => i32::from_be_bytes(raw),
        })
    }
}
