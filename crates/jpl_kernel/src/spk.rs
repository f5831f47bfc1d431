//! SPK segments and Chebyshev evaluation.

use std::path::Path;

use crate::chebyshev;
use crate::daf::DafFile;
use crate::error::KernelError;

/// SPK summaries carry two doubles (start, end) and six integers.
const SPK_ND: usize = 2;
const SPK_NI: usize = 6;

/// Descriptor of one SPK segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SpkSegment {
    pub target: i32,
    pub center: i32,
    /// Reference frame code (1 = J2000/ICRF).
    pub frame: i32,
    pub data_type: i32,
    /// Coverage in TDB seconds past J2000.
    pub start_epoch: f64,
    pub end_epoch: f64,
    start_address: usize,
    init: f64,
    interval: f64,
    record_words: usize,
    record_count: usize,
}

impl SpkSegment {
    fn covers(&self, epoch: f64) -> bool {
        epoch >= self.start_epoch && epoch <= self.end_epoch
    }

    fn coefficient_count(&self) -> usize {
        let components = if self.data_type == 3 { 6 } else { 3 };
        (self.record_words - 2) / components
    }
}

/// Position (km) and velocity (km/s) of a target relative to its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpkEvaluation {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// A loaded SPK file.
#[derive(Debug, Clone)]
pub struct SpkKernel {
    daf: DafFile,
    segments: Vec<SpkSegment>,
}

impl SpkKernel {
    /// Read and index an SPK file.
    pub fn load(path: &Path) -> Result<Self, KernelError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Index an SPK image already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, KernelError> {
        let daf = DafFile::parse(bytes)?;
        let mut segments = Vec::new();
        for summary in daf.summaries()? {
            if summary.doubles.len() != SPK_ND || summary.ints.len() != SPK_NI {
                return Err(KernelError::InvalidFormat(
                    "summary shape is not an SPK summary".into(),
                ));
            }
            let data_type = summary.ints[3];
            if data_type != 2 && data_type != 3 {
                return Err(KernelError::UnsupportedType(data_type));
            }
            let start_address = summary.ints[4];
            let end_address = summary.ints[5];
            if start_address < 1 || end_address < start_address + 3 {
                return Err(KernelError::InvalidFormat(format!(
                    "bad segment addresses {start_address}..{end_address}"
                )));
            }
            let end = end_address as usize;
            let init = daf.word(end - 3)?;
            let interval = daf.word(end - 2)?;
            let record_words = daf.word(end - 1)? as usize;
            let record_count = daf.word(end)? as usize;
            if interval <= 0.0 || record_words < 5 || record_count == 0 {
                return Err(KernelError::InvalidFormat(
                    "bad Chebyshev segment directory".into(),
                ));
            }
            segments.push(SpkSegment {
                target: summary.ints[0],
                center: summary.ints[1],
                frame: summary.ints[2],
                data_type,
                start_epoch: summary.doubles[0],
                end_epoch: summary.doubles[1],
                start_address: start_address as usize,
                init,
                interval,
                record_words,
                record_count,
            });
        }
        if segments.is_empty() {
            return Err(KernelError::InvalidFormat("kernel has no segments".into()));
        }
        Ok(Self { daf, segments })
    }

    pub fn segments(&self) -> &[SpkSegment] {
        &self.segments
    }

    /// Center body of the first segment whose target is `target`.
    pub fn center_for(&self, target: i32) -> Option<i32> {
        self.segments
            .iter()
            .find(|s| s.target == target)
            .map(|s| s.center)
    }

    /// Evaluate `target` relative to `center` at TDB seconds past J2000.
    ///
    /// Later segments take precedence over earlier ones, as in SPICE.
    pub fn evaluate(
        &self,
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        let mut matching = self
            .segments
            .iter()
            .rev()
            .filter(|s| s.target == target && s.center == center)
            .peekable();
        if matching.peek().is_none() {
            return Err(KernelError::SegmentNotFound { target, center });
        }
        let segment = matching
            .find(|s| s.covers(epoch_tdb_s))
            .ok_or(KernelError::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            })?;
        self.evaluate_segment(segment, epoch_tdb_s)
    }

    /// Walk the center chain from `target` to the solar-system barycenter and
    /// return the summed state `[x, y, z, vx, vy, vz]`.
    pub fn resolve_to_ssb(&self, target: i32, epoch_tdb_s: f64) -> Result<[f64; 6], KernelError> {
        let mut state = [0.0; 6];
        let mut code = target;
        let mut hops = 0;
        while code != crate::SSB {
            hops += 1;
            if hops > 8 {
                return Err(KernelError::InvalidFormat("center chain too deep".into()));
            }
            let Some(center) = self.center_for(code) else {
                let bary = crate::planet_body_to_barycenter(code);
                if bary != code {
                    code = bary;
                    continue;
                }
                return Err(KernelError::SegmentNotFound {
                    target: code,
                    center: -1,
                });
            };
            let eval = self.evaluate(code, center, epoch_tdb_s)?;
            for k in 0..3 {
                state[k] += eval.position_km[k];
                state[k + 3] += eval.velocity_km_s[k];
            }
            code = center;
        }
        Ok(state)
    }

    fn evaluate_segment(
        &self,
        seg: &SpkSegment,
        epoch: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        let raw_index = ((epoch - seg.init) / seg.interval).floor();
        let index = (raw_index.max(0.0) as usize).min(seg.record_count - 1);
        let record = seg.start_address + index * seg.record_words;

        let mid = self.daf.word(record)?;
        let radius = self.daf.word(record + 1)?;
        if radius <= 0.0 {
            return Err(KernelError::InvalidFormat("non-positive record radius".into()));
        }
        let s = (epoch - mid) / radius;
        let n = seg.coefficient_count();

        let mut coeffs = vec![0.0; n];
        let mut position_km = [0.0; 3];
        let mut velocity_km_s = [0.0; 3];
        for axis in 0..3 {
            self.read_coefficients(record + 2 + axis * n, &mut coeffs)?;
            let (value, slope) = chebyshev::evaluate(&coeffs, s);
            position_km[axis] = value;
            velocity_km_s[axis] = slope / radius;
        }
        if seg.data_type == 3 {
            for axis in 0..3 {
                self.read_coefficients(record + 2 + (3 + axis) * n, &mut coeffs)?;
                velocity_km_s[axis] = chebyshev::evaluate(&coeffs, s).0;
            }
        }
        Ok(SpkEvaluation {
            position_km,
            velocity_km_s,
        })
    }

    fn read_coefficients(&self, address: usize, out: &mut [f64]) -> Result<(), KernelError> {
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = self.daf.word(address + k)?;
        }
        Ok(())
    }
}
