//! In-memory decoded audio.

/// Decoded audio held fully in memory.
///
/// Samples are interleaved `f32` values in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioBuffer {
    /// Create a buffer from interleaved samples.
    #[must_use]
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / usize::from(self.channels)
    }

    /// Duration in milliseconds, rounded to the nearest millisecond.
    pub fn length_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        let frames = self.frames() as u64;
        let rate = u64::from(self.sample_rate);
        (frames * 1000 + rate / 2) / rate
    }

    /// Copy out the sub-range `[start_ms, end_ms)`.
    ///
    /// Positions past the end are clamped to the end of the buffer, and an
    /// inverted range yields an empty buffer. The source is left untouched.
    #[must_use]
    pub fn slice(&self, start_ms: u64, end_ms: u64) -> Self {
        let start = self.frame_at(start_ms);
        let end = self.frame_at(end_ms).max(start);
        let width = usize::from(self.channels);

        Self {
            samples: self.samples[start * width..end * width].to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    /// Frame index for a millisecond position, clamped to the buffer.
    fn frame_at(&self, ms: u64) -> usize {
        let frame = u128::from(ms) * u128::from(self.sample_rate) / 1000;
        usize::try_from(frame).map_or(self.frames(), |f| f.min(self.frames()))
    }
}
