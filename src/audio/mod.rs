//! Audio loading, slicing and export.

mod buffer;
mod codec;
mod decode;

pub use buffer::AudioBuffer;
pub use codec::{AudioCodec, FfmpegCodec};
pub use decode::decode_audio_file;
