mod wav_transcoder;

pub use wav_transcoder::SymphoniaWavTranscoder;
