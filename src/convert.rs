//! MP3 to WAV conversion.
//!
//! Previews arrive as MP3. Tools that want raw PCM can either have the
//! extractor store them as WAV directly (`--format wav`) or convert a folder
//! of already downloaded previews with [`convert_directory`].
//!
//! Decoding goes through `symphonia`, encoding through `hound` as 16-bit
//! interleaved PCM at the source sample rate and channel count.

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use symphonia::core::{
    audio::SampleBuffer,
    codecs::{CODEC_TYPE_NULL, DecoderOptions},
    errors::Error as SymphoniaError,
    formats::FormatOptions,
    io::{MediaSource, MediaSourceStream},
    meta::MetadataOptions,
    probe::Hint,
};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decoding failed: {0}")]
    Decode(#[from] SymphoniaError),

    #[error("WAV encoding failed: {0}")]
    Encode(#[from] hound::Error),

    #[error("Cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Unsupported audio: {0}")]
    Unsupported(&'static str),
}

/// Interleaved 16-bit PCM.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Decodes a complete audio stream to interleaved `i16` samples.
///
/// `extension` is a format hint such as `"mp3"`; probing still inspects the
/// content itself.
pub fn decode_audio(
    source: Box<dyn MediaSource>,
    extension: Option<&str>,
) -> Result<DecodedAudio, ConvertError> {
    let mss = MediaSourceStream::new(source, Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(ConvertError::Unsupported("no audio track"))?;
    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track.codec_params.channels.map(|c| c.count() as u16);

    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut samples: Vec<i16> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            // corrupt frame, keep going
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(e.into()),
        };

        let spec = *decoded.spec();
        sample_rate.get_or_insert(spec.rate);
        channels.get_or_insert(spec.channels.count() as u16);

        let mut buf = SampleBuffer::<i16>::new(decoded.capacity() as u64, spec);
        buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buf.samples());
    }

    Ok(DecodedAudio {
        samples,
        sample_rate: sample_rate.ok_or(ConvertError::Unsupported("unknown sample rate"))?,
        channels: channels.ok_or(ConvertError::Unsupported("unknown channel count"))?,
    })
}

/// Encodes PCM as a WAV file in memory.
pub fn encode_wav(audio: &DecodedAudio) -> Result<Vec<u8>, ConvertError> {
    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut out = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut out), spec)?;
        for sample in &audio.samples {
            writer.write_sample(*sample)?;
        }
        writer.finalize()?;
    }
    Ok(out)
}

/// Converts an MP3 payload to WAV bytes.
pub fn transcode_to_wav(mp3: Vec<u8>) -> Result<Vec<u8>, ConvertError> {
    let decoded = decode_audio(Box::new(Cursor::new(mp3)), Some("mp3"))?;
    encode_wav(&decoded)
}

/// Converts every `.mp3` file directly inside `src` to `<stem>.wav` in `dst`.
///
/// `dst` is created when missing. Files whose destination already exists are
/// left alone and counted as skipped; other files are ignored.
pub fn convert_directory(src: &Path, dst: &Path) -> Result<ConvertSummary, ConvertError> {
    std::fs::create_dir_all(dst)?;

    let mut summary = ConvertSummary::default();
    for entry in WalkDir::new(src).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_mp3(path) {
            continue;
        }

        let target = wav_target(path, dst);
        if target.exists() {
            summary.skipped += 1;
            continue;
        }

        let file = std::fs::File::open(path)?;
        let decoded = decode_audio(Box::new(file), Some("mp3"))?;
        std::fs::write(&target, encode_wav(&decoded)?)?;
        summary.converted += 1;
    }

    Ok(summary)
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mp3"))
}

fn wav_target(mp3: &Path, dst: &Path) -> PathBuf {
    let stem = mp3.file_stem().unwrap_or_default().to_string_lossy();
    dst.join(format!("{}.wav", stem))
}
