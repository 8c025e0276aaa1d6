use crate::config::ScoringConfig;
use crate::media::MediaPart;
use std::path::Path;
use tracing::debug;

/// Combine every scoring dimension into one comparable integer.
///
/// Contributions accumulate as f64 and the total is truncated toward
/// zero only at the final cast, so the fractional terms (duration,
/// file size) are not rounded per-term.
pub fn score_media_part(part: &MediaPart, config: &ScoringConfig) -> i64 {
    let mut score = 0.0f64;

    // Lookup tables are first-match-wins: declared order is the
    // tie-break when entries overlap.
    for (codec, weight) in &config.audio_codec_scores {
        if codec.eq_ignore_ascii_case(&part.audio_codec) {
            score += *weight as f64;
            debug!("Added {} to score for audio codec being {:?}", weight, codec);
            break;
        }
    }
    for (codec, weight) in &config.video_codec_scores {
        if codec.eq_ignore_ascii_case(&part.video_codec) {
            score += *weight as f64;
            debug!("Added {} to score for video codec being {:?}", weight, codec);
            break;
        }
    }
    for (resolution, weight) in &config.video_resolution_scores {
        if resolution.eq_ignore_ascii_case(&part.video_resolution) {
            score += *weight as f64;
            debug!(
                "Added {} to score for video resolution being {:?}",
                weight, resolution
            );
            break;
        }
    }

    // The filename scan is additive: every (pattern, file) match
    // contributes, unlike the single-shot lookups above.
    for (pattern, weight) in &config.filename_scores {
        for file in &part.files {
            if pattern.matches(&file_basename(file)) {
                score += *weight as f64;
                debug!(
                    "Added {} to score for filename matching {:?}",
                    weight,
                    pattern.as_str()
                );
            }
        }
    }

    score += (part.video_bitrate * 2) as f64;
    debug!("Added {} to score for video bitrate", part.video_bitrate * 2);
    score += part.video_duration as f64 / 300.0;
    debug!(
        "Added {} to score for video duration",
        part.video_duration as f64 / 300.0
    );
    score += (part.video_width * 2) as f64;
    debug!("Added {} to score for video width", part.video_width * 2);
    score += (part.video_height * 2) as f64;
    debug!("Added {} to score for video height", part.video_height * 2);
    score += (part.audio_channels * 1000) as f64;
    debug!(
        "Added {} to score for audio channels",
        part.audio_channels * 1000
    );
    if config.score_filesize {
        score += part.file_size as f64 / 100_000.0;
        debug!(
            "Added {} to score for total file size",
            part.file_size as f64 / 100_000.0
        );
    }

    score as i64
}

fn file_basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| path.to_lowercase())
}
