use crate::error::Error;
use config::{Config, ConfigError, File as ConfigFile};
use glob::Pattern;
use serde::Deserialize;

/// One codec or resolution weight. Declared order in the config file
/// is significant: lookups stop at the first matching entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightEntry {
    pub name: String,
    pub score: i64,
}

/// One filename glob weight. Unlike the codec tables, every matching
/// (pattern, file) pair contributes.
#[derive(Debug, Clone, Deserialize)]
pub struct FilenameEntry {
    pub pattern: String,
    pub score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: String,
    pub token: String,
    pub libraries: Vec<String>,
    #[serde(default)]
    pub audio_codec_scores: Vec<WeightEntry>,
    #[serde(default)]
    pub video_codec_scores: Vec<WeightEntry>,
    #[serde(default)]
    pub video_resolution_scores: Vec<WeightEntry>,
    #[serde(default)]
    pub filename_scores: Vec<FilenameEntry>,
    #[serde(default)]
    pub score_filesize: bool,
    pub minimum_score: i64,
    #[serde(default)]
    pub auto_delete: bool,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

/// Validated, immutable scoring tables handed to the scorer and the
/// decision loop. Built once at startup; filename patterns are
/// lowercased and compiled here so a malformed glob fails the run
/// before any section is touched.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub audio_codec_scores: Vec<(String, i64)>,
    pub video_codec_scores: Vec<(String, i64)>,
    pub video_resolution_scores: Vec<(String, i64)>,
    pub filename_scores: Vec<(Pattern, i64)>,
    pub score_filesize: bool,
    pub minimum_score: i64,
    pub auto_delete: bool,
}

impl AppConfig {
    pub fn scoring(&self) -> Result<ScoringConfig, Error> {
        let mut filename_scores = Vec::with_capacity(self.filename_scores.len());
        for entry in &self.filename_scores {
            let pattern = Pattern::new(&entry.pattern.to_lowercase()).map_err(|source| {
                Error::InvalidPattern {
                    pattern: entry.pattern.clone(),
                    source,
                }
            })?;
            filename_scores.push((pattern, entry.score));
        }

        Ok(ScoringConfig {
            audio_codec_scores: weight_pairs(&self.audio_codec_scores),
            video_codec_scores: weight_pairs(&self.video_codec_scores),
            video_resolution_scores: weight_pairs(&self.video_resolution_scores),
            filename_scores,
            score_filesize: self.score_filesize,
            minimum_score: self.minimum_score,
            auto_delete: self.auto_delete,
        })
    }
}

fn weight_pairs(entries: &[WeightEntry]) -> Vec<(String, i64)> {
    entries
        .iter()
        .map(|entry| (entry.name.clone(), entry.score))
        .collect()
}
