use crate::audit::AuditLog;
use crate::catalog::{DeletionTransport, MediaCatalog};
use crate::config::ScoringConfig;
use crate::confirm::ConfirmationProvider;
use crate::error::Error;
use crate::media::{self, ScoredPart};
use crate::score;
use tracing::{debug, error};

/// Walks the configured library sections and applies the threshold
/// policy to every duplicate media part independently. No ranking
/// within a group: a group where every member scores below the
/// minimum ends with zero survivors.
pub struct CleanEngine<'a> {
    scoring: &'a ScoringConfig,
    libraries: &'a [String],
    catalog: &'a dyn MediaCatalog,
    transport: &'a dyn DeletionTransport,
    confirm: &'a dyn ConfirmationProvider,
    audit: &'a AuditLog,
}

#[derive(Debug, Default)]
pub struct CleanResult {
    pub sections_processed: usize,
    pub items_seen: usize,
    pub parts_scored: usize,
    pub below_threshold: usize,
    pub deleted: usize,
    pub delete_errors: usize,
    pub skipped_by_user: usize,
}

impl<'a> CleanEngine<'a> {
    pub fn new(
        scoring: &'a ScoringConfig,
        libraries: &'a [String],
        catalog: &'a dyn MediaCatalog,
        transport: &'a dyn DeletionTransport,
        confirm: &'a dyn ConfirmationProvider,
        audit: &'a AuditLog,
    ) -> Self {
        CleanEngine {
            scoring,
            libraries,
            catalog,
            transport,
            confirm,
            audit,
        }
    }

    /// Process every configured section strictly sequentially.
    /// Catalog failures abort the run; deletion failures are reported
    /// and skipped without retry.
    pub fn run(&self) -> Result<CleanResult, Error> {
        let mut result = CleanResult::default();

        for section in self.libraries {
            let kind = self.catalog.section_kind(section)?;
            debug!("Section {:?} resolved to kind {}", section, kind.as_str());

            let items = self.catalog.duplicate_items(section, kind)?;
            println!(
                "Found {} total items for section {:?}",
                items.len(),
                section
            );
            result.sections_processed += 1;

            for item in &items {
                result.items_seen += 1;
                for media_record in &item.media {
                    let part = media::extract_media_part(media_record);
                    let scored = ScoredPart {
                        score: score::score_media_part(&part, self.scoring),
                        part,
                    };
                    result.parts_scored += 1;

                    if scored.score >= self.scoring.minimum_score {
                        continue;
                    }
                    result.below_threshold += 1;

                    let display_path = scored.part.display_name();
                    println!(
                        "{} has a score of {} which is below the minimum score of {}",
                        display_path, scored.score, self.scoring.minimum_score
                    );

                    if !self.scoring.auto_delete {
                        match self.confirm.confirm("Do you want to delete this item?") {
                            Ok(true) => {}
                            Ok(false) => {
                                result.skipped_by_user += 1;
                                continue;
                            }
                            Err(err) => return Err(err.into()),
                        }
                    }

                    let media_id = match scored.part.id {
                        Some(id) => id,
                        None => {
                            error!("Media part {} has no id, cannot delete", display_path);
                            result.delete_errors += 1;
                            continue;
                        }
                    };

                    match self.transport.delete_media(&item.key, media_id) {
                        Ok(()) => {
                            println!("\t\tDeleted media item: {}", media_id);
                            self.audit.record_removal(display_path)?;
                            result.deleted += 1;
                        }
                        Err(err) => {
                            println!("\t\tError deleting media item: {}: {}", media_id, err);
                            result.delete_errors += 1;
                        }
                    }
                }
            }
        }

        Ok(result)
    }
}
