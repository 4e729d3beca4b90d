//! Bulk ranking of postings for a profile and profiles for a posting

use crate::config::{RankingConfig, TieBreak};
use crate::matching::scorer::MatchScorer;
use crate::models::{
    Application, ApplicationStatus, Posting, PostingId, Profile, ProfileId,
};
use crate::store::{ApplicationLookup, ApplicationRegistry, DocumentLookup};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPosting {
    pub posting_id: PostingId,
    pub title: String,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProfile {
    pub profile_id: ProfileId,
    pub name: String,
    pub match_score: f64,
    pub has_applied: bool,
    pub application_status: Option<ApplicationStatus>,
    /// Score of the profile's stored resume, 0 when none is stored.
    pub document_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortlistAction {
    /// An existing application was moved to shortlisted.
    Updated,
    /// A new shortlisted application was recorded.
    Created,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub profile_id: ProfileId,
    pub name: String,
    pub match_score: f64,
    pub action: ShortlistAction,
}

/// Scores every counterpart and orders them by descending score.
pub struct Ranker<'a> {
    scorer: &'a MatchScorer,
    tie_break: TieBreak,
}

impl<'a> Ranker<'a> {
    pub fn new(scorer: &'a MatchScorer, config: &RankingConfig) -> Self {
        Self {
            scorer,
            tie_break: config.tie_break,
        }
    }

    /// Active postings the profile has not applied to, best first.
    pub fn rank_postings<'p>(
        &self,
        profile: &Profile,
        postings: impl IntoIterator<Item = &'p Posting>,
        prior_document_score: Option<u32>,
        applications: &dyn ApplicationLookup,
        limit: usize,
    ) -> Vec<RankedPosting> {
        let mut ranked: Vec<RankedPosting> = postings
            .into_iter()
            .filter(|posting| posting.is_active)
            .filter(|posting| !applications.has_applied(profile.id, posting.id))
            .map(|posting| {
                let breakdown = self.scorer.breakdown(profile, posting, prior_document_score);
                RankedPosting {
                    posting_id: posting.id,
                    title: posting.title.clone(),
                    match_score: breakdown.total,
                    matched_skills: breakdown.skill_match.matched,
                    missing_skills: breakdown.skill_match.missing,
                }
            })
            .collect();

        debug!("Scored {} candidate postings for profile {}", ranked.len(), profile.id);
        self.sort(&mut ranked, |r| (r.match_score, r.posting_id));
        ranked.truncate(limit);
        ranked
    }

    /// All profiles scored against the posting, best first, annotated with application state.
    pub fn rank_profiles<'p, S>(
        &self,
        posting: &Posting,
        profiles: impl IntoIterator<Item = &'p Profile>,
        store: &S,
        limit: usize,
    ) -> Vec<RankedProfile>
    where
        S: ApplicationLookup + DocumentLookup + ?Sized,
    {
        let mut ranked: Vec<RankedProfile> = profiles
            .into_iter()
            .map(|profile| {
                let document_score = store.document_for(profile.id).map(|d| d.score);
                let status = store.application_status(profile.id, posting.id);
                RankedProfile {
                    profile_id: profile.id,
                    name: profile.name.clone(),
                    match_score: self
                        .scorer
                        .calculate_ai_match_score(profile, posting, document_score),
                    has_applied: status.is_some(),
                    application_status: status,
                    document_score: document_score.unwrap_or(0),
                }
            })
            .collect();

        debug!("Scored {} profiles for posting {}", ranked.len(), posting.id);
        self.sort(&mut ranked, |r| (r.match_score, r.profile_id));
        ranked.truncate(limit);
        ranked
    }

    /// Shortlist the top `count` profiles for a posting.
    ///
    /// Existing applications move to shortlisted; profiles without one get a
    /// new shortlisted application carrying the computed score.
    pub fn shortlist<S>(
        &self,
        posting: &Posting,
        profiles: &[Profile],
        store: &mut S,
        count: usize,
    ) -> Vec<ShortlistEntry>
    where
        S: ApplicationRegistry + DocumentLookup,
    {
        let top = self.rank_profiles(posting, profiles, &*store, count);
        let mut entries = Vec::with_capacity(top.len());

        for candidate in top {
            let action = if store.update_status(candidate.profile_id, posting.id, ApplicationStatus::Shortlisted) {
                ShortlistAction::Updated
            } else {
                store.record(Application {
                    profile_id: candidate.profile_id,
                    posting_id: posting.id,
                    status: ApplicationStatus::Shortlisted,
                    match_percentage: candidate.match_score,
                    applied_at: Utc::now(),
                });
                ShortlistAction::Created
            };

            entries.push(ShortlistEntry {
                profile_id: candidate.profile_id,
                name: candidate.name,
                match_score: candidate.match_score,
                action,
            });
        }

        info!("Shortlisted {} profiles for posting {}", entries.len(), posting.id);
        entries
    }

    /// Descending by score. `sort_by` is stable, so equal scores keep input order
    /// unless ties are broken by id.
    fn sort<T>(&self, items: &mut [T], key: impl Fn(&T) -> (f64, u64)) {
        let tie_break = self.tie_break;
        items.sort_by(|a, b| {
            let (score_a, id_a) = key(a);
            let (score_b, id_b) = key(b);
            let by_score = score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal);
            match tie_break {
                TieBreak::InputOrder => by_score,
                TieBreak::Id => by_score.then(id_a.cmp(&id_b)),
            }
        });
    }
}
