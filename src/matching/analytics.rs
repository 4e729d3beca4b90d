//! Skill demand counts across postings and applicants

use crate::models::{Application, Posting, PostingId, Profile, ProfileId};
use crate::processing::vocabulary::title_case;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub top_skills: Vec<SkillCount>,
    pub postings_with_skills: usize,
}

/// Most requested skills across postings.
pub fn skill_demand(postings: &[Posting], top_n: usize) -> SkillDemand {
    let mut counter = SkillCounter::default();
    for posting in postings {
        counter.add_all(posting.required_skills.iter());
    }

    SkillDemand {
        top_skills: counter.most_common(top_n),
        postings_with_skills: postings
            .iter()
            .filter(|p| !p.required_skills.is_empty())
            .count(),
    }
}

/// Most common skills among applicants to the given postings.
///
/// Each applicant counts once, however many of the postings they applied to.
pub fn top_applicant_skills(
    applications: &[Application],
    profiles: &[Profile],
    posting_ids: &[PostingId],
    top_n: usize,
) -> Vec<SkillCount> {
    let mut applicants: Vec<ProfileId> = Vec::new();
    for application in applications
        .iter()
        .filter(|a| posting_ids.contains(&a.posting_id))
    {
        if !applicants.contains(&application.profile_id) {
            applicants.push(application.profile_id);
        }
    }

    let mut counter = SkillCounter::default();
    for profile_id in applicants {
        if let Some(profile) = profiles.iter().find(|p| p.id == profile_id) {
            counter.add_all(profile.skills.iter());
        }
    }
    counter.most_common(top_n)
}

/// Counts lower-cased skills, remembering first-seen order for ties.
#[derive(Default)]
struct SkillCounter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl SkillCounter {
    fn add_all<'a>(&mut self, skills: impl Iterator<Item = &'a str>) {
        for skill in skills {
            let key = skill.to_lowercase();
            match self.counts.get_mut(&key) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(key.clone(), 1);
                    self.order.push(key);
                }
            }
        }
    }

    fn most_common(self, top_n: usize) -> Vec<SkillCount> {
        let mut ranked: Vec<SkillCount> = self
            .order
            .into_iter()
            .map(|skill| SkillCount {
                count: self.counts.get(&skill).copied().unwrap_or(0),
                skill: title_case(&skill),
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);
        ranked
    }
}
