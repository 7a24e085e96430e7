use super::domain::PersonalityCategory;
use crate::percent::rounded_percentage;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: PersonalityCategory,
    pub percentage: u32,
}

/// Ranked share of each personality for one respondent. Always holds all
/// four categories, highest percentage first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    entries: Vec<CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("cannot score an empty answer sequence")]
    EmptyAnswers,
}

impl ScoreDistribution {
    /// Result reconstructed from a shared link: the linked category at 100%.
    pub fn shared_link(category: PersonalityCategory) -> Self {
        let counts = PersonalityCategory::ordered().map(|candidate| usize::from(candidate == category));
        Self::from_counts(counts, 1)
    }

    fn from_counts(counts: [usize; 4], total: usize) -> Self {
        let mut entries: Vec<CategoryScore> = PersonalityCategory::ordered()
            .into_iter()
            .map(|category| CategoryScore {
                category,
                percentage: rounded_percentage(counts[category.index()], total),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.percentage
                .cmp(&a.percentage)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryScore] {
        &self.entries
    }

    /// The winning personality.
    pub fn top(&self) -> CategoryScore {
        self.entries[0]
    }

    pub fn percentage_of(&self, category: PersonalityCategory) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.percentage)
            .unwrap_or(0)
    }
}

/// Tallies the answers and ranks every category by its rounded share.
pub fn score(answers: &[PersonalityCategory]) -> Result<ScoreDistribution, ScoringError> {
    if answers.is_empty() {
        return Err(ScoringError::EmptyAnswers);
    }

    let mut counts = [0usize; 4];
    for answer in answers {
        counts[answer.index()] += 1;
    }

    Ok(ScoreDistribution::from_counts(counts, answers.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::PersonalityCategory::*;

    #[test]
    fn majority_category_ranks_first() {
        let distribution = score(&[Mindful, Mindful, Mindful, Classic, Explorer, Mindful])
            .expect("non-empty answers score");
        assert_eq!(distribution.top().category, Mindful);
        assert_eq!(distribution.top().percentage, 67);
        assert_eq!(distribution.percentage_of(Classic), 17);
        assert_eq!(distribution.percentage_of(Adventurer), 0);
    }

    #[test]
    fn ties_fall_back_to_declaration_order() {
        let distribution = score(&[Mindful, Adventurer, Classic, Explorer, Mindful, Explorer])
            .expect("non-empty answers score");
        let order: Vec<_> = distribution
            .entries()
            .iter()
            .map(|entry| entry.category)
            .collect();
        assert_eq!(order, vec![Explorer, Mindful, Classic, Adventurer]);
    }

    #[test]
    fn empty_answers_are_rejected() {
        assert_eq!(score(&[]), Err(ScoringError::EmptyAnswers));
    }

    #[test]
    fn shared_link_puts_linked_category_first() {
        let distribution = ScoreDistribution::shared_link(Mindful);
        assert_eq!(distribution.top(), CategoryScore { category: Mindful, percentage: 100 });
        assert_eq!(
            distribution.entries()[1..]
                .iter()
                .map(|entry| entry.percentage)
                .collect::<Vec<_>>(),
            vec![0, 0, 0]
        );
    }
}
