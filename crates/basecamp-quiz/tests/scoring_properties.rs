use basecamp_quiz::quiz::{score, PersonalityCategory, QuizDefinition, ScoreDistribution};

fn every_answer_sequence(length: u32) -> impl Iterator<Item = Vec<PersonalityCategory>> {
    let categories = PersonalityCategory::ordered();
    (0..4usize.pow(length)).map(move |mut code| {
        (0..length)
            .map(|_| {
                let category = categories[code % 4];
                code /= 4;
                category
            })
            .collect()
    })
}

#[test]
fn percentages_cover_every_category_and_sum_near_one_hundred() {
    for answers in every_answer_sequence(6) {
        let distribution = score(&answers).expect("six answers score");
        let entries = distribution.entries();
        assert_eq!(entries.len(), 4);
        for category in PersonalityCategory::ordered() {
            assert_eq!(
                entries.iter().filter(|entry| entry.category == category).count(),
                1,
                "{category} appears exactly once for {answers:?}"
            );
        }

        let total: u32 = entries.iter().map(|entry| entry.percentage).sum();
        assert!(
            (97..=103).contains(&total),
            "percentages for {answers:?} sum to {total}"
        );
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].percentage >= pair[1].percentage));
    }
}

#[test]
fn scoring_ignores_answer_order() {
    use basecamp_quiz::quiz::PersonalityCategory::*;
    let answers = vec![Explorer, Classic, Explorer, Mindful, Adventurer, Explorer];
    let expected = score(&answers).expect("answers score");

    let mut reversed = answers.clone();
    reversed.reverse();
    assert_eq!(score(&reversed).expect("answers score"), expected);

    let mut rotated = answers.clone();
    rotated.rotate_left(2);
    assert_eq!(score(&rotated).expect("answers score"), expected);

    let mut sorted = answers;
    sorted.sort();
    assert_eq!(score(&sorted).expect("answers score"), expected);
}

#[test]
fn shared_link_distribution_for_every_category() {
    for category in PersonalityCategory::ordered() {
        let distribution = ScoreDistribution::shared_link(category);
        let percentages: Vec<u32> = distribution
            .entries()
            .iter()
            .map(|entry| entry.percentage)
            .collect();
        assert_eq!(percentages, vec![100, 0, 0, 0]);
        assert_eq!(distribution.top().category, category);
    }
}

#[test]
fn every_question_offers_each_category_once() {
    let quiz = QuizDefinition::standard();
    assert_eq!(quiz.question_count(), 6);

    for (position, question) in quiz.questions().iter().enumerate() {
        assert_eq!(usize::from(question.id), position + 1);
        let mut offered: Vec<_> = question
            .answers
            .iter()
            .map(|answer| answer.personality)
            .collect();
        offered.sort();
        assert_eq!(offered, PersonalityCategory::ordered().to_vec());
    }

    for category in PersonalityCategory::ordered() {
        assert_eq!(quiz.profile(category).category, category);
    }
}
