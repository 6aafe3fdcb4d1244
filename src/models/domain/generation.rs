use serde::{Deserialize, Serialize};

use super::question::{
    MultipleChoiceQuestion, QuestionKind, ShortAnswerQuestion, TrueFalseQuestion,
};

/// Questions of a single kind, keyed by the array name used in model replies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuestionSet {
    #[serde(rename = "mcqs")]
    MultipleChoice(Vec<MultipleChoiceQuestion>),
    #[serde(rename = "true_false_questions")]
    TrueFalse(Vec<TrueFalseQuestion>),
    #[serde(rename = "short_answer_questions")]
    ShortAnswer(Vec<ShortAnswerQuestion>),
}

impl QuestionSet {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionSet::MultipleChoice(_) => QuestionKind::MultipleChoice,
            QuestionSet::TrueFalse(_) => QuestionKind::TrueFalse,
            QuestionSet::ShortAnswer(_) => QuestionKind::ShortAnswer,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QuestionSet::MultipleChoice(questions) => questions.len(),
            QuestionSet::TrueFalse(questions) => questions.len(),
            QuestionSet::ShortAnswer(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps the first `count` questions; shorter sets are left untouched.
    pub fn truncate(&mut self, count: usize) {
        match self {
            QuestionSet::MultipleChoice(questions) => questions.truncate(count),
            QuestionSet::TrueFalse(questions) => questions.truncate(count),
            QuestionSet::ShortAnswer(questions) => questions.truncate(count),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    pub story: String,
    pub question_sets: Vec<QuestionSet>,
}

impl GenerationResult {
    pub fn new(story: impl Into<String>, question_sets: Vec<QuestionSet>) -> Self {
        Self {
            story: story.into(),
            question_sets,
        }
    }

    pub fn truncate(&mut self, count: usize) {
        for set in &mut self.question_sets {
            set.truncate(count);
        }
    }

    pub fn question_set(&self, kind: QuestionKind) -> Option<&QuestionSet> {
        self.question_sets.iter().find(|set| set.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_answers(count: usize) -> Vec<ShortAnswerQuestion> {
        (0..count)
            .map(|i| ShortAnswerQuestion {
                question: format!("Question {}", i),
                correct_answer: format!("Answer {}", i),
            })
            .collect()
    }

    fn multiple_choices(count: usize) -> Vec<MultipleChoiceQuestion> {
        (0..count)
            .map(|i| MultipleChoiceQuestion {
                question: format!("Question {}", i),
                options: vec!["x".to_string(), "y".to_string()],
                correct_option: 0,
            })
            .collect()
    }

    fn true_falses(count: usize) -> Vec<TrueFalseQuestion> {
        (0..count)
            .map(|i| TrueFalseQuestion {
                question: format!("Statement {}", i),
                options: vec!["True".to_string(), "False".to_string()],
                correct_answer: i % 2 == 0,
                explanation: format!("Explanation {}", i),
            })
            .collect()
    }

    fn set_of(kind: QuestionKind, count: usize) -> QuestionSet {
        match kind {
            QuestionKind::MultipleChoice => QuestionSet::MultipleChoice(multiple_choices(count)),
            QuestionKind::TrueFalse => QuestionSet::TrueFalse(true_falses(count)),
            QuestionKind::ShortAnswer => QuestionSet::ShortAnswer(short_answers(count)),
        }
    }

    #[test]
    fn test_truncate_keeps_first_items_in_order() {
        let mut result = GenerationResult::new(
            "story",
            vec![QuestionSet::ShortAnswer(short_answers(5))],
        );

        result.truncate(2);

        assert_eq!(
            result.question_sets,
            vec![QuestionSet::ShortAnswer(short_answers(2))]
        );
    }

    #[test]
    fn test_truncate_never_pads_short_sets() {
        let mut result = GenerationResult::new(
            "story",
            vec![
                QuestionSet::ShortAnswer(short_answers(1)),
                QuestionSet::TrueFalse(vec![]),
            ],
        );

        result.truncate(4);

        assert_eq!(result.question_sets[0].len(), 1);
        assert!(result.question_sets[1].is_empty());
    }

    #[test]
    fn test_truncate_yields_min_of_count_and_length() {
        for kind in QuestionKind::ALL {
            for count in 0..6 {
                for available in 0..6 {
                    let mut set = set_of(kind, available);
                    set.truncate(count);
                    assert_eq!(set.len(), count.min(available), "{} {}/{}", kind, count, available);
                    assert_eq!(set.kind(), kind);
                }
            }
        }
    }

    #[test]
    fn test_truncate_true_false_keeps_leading_statements() {
        let mut result = GenerationResult::new(
            "story",
            vec![QuestionSet::TrueFalse(true_falses(5))],
        );

        result.truncate(2);

        assert_eq!(
            result.question_sets,
            vec![QuestionSet::TrueFalse(true_falses(2))]
        );
    }

    #[test]
    fn test_question_set_serializes_under_reply_key() {
        let set = QuestionSet::ShortAnswer(short_answers(1));
        let value = serde_json::to_value(&set).expect("should serialize");

        assert!(value.get("short_answer_questions").is_some());
    }

    #[test]
    fn test_question_set_lookup_by_kind() {
        let result = GenerationResult::new(
            "story",
            vec![QuestionSet::ShortAnswer(short_answers(1))],
        );

        assert!(result.question_set(QuestionKind::ShortAnswer).is_some());
        assert!(result.question_set(QuestionKind::MultipleChoice).is_none());
    }
}
