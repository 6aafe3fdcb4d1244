use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    domain::{
        GenerationResult, MultipleChoiceQuestion, QuestionSet, ShortAnswerQuestion,
        TrueFalseQuestion,
    },
    dto::response::{QuestionSection, RenderedQuestion, RenderedStory},
};

/// Sentence terminator followed by the spaces that separate it from the next sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?] +").expect("SENTENCE_BOUNDARY is a valid regex pattern")
});

/// Splits after `.`, `!` or `?` followed by one or more spaces. The
/// terminator stays with its sentence and the spaces are dropped.
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // terminators are single-byte ASCII
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Groups sentences into three paragraphs: two of `n / 4` sentences and one
/// holding the rest. Stories with fewer than three sentences stay whole.
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    let sentences = split_into_sentences(text);
    let count = sentences.len();
    if count < 3 {
        return vec![text.trim().to_string()];
    }

    let part_size = count / 4;
    vec![
        join_sentences(&sentences[..part_size]),
        join_sentences(&sentences[part_size..2 * part_size]),
        join_sentences(&sentences[2 * part_size..]),
    ]
}

fn join_sentences(sentences: &[&str]) -> String {
    sentences.join(" ").trim().to_string()
}

/// `a` for 0, `b` for 1 and so on. Indices that do not map to a character render as `?`.
pub fn option_label(index: i64) -> char {
    index
        .checked_add(97)
        .and_then(|code| u32::try_from(code).ok())
        .and_then(char::from_u32)
        .unwrap_or('?')
}

pub fn render(result: &GenerationResult) -> RenderedStory {
    RenderedStory {
        paragraphs: split_into_paragraphs(&result.story),
        sections: result.question_sets.iter().map(render_section).collect(),
    }
}

fn render_section(set: &QuestionSet) -> QuestionSection {
    let questions = match set {
        QuestionSet::MultipleChoice(questions) => number(questions, multiple_choice_lines),
        QuestionSet::TrueFalse(questions) => number(questions, true_false_lines),
        QuestionSet::ShortAnswer(questions) => number(questions, short_answer_lines),
    };

    QuestionSection {
        kind: set.kind(),
        heading: set.kind().heading().to_string(),
        questions,
    }
}

fn number<T>(questions: &[T], lines: fn(usize, &T) -> Vec<String>) -> Vec<RenderedQuestion> {
    questions
        .iter()
        .enumerate()
        .map(|(idx, question)| RenderedQuestion {
            number: idx + 1,
            lines: lines(idx + 1, question),
        })
        .collect()
}

fn multiple_choice_lines(number: usize, mcq: &MultipleChoiceQuestion) -> Vec<String> {
    let mut lines = vec![format!("{}. {}", number, mcq.question)];
    lines.extend(
        mcq.options
            .iter()
            .enumerate()
            .map(|(idx, option)| format!("   {}. {}", option_label(idx as i64), option)),
    );
    lines.push(format!("   Correct Option: {}", option_label(mcq.correct_option)));
    lines
}

fn true_false_lines(number: usize, tf: &TrueFalseQuestion) -> Vec<String> {
    let mut lines = vec![format!("{}. {}", number, tf.question)];
    if !tf.options.is_empty() {
        lines.push("   Options:".to_string());
        lines.extend(
            tf.options
                .iter()
                .enumerate()
                .map(|(idx, option)| format!("      {}. {}", option_label(idx as i64), option)),
        );
    }
    let answer = if tf.correct_answer { "True" } else { "False" };
    lines.push(format!("   Correct Answer: {}", answer));
    lines.push(format!("   Explanation: {}", tf.explanation));
    lines
}

fn short_answer_lines(number: usize, sa: &ShortAnswerQuestion) -> Vec<String> {
    vec![
        format!("{}. {}", number, sa.question),
        format!("   Expected Answer: {}", sa.correct_answer),
    ]
}
