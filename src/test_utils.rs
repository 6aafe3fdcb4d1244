#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::models::domain::QuestionKind;
    use crate::models::dto::request::GenerateStoryRequest;

    /// Request from the end-to-end walkthrough: two short answer questions.
    pub fn turtle_request() -> GenerateStoryRequest {
        GenerateStoryRequest::new("a brave turtle", 2, vec![QuestionKind::ShortAnswer])
    }

    /// Model reply carrying `count` multiple choice questions.
    pub fn mcq_reply(count: usize) -> String {
        let mcqs: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "question": format!("Choice question {}?", i),
                    "options": ["x", "y", "z"],
                    "correct_option": 1
                })
            })
            .collect();
        json!({ "story": "Story for mcq.", "mcqs": mcqs }).to_string()
    }

    /// Model reply carrying `count` true/false questions.
    pub fn true_false_reply(count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "question": format!("Statement {}", i),
                    "options": ["True", "False"],
                    "correct_answer": i % 2 == 1,
                    "explanation": format!("Because of line {}.", i)
                })
            })
            .collect();
        json!({ "story": "Story for true false.", "true_false_questions": questions }).to_string()
    }

    /// Model reply carrying `count` short answer questions.
    pub fn short_answer_reply(count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "question": format!("Short question {}?", i),
                    "correct_answer": format!("Answer {}.", i)
                })
            })
            .collect();
        json!({ "story": "Story for short answer.", "short_answer_questions": questions })
            .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::SchemaDescriptor;

    #[test]
    fn test_fixture_replies_match_their_schemas() {
        assert!(SchemaDescriptor::McqArray.parse(&mcq_reply(2)).is_ok());
        assert!(SchemaDescriptor::TrueFalseArray.parse(&true_false_reply(2)).is_ok());
        assert!(SchemaDescriptor::ShortAnswerArray
            .parse(&short_answer_reply(2))
            .is_ok());
    }

    #[test]
    fn test_fixtures_turtle_request() {
        let request = turtle_request();
        assert_eq!(request.question_count, 2);
        assert!(request.check().is_ok());
    }
}
