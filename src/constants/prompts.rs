pub const STORY_PROMPT: &str = "Generate a story about {topic} that is at least {line_count} lines long. Ensure each line has more than 30 words[[most important]].";

pub const MCQ_PROMPT: &str = "Generate strictly only {count} multiple choice questions based on the story and their correct answers. Ensure the options are shuffled and not predictable. Do not repeat questions.";

pub const TRUE_FALSE_PROMPT: &str = "Generate strictly only {count} True/False questions based on the story and their correct answers with explanations. Do not repeat questions.";

pub const SHORT_ANSWER_PROMPT: &str = "Generate strictly only {count} short answer questions based on the story with answers that are strictly 5 lines long and detailed. Do not repeat questions.";

pub const JSON_FORMAT_INSTRUCTIONS: &str = r#"The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {"properties": {"foo": {"title": "Foo", "description": "a list of strings", "type": "array", "items": {"type": "string"}}}, "required": ["foo"]}
the object {"foo": ["bar", "baz"]} is a well-formatted instance of the schema. The object {"properties": {"foo": ["bar", "baz"]}} is not well-formatted.

Here is the output schema:
```
{schema}
```"#;
