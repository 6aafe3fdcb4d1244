use maud::{html, Markup, DOCTYPE};

use crate::models::{
    domain::QuestionKind,
    dto::{request::StoryForm, response::RenderedStory},
};

pub const APP_TITLE: &str = "KIDS-PLANET";

const CSS: &str = "
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
form { display: grid; gap: 0.5rem; margin-bottom: 2rem; }
.error { color: #b00020; }
.question pre { white-space: pre-wrap; margin: 0 0 1rem; }
";

pub fn page(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (APP_TITLE) }
                style { (CSS) }
            }
            body {
                main {
                    h1 { (APP_TITLE) }
                    (body)
                }
            }
        }
    }
}

pub fn story_form(form: &StoryForm, error: Option<&str>) -> Markup {
    let count = if form.question_count.trim().is_empty() {
        "1"
    } else {
        form.question_count.as_str()
    };

    html! {
        form method="post" action="/" {
            label for="topic" { "Enter the topic of the story:" }
            input type="text" id="topic" name="topic" value=(form.topic);

            label for="question_count" { "Number of questions:" }
            input type="number" id="question_count" name="question_count" min="1" step="1" value=(count);

            label for="question_kinds" { "Select question types:" }
            select id="question_kinds" name="question_kinds" multiple {
                @for kind in QuestionKind::ALL {
                    option value=(kind.as_str()) selected[form.is_selected(kind)] { (kind.label()) }
                }
            }

            @if let Some(message) = error {
                p.error role="alert" { (message) }
            }

            button type="submit" { "SUBMIT" }
        }
    }
}

pub fn story_results(rendered: &RenderedStory) -> Markup {
    html! {
        section.story {
            h2 { "Generated Story:" }
            @for paragraph in rendered.paragraphs.iter().filter(|p| !p.is_empty()) {
                p { (paragraph) }
            }
        }
        @for section in &rendered.sections {
            section.questions {
                h2 { (section.heading) }
                @for question in &section.questions {
                    div.question {
                        pre { (question.lines.join("\n")) }
                    }
                }
            }
        }
    }
}

/// The form page, optionally followed by an inline error or generated content.
pub fn index(form: &StoryForm, error: Option<&str>, rendered: Option<&RenderedStory>) -> Markup {
    page(html! {
        (story_form(form, error))
        @if let Some(rendered) = rendered {
            (story_results(rendered))
        }
    })
}
