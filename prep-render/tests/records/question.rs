use chrono::{TimeZone, Utc};
use prep_render::question::{Difficulty, QuestionType};
use prep_render::{Pipeline, Question, QuestionDraft};

const TWO_SUM: &str = include_str!("fixtures/two_sum.json");

#[test]
fn stored_question_renders() {
    let question: Question = serde_json::from_str(TWO_SUM).expect("fixture parses");
    assert_eq!(question.question_type, QuestionType::Coding);
    assert_eq!(question.difficulty_level, Difficulty::Easy);

    let html = question.render_content(&Pipeline::default());
    assert!(html.starts_with("<p class=\"prep-paragraph\">Given an array"));
    assert!(html.contains("<code class=\"language-python\">def two_sum(nums, target):\n    seen = {}"));
    assert!(html.contains("seen[n] = i</code>"));
    assert!(html.contains("<th class=\"prep-table-header\" style=\"text-align: center\">Time</th>"));
    assert_eq!(html.matches("<tr>").count(), 3);
}

#[test]
fn stored_question_page() {
    let question: Question = serde_json::from_str(TWO_SUM).expect("fixture parses");
    let page = question.render_page(&Pipeline::default());
    assert!(page.starts_with("<article class=\"prep-question\"><h1 class=\"prep-h1\">Two Sum</h1>"));
    assert!(page.contains("Acme · Coding · Easy · asked 2024-02-10 · by sam"));
    assert_eq!(page.matches("prep-tag").count(), 4);
}

#[test]
fn draft_to_stored_json() {
    let mut draft = QuestionDraft {
        title: "Course Schedule".into(),
        content: "Detect a cycle in a *directed* graph.".into(),
        question_type: Some(QuestionType::TechnicalRound),
        difficulty_level: Some(Difficulty::Medium),
        uploaded_by: " kai ".into(),
        ..QuestionDraft::default()
    };
    draft.add_tag("Graphs");
    draft.toggle_topic("Graph");

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    let question = draft.into_question(now).expect("draft is valid");
    let json = serde_json::to_string(&question).unwrap();
    let back: Question = serde_json::from_str(&json).unwrap();

    assert_eq!(back, question);
    assert_eq!(back.uploaded_by, "kai");
    assert_eq!(back.tags, vec!["graphs"]);
    assert!(json.contains("\"questionType\":\"Technical Round\""));
}
