use chrono::{Duration, TimeZone, Utc};
use prep_render::{ChatSession, Pipeline};

const SESSION: &str = include_str!("fixtures/session.json");

#[test]
fn saved_session_resumes() {
    let mut session = ChatSession::from_json(SESSION).expect("fixture parses");
    assert_eq!(session.messages.len(), 3);

    let later = Utc.with_ymd_and_hms(2024, 5, 4, 9, 35, 0).unwrap();
    session.push_user_message("and the BFS version on a graph?", later);
    let stats = session.stats(later + Duration::seconds(10));
    assert_eq!(stats.questions_asked, 2);
    assert_eq!(stats.favorite_topics, vec!["linkedlist", "graphs"]);
    assert_eq!(stats.session_duration, 310);
    assert_eq!(session.messages.last().map(|m| m.id), Some(4));
}

#[test]
fn transcript_uses_inline_formatter_by_default() {
    let session = ChatSession::from_json(SESSION).expect("fixture parses");
    let html = session.render_transcript(&Pipeline::default());
    assert!(html.contains("Use <strong>Floyd's</strong> algorithm:<br /><code>slow</code>"));
    assert!(!html.contains("prep-chat-time"));
}

#[test]
fn transcript_with_markdown_rendering() {
    let mut session = ChatSession::from_json(SESSION).expect("fixture parses");
    session.settings.render_markdown = true;
    let html = session.render_transcript(&Pipeline::default());
    assert!(html.contains("<strong class=\"prep-strong\">Floyd's</strong>"));
    assert!(html.contains("<code class=\"prep-inline-code\">slow</code>"));
}
