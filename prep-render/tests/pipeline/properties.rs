//! Behavior every rendering must show, one construct at a time.

use prep_render::{render, Pipeline, RenderOptions};

#[test]
fn script_tags_are_escaped() {
    assert_eq!(
        render("<script>alert(1)</script>"),
        "<p class=\"prep-paragraph\">&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
}

#[test]
fn ampersands_in_code_are_escaped_once() {
    let html = render("```\na && b\n```");
    assert!(html.contains(">a &amp;&amp; b</code>"));
}

#[test]
fn code_block_keeps_its_newlines() {
    let html = render("```python\ndef f():\n    return 1\n```");
    assert!(html.contains("<code class=\"language-python\">def f():\n    return 1</code>"));
    assert!(html.contains("<span>python</span>"));
}

#[test]
fn code_block_without_language_uses_default() {
    let html = render("```\nx = 1\n```");
    assert!(html.contains("<span>text</span>"));
    assert!(html.contains("<code class=\"language-text\">"));
}

#[test]
fn configured_default_language() {
    let pipeline = Pipeline::new(RenderOptions {
        default_language: "plaintext".into(),
        ..RenderOptions::default()
    });
    assert!(pipeline
        .run("```\nx\n```")
        .contains("<code class=\"language-plaintext\">"));
}

#[test]
fn markdown_inside_code_is_literal() {
    let html = render("```md\n# not a heading\n- not a list\n| not | a table |\n```");
    assert!(!html.contains("<h1"));
    assert!(!html.contains("<ul"));
    assert!(!html.contains("<table"));
    assert!(html.contains("# not a heading\n- not a list\n| not | a table |"));
}

#[test]
fn inline_code_wins_over_emphasis() {
    assert_eq!(
        render("`**x**`"),
        "<p class=\"prep-paragraph\"><code class=\"prep-inline-code\">**x**</code></p>"
    );
}

#[test]
fn header_weights() {
    assert_eq!(
        render("# A\n## B\n### C"),
        "<h1 class=\"prep-h1\">A</h1> <h2 class=\"prep-h2\">B</h2> <h3 class=\"prep-h3\">C</h3>"
    );
}

#[test]
fn fourth_level_heading_is_a_paragraph() {
    assert_eq!(render("#### D"), "<p class=\"prep-paragraph\">#### D</p>");
}

#[test]
fn table_round_trip() {
    assert_eq!(
        render("| A | B |\n|---|---|\n| 1 | 2 |"),
        concat!(
            "<table class=\"prep-table\"><thead><tr>",
            "<th class=\"prep-table-header\">A</th><th class=\"prep-table-header\">B</th>",
            "</tr></thead><tbody><tr>",
            "<td class=\"prep-table-cell\">1</td><td class=\"prep-table-cell\">2</td>",
            "</tr></tbody></table>"
        )
    );
}

#[test]
fn header_only_table() {
    let html = render("| A | B |\n|---|---|");
    assert_eq!(html.matches("<tr>").count(), 1);
    assert!(!html.contains("<tbody>"));
}

#[test]
fn pipes_outside_tables() {
    let inline = render("Use `a | b` here");
    assert!(!inline.contains("<table"));
    assert!(inline.contains("<code class=\"prep-inline-code\">a | b</code>"));

    let link = render("[q](https://x.dev/?a=1|2)");
    assert!(!link.contains("<table"));
    assert!(link.contains("href=\"https://x.dev/?a=1|2\""));

    let label = render("See [a|b](https://x.dev) here");
    assert!(!label.contains("<table"));
    assert!(label.starts_with("<p class=\"prep-paragraph\">See <a href=\"https://x.dev\""));
    assert!(label.contains(">a|b</a> here</p>"));

    let heading = render("# A | B");
    assert_eq!(heading, "<h1 class=\"prep-h1\">A | B</h1>");
}

#[test]
fn list_grouping() {
    let html = render("- a\n- b\n- c");
    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<li").count(), 3);
}

#[test]
fn empty_input() {
    assert_eq!(render(""), "");
    assert_eq!(render("  \n\n\t\n"), "");
}

#[test]
fn bold_is_not_split_by_italic() {
    assert_eq!(
        render("**bold**"),
        "<p class=\"prep-paragraph\"><strong class=\"prep-strong\">bold</strong></p>"
    );
}

#[test]
fn emphasis_is_single_level() {
    let html = render("**a *b* c**");
    assert!(!html.contains("<strong"));
    assert!(html.contains("<em class=\"prep-em\">b</em>"));
}

#[test]
fn unterminated_fence_swallows_the_rest() {
    let html = render("before\n```js\nconst a = 1;\n# still code");
    assert!(html.starts_with("<p class=\"prep-paragraph\">before</p> <div class=\"prep-code-block\">"));
    assert!(html.contains("const a = 1;\n# still code</code>"));
    assert!(!html.contains("<h1"));
}

#[test]
fn sentinel_characters_in_input_are_neutralized() {
    let html = render("a\u{11}b\u{16}c");
    assert_eq!(html, "<p class=\"prep-paragraph\">a&#17;b&#22;c</p>");
}

#[test]
fn blockquote_lines_merge() {
    assert_eq!(
        render("> one\n> two"),
        "<blockquote class=\"prep-blockquote\"><p class=\"prep-quote-line\">one</p><p class=\"prep-quote-line\">two</p></blockquote>"
    );
}

#[test]
fn image_before_link() {
    let html = render("![graph](g.png)");
    assert!(html.contains("<img src=\"g.png\" alt=\"graph\" class=\"prep-image\" />"));
    assert!(!html.contains('!'));
}
