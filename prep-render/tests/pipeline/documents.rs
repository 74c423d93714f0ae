//! Whole write-ups through the full pipeline.

use insta::assert_snapshot;
use prep_render::{render, Pipeline, RenderOptions};

const TWO_SUM: &str = "# Two Sum

Given an array `nums`, return **indices**.

- use a hash map
- one pass

| Approach | Time |
|---|---|
| Brute | O(n^2) |

> Hint: complement

---
";

#[test]
fn question_write_up() {
    assert_eq!(
        render(TWO_SUM),
        concat!(
            "<h1 class=\"prep-h1\">Two Sum</h1> ",
            "<p class=\"prep-paragraph\">Given an array <code class=\"prep-inline-code\">nums</code>, ",
            "return <strong class=\"prep-strong\">indices</strong>.</p> ",
            "<ul class=\"prep-list\"><li class=\"prep-list-item prep-list-level-0\">use a hash map</li>",
            "<li class=\"prep-list-item prep-list-level-0\">one pass</li></ul> ",
            "<table class=\"prep-table\"><thead><tr><th class=\"prep-table-header\">Approach</th>",
            "<th class=\"prep-table-header\">Time</th></tr></thead><tbody><tr>",
            "<td class=\"prep-table-cell\">Brute</td><td class=\"prep-table-cell\">O(n^2)</td>",
            "</tr></tbody></table> ",
            "<blockquote class=\"prep-blockquote\"><p class=\"prep-quote-line\">Hint: complement</p></blockquote> ",
            "<hr class=\"prep-rule\" />"
        )
    );
}

#[test]
fn intermediate_stages() {
    let pipeline = Pipeline::default();
    assert_snapshot!(
        pipeline.run_through("> **tip**\n- a", "lists").unwrap(),
        @r#"
    <blockquote class="prep-blockquote"><p class="prep-quote-line"><strong class="prep-strong">tip</strong></p></blockquote>
    <ul class="prep-list"><li class="prep-list-item prep-list-level-0">a</li></ul>
    "#
    );
}

#[test]
fn code_answer_with_copy_button() {
    let pipeline = Pipeline::new(RenderOptions {
        copy_label: "Copy code".into(),
        ..RenderOptions::default()
    });
    assert_snapshot!(
        pipeline.run("Solution:\n```rust\nfn two_sum() {}\n```"),
        @r#"<p class="prep-paragraph">Solution:</p> <div class="prep-code-block"><div class="prep-code-header"><span>rust</span><button type="button" class="prep-copy-button" data-action="copy-code">Copy code</button></div><pre class="prep-code-body"><code class="language-rust">fn two_sum() {}</code></pre></div>"#
    );
}

#[test]
fn kind_change_splits_nested_lists() {
    let html = render("1. sort\n2. scan\n   - left pointer\n- note");
    assert_eq!(html.matches("<ol").count(), 1);
    assert_eq!(html.matches("<ul").count(), 1);
    assert!(html.contains("</ol> <ul"));
    assert!(html.contains("prep-list-level-1\">left pointer</li>"));
}
