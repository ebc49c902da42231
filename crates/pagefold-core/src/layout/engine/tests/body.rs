//! Tests for body section parsing and merging

use crate::layout::engine::body::BodySection;
use crate::layout::error::LayoutError;

fn parse(original: &str) -> BodySection {
    BodySection::parse("test.html", original, 0).unwrap()
}

#[test]
fn test_parse_body_with_attributes() {
    let body = parse("<html><body class=\"site\" id=\"top\">content</body></html>");
    assert_eq!(body.tag_attributes(), Some(" class=\"site\" id=\"top\""));
    assert_eq!(body.inner(), "content");
}

#[test]
fn test_parse_body_without_attributes() {
    let body = parse("<body>content</body>");
    assert_eq!(body.tag_attributes(), Some(""));
    assert_eq!(body.inner(), "content");
}

#[test]
fn test_closing_tag_is_last_occurrence() {
    // markup that merely looks like a closing tag must not end the section
    let original = "<body>\n<pre>&lt;/body&gt; is written </body> here</pre>\n</body>";
    let body = parse(original);
    assert!(body.inner().contains("here</pre>"));
}

#[test]
fn test_bodyless_snippet_keeps_whole_text() {
    let body = parse("<div>fragment</div>");
    assert_eq!(body.inner(), "<div>fragment</div>");
    assert_eq!(body.tag_attributes(), None);

    let mut out = String::new();
    body.render(&mut out);
    assert_eq!(out, "<div>fragment</div>");
}

#[test]
fn test_scan_starts_after_head() {
    // "<body" inside head content is not the body tag
    let original = "<head><meta name=\"x\" content=\"<body\"/></head><body>real</body>";
    let search_from = original.find("</head>").unwrap() + "</head>".len();
    let body = BodySection::parse("test.html", original, search_from).unwrap();
    assert_eq!(body.inner(), "real");
}

#[test]
fn test_render_with_body_closes_document() {
    let body = parse("<body class=\"a\">inner</body>");
    let mut out = String::new();
    body.render(&mut out);
    assert_eq!(out, "<body class=\"a\">\ninner\n</body>\n</html>\n");
}

#[test]
fn test_merge_replaces_placeholder() {
    let mut parent = parse("<body><div id=\"layout-body\"></div></body>");
    let child = parse("<body><p>child</p></body>");
    parent.merge_with(child);
    assert_eq!(parent.inner(), "<p>child</p>");
}

#[test]
fn test_merge_without_placeholder_keeps_parent_content() {
    let mut parent = parse("<body><div>static</div></body>");
    let child = parse("<body><p>child</p></body>");
    parent.merge_with(child);
    assert_eq!(parent.inner(), "<div>static</div>");
}

#[test]
fn test_merge_nonempty_child_attributes_take_over() {
    let mut parent = parse("<body class=\"parent\">x</body>");
    let child = parse("<body class=\"child\">y</body>");
    parent.merge_with(child);
    assert_eq!(parent.tag_attributes(), Some(" class=\"child\""));
}

#[test]
fn test_merge_empty_child_attributes_keep_parent() {
    let mut parent = parse("<body class=\"parent\">x</body>");
    let child = parse("<body>y</body>");
    parent.merge_with(child);
    assert_eq!(parent.tag_attributes(), Some(" class=\"parent\""));
}

#[test]
fn test_error_missing_body_tag_terminator() {
    let result = BodySection::parse("broken.html", "<body class=\"x\"", 0);
    match result {
        Err(LayoutError::MalformedTemplate { template, message, .. }) => {
            assert_eq!(template, "broken.html");
            assert!(message.contains("'>'"));
        }
        other => panic!("Expected MalformedTemplate, got {:?}", other),
    }
}

#[test]
fn test_error_missing_body_end() {
    let result = BodySection::parse("broken.html", "<body>content", 0);
    match result {
        Err(LayoutError::MalformedTemplate { message, .. }) => {
            assert!(message.contains("</body>"));
        }
        other => panic!("Expected MalformedTemplate, got {:?}", other),
    }
}
