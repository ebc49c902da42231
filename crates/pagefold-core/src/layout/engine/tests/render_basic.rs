//! Composition tests for terminal documents (no parent layout)

use super::helpers::engine;

#[test]
fn test_terminal_document_renders_own_content() {
    let page = "<html>\n<head>\n  <title>Standalone</title>\n  <meta charset=\"utf-8\"/>\n\
                </head>\n<body>\n<div>content</div>\n</body>\n</html>\n";
    let result = engine(&[("page.html", page)]).render("page.html").unwrap();

    assert!(result.contains("<title>Standalone</title>"));
    assert!(result.contains("<meta charset=\"utf-8\"/>"));
    assert!(result.contains("<div>content</div>"));
    assert!(result.starts_with("<html>"));
    assert!(result.ends_with("</body>\n</html>\n"));
}

#[test]
fn test_terminal_document_resolves_variables() {
    let page = "<html>\n<head>\n  <title>Vars</title>\n\
                <template id=\"tagline\">Fold pages, not laundry</template>\n\
                </head>\n<body>\n<p>$tagline</p>\n</body>\n</html>\n";
    let result = engine(&[("page.html", page)]).render("page.html").unwrap();

    assert!(result.contains("<p>Fold pages, not laundry</p>"));
    assert!(!result.contains("<template"));
    assert!(!result.contains("$tagline"));
}

#[test]
fn test_terminal_document_first_variable_definition_wins() {
    let page = "<html>\n<head>\n<var id=\"x\">first</var>\n<var id=\"x\">second</var>\n\
                </head>\n<body>\n<p>$x</p>\n</body>\n</html>\n";
    let result = engine(&[("page.html", page)]).render("page.html").unwrap();
    assert!(result.contains("<p>first</p>"));
}

#[test]
fn test_terminal_document_renders_breadcrumbs() {
    let page = "<html>\n<head>\n  <title>Crumbs</title>\n\
                <meta name=\"bread1\" content=\"Here\" href=\"/here\"/>\n\
                <meta name=\"bread0\" content=\"Home\" href=\"/\"/>\n\
                </head>\n<body>\n<nav>$breadcrumb</nav>\n</body>\n</html>\n";
    let result = engine(&[("page.html", page)]).render("page.html").unwrap();

    assert!(result.contains(
        "<nav><a href=\"/\">Home</a>\
         <span class=\"sep\">&nbsp;/&nbsp;</span><span class=\"last\">Here</span></nav>"
    ));
    assert!(!result.contains("<meta name=\"bread"));
}

#[test]
fn test_terminal_document_strips_breadcrumb_token_without_crumbs() {
    let page = "<html>\n<head>\n  <title>T</title>\n</head>\n\
                <body>\n<nav>$breadcrumb</nav>\n</body>\n</html>\n";
    let result = engine(&[("page.html", page)]).render("page.html").unwrap();
    assert!(result.contains("<nav></nav>"));
}

#[test]
fn test_headless_snippet_passes_through() {
    let snippet = "<div>fragment $breadcrumb</div>";
    let result = engine(&[("frag.html", snippet)]).render("frag.html").unwrap();
    assert_eq!(result, "<div>fragment </div>");
}

#[test]
fn test_content_filter_runs_last() {
    use crate::layout::engine::LayoutEngine;
    use crate::source::StaticSource;

    let source = StaticSource::new().with("page.html", "<div>keep lowercase</div>");
    let engine = LayoutEngine::new(Box::new(source))
        .with_filter(Box::new(|content: String| content.to_uppercase()));

    assert_eq!(engine.render("page.html").unwrap(), "<DIV>KEEP LOWERCASE</DIV>");
}
