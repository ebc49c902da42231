//! Shared fixtures for layout engine tests

use crate::layout::engine::LayoutEngine;
use crate::source::StaticSource;

/// Root layout with a head insertion marker and a body placeholder
pub(super) const BASE_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Base</title>
  <meta charset="utf-8"/>
  <meta id="layout-head"/>
</head>
<body>
<div class="page">
<div id="layout-body"></div>
</div>
</body>
</html>
"#;

/// Mid-level layout: inherits the base layout, contributes navigation
pub(super) const MAIN_LAYOUT: &str = r#"<html>
<head>
  <meta name="layout" content="layout/base.html"/>
  <link rel="stylesheet" href="/css/site.css"/>
</head>
<body class="site">
<div class="nav">$breadcrumb</div>
<div id="layout-body"></div>
</body>
</html>
"#;

/// Standalone root layout used for single-level inheritance tests
pub(super) const MAIN_LAYOUT_ROOT: &str = r#"<html>
<head>
  <title>Layout Title</title>
  <meta charset="utf-8"/>
  <meta id="layout-head"/>
  <link rel="stylesheet" href="/css/site.css"/>
</head>
<body class="site">
<div class="nav">$breadcrumb</div>
<div id="layout-body"></div>
<div class="footer">$footer</div>
</body>
</html>
"#;

/// Leaf page inheriting `MAIN_LAYOUT_ROOT`
pub(super) const SOME_PAGE: &str = r#"<html>
<head>
  <meta name="layout" content="layout/mainLayout.html"/>
  <title>Some Page</title>
  <template id="footer">Built with pagefold</template>
  <meta name="bread0" content="Home" href="/"/>
  <meta name="bread1" content="Some Page" href="/some"/>
  <script src="/js/page.js"></script>
</head>
<body>
<div>Some Page content</div>
</body>
</html>
"#;

/// Build an engine over an in-memory source holding `templates`.
pub(super) fn engine(templates: &[(&str, &str)]) -> LayoutEngine {
    let mut source = StaticSource::new();
    for (name, text) in templates {
        source.insert(*name, *text);
    }
    LayoutEngine::new(Box::new(source))
}
