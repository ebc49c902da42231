//! On-disk template fixtures
//!
//! A minimal two-level site: a root layout, a mid-level layout, and two
//! pages, written under a directory so directory-backed sources can be
//! exercised end to end.

use std::fs;
use std::io;
use std::path::Path;

/// Root layout with head insertion marker and body placeholder
pub const BASE_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Sample Site</title>
  <meta charset="utf-8"/>
  <meta id="layout-head"/>
</head>
<body>
<div class="page">
<div id="layout-body"></div>
</div>
<div class="footer">$footer</div>
</body>
</html>
"#;

/// Mid-level layout inheriting the root layout
pub const MAIN_LAYOUT: &str = r#"<html>
<head>
  <meta name="layout" content="_layout/base.html"/>
  <link rel="stylesheet" href="/css/site.css"/>
  <template id="footer">Powered by pagefold</template>
</head>
<body class="site">
<div class="nav">$breadcrumb</div>
<div id="layout-body"></div>
</body>
</html>
"#;

/// Leaf page with title, breadcrumbs, and body content
pub const INDEX_PAGE: &str = r#"<html>
<head>
  <meta name="layout" content="_layout/main.html"/>
  <title>Home</title>
  <meta name="bread0" content="Home" href="/"/>
</head>
<body>
<h1>Welcome</h1>
</body>
</html>
"#;

/// Leaf page with no inheritance
pub const STANDALONE_PAGE: &str = r#"<html>
<head>
  <title>About</title>
</head>
<body>
<p>About this site.</p>
</body>
</html>
"#;

/// Write the sample site under `root`:
///
/// ```text
/// root/
///   _layout/base.html
///   _layout/main.html
///   index.html
///   about.html
/// ```
pub fn write_sample_site(root: &Path) -> io::Result<()> {
    fs::create_dir_all(root.join("_layout"))?;
    fs::write(root.join("_layout/base.html"), BASE_LAYOUT)?;
    fs::write(root.join("_layout/main.html"), MAIN_LAYOUT)?;
    fs::write(root.join("index.html"), INDEX_PAGE)?;
    fs::write(root.join("about.html"), STANDALONE_PAGE)?;
    Ok(())
}
