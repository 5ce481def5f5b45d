//! Minimal HTML forms for browser use.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Lockdrop</title></head>
<body>
  <h1>Share a file</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <input type="file" name="file" required>
    <button type="submit">Upload</button>
  </form>
  <p>You will receive a link and a password. Send both to the recipient.</p>
</body>
</html>
"#;

const DOWNLOAD_HTML: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Lockdrop download</title></head>
<body>
  <h1>Download a shared file</h1>
  <form method="post">
    <label>Password <input type="password" name="password" autocomplete="off" required></label>
    <button type="submit">Download</button>
  </form>
</body>
</html>
"#;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /download/{link}
///
/// The form is served for any link so that link existence is not revealed
/// before a password is submitted.
pub async fn download_form() -> Html<&'static str> {
    Html(DOWNLOAD_HTML)
}
