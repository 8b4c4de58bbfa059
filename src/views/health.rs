pub fn health_html(backend_url: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Assessment Recommender Health</title>
    <link
      href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
      rel="stylesheet"
      integrity="sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH"
      crossorigin="anonymous"
    >
    <link href="/web/css/theme.css" rel="stylesheet">
  </head>
  <body>
    <main class="container py-4">
      <h1 class="mb-3">Assessment Recommender</h1>
      <p class="text-muted">Status: ok</p>
      <p class="text-muted">Backend: <code>{backend}</code></p>
      <p><a href="/">Open the recommender</a></p>
    </main>
  </body>
</html>
"#,
        backend = html_escape::encode_text(backend_url),
    )
}
