use axum::response::Html;

const HOME_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Storefront</title>
</head>
<body>
  <h1>Storefront</h1>
  <p>Browse the catalog at <a href="/api/products">/api/products</a>,
     see the <a href="/api/dashboard">dashboard</a> or today's
     <a href="/api/recommendations">recommendations</a>.</p>
</body>
</html>
"#;

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
