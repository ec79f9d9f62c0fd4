use std::fmt::Write;

use crate::models::{Listing, PageLink, Product};

#[derive(Debug, Default, Clone)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_product(out: &mut String, product: &Product) {
    let _ = write!(
        out,
        r#"<li class="product">
  <img src="{image}" alt="{name}">
  <h2>{name}</h2>
  <form method="post" action="/delete">
    <input type="hidden" name="productID" value="{id}">
    <button type="submit">Delete</button>
  </form>
</li>
"#,
        image = escape_html(&product.image_url),
        name = escape_html(&product.name),
        id = product.id,
    );
}

fn render_link(out: &mut String, link: &PageLink) {
    if link.is_current {
        let _ = write!(out, r#"<span class="active">{}</span>"#, link.label);
    } else {
        let _ = write!(out, r#"<a href="{}">{}</a>"#, escape_html(&link.href), link.label);
    }
}

/// Full listing page: search form, flash messages, product grid, pagination
/// and the add-product form.
pub fn render_listing(listing: &Listing, flash: &Flash) -> String {
    let mut out = String::new();
    out.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Store</title>
<link rel="stylesheet" href="/public/style.css">
</head>
<body>
<h1>Store</h1>
"#,
    );

    let _ = write!(
        out,
        r#"<form method="get" action="/" class="search">
  <input type="text" name="query" value="{}" placeholder="Search products">
  <button type="submit">Search</button>
</form>
"#,
        escape_html(&listing.term)
    );

    if let Some(success) = &flash.success {
        let _ = writeln!(out, r#"<p class="success">{}</p>"#, escape_html(success));
    }
    if let Some(error) = &flash.error {
        let _ = writeln!(out, r#"<p class="error">{}</p>"#, escape_html(error));
    }

    if listing.products.is_empty() {
        out.push_str("<p class=\"status\">No products found</p>\n");
    } else {
        out.push_str("<ul class=\"products\">\n");
        for product in &listing.products {
            render_product(&mut out, product);
        }
        out.push_str("</ul>\n");
    }

    out.push_str("<nav class=\"pagination\">");
    for link in &listing.links {
        render_link(&mut out, link);
    }
    out.push_str("</nav>\n");

    out.push_str(
        r#"<form method="post" action="/add" class="add-product">
  <input type="text" name="name" placeholder="Product name">
  <input type="text" name="image_url" placeholder="Image URL">
  <button type="submit">Add product</button>
</form>
</body>
</html>
"#,
    );
    out
}
