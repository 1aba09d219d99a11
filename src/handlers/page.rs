//! HTML page with the match form and an optional result block

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page, echoing the last input and showing `resultado` if any
pub fn render_index(jogo: Option<&str>, resultado: Option<&str>) -> String {
    let value = jogo.map(escape_html).unwrap_or_default();
    let result_block = resultado
        .map(|r| format!("\n    <pre class=\"resultado\">{}</pre>", escape_html(r)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt">
<head>
    <meta charset="utf-8">
    <title>Sugestão de Aposta</title>
    <style>
        body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
        input[type=text] {{ width: 100%; padding: 0.5rem; }}
        .resultado {{ background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }}
    </style>
</head>
<body>
    <h1>⚽ Sugestão de Aposta</h1>
    <form method="post" action="/analyze">
        <label for="jogo">Jogo</label>
        <input type="text" id="jogo" name="jogo" placeholder="Equipa Casa vs Equipa Fora" value="{value}" required>
        <button type="submit">Analisar</button>
    </form>{result_block}
</body>
</html>
"#
    )
}
