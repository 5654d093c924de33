//! Feed renderer
//!
//! Renders a presentation state to the card-grid HTML page.

use super::normalize::{CardViewModel, LINK_PLACEHOLDER};
use super::state::FeedState;

/// Render the recipe feed page
pub fn render_feed_page(state: &FeedState) -> String {
    let content = match state {
        FeedState::Error { message, .. } => {
            format!(r#"<p class="feed-error">{}</p>"#, html_escape(message))
        }
        FeedState::Empty { message } => {
            format!(r#"<p class="feed-empty">{}</p>"#, html_escape(message))
        }
        FeedState::Populated { cards } => {
            let mut buf = String::from(r#"<div class="recipe-grid">"#);
            for card in cards {
                buf.push_str(&render_card(card));
            }
            buf.push_str("</div>");
            buf
        }
    };

    build_page("Recipes", &content)
}

/// Render one recipe card
pub fn render_card(card: &CardViewModel) -> String {
    let mut ingredients = String::from("<p><strong>Ingredients:</strong></p><ul>");
    for entry in &card.ingredient_entries {
        ingredients.push_str(&format!(
            r#"<li>{} <a href="{}" class="buy-link" target="_blank" rel="noopener">[Buy ingredient]</a></li>"#,
            html_escape(&entry.label),
            html_escape(safe_href(&entry.purchase_link)),
        ));
    }
    ingredients.push_str("</ul>");

    format!(
        r#"<div class="recipe-card">
    <img src="{thumb}" alt="{title}" class="thumb">
    <span class="tag">{tag}</span>
    <h3>{title}</h3>
    <p class="summary">{summary}</p>
    {ingredients}
    <p><strong>Steps:</strong> {method}</p>
    <p class="tip">Tip: {tip}</p>
    <a href="{video}" class="video-link" target="_blank" rel="noopener">Watch the original video</a>
    <p class="prompt">{prompt}</p>
</div>"#,
        thumb = html_escape(&card.thumbnail_url),
        title = html_escape(&card.title),
        tag = html_escape(&card.primary_tag),
        summary = html_escape(&card.summary),
        method = html_escape(&card.method_preview),
        tip = html_escape(&card.tip),
        video = html_escape(safe_href(&card.video_link)),
        prompt = html_escape(&card.prompt_preview),
    )
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | SnapFood</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;padding:24px 32px;}}
.recipe-grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:16px;}}
.recipe-card{{background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:16px;}}
.recipe-card h3{{font-size:16px;margin:8px 0 4px;}}
.recipe-card ul{{margin:4px 0 8px 18px;font-size:14px;}}
.thumb{{width:100%;aspect-ratio:4/3;object-fit:cover;border-radius:6px;background:#eee;}}
.tag{{display:inline-block;padding:2px 8px;border-radius:12px;font-size:11px;background:#fff3e0;color:#e65100;}}
.summary{{color:#555;font-size:14px;margin-bottom:8px;}}
.buy-link{{color:#ff6600;font-weight:bold;}}
.tip{{color:green;font-style:italic;font-size:14px;margin:8px 0;}}
.prompt{{color:#888;font-size:12px;margin-top:8px;}}
.feed-error{{color:red;}}
.feed-empty{{color:#888;}}
</style>
</head>
<body>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

/// Only web links reach an href; any other scheme (`javascript:`, `data:`)
/// renders as the dead link.
fn safe_href(link: &str) -> &str {
    let lower = link.trim_start().to_ascii_lowercase();
    if link == LINK_PLACEHOLDER || lower.starts_with("https://") || lower.starts_with("http://") {
        link
    } else {
        LINK_PLACEHOLDER
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
