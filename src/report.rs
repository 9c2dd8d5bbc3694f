use crate::fetcher::Headline;

/// Render the final plain-text report.
///
/// Rendering is total: every headline renders, and entries without a
/// publish time are marked "Unknown".
pub fn render(headlines: &[Headline]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Top {} Technology News Headlines\n\n",
        headlines.len()
    ));
    out.push_str(&"=".repeat(80));
    out.push('\n');

    for (i, item) in headlines.iter().enumerate() {
        let date = item
            .published
            .map(|p| p.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        out.push_str(&format!("{}. {}\n", i + 1, item.title));
        out.push_str(&format!("   Source: {}\n", item.source));
        out.push_str(&format!("   Date: {}\n", date));
        out.push('\n');
    }

    out
}
