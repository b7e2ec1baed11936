/// Replace the five HTML metacharacters with their entities.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Case-insensitive substring deny-list.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    banned: Vec<String>,
}

impl ContentFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { banned }
    }

    pub fn contains_banned(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        self.banned.iter().any(|word| lower.contains(word.as_str()))
    }
}
