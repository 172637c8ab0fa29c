use owo_colors::OwoColorize;

/// 取得結果のサマリ行
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(saved: usize, failed: usize) -> Self {
        match (saved, failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} saved, {} failed", saved.green(), f.red()),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} image(s) saved", s.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No images fetched".to_string(),
            },
        }
    }
}
