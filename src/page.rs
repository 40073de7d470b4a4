use log::info;
use std::path::Path;

use crate::error::StatsError;

/// Host document holding named mount points.
pub trait Document {
    /// Replaces the content of the element identified by `id` with `markup`.
    fn commit_to_element(&mut self, id: &str, markup: &str) -> Result<(), StatsError>;
}

/// A standalone HTML page with a fixed list of mount points, filled in as tables are drawn.
#[derive(Debug, Clone)]
pub struct StatsPage {
    title: String,
    mounts: Vec<(String, String)>,
}

impl StatsPage {
    pub fn new(title: &str, mount_ids: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            mounts: mount_ids
                .iter()
                .map(|id| (id.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn add_mount(&mut self, id: &str) {
        if self.content(id).is_none() {
            self.mounts.push((id.to_string(), String::new()));
        }
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.mounts
            .iter()
            .find(|(mount, _)| mount == id)
            .map(|(_, markup)| markup.as_str())
    }

    pub fn render(&self) -> String {
        let mut body = String::new();
        for (id, markup) in &self.mounts {
            body.push_str(&format!("\n    <div id=\"{}\">{}</div>", escape(id), markup));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>{body}
</body>
</html>
"#,
            title = escape(&self.title),
            css = inline_css(),
            body = body,
        )
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), StatsError> {
        let path = path.as_ref();
        std::fs::write(path, self.render())?;
        info!("wrote page {}", path.display());
        Ok(())
    }
}

impl Document for StatsPage {
    fn commit_to_element(&mut self, id: &str, markup: &str) -> Result<(), StatsError> {
        let slot = self
            .mounts
            .iter_mut()
            .find(|(mount, _)| mount == id)
            .ok_or_else(|| StatsError::MountPointNotFound(id.to_string()))?;
        slot.1 = markup.to_string();
        Ok(())
    }
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn inline_css() -> &'static str {
    r#"
body { font-family: system-ui, sans-serif; color: #111827; margin: 2rem; }
.stats-table { border-collapse: collapse; margin-bottom: 2rem; min-width: 480px; }
.stats-row td { padding: 0.25rem 0.75rem; font-size: 0.875rem; }
.stats-row td:last-child { text-align: right; white-space: nowrap; }
.percentage-bar-container { width: 240px; height: 0.75rem; background: #f3f4f6; }
.percentage-bar { height: 100%; background: #3b82f6; }
.check-table th { font-size: 0.75rem; padding: 0.25rem 0.5rem; }
.check-cell { text-align: center; }
.check-no { color: #ef4444; }
.check-partial { color: #f59e0b; }
.check-full { color: #22c55e; }
"#
}
