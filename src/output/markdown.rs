use crate::models::{Extension, ExtractedFile};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// List binary files with their sizes instead of leaving them out.
    pub include_binary: bool,
}

/// Renders an extension as a single Markdown document.
pub fn render(extension: &Extension, options: &RenderOptions) -> String {
    let mut out = String::new();

    render_header(&mut out, extension);
    render_permissions(&mut out, extension);
    render_tree(&mut out, extension);
    render_sources(&mut out, extension);

    if options.include_binary {
        render_binaries(&mut out, extension);
    }

    out
}

fn render_header(out: &mut String, extension: &Extension) {
    let name = extension.name().unwrap_or("Unknown Extension");
    out.push_str(&format!("# {}\n\n", name));

    if let Some(ref manifest) = extension.manifest {
        if !manifest.version.is_empty() {
            out.push_str(&format!("- **Version:** {}\n", manifest.version));
        }
        if manifest.manifest_version > 0 {
            out.push_str(&format!("- **Manifest Version:** {}\n", manifest.manifest_version));
        }
        if !manifest.description.is_empty() {
            out.push_str(&format!("- **Description:** {}\n", manifest.description));
        }
    }

    let code = extension.renderable_files().count();
    let binary = extension.binary_files().count();
    out.push_str(&format!(
        "- **Files:** {} ({} source, {} binary)\n\n",
        extension.files.len(),
        code,
        binary
    ));
}

fn render_permissions(out: &mut String, extension: &Extension) {
    let Some(ref manifest) = extension.manifest else {
        return;
    };
    if manifest.permissions.is_empty() {
        return;
    }

    out.push_str("## Permissions\n\n");
    for perm in &manifest.permissions {
        out.push_str(&format!("- `{}`\n", perm));
    }
    out.push('\n');
}

fn render_tree(out: &mut String, extension: &Extension) {
    if extension.files.is_empty() {
        return;
    }

    out.push_str("## File Tree\n\n```\n");
    for file in &extension.files {
        if file.is_renderable {
            out.push_str(&format!("{}\n", file.path));
        } else {
            out.push_str(&format!("{} [binary, {}]\n", file.path, format_size(file.size)));
        }
    }
    out.push_str("```\n\n");
}

fn render_sources(out: &mut String, extension: &Extension) {
    let mut files = extension.renderable_files().peekable();
    if files.peek().is_none() {
        return;
    }

    out.push_str("## Files\n\n");
    for file in files {
        render_file(out, file);
    }
}

fn render_file(out: &mut String, file: &ExtractedFile) {
    let text = file.text();
    let fence = fence_for(&text);

    out.push_str(&format!("### {}\n\n", file.path));
    out.push_str(&format!("{}{}\n", fence, file.content_tag.as_str()));
    out.push_str(&text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!("{}\n\n", fence));
}

fn render_binaries(out: &mut String, extension: &Extension) {
    let mut files = extension.binary_files().peekable();
    if files.peek().is_none() {
        return;
    }

    out.push_str("## Binary Files\n\n");
    for file in files {
        out.push_str(&format!("- `{}` ({})\n", file.path, format_size(file.size)));
    }
    out.push('\n');
}

/// A backtick fence longer than any backtick run inside `text`.
fn fence_for(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    "`".repeat((longest + 1).max(3))
}

pub fn format_size(size: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes = size as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", size)
    }
}
