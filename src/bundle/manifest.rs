//! info.plist rendering and writing

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::AppName;
use crate::error::{self, Result};

/// The four fields sapp substitutes into the bundle manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPlist {
    pub name: String,
    pub identifier: String,
    pub version: String,
    pub executable: String,
}

impl InfoPlist {
    pub fn for_app(name: &AppName, vendor: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            identifier: format!("com.{vendor}.{}", name.identifier_fragment()),
            version: version.to_string(),
            executable: name.to_string(),
        }
    }

    /// Render the property list document
    pub fn render(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>{}</string>
    <key>CFBundleIdentifier</key>
    <string>{}</string>
    <key>CFBundleVersion</key>
    <string>{}</string>
    <key>CFBundleExecutable</key>
    <string>{}</string>
</dict>
</plist>
"#,
            escape_xml(&self.name),
            escape_xml(&self.identifier),
            escape_xml(&self.version),
            escape_xml(&self.executable),
        )
    }

    /// Write the rendered manifest to `path`, replacing any existing file
    ///
    /// The content goes to a temp file next to `path` first and is renamed
    /// into place, so readers never see a half-written plist.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let to_error = |e: &dyn std::fmt::Display| {
            error::fs::manifest_write_failed(path.display().to_string(), e)
        };

        let dir = path
            .parent()
            .ok_or_else(|| to_error(&"path has no parent directory"))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| to_error(&e))?;
        tmp.write_all(self.render().as_bytes())
            .map_err(|e| to_error(&e))?;
        // Temp files start out owner-only
        #[cfg(unix)]
        tmp.as_file()
            .set_permissions(manifest_permissions(path))
            .map_err(|e| to_error(&e))?;
        tmp.persist(path).map_err(|e| to_error(&e.error))?;

        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Keep the mode of a manifest being replaced, otherwise `0644`
#[cfg(unix)]
fn manifest_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path).map_or_else(
        |_| std::fs::Permissions::from_mode(0o644),
        |meta| meta.permissions(),
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
