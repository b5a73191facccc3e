//! Script file ingestion for plain text, PDF and Word documents

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use neka_core::{Error, Result, ScriptText};

static PARAGRAPH_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").unwrap());
static TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:tab\s*/>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").unwrap());

/// Supported script file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    PlainText,
    Pdf,
    Docx,
}

impl ScriptFormat {
    /// Detect the format from the file extension, case-insensitively
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" | "text" | "fountain" | "md" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "" => Err(Error::UnsupportedFormat("(no extension)".to_string())),
            other => Err(Error::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Read a script file and validate that it holds some text
pub fn read_script_file(path: impl AsRef<Path>) -> Result<ScriptText> {
    let path = path.as_ref();
    let format = ScriptFormat::from_path(path)?;
    fs::metadata(path)?;

    debug!(path = %path.display(), ?format, "reading script file");
    let text = match format {
        ScriptFormat::PlainText => fs::read_to_string(path)?,
        ScriptFormat::Pdf => extract_pdf(path)?,
        ScriptFormat::Docx => extract_docx(path)?,
    };

    if text.trim().is_empty() {
        return Err(Error::InvalidInput(format!(
            "{} is empty or could not be read",
            path.display()
        )));
    }

    info!(chars = text.chars().count(), "script file read");
    Ok(ScriptText::new(text))
}

fn require_tool(tool: &str) -> Result<()> {
    which::which(tool).map(|_| ()).map_err(|_| {
        Error::Extraction(format!("`{}` is required but was not found on PATH", tool))
    })
}

/// Extract PDF text with Poppler, keeping page layout
fn extract_pdf(path: &Path) -> Result<String> {
    require_tool("pdftotext")?;

    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg("-q")
        .arg(path)
        .arg("-")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
        if stderr.contains("encrypt") || stderr.contains("password") {
            return Err(Error::Extraction(format!(
                "{} is encrypted",
                path.display()
            )));
        }
        return Err(Error::Extraction("pdftotext failed".to_string()));
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    Ok(join_pdf_pages(&raw))
}

/// Replace form-feed page breaks with newlines and drop trailing empty pages
pub fn join_pdf_pages(raw: &str) -> String {
    let mut pages: Vec<&str> = raw.split('\u{000C}').collect();
    while matches!(pages.last(), Some(last) if last.trim().is_empty()) {
        pages.pop();
    }

    let mut text = String::new();
    for page in pages {
        text.push_str(page.trim_end_matches('\n'));
        text.push('\n');
    }
    text
}

/// Extract the body text of a .docx through `unzip`
fn extract_docx(path: &Path) -> Result<String> {
    require_tool("unzip")?;

    let output = Command::new("unzip")
        .arg("-p")
        .arg(path)
        .arg("word/document.xml")
        .output()?;

    if !output.status.success() || output.stdout.is_empty() {
        return Err(Error::Extraction(format!(
            "{} is not a readable Word document",
            path.display()
        )));
    }

    Ok(docx_xml_to_text(&String::from_utf8_lossy(&output.stdout)))
}

/// One line per paragraph, tags stripped and entities decoded
pub fn docx_xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_END.replace_all(xml, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    let decoded = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    decoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
