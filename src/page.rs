use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;

use render::Rendered;
use StatusError;

/// The insertion points on the status page, named by their element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Header,
    Updated,
    Main,
    Message,
}

impl Slot {
    pub fn id(&self) -> &'static str {
        match self {
            Slot::Header => "header",
            Slot::Updated => "timePara",
            Slot::Main => "mainPara",
            Slot::Message => "messagePara",
        }
    }
}

/// Somewhere to put the rendered status.
pub trait Page {
    /// Replace the contents of `slot`.
    fn set(&mut self, slot: Slot, html: &str);

    /// Tell the user something went wrong.
    fn alert(&mut self, message: &str);

    fn flush(&mut self) -> Result<(), StatusError> {
        Ok(())
    }

    fn publish(&mut self, rendered: &Rendered) -> Result<(), StatusError> {
        self.set(Slot::Header, &rendered.header);
        self.set(Slot::Updated, &rendered.updated);
        self.set(Slot::Main, &rendered.table);
        self.set(Slot::Message, &rendered.message);
        self.flush()
    }
}

/// Keeps slot contents and every alert around for inspection.
#[derive(Debug, Default)]
pub struct MemoryPage {
    slots: HashMap<Slot, String>,
    alerts: Vec<String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        MemoryPage::default()
    }

    pub fn slot(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Page for MemoryPage {
    fn set(&mut self, slot: Slot, html: &str) {
        self.slots.insert(slot, html.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// A standalone HTML document, rewritten on every flush. Only the most recent
/// alert is shown, and a successful publish clears it.
pub struct HtmlFilePage {
    path: PathBuf,
    refresh: Duration,
    slots: MemoryPage,
    alert: Option<String>,
}

impl HtmlFilePage {
    /// `refresh` is how often a browser viewing the file should reload it.
    pub fn new<P: AsRef<Path>>(path: P, refresh: Duration) -> Self {
        HtmlFilePage {
            path: path.as_ref().to_path_buf(),
            refresh,
            slots: MemoryPage::new(),
            alert: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn alert_text(&self) -> Option<&str> {
        self.alert.as_ref().map(String::as_str)
    }

    pub fn document(&self) -> String {
        let slot = |slot: Slot| self.slots.slot(slot).unwrap_or("");
        let alert = match self.alert {
            Some(ref text) => format!("<p id=\"alert\" role=\"alert\">{}</p>\n", escape(text)),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="{refresh}">
<title>GONG H-Alpha Status</title>
</head>
<body>
{alert}<h1 id="{header_id}">{header}</h1>
<p id="{updated_id}">{updated}</p>
<p id="{main_id}">{main}</p>
<p id="{message_id}">{message}</p>
</body>
</html>
"#,
            refresh = self.refresh.as_secs(),
            alert = alert,
            header_id = Slot::Header.id(),
            header = slot(Slot::Header),
            updated_id = Slot::Updated.id(),
            updated = slot(Slot::Updated),
            main_id = Slot::Main.id(),
            main = slot(Slot::Main),
            message_id = Slot::Message.id(),
            message = slot(Slot::Message),
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Page for HtmlFilePage {
    fn set(&mut self, slot: Slot, html: &str) {
        self.slots.set(slot, html);
    }

    fn alert(&mut self, message: &str) {
        warn!("alert: {}", message);
        self.alert = Some(message.to_string());
        if let Err(err) = self.flush() {
            error!("unable to show alert in {}: {}", self.path.display(), err);
        }
    }

    // Readers must never see a partly written page. The temporary file is
    // removed if anything fails before it is persisted.
    fn flush(&mut self) -> Result<(), StatusError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(self.document().as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        debug!("wrote {}", self.path.display());

        Ok(())
    }

    fn publish(&mut self, rendered: &Rendered) -> Result<(), StatusError> {
        self.alert = None;
        self.set(Slot::Header, &rendered.header);
        self.set(Slot::Updated, &rendered.updated);
        self.set(Slot::Main, &rendered.table);
        self.set(Slot::Message, &rendered.message);
        self.flush()
    }
}
