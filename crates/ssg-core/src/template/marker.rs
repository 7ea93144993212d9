//! Marker comment detection

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::bytes::Regex;

/// `<!-- template: NAME -->`, capturing the shortest NAME that is followed by ` -->`.
///
/// Unicode mode is off so that `.` matches any byte; markup lines are
/// handled as raw bytes and need not be valid UTF-8.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)<!-- template: (.+?) -->").expect("marker pattern is valid")
});

/// A template name captured from one markup line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReference {
    name: Vec<u8>,
}

impl TemplateReference {
    /// Find the first marker in `line`
    pub fn find(line: &[u8]) -> Option<Self> {
        MARKER.captures(line).and_then(|caps| caps.get(1)).map(|m| Self {
            name: m.as_bytes().to_vec(),
        })
    }

    /// Captured name, exactly as written in the marker
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Template location relative to `base_dir`
    pub fn path_in(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(bytes_to_path(&self.name))
    }
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
