//! JSON export of color metadata.
//!
//! Three record kinds are exported, each to a file name that is a pure
//! function of its inputs:
//!
//! | Record   | File name                                   |
//! |----------|---------------------------------------------|
//! | color    | `hexplorer_<HEX>.json`                      |
//! | mix      | `hexplorer_mix_<HEXA>_<HEXB>.json`          |
//! | gradient | `hexplorer_gradient_<HEXA><HEXB><STEPS>.json` |
//!
//! Existing files are overwritten. [`JsonDirExporter`] writes through a
//! temporary file in the target directory and renames it into place, so an
//! interrupted export never leaves a partial file behind.

use std::fs;
use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

use hx_color::{Color, ColorMetadata};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Two inputs and their mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixRecord {
    pub mix_input_1: ColorMetadata,
    pub mix_input_2: ColorMetadata,
    pub mixed_result: ColorMetadata,
    #[serde(skip)]
    first: Color,
    #[serde(skip)]
    second: Color,
}

/// A gradient and the metadata of every entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientRecord {
    pub gradient_from: String,
    pub gradient_to: String,
    /// Number of colors, i.e. intervals + 1.
    pub steps: u32,
    pub colors: Vec<ColorMetadata>,
    #[serde(skip)]
    from: Color,
    #[serde(skip)]
    to: Color,
    #[serde(skip)]
    intervals: NonZeroU32,
}

/// Anything the session can export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportRecord {
    Color(ColorMetadata),
    Mix(MixRecord),
    Gradient(GradientRecord),
}

impl ExportRecord {
    /// Metadata of a single color.
    #[must_use]
    pub fn color(color: Color) -> Self {
        Self::Color(ColorMetadata::of(color))
    }

    /// Metadata of a mix of `first` and `second`.
    #[must_use]
    pub fn mix(first: Color, second: Color, mixed: Color) -> Self {
        Self::Mix(MixRecord {
            mix_input_1: ColorMetadata::of(first),
            mix_input_2: ColorMetadata::of(second),
            mixed_result: ColorMetadata::of(mixed),
            first,
            second,
        })
    }

    /// Metadata of a gradient with `intervals` steps.
    #[must_use]
    pub fn gradient(from: Color, to: Color, intervals: NonZeroU32, colors: &[Color]) -> Self {
        Self::Gradient(GradientRecord {
            gradient_from: format!("#{from}"),
            gradient_to: format!("#{to}"),
            steps: intervals.get().saturating_add(1),
            colors: colors.iter().copied().map(ColorMetadata::of).collect(),
            from,
            to,
            intervals,
        })
    }

    /// The file this record is written to.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::Color(meta) => format!("hexplorer_{}.json", meta.rgb),
            Self::Mix(mix) => format!("hexplorer_mix_{}_{}.json", mix.first, mix.second),
            Self::Gradient(grad) => {
                format!("hexplorer_gradient_{}{}{}.json", grad.from, grad.to, grad.intervals)
            }
        }
    }
}

/// Serialize a record as JSON indented by four spaces.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_pretty_json(record: &ExportRecord) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    record.serialize(&mut ser)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// Destination for exported records.
pub trait Exporter {
    /// Persist `record`, returning where it was written.
    ///
    /// # Errors
    ///
    /// Any failure to serialize or store the record.
    fn export(&mut self, record: &ExportRecord) -> Result<PathBuf, ExportError>;
}

/// Writes each record as a pretty-printed JSON file in one directory.
#[derive(Debug, Clone)]
pub struct JsonDirExporter {
    dir: PathBuf,
}

impl JsonDirExporter {
    /// Export into `dir` (created on first export).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Exporter for JsonDirExporter {
    fn export(&mut self, record: &ExportRecord) -> Result<PathBuf, ExportError> {
        let payload = to_pretty_json(record)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(record.file_name());

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&payload)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        tracing::info!(path = %path.display(), "exported");
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    fn steps(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    // -- File names ---------------------------------------------------------

    #[test]
    fn color_file_name() {
        assert_eq!(ExportRecord::color(hex("ff0000")).file_name(), "hexplorer_FF0000.json");
    }

    #[test]
    fn mix_file_name() {
        let rec = ExportRecord::mix(hex("FF0000"), hex("0000FF"), hex("7F007F"));
        assert_eq!(rec.file_name(), "hexplorer_mix_FF0000_0000FF.json");
    }

    #[test]
    fn gradient_file_name_uses_interval_count() {
        let colors = hx_color::gradient(hex("000000"), hex("FFFFFF"), steps(5));
        let rec = ExportRecord::gradient(hex("000000"), hex("FFFFFF"), steps(5), &colors);
        assert_eq!(rec.file_name(), "hexplorer_gradient_000000FFFFFF5.json");
    }

    // -- Record shapes ------------------------------------------------------

    #[test]
    fn mix_record_shape() {
        let rec = ExportRecord::mix(hex("FF0000"), hex("0000FF"), hex("7F007F"));
        let value = serde_json::to_value(&rec).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["mix_input_1", "mix_input_2", "mixed_result"]);
        assert_eq!(value["mixed_result"]["hex"], "#7F007F");
        assert_eq!(value["mix_input_1"]["name"], "red");
    }

    #[test]
    fn gradient_record_counts_colors() {
        let colors = hx_color::gradient(hex("000000"), hex("FFFFFF"), steps(2));
        let rec = ExportRecord::gradient(hex("000000"), hex("FFFFFF"), steps(2), &colors);
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["gradient_from"], "#000000");
        assert_eq!(value["gradient_to"], "#FFFFFF");
        assert_eq!(value["steps"], 3);
        assert_eq!(value["colors"].as_array().unwrap().len(), 3);
        assert_eq!(value["colors"][1]["hex"], "#7F7F7F");
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let bytes = to_pretty_json(&ExportRecord::color(Color::BLACK)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n    \"hex\": \"#000000\",\n"), "{text}");
        assert!(text.contains("\n        \"r\": 0,"), "{text}");
    }

    // -- Writing ------------------------------------------------------------

    #[test]
    fn writes_file_into_created_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");
        let mut exporter = JsonDirExporter::new(&dir);

        let path = exporter.export(&ExportRecord::color(hex("FF0000"))).unwrap();

        assert_eq!(path, dir.join("hexplorer_FF0000.json"));
        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "hex": "#FF0000",
                "rgb": { "r": 255, "g": 0, "b": 0 },
                "luminance": 0.2126,
                "contrast_vs_white": "4.00 : 1",
                "decimal_index": 16_711_680,
                "name": "red",
            })
        );
    }

    #[test]
    fn overwrites_silently_and_leaves_no_temp_files() {
        let tmp = tempfile::tempdir().unwrap();
        let mut exporter = JsonDirExporter::new(tmp.path());
        exporter.export(&ExportRecord::color(Color::WHITE)).unwrap();
        exporter.export(&ExportRecord::color(Color::WHITE)).unwrap();

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["hexplorer_FFFFFF.json"]);
    }

    #[test]
    fn unwritable_directory_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"not a dir").unwrap();
        let mut exporter = JsonDirExporter::new(blocker.join("sub"));

        let err = exporter.export(&ExportRecord::color(Color::BLACK)).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)), "{err:?}");
    }
}
