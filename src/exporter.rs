//! File export for the report data.
//!
//! The filenames written here are consumed by external tooling and are part
//! of the crate's contract: `pagehawk-full-data.{json,csv}`,
//! `pagehawk-current-view.{json,csv}`, and `pagehawk-<output-id>.<format>`
//! for each target-list variant.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{ReportError, ReportResult};
use crate::models::VisitRecord;
use crate::search::visible_records;
use crate::serialize::{self, OutputFormat};
use crate::views::OutputVariant;

pub const FULL_JSON_FILENAME: &str = "pagehawk-full-data.json";
pub const FULL_CSV_FILENAME: &str = "pagehawk-full-data.csv";
pub const CURRENT_VIEW_JSON_FILENAME: &str = "pagehawk-current-view.json";
pub const CURRENT_VIEW_CSV_FILENAME: &str = "pagehawk-current-view.csv";

/// Writes export artifacts into one output directory.
pub struct FileExporter {
    output_dir: PathBuf,
}

impl FileExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The original nested payload, pretty-printed.
    pub fn export_full_json(&self, payload: &Value) -> ReportResult<PathBuf> {
        let content = serialize::to_json_pretty(payload)?;
        self.write(FULL_JSON_FILENAME, &content, OutputFormat::Json)
    }

    /// The records passing the visibility mask, as a flat JSON array.
    pub fn export_current_view_json(
        &self,
        records: &[VisitRecord],
        mask: &[bool],
    ) -> ReportResult<PathBuf> {
        let visible = visible_records(records, mask);
        let content = serialize::to_json_pretty(&visible)?;
        self.write(CURRENT_VIEW_JSON_FILENAME, &content, OutputFormat::Json)
    }

    pub fn export_full_csv(&self, records: &[VisitRecord]) -> ReportResult<PathBuf> {
        self.write(FULL_CSV_FILENAME, &serialize::to_csv(records), OutputFormat::Csv)
    }

    pub fn export_current_view_csv(
        &self,
        records: &[VisitRecord],
        mask: &[bool],
    ) -> ReportResult<PathBuf> {
        let visible = visible_records(records, mask);
        self.write(
            CURRENT_VIEW_CSV_FILENAME,
            &serialize::to_csv(&visible),
            OutputFormat::Csv,
        )
    }

    /// One target-list variant in the requested format. The list content is
    /// derived once and converted as literal text, the same way the report's
    /// download buttons convert the visible textarea content.
    pub fn export_variant(
        &self,
        variant: OutputVariant,
        records: &[VisitRecord],
        format: OutputFormat,
    ) -> ReportResult<PathBuf> {
        let content = variant.content(records);
        let converted = match format {
            OutputFormat::Json => serialize::lines_to_json(&content),
            OutputFormat::Csv => serialize::lines_to_csv(&content, variant.has_port()),
            OutputFormat::Txt => content,
        };
        let filename = format!("pagehawk-{}.{}", variant.id(), format.extension());
        self.write(&filename, &converted, format)
    }

    /// Every export artifact: the four record exports plus each variant in
    /// each requested format. Returns the written paths.
    pub fn export_all(
        &self,
        payload: &Value,
        records: &[VisitRecord],
        mask: &[bool],
        formats: &[OutputFormat],
    ) -> ReportResult<Vec<PathBuf>> {
        let mut written = vec![
            self.export_full_json(payload)?,
            self.export_current_view_json(records, mask)?,
            self.export_full_csv(records)?,
            self.export_current_view_csv(records, mask)?,
        ];
        for variant in OutputVariant::ALL {
            for format in formats {
                written.push(self.export_variant(variant, records, *format)?);
            }
        }
        Ok(written)
    }

    fn write(&self, filename: &str, content: &str, format: OutputFormat) -> ReportResult<PathBuf> {
        let path = self.output_dir.join(filename);
        fs::write(&path, content).map_err(|e| ReportError::io(e, Some(path.clone())))?;
        log::info!("Wrote {} ({})", path.display(), format.mime_type());
        Ok(path)
    }
}
