//! Export serializer.
//!
//! Every format consumes the filtered and sorted collection, never a single
//! page of it. Two projections come out of the same [`Record::fields`] rows:
//! a grid (sheet) and one labelled block per record (paged and word
//! documents, print).

mod docx;
mod pdf;
mod print;
mod sheet;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use jurnal_types::EntityKind;

use crate::error::{Error, Result};
use crate::record::{Field, Record, RenderContext};

pub use print::{PrintJob, PrintOutcome, PrintState, Printer, TextPrinter};

/// Downloadable encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    Sheet,
    PagedDoc,
    WordDoc,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Sheet,
        ExportFormat::PagedDoc,
        ExportFormat::WordDoc,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Sheet => "csv",
            ExportFormat::PagedDoc => "pdf",
            ExportFormat::WordDoc => "docx",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Sheet => "sheet",
            ExportFormat::PagedDoc => "paged-doc",
            ExportFormat::WordDoc => "word-doc",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sheet" | "csv" | "excel" => Ok(ExportFormat::Sheet),
            "paged-doc" | "pdf" => Ok(ExportFormat::PagedDoc),
            "word-doc" | "docx" | "word" => Ok(ExportFormat::WordDoc),
            other => Err(format!(
                "unknown export format '{}' (expected sheet, paged-doc or word-doc)",
                other
            )),
        }
    }
}

/// One record in the detail projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailBlock {
    /// "Jurnal 1", "Jurnal 2", ...
    pub title: String,
    pub fields: Vec<Field>,
}

/// Grid projection: header labels plus one row of cell values per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn table<T: Record>(items: &[T], ctx: &RenderContext<'_>) -> Table {
    let mut headers = Vec::new();
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let fields = item.fields(ctx);
        if headers.is_empty() {
            headers = fields.iter().map(|f| f.label).collect();
        }
        rows.push(fields.into_iter().map(|f| f.value).collect());
    }
    Table { headers, rows }
}

pub fn detail_blocks<T: Record>(items: &[T], ctx: &RenderContext<'_>) -> Vec<DetailBlock> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| DetailBlock {
            title: format!("{} {}", T::KIND.title(), idx + 1),
            fields: item.fields(ctx),
        })
        .collect()
}

/// `<kind>_detail[_filtered_<id>].<ext>`
pub fn file_name(kind: EntityKind, format: ExportFormat, filter_id: Option<&str>) -> String {
    let suffix = filter_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| format!("_filtered_{}", id))
        .unwrap_or_default();
    format!("{}_detail{}.{}", kind.as_str(), suffix, format.extension())
}

/// Encoded export ready to be saved.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

/// What an export produced, without the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub row_count: usize,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Artifact {
    pub fn report(&self) -> ExportReport {
        ExportReport {
            format: self.format,
            row_count: self.row_count,
            file_name: self.file_name.clone(),
            path: None,
        }
    }

    /// Writes the artifact into `dir` under its file name.
    pub fn save_in(&self, dir: &Path) -> Result<ExportReport> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), rows = self.row_count, "export written");
        Ok(ExportReport {
            path: Some(path),
            ..self.report()
        })
    }
}

/// Encodes every item; an empty collection is refused.
pub fn export<T: Record>(
    items: &[T],
    format: ExportFormat,
    ctx: &RenderContext<'_>,
    filter_id: Option<&str>,
) -> Result<Artifact> {
    if items.is_empty() {
        return Err(Error::EmptyExport);
    }

    let bytes = match format {
        ExportFormat::Sheet => sheet::render(&table(items, ctx))?,
        ExportFormat::PagedDoc => pdf::render(&detail_blocks(items, ctx)),
        ExportFormat::WordDoc => docx::render(&detail_blocks(items, ctx))?,
    };
    let kind = T::KIND;
    tracing::debug!(%kind, %format, rows = items.len(), bytes = bytes.len(), "export rendered");

    Ok(Artifact {
        format,
        file_name: file_name(T::KIND, format, filter_id),
        bytes,
        row_count: items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelIndices;
    use crate::time::TimestampFormat;
    use jurnal_types::{Mapel, Ref, Siswa};

    fn siswa(id: &str, nama: &str) -> Siswa {
        Siswa {
            id: id.into(),
            nis: Some(format!("N-{}", id)),
            nama: Some(nama.into()),
            kelas: Some(Ref::bare("c1")),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            file_name(EntityKind::Jurnal, ExportFormat::Sheet, None),
            "jurnal_detail.csv"
        );
        assert_eq!(
            file_name(EntityKind::Jurnal, ExportFormat::PagedDoc, Some("u1")),
            "jurnal_detail_filtered_u1.pdf"
        );
        assert_eq!(
            file_name(EntityKind::Jadwal, ExportFormat::WordDoc, Some("")),
            "jadwal_detail.docx"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::PagedDoc);
        assert_eq!("word-doc".parse::<ExportFormat>().unwrap(), ExportFormat::WordDoc);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Sheet);
        assert!("xls".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_empty_export_refused_for_every_format() {
        let labels = LabelIndices::default();
        let ctx = RenderContext::new(&labels, TimestampFormat::default());
        let none: Vec<Mapel> = vec![];
        for format in ExportFormat::ALL {
            assert!(matches!(
                export(&none, format, &ctx, None),
                Err(Error::EmptyExport)
            ));
        }
    }

    #[test]
    fn test_row_count_matches_input_for_every_format() {
        let labels = LabelIndices::default();
        let ctx = RenderContext::new(&labels, TimestampFormat::default());
        let items: Vec<Siswa> = (0..13).map(|i| siswa(&format!("s{}", i), "Ani")).collect();
        for format in ExportFormat::ALL {
            let artifact = export(&items, format, &ctx, None).unwrap();
            assert_eq!(artifact.row_count, 13);
            assert!(!artifact.bytes.is_empty());
        }
    }

    #[test]
    fn test_both_projections_share_values() {
        let labels = LabelIndices::default();
        let ctx = RenderContext::new(&labels, TimestampFormat::default());
        let items = vec![siswa("s1", "Ani"), siswa("s2", "Budi")];

        let grid = table(&items, &ctx);
        let blocks = detail_blocks(&items, &ctx);

        assert_eq!(grid.headers, vec!["NIS", "Nama", "Kelas", "Jenis Kelamin", "Created At", "Updated At"]);
        assert_eq!(blocks[1].title, "Siswa 2");
        for (row, block) in grid.rows.iter().zip(&blocks) {
            let values: Vec<&String> = block.fields.iter().map(|f| &f.value).collect();
            assert_eq!(values, row.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_save_in_writes_named_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");
        let labels = LabelIndices::default();
        let ctx = RenderContext::new(&labels, TimestampFormat::default());
        let artifact = export(&[siswa("s1", "Ani")], ExportFormat::Sheet, &ctx, Some("c1")).unwrap();

        let report = artifact.save_in(&dir).unwrap();
        let path = report.path.clone().unwrap();
        assert!(path.ends_with("siswa_detail_filtered_c1.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
    }
}
