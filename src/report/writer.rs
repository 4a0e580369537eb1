// ==========================================
// 滞销库存报表 - 输出写入
// ==========================================
// 唯一有副作用的环节: 写页面 + 写 CSV
// 两个文件先完整写入输出目录下的临时文件，全部成功后再依次改名替换；
// CSV 已替换而页面替换失败时，CSV 回滚为旧内容
// ==========================================

use crate::engine::DashboardSnapshot;
use crate::report::csv_export::{to_csv_bytes, EXPORT_FILE_NAME};
use crate::report::error::{ReportError, ReportResult};
use crate::report::html::{HtmlRenderer, PageMeta};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

pub const PAGE_FILE_NAME: &str = "dead_stock_report.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub html_path: PathBuf,
    pub csv_path: PathBuf,
}

pub struct ReportWriter {
    output_dir: PathBuf,
    renderer: HtmlRenderer,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> ReportResult<Self> {
        Ok(Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            renderer: HtmlRenderer::new()?,
        })
    }

    pub fn write(
        &self,
        snapshot: &DashboardSnapshot<'_>,
        meta: &PageMeta,
    ) -> ReportResult<WrittenReport> {
        let html = self.renderer.render(snapshot, meta)?;
        let csv = to_csv_bytes(&snapshot.detail)?;

        fs::create_dir_all(&self.output_dir).map_err(|e| write_error(&self.output_dir, e))?;

        let html_path = self.output_dir.join(PAGE_FILE_NAME);
        let csv_path = self.output_dir.join(EXPORT_FILE_NAME);

        let staged_html = self.stage(html.as_bytes())?;
        let staged_csv = self.stage(&csv)?;

        // 页面引用 CSV: 先替换 CSV，页面替换失败则回滚 CSV
        let previous_csv = fs::read(&csv_path).ok();
        staged_csv
            .persist(&csv_path)
            .map_err(|e| write_error(&csv_path, e.error))?;
        if let Err(e) = staged_html.persist(&html_path) {
            restore(&csv_path, previous_csv);
            return Err(write_error(&html_path, e.error));
        }

        info!(
            html = %html_path.display(),
            csv = %csv_path.display(),
            rows = snapshot.detail.row_count(),
            "报表已写出"
        );

        Ok(WrittenReport {
            html_path,
            csv_path,
        })
    }

    /// 在输出目录内写临时文件（同一文件系统，改名为原子操作）
    fn stage(&self, content: &[u8]) -> ReportResult<NamedTempFile> {
        let mut file =
            NamedTempFile::new_in(&self.output_dir).map_err(|e| write_error(&self.output_dir, e))?;
        file.write_all(content)
            .and_then(|_| file.flush())
            .map_err(|e| write_error(file.path(), e))?;
        Ok(file)
    }
}

fn restore(path: &Path, previous: Option<Vec<u8>>) {
    let result = match previous {
        Some(bytes) => fs::write(path, bytes),
        None => fs::remove_file(path),
    };
    if let Err(err) = result {
        warn!(path = %path.display(), error = %err, "CSV 回滚失败");
    }
}

fn write_error(path: &Path, err: std::io::Error) -> ReportError {
    ReportError::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, ItemCollection, ItemRecord, Schema};
    use crate::engine::CategorySelector;
    use std::collections::HashMap;

    fn collection() -> ItemCollection {
        let mut cells = HashMap::new();
        cells.insert("Item Name".to_string(), CellValue::Text("Oud".to_string()));
        cells.insert("Stock Value".to_string(), CellValue::Number(10.0));
        ItemCollection::new(
            Schema::new(vec!["Item Name".to_string(), "Stock Value".to_string()]),
            vec![ItemRecord::new(0, cells)],
        )
    }

    fn meta() -> PageMeta {
        PageMeta {
            title: "Dead Stock".to_string(),
            run_id: "run-1".to_string(),
            generated_at: "2025-01-01 00:00".to_string(),
        }
    }

    fn leftover_temp_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp"))
            .count()
    }

    #[test]
    fn test_write_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let c = collection();
        let snapshot = DashboardSnapshot::build(&c, &CategorySelector::All);

        let written = ReportWriter::new(dir.path())
            .unwrap()
            .write(&snapshot, &meta())
            .unwrap();

        assert!(fs::read_to_string(&written.html_path).unwrap().contains("Oud"));
        assert!(fs::read_to_string(&written.csv_path).unwrap().starts_with("Item Name"));
        assert_eq!(leftover_temp_files(dir.path()), 0);
    }

    #[test]
    fn test_csv_failure_leaves_no_page() {
        let dir = tempfile::tempdir().unwrap();
        // CSV 目标被目录占用，改名必然失败
        fs::create_dir(dir.path().join(EXPORT_FILE_NAME)).unwrap();

        let c = collection();
        let snapshot = DashboardSnapshot::build(&c, &CategorySelector::All);
        let result = ReportWriter::new(dir.path()).unwrap().write(&snapshot, &meta());

        assert!(matches!(result, Err(ReportError::Write { .. })));
        assert!(!dir.path().join(PAGE_FILE_NAME).exists());
        assert_eq!(leftover_temp_files(dir.path()), 0);
    }

    #[test]
    fn test_page_failure_restores_previous_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(EXPORT_FILE_NAME), "old").unwrap();
        fs::create_dir(dir.path().join(PAGE_FILE_NAME)).unwrap();

        let c = collection();
        let snapshot = DashboardSnapshot::build(&c, &CategorySelector::All);
        let result = ReportWriter::new(dir.path()).unwrap().write(&snapshot, &meta());

        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap(),
            "old"
        );
        assert_eq!(leftover_temp_files(dir.path()), 0);
    }
}
