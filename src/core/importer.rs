use crate::domain::model::ImportSummary;
use crate::domain::ports::LinkService;
use crate::utils::error::{ImportError, Result};
use std::fs::File;
use std::io::Write;

/// CSV 驅動的匯入迴圈：逐列、嚴格循序，上一列的結果印出前不送下一列
pub struct LinkImporter<S: LinkService> {
    service: S,
    base_url: String,
}

impl<S: LinkService> LinkImporter<S> {
    pub fn new(service: S, base_url: String) -> Self {
        Self { service, base_url }
    }

    /// Runs the whole import. Per-row failures are counted and reported but
    /// never abort; only file-level errors return `Err`, and then no summary
    /// is printed.
    pub async fn run(&self, filename: &str) -> Result<ImportSummary> {
        println!("Importing links from {} to {}...", filename, self.base_url);
        println!();

        let file = File::open(filename).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImportError::FileNotFound {
                    path: filename.to_string(),
                }
            } else {
                ImportError::IoError(e)
            }
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut summary = ImportSummary::default();

        for record in reader.records() {
            let record = record?;

            // 欄位不足兩欄：跳過，不輸出也不計數
            if record.len() < 2 {
                continue;
            }

            let slug = record.get(0).unwrap_or("").trim();
            let destination = record.get(1).unwrap_or("").trim();

            if slug.is_empty() || destination.is_empty() {
                continue;
            }

            print!("Creating '{}' -> '{}'... ", slug, destination);
            std::io::stdout().flush()?;

            let outcome = self.service.create_link(slug, destination).await;

            if outcome.success && outcome.status == 200 {
                println!("✓");
                summary.success_count += 1;
            } else {
                println!("✗ (HTTP {})", outcome.status);
                println!("  Response: {}", outcome.message);
                summary.failed_count += 1;
            }
        }

        println!();
        println!("Import complete!");
        println!("  Success: {}", summary.success_count);
        println!("  Failed:  {}", summary.failed_count);

        Ok(summary)
    }
}
