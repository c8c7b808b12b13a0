// ==========================================
// Анализатор прайс-листов - импортёр
// ==========================================
// Назначение: обход каталога, прогон каждого файла через
// конвейер «разделитель → роли → строки», накопление каталога
// Поток: строго последовательный, файл за файлом
// ==========================================

use crate::catalog::Catalog;
use crate::importer::delimiter::{sniff_delimiter, SAMPLE_LEN};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header_resolver::resolve_roles;
use crate::importer::row_normalizer::normalize_row;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};
use walkdir::WalkDir;

// ==========================================
// FileOutcome - исход обработки одного файла
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Файл обработан; часть строк могла быть отброшена
    Imported {
        rows_added: usize,
        rows_discarded: usize,
    },
    /// Не найден полный набор ролей колонок; файл пропущен целиком
    Skipped,
}

// ==========================================
// ImportStats - итоги прогона по каталогу файлов
// ==========================================
// Счётчики пропусков ведутся явно, чтобы тесты проверяли их
// напрямую, а не по выводу в консоль
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub files_found: usize,
    pub files_imported: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub rows_added: usize,
    pub rows_discarded: usize,
}

/// Файл считается прайс-листом, если имя (без учёта регистра)
/// содержит "price" и оканчивается на ".csv".
pub fn is_price_list(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.contains("price") && lower.ends_with(".csv")
}

/// Рекурсивно обходит каталог и обрабатывает все найденные
/// прайс-листы. Порядок обнаружения зависит от файловой системы и
/// определяет только порядок записей в каталоге.
///
/// Ошибка одного файла не прерывает прогон: файл бросается,
/// ошибка сообщается оператору, обход продолжается.
pub fn load_prices(dir: impl AsRef<Path>, catalog: &mut Catalog) -> ImportStats {
    let mut stats = ImportStats::default();

    for entry in WalkDir::new(dir.as_ref())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_name = entry.file_name().to_string_lossy();
        if !is_price_list(&file_name) {
            continue;
        }

        stats.files_found += 1;
        let path = entry.path();
        debug!(file = %path.display(), "обработка прайс-листа");

        let before = catalog.len();
        match process_file(path, catalog) {
            Ok(FileOutcome::Imported {
                rows_added,
                rows_discarded,
            }) => {
                stats.files_imported += 1;
                stats.rows_added += rows_added;
                stats.rows_discarded += rows_discarded;
                info!(
                    file = %path.display(),
                    rows_added,
                    rows_discarded,
                    "файл обработан"
                );
            }
            Ok(FileOutcome::Skipped) => {
                // Молчаливый пропуск: нет полного набора колонок
                stats.files_skipped += 1;
                debug!(file = %path.display(), "пропущен: нет обязательных колонок");
            }
            Err(e) => {
                // Частично добавленные строки сохраняются, отката нет
                stats.files_failed += 1;
                stats.rows_added += catalog.len() - before;
                error!("Ошибка при обработке файла {}: {}", path.display(), e);
            }
        }
    }

    stats
}

/// Прогоняет один файл через конвейер нормализации.
///
/// Записи добавляются в каталог по мере чтения; сбой структуры CSV
/// посреди файла оставляет уже добавленные строки на месте.
pub fn process_file(path: &Path, catalog: &mut Catalog) -> ImportResult<FileOutcome> {
    let bytes = fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|e| ImportError::EncodingError(e.to_string()))?;

    // Образец для определения разделителя: первые ~300 байт,
    // обрезанные до границы символа
    let mut sample_end = SAMPLE_LEN.min(content.len());
    while !content.is_char_boundary(sample_end) {
        sample_end -= 1;
    }
    let delimiter = sniff_delimiter(&content[..sample_end]);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true) // строки разной длины допустимы
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let roles = match resolve_roles(&headers) {
        Some(roles) => roles,
        None => return Ok(FileOutcome::Skipped),
    };

    let mut rows_added = 0;
    let mut rows_discarded = 0;

    for result in reader.records() {
        let record = result?;
        match normalize_row(&record, &roles) {
            Some(product) => {
                catalog.push(product);
                rows_added += 1;
            }
            None => {
                rows_discarded += 1;
                debug!(row = ?record, "строка отброшена: нечисловые цена или вес");
            }
        }
    }

    Ok(FileOutcome::Imported {
        rows_added,
        rows_discarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_price_list_matches() {
        assert!(is_price_list("price_1.csv"));
        assert!(is_price_list("PRICE_LIST.CSV"));
        assert!(is_price_list("supplier_prices.csv"));
    }

    #[test]
    fn test_is_price_list_rejects() {
        assert!(!is_price_list("catalog.csv"));
        assert!(!is_price_list("price.txt"));
        assert!(!is_price_list("price.csv.bak"));
    }
}
