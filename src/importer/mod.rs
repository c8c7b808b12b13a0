// ==========================================
// Анализатор прайс-листов - слой импорта
// ==========================================
// Назначение: чтение внешних CSV-файлов, наполнение каталога
// Конвейер: разделитель → роли колонок → нормализация строк
// ==========================================

// Объявления модулей
pub mod delimiter;
pub mod error;
pub mod header_resolver;
pub mod price_list_importer;
pub mod row_normalizer;

// Реэкспорт основных типов
pub use delimiter::{sniff_delimiter, FALLBACK_DELIMITER};
pub use error::{ImportError, ImportResult};
pub use header_resolver::resolve_roles;
pub use price_list_importer::{is_price_list, load_prices, process_file, FileOutcome, ImportStats};
pub use row_normalizer::{normalize_row, parse_decimal};
