// ==========================================
// Анализатор прайс-листов - базовая библиотека
// ==========================================
// Технологии: Rust + csv + tracing
// Назначение: нормализация разнородных CSV-прайс-листов,
// поиск по каталогу, экспорт в HTML
// ==========================================

// ==========================================
// Объявления модулей
// ==========================================

// Доменный слой - типы записей
pub mod domain;

// Слой импорта - чтение и нормализация файлов
pub mod importer;

// Каталог - накопитель нормализованных записей
pub mod catalog;

// Поиск по каталогу
pub mod query;

// Слой вывода - консольная таблица и HTML
pub mod presenter;

// Конфигурация
pub mod config;

// Система логирования
pub mod logging;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные типы
pub use domain::{ColumnRole, HeaderRoleMap, ProductRecord};

// Каталог
pub use catalog::Catalog;

// Импорт
pub use importer::{
    load_prices, process_file, FileOutcome, ImportError, ImportResult, ImportStats,
};

// Поиск
pub use query::find_products;

// Вывод
pub use presenter::{export_html, render_table};

// Конфигурация
pub use config::{load_config, AppConfig};

// ==========================================
// Константы
// ==========================================

// Версия системы
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Название системы
pub const APP_NAME: &str = "Анализатор прайс-листов";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
