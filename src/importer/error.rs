// ==========================================
// Анализатор прайс-листов - ошибки импорта
// ==========================================
// Инструмент: thiserror
// Видимый оператору класс ошибок один: отказ на уровне файла.
// Пропуск строки и пропуск файла без нужных колонок - не ошибки.
// ==========================================

use thiserror::Error;

/// Ошибки импорта прайс-листов
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Ошибки доступа к файлам =====
    #[error("Не удалось прочитать файл: {0}")]
    FileReadError(String),

    #[error("Файл не в кодировке UTF-8: {0}")]
    EncodingError(String),

    // ===== Ошибки структуры CSV =====
    #[error("Ошибка разбора CSV: {0}")]
    CsvParseError(String),

    // ===== Ошибки конфигурации =====
    #[error("Ошибка чтения конфигурации {path}: {message}")]
    ConfigReadError { path: String, message: String },

    // ===== Ошибки экспорта =====
    #[error("Не удалось записать файл экспорта {path}: {message}")]
    ExportWriteError { path: String, message: String },

    // ===== Общие ошибки =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Реализация From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// Реализация From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Псевдоним Result для импорта
pub type ImportResult<T> = Result<T, ImportError>;
