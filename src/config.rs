// ==========================================
// Анализатор прайс-листов - конфигурация
// ==========================================
// Назначение: пути загрузки и экспорта
// Источник: JSON-файл; отсутствие файла или ключа - значения
// по умолчанию
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Путь к файлу конфигурации по умолчанию
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

fn default_price_lists_dir() -> String {
    "./price_lists".to_string()
}

fn default_html_output() -> String {
    "output.html".to_string()
}

/// Конфигурация приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Каталог с прайс-листами
    #[serde(default = "default_price_lists_dir")]
    pub price_lists_dir: String,

    /// Путь HTML-экспорта
    #[serde(default = "default_html_output")]
    pub html_output: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_lists_dir: default_price_lists_dir(),
            html_output: default_html_output(),
        }
    }
}

/// Загружает конфигурацию из JSON-файла.
///
/// Отсутствующий файл - не ошибка: возвращаются значения по
/// умолчанию. Ошибкой считается только нечитаемый или синтаксически
/// неверный файл.
pub fn load_config(path: impl AsRef<Path>) -> ImportResult<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(
            "файл конфигурации {} не найден, используются значения по умолчанию",
            path.display()
        );
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ImportError::ConfigReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.price_lists_dir, "./price_lists");
        assert_eq!(config.html_output, "output.html");
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.price_lists_dir, "./price_lists");
        assert_eq!(config.html_output, "output.html");
    }

    #[test]
    fn test_partial_json_overrides_one_field() {
        let config: AppConfig =
            serde_json::from_str(r#"{"price_lists_dir": "./data"}"#).unwrap();
        assert_eq!(config.price_lists_dir, "./data");
        assert_eq!(config.html_output, "output.html");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config("/nonexistent/config.json").unwrap();
        assert_eq!(config.price_lists_dir, "./price_lists");
    }
}
