// ==========================================
// Анализатор прайс-листов - модель товара
// ==========================================
// ProductRecord: нормализованная позиция прайс-листа
// ColumnRole / HeaderRoleMap: сопоставление колонок файла
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductRecord - нормализованная позиция
// ==========================================
// Создаётся импортёром, далее только читается
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,      // наименование товара (обрезанные пробелы, может быть пустым)
    pub price: f64,        // цена, округлена до 2 знаков
    pub weight: f64,       // вес/фасовка, округлён до 3 знаков
    pub price_per_kg: f64, // цена за кг: price / weight при weight > 0, иначе 0; 2 знака
}

// ==========================================
// ColumnRole - семантическая роль колонки
// ==========================================
// Единственный источник истины по наборам синонимов заголовков
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Product,
    Price,
    Weight,
    Unknown,
}

impl ColumnRole {
    /// Классифицирует заголовок колонки (без учёта регистра).
    pub fn of_header(header: &str) -> Self {
        match header.trim().to_lowercase().as_str() {
            "название" | "продукт" | "товар" | "наименование" => ColumnRole::Product,
            "цена" | "розница" => ColumnRole::Price,
            "фасовка" | "масса" | "вес" => ColumnRole::Weight,
            _ => ColumnRole::Unknown,
        }
    }
}

// ==========================================
// HeaderRoleMap - карта ролей одного файла
// ==========================================
// Живёт только на время обработки файла: хранит индексы
// колонок, под которыми в этом файле лежат три обязательные роли
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRoleMap {
    pub product: usize,
    pub price: usize,
    pub weight: usize,
}
