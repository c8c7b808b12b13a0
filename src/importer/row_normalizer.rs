// ==========================================
// Анализатор прайс-листов - нормализация строк
// ==========================================
// Назначение: извлечь три поля строки, привести числа, посчитать
// цену за килограмм. Непригодная строка отбрасывается молча.
// ==========================================

use crate::domain::{HeaderRoleMap, ProductRecord};
use csv::StringRecord;

/// Приводит текст числового поля к f64.
///
/// Контракт: десятичный разделитель - точка или запятая; разделители
/// тысяч и любое иное нечисловое содержимое дают `None`. Пробелы по
/// краям обрезаются.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

/// Округление до 2 знаков (цены)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Округление до 3 знаков (вес)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Нормализует одну строку данных по карте ролей файла.
///
/// Отсутствующая ячейка наименования трактуется как пустая строка,
/// отсутствующая числовая ячейка - как "0". Отрицательные значения
/// принимаются как есть: пайплайн намеренно толерантен и валидацией
/// диапазонов не занимается.
///
/// `None` - цена или вес не распознаны, строка отбрасывается.
pub fn normalize_row(row: &StringRecord, roles: &HeaderRoleMap) -> Option<ProductRecord> {
    let name = row.get(roles.product).unwrap_or("").trim().to_string();
    let price = parse_decimal(row.get(roles.price).unwrap_or("0"))?;
    let weight = parse_decimal(row.get(roles.weight).unwrap_or("0"))?;

    let price = round2(price);
    let weight = round3(weight);

    // Защита от деления на ноль: при нулевом весе цена за кг равна нулю
    let price_per_kg = if weight > 0.0 { price / weight } else { 0.0 };

    Some(ProductRecord {
        name,
        price,
        weight,
        price_per_kg: round2(price_per_kg),
    })
}
