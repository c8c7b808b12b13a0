// ==========================================
// Анализатор прайс-листов - поиск по каталогу
// ==========================================
// Назначение: подстрочный поиск без учёта регистра
// Результат отсортирован по возрастанию цены за кг
// ==========================================

use crate::catalog::Catalog;
use crate::domain::ProductRecord;

/// Ищет товары, наименование которых содержит фрагмент `search_text`
/// (без учёта регистра). Результат отсортирован по возрастанию цены
/// за килограмм; при равенстве сохраняется порядок каталога.
///
/// Пустой результат — нормальный исход, не ошибка.
pub fn find_products(catalog: &Catalog, search_text: &str) -> Vec<ProductRecord> {
    let needle = search_text.to_lowercase();

    let mut found: Vec<ProductRecord> = catalog
        .records()
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // sort_by стабильна, порядок вставки при равной цене сохраняется
    found.sort_by(|a, b| a.price_per_kg.total_cmp(&b.price_per_kg));
    found
}
