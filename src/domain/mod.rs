// ==========================================
// Анализатор прайс-листов - доменный слой
// ==========================================
// Назначение: канонические типы данных каталога
// Не содержит: логики разбора файлов, логики вывода
// ==========================================

pub mod product;

// Реэкспорт основных типов
pub use product::{ColumnRole, HeaderRoleMap, ProductRecord};
