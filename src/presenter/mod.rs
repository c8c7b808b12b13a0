// ==========================================
// Анализатор прайс-листов - слой вывода
// ==========================================
// Назначение: табличное представление записей каталога
// Вход: последовательность записей, уже отсортированная вызывающим
// ==========================================

pub mod console;
pub mod html;

// Реэкспорт основных функций
pub use console::render_table;
pub use html::export_html;
