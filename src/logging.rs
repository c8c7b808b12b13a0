// ==========================================
// Инициализация системы логирования
// ==========================================
// Используются tracing и tracing-subscriber
// Уровень задаётся переменной окружения
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Инициализирует систему логирования
///
/// # Переменные окружения
/// - RUST_LOG: фильтр уровня логов (по умолчанию: info)
///   Например: RUST_LOG=debug или RUST_LOG=price_machine=trace
///
/// # Пример
/// ```no_run
/// use price_machine::logging;
/// logging::init();
/// ```
pub fn init() {
    // Уровень из переменной окружения, по умолчанию info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Формат вывода
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Инициализация логирования в тестах
///
/// Более подробный уровень, вывод через test writer
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
