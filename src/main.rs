// ==========================================
// Анализатор прайс-листов - главный вход
// ==========================================
// Поток: загрузка каталога → сводная таблица → HTML-экспорт →
// интерактивный поиск до команды exit
// ==========================================

use price_machine::config::{self, DEFAULT_CONFIG_PATH};
use price_machine::{catalog::Catalog, importer, logging, presenter, query};
use std::io::{self, BufRead, Write};

fn main() {
    // Инициализация логирования
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", price_machine::APP_NAME);
    tracing::info!("Версия: {}", price_machine::VERSION);
    tracing::info!("==================================================");

    // Конфигурация: файл рядом с бинарником либо значения по умолчанию
    let config = match config::load_config(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Каталог прайс-листов: {}", config.price_lists_dir);

    // Фаза загрузки: после неё каталог только читается
    let mut catalog = Catalog::new();
    let stats = importer::load_prices(&config.price_lists_dir, &mut catalog);
    tracing::info!(
        "Загрузка завершена: файлов {}, пропущено {}, с ошибками {}, строк {}, отброшено {}",
        stats.files_imported,
        stats.files_skipped,
        stats.files_failed,
        stats.rows_added,
        stats.rows_discarded
    );

    // Полный список, отсортированный по цене за килограмм
    let sorted = catalog.sorted_by_price_per_kg();
    println!("Список всех товаров из всех файлов, отсортированных по цене за килограмм:");
    print!("{}", presenter::render_table(&sorted, catalog.name_width()));

    // Экспорт в HTML
    if let Err(e) = presenter::export_html(&sorted, &config.html_output) {
        tracing::error!("{}", e);
    }

    // Интерактивный поиск
    run_search_loop(&catalog);
}

/// Цикл поиска: строка со stdin - фрагмент наименования,
/// "exit" (без учёта регистра) завершает работу.
fn run_search_loop(catalog: &Catalog) {
    let stdin = io::stdin();

    loop {
        print!("\nВведите название товара для поиска (или 'exit' для завершения): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // конец ввода
            Ok(_) => {}
        }

        let query_text = line.trim();
        if query_text.eq_ignore_ascii_case("exit") {
            println!("Работа программы завершена.");
            break;
        }

        let found = query::find_products(catalog, query_text);
        if found.is_empty() {
            println!("Товары не найдены.");
        } else {
            print!("{}", presenter::render_table(&found, catalog.name_width()));
        }
    }
}
