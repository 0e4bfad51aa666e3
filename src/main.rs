mod app;
mod cli;
mod error;
mod event;
mod logging;
mod operations;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;

use clap::Parser;

use app::App;
use cli::{Cli, Commands};
use logging::LogTarget;
use operations::tasks as ops;
use storage::config::{self, Config};
use storage::tasks::TaskStore;
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(file: Option<PathBuf>, theme: Theme, config: Config) -> io::Result<()> {
    let mut store = TaskStore::new();
    let mut startup_error = None;
    if let Some(path) = &file {
        if let Err(e) = ops::on_load_requested(&mut store, path) {
            startup_error = Some(e);
        }
    }

    let mut app = App::new(store, config, theme);
    match (&file, startup_error) {
        (Some(path), None) => app.config.remember_file(path),
        (_, Some(e)) => {
            if let Some(notice) = ops::failure_notice(ops::Action::Load, &e) {
                app.show_notice(notice);
            }
        }
        _ => {}
    }

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();
    tracing::info!("exiting with {} tasks in memory", app.store.len());

    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::main_view::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}

/// Resolve the theme: `--theme` beats the configured one
fn resolve_theme(flag: Option<&str>, config: &Config) -> error::Result<Theme> {
    match flag {
        Some(name) => Theme::parse(name),
        None => Ok(Theme::from_name(&config.theme.name).unwrap_or_default()),
    }
}

fn main() -> io::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    let config = config::load_config();

    let command = cli.command.unwrap_or(Commands::Tui { file: None });

    match command {
        Commands::Tui { file } => {
            logging::init(LogTarget::File, &config.log.level);

            let theme = match resolve_theme(cli.theme.as_deref(), &config) {
                Ok(theme) => theme,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(2);
                }
            };

            // Set up panic hook to restore terminal state on panic
            let original_hook = panic::take_hook();
            panic::set_hook(Box::new(move |panic_info| {
                ratatui::restore();
                original_hook(panic_info);
            }));

            tracing::info!("starting TUI (theme {})", theme.label());
            run_tui(file.or(cli.file), theme, config)?;
        }
        Commands::List { file, category } => {
            logging::init(LogTarget::Stderr, &config.log.level);
            if let Err(e) = cli::tasks::list(&file, category) {
                eprintln!("Failed to load tasks: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Add {
            file,
            text,
            category,
        } => {
            logging::init(LogTarget::Stderr, &config.log.level);
            if let Err(e) = cli::tasks::add(&file, &text, category) {
                eprintln!("Failed to add task: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
