use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use tipcalc::Result;
use tipcalc::config::{config_path, get_data_dir, load_settings};
use tipcalc::logging::init_logging;
use tipcalc::ui::{App, handle_event, render};

fn main() -> Result<()> {
    // 配置文件 (~/.config/tipcalc/config.toml)，不存在时使用默认值
    let settings = load_settings(&config_path()?)?;

    // 日志文件 (~/.local/share/tipcalc/tipcalc.log)
    let log_path = get_data_dir()?.join("tipcalc.log");
    init_logging(&log_path, &settings.log_level)?;
    info!(?settings, "starting");

    let mut app = App::new(settings.bill_state());

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if handle_event(app, event::read()?) {
            break;
        }
    }
    Ok(())
}
