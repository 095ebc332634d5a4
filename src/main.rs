use berlin_practice::{
    build_catalog, draw_menu, draw_practice, draw_quit_confirmation, draw_summary,
    handle_menu_input, handle_practice_input, handle_quit_confirm_input, handle_summary_input,
    logger, AppState, PracticeConfig, PracticeView,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    let config = PracticeConfig::from_env();
    if let Some(path) = &config.log_path {
        logger::init(path);
    }
    for warning in &config.warnings {
        logger::log(warning);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore every step even if an earlier one fails.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &PracticeConfig,
) -> io::Result<()> {
    let catalog = build_catalog();
    let mut app_state = AppState::Menu;
    let mut practice: Option<PracticeView> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, &catalog, config.seed),
            AppState::Practice => {
                if let Some(view) = &mut practice {
                    draw_practice(f, view);
                }
            }
            AppState::PracticeQuitConfirm => {
                if let Some(view) = &practice {
                    draw_quit_confirmation(f, view);
                }
            }
            AppState::Summary => {
                if let Some(view) = &practice {
                    draw_summary(f, view.session.state());
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        let quit = match app_state {
            AppState::Menu => handle_menu_input(&mut practice, &catalog, config, key, &mut app_state),
            AppState::Practice => {
                if let Some(view) = &mut practice {
                    handle_practice_input(view, key, &mut app_state);
                }
                false
            }
            AppState::PracticeQuitConfirm => {
                handle_quit_confirm_input(&mut practice, key, &mut app_state);
                false
            }
            AppState::Summary => handle_summary_input(&mut practice, key, &mut app_state),
        };
        if quit {
            break;
        }
    }

    Ok(())
}
