// Native binary for apix - terminal UI for the APIs.guru catalog

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;

use apix::{
    app::{App, InputMode},
    config::load,
    fetch, router,
    types::{AppEvent, FetchRequest},
    ui,
    ui_core::layout,
    ui_core::policy::{self, ClickAction},
    Route,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    let _ = dotenvy::dotenv();

    // Logs go to stderr, quiet by default; RUST_LOG=debug for the firehose
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = load().context("Failed to load configuration")?;

    // Startup route from CLI (default: home)
    let route = match cfg.route.as_deref() {
        Some(raw) => match router::parse(raw) {
            Some(r) => {
                log::info!("Startup route {raw:?} -> {}", r.path());
                r
            }
            None => {
                log::warn!("Unrecognized route argument {raw:?}, starting at home");
                Route::Home
            }
        },
        None => Route::Home,
    };

    // terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // app + channels
    let (event_tx, event_rx) = unbounded_channel::<AppEvent>();
    let (fetch_tx, fetch_rx) = unbounded_channel::<FetchRequest>();

    let cfg_fetch = cfg.clone();
    let fetch_task: JoinHandle<Result<()>> =
        tokio::spawn(fetch::run_fetch_worker(cfg_fetch, fetch_rx, event_tx));

    let mut app = App::new(
        cfg.render_fps,
        cfg.render_fps_choices.clone(),
        cfg.theme,
        Some(fetch_tx),
    );
    app.apply_route(&route);

    // main loop; restore the terminal before surfacing any loop error
    let run_res = run_loop(&mut app, &mut terminal, event_rx).await;

    fetch_task.abort();
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    run_res
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        // frame budget (coalesced renders)
        let frame_ms = 1000u32.saturating_div(app.fps()) as u64;
        let budget = Duration::from_millis(frame_ms.max(1));
        let wait = budget.saturating_sub(last_frame.elapsed());

        // input or worker events
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(k) => {
                    if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                        handle_key(app, k);
                    }
                }
                Event::Mouse(m) => handle_mouse(app, m, terminal)?,
                _ => {}
            }
        }
        while let Ok(ev) = rx.try_recv() {
            app.on_event(ev);
        }

        if last_frame.elapsed() >= budget {
            terminal.draw(|f| ui::draw(f, app))?;
            last_frame = Instant::now();
        }
        if app.quit_flag() {
            break;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, k: KeyEvent) {
    // Filter input mode captures everything printable
    if app.input_mode() == InputMode::Filter {
        match k.code {
            KeyCode::Char(c) => app.filter_add_char(c),
            KeyCode::Backspace => app.filter_backspace(),
            KeyCode::Enter => app.apply_filter(),
            KeyCode::Esc => app.clear_filter(),
            _ => {}
        }
        return;
    }

    let home = matches!(app.route(), Route::Home);

    match (k.code, k.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.on_event(AppEvent::Quit);
        }
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.cycle_fps(),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => app.toggle_debug_panel(),
        (KeyCode::Char('c'), _) => {
            // Copy the current screen's payload
            if apix::copy_api::copy_current(app) {
                let msg = if home {
                    "Copied provider id".to_string()
                } else {
                    "Copied spec summary".to_string()
                };
                app.show_toast(msg);
            } else {
                app.show_toast("Copy failed".to_string());
            }
        }

        // Home screen
        (KeyCode::Enter, _) if home => {
            if app.panel_open() {
                app.activate_selected();
            } else {
                app.press_show_providers();
            }
        }
        (KeyCode::Char('s'), _) if home => app.press_show_providers(),
        (KeyCode::Up, _) if home => app.panel_up(),
        (KeyCode::Down, _) if home => app.panel_down(),
        (KeyCode::Char('/'), _) if home => app.start_filter(),
        (KeyCode::Esc, _) if home => app.close_panel(),

        // Details screen
        (KeyCode::Esc, _) | (KeyCode::Backspace, _) if !home => app.go_home(),
        (KeyCode::Up, _) if !home => app.scroll_details_by(-1),
        (KeyCode::Down, _) if !home => app.scroll_details_by(1),
        (KeyCode::PageUp, _) if !home => app.scroll_details_by(-20),
        (KeyCode::PageDown, _) if !home => app.scroll_details_by(20),
        (KeyCode::Home, _) if !home => app.scroll_details_home(),
        (KeyCode::End, _) if !home => app.scroll_details_end(),
        _ => {}
    }
}

fn handle_mouse(
    app: &mut App,
    mouse: MouseEvent,
    terminal: &Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let home = matches!(app.route(), Route::Home);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !home {
                return Ok(());
            }

            // Rebuild the frame geometry so hits line up with what was drawn
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let chrome = layout::chrome(area, app.filter_expanded(), app.debug_panel_visible());
            let geom = layout::home_layout(chrome.body, app.panel_open());
            let pos = Position::new(mouse.column, mouse.row);

            match policy::resolve_click(&geom, app.panel_offset(), pos) {
                ClickAction::ActivateRow(idx) => {
                    app.log_debug(format!("Mouse select panel row {idx}"));
                    app.activate_panel_index(idx);
                }
                ClickAction::PressButton => {
                    app.log_debug("Mouse press Show Providers".into());
                    app.press_show_providers();
                }
                ClickAction::ButtonDisabled => {
                    app.log_debug("Mouse on disabled Show Providers button".into());
                }
                ClickAction::ClosePanel => {
                    app.log_debug("Mouse outside click closes panel".into());
                    app.close_panel();
                }
                ClickAction::Ignore => {}
            }
        }
        MouseEventKind::ScrollUp => {
            if home {
                app.panel_up();
            } else {
                app.scroll_details_by(-3);
            }
        }
        MouseEventKind::ScrollDown => {
            if home {
                app.panel_down();
            } else {
                app.scroll_details_by(3);
            }
        }
        _ => {}
    }
    Ok(())
}
