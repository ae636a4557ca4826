mod app;
mod cli;
mod config;
mod data;
mod datasources;
mod error;
mod logic;
mod models;
mod storage;
mod ui;

use app::{App, ComposerField, CropGuideFocus, RecFocus, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::OpenWeatherMapClient;
use error::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use storage::InMemoryRepository;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    CropGuideScreen, ForumScreen, HomeScreen, RecommendationsScreen, WeatherScreen,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Some(Commands::Check) => {
            let config = Config::load(cli.config)?;
            let client = OpenWeatherMapClient::new(config.weather);
            match client.test_connection().await {
                Ok(true) => println!("OpenWeatherMap: OK"),
                Ok(false) | Err(_) => {
                    eprintln!("OpenWeatherMap: connection failed");
                    std::process::exit(1);
                }
            }
            return Ok(());
        }
        None => {}
    }

    // First run: fall through to interactive setup instead of erroring out.
    let config = if Config::exists(cli.config.as_ref()) {
        match Config::load(cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let (config, _) = Config::setup_interactive()?;
        config
    };

    let weather_client = OpenWeatherMapClient::new(config.weather.clone());

    let repo = InMemoryRepository::new();
    let mut app = App::new(config, &repo)?;

    // Queue a lookup for the configured default city; the event loop
    // resolves it after the first draw.
    let default_city = weather_client.default_city().to_string();
    app.weather_state.input = default_city.clone();
    app.weather_state.request_lookup(&default_city);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &weather_client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend<Error = std::io::Error>>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    weather_client: &OpenWeatherMapClient,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Home => {
                    let screen = HomeScreen::new().with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::CropGuide => {
                    let crops = app.filtered_crops();
                    let screen = CropGuideScreen::new(&crops, &app.crop_guide_state);
                    f.render_widget(screen, area);
                }
                Screen::Weather => {
                    let advisories = app.advisories();
                    let screen = WeatherScreen::new(&app.weather_state)
                        .advisories(&advisories)
                        .suggestions(app.crop_suggestions());
                    f.render_widget(screen, area);
                }
                Screen::Recommendations => {
                    let fertilizers = app.filtered_fertilizers();
                    let pesticides = app.filtered_pesticides();
                    let screen = RecommendationsScreen::new(&app.recommendations_state)
                        .fertilizers(&fertilizers)
                        .pesticides(&pesticides);
                    f.render_widget(screen, area);
                }
                Screen::Forum => {
                    let posts = app.visible_posts();
                    let screen = ForumScreen::new(&posts, &app.forum_state)
                        .selected_post(app.forum.selected_post())
                        .composer_open(app.forum.composer_open());
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout so queued weather lookups make progress
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let typing = is_typing(app);
                match key.code {
                    KeyCode::Char('q') if !typing => {
                        app.quit();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        handle_escape(app);
                    }
                    KeyCode::Char(c) if !typing => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code, key.modifiers);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code, key.modifiers);
                    }
                }
            }
        }

        // Resolve a queued weather lookup
        if let Some(city) = app.weather_state.take_pending_city() {
            let result = weather_client.fetch_current(&city).await;
            app.weather_state.apply_result(result);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// True when the focused widget consumes plain character keys, so global
/// shortcuts like `q` and `1`-`5` must not fire.
fn is_typing(app: &App) -> bool {
    match app.screen {
        Screen::Home => false,
        Screen::CropGuide => app.crop_guide_state.focus == CropGuideFocus::Search,
        Screen::Weather => true,
        Screen::Recommendations => app.recommendations_state.focus == RecFocus::Search,
        Screen::Forum => app.forum.composer_open() || app.forum.selected_post().is_some(),
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Forum if app.forum.composer_open() => {
            app.forum.close_composer();
            app.forum_state.composer.clear();
        }
        Screen::Forum if app.forum.selected_post().is_some() => {
            app.forum.close_post();
            app.forum_state.reply.clear();
        }
        _ => app.switch_screen(Screen::Home),
    }
}

fn handle_screen_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.screen {
        Screen::Home => {}
        Screen::CropGuide => handle_crop_guide_input(app, code),
        Screen::Weather => handle_weather_input(app, code),
        Screen::Recommendations => handle_recommendations_input(app, code),
        Screen::Forum => handle_forum_input(app, code, modifiers),
    }
}

fn handle_crop_guide_input(app: &mut App, code: KeyCode) {
    let focus = app.crop_guide_state.focus;
    match code {
        KeyCode::Tab => app.crop_guide_state.focus = focus.next(),
        KeyCode::Left => match focus {
            CropGuideFocus::Season => app.crop_guide_state.cycle_season(false),
            CropGuideFocus::Soil => app.crop_guide_state.cycle_soil(false),
            _ => {}
        },
        KeyCode::Right => match focus {
            CropGuideFocus::Season => app.crop_guide_state.cycle_season(true),
            CropGuideFocus::Soil => app.crop_guide_state.cycle_soil(true),
            _ => {}
        },
        KeyCode::Up if focus == CropGuideFocus::List => {
            app::select_prev(&mut app.crop_guide_state.selected_index);
        }
        KeyCode::Down if focus == CropGuideFocus::List => {
            let count = app.filtered_crops().len();
            app::select_next(&mut app.crop_guide_state.selected_index, count);
        }
        KeyCode::Char(c) if focus == CropGuideFocus::Search => {
            app.crop_guide_state.query.push(c);
            app.crop_guide_state.selected_index = 0;
        }
        KeyCode::Backspace if focus == CropGuideFocus::Search => {
            app.crop_guide_state.query.pop();
            app.crop_guide_state.selected_index = 0;
        }
        _ => {}
    }
}

fn handle_weather_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => {
            let city = app.weather_state.input.clone();
            app.weather_state.request_lookup(&city);
        }
        KeyCode::Backspace => {
            app.weather_state.input.pop();
        }
        KeyCode::Char(c) => {
            app.weather_state.input.push(c);
        }
        _ => {}
    }
}

fn handle_recommendations_input(app: &mut App, code: KeyCode) {
    let focus = app.recommendations_state.focus;
    match code {
        KeyCode::Tab => app.recommendations_state.focus = focus.next(),
        KeyCode::Char('t') if focus != RecFocus::Search => app.recommendations_state.toggle_tab(),
        KeyCode::Left if focus == RecFocus::Crop => app.recommendations_state.cycle_crop(false),
        KeyCode::Right if focus == RecFocus::Crop => app.recommendations_state.cycle_crop(true),
        KeyCode::Up if focus == RecFocus::List => {
            app::select_prev(&mut app.recommendations_state.selected_index);
        }
        KeyCode::Down if focus == RecFocus::List => {
            let count = match app.recommendations_state.tab {
                app::RecTab::Fertilizers => app.filtered_fertilizers().len(),
                app::RecTab::Pesticides => app.filtered_pesticides().len(),
            };
            app::select_next(&mut app.recommendations_state.selected_index, count);
        }
        KeyCode::Char(c) if focus == RecFocus::Search => {
            app.recommendations_state.query.push(c);
            app.recommendations_state.selected_index = 0;
        }
        KeyCode::Backspace if focus == RecFocus::Search => {
            app.recommendations_state.query.pop();
            app.recommendations_state.selected_index = 0;
        }
        _ => {}
    }
}

fn handle_forum_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.forum.composer_open() {
        handle_composer_input(app, code, modifiers);
    } else if app.forum.selected_post().is_some() {
        handle_reply_input(app, code, modifiers);
    } else {
        match code {
            KeyCode::Char('n') => app.forum.open_composer(),
            KeyCode::Char('f') => app.forum_state.cycle_filter(),
            KeyCode::Up => app::select_prev(&mut app.forum_state.selected_index),
            KeyCode::Down => {
                let count = app.visible_posts().len();
                app::select_next(&mut app.forum_state.selected_index, count);
            }
            KeyCode::Enter => app.open_selected_post(),
            _ => {}
        }
    }
}

fn handle_composer_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('s') && modifiers.contains(KeyModifiers::CONTROL) {
        app.submit_post();
        return;
    }

    let composer = &mut app.forum_state.composer;
    match code {
        KeyCode::Tab => composer.focused_field = composer.focused_field.next(),
        KeyCode::Left if composer.focused_field == ComposerField::Category => {
            composer.cycle_category(false);
        }
        KeyCode::Right if composer.focused_field == ComposerField::Category => {
            composer.cycle_category(true);
        }
        KeyCode::Char(c) => {
            if let Some(buffer) = composer.active_buffer() {
                buffer.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(buffer) = composer.active_buffer() {
                buffer.pop();
            }
        }
        _ => {}
    }
}

fn handle_reply_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('s') && modifiers.contains(KeyModifiers::CONTROL) {
        app.submit_reply();
        return;
    }

    let reply = &mut app.forum_state.reply;
    match code {
        KeyCode::Tab => reply.focused_field = reply.focused_field.next(),
        KeyCode::Char(c) => {
            reply.active_buffer().push(c);
        }
        KeyCode::Backspace => {
            reply.active_buffer().pop();
        }
        _ => {}
    }
}
