use anyhow::{Context, Result};
use argh::FromArgs;
use colored::Colorize;
use portfolio_terminal::completion::TerminalHelper;
use portfolio_terminal::render::Renderer;
use portfolio_terminal::{
    ContentStore, JsonFileStore, MemoryStore, PortfolioRecord, Route, Session, Terminal,
    TerminalConfig, TranscriptEvent, follow, showcase,
};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(FromArgs)]
/// A personal portfolio behind a simulated shell.
struct Args {
    /// toml file with identity, timing and content settings.
    #[argh(option)]
    config: Option<PathBuf>,

    /// json portfolio document; overrides the config file.
    #[argh(option)]
    portfolio: Option<PathBuf>,

    /// log level (trace, debug, info, warn, error).
    #[argh(option)]
    log_level: Option<String>,

    /// open a view directly: terminal or showcase.
    #[argh(option)]
    view: Option<Route>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => TerminalConfig::default(),
    };
    if let Some(path) = args.portfolio {
        config.portfolio = Some(path);
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    setup_logging(&config.log_level);

    let store: Arc<dyn ContentStore> = match &config.portfolio {
        Some(path) => {
            info!(path = %path.display(), "serving portfolio from file");
            Arc::new(JsonFileStore::new(path))
        }
        None => Arc::new(MemoryStore::new(PortfolioRecord::sample())),
    };

    let mut route = args.view.unwrap_or(Route::Landing);
    loop {
        debug!(?route, "switching view");
        route = match route {
            Route::Landing => match landing(&config)? {
                Some(next) => next,
                None => break,
            },
            Route::Terminal => run_terminal(Arc::clone(&store), &config).await?,
            Route::Showcase => run_showcase(store.as_ref())?,
        };
    }
    Ok(())
}

fn setup_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::WARN);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// The entry menu. `None` means quit.
fn landing(config: &TerminalConfig) -> Result<Option<Route>> {
    let mut rl = DefaultEditor::new()?;
    println!(
        "{}",
        format!("Welcome to {}'s Portfolio...", config.identity.owner).green()
    );
    println!("{}", "Choose your view:".green());
    println!("  1) CLI Hacker Terminal");
    println!("  2) Modern Developer Portfolio");
    println!("  q) Quit");

    loop {
        match rl.readline("> ") {
            Ok(line) => match line.trim() {
                "1" => return Ok(Some(Route::Terminal)),
                "2" => return Ok(Some(Route::Showcase)),
                "q" | "Q" => return Ok(None),
                _ => println!("{}", "Press 1, 2 or q.".bright_black()),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
    }
}

async fn run_terminal(store: Arc<dyn ContentStore>, config: &TerminalConfig) -> Result<Route> {
    let (mut terminal, mut events) = Terminal::mount(store, config);
    let mut renderer = Renderer::new(io::stdout(), &config.timing).without_echo();
    if config.greeting {
        terminal.greet().await;
    }
    drain(&mut events, &mut renderer).await?;

    let mut rl: Editor<TerminalHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(TerminalHelper));

    loop {
        let prompt = terminal.prompt().await;
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(Route::Landing),
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        let navigation = terminal.submit(&line).await;
        renderer.set_matrix(terminal.state().await.matrix_active);
        drain(&mut events, &mut renderer).await?;

        // Input stays blocked while the train runs.
        if terminal.is_animating().await {
            while let Some(event) = events.recv().await {
                renderer.render(&event).await?;
                if event == TranscriptEvent::AnimationFinished {
                    break;
                }
            }
        }

        if let Some(navigation) = navigation {
            return Ok(follow(navigation).await);
        }
    }
}

async fn drain(
    events: &mut UnboundedReceiver<TranscriptEvent>,
    renderer: &mut Renderer<Stdout>,
) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        renderer.render(&event).await?;
    }
    Ok(())
}

fn run_showcase(store: &dyn ContentStore) -> Result<Route> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new();
    let mut record: Option<Arc<PortfolioRecord>> = None;

    loop {
        if record.is_none() {
            record = store.get();
        }
        println!("{}\n", showcase::render_page(record.as_deref(), &session));
        println!(
            "{}",
            "Type a project number to like it, or b to go back.".bright_black()
        );

        let line = match rl.readline("showcase> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(Route::Landing),
            Err(e) => return Err(e.into()),
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("b") {
            return Ok(Route::Landing);
        }

        let (Ok(index), Some(record)) = (input.parse::<usize>(), record.as_deref()) else {
            continue;
        };
        match showcase::toggle_like(record, &mut session, index) {
            Some((name, true)) => println!("{}", format!("♥ Liked {name}").green()),
            Some((name, false)) => println!("♡ Unliked {name}"),
            None => println!("{}", format!("No project {index}").red()),
        }
    }
}
