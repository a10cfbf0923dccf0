// twofold: a yes/no branching survey builder, player, and static exporter

use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use twofold::export::{export_html, ExportMode};
use twofold::store::{self, SurveyStore};
use twofold::ui::App;

const DEFAULT_DATA_DIR: &str = "twofold-data";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("twofold");

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage(program_name);
            Ok(())
        }
        Some("export-html") => export_html_command(&args),
        Some("export-json") => export_json_command(&args),
        Some(flag) if flag.starts_with('-') => {
            eprintln!("Error: Unknown option '{}'", flag);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
        data_dir => run_tui(data_dir.unwrap_or(DEFAULT_DATA_DIR)),
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [data-dir]", program_name);
    eprintln!("       {} export-html <output.html> [--editable] [data-dir]", program_name);
    eprintln!("       {} export-json <output.json> [data-dir]", program_name);
    eprintln!();
    eprintln!("Runs the interactive survey player/editor, storing the survey and");
    eprintln!("theme as JSON files under data-dir (default: {}/).", DEFAULT_DATA_DIR);
    eprintln!();
    eprintln!("Player keys:   y/n answer, r restart, s settings, q quit");
    eprintln!("Settings keys: a add, e edit, d delete, R reset, i import,");
    eprintln!("               j export JSON, h export HTML, H editable HTML");
}

fn open_store(data_dir: &str) -> Result<SurveyStore, Box<dyn std::error::Error>> {
    let store = SurveyStore::open(data_dir)?;
    Ok(store)
}

fn run_tui(data_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(data_dir)?;
    let graph = match store.load_graph() {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: Failed to load survey: {}", e);
            std::process::exit(1);
        }
    };
    let theme = store.load_theme();

    eprintln!(
        "Loaded {} question(s) from {}",
        graph.len(),
        store.dir().display()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(store, graph, theme);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn export_html_command(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut output = None;
    let mut editable = false;
    let mut data_dir = DEFAULT_DATA_DIR;

    for arg in &args[2..] {
        if arg == "--editable" {
            editable = true;
        } else if output.is_none() {
            output = Some(arg.as_str());
        } else {
            data_dir = arg.as_str();
        }
    }

    let Some(output) = output else {
        eprintln!("Error: No output file provided");
        eprintln!("Usage: twofold export-html <output.html> [--editable] [data-dir]");
        std::process::exit(1);
    };

    let store = open_store(data_dir)?;
    let graph = store.load_graph()?;
    let theme = store.load_theme();
    let mode = if editable {
        ExportMode::Editable
    } else {
        ExportMode::Simple
    };

    store::save_file(Path::new(output), &export_html(&graph, &theme, mode))?;
    eprintln!("Exported {} question(s) to {}", graph.len(), output);
    Ok(())
}

fn export_json_command(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut output = None;
    let mut data_dir = DEFAULT_DATA_DIR;

    for arg in &args[2..] {
        if output.is_none() {
            output = Some(arg.as_str());
        } else {
            data_dir = arg.as_str();
        }
    }

    let Some(output) = output else {
        eprintln!("Error: No output file provided");
        eprintln!("Usage: twofold export-json <output.json> [data-dir]");
        std::process::exit(1);
    };

    let store = open_store(data_dir)?;
    let graph = store.load_graph()?;
    store.export_questions(&graph, Path::new(output))?;
    eprintln!("Exported {} question(s) to {}", graph.len(), output);
    Ok(())
}
