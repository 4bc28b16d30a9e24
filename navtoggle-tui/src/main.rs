mod logging;
mod page;
mod paths;

use std::io;
use std::process::ExitCode;

use crossterm::event::{
    Event as CtEvent, KeyEventKind, MouseButton as CtMouseButton, MouseEventKind,
};
use navdom::{Document, Event, Key, LayoutResult, Listeners, NodeId, Row, Terminal};
use navtoggle::{DisclosureToggle, Installed, ToggleConfig};

fn main() -> ExitCode {
    init_logging();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut doc = page::document();
    let mut listeners = Listeners::new();
    let installed = match DisclosureToggle::install(&mut listeners, &doc, &config) {
        Ok(installed) => installed,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&mut doc, &mut listeners, installed, &config) {
        log::error!("terminal error: {e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging() {
    let Some(dir) = paths::log_dir() else { return };
    if let Err(e) = logging::init(&dir) {
        eprintln!("Warning: logging disabled: {e}");
    }
}

fn load_config() -> Result<ToggleConfig, navtoggle::ConfigError> {
    match paths::config_file() {
        Some(path) => ToggleConfig::load_or_default(path),
        None => Ok(ToggleConfig::default()),
    }
}

fn run(
    doc: &mut Document,
    listeners: &mut Listeners,
    installed: Installed,
    config: &ToggleConfig,
) -> io::Result<()> {
    let mut term = Terminal::new()?;

    loop {
        let (width, _) = term.size()?;
        let layout = navdom::layout(doc, width, |doc, node| {
            node != installed.target || doc[node].classes().contains(&config.active_class)
        });
        term.draw(&rows(doc, &layout, installed, config), Some(installed.trigger))?;

        for event in term.poll(None)? {
            match event {
                CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    match Key::from(key.code) {
                        Key::Char('q') | Key::Escape => return Ok(()),
                        // The trigger is the only control, so it always has focus
                        k if k.is_activation() => {
                            listeners.dispatch(doc, &Event::click(installed.trigger));
                        }
                        _ => {}
                    }
                }
                CtEvent::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(CtMouseButton::Left) =>
                {
                    if let Some(target) = navdom::hit_test(&layout, doc, mouse.column, mouse.row)
                    {
                        listeners.dispatch(doc, &Event::click(target));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Page rows followed by a status line showing the trigger's attribute.
fn rows(
    doc: &Document,
    layout: &LayoutResult,
    installed: Installed,
    config: &ToggleConfig,
) -> Vec<Row> {
    let mut rows = navdom::text_rows(doc, layout);
    let bottom = rows.iter().map(|r| r.y + 1).max().unwrap_or(0);
    let value = doc[installed.trigger]
        .attribute(&config.expanded_attribute)
        .unwrap_or("(absent)");
    rows.push(status_row(doc.root(), bottom + 1, &config.expanded_attribute, value));
    rows
}

fn status_row(node: NodeId, y: u16, attribute: &str, value: &str) -> Row {
    Row {
        node,
        x: 0,
        y,
        text: format!("{attribute}: {value}"),
    }
}
