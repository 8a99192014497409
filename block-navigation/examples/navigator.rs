use std::io::{self, Write};

use block_navigation::{Block, BlockNavigation, BlockStore, NavigationConfig, init_logging};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use navdom::{Document, Element, Event, Key};
use simplelog::LevelFilter;
use treegrid::{DefaultFocusQuery, focusables_in_row, rows_in};

fn sample_store() -> BlockStore {
    BlockStore::new(vec![
        Block::new("intro", "core/paragraph").attribute("content", "Welcome to the editor"),
        Block::new("columns", "core/columns").inner_blocks(vec![
            Block::new("left", "core/column").inner_blocks(vec![
                Block::new("pic", "core/image").attribute("label", "Hero image"),
                Block::new("caption", "core/paragraph").attribute("content", "A caption"),
            ]),
            Block::new("right", "core/column")
                .inner_block(Block::new("quote", "core/quote").attribute("content", "Less is more")),
        ]),
        Block::new("outro", "core/media-text"),
    ])
}

fn page(nav: &mut BlockNavigation) -> Element {
    Element::box_()
        .id("page")
        .child(Element::text("Block navigation"))
        .child(nav.render())
        .child(Element::button("Done").id("done"))
}

/// Print each row as indented text; the focused control is bracketed.
fn draw(out: &mut impl Write, doc: &Document, nav: &BlockNavigation) -> io::Result<()> {
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    write!(out, "Arrows move, Enter selects, Tab leaves the grid, q quits\r\n\r\n")?;

    let active = doc.active_element();
    let mark = |el: &Element| {
        let text = el.text_content();
        if Some(el.id.as_str()) == active {
            format!("[{text}]")
        } else {
            format!(" {text} ")
        }
    };

    if let Some(grid) = doc.find(nav.id()) {
        for row in rows_in(grid) {
            let depth = row.aria.level.unwrap_or(0);
            let controls: Vec<String> = focusables_in_row(row, &DefaultFocusQuery)
                .into_iter()
                .map(&mark)
                .collect();
            write!(out, "{}{}\r\n", "  ".repeat(depth), controls.join(" "))?;
        }
    }
    if let Some(done) = doc.find("done") {
        write!(out, "\r\n{}\r\n", mark(done))?;
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = NavigationConfig::new()
        .show_movers(true)
        .show_appender(true)
        .log_level(LevelFilter::Debug)
        .log_file("navigator.log");
    init_logging(&config)?;

    let mut nav = BlockNavigation::new(sample_store(), config)
        .on_select(|id| log::info!("[navigator] selected {}", id));
    let mut doc = Document::new(page(&mut nav));
    if let Some(stop) = nav.grid().tab_stop().map(str::to_string) {
        doc.focus(&stop)?;
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &mut doc, &mut nav);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    out: &mut impl Write,
    doc: &mut Document,
    nav: &mut BlockNavigation,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        draw(out, doc, nav)?;

        let raw = event::read()?;
        if let CrosstermEvent::Key(key) = &raw
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            return Ok(());
        }

        for event in doc.process_events(&[raw]) {
            if let Event::Key { key: Key::Enter, .. } = &event
                && doc.active_element() == Some("done")
            {
                return Ok(());
            }
            nav.handle_event(doc, &event);
        }
    }
}
