//! Terminal UI demo using crossterm and ratatui.
//!
//! This demo shows how a host wires selkit commands to key presses.
//! Run with: cargo run --example tui_crossterm

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ropey::Rope;
use selkit::{
    Engine, LineBuffer,
    grapheme::{GraphemeLine, grapheme_index},
    types::{Command, Position, Selection},
};
use std::io;

const IDENTIFIER_PREFIX: &str = "com.example.selkit-demo.";

/// Text buffer implementation using ropey
struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    fn new() -> Self {
        Self {
            rope: Rope::from(
                "Welcome to the selkit demo!\n\n    Press w / b to select the next / previous word.\n    Press c to select the word under the caret.\n\n    With a word selected, k / j select the word above / below.\n    Press s to select the line contents, d to duplicate lines,\n    and o to open an indented line.\n\nArrow keys move the caret. Press q to quit.",
            ),
        }
    }
}

impl LineBuffer for RopeBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line(&self, line: u32) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }
        let text = self.rope.line(line as usize).to_string();
        Some(text.trim_end_matches(['\n', '\r']).to_string())
    }

    fn insert_line(&mut self, at: u32, text: String) {
        if at < self.line_count() {
            let idx = self.rope.line_to_char(at as usize);
            self.rope.insert(idx, &format!("{text}\n"));
        } else {
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("\n{text}"));
        }
    }
}

struct App {
    engine: Engine,
    buffer: RopeBuffer,
    selections: Vec<Selection>,
    message: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            buffer: RopeBuffer::new(),
            selections: vec![Selection::caret(Position::ZERO)],
            message: "ready".to_string(),
            should_quit: false,
        }
    }

    fn selection(&self) -> Selection {
        self.selections.first().copied().unwrap_or_default()
    }

    fn run(&mut self, command: Command) {
        let identifier = format!("{IDENTIFIER_PREFIX}{command}");
        let mut done = false;
        self.engine
            .perform(&identifier, &mut self.buffer, &mut self.selections, || {
                done = true
            });
        self.message = if done {
            command.to_string()
        } else {
            format!("{command} did not complete")
        };
    }

    fn move_caret(&mut self, dl: i64, dc: i64) {
        let caret = self.selection().end;
        let last_line = self.buffer.line_count().saturating_sub(1) as i64;
        let line = (caret.line as i64 + dl).clamp(0, last_line) as u32;
        let len = self.buffer.line(line).map(|t| t.chars().count()).unwrap_or(0) as i64;
        let col = (caret.col as i64 + dc).clamp(0, len) as u32;
        self.selections = vec![Selection::caret(Position::new(line, col))];
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('w') => self.run(Command::SelectNextWord),
            KeyCode::Char('b') => self.run(Command::SelectPreviousWord),
            KeyCode::Char('c') => self.run(Command::SelectCurrentWord),
            KeyCode::Char('k') => self.run(Command::SelectWordAbove),
            KeyCode::Char('j') => self.run(Command::SelectWordBelow),
            KeyCode::Char('s') => self.run(Command::SelectLineContents),
            KeyCode::Char('d') => self.run(Command::DuplicateLine),
            KeyCode::Char('o') => self.run(Command::MoveToEolAndInsertLf),
            KeyCode::Left => self.move_caret(0, -1),
            KeyCode::Right => self.move_caret(0, 1),
            KeyCode::Up => self.move_caret(-1, 0),
            KeyCode::Down => self.move_caret(1, 0),
            _ => {}
        }
    }
}

fn render_line(text: &str, highlight: Option<(usize, usize)>) -> Line<'static> {
    let Some((from, to)) = highlight else {
        return Line::from(text.to_string());
    };
    let line = GraphemeLine::new(text);
    let (a, b) = (from.min(line.len()), to.min(line.len()));
    let (a, b) = (a.min(b), a.max(b));
    Line::from(vec![
        Span::raw(line.before(a).concat()),
        Span::styled(
            line.graphemes()[a..b].concat(),
            Style::default().bg(Color::Blue),
        ),
        Span::raw(line.starting_at(b).concat()),
    ])
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let sel = app.selection();
    let (first, last) = if sel.start <= sel.end {
        (sel.start, sel.end)
    } else {
        (sel.end, sel.start)
    };

    let mut lines = vec![];
    for i in 0..app.buffer.line_count() {
        let text = app.buffer.line(i).unwrap_or_default();
        let grapheme_line = GraphemeLine::new(&text);
        let highlight = (i >= first.line && i <= last.line).then(|| {
            let from = if i == first.line {
                grapheme_index(&grapheme_line, first.col as usize)
            } else {
                0
            };
            let to = if i == last.line {
                grapheme_index(&grapheme_line, last.col as usize)
            } else {
                grapheme_line.len()
            };
            (from, to)
        });
        lines.push(render_line(&text, highlight));
    }

    let text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("selkit demo"),
    );
    f.render_widget(text, chunks[0]);

    // Status line
    let status = Paragraph::new(format!(
        "{}  |  {}:{} - {}:{}",
        app.message, sel.start.line, sel.start.col, sel.end.line, sel.end.col
    ))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    f.set_cursor(
        chunks[0].x + 1 + sel.end.col as u16,
        chunks[0].y + 1 + sel.end.line as u16,
    );
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_key(key.code);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
