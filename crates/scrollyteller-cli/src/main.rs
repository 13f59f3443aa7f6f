use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use scrollyteller_config::{Config, ConfigError};
use scrollyteller_engine::layout::VIEWPORT_VH;
use scrollyteller_engine::simulate::{PinState, ScrollSimulation};
use scrollyteller_engine::{
    DirectorySource, Narrative, NarrativeSection, NarrativeSource, derive_title, io,
    plan_narrative,
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

const LINE_STEP_VH: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Stories,
    Preview,
}

/// A loaded story and its simulated scroll position
struct Preview {
    key: String,
    narrative: Narrative,
    simulation: ScrollSimulation,
}

impl Preview {
    fn new(key: String, narrative: Narrative) -> Self {
        let simulation = ScrollSimulation::new(plan_narrative(&narrative));
        Self {
            key,
            narrative,
            simulation,
        }
    }

    fn lines(&self) -> Vec<String> {
        let sim = &self.simulation;
        let mut lines = vec![
            format!("# {}", self.narrative.title_for(&self.key)),
            format!(
                "Scroll: {:.0}vh / {:.0}vh   Revealed: {}/{}",
                sim.scroll_top_vh(),
                sim.max_scroll_vh(),
                sim.revealed_count(),
                sim.fragment_count()
            ),
            format!("State: {}", describe_pin_state(sim.pin_state())),
            String::new(),
        ];

        let current = sim.current_section().map(|section| section.index);
        let plan = sim.plan();

        for (index, section) in self.narrative.sections.iter().enumerate() {
            let marker = if current == Some(index) { ">" } else { " " };
            let Some(planned) = plan.sections.iter().find(|planned| planned.index == index) else {
                lines.push(format!(
                    "{marker} [{index}] skipped: unrecognized kind {:?}",
                    section.tag().unwrap_or("<missing>")
                ));
                continue;
            };

            lines.push(format!(
                "{marker} [{index}] {} {}vh at {}vh",
                section.tag().unwrap_or("<missing>"),
                planned.layout.height_vh(),
                planned.offset_vh
            ));

            if let NarrativeSection::PinnedBackground(pinned) = section {
                for (fragment_index, fragment) in pinned.fragments.iter().enumerate() {
                    let shown = if sim.is_revealed(index, fragment_index) {
                        "*"
                    } else {
                        "."
                    };
                    lines.push(format!(
                        "    {shown} {:<6} {}",
                        fragment.alignment.css_class().trim_start_matches("align-"),
                        fragment.content
                    ));
                }
            }
        }

        lines
    }
}

fn describe_pin_state(state: PinState) -> String {
    match state {
        PinState::Hero => "hero".to_string(),
        PinState::Pinned { index } => format!("background of section {index} pinned"),
        PinState::Flowing { index } => format!("section {index} scrolling"),
        PinState::End => "end of story".to_string(),
    }
}

struct App {
    source: DirectorySource,
    keys: Vec<String>,
    story_list_state: ListState,
    focus: Focus,
    preview: Option<Preview>,
    message: Vec<String>,
}

impl App {
    fn new(source: DirectorySource, initial_key: Option<String>) -> Result<Self> {
        let keys = source.keys()?;

        let mut app = Self {
            source,
            keys,
            story_list_state: ListState::default(),
            focus: Focus::Stories,
            preview: None,
            message: Vec::new(),
        };

        let initial_index = initial_key
            .as_ref()
            .and_then(|key| app.keys.iter().position(|k| k == key));
        match (initial_key, initial_index) {
            (Some(_), Some(index)) => {
                app.story_list_state.select(Some(index));
                app.open_selected_story();
            }
            (Some(key), None) => {
                app.message = vec![format!("Story \"{key}\" not found")];
                if !app.keys.is_empty() {
                    app.story_list_state.select(Some(0));
                }
            }
            (None, _) if !app.keys.is_empty() => app.story_list_state.select(Some(0)),
            (None, _) => {}
        }

        Ok(app)
    }

    fn next_story(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = match self.story_list_state.selected() {
            Some(i) => (i + 1) % self.keys.len(),
            None => 0,
        };
        self.story_list_state.select(Some(i));
    }

    fn previous_story(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = match self.story_list_state.selected() {
            Some(0) | None => self.keys.len() - 1,
            Some(i) => i - 1,
        };
        self.story_list_state.select(Some(i));
    }

    fn open_selected_story(&mut self) {
        let Some(key) = self
            .story_list_state
            .selected()
            .and_then(|index| self.keys.get(index))
            .cloned()
        else {
            return;
        };

        match self.source.fetch(&key) {
            Ok(narrative) => {
                self.preview = Some(Preview::new(key, narrative));
                self.message.clear();
                self.focus = Focus::Preview;
            }
            Err(e) if e.is_not_found() => {
                self.preview = None;
                self.message = vec![format!("Story \"{key}\" not found")];
            }
            Err(e) => {
                self.preview = None;
                self.message = vec![format!("Error loading story \"{key}\": {e}")];
            }
        }
    }

    fn scroll_by(&mut self, delta_vh: f32) {
        if let Some(preview) = self.preview.as_mut() {
            preview.simulation.scroll_by(delta_vh);
        }
    }

    fn scroll_to(&mut self, top_vh: f32) {
        if let Some(preview) = self.preview.as_mut() {
            preview.simulation.scroll_to(top_vh);
        }
    }

    fn preview_lines(&self) -> Vec<String> {
        match &self.preview {
            Some(preview) => preview.lines(),
            None if !self.message.is_empty() => self.message.clone(),
            None => vec!["Select a story and press Enter to preview it".to_string()],
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("scrollyteller-cli");
    let config_path = Config::config_path();

    let launch = match Config::resolve_launch(args.get(1..).unwrap_or_default(), &config_path) {
        Ok(launch) => launch,
        Err(ConfigError::MissingConfig { config_path }) => {
            eprintln!("Error: No narratives path provided and no config file found");
            eprintln!("Usage: {program_name} [narratives-path] [narrative-key]");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(ConfigError::Usage) => {
            eprintln!("Usage: {program_name} [narratives-path] [narrative-key]");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} [narratives-path] [narrative-key]");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_narratives_dir(&launch.narratives_path) {
        let source = if launch.from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Narratives path '{}'{} is invalid: {e}",
            launch.narratives_path.display(),
            source
        );
        process::exit(1);
    }

    let source = DirectorySource::new(launch.narratives_path)?;
    let mut app = App::new(source, launch.narrative_key)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (app.focus, key.code) {
            (_, KeyCode::Char('q')) => return Ok(()),
            (Focus::Stories, KeyCode::Down | KeyCode::Char('j')) => app.next_story(),
            (Focus::Stories, KeyCode::Up | KeyCode::Char('k')) => app.previous_story(),
            (Focus::Stories, KeyCode::Enter | KeyCode::Char(' ')) => app.open_selected_story(),
            (Focus::Stories, KeyCode::Tab) if app.preview.is_some() => app.focus = Focus::Preview,
            (Focus::Preview, KeyCode::Down | KeyCode::Char('j')) => app.scroll_by(LINE_STEP_VH),
            (Focus::Preview, KeyCode::Up | KeyCode::Char('k')) => app.scroll_by(-LINE_STEP_VH),
            (Focus::Preview, KeyCode::PageDown | KeyCode::Char(' ')) => {
                app.scroll_by(VIEWPORT_VH as f32)
            }
            (Focus::Preview, KeyCode::PageUp) => app.scroll_by(-(VIEWPORT_VH as f32)),
            (Focus::Preview, KeyCode::Home | KeyCode::Char('g')) => app.scroll_to(0.0),
            (Focus::Preview, KeyCode::End | KeyCode::Char('G')) => app.scroll_to(f32::MAX),
            (Focus::Preview, KeyCode::Esc | KeyCode::Tab) => app.focus = Focus::Stories,
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let focused = Style::default().fg(Color::Yellow);
    let (stories_border, preview_border) = match app.focus {
        Focus::Stories => (focused, Style::default()),
        Focus::Preview => (Style::default(), focused),
    };

    let story_items: Vec<ListItem> = app
        .keys
        .iter()
        .map(|key| ListItem::new(vec![Line::from(vec![Span::raw(derive_title(key))])]))
        .collect();

    let stories = List::new(story_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(stories_border)
                .title("Stories"),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(stories, chunks[0], &mut app.story_list_state);

    let preview_text: Vec<Line> = app
        .preview_lines()
        .into_iter()
        .map(|line| Line::from(vec![Span::raw(line)]))
        .collect();

    let preview = Paragraph::new(preview_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(preview_border)
                .title("Preview"),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(preview, chunks[1]);

    let help_text = match app.focus {
        Focus::Stories => "q: Quit | ↑/k ↓/j: Select | Enter: Preview | Tab: Switch pane",
        Focus::Preview => {
            "q: Quit | ↑/k ↓/j: Scroll | PgUp/PgDn: Page | g/G: Top/Bottom | Esc: Stories"
        }
    };
    f.render_widget(Paragraph::new(Line::from(help_text)), rows[1]);
}
