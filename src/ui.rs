// 🖥️ Portal TUI - sidebar-style page navigation over the portal datasets
// Single-threaded event loop; every calculator recomputes synchronously on
// the keystroke that changed its input. The currency fetch is the only
// blocking call and is gated by a loading flag.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

use healthops_portal::calculators::basic::{
    date_difference_days, percentage_of, DateDiffResult, PercentageResult,
};
use healthops_portal::calculators::drg::{
    compute_german_los, compute_swiss_los, GermanLosInput, GermanLosResult, SwissLosInput,
    SwissLosResult,
};
use healthops_portal::currency::{convert, ConversionResult, ExchangeRateApi, CURRENCIES};
use healthops_portal::production::{filter_procedures, ProcedureStatus};
use healthops_portal::{charts, dashboard, links, production, sop};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Production,
    Sop,
    Calculator,
    Currency,
    Charts,
    Links,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::Production,
            Page::Production => Page::Sop,
            Page::Sop => Page::Calculator,
            Page::Calculator => Page::Currency,
            Page::Currency => Page::Charts,
            Page::Charts => Page::Links,
            Page::Links => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Links,
            Page::Production => Page::Home,
            Page::Sop => Page::Production,
            Page::Calculator => Page::Sop,
            Page::Currency => Page::Calculator,
            Page::Charts => Page::Currency,
            Page::Links => Page::Charts,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Home => "Home",
            Page::Production => "Production Tracker",
            Page::Sop => "SOP",
            Page::Calculator => "Multi-Calculator",
            Page::Currency => "Currency Converter",
            Page::Charts => "Live Dashboards",
            Page::Links => "Useful Links",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorTab {
    DateDiff,
    Percentage,
    GermanDrg,
    SwissDrg,
}

impl CalculatorTab {
    pub fn title(&self) -> &str {
        match self {
            CalculatorTab::DateDiff => "Date Calc",
            CalculatorTab::Percentage => "Percentage",
            CalculatorTab::GermanDrg => "German DRG",
            CalculatorTab::SwissDrg => "Swiss DRG",
        }
    }

    fn field_count(&self) -> usize {
        match self {
            CalculatorTab::DateDiff => 2,
            CalculatorTab::Percentage => 2,
            CalculatorTab::GermanDrg => 4,
            CalculatorTab::SwissDrg => 5,
        }
    }
}

pub struct App {
    pub current_page: Page,

    // Multi-Calculator
    pub calc_tab: CalculatorTab,
    pub calc_focus: usize,
    pub start_date: String,
    pub end_date: String,
    pub date_result: DateDiffResult,
    pub base_value: String,
    pub percentage_value: String,
    pub percentage_result: PercentageResult,
    pub german: GermanLosInput,
    pub german_result: GermanLosResult,
    pub swiss: SwissLosInput,
    pub swiss_result: SwissLosResult,

    // Currency Converter
    pub amount: String,
    pub from_index: usize,
    pub to_index: usize,
    pub conversion: Option<ConversionResult>,
    pub loading: bool,

    // Production Tracker
    pub procedures: Vec<production::Procedure>,
    pub production_query: String,
    pub status_filter: Option<ProcedureStatus>,
    pub production_state: TableState,

    // SOP / Links search
    pub sop_query: String,
    pub links_query: String,
}

impl App {
    pub fn new() -> Self {
        let mut production_state = TableState::default();
        production_state.select(Some(0));

        Self {
            current_page: Page::Home,
            calc_tab: CalculatorTab::DateDiff,
            calc_focus: 0,
            start_date: String::new(),
            end_date: String::new(),
            date_result: DateDiffResult::Invalid,
            base_value: String::new(),
            percentage_value: String::new(),
            percentage_result: PercentageResult::Invalid,
            german: GermanLosInput::default(),
            german_result: GermanLosResult::Invalid,
            swiss: SwissLosInput::default(),
            swiss_result: SwissLosResult::Invalid,
            amount: String::new(),
            from_index: 0, // USD
            to_index: 1,   // EUR
            conversion: None,
            loading: false,
            procedures: production::procedures(),
            production_query: String::new(),
            status_filter: None,
            production_state,
            sop_query: String::new(),
            links_query: String::new(),
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn next_calc_tab(&mut self) {
        self.calc_tab = match self.calc_tab {
            CalculatorTab::DateDiff => CalculatorTab::Percentage,
            CalculatorTab::Percentage => CalculatorTab::GermanDrg,
            CalculatorTab::GermanDrg => CalculatorTab::SwissDrg,
            CalculatorTab::SwissDrg => CalculatorTab::DateDiff,
        };
        self.calc_focus = 0;
    }

    fn calc_field_mut(&mut self) -> &mut String {
        match self.calc_tab {
            CalculatorTab::DateDiff => match self.calc_focus {
                0 => &mut self.start_date,
                _ => &mut self.end_date,
            },
            CalculatorTab::Percentage => match self.calc_focus {
                0 => &mut self.base_value,
                _ => &mut self.percentage_value,
            },
            CalculatorTab::GermanDrg => match self.calc_focus {
                0 => &mut self.german.max_length_of_stay,
                1 => &mut self.german.daily_rate,
                2 => &mut self.german.cost_weight_factor,
                _ => &mut self.german.actual_length_of_stay,
            },
            CalculatorTab::SwissDrg => match self.calc_focus {
                0 => &mut self.swiss.cost_weight,
                1 => &mut self.swiss.max_length_of_stay,
                2 => &mut self.swiss.base_rate,
                3 => &mut self.swiss.daily_cost_weight_increment,
                _ => &mut self.swiss.actual_length_of_stay,
            },
        }
    }

    /// Recompute the active calculator. Cheap enough to run on every edit.
    pub fn recompute(&mut self) {
        match self.calc_tab {
            CalculatorTab::DateDiff => {
                self.date_result = date_difference_days(&self.start_date, &self.end_date);
            }
            CalculatorTab::Percentage => {
                self.percentage_result = percentage_of(&self.base_value, &self.percentage_value);
            }
            CalculatorTab::GermanDrg => {
                self.german_result = compute_german_los(&self.german);
            }
            CalculatorTab::SwissDrg => {
                self.swiss_result = compute_swiss_los(&self.swiss);
            }
        }
    }

    pub fn edit_calc_field(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.calc_field_mut().push(c);
            self.recompute();
        }
    }

    pub fn backspace_calc_field(&mut self) {
        self.calc_field_mut().pop();
        self.recompute();
    }

    pub fn swap_currencies(&mut self) {
        std::mem::swap(&mut self.from_index, &mut self.to_index);
        self.conversion = None;
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(ProcedureStatus::Scheduled),
            Some(ProcedureStatus::Scheduled) => Some(ProcedureStatus::Prep),
            Some(ProcedureStatus::Prep) => Some(ProcedureStatus::InProgress),
            Some(ProcedureStatus::InProgress) => Some(ProcedureStatus::Completed),
            Some(ProcedureStatus::Completed) => None,
        };
        self.production_state.select(Some(0));
    }

    pub fn visible_procedures(&self) -> Vec<&production::Procedure> {
        filter_procedures(&self.procedures, self.status_filter, &self.production_query)
    }

    pub fn select_next_procedure(&mut self) {
        let len = self.visible_procedures().len();
        if len == 0 {
            return;
        }
        let i = match self.production_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.production_state.select(Some(i));
    }

    pub fn select_previous_procedure(&mut self) {
        let len = self.visible_procedures().len();
        if len == 0 {
            return;
        }
        let i = match self.production_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.production_state.select(Some(i));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rates = ExchangeRateApi::new();
    let res = run_app(&mut terminal, app, &rates);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rates: &ExchangeRateApi,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                _ => match app.current_page {
                    Page::Calculator => handle_calculator_key(app, key.code),
                    Page::Currency => {
                        if handle_currency_key(app, key.code) {
                            // Show the loading state before the blocking fetch
                            terminal.draw(|f| ui(f, app))?;
                            let from = CURRENCIES[app.from_index].code;
                            let to = CURRENCIES[app.to_index].code;
                            app.conversion = Some(convert(&app.amount, from, to, rates));
                            app.loading = false;
                        }
                    }
                    Page::Production => handle_production_key(app, key.code),
                    Page::Sop => handle_search_key(&mut app.sop_query, key.code),
                    Page::Links => handle_search_key(&mut app.links_query, key.code),
                    Page::Home | Page::Charts => {
                        if key.code == KeyCode::Char('q') {
                            return Ok(());
                        }
                    }
                },
            }
        }
    }
}

fn handle_calculator_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Right => app.next_calc_tab(),
        KeyCode::Down => {
            app.calc_focus = (app.calc_focus + 1) % app.calc_tab.field_count();
        }
        KeyCode::Up => {
            let count = app.calc_tab.field_count();
            app.calc_focus = (app.calc_focus + count - 1) % count;
        }
        KeyCode::Backspace => app.backspace_calc_field(),
        KeyCode::Char(c) => app.edit_calc_field(c),
        _ => {}
    }
}

/// Returns true when a conversion should be triggered.
fn handle_currency_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Enter if !app.loading => {
            app.loading = true;
            return true;
        }
        KeyCode::Char('f') => {
            app.from_index = (app.from_index + 1) % CURRENCIES.len();
            app.conversion = None;
        }
        KeyCode::Char('t') => {
            app.to_index = (app.to_index + 1) % CURRENCIES.len();
            app.conversion = None;
        }
        KeyCode::Char('s') => app.swap_currencies(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.amount.push(c);
        }
        KeyCode::Backspace => {
            app.amount.pop();
        }
        _ => {}
    }
    false
}

fn handle_production_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down => app.select_next_procedure(),
        KeyCode::Up => app.select_previous_procedure(),
        KeyCode::Right => app.cycle_status_filter(),
        KeyCode::Backspace => {
            app.production_query.pop();
            app.production_state.select(Some(0));
        }
        KeyCode::Char(c) => {
            app.production_query.push(c);
            app.production_state.select(Some(0));
        }
        _ => {}
    }
}

fn handle_search_key(query: &mut String, code: KeyCode) {
    match code {
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Char(c) => query.push(c),
        _ => {}
    }
}

// ============================================================================
// RENDERING
// ============================================================================

const PAGES: [Page; 7] = [
    Page::Home,
    Page::Production,
    Page::Sop,
    Page::Calculator,
    Page::Currency,
    Page::Charts,
    Page::Links,
];

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Home => render_home(f, chunks[1]),
        Page::Production => render_production(f, chunks[1], app),
        Page::Sop => render_sop(f, chunks[1], app),
        Page::Calculator => render_calculator(f, chunks[1], app),
        Page::Currency => render_currency(f, chunks[1], app),
        Page::Charts => render_charts(f, chunks[1]),
        Page::Links => render_links(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, page) in PAGES.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Healthcare Operations Portal "),
    );

    f.render_widget(header, area);
}

fn render_home(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    // Headline stats
    let stats = dashboard::headline_stats();
    let stat_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(chunks[0]);

    for (stat, chunk) in stats.iter().zip(stat_chunks.iter()) {
        let tone = match stat.tone {
            dashboard::StatTone::Success => Color::Green,
            dashboard::StatTone::Warning => Color::Yellow,
            dashboard::StatTone::Default => Color::White,
        };
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                stat.value,
                Style::default().fg(tone).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.change, Style::default().fg(Color::DarkGray))),
        ])
        .block(Block::default().borders(Borders::ALL).title(stat.title));
        f.render_widget(card, *chunk);
    }

    // Recent activity
    let activity_lines: Vec<Line> = dashboard::recent_activity()
        .iter()
        .map(|entry| {
            let color = match entry.status {
                dashboard::ActivityStatus::Success => Color::Green,
                dashboard::ActivityStatus::Warning => Color::Yellow,
                dashboard::ActivityStatus::Info => Color::Cyan,
            };
            Line::from(vec![
                Span::styled("●", Style::default().fg(color)),
                Span::raw(" "),
                Span::raw(entry.action),
                Span::styled(
                    format!("  ({})", entry.time),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let activity = Paragraph::new(activity_lines)
        .block(Block::default().borders(Borders::ALL).title(" Recent Activity "));
    f.render_widget(activity, chunks[1]);

    // Department utilization gauges
    let metrics = dashboard::department_metrics();
    let gauge_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); metrics.len()])
        .split(chunks[2]);

    for (metric, chunk) in metrics.iter().zip(gauge_chunks.iter()) {
        let color = match metric.status {
            dashboard::DepartmentStatus::Critical => Color::Red,
            dashboard::DepartmentStatus::Warning => Color::Yellow,
            dashboard::DepartmentStatus::Active => Color::Green,
        };
        let gauge = Gauge::default()
            .block(Block::default().title(metric.name))
            .gauge_style(Style::default().fg(color))
            .percent(metric.utilization as u16);
        f.render_widget(gauge, *chunk);
    }
}

fn render_production(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = [
        "ID", "Procedure", "Patient", "Surgeon", "Room", "Start", "Duration", "Status", "%",
    ]
    .iter()
    .map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let visible = app.visible_procedures();
    let rows: Vec<Row> = visible
        .iter()
        .map(|p| {
            let color = match p.status {
                ProcedureStatus::InProgress => Color::Cyan,
                ProcedureStatus::Completed => Color::Green,
                ProcedureStatus::Scheduled => Color::White,
                ProcedureStatus::Prep => Color::Yellow,
            };

            Row::new(vec![
                Cell::from(p.id),
                Cell::from(p.procedure),
                Cell::from(p.patient),
                Cell::from(p.surgeon),
                Cell::from(p.room),
                Cell::from(p.start_time),
                Cell::from(p.estimated_duration),
                Cell::from(p.status.as_str()).style(Style::default().fg(color)),
                Cell::from(format!("{}", p.progress)),
            ])
            .height(1)
        })
        .collect();

    let filter_label = app.status_filter.map_or("all", |s| s.as_str());
    let title = format!(
        " Production Tracker [filter: {}] [search: {}] ",
        filter_label, app.production_query
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(4),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.production_state);
}

fn render_sop(f: &mut Frame, area: Rect, app: &App) {
    let categories = sop::sop_categories();
    let hits = sop::search_procedures(&categories, &app.sop_query);

    let mut lines: Vec<Line> = Vec::new();
    for (category, procedure) in &hits {
        lines.push(Line::from(vec![
            Span::styled(
                procedure.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  v{} · {} · {} · {}",
                    procedure.version,
                    procedure.last_updated,
                    category.title,
                    category.priority.label()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for step in procedure.steps {
            lines.push(Line::from(format!("    • {}", step)));
        }
        if !procedure.warnings.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    ⚠ {}", procedure.warnings.join(" / ")),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
    }

    if hits.is_empty() {
        lines.push(Line::from("No procedures match the search."));
    }

    let title = format!(" Standard Operating Procedures [search: {}] ", app.sop_query);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, area);
}

fn render_calculator(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Calculator tabs
    let tabs = [
        CalculatorTab::DateDiff,
        CalculatorTab::Percentage,
        CalculatorTab::GermanDrg,
        CalculatorTab::SwissDrg,
    ];
    let mut tab_spans = vec![];
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }
        let style = if *tab == app.calc_tab {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(tab.title(), style));
    }
    let tab_bar =
        Paragraph::new(vec![Line::from(tab_spans)]).block(Block::default().borders(Borders::ALL));
    f.render_widget(tab_bar, chunks[0]);

    // Fields and result for the active tab
    let (fields, result): (Vec<(&str, &str)>, String) = match app.calc_tab {
        CalculatorTab::DateDiff => (
            vec![
                ("Start Date (YYYY-MM-DD)", app.start_date.as_str()),
                ("End Date (YYYY-MM-DD)", app.end_date.as_str()),
            ],
            app.date_result.summary(),
        ),
        CalculatorTab::Percentage => (
            vec![
                ("Base Value", app.base_value.as_str()),
                ("Percentage", app.percentage_value.as_str()),
            ],
            app.percentage_result
                .summary_for(&app.base_value, &app.percentage_value),
        ),
        CalculatorTab::GermanDrg => (
            vec![
                ("Maximum LOS (days)", app.german.max_length_of_stay.as_str()),
                ("Bundesland Rate", app.german.daily_rate.as_str()),
                ("Cost Weight Factor", app.german.cost_weight_factor.as_str()),
                ("Actual LOS (days)", app.german.actual_length_of_stay.as_str()),
            ],
            app.german_result.summary(),
        ),
        CalculatorTab::SwissDrg => (
            vec![
                ("Cost Weight", app.swiss.cost_weight.as_str()),
                ("Maximum LOS (days)", app.swiss.max_length_of_stay.as_str()),
                ("DRG Rate", app.swiss.base_rate.as_str()),
                ("Daily Cost Weight", app.swiss.daily_cost_weight_increment.as_str()),
                ("Actual LOS (days)", app.swiss.actual_length_of_stay.as_str()),
            ],
            app.swiss_result.summary(),
        ),
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, (label, value)) in fields.iter().enumerate() {
        let marker = if i == app.calc_focus { "→ " } else { "  " };
        let value_style = if i == app.calc_focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<26}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("[{}]", value), value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        result,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.calc_tab.title())),
    );
    f.render_widget(body, chunks[1]);
}

fn render_currency(f: &mut Frame, area: Rect, app: &App) {
    let from = &CURRENCIES[app.from_index];
    let to = &CURRENCIES[app.to_index];

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Amount: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("[{}]", app.amount), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(format!("From:   {} {} ({})", from.flag, from.code, from.name)),
        Line::from(format!("To:     {} {} ({})", to.flag, to.code, to.name)),
        Line::from(""),
    ];

    if app.loading {
        lines.push(Line::from(Span::styled(
            "Fetching exchange rate...",
            Style::default().fg(Color::Cyan),
        )));
    } else if let Some(conversion) = &app.conversion {
        lines.push(Line::from(Span::styled(
            conversion.summary(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        if let ConversionResult::Converted { rate, .. } = conversion {
            lines.push(Line::from(Span::styled(
                format!("Rate: {:.6}", rate),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Currency Converter "));
    f.render_widget(body, area);
}

fn render_charts(f: &mut Frame, area: Rect) {
    let series = charts::all_series();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);
    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                ])
                .split(*row)
                .to_vec()
        })
        .collect();

    for (series, cell) in series.iter().zip(cells.iter()) {
        let max = series.max_value().max(1.0);
        let width = cell.width.saturating_sub(16).max(4) as f64;

        let lines: Vec<Line> = series
            .labels
            .iter()
            .zip(series.values.iter())
            .map(|(label, value)| {
                let bar_len = ((value / max) * width).round() as usize;
                Line::from(vec![
                    Span::styled(format!("{:<8}", label), Style::default().fg(Color::DarkGray)),
                    Span::styled("█".repeat(bar_len.max(1)), Style::default().fg(Color::Cyan)),
                    Span::raw(format!(" {}", value)),
                ])
            })
            .collect();

        let chart = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(series.title));
        f.render_widget(chart, *cell);
    }
}

fn render_links(f: &mut Frame, area: Rect, app: &App) {
    let categories = links::link_categories();
    let hits = links::search_links(&categories, &app.links_query);

    let mut lines: Vec<Line> = Vec::new();
    let mut last_category = "";
    for (category, link) in &hits {
        if category.id != last_category {
            lines.push(Line::from(Span::styled(
                category.title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            last_category = category.id;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<36}", link.title), Style::default().fg(Color::White)),
            Span::styled(link.url, Style::default().fg(Color::DarkGray)),
        ]));
    }

    if hits.is_empty() {
        lines.push(Line::from(format!("No results for \"{}\"", app.links_query)));
    }

    let title = format!(" Useful Links [search: {}] ", app.links_query);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.current_page {
        Page::Home | Page::Charts => "Tab: next page | Shift+Tab: previous | q/Esc: quit",
        Page::Production => {
            "Tab: next page | ↑/↓: select | →: cycle status filter | type to search | Esc: quit"
        }
        Page::Sop | Page::Links => "Tab: next page | type to search | Backspace: erase | Esc: quit",
        Page::Calculator => {
            "Tab: next page | ←/→: calculator | ↑/↓: field | type to edit | Esc: quit"
        }
        Page::Currency => {
            "Tab: next page | digits: amount | f/t: currencies | s: swap | Enter: convert | Esc: quit"
        }
    };

    let status = Paragraph::new(hints).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_is_closed() {
        let mut page = Page::Home;
        for _ in 0..PAGES.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Home);
        assert_eq!(Page::Home.previous(), Page::Links);
    }

    #[test]
    fn test_calculator_recomputes_on_each_edit() {
        let mut app = App::new();
        app.current_page = Page::Calculator;
        app.calc_tab = CalculatorTab::GermanDrg;

        for (focus, value) in [(0, "6"), (1, "4206.51"), (2, "0.051")] {
            app.calc_focus = focus;
            for c in value.chars() {
                app.edit_calc_field(c);
            }
            // Still invalid until the last field arrives
            assert_eq!(app.german_result, GermanLosResult::Invalid);
        }

        app.calc_focus = 3;
        app.edit_calc_field('9');
        assert_eq!(
            app.german_result,
            GermanLosResult::Excess {
                excess_days: 3,
                amount: 643.60,
            }
        );
    }

    #[test]
    fn test_backspace_invalidates_result() {
        let mut app = App::new();
        app.calc_tab = CalculatorTab::Percentage;
        app.calc_focus = 0;
        app.edit_calc_field('5');
        app.calc_focus = 1;
        app.edit_calc_field('2');
        assert_eq!(app.percentage_result, PercentageResult::Value(0.1));

        app.backspace_calc_field();
        assert_eq!(app.percentage_result, PercentageResult::Invalid);
    }

    #[test]
    fn test_swap_currencies_clears_result() {
        let mut app = App::new();
        app.conversion = Some(ConversionResult::InvalidAmount);
        let (from, to) = (app.from_index, app.to_index);
        app.swap_currencies();
        assert_eq!(app.from_index, to);
        assert_eq!(app.to_index, from);
        assert!(app.conversion.is_none());
    }

    #[test]
    fn test_status_filter_cycles_back_to_none() {
        let mut app = App::new();
        for _ in 0..5 {
            app.cycle_status_filter();
        }
        assert_eq!(app.status_filter, None);
    }
}
