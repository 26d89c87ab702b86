//! The interactive terminal front end.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifegame_lib::{Game, Size, Surface, UNIT_BITS};
use log::debug;
use rand::{thread_rng, Rng};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// How often the generation rate in the top bar is recomputed.
const RATE_WINDOW: Duration = Duration::from_secs(1);

/// Draws two board rows per terminal row with half-block glyphs.
///
/// The board is clipped to the terminal; only its top left corner is shown
/// when it does not fit.
struct HalfBlocks {
    columns: u16,
    rows: u16,
    lines: Vec<String>,
}

impl HalfBlocks {
    fn new(columns: u16, rows: u16) -> Self {
        HalfBlocks {
            columns,
            rows,
            lines: Vec::new(),
        }
    }
}

impl Surface for HalfBlocks {
    fn blit(&mut self, bits: &[u8], size: Size) {
        let stride = (size.width / UNIT_BITS) as usize;
        let alive = |x: i32, y: i32| {
            y < size.height
                && bits[y as usize * stride + (x / UNIT_BITS) as usize] & (1 << (x % UNIT_BITS))
                    != 0
        };
        let width = size.width.min(self.columns as i32);
        let height = ((size.height + 1) / 2).min(self.rows as i32);
        self.lines.clear();
        for row in 0..height {
            let line = (0..width)
                .map(|x| match (alive(x, 2 * row), alive(x, 2 * row + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect();
            self.lines.push(line);
        }
    }
}

/// Whether generations are computed on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
}

struct GameWindow {
    stdout: Stdout,
    surface: HalfBlocks,
    status: Status,
    interval: Duration,
    last_step: Instant,

    /// Generations per second, measured over the last window.
    rate: f64,
    rate_start: Instant,
    rate_generation: u64,

    /// A one-off message shown in the bottom bar.
    message: Option<String>,
}

impl GameWindow {
    fn new(interval: Duration) -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let (columns, rows) = terminal::size()?;
        let now = Instant::now();
        Ok(GameWindow {
            stdout,
            surface: HalfBlocks::new(columns, rows.saturating_sub(2)),
            status: Status::Running,
            interval,
            last_step: now,
            rate: 0.0,
            rate_start: now,
            rate_generation: 0,
            message: None,
        })
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        self.surface = HalfBlocks::new(columns, rows.saturating_sub(2));
    }

    fn update(&mut self, game: &Game) -> io::Result<()> {
        game.paint(&mut self.surface);
        let columns = self.surface.columns as usize;

        let pattern = game.pattern().map_or("random", |p| p.name());
        let top = format!(
            "Gen: {}  Cells: {}  Pattern: {}  Speed: {:.1} gen/s",
            game.generation(),
            game.population(),
            pattern,
            self.rate
        );
        let bottom = match (&self.message, self.status) {
            (Some(message), _) => message.clone(),
            (None, Status::Running) => {
                String::from("Running. Press [space] to pause, [q] to quit.")
            }
            (None, Status::Paused) => {
                String::from("Paused. Press [space] to resume, [n] to step.")
            }
        };

        queue!(self.stdout, Clear(ClearType::All), SetAttribute(Attribute::Reverse))?;
        queue!(self.stdout, MoveTo(0, 0), Print(pad(&top, columns)))?;
        queue!(
            self.stdout,
            MoveTo(0, self.surface.rows + 1),
            Print(pad(&bottom, columns)),
            SetAttribute(Attribute::Reset)
        )?;
        for (row, line) in self.surface.lines.iter().enumerate() {
            queue!(self.stdout, MoveTo(0, row as u16 + 1), Print(line))?;
        }
        self.stdout.flush()
    }

    /// How long to wait for a key before the next generation is due.
    fn timeout(&self) -> Option<Duration> {
        match self.status {
            Status::Running => Some(self.interval.saturating_sub(self.last_step.elapsed())),
            Status::Paused => None,
        }
    }

    fn step(&mut self, game: &mut Game) {
        game.next();
        self.last_step = Instant::now();
        let elapsed = self.rate_start.elapsed();
        if elapsed >= RATE_WINDOW {
            let generations = game.generation().saturating_sub(self.rate_generation);
            self.rate = generations as f64 / elapsed.as_secs_f64();
            self.rate_start = self.last_step;
            self.rate_generation = game.generation();
        }
    }

    fn toggle(&mut self) {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => {
                self.last_step = Instant::now();
                Status::Running
            }
        };
    }

    /// Starts a new rate measurement from the current generation.
    fn restart_rate(&mut self, game: &Game) {
        self.rate_start = Instant::now();
        self.rate_generation = game.generation();
    }

    fn select_pattern(&mut self, game: &mut Game, index: usize) {
        if game.set_pattern(index) {
            self.message = None;
        } else {
            self.message = Some(match game.patterns().get(index) {
                Some(pattern) => format!("Pattern {} does not fit on the board.", pattern.name()),
                None => format!("There is no pattern {}.", index),
            });
        }
        self.restart_rate(game);
    }
}

impl Drop for GameWindow {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn pad(text: &str, columns: usize) -> String {
    let mut line: String = text.chars().take(columns).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(columns - len));
    line
}

/// Runs the game in the terminal until `q` is pressed.
pub(crate) fn run(mut game: Game, interval: Duration) -> io::Result<()> {
    let mut window = GameWindow::new(interval)?;
    window.update(&game)?;

    loop {
        let ready = match window.timeout() {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if !ready {
            window.step(&mut game);
            window.update(&game)?;
            continue;
        }

        match event::read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            }) => {
                window.message = None;
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char(' ') | KeyCode::Enter => window.toggle(),
                    KeyCode::Char('n') | KeyCode::Right => {
                        if window.status == Status::Paused {
                            window.step(&mut game);
                        }
                    }
                    KeyCode::Char('r') => {
                        game.reset(true);
                        window.restart_rate(&game);
                    }
                    KeyCode::Char('c') => {
                        game.reset(false);
                        window.restart_rate(&game);
                    }
                    KeyCode::Char(digit @ '0'..='9') => {
                        let index = digit as usize - '0' as usize;
                        window.select_pattern(&mut game, index);
                    }
                    KeyCode::Char(']') | KeyCode::PageDown => {
                        let count = game.pattern_count();
                        if count > 0 {
                            let index = game.pattern_index().map_or(0, |i| (i + 1) % count);
                            window.select_pattern(&mut game, index);
                        }
                    }
                    KeyCode::Char('[') | KeyCode::PageUp => {
                        let count = game.pattern_count();
                        if count > 0 {
                            let index = game
                                .pattern_index()
                                .map_or(count - 1, |i| (i + count - 1) % count);
                            window.select_pattern(&mut game, index);
                        }
                    }
                    KeyCode::Char('?') => {
                        let count = game.pattern_count();
                        if count > 0 {
                            let index = thread_rng().gen_range(0..count);
                            window.select_pattern(&mut game, index);
                        }
                    }
                    _ => (),
                }
                window.update(&game)?;
            }
            Event::Resize(columns, rows) => {
                debug!("Terminal resized to {}x{}", columns, rows);
                window.resize(columns, rows);
                window.update(&game)?;
            }
            _ => (),
        }
    }

    drop(window);
    println!(
        "Generation: {}  Population: {}",
        game.generation(),
        game.population()
    );
    Ok(())
}
