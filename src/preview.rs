use std::{
    io::Write as _,
    time::{Duration, Instant},
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind,
        poll, read,
    },
    execute,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode, size,
    },
};

use crate::{
    config::FieldConfig,
    core::{Point, Rgba8, Viewport},
    error::{DotfieldError, DotfieldResult},
    field::DotField,
    render::Surface,
    runner::{FieldRunner, InputEvent},
};

/// Terminal cells are roughly twice as tall as wide, so one text row stands
/// in for this many field pixels vertically.
const ROW_ASPECT: f64 = 2.0;

/// Intensity ramp from faint to bright.
const RAMP: [char; 5] = ['.', ':', '+', '*', '@'];

fn term_err(e: std::io::Error) -> DotfieldError {
    DotfieldError::render(format!("terminal: {e}"))
}

/// Character-cell drawing target: each filled shape lights the cell under
/// its center, keeping the brightest opacity per cell. Implementing
/// [`Surface`] lets the preview draw through the same seam as the pixel
/// backends, so each tick samples the field exactly once.
#[derive(Clone, Debug)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    max_opacity: f64,
    intensity: Vec<f64>,
}

impl CellSurface {
    pub fn new(cols: u16, rows: u16, max_opacity: f64) -> Self {
        Self {
            cols,
            rows,
            max_opacity,
            intensity: vec![0.0; usize::from(cols) * usize::from(rows)],
        }
    }

    /// Reallocate for new terminal dimensions; a no-op when unchanged.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols != self.cols || rows != self.rows {
            self.cols = cols;
            self.rows = rows;
            self.intensity = vec![0.0; usize::from(cols) * usize::from(rows)];
        }
    }

    fn mark(&mut self, center: Point, opacity: f64) {
        let col = center.x.floor();
        let row = (center.y / ROW_ASPECT).floor();
        if col < 0.0 || row < 0.0 || col >= f64::from(self.cols) || row >= f64::from(self.rows) {
            return;
        }
        let idx = (row as usize) * usize::from(self.cols) + col as usize;
        let level = if self.max_opacity > 0.0 {
            (opacity / self.max_opacity).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.intensity[idx] = self.intensity[idx].max(level);
    }

    /// One glyph string per row, blank where nothing was drawn.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        let v =
                            self.intensity[usize::from(r) * usize::from(self.cols) + usize::from(c)];
                        if v <= 0.0 {
                            ' '
                        } else {
                            let slot = (v * (RAMP.len() - 1) as f64).round() as usize;
                            RAMP[slot.min(RAMP.len() - 1)]
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Surface for CellSurface {
    fn clear(&mut self, _color: Rgba8) {
        self.intensity.fill(0.0);
    }

    fn fill_circle(&mut self, center: Point, _radius: f64, _color: Rgba8, opacity: f64) {
        self.mark(center, opacity);
    }

    fn fill_rect(&mut self, center: Point, _size: f64, _color: Rgba8, opacity: f64) {
        self.mark(center, opacity);
    }
}

fn cell_dims(vp: Viewport) -> (u16, u16) {
    let cols = vp.width.min(u32::from(u16::MAX)) as u16;
    let rows = ((f64::from(vp.height) / ROW_ASPECT).ceil() as u32).min(u32::from(u16::MAX)) as u16;
    (cols, rows)
}

/// Restores the terminal on drop so a panic or early return never leaves raw
/// mode behind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> DotfieldResult<Self> {
        enable_raw_mode().map_err(term_err)?;
        execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide
        )
        .map_err(term_err)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            std::io::stdout(),
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ResetColor
        );
        let _ = disable_raw_mode();
    }
}

/// Run the interactive preview until `q`, `Esc` or `Ctrl-C`. `p` pauses and
/// resumes the runner; moving the mouse steers the field's cursor.
pub fn run(config: FieldConfig, fps: u32) -> DotfieldResult<()> {
    config.validate()?;
    if fps == 0 {
        return Err(DotfieldError::config("preview fps must be > 0"));
    }

    let (cols, rows) = size().map_err(term_err)?;
    let viewport = Viewport::from_logical(f64::from(cols), f64::from(rows) * ROW_ASPECT, 1.0);
    let field = DotField::new(config.clone(), viewport)?;
    let mut runner = FieldRunner::new(field);
    runner.start();

    let _guard = TerminalGuard::enter()?;
    let mut stdout = std::io::stdout();
    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(fps));
    let mut last_tick = Instant::now();
    let dot = config.dot_color;
    let (cols, rows) = cell_dims(viewport);
    let mut cells = CellSurface::new(cols, rows, config.max_opacity);

    loop {
        while poll(Duration::ZERO).map_err(term_err)? {
            match read().map_err(term_err)? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('p') => {
                        if runner.is_running() {
                            runner.stop();
                        } else {
                            runner.start();
                        }
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if matches!(
                        mouse.kind,
                        MouseEventKind::Moved | MouseEventKind::Drag(_)
                    ) {
                        runner.handle(InputEvent::PointerMoved {
                            x: f64::from(mouse.column),
                            y: f64::from(mouse.row) * ROW_ASPECT,
                        });
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    runner.handle(InputEvent::Resized {
                        logical_width: f64::from(new_cols),
                        logical_height: f64::from(new_rows) * ROW_ASPECT,
                        dpr: 1.0,
                    });
                }
                _ => {}
            }
        }

        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        let (cols, rows) = cell_dims(runner.field().viewport());
        cells.resize(cols, rows);
        if runner.tick(dt, &mut cells)?.is_some() {
            execute!(
                stdout,
                MoveTo(0, 0),
                Clear(ClearType::All),
                SetForegroundColor(Color::Rgb {
                    r: dot.r,
                    g: dot.g,
                    b: dot.b
                })
            )
            .map_err(term_err)?;
            for (i, line) in cells.lines().iter().enumerate() {
                execute!(stdout, MoveTo(0, i as u16)).map_err(term_err)?;
                stdout.write_all(line.as_bytes()).map_err(term_err)?;
            }
            stdout.flush().map_err(term_err)?;
        }

        let elapsed = last_tick.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
