use std::{
    io::{self, Stdout, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor,
    event::{read, Event, KeyEventKind},
    execute, queue, style,
    terminal::{self, ClearType},
};
use log::debug;

use crate::{
    grid::{Direction, Grid, Position, Zone},
    Error,
};

// Terminal columns and rows taken by one maze cell.
const CELL_WIDTH: usize = 2;
const CELL_HEIGHT: usize = 1;

const WALL_CHAR: char = '█';
const DOT_CHAR: char = 'o';

#[derive(Debug, Clone, Copy)]
pub struct ScreenSettings {
    pub initial_delay: Duration,
    pub step_delay: Duration,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            step_delay: Duration::from_millis(30),
        }
    }
}

pub struct Screen {
    term: Stdout,
    settings: ScreenSettings,
}

impl Screen {
    pub fn new(settings: ScreenSettings) -> Self {
        Self {
            term: io::stdout(),
            settings,
        }
    }

    pub fn plot_directions(&mut self, grid: &Grid, directions: &[Direction]) -> Result<(), Error> {
        let path_positions = grid.walk(directions)?;
        check_space(terminal::size()?, grid.side_len())?;
        let wall_zones = grid.wall_zones(CELL_WIDTH, CELL_HEIGHT)?;
        let goal_zone = grid.goal_zone(CELL_WIDTH, CELL_HEIGHT)?;
        let hint_row = (grid.side_len() * CELL_HEIGHT) as u16;

        // Restore the terminal even when drawing or reading keys fails.
        let res = execute!(self.term, terminal::EnterAlternateScreen, cursor::Hide)
            .and_then(|_| terminal::enable_raw_mode())
            .and_then(|_| {
                let draw_res = self
                    .draw(grid, &wall_zones, &goal_zone, &path_positions)
                    .and_then(|_| self.wait_key(hint_row));
                draw_res.and(terminal::disable_raw_mode())
            });
        let restore_res = execute!(self.term, cursor::Show, terminal::LeaveAlternateScreen);

        res.and(restore_res).map_err(Error::TerminalError)
    }

    fn draw(
        &mut self,
        grid: &Grid,
        wall_zones: &[Zone],
        goal_zone: &Zone,
        path_positions: &[Position],
    ) -> io::Result<()> {
        thread::sleep(self.settings.initial_delay);
        queue!(self.term, terminal::Clear(ClearType::All))?;

        debug!("Draw {} wall zone(s).", wall_zones.len());
        for zone in wall_zones {
            self.fill_zone(zone, WALL_CHAR, style::Color::DarkGrey)?;
        }
        self.fill_zone(goal_zone, WALL_CHAR, style::Color::Green)?;

        let Some(start_pos) = path_positions.first() else {
            return self.term.flush();
        };
        self.draw_dot(grid, start_pos)?;
        self.term.flush()?;
        for segment in path_positions.windows(2) {
            self.draw_line(grid, &segment[0], &segment[1])?;
            self.draw_dot(grid, &segment[1])?;
            self.term.flush()?;
            thread::sleep(self.settings.step_delay);
        }

        Ok(())
    }

    fn wait_key(&mut self, hint_row: u16) -> io::Result<()> {
        queue!(
            self.term,
            style::ResetColor,
            cursor::MoveTo(0, hint_row),
            style::Print("Press any key to exit.")
        )?;
        self.term.flush()?;

        loop {
            if let Event::Key(ke) = read()? {
                if ke.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    fn fill_zone(&mut self, zone: &Zone, ch: char, color: style::Color) -> io::Result<()> {
        let line = ch.to_string().repeat(zone.width());
        queue!(self.term, style::SetForegroundColor(color))?;
        for y in zone.top..=zone.bottom {
            queue!(
                self.term,
                cursor::MoveTo(zone.left as u16, y as u16),
                style::Print(&line)
            )?;
        }

        Ok(())
    }

    fn draw_dot(&mut self, grid: &Grid, pos: &Position) -> io::Result<()> {
        let (x, y) = grid.cell_center(pos, CELL_WIDTH, CELL_HEIGHT);
        queue!(
            self.term,
            style::SetForegroundColor(style::Color::Cyan),
            cursor::MoveTo(x as u16, y as u16),
            style::Print(DOT_CHAR)
        )
    }

    fn draw_line(&mut self, grid: &Grid, from: &Position, to: &Position) -> io::Result<()> {
        let (from_x, from_y) = grid.cell_center(from, CELL_WIDTH, CELL_HEIGHT);
        let (to_x, to_y) = grid.cell_center(to, CELL_WIDTH, CELL_HEIGHT);
        queue!(self.term, style::SetForegroundColor(style::Color::Cyan))?;
        if from_y == to_y {
            for x in from_x.min(to_x)..=from_x.max(to_x) {
                queue!(
                    self.term,
                    cursor::MoveTo(x as u16, from_y as u16),
                    style::Print('-')
                )?;
            }
        } else {
            for y in from_y.min(to_y)..=from_y.max(to_y) {
                queue!(
                    self.term,
                    cursor::MoveTo(from_x as u16, y as u16),
                    style::Print('|')
                )?;
            }
        }

        Ok(())
    }
}

// Terminal size comes as (columns, rows), the way crossterm reports it.
fn check_space(term_size: (u16, u16), side_len: usize) -> Result<(), Error> {
    let (term_col_n, term_row_n) = term_size;
    // One extra row for the hint line.
    let expect_row_n = side_len.saturating_mul(CELL_HEIGHT).saturating_add(1);
    let expect_col_n = side_len.saturating_mul(CELL_WIDTH);
    if usize::from(term_col_n) < expect_col_n || usize::from(term_row_n) < expect_row_n {
        return Err(Error::NotEnoughTerminalSpace(
            term_row_n,
            term_col_n,
            expect_row_n,
            expect_col_n,
        ));
    }

    Ok(())
}
