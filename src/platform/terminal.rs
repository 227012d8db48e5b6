//! Terminal backend built on crossterm
//!
//! The terminal is the window: one world unit is one character cell. Arrow
//! keys or WASD steer the robot, `q`/`Esc`/`Ctrl-C` close the window.

use std::cell::Cell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, style, terminal};

use super::{KeyboardService, VideoService};
use crate::sim::{Actor, Color, Point};

/// Create a keyboard/video pair sharing one quit signal.
///
/// The window size is the terminal size at this point.
pub fn session(frame_rate: u32) -> io::Result<(TerminalKeyboard, TerminalVideo)> {
    let size = terminal::size()?;
    let quit = Rc::new(Cell::new(false));
    let keyboard = TerminalKeyboard {
        quit: Rc::clone(&quit),
    };
    let video = TerminalVideo::new(frame_rate, size, quit);
    Ok((keyboard, video))
}

/// Drains pending key events each frame
pub struct TerminalKeyboard {
    quit: Rc<Cell<bool>>,
}

impl TerminalKeyboard {
    fn poll(&mut self) -> io::Result<Point> {
        let mut direction = Point::ZERO;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if is_quit(&key) {
                    self.quit.set(true);
                } else if let Some(d) = key_direction(key.code) {
                    // Last key pressed this frame wins
                    direction = d;
                }
            }
        }
        Ok(direction)
    }
}

impl KeyboardService for TerminalKeyboard {
    fn direction(&mut self) -> Point {
        self.poll().unwrap_or_else(|e| {
            log::warn!("Failed to read keyboard input: {}", e);
            Point::ZERO
        })
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn key_direction(code: KeyCode) -> Option<Point> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Point::new(-1, 0)),
        KeyCode::Right | KeyCode::Char('d') => Some(Point::new(1, 0)),
        KeyCode::Up | KeyCode::Char('w') => Some(Point::new(0, -1)),
        KeyCode::Down | KeyCode::Char('s') => Some(Point::new(0, 1)),
        _ => None,
    }
}

/// Alternate-screen "window" that redraws the whole grid every frame
pub struct TerminalVideo {
    stdout: Stdout,
    width: u16,
    height: u16,
    open: bool,
    quit: Rc<Cell<bool>>,
    buffer: Vec<(u16, u16, String, Color)>,
    frame_time: Duration,
    next_frame: Instant,
}

impl TerminalVideo {
    fn new(frame_rate: u32, (width, height): (u16, u16), quit: Rc<Cell<bool>>) -> Self {
        Self {
            stdout: io::stdout(),
            width,
            height,
            open: false,
            quit,
            buffer: Vec::new(),
            frame_time: Duration::from_secs(1) / frame_rate.max(1),
            next_frame: Instant::now(),
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

impl VideoService for TerminalVideo {
    fn open_window(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;
        self.open = true;
        self.next_frame = Instant::now();
        log::info!("Terminal window opened ({}x{})", self.width, self.height);
        Ok(())
    }

    fn close_window(&mut self) -> io::Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.restore()
    }

    fn is_window_open(&self) -> bool {
        self.open && !self.quit.get()
    }

    fn width(&self) -> i32 {
        i32::from(self.width)
    }

    fn height(&self) -> i32 {
        i32::from(self.height)
    }

    fn clear_buffer(&mut self) -> io::Result<()> {
        self.buffer.clear();
        Ok(())
    }

    fn draw_actors(&mut self, actors: &[&Actor]) -> io::Result<()> {
        for actor in actors {
            let pos = actor.position();
            let (Ok(x), Ok(y)) = (u16::try_from(pos.x()), u16::try_from(pos.y())) else {
                continue;
            };
            if x < self.width && y < self.height {
                self.buffer
                    .push((x, y, actor.text().to_string(), actor.color()));
            }
        }
        Ok(())
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        for (x, y, text, color) in &self.buffer {
            queue!(
                self.stdout,
                cursor::MoveTo(*x, *y),
                style::SetForegroundColor(style::Color::Rgb {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                }),
                style::Print(text),
            )?;
        }
        self.stdout.flush()?;

        let now = Instant::now();
        if now < self.next_frame {
            thread::sleep(self.next_frame - now);
        }
        self.next_frame = self.next_frame.max(now) + self.frame_time;
        Ok(())
    }
}

impl Drop for TerminalVideo {
    fn drop(&mut self) {
        // Always hand the terminal back, even if the loop bailed out
        if self.open {
            let _ = self.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_direction_mapping() {
        assert_eq!(key_direction(KeyCode::Left), Some(Point::new(-1, 0)));
        assert_eq!(key_direction(KeyCode::Char('d')), Some(Point::new(1, 0)));
        assert_eq!(key_direction(KeyCode::Up), Some(Point::new(0, -1)));
        assert_eq!(key_direction(KeyCode::Char('s')), Some(Point::new(0, 1)));
        assert_eq!(key_direction(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&press(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_quit_signal_closes_window() {
        let quit = Rc::new(Cell::new(false));
        let keyboard = TerminalKeyboard {
            quit: Rc::clone(&quit),
        };
        let mut video = TerminalVideo::new(12, (80, 24), quit);
        assert_eq!((video.width(), video.height()), (80, 24));
        // Pretend the window is up without touching the real terminal
        video.open = true;
        assert!(video.is_window_open());
        keyboard.quit.set(true);
        assert!(!video.is_window_open());
        video.open = false;
    }
}
