//! Desktop simulator for the navmenu hierarchical menu framework.
//!
//! Renders a demo thermostat menu in an SDL2 window via
//! `embedded-graphics-simulator` and mirrors every view as text on stdout.
//!
//! # Key bindings
//!
//! | Key                 | Command |
//! |---------------------|---------|
//! | Up                  | Up      |
//! | Down                | Down    |
//! | Return / Right      | Enter   |
//! | Backspace / Left    | Esc     |
//! | Q                   | Quit    |

use std::fmt;
use std::io::{self, Write as _};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{info, warn};

use navmenu_core::items::{Action, AsValue, Choice, Field, NavHandler, StaticText};
use navmenu_core::out::{GraphicsOut, MenuOutCap, OutDev, ScrollPos, TextFmt};
use navmenu_core::{Cmd, ItemNav, MenuChain, MenuResult, static_menu};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 160;
const DISPLAY_HEIGHT_PX: u32 = 128;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Demo menu
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FanMode {
    Auto,
    Low,
    High,
}

static FAN_MODES: [(&str, FanMode); 3] = [
    ("Auto", FanMode::Auto),
    ("Low", FanMode::Low),
    ("High", FanMode::High),
];

/// Guards the "Save" action until "Unlock" ran.
static UNLOCKED: AtomicBool = AtomicBool::new(false);

fn unlock() -> bool {
    UNLOCKED.store(true, Ordering::SeqCst);
    info!("Settings unlocked");
    true
}

fn save() -> bool {
    let unlocked = UNLOCKED.load(Ordering::SeqCst);
    if unlocked {
        info!("Settings saved");
    } else {
        warn!("Save refused: settings are locked");
    }
    unlocked
}

fn factory_reset() -> bool {
    info!("Factory reset");
    true
}

/// Position of "Reset" in the root menu; disabled at start.
const RESET_ENTRY: usize = 5;

fn build_menu() -> MenuResult<ItemNav<impl MenuChain>> {
    let schedule = ItemNav::new(
        "Schedule",
        static_menu![
            NavHandler::new(StaticText::with(
                "Wake  ",
                AsValue::new(Field::new(7u8, 0, 23, 1)?.with_unit("h")),
            )),
            NavHandler::new(StaticText::with(
                "Sleep ",
                AsValue::new(Field::new(22u8, 0, 23, 1)?.with_unit("h")),
            )),
        ],
    );

    let mut root = ItemNav::new(
        "Thermostat",
        static_menu![
            NavHandler::new(StaticText::with(
                "Setpoint ",
                AsValue::new(Field::new(21.0f32, 5.0, 30.0, 0.5)?.with_unit("C")),
            )),
            NavHandler::new(StaticText::with(
                "Fan ",
                AsValue::new(Choice::new(&FAN_MODES)?),
            )),
            NavHandler::new(schedule),
            Action::new(StaticText::new("Unlock"), unlock),
            Action::new(StaticText::new("Save"), save),
            Action::new(StaticText::new("Reset"), factory_reset),
        ],
    );
    root.enable(RESET_ENTRY, false)?;
    Ok(root)
}

// ---------------------------------------------------------------------------
// Console mirror
// ---------------------------------------------------------------------------

/// `core::fmt::Write` adapter over stdout.
struct Console(io::Stdout);

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Map an SDL keycode to a navigation command.
fn keycode_to_cmd(keycode: Keycode) -> Option<Cmd> {
    match keycode {
        Keycode::Up => Some(Cmd::Up),
        Keycode::Down => Some(Cmd::Down),
        Keycode::Return | Keycode::Right => Some(Cmd::Enter),
        Keycode::Backspace | Keycode::Left => Some(Cmd::Esc),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting navmenu simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Up/Down=Move  Return/Right=Enter  Backspace/Left=Esc  Q=Quit");

    let mut menu = match build_menu() {
        Ok(menu) => menu,
        Err(e) => {
            log::error!("Invalid demo menu: {}", e);
            return;
        }
    };

    // SDL2 display and window
    let display = SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let panel = GraphicsOut::new(display);
    // one line goes to the title
    let entries = panel.lines().saturating_sub(1);
    let mut screen = MenuOutCap::new(ScrollPos::<_, 1>::new(panel, entries));
    let mut console = MenuOutCap::new(TextFmt::new(OutDev::new(Console(io::stdout()))));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Navmenu Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    menu.print_menu(&mut screen);
    menu.print_menu(&mut console);
    window.update(screen.printer().inner().display());
    let mut needs_redraw = false;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q {
                        break 'running;
                    }

                    if let Some(cmd) = keycode_to_cmd(keycode) {
                        if menu.command(cmd) {
                            needs_redraw = true;
                        } else {
                            info!("{:?} not handled at entry {}", cmd, menu.pos());
                        }

                        if UNLOCKED.load(Ordering::SeqCst)
                            && menu.enabled(RESET_ENTRY) == Ok(false)
                        {
                            match menu.enable(RESET_ENTRY, true) {
                                Ok(()) => {
                                    info!("Reset available");
                                    needs_redraw = true;
                                }
                                Err(e) => warn!("Could not enable reset: {}", e),
                            }
                        }
                    }
                }

                _ => {}
            }
        }

        // --- Render -------------------------------------------------------
        if needs_redraw {
            menu.print_menu(&mut screen);
            println!("--------");
            menu.print_menu(&mut console);
            needs_redraw = false;
        }

        window.update(screen.printer().inner().display());

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
