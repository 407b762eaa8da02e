mod cli;
mod logging;

use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::{select, tick, unbounded};

use crosspad_pad::{Button, InputPoller, PadState};
use crosspad_sdl::SdlBackend;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    let backend = match SdlBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            print_error!("failed to start input backend: {e}");
            return;
        }
    };
    let mut poller = InputPoller::new(backend);

    match cli.command {
        Command::List => list_pads(&mut poller),
        Command::Watch { slot, interval_ms } => {
            watch(&mut poller, slot, interval_ms);
        }
        Command::Rumble { slot, left, right, ms } => {
            rumble(&mut poller, slot, left, right, ms);
        }
    }
}

fn list_pads(poller: &mut InputPoller<SdlBackend>) {
    let mut found = 0;
    for slot in 0..poller.max_pads() {
        let caps = poller.capabilities(slot);
        if !caps.is_connected {
            continue;
        }
        found += 1;
        let rumble = if caps.has_left_vibration_motor {
            "rumble"
        } else {
            "no rumble"
        };
        print_info!(
            "slot {slot}: {} [{}] ({rumble})",
            caps.display_name,
            caps.identifier
        );
    }
    if found == 0 {
        print_info!("no pads connected");
    }
}

fn watch(
    poller: &mut InputPoller<SdlBackend>,
    only: Option<usize>,
    interval_ms: u64,
) {
    // Handle Ctrl+C to exit cleanly
    let (stop_tx, stop_rx) = unbounded::<()>();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    }) {
        print_error!("failed to set Ctrl+C handler: {e}");
        return;
    }

    let ticker = tick(Duration::from_millis(interval_ms.max(1)));
    let mut last: Vec<Option<u32>> = vec![None; poller.max_pads()];
    print_info!("watching for pad state changes, Ctrl+C to stop");
    loop {
        select! {
            recv(stop_rx) -> _ => {
                break;
            }
            recv(ticker) -> _ => {
                for slot in 0..poller.max_pads() {
                    if only.is_some_and(|s| s != slot) {
                        continue;
                    }
                    let state = poller.state(slot);
                    if !state.is_connected {
                        if last[slot].take().is_some() {
                            print_warning!("slot {slot}: disconnected");
                        }
                        continue;
                    }
                    // The packet number only moves when the raw state does
                    if last[slot] == Some(state.packet_number) {
                        continue;
                    }
                    last[slot] = Some(state.packet_number);
                    print_info!("slot {slot}: {}", format_state(&state));
                }
            }
        }
    }
}

fn rumble(
    poller: &mut InputPoller<SdlBackend>,
    slot: usize,
    left: f32,
    right: f32,
    ms: u64,
) {
    if !poller.set_vibration(slot, left, right) {
        print_warning!("slot {slot} has no vibration support");
        return;
    }
    print_info!("rumbling slot {slot} for {ms}ms");
    std::thread::sleep(Duration::from_millis(ms));
    poller.set_vibration(slot, 0.0, 0.0);
}

const BUTTON_NAMES: [(Button, &str); 15] = [
    (Button::A, "A"),
    (Button::B, "B"),
    (Button::X, "X"),
    (Button::Y, "Y"),
    (Button::Start, "Start"),
    (Button::Back, "Back"),
    (Button::BigButton, "Guide"),
    (Button::LeftShoulder, "LB"),
    (Button::RightShoulder, "RB"),
    (Button::LeftStick, "LS"),
    (Button::RightStick, "RS"),
    (Button::DPadUp, "Up"),
    (Button::DPadDown, "Down"),
    (Button::DPadLeft, "Left"),
    (Button::DPadRight, "Right"),
];

fn format_state(state: &PadState) -> String {
    let mut pressed: Vec<&str> = Vec::new();
    for (button, name) in BUTTON_NAMES {
        if state.is_button_down(button) {
            pressed.push(name);
        }
    }
    let buttons = if pressed.is_empty() {
        "-".to_string()
    } else {
        pressed.join("+")
    };
    let left = state.thumb_sticks.left();
    let right = state.thumb_sticks.right();
    format!(
        "#{} buttons {buttons} left ({:+.2}, {:+.2}) right ({:+.2}, {:+.2}) triggers ({:.2}, {:.2})",
        state.packet_number,
        left.x,
        left.y,
        right.x,
        right.y,
        state.triggers.left(),
        state.triggers.right(),
    )
}
