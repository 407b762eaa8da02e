use crosspad_bit_derive::Bit;
use crosspad_bit_mask::{BitFlag, Bitmask};

/// Example using the derive macro to automatically implement BitFlag
#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq)]
enum PadButton {
    A,
    B,
    X,
    Y,
    Start,
    Back,
}

fn main() {
    // Buttons held during one poll
    let held = Bitmask::new(&[PadButton::A, PadButton::X]);
    println!("Held buttons: {held:?}");

    println!("A held: {}", held.contains(PadButton::A));
    println!("B held: {}", held.contains(PadButton::B));

    // Add start to open the pause menu
    let mut paused = held;
    paused.insert(PadButton::Start);
    println!("Paused state: {paused:?}");

    // Bits are assigned by declaration order
    println!("Button bit values:");
    for button in [PadButton::A, PadButton::B, PadButton::X, PadButton::Y] {
        println!(
            "  {:?}: bit={}, index={}",
            button,
            button.bit(),
            button.index()
        );
    }
}
