use crosspad_bit_mask::{BitFlag, Bitmask};

/// Simple example demonstrating basic Bitmask usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl BitFlag for Direction {
    fn bit(&self) -> u64 {
        match self {
            Direction::Up => 1 << 0,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }

    fn index(&self) -> u32 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

fn main() {
    // Diagonal input holds two directions at once
    let held = Bitmask::new(&[Direction::Up, Direction::Right]);
    println!("Held directions: {held:?}");

    println!("Up held: {}", held.contains(Direction::Up));
    println!("Down held: {}", held.contains(Direction::Down));

    // Roll from up-right to right
    let mut next = held;
    next.remove(Direction::Up);
    println!("After roll: {next:?}");

    // Any held direction is a subset of the full compass
    let compass = Bitmask::new(&[
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]);
    println!("Held is subset of compass: {}", held.is_subset(&compass));
}
