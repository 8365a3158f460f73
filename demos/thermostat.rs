//! Thermostat
//!
//! This example drives a thermostat through a handful of commands.
//!
//! Key concepts:
//! - The command handler enforces the configured temperature range
//! - Accepted events update state through a pure transition function
//! - Rejected commands leave the state untouched
//! - Already-validated events can be applied directly
//!
//! Run with: cargo run --example thermostat

use cow_fst::{CommandResult, Fst};

#[derive(Clone, Debug, PartialEq)]
struct Thermostat {
    target: i32,
    heating: bool,
}

#[derive(Debug)]
enum Command {
    SetTarget(i32),
    TurnOn,
    TurnOff,
}

#[derive(Debug)]
enum Event {
    TargetSet(i32),
    HeatingStarted,
    HeatingStopped,
}

#[derive(Debug)]
enum Rejection {
    OutOfRange { min: i32, max: i32 },
    AlreadyOn,
    AlreadyOff,
}

#[derive(Debug)]
struct Range {
    min: i32,
    max: i32,
}

fn handle(state: &Thermostat, command: Command, range: &Range) -> CommandResult<Event, Rejection> {
    match command {
        Command::SetTarget(t) if t < range.min || t > range.max => {
            CommandResult::Err(Rejection::OutOfRange {
                min: range.min,
                max: range.max,
            })
        }
        Command::SetTarget(t) => CommandResult::Success(Event::TargetSet(t)),
        Command::TurnOn if state.heating => CommandResult::Err(Rejection::AlreadyOn),
        Command::TurnOn => CommandResult::Success(Event::HeatingStarted),
        Command::TurnOff if !state.heating => CommandResult::Err(Rejection::AlreadyOff),
        Command::TurnOff => CommandResult::Success(Event::HeatingStopped),
    }
}

fn transition(state: &Thermostat, event: &Event) -> Thermostat {
    match event {
        Event::TargetSet(t) => Thermostat {
            target: *t,
            ..state.clone()
        },
        Event::HeatingStarted => Thermostat {
            heating: true,
            ..state.clone()
        },
        Event::HeatingStopped => Thermostat {
            heating: false,
            ..state.clone()
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Thermostat Example ===\n");

    let mut thermostat = Fst::new(
        handle,
        transition,
        Range { min: 5, max: 30 },
        Thermostat {
            target: 18,
            heating: false,
        },
    );

    println!("Initial: {:?}", thermostat.state());

    let commands = vec![
        Command::SetTarget(21),
        Command::TurnOn,
        Command::TurnOn,
        Command::SetTarget(45),
        Command::TurnOff,
    ];

    for command in commands {
        println!("\n> {command:?}");
        match thermostat.handle_command(command) {
            CommandResult::Success(event) => println!("  accepted: {event:?}"),
            CommandResult::Err(rejection) => println!("  rejected: {rejection:?}"),
        }
        println!("  state:    {:?}", thermostat.state());
    }

    println!("\nApplying a stored event directly");
    thermostat.apply_event(Event::TargetSet(16));
    println!("  state:    {:?}", thermostat.state());

    println!("\n=== Example Complete ===");
}
