//! Property-based tests for the container contract.
//!
//! These tests use proptest to verify the transition properties hold
//! across many randomly generated command and event sequences.

use cow_fst::{CommandResult, Fst};
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct Counter {
    total: i64,
    resets: u32,
}

#[derive(Clone, Debug)]
enum CounterCommand {
    Add(i64),
    Reset,
}

#[derive(Clone, PartialEq, Debug)]
enum CounterEvent {
    Added(i64),
    Reset,
}

#[derive(Clone, PartialEq, Debug)]
enum CounterError {
    OutOfRange { limit: i64 },
    AlreadyZero,
}

struct Limits {
    max_abs: i64,
}

fn handle(
    counter: &Counter,
    command: CounterCommand,
    limits: &Limits,
) -> CommandResult<CounterEvent, CounterError> {
    match command {
        CounterCommand::Add(n) if (counter.total + n).abs() > limits.max_abs => {
            CommandResult::Err(CounterError::OutOfRange {
                limit: limits.max_abs,
            })
        }
        CounterCommand::Add(n) => CommandResult::Success(CounterEvent::Added(n)),
        CounterCommand::Reset if counter.total == 0 => CommandResult::Err(CounterError::AlreadyZero),
        CounterCommand::Reset => CommandResult::Success(CounterEvent::Reset),
    }
}

fn transition(counter: &Counter, event: &CounterEvent) -> Counter {
    match event {
        CounterEvent::Added(n) => Counter {
            total: counter.total + n,
            resets: counter.resets,
        },
        CounterEvent::Reset => Counter {
            total: 0,
            resets: counter.resets + 1,
        },
    }
}

fn counter_fst() -> Fst<Counter, CounterCommand, CounterEvent, CounterError, Limits> {
    Fst::new(
        handle,
        transition,
        Limits { max_abs: 100 },
        Counter {
            total: 0,
            resets: 0,
        },
    )
}

fn arbitrary_command() -> impl Strategy<Value = CounterCommand> {
    prop_oneof![
        4 => (-60i64..60).prop_map(CounterCommand::Add),
        1 => Just(CounterCommand::Reset),
    ]
}

fn arbitrary_event() -> impl Strategy<Value = CounterEvent> {
    prop_oneof![
        4 => (-1_000i64..1_000).prop_map(CounterEvent::Added),
        1 => Just(CounterEvent::Reset),
    ]
}

proptest! {
    #[test]
    fn success_applies_transition_to_prior_state(
        commands in prop::collection::vec(arbitrary_command(), 1..40)
    ) {
        let mut fst = counter_fst();

        for command in commands {
            let before = fst.state().clone();
            let outcome = fst.handle_command(command);

            if let CommandResult::Success(event) = &outcome {
                prop_assert_eq!(fst.state(), &transition(&before, event));
            }
        }
    }

    #[test]
    fn rejection_never_mutates_state(
        commands in prop::collection::vec(arbitrary_command(), 1..40)
    ) {
        let mut fst = counter_fst();

        for command in commands {
            let before = fst.state().clone();
            let outcome = fst.handle_command(command);

            if outcome.is_err() {
                prop_assert_eq!(fst.state(), &before);
            }
        }
    }

    #[test]
    fn handler_rules_always_hold(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut fst = counter_fst();

        for command in commands {
            fst.handle_command(command);
            prop_assert!(fst.state().total.abs() <= fst.context().max_abs);
        }
    }

    #[test]
    fn apply_event_always_transitions(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut fst = counter_fst();

        for event in events {
            let expected = transition(fst.state(), &event);
            fst.apply_event(event);
            prop_assert_eq!(fst.state(), &expected);
        }
    }

    #[test]
    fn apply_events_equals_fold(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut fst = counter_fst();
        let expected = events.iter().fold(fst.state().clone(), |state, event| transition(&state, event));

        fst.apply_events(events);

        prop_assert_eq!(fst.state(), &expected);
    }

    #[test]
    fn accepted_events_replay_to_same_state(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut handled = counter_fst();
        let mut accepted = Vec::new();

        for command in commands {
            if let Some(event) = handled.handle_command(command).into_success() {
                accepted.push(event);
            }
        }

        let mut replayed = counter_fst();
        replayed.apply_events(accepted);

        prop_assert_eq!(replayed.state(), handled.state());
    }

    #[test]
    fn outcome_has_exactly_one_variant(command in arbitrary_command()) {
        let mut fst = counter_fst();
        let outcome = fst.handle_command(command);

        prop_assert_ne!(outcome.is_success(), outcome.is_err());
        prop_assert_eq!(outcome.success().is_some(), outcome.is_success());
        prop_assert_eq!(outcome.err().is_some(), outcome.is_err());
    }

    #[test]
    fn outcome_roundtrip_serialization(event in arbitrary_event()) {
        let outcome: CommandResult<i64, String> = match event {
            CounterEvent::Added(n) => CommandResult::Success(n),
            CounterEvent::Reset => CommandResult::Err("reset".to_string()),
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: CommandResult<i64, String> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(outcome, deserialized);
    }
}

#[test]
fn resubmitting_a_command_can_change_its_outcome() {
    let mut fst = counter_fst();

    assert_eq!(
        fst.handle_command(CounterCommand::Add(60)),
        CommandResult::Success(CounterEvent::Added(60))
    );
    assert_eq!(
        fst.handle_command(CounterCommand::Add(60)),
        CommandResult::Err(CounterError::OutOfRange { limit: 100 })
    );
    assert_eq!(fst.state().total, 60);
}
