//! Order Lifecycle
//!
//! This demo walks an order through review, rejection, editing and shipping.
//!
//! Key concepts:
//! - Per-state rules with outputs
//! - Entry/quit hooks (entry into the destination runs first)
//! - An abort guard that vetoes submissions while the order is on hold
//! - Explicit-source transitions and error reporting
//!
//! Run with: RUST_LOG=debug cargo run --example order_lifecycle

use statewise::{BuildError, MachineError, StateMachine, StateMachineBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum OrderState {
    Initial,
    Pending,
    Passed,
    Rejected,
    Shipping,
    Finished,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum OrderInput {
    Submit,
    Agree,
    Deny,
    Acknowledge,
    Edit,
    Ok,
}

type OrderMachine = StateMachine<OrderState, OrderInput, &'static str>;

fn announce_entry(state: OrderState) -> impl Fn(&OrderState, &OrderInput, &&'static str) {
    move |from, input, output| {
        println!("  entered {state:?} (from {from:?}, input {input:?}, output: {output})");
    }
}

fn announce_quit(state: OrderState) -> impl Fn(&OrderState, &OrderInput, &&'static str) {
    move |to, input, output| {
        println!("  left {state:?} (to {to:?}, input {input:?}, output: {output})");
    }
}

fn build_machine(on_hold: &Arc<AtomicBool>) -> Result<OrderMachine, BuildError> {
    let held = Arc::clone(on_hold);

    StateMachineBuilder::new()
        .name("order-lifecycle")
        .track_history(true)
        .state(OrderState::Initial, |s| {
            s.mark_as_initial()
                .rule_with_output(OrderInput::Submit, OrderState::Pending, "submitted")
                .on_quit(announce_quit(OrderState::Initial))
                .abort_when(move |_, _| held.load(Ordering::SeqCst))
                .on_abort(|| println!("  submission refused: order is on hold"))
        })
        .state(OrderState::Pending, |s| {
            s.rule_with_output(OrderInput::Agree, OrderState::Passed, "approved")
                .rule_with_output(OrderInput::Deny, OrderState::Rejected, "rejected")
                .on_quit(announce_quit(OrderState::Pending))
        })
        .state(OrderState::Passed, |s| {
            s.rule_with_output(OrderInput::Agree, OrderState::Shipping, "shipped")
                .on_entry(announce_entry(OrderState::Passed))
                .on_quit(announce_quit(OrderState::Passed))
        })
        .state(OrderState::Rejected, |s| {
            s.rule_with_output(OrderInput::Acknowledge, OrderState::Finished, "closed")
                .rule_with_output(OrderInput::Edit, OrderState::Pending, "resubmitted")
                .on_entry(announce_entry(OrderState::Rejected))
                .on_quit(announce_quit(OrderState::Rejected))
        })
        .state(OrderState::Shipping, |s| {
            s.rule_with_output(OrderInput::Ok, OrderState::Finished, "delivered")
                .on_entry(announce_entry(OrderState::Shipping))
                .on_quit(announce_quit(OrderState::Shipping))
        })
        .state(OrderState::Finished, |s| {
            s.mark_as_final()
                .on_entry(announce_entry(OrderState::Finished))
        })
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Order Lifecycle Demo ===\n");

    let on_hold = Arc::new(AtomicBool::new(true));
    let mut machine = build_machine(&on_hold)?;
    let state = machine.current_state();
    info!(machine = machine.name(), state = ?state, "order machine built");

    println!("--- Submitting while on hold ---");
    let result = machine.change_state(&OrderInput::Submit)?;
    let aborted = result.is_aborted();
    println!("Submit aborted: {aborted}, still in {:?}", machine.current_state());
    on_hold.store(false, Ordering::SeqCst);

    println!("\n--- From the current state ---");
    let inputs = [
        OrderInput::Submit,
        OrderInput::Deny,
        OrderInput::Edit,
        OrderInput::Agree,
        OrderInput::Agree,
        OrderInput::Ok,
    ];
    for input in inputs {
        machine.step(&input)?;
        println!("{input:?} -> {:?}", machine.current_state());
    }
    info!(final_reached = machine.is_final(), "order walk finished");
    println!("Path: {:?}", machine.history().get_path());

    println!("\n--- From arbitrary states ---");
    let jumps = [
        (OrderState::Pending, OrderInput::Agree),
        (OrderState::Pending, OrderInput::Deny),
        (OrderState::Rejected, OrderInput::Edit),
        (OrderState::Rejected, OrderInput::Acknowledge),
        (OrderState::Shipping, OrderInput::Ok),
        (OrderState::Finished, OrderInput::Deny),
    ];
    for (from, input) in jumps {
        match machine.change_state_from(&from, &input) {
            Ok(_) => println!("{from:?} + {input:?} -> {:?}", machine.current_state()),
            Err(err @ MachineError::InvalidInput { .. }) => {
                println!("{from:?} + {input:?}: {err}")
            }
            Err(err) => return Err(err.into()),
        }
    }

    let inputs = machine.valid_inputs(&OrderState::Rejected)?;
    println!("\nValid inputs in Rejected: {inputs:?}");
    let sources = machine.previous_states(&OrderState::Finished);
    println!("States leading to Finished: {sources:?}");

    machine.reset();
    info!(state = ?machine.current_state(), "machine reset");

    println!("\n=== Demo Complete ===");
    Ok(())
}
