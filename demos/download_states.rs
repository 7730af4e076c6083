//! Download State Walkthrough
//!
//! This demo builds one value of each download state, describes it, and
//! narrows to the transfer fields when the state is `Downloading`.
//!
//! Key concepts:
//! - Exhaustive description of a closed set of states
//! - Narrowing with `as_downloading()`
//! - Opt-in payload rules
//! - Generic sequence helpers over states and plain records
//!
//! Run with: cargo run --example download_states

use tagstate::collections::{group_by, head, tail, zip};
use tagstate::core::DownloadState;
use tagstate::enforcement::PayloadRules;

#[derive(Clone, Debug)]
struct User {
    id: u32,
    name: &'static str,
    role: &'static str,
}

fn main() {
    println!("=== Download States ===\n");

    let states = vec![
        DownloadState::idle(),
        DownloadState::downloading(42, 4200, 10000),
        DownloadState::done("/tmp/file.zip"),
        DownloadState::failed("Network timeout"),
    ];

    for state in &states {
        println!("{}", state.describe());
        if let Some(transfer) = state.as_downloading() {
            println!("  Progress: {}%", transfer.progress);
        }
    }

    println!("\n=== Payload Rules ===\n");

    let rules = PayloadRules::default();
    match rules.admit(DownloadState::downloading(42, 12000, 10000)) {
        Ok(state) => println!("Accepted: {state}"),
        Err(violations) => {
            for violation in violations.iter() {
                println!("Rejected: {violation}");
            }
        }
    }

    println!("\n=== Collections ===\n");

    let users = vec![
        User { id: 1, name: "Alice", role: "admin" },
        User { id: 2, name: "Bob", role: "member" },
        User { id: 3, name: "Carol", role: "member" },
        User { id: 4, name: "Dave", role: "admin" },
    ];

    println!("head: {:?}", head(&users));
    println!("tail: {:?}", tail(&users));
    println!("zip:  {:?}", zip(&users, &["a", "b", "c"]));

    let mut groups: Vec<_> = group_by(&users, |u| u.role).into_iter().collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    for (role, members) in groups {
        let names: Vec<&str> = members.iter().map(|u| u.name).collect();
        let ids: Vec<u32> = members.iter().map(|u| u.id).collect();
        println!("{role}: {names:?} {ids:?}");
    }

    println!("\n=== Example Complete ===");
}
