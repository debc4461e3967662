//! Scenario tests for full provisioning runs

mod failure_handling;
mod success_chain;
