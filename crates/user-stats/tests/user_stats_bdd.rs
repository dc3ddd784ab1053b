//! Behavioural tests for the user-stats crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering filtering, grouping, averaging equivalence, dataset parsing, and
//! record validation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "tolerance comparisons need float subtraction"
)]

use std::collections::HashMap;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use user_stats::{
    DatasetError, InvalidRecord, User, average_age_by_city, average_age_by_city_fold,
    filter_by_age_and_city, group_by_city, sample_users, users_from_json, validate_users,
};

const TOLERANCE: f64 = 1e-9;

/// Test world holding the dataset under test and computed results.
#[derive(Default, ScenarioState)]
struct World {
    dataset: Slot<Vec<User>>,
    json_input: Slot<String>,
    parse_result: Slot<Result<Vec<User>, DatasetError>>,
    validation_result: Slot<Result<(), InvalidRecord>>,
    filtered: Slot<Vec<User>>,
    groups: Slot<HashMap<String, Vec<User>>>,
    two_pass_averages: Slot<HashMap<String, f64>>,
    single_pass_averages: Slot<HashMap<String, f64>>,
}

impl World {
    /// Extracts the dataset from the world state.
    fn dataset(&self) -> Vec<User> {
        self.dataset.get().expect("dataset should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the sample user dataset")]
fn the_sample_user_dataset(world: &World) {
    world.dataset.set(sample_users());
}

#[given("malformed dataset JSON")]
fn malformed_dataset_json(world: &World) {
    world.json_input.set("not valid json".to_owned());
}

#[given("a dataset containing a nameless user")]
fn a_dataset_containing_a_nameless_user(world: &World) {
    world.dataset.set(vec![
        User::new("Alice", 25, "Moscow"),
        User::new("", 30, "SPb"),
    ]);
}

// ============================================================================
// When steps
// ============================================================================

#[when("users older than 18 in Moscow are selected")]
fn users_older_than_18_in_moscow_are_selected(world: &World) {
    let dataset = world.dataset();
    world
        .filtered
        .set(filter_by_age_and_city(&dataset, 18, "Moscow"));
}

#[when("users are grouped by city")]
fn users_are_grouped_by_city(world: &World) {
    let dataset = world.dataset();
    world.groups.set(group_by_city(&dataset));
}

#[when("average ages are computed with both strategies")]
fn average_ages_are_computed_with_both_strategies(world: &World) {
    let dataset = world.dataset();
    world.two_pass_averages.set(average_age_by_city(&dataset));
    world
        .single_pass_averages
        .set(average_age_by_city_fold(&dataset));
}

#[when("the dataset is parsed")]
fn the_dataset_is_parsed(world: &World) {
    let json_opt = world.json_input.get();
    let json = json_opt.expect("JSON input should be set");
    world.parse_result.set(users_from_json(&json));
}

#[when("the dataset is validated")]
fn the_dataset_is_validated(world: &World) {
    let dataset = world.dataset();
    world.validation_result.set(validate_users(&dataset));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the selection contains exactly Alice and Charlie in order")]
fn the_selection_contains_exactly_alice_and_charlie_in_order(world: &World) {
    let filtered = world.filtered.get().expect("selection should be set");
    let names: Vec<String> = filtered.iter().map(|user| user.name.clone()).collect();
    assert_eq!(names, ["Alice", "Charlie"]);
}

#[then("every user appears in exactly one group")]
fn every_user_appears_in_exactly_one_group(world: &World) {
    let dataset = world.dataset();
    let groups = world.groups.get().expect("groups should be set");

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, dataset.len(), "groups must partition the input");

    for user in &dataset {
        let group = groups.get(&user.city).expect("user's city should be a key");
        assert!(group.contains(user), "user missing from its group: {user:?}");
    }
}

#[then("both strategies produce identical averages")]
fn both_strategies_produce_identical_averages(world: &World) {
    let two_pass = world.two_pass_averages.get().expect("two-pass averages");
    let single_pass = world
        .single_pass_averages
        .get()
        .expect("single-pass averages");

    assert_eq!(two_pass.len(), single_pass.len());
    for (city, expected) in &two_pass {
        let actual = single_pass.get(city).expect("city present in both");
        assert!((actual - expected).abs() < TOLERANCE, "mismatch for {city}");
    }
}

#[then("the Moscow average is 27.5")]
fn the_moscow_average_is_27_5(world: &World) {
    let averages = world.two_pass_averages.get().expect("averages should be set");
    let moscow = averages.get("Moscow").expect("Moscow should be present");
    assert!((moscow - 27.5).abs() < TOLERANCE);
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    let result = world.parse_result.get().expect("parse result should be set");
    assert!(matches!(result, Err(DatasetError::Parse { .. })));
}

#[then("validation reports an empty name at index 1")]
fn validation_reports_an_empty_name_at_index_1(world: &World) {
    let result = world
        .validation_result
        .get()
        .expect("validation result should be set");
    assert_eq!(result, Err(InvalidRecord::EmptyName { index: 1 }));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/user_stats.feature",
    name = "Filtering selects adults in the requested city"
)]
fn filtering_selects_adults_in_the_requested_city(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_stats.feature",
    name = "Grouping partitions users by city"
)]
fn grouping_partitions_users_by_city(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_stats.feature",
    name = "Both averaging strategies agree"
)]
fn both_averaging_strategies_agree(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_stats.feature",
    name = "Malformed dataset JSON is rejected"
)]
fn malformed_dataset_json_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_stats.feature",
    name = "Validation pinpoints the first invalid record"
)]
fn validation_pinpoints_the_first_invalid_record(world: World) {
    let _ = world;
}
