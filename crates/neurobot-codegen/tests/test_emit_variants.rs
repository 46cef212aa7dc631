// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/// Integration tests for C source emission of the shipped variants
use ndarray::Array2;
use neurobot_codegen::{dump_source, dump_source_to_path, render_source, EmitError};
use neurobot_cpg::{ActivationPolicy, CpgNetwork, FeedbackGains, FeedbackPolicy, Variant};
use neurobot_neural::PresetTable;
use tempfile::TempDir;

fn build(variant: Variant) -> CpgNetwork {
    CpgNetwork::for_variant(
        variant,
        &variant.default_gains(),
        &FeedbackGains::default(),
        &PresetTable::default(),
    )
    .expect("Failed to build network")
}

fn weight_lines(source: &str) -> Vec<&str> {
    source.lines().filter(|l| l.starts_with('\t')).collect()
}

#[test]
fn test_single_source_contents() {
    let source = render_source(&build(Variant::Single)).unwrap();

    assert!(source.starts_with("#include \"libneurobot.h\"\n\n#define N_CELLS 16\n"));
    assert!(source.ends_with("};\n"));

    let weights = weight_lines(&source);
    assert_eq!(weights.len(), 36);
    assert!(weights.contains(&"\t[1][0] = 20.0,"));
    assert!(weights.contains(&"\t[0][10] = 10.0,"));
    assert!(weights.contains(&"\t[2][3] = 8.0,"));
    assert!(weights.contains(&"\t[12][1] = 1.0,"));

    // One pointer per cell, muscles typed excitatory
    assert_eq!(source.matches("] = &").count(), 16);
    assert!(source.contains("  [15] = &RS,\n"));
    assert!(source.contains("  [2] = &LTS,\n"));
}

#[test]
fn test_weights_are_row_major() {
    let source = render_source(&build(Variant::Double)).unwrap();
    let positions: Vec<(usize, usize)> = weight_lines(&source)
        .iter()
        .map(|line| {
            let inner: Vec<usize> = line
                .trim()
                .trim_start_matches('[')
                .split(|c| c == '[' || c == ']')
                .filter_map(|part| part.parse().ok())
                .collect();
            (inner[0], inner[1])
        })
        .collect();

    assert_eq!(positions.len(), 72);
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(source.contains("\t[0][2] = -1000.0,\n"));
}

#[test]
fn test_one_params_block_per_type() {
    let source = render_source(&build(Variant::DoubleFeedback)).unwrap();
    assert_eq!(source.matches("const struct params RS = {").count(), 1);
    assert_eq!(source.matches("const struct params LTS = {").count(), 1);
    // RS appears first because cell 0 is excitatory
    assert!(source.find("params RS").unwrap() < source.find("params LTS").unwrap());
}

#[test]
fn test_all_excitatory_network_has_single_block() {
    let network = CpgNetwork::from_parts(
        Array2::zeros((3, 3)),
        &[true, true],
        2,
        &PresetTable::default(),
        ActivationPolicy::Raw,
        FeedbackPolicy::None,
    )
    .unwrap();
    let source = render_source(&network).unwrap();
    assert!(!source.contains("LTS"));
    // Empty matrix still closes the initializer
    assert!(source.ends_with("const float G[N_CELLS][N_CELLS] = {\n};\n"));
}

#[test]
fn test_emission_is_deterministic() {
    let first = render_source(&build(Variant::Single)).unwrap();
    let second = render_source(&build(Variant::Single)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dump_to_path_matches_writer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cpg.c");
    let network = build(Variant::SingleFeedback);

    dump_source_to_path(&network, &path).unwrap();

    let mut buffer = Vec::new();
    dump_source(&network, &mut buffer).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), buffer);
}

#[test]
fn test_invalid_network_leaves_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cpg.c");

    let mut matrix = Array2::zeros((2, 2));
    matrix[[0, 1]] = f32::INFINITY;
    let network = CpgNetwork::from_parts(
        matrix,
        &[true, false],
        2,
        &PresetTable::default(),
        ActivationPolicy::Raw,
        FeedbackPolicy::None,
    )
    .unwrap();

    let result = dump_source_to_path(&network, &path);
    assert!(matches!(result, Err(EmitError::NonFinite { .. })));
    assert!(!path.exists());
}
