//! Truth-table integration tests: enumeration order, analysis, renderings

use propforge::{
    equivalent, evaluate, parse, truth_table, Assignment, TruthTableError,
    MAX_TRUTH_TABLE_VARIABLES,
};

#[test]
fn rows_enumerate_high_bit_first() {
    let table = truth_table(&parse("p | q").unwrap()).unwrap();
    assert_eq!(table.variables, vec!["p".to_string(), "q".to_string()]);
    let assignments: Vec<(bool, bool)> = table
        .rows
        .iter()
        .map(|row| (row.assignment["p"], row.assignment["q"]))
        .collect();
    assert_eq!(
        assignments,
        vec![(false, false), (false, true), (true, false), (true, true)]
    );
}

#[test]
fn variables_sort_ascending_regardless_of_appearance() {
    let table = truth_table(&parse("z & a & m").unwrap()).unwrap();
    assert_eq!(
        table.variables,
        vec!["a".to_string(), "m".to_string(), "z".to_string()]
    );
    assert_eq!(table.rows.len(), 8);
}

#[test]
fn satisfiable_count_matches_direct_evaluation() {
    let expr = parse("(a => b) & (b => c)").unwrap();
    let table = truth_table(&expr).unwrap();
    let analysis = table.analyze();

    let mut expected = 0;
    for row in &table.rows {
        if evaluate(&expr, &row.assignment).unwrap() {
            expected += 1;
        }
    }
    assert_eq!(analysis.satisfiable_count, expected);
    assert_eq!(analysis.total_rows, 8);
    assert!(analysis.is_contingent);
}

#[test]
fn extreme_counts_mean_tautology_or_contradiction() {
    let taut = truth_table(&parse("p => p").unwrap()).unwrap().analyze();
    assert_eq!(taut.satisfiable_count, taut.total_rows);
    assert!(taut.is_tautology);

    let contr = truth_table(&parse("p & !p").unwrap()).unwrap().analyze();
    assert_eq!(contr.satisfiable_count, 0);
    assert!(contr.is_contradiction);
}

#[test]
fn variable_cap_is_fifteen() {
    let within: Vec<String> = (0..MAX_TRUTH_TABLE_VARIABLES)
        .map(|i| format!("x{:02}", i))
        .collect();
    let expr = parse(&within.join(" | ")).unwrap();
    assert!(truth_table(&expr).is_ok());

    let beyond: Vec<String> = (0..MAX_TRUTH_TABLE_VARIABLES + 1)
        .map(|i| format!("x{:02}", i))
        .collect();
    let expr = parse(&beyond.join(" | ")).unwrap();
    assert!(matches!(
        truth_table(&expr),
        Err(TruthTableError::TooManyVariables(16))
    ));
}

#[test]
fn csv_uses_binary_cells_and_lf_rows() {
    let table = truth_table(&parse("a | b").unwrap()).unwrap();
    assert_eq!(table.to_csv(), "a,b,Result\n0,0,0\n0,1,1\n1,0,1\n1,1,1\n");
}

#[test]
fn rendered_text_has_a_dashed_separator() {
    let table = truth_table(&parse("ok & b").unwrap()).unwrap();
    let text = table.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "b | ok | Result");
    assert_eq!(lines[1], "-".repeat(lines[0].len()));
    assert_eq!(lines[2], "F | F  | F");
    assert_eq!(lines[5], "T | T  | T");
    assert_eq!(lines.len(), 6);
}

#[test]
fn equivalence_failures_and_unions() {
    // Same function over different alphabets is still equivalent.
    assert!(equivalent(
        &parse("a").unwrap(),
        &parse("a & (b | !b)").unwrap()
    ));
    // Contingent disagreement is detected.
    assert!(!equivalent(&parse("a | b").unwrap(), &parse("a & b").unwrap()));
    // Tautologies of disjoint alphabets are equivalent.
    assert!(equivalent(
        &parse("a | !a").unwrap(),
        &parse("b => b").unwrap()
    ));
}

#[test]
fn evaluation_requires_a_total_assignment() {
    let expr = parse("a & b").unwrap();
    let mut assignment = Assignment::new();
    assignment.insert("a".to_string(), true);
    let err = evaluate(&expr, &assignment).unwrap_err();
    assert_eq!(err.name, "b");
}
