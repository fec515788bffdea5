use super::*;

fn stack_after(line: &str) -> Vec<isize> {
    let mut r = runtime();
    r.enter(line);
    assert_eq!(run(&mut r), "");
    r.stack().to_vec()
}

#[test]
fn test_stack_effects() {
    assert_eq!(stack_after("1 dup"), vec![1, 1]);
    assert_eq!(stack_after("1 2 drop"), vec![1]);
    assert_eq!(stack_after("1 2 swap"), vec![2, 1]);
    assert_eq!(stack_after("1 2 3 rot"), vec![2, 3, 1]);
    assert_eq!(stack_after("1 2 3 -rot"), vec![3, 1, 2]);
    assert_eq!(stack_after("1 2 over"), vec![1, 2, 1]);
    assert_eq!(stack_after("1 2 tuck"), vec![2, 1, 2]);
    assert_eq!(stack_after("9 1 2 3 rot -rot"), vec![9, 1, 2, 3]);
}

#[test]
fn test_underflow_leaves_stack_alone() {
    let needs = [
        ("dup", 1),
        ("drop", 1),
        ("swap", 2),
        ("over", 2),
        ("tuck", 2),
        ("rot", 3),
        ("-rot", 3),
        (".", 1),
        ("emit", 1),
        ("+", 2),
        ("<", 2),
    ];
    for (word, depth) in needs.iter() {
        for have in 0..*depth {
            let mut r = runtime();
            let literals: Vec<String> = (0..have).map(|n| n.to_string()).collect();
            r.enter(&format!("{} {}", literals.join(" "), word));
            assert_eq!(fatal(&mut r), Some(ErrorCode::StackUnderflow), "{}", word);
            assert_eq!(r.stack().len(), have, "{}", word);
        }
    }
}

#[test]
fn test_operand_order() {
    assert_eq!(stack_after("7 2 -"), vec![5]);
    assert_eq!(stack_after("7 2 /"), vec![3]);
    assert_eq!(stack_after("-7 2 /"), vec![-3]);
    assert_eq!(stack_after("7 -2 /"), vec![-3]);
    assert_eq!(stack_after("6 7 *"), vec![42]);
    assert_eq!(stack_after("2 7 <"), vec![1]);
    assert_eq!(stack_after("2 7 >"), vec![0]);
    assert_eq!(stack_after("3 3 = 3 4 ="), vec![1, 0]);
}

#[test]
fn test_arithmetic_wraps() {
    let max = isize::MAX.to_string();
    assert_eq!(stack_after(&format!("{} 1 +", max)), vec![isize::MIN]);
    let min = isize::MIN.to_string();
    assert_eq!(stack_after(&format!("{} -1 /", min)), vec![isize::MIN]);
}

#[test]
fn test_division_by_zero() {
    let mut r = runtime();
    r.enter("1 . 5 0 / 2 .");
    assert_eq!(run(&mut r), "1\ndivision by zero\n");
}

#[test]
fn test_numeral_round_trip() {
    for numeral in &["42", "0x2A", "052"] {
        let mut r = runtime();
        r.enter(&format!("{} .", numeral));
        assert_eq!(run(&mut r), "42\n");
    }
}

#[test]
fn test_data_stack_overflow() {
    let mut r = Runtime::with_seed(
        Limits {
            data_stack: 2,
            ..Limits::default()
        },
        0,
    );
    r.enter("1 2");
    assert_eq!(fatal(&mut r), None);
    r.enter("3");
    assert_eq!(fatal(&mut r), Some(ErrorCode::StackOverflow));
    assert_eq!(r.stack(), &[1, 2]);
}

#[test]
fn test_emit_low_byte() {
    let mut r = runtime();
    r.enter("72 emit 105 emit 328 emit");
    assert_eq!(run(&mut r), "HiH");
}

#[test]
fn test_key_reads_input_then_minus_one() {
    let mut r = runtime();
    r.enter("key key key . . .");
    assert_eq!(run_input(&mut r, b"ab"), "-1\n98\n97\n");
}

#[test]
fn test_stack_persists_across_lines() {
    let mut r = runtime();
    r.enter("20 22");
    assert_eq!(run(&mut r), "");
    r.enter("+ .");
    assert_eq!(run(&mut r), "42\n");
    assert!(r.stack().is_empty());
}
