use human_distance::prelude::*;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn breakdown(result: &DistanceResult) -> (usize, usize, usize, usize) {
    (
        result.insertions(),
        result.deletions(),
        result.substitutions(),
        result.transpositions(),
    )
}

#[test]
fn test_operation_breakdowns() {
    let cases = [
        ("kitten", "sitting", 3, (1, 0, 2, 0)),
        ("saturday", "sunday", 3, (0, 2, 1, 0)),
        ("abc", "cba", 2, (0, 0, 2, 0)),
        ("test", "toast", 2, (1, 0, 1, 0)),
        ("abc", "bad", 2, (0, 0, 1, 1)),
        ("password", "pasword", 1, (0, 1, 0, 0)),
        ("password", "Password", 0, (0, 0, 0, 0)),
        ("password", "passowrd", 1, (0, 0, 0, 1)),
        ("password", "p4ssword", 1, (0, 0, 1, 0)),
    ];

    for (source, target, distance, expected) in cases {
        let result = calculate(source, target, LayoutKind::Qwerty);
        assert_eq!(result.edit_distance(), distance, "{source} -> {target}");
        assert_eq!(breakdown(&result), expected, "{source} -> {target}");
    }
}

#[test]
fn test_empty_inputs() {
    let both = calculate("", "", LayoutKind::Qwerty);
    assert_eq!(both.edit_distance(), 0);
    assert_eq!(both.max_length(), 0);
    assert_eq!(both.keyboard_distance_sum(), 0.0);

    let inserted = calculate("", "hello", LayoutKind::Qwerty);
    assert_eq!(inserted.edit_distance(), 5);
    assert_eq!(inserted.insertions(), 5);
    assert_eq!(inserted.deletions(), 0);

    let deleted = calculate("hello", "", LayoutKind::Qwerty);
    assert_eq!(deleted.edit_distance(), 5);
    assert_eq!(deleted.insertions(), 0);
    assert_eq!(deleted.deletions(), 5);
    assert_eq!(deleted.typo_score(0.5), 0.0);
}

#[test]
fn test_known_keyboard_distances() {
    let cases = [
        (LayoutKind::Qwerty, "abc", "adc", 0.2147205770015717),
        (LayoutKind::Qwerty, "a", "z", 0.08915787190198898),
        (LayoutKind::Azerty, "abc", "adc", 0.22438186407089233),
        (LayoutKind::Azerty, "a", "z", 0.0833333358168602),
        (LayoutKind::Qwertz, "abc", "adc", 0.22438186407089233),
        (LayoutKind::Qwertz, "a", "z", 0.40451017022132874),
    ];

    for (layout, source, target, expected) in cases {
        let result = calculate(source, target, layout);
        assert_eq!(result.edit_distance(), 1, "{layout}: {source} -> {target}");
        assert_eq!(result.substitutions(), 1);
        assert_close(result.keyboard_distance_sum(), expected);
    }
}

#[test]
fn test_transposition_with_substitution_sums_only_substitution() {
    let result = calculate("abc", "bad", LayoutKind::Qwerty);
    assert_eq!(result.transpositions(), 1);
    assert_eq!(result.substitutions(), 1);
    assert_close(result.keyboard_distance_sum(), 0.08915787190198898);
}

#[test]
fn test_transpositions_cost_one_on_every_layout() {
    let cases = [
        (LayoutKind::Qwerty, "ab", "ba"),
        (LayoutKind::Qwerty, "qp", "pq"),
        (LayoutKind::Azerty, "az", "za"),
        (LayoutKind::Azerty, "qm", "mq"),
        (LayoutKind::Qwertz, "ab", "ba"),
        (LayoutKind::Qwertz, "qp", "pq"),
    ];

    for (layout, source, target) in cases {
        let result = calculate(source, target, layout);
        assert_eq!(result.edit_distance(), 1);
        assert_eq!(result.transpositions(), 1);
        assert_eq!(result.substitutions(), 0);
        assert_eq!(keyboard_distance(source, target, layout), 1.0);
    }
}

#[test]
fn test_neighbouring_keys_are_cheaper() {
    let cases = [
        (LayoutKind::Qwerty, "a", "s", "a", "p"),
        (LayoutKind::Qwerty, "q", "w", "q", "m"),
        (LayoutKind::Azerty, "a", "z", "a", "p"),
        (LayoutKind::Azerty, "q", "s", "q", "m"),
        (LayoutKind::Qwertz, "a", "s", "a", "p"),
        (LayoutKind::Qwertz, "q", "w", "q", "m"),
    ];

    for (layout, near_source, near_target, far_source, far_target) in cases {
        let near = calculate(near_source, near_target, layout);
        let far = calculate(far_source, far_target, layout);
        assert!(
            near.keyboard_distance_sum() < far.keyboard_distance_sum(),
            "{layout}: {near_source}{near_target} should be closer than {far_source}{far_target}"
        );
        assert!(keyboard_distance(near_source, near_target, layout) < keyboard_distance(far_source, far_target, layout));
    }
}

#[test]
fn test_unmapped_characters_cost_full_edit() {
    for layout in LayoutKind::ALL {
        let result = calculate("a", "α", layout);
        assert_eq!(result.edit_distance(), 1);
        assert_eq!(result.keyboard_distance_sum(), 1.0);
        assert_eq!(keyboard_distance("a", "α", layout), 1.0);
    }
}

#[test]
fn test_case_insensitive_everywhere() {
    for layout in LayoutKind::ALL {
        assert!(calculate("Hello", "hello", layout).is_exact());
        assert_eq!(keyboard_distance("Hello", "hELLO", layout), 0.0);
        assert_eq!(calculate("HELLO", "hello", layout).typo_score(0.5), 1.0);
    }
    assert_eq!(edit_distance("TeSt", "test"), 0);
    assert_eq!(edit_distance("AB", "ba"), 1);
}

#[test]
fn test_documented_typo_examples() {
    let slop = calculate("slip", "slop", LayoutKind::Qwerty);
    let slap = calculate("slip", "slap", LayoutKind::Qwerty);
    assert_eq!(slop.edit_distance(), 1);
    assert_eq!(slap.edit_distance(), 1);
    assert!(slop.is_likely_typo(DEFAULT_KEYBOARD_PENALTY_STRENGTH));
    assert!(!slap.is_likely_typo(DEFAULT_KEYBOARD_PENALTY_STRENGTH));

    assert!(calculate("form", "from", LayoutKind::Qwerty).is_likely_typo(0.5));
    assert!(!calculate("form", "farm", LayoutKind::Qwerty).is_likely_typo(0.5));
    assert!(calculate("reciept", "receipt", LayoutKind::Qwerty).is_likely_typo(0.5));
}

#[test]
fn test_adaptive_threshold_short_words() {
    for (original, typo) in [
        ("git", "gti"),
        ("npm", "nmp"),
        ("the", "teh"),
        ("test", "tset"),
        ("push", "psuh"),
        ("pull", "plul"),
        ("hello", "helo"),
        ("build", "biuld"),
    ] {
        let result = calculate(original, typo, LayoutKind::Qwerty);
        assert!(
            result.is_likely_typo(0.5),
            "{original} -> {typo} scored {}",
            result.typo_score(0.5)
        );
    }

    for (first, second) in [("go", "to"), ("is", "as"), ("on", "in")] {
        let result = calculate(first, second, LayoutKind::Qwerty);
        assert!(!result.is_likely_typo(0.5), "{first} <-> {second}");
    }
}

#[test]
fn test_adaptive_versus_fixed_threshold() {
    let gti = calculate("git", "gti", LayoutKind::Qwerty);
    let score = gti.typo_score(0.5);
    assert_close(score, 2.0 / 3.0);
    assert!(gti.is_likely_typo(0.5));
    assert!(!gti.is_likely_typo_with_threshold(DEFAULT_FIXED_THRESHOLD, 0.5));
    assert!(gti.meets_threshold(Threshold::Adaptive, 0.5));

    let stauts = calculate("status", "stauts", LayoutKind::Qwerty);
    assert!(stauts.is_likely_typo(0.5));

    // Six characters get no adaptive leniency
    let distant = calculate("abcdef", "xbcdef", LayoutKind::Qwerty);
    assert!(distant.typo_score(0.5) < 0.80);
    assert!(!distant.is_likely_typo(0.5));

    let tset = calculate("test", "tset", LayoutKind::Qwerty);
    assert_close(tset.typo_score(0.5), 0.75);
    assert!(tset.is_likely_typo(0.5));
}

#[test]
fn test_penalty_strength() {
    let result = calculate("hello", "hpllo", LayoutKind::Qwerty);
    assert_close(result.typo_score(0.0), 0.8);

    let expected = 0.8 * (1.0 - result.average_keyboard_distance());
    assert_close(result.typo_score(1.0), expected);
    assert!(result.typo_score(1.0) < result.typo_score(0.5));

    assert!(calculate("hello", "world", LayoutKind::Qwerty).typo_score(0.5) < 0.3);
}

#[test]
fn test_best_match_examples() {
    let options = SearchOptions::default();

    assert_eq!(
        best_match("reciepe", ["recipe", "receipt", "record"], LayoutKind::Qwerty, &options),
        Some("recipe")
    );
    assert_eq!(
        best_match("apple", Vec::<&str>::new(), LayoutKind::Qwerty, &options),
        None
    );
    assert_eq!(
        best_match("slop", ["slip", "slap"], LayoutKind::Qwerty, &options),
        Some("slip")
    );
    assert_eq!(
        best_match("reciept", ["receipt", "recipe"], LayoutKind::Qwerty, &options),
        Some("receipt")
    );
    assert_eq!(
        best_match("testin", ["testing", "tasting", "tosting"], LayoutKind::Qwerty, &options),
        Some("testing")
    );
    assert_eq!(
        best_match("Hello", ["hello", "help"], LayoutKind::Qwerty, &options),
        Some("hello")
    );
}

#[test]
fn test_best_match_reciepe_scores() {
    let scores: Vec<f64> = ["recipe", "receipt", "record"]
        .iter()
        .map(|candidate| calculate("reciepe", candidate, LayoutKind::Qwerty).typo_score(0.5))
        .collect();

    assert_close(scores[0], 6.0 / 7.0);
    assert!((scores[1] - 0.657).abs() < 1e-3);
    assert!((scores[2] - 0.354).abs() < 1e-3);
}

#[test]
fn test_best_match_prefers_adjacent_substitutions() {
    let input = "kryboqrd";
    let nearby = calculate(input, "keyboard", LayoutKind::Qwerty);
    let distant = calculate(input, "kpybozrd", LayoutKind::Qwerty);
    assert_eq!(nearby.edit_distance(), 2);
    assert_eq!(distant.edit_distance(), 2);
    assert!(nearby.typo_score(0.5) > distant.typo_score(0.5));

    let options = SearchOptions::default().with_min_score(0.0);
    assert_eq!(
        best_match(input, ["keyboard", "kpybozrd"], LayoutKind::Qwerty, &options),
        Some("keyboard")
    );

    let strict = SearchOptions::default().with_keyboard_penalty_strength(1.0);
    assert_eq!(
        best_match("tesr", ["test", "tesq"], LayoutKind::Qwerty, &strict),
        Some("test")
    );
}

#[test]
fn test_best_match_min_score_boundary() {
    let exact_only = SearchOptions::default().with_min_score(1.0);
    assert_eq!(
        best_match("apple", ["apple", "banana"], LayoutKind::Qwerty, &exact_only),
        Some("apple")
    );
    assert_eq!(
        best_match("apple", ["appel", "aple"], LayoutKind::Qwerty, &exact_only),
        None
    );

    for layout in LayoutKind::ALL {
        assert_eq!(
            best_match("apple", ["banana", "apple"], layout, &SearchOptions::default()),
            Some("apple")
        );
    }
}

#[test]
fn test_custom_mobile_layout() {
    let mobile = CustomLayoutBuilder::new()
        .add_row("qwertyuiop", 0.0, 0.3)
        .add_row("asdfghjkl", 1.0, 0.5)
        .add_row("zxcvbnm", 2.0, 1.1)
        .build();

    let result = calculate("hello", "helo", &mobile);
    assert_eq!(result.edit_distance(), 1);
    assert_eq!(result.deletions(), 1);

    let commands = ["commit", "push", "pull", "status"];
    assert_eq!(
        best_match("commti", commands, &mobile, &SearchOptions::default()),
        Some("commit")
    );

    assert_eq!(
        best_match("xyz", ["abc", "def", "ghi"], &mobile, &SearchOptions::default()),
        None
    );
}

#[test]
fn test_custom_layout_uppercase_rows() {
    let layout = CustomLayoutBuilder::new()
        .add_row("QWE", 0.0, 0.0)
        .add_row("ASD", 1.0, 0.0)
        .build();

    let result = calculate("qa", "QA", &layout);
    assert!(result.is_exact());

    let result = calculate("q", "w", &layout);
    assert_eq!(result.edit_distance(), 1);
    assert!(result.keyboard_distance_sum() < 1.0);

    let result = calculate("q", "z", &layout);
    assert_eq!(result.keyboard_distance_sum(), 1.0);
}

#[test]
fn test_distance_options() {
    let keyboard = DistanceOptions::default();
    let plain = DistanceOptions::plain();

    assert_eq!(plain.distance("abc", "acb"), 1.0);
    assert_eq!(plain.distance("kitten", "sitting"), 3.0);
    assert!(keyboard.distance("abc", "adc") < plain.distance("abc", "adc"));
    assert_eq!(
        keyboard.with_layout(LayoutKind::Azerty).distance("qm", "mq"),
        1.0
    );
}

#[test]
fn test_layout_names() {
    assert_eq!("qwerty".parse::<LayoutKind>(), Ok(LayoutKind::Qwerty));
    assert_eq!("AZERTY".parse::<LayoutKind>(), Ok(LayoutKind::Azerty));
    assert_eq!(LayoutKind::Qwertz.to_string(), "qwertz");

    let err = "dvorak".parse::<LayoutKind>().unwrap_err();
    assert_eq!(err, Error::UnknownLayout("dvorak".to_string()));
    assert!(err.to_string().contains("dvorak"));
}

#[test]
fn test_degenerate_custom_layout() {
    let err = CustomLayoutBuilder::new()
        .add_row("a", 0.0, 0.0)
        .try_build()
        .unwrap_err();
    assert!(matches!(err, Error::DegenerateLayout { .. }));

    let layout = CustomLayoutBuilder::new().add_row("a", 0.0, 0.0).build();
    assert!(layout.is_degenerate());

    let result = calculate("a", "b", &layout);
    assert_eq!(result.keyboard_distance_sum(), 1.0);
    assert!(result.typo_score(0.5).is_finite());
}
