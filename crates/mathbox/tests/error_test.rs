use mathbox::{Mode, RenderConfig, Renderer, render};

#[test]
fn messages() {
    let problems = [
        ("sup_sup", "x^2^3", "Double superscript on the same base."),
        ("sub_sub", "x_2_3", "Double subscript on the same base."),
        ("curly_close_without_open", "}", r#"Unmatched closing token: "}"."#),
        ("unclosed_brace", "{", "Unexpected end of input."),
        ("incomplete_sup", "x^", "Unexpected end of input."),
        ("sup_closed", "{x^}", r#"Expected an argument, got "}"."#),
        ("unclosed_left", r"\left( x", r"Missing \right for \left."),
        (
            "right_without_left",
            r"x \right)",
            r#"Unmatched closing token: "\right"."#,
        ),
        (
            "unsupported_environment",
            r"\begin{xmatrix} 1 \end{xmatrix}",
            r#"Unknown environment "xmatrix"."#,
        ),
        (
            "mismatched_begin_end",
            r"\begin{matrix} 1 \end{bmatrix}",
            r#"Expected "\end{matrix}", but got "\end{bmatrix}"."#,
        ),
        (
            "ampersand_outside_array",
            "x & y",
            r#""&" may only appear inside an array."#,
        ),
        (
            "unknown_color",
            r"\color{nocolor} x",
            r#"Unknown color "nocolor"."#,
        ),
        (
            "hspace_unknown_unit",
            r"\hspace{2ly}",
            r#"Expected length with units, got "2ly"."#,
        ),
        (
            "bad_column_spec",
            r"\begin{array}{cx} 1 \end{array}",
            r#"Expected column specification, got "cx"."#,
        ),
    ];
    for (name, source, message) in problems {
        let err = render(source, false, true).unwrap_err();
        assert_eq!(err.error_message(), message, "{name}: {source}");
    }
}

#[test]
fn recursive_macros_stop() {
    for source in [
        r"\def\a{\a}\a",
        r"\newcommand{\loop}{x\loop}\loop",
        r"\def\a{{\a}}\a",
        r"\def\a{\frac1\a}\a",
    ] {
        let err = render(source, false, false).unwrap_err();
        assert!(
            err.error_message().starts_with("Too many macro expansions"),
            "{source}: {err}"
        );
    }
    let config = RenderConfig {
        macros: vec![("a".to_string(), r"\b".to_string()), ("b".to_string(), r"\a".to_string())],
        max_expand: 10,
        ..Default::default()
    };
    let renderer = Renderer::new(config).unwrap();
    let err = renderer.render(r"\a", Mode::INLINE).unwrap_err();
    assert!(err.error_message().contains("Is the macro recursive?"));
}

#[test]
fn invalid_definitions() {
    let err = render(r"\newcommand{x}{y}", false, false).unwrap_err();
    assert!(err.error_message().starts_with("Invalid macro definition"));
    let err = render(r"\newcommand{\f}[1]{#2}", false, false).unwrap_err();
    assert_eq!(
        err.error_message(),
        "Invalid macro definition: parameter numbers must be 1-9 and in order."
    );
}

#[test]
fn html_snippet() {
    let source = r"\frac{a<b}";
    let err = render(source, true, false).unwrap_err();
    let html = err.to_html(source, Mode::DISPLAY, None);
    assert!(html.starts_with(r#"<p class="mathbox-error" title=""#));
    assert!(html.ends_with(r"<code>\frac{a&lt;b}</code></p>"));
}

#[test]
fn report() {
    let source = "x^2^3";
    let err = render(source, false, false).unwrap_err();
    let mut buf = Vec::new();
    err.to_report("formula", false)
        .write(("formula", ariadne::Source::from(source)), &mut buf)
        .unwrap();
    let report = String::from_utf8(buf).unwrap();
    assert!(report.contains("Double superscript on the same base."));
    assert!(report.contains("second superscript"));
}
