use insta::assert_snapshot;
use mathbox::{Mode, PrettyPrint, RenderConfig, Renderer};

#[test]
fn config_from_toml() {
    let config: RenderConfig = toml::from_str(
        r##"
        pretty-print = "always"
        max-expand = 50
        error-color = "#00f"

        [macros]
        R = '\mathbb{R}'
        abs = '\left|#1\right|'
        "##,
    )
    .unwrap();
    assert_eq!(config.pretty_print, PrettyPrint::Always);
    assert_eq!(config.max_expand, 50);
    assert_eq!(config.max_input_len, RenderConfig::default().max_input_len);
    assert_eq!(
        config.macros,
        [
            ("R".to_string(), r"\mathbb{R}".to_string()),
            ("abs".to_string(), r"\left|#1\right|".to_string()),
        ]
    );

    let renderer = Renderer::new(config).unwrap();
    let result = renderer.render(r"\abs{x} \in \R \nope", Mode::INLINE_WARN).unwrap();
    assert_eq!(result.warnings.len(), 1);
    assert!(result.markup.contains('\n'));
    assert!(result.markup.contains("color:#0000ff;"));
    assert!(result.markup.contains(r#"<span class="mord amsrm">R</span>"#));
}

#[test]
fn config_macros() {
    let config = RenderConfig {
        macros: vec![
            ("half".to_string(), r"\frac{1}{2}".to_string()),
            ("pair".to_string(), r"(#1, #2)".to_string()),
        ],
        ..Default::default()
    };
    let renderer = Renderer::new(config).unwrap();
    let (with_macro, _) = renderer.parse(r"\pair{a}{\half}").unwrap();
    let (expanded, _) = renderer.parse(r"(a, \frac{1}{2})").unwrap();
    assert_eq!(with_macro, expanded);

    // Definitions in the input take precedence.
    let (redefined, _) = renderer
        .parse(r"\renewcommand{\half}{h} \half")
        .unwrap();
    let (plain, _) = renderer.parse("h").unwrap();
    assert_eq!(redefined, plain);
}

#[test]
fn invalid_config_macro() {
    let config = RenderConfig {
        macros: vec![
            ("ok".to_string(), "x".to_string()),
            ("mycmd".to_string(), r"\sqrt{#}".to_string()),
        ],
        ..Default::default()
    };
    let (err, idx, definition) = Renderer::new(config).unwrap_err();
    assert_eq!(idx, 1);
    assert_eq!(definition, r"\sqrt{#}");
    assert_snapshot!(
        err.error_message(),
        @"Invalid macro definition: '#' must be followed by a parameter number or '#'."
    );

    let config = RenderConfig {
        macros: vec![("two words".to_string(), "x".to_string())],
        ..Default::default()
    };
    assert_eq!(Renderer::new(config).unwrap_err().1, 0);
}
