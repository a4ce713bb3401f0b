use nestcss::{
    CompiledUnit, Program, RenderError, RuleSink, RuleUnit, RuntimeInstance, StyleSheetBuffer,
    Variables, compile_source,
};

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs.iter().copied().collect()
}

fn instantiate(source: &str) -> RuntimeInstance<StyleSheetBuffer> {
    let program = compile_source(source).expect("stylesheet should compile");
    RuntimeInstance::new(program, StyleSheetBuffer::new()).expect("initial render should succeed")
}

#[test]
fn test_initial_render_emits_parent_before_nested() {
    let instance = instantiate(
        r#"
        $color: red;
        .box { color: $color; .inner { width: 10px; } }
        "#,
    );
    assert_eq!(
        instance.sink().rules(),
        [".box { color: red }", ".box .inner { width: 10px }"]
    );
}

#[test]
fn test_declarations_are_joined_with_semicolons() {
    let instance = instantiate(".a { color: red; width: 1px; }");
    assert_eq!(instance.sink().rules(), [".a { color: red;width: 1px }"]);
}

#[test]
fn test_multi_selector_groups_expand_at_every_level() {
    let instance = instantiate(".a, .b { .c { color: red; } }");
    assert_eq!(
        instance.sink().rules(),
        [".a .c { color: red }", ".b .c { color: red }"]
    );
}

#[test]
fn test_triple_nesting_cross_product() {
    let instance = instantiate("x { y1, y2 { z { top: 0; } } }");
    assert_eq!(
        instance.sink().rules(),
        ["x y1 z { top: 0 }", "x y2 z { top: 0 }"]
    );
}

#[test]
fn test_empty_units_emit_nothing() {
    let instance = instantiate(".a { .b { } }\n.c { }");
    assert!(instance.sink().is_empty());
}

#[test]
fn test_nested_rules_follow_parent_before_next_sibling() {
    let instance = instantiate(".a { top: 0; .b { top: 1; } } .c { top: 2; }");
    assert_eq!(
        instance.sink().rules(),
        [".a { top: 0 }", ".a .b { top: 1 }", ".c { top: 2 }"]
    );
}

#[test]
fn test_override_replaces_rules() {
    let mut instance = instantiate("$color: red;\n.box { color: $color; }");
    instance
        .render_with_variables(&vars(&[("$color", "blue")]))
        .unwrap();
    assert_eq!(instance.sink().rules(), [".box { color: blue }"]);
    assert_eq!(instance.original_variables().get("$color"), Some("red"));
}

#[test]
fn test_override_is_idempotent() {
    let mut instance = instantiate("$a: 1px;\n.x { margin: $a; .y { padding: $a; } }");
    let overrides = vars(&[("$a", "2px")]);

    instance.render_with_variables(&overrides).unwrap();
    let first = instance.sink().clone();
    instance.render_with_variables(&overrides).unwrap();

    assert_eq!(instance.sink(), &first);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_overrides_never_compound() {
    let mut instance = instantiate("$b: 0;\n.x { top: $b; }");

    instance.render_with_variables(&vars(&[("$a", "1")])).unwrap();
    assert_eq!(instance.variables().get("$a"), Some("1"));

    instance.render_with_variables(&vars(&[("$b", "2")])).unwrap();
    assert_eq!(instance.variables().get("$a"), None);
    assert_eq!(instance.variables().get("$b"), Some("2"));
    assert_eq!(instance.sink().rules(), [".x { top: 2 }"]);
}

#[test]
fn test_override_names_without_sigil() {
    let mut instance = instantiate("$color: red;\n.box { color: $color; }");
    instance
        .render_with_variables(&vars(&[("color", "green")]))
        .unwrap();
    assert_eq!(instance.sink().rules(), [".box { color: green }"]);
}

#[test]
fn test_unknown_variable_fails_construction() {
    let program = compile_source(".a { color: $undefined; }").unwrap();
    let err = RuntimeInstance::new(program, StyleSheetBuffer::new()).unwrap_err();
    assert_eq!(err, RenderError::UnknownVariable("$undefined".into()));
}

#[test]
fn test_unknown_variable_halts_pass_and_keeps_emitted_rules() {
    let program = Program::new(
        vars(&[("$ok", "red")]),
        vec![
            RuleUnit::new(vec![".first".into()]).with_declaration("color", "$ok"),
            RuleUnit::new(vec![".second".into()]).with_declaration("color", "$late"),
            RuleUnit::new(vec![".third".into()]).with_declaration("color", "blue"),
        ],
    );

    let mut buffer = StyleSheetBuffer::new();
    let err = RuntimeInstance::new(program, &mut buffer).unwrap_err();
    assert_eq!(err, RenderError::UnknownVariable("$late".into()));
    assert_eq!(buffer.rules(), [".first { color: red }"]);
}

#[test]
fn test_unknown_variable_aborts_before_any_selector_of_that_rule() {
    let program = Program::new(
        Variables::new(),
        vec![RuleUnit::new(vec![".a".into(), ".b".into()])
            .with_declaration("top", "0")
            .with_declaration("color", "$missing")],
    );

    let mut buffer = StyleSheetBuffer::new();
    assert!(RuntimeInstance::new(program, &mut buffer).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_dispose_clears_and_returns_sink() {
    let instance = instantiate(".a { top: 0; } .b { top: 1; }");
    assert_eq!(instance.sink().len(), 2);

    let sink = instance.dispose();
    assert!(sink.is_empty());
}

#[test]
fn test_borrowed_sink_sees_rerender() {
    let mut buffer = StyleSheetBuffer::new();
    {
        let program = compile_source("$w: 1px;\np { width: $w; }").unwrap();
        let mut instance = RuntimeInstance::new(program, &mut buffer).unwrap();
        instance.render_with_variables(&vars(&[("$w", "3px")])).unwrap();
    }
    assert_eq!(buffer.rules(), ["p { width: 3px }"]);
}

#[test]
fn test_from_units_requires_initializer_first() {
    let units = vec![CompiledUnit::Rule(RuleUnit::new(vec![".a".into()]))];
    let err = RuntimeInstance::from_units(units, StyleSheetBuffer::new()).unwrap_err();
    assert!(matches!(err, RenderError::MalformedProgram(_)));

    let units = vec![
        CompiledUnit::VariableInitializer(vars(&[("$w", "1px")])),
        CompiledUnit::Rule(RuleUnit::new(vec!["p".into()]).with_declaration("width", "$w")),
    ];
    let instance = RuntimeInstance::from_units(units, StyleSheetBuffer::new()).unwrap();
    assert_eq!(instance.sink().rules(), ["p { width: 1px }"]);
}
